use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::READY_MESSAGE_DURATION;
use crate::state::AppState;

/// First non-flag argument that names a supported image.
fn startup_image_from_args<I>(args: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .skip(1)
        .filter_map(|arg| {
            let arg_str = arg.to_string_lossy();
            if arg_str.starts_with('-') {
                None
            } else {
                Some(PathBuf::from(arg))
            }
        })
        .find(|path| crate::file_utils::is_supported_image(path))
}

/// Pushes the initial state into the window and opens an image passed on
/// the command line, if any.
pub fn configure_startup(app: &crate::AppWindow, app_state: &AppState) {
    crate::ui::apply_snapshot(app, &app_state.viewer.borrow().snapshot());
    crate::ui::show_status(
        app,
        &app_state.status_timer,
        "Ready",
        READY_MESSAGE_DURATION,
    );

    if let Some(path) = startup_image_from_args(std::env::args_os()) {
        log::info!("Opening startup image {}", path.display());
        crate::ui::open_path(app, &app_state.viewer, &app_state.status_timer, path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<OsString> {
        values.iter().map(OsString::from).collect()
    }

    #[test]
    fn picks_first_supported_image_argument() {
        let path = startup_image_from_args(args(&[
            "viewer",
            "--verbose",
            "notes.txt",
            "photo.JPG",
            "other.png",
        ]));
        assert_eq!(path, Some(PathBuf::from("photo.JPG")));
    }

    #[test]
    fn no_image_argument_yields_none() {
        assert_eq!(startup_image_from_args(args(&["viewer"])), None);
        assert_eq!(startup_image_from_args(args(&["viewer", "-x.png"])), None);
    }
}
