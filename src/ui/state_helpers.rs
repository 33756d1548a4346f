//! Helper functions for the status bar and the error dialog.

use crate::error::AppError;
use log::error;
use slint::ComponentHandle;
use std::time::Duration;

/// Shows `message` in the status bar and clears it after `duration`.
///
/// A newer message restarts the timer, so an old one never clears it.
pub fn show_status(
    ui: &crate::AppWindow,
    status_timer: &slint::Timer,
    message: &str,
    duration: Duration,
) {
    ui.global::<crate::ViewState>()
        .set_status_message(message.into());

    let ui_handle = ui.as_weak();
    status_timer.start(slint::TimerMode::SingleShot, duration, move || {
        if let Some(ui) = ui_handle.upgrade() {
            ui.global::<crate::ViewState>()
                .set_status_message("".into());
        }
    });
}

/// Logs the error and opens the error dialog with its message.
pub fn set_error(ui: &crate::AppWindow, err: &AppError) {
    let error_message = err.to_string();
    error!("{}", error_message);
    ui.global::<crate::ViewState>()
        .set_error_message(error_message.into());
}
