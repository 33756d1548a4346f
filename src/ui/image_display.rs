//! Rendering of controller output into the Slint window.
//!
//! The controller hands back decoded pixels and a [`ViewSnapshot`]; this
//! module turns them into `ViewState` properties.

use crate::config::IMAGE_MESSAGE_DURATION;
use crate::image_loader::DecodedImage;
use crate::services::{Displayed, ViewSnapshot};
use crate::ui::state_helpers::{set_error, show_status};
use slint::{ComponentHandle, Image, Rgba8Pixel, SharedPixelBuffer};

/// Converts decoded RGBA8 data into a Slint image.
pub fn create_slint_image(image: &DecodedImage) -> Image {
    let buffer =
        SharedPixelBuffer::<Rgba8Pixel>::clone_from_slice(&image.rgba, image.width, image.height);
    Image::from_rgba8(buffer)
}

/// Puts a newly displayed image on screen and announces it in the status bar.
pub fn show_image(ui: &crate::AppWindow, status_timer: &slint::Timer, displayed: &Displayed) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_dynamic_image(create_slint_image(&displayed.image));
    view_state.set_image_width(displayed.image.width as i32);
    view_state.set_image_height(displayed.image.height as i32);

    show_status(
        ui,
        status_timer,
        &format!("Image: {}", displayed.path.display()),
        IMAGE_MESSAGE_DURATION,
    );
}

/// Mirrors the controller's derived state into the window.
pub fn apply_snapshot(ui: &crate::AppWindow, snapshot: &ViewSnapshot) {
    let view_state = ui.global::<crate::ViewState>();
    view_state.set_image_loaded(snapshot.image_loaded);
    view_state.set_zoom_factor(snapshot.zoom_factor as f32);
    view_state.set_fit_to_window(snapshot.fit_to_window);
    view_state.set_zoom_in_enabled(snapshot.zoom_in_enabled);
    view_state.set_zoom_out_enabled(snapshot.zoom_out_enabled);
    view_state.set_zoom_reset_enabled(snapshot.zoom_reset_enabled);
    view_state.set_fit_enabled(snapshot.fit_enabled);
    view_state.set_prev_enabled(snapshot.prev_enabled);
    view_state.set_next_enabled(snapshot.next_enabled);
    view_state.set_slideshow_active(snapshot.slideshow_active);

    let position = snapshot
        .position
        .map(|(index, count)| format!("{} / {}", index, count))
        .unwrap_or_default();
    view_state.set_position_text(position.into());
}

/// Applies the outcome of an operation that may have shown a new image.
pub fn apply_display_result(
    ui: &crate::AppWindow,
    status_timer: &slint::Timer,
    result: crate::error::Result<Option<Displayed>>,
    snapshot: &ViewSnapshot,
) {
    match result {
        Ok(Some(displayed)) => show_image(ui, status_timer, &displayed),
        Ok(None) => {}
        Err(e) => set_error(ui, &e),
    }
    apply_snapshot(ui, snapshot);
}
