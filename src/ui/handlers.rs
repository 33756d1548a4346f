//! Event handlers for UI callbacks.
//!
//! Every `Logic` callback borrows the viewer, runs one operation, releases
//! the borrow and then pushes the result into the window.

use crate::config::{SLIDESHOW_INTERVAL, SUPPORTED_IMAGE_EXTENSIONS};
use crate::services::{ImageViewer, ViewSnapshot};
use crate::state::AppState;
use crate::ui::image_display::{apply_display_result, apply_snapshot};
use log::debug;
use rfd::AsyncFileDialog;
use slint::ComponentHandle;
use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

/// Runs a zoom-style operation that never changes the shown image.
fn run_view_op(
    ui_handle: &slint::Weak<crate::AppWindow>,
    viewer: &Rc<RefCell<ImageViewer>>,
    op: impl Fn(&mut ImageViewer) -> bool,
) {
    let snapshot: ViewSnapshot = {
        let mut viewer = viewer.borrow_mut();
        op(&mut viewer);
        viewer.snapshot()
    };
    if let Some(ui) = ui_handle.upgrade() {
        apply_snapshot(&ui, &snapshot);
    }
}

/// Opens `path` in the viewer and displays it.
pub fn open_path(
    ui: &crate::AppWindow,
    viewer: &Rc<RefCell<ImageViewer>>,
    status_timer: &slint::Timer,
    path: PathBuf,
) {
    let (result, snapshot) = {
        let mut viewer = viewer.borrow_mut();
        let result = viewer.open_image(&path).map(Some);
        (result, viewer.snapshot())
    };
    apply_display_result(ui, status_timer, result, &snapshot);
}

fn start_slideshow_timer(ui: &crate::AppWindow, state: &AppState) {
    let ui_handle = ui.as_weak();
    let viewer = state.viewer.clone();
    let status_timer = state.status_timer.clone();
    state
        .slideshow_timer
        .start(slint::TimerMode::Repeated, SLIDESHOW_INTERVAL, move || {
            let result = viewer.borrow_mut().slideshow_tick();
            let snapshot = viewer.borrow().snapshot();
            if let Some(ui) = ui_handle.upgrade() {
                apply_display_result(&ui, &status_timer, result, &snapshot);
            }
        });
}

/// Sets up all UI event handlers for the application.
pub fn setup_handlers(ui: &crate::AppWindow, state: &AppState) {
    let logic = ui.global::<crate::Logic>();

    // AsyncFileDialog must run on the main thread, hence spawn_local.
    logic.on_open_image({
        let ui_handle = ui.as_weak();
        let viewer = state.viewer.clone();
        let status_timer = state.status_timer.clone();
        move || {
            let ui_handle = ui_handle.clone();
            let viewer = viewer.clone();
            let status_timer = status_timer.clone();
            let start_dir = viewer.borrow().last_working_directory().to_path_buf();
            let _ = slint::spawn_local(async move {
                let Some(file_handle) = AsyncFileDialog::new()
                    .set_title("Open file")
                    .set_directory(&start_dir)
                    .add_filter("Images", &SUPPORTED_IMAGE_EXTENSIONS)
                    .pick_file()
                    .await
                else {
                    debug!("Open dialog cancelled");
                    return;
                };

                if let Some(ui) = ui_handle.upgrade() {
                    open_path(&ui, &viewer, &status_timer, file_handle.path().to_path_buf());
                }
            });
        }
    });

    logic.on_quit({
        let ui_handle = ui.as_weak();
        move || {
            if let Some(ui) = ui_handle.upgrade() {
                ui.global::<crate::ViewState>().set_quit_dialog_visible(true);
            }
        }
    });

    // Closing the window goes through the same confirmation as Quit.
    ui.window().on_close_requested({
        let ui_handle = ui.as_weak();
        move || {
            if let Some(ui) = ui_handle.upgrade() {
                ui.global::<crate::ViewState>().set_quit_dialog_visible(true);
            }
            slint::CloseRequestResponse::KeepWindowShown
        }
    });

    logic.on_confirm_quit(|| {
        if let Err(e) = slint::quit_event_loop() {
            log::error!("Failed to quit event loop: {}", e);
        }
    });

    logic.on_zoom_in({
        let ui_handle = ui.as_weak();
        let viewer = state.viewer.clone();
        move || run_view_op(&ui_handle, &viewer, ImageViewer::zoom_in)
    });

    logic.on_zoom_out({
        let ui_handle = ui.as_weak();
        let viewer = state.viewer.clone();
        move || run_view_op(&ui_handle, &viewer, ImageViewer::zoom_out)
    });

    logic.on_zoom_original({
        let ui_handle = ui.as_weak();
        let viewer = state.viewer.clone();
        move || run_view_op(&ui_handle, &viewer, ImageViewer::zoom_original)
    });

    logic.on_toggle_fit_to_window({
        let ui_handle = ui.as_weak();
        let viewer = state.viewer.clone();
        move || run_view_op(&ui_handle, &viewer, ImageViewer::toggle_fit_to_window)
    });

    logic.on_next_image({
        let ui_handle = ui.as_weak();
        let viewer = state.viewer.clone();
        let status_timer = state.status_timer.clone();
        move || {
            let result = viewer.borrow_mut().next_image();
            let snapshot = viewer.borrow().snapshot();
            if let Some(ui) = ui_handle.upgrade() {
                apply_display_result(&ui, &status_timer, result, &snapshot);
            }
        }
    });

    logic.on_prev_image({
        let ui_handle = ui.as_weak();
        let viewer = state.viewer.clone();
        let status_timer = state.status_timer.clone();
        move || {
            let result = viewer.borrow_mut().prev_image();
            let snapshot = viewer.borrow().snapshot();
            if let Some(ui) = ui_handle.upgrade() {
                apply_display_result(&ui, &status_timer, result, &snapshot);
            }
        }
    });

    logic.on_toggle_slideshow({
        let ui_handle = ui.as_weak();
        let state = state.clone();
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            let active = state.viewer.borrow_mut().toggle_slideshow();
            if active {
                start_slideshow_timer(&ui, &state);
            } else {
                state.slideshow_timer.stop();
            }
            apply_snapshot(&ui, &state.viewer.borrow().snapshot());
        }
    });
}
