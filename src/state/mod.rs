//! State management for the image viewer application.

use crate::services::ImageViewer;
use std::cell::RefCell;
use std::rc::Rc;

pub mod navigation;
pub mod zoom;

pub use navigation::{Direction, NavigationState};
pub use zoom::{DisplayMode, ZoomState};

/// Slideshow on/off flag. The interval is fixed, see
/// [`crate::config::SLIDESHOW_INTERVAL`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SlideshowState {
    pub active: bool,
}

/// Application-wide state container, owned by the UI thread.
#[derive(Clone)]
pub struct AppState {
    pub viewer: Rc<RefCell<ImageViewer>>,
    /// Timer driving the slideshow.
    pub slideshow_timer: Rc<slint::Timer>,
    /// Timer clearing the status bar message.
    pub status_timer: Rc<slint::Timer>,
}

impl AppState {
    pub fn new(viewer: ImageViewer) -> Self {
        Self {
            viewer: Rc::new(RefCell::new(viewer)),
            slideshow_timer: Rc::new(slint::Timer::default()),
            status_timer: Rc::new(slint::Timer::default()),
        }
    }
}
