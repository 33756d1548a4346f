//! UI module for handling user interactions and UI updates.
//!
//! Threading model: everything here runs on the Slint event loop thread.
//! - `slint::spawn_local`: the async file dialog, which must stay on the main thread
//! - `slint::Timer`: slideshow advancement and status bar expiry
//! - decoding runs inline; only cache preloading goes to rayon (see `image_loader`)

pub mod handlers;
pub mod image_display;
mod state_helpers;

pub use handlers::{open_path, setup_handlers};
pub use image_display::apply_snapshot;
pub use state_helpers::*;
