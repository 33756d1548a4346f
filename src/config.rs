//! Application configuration constants.

use std::time::Duration;

/// Supported image file extensions for scanning directories.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 2] = ["png", "jpg"];

/// Multiplier applied by a single zoom-in step.
pub const ZOOM_IN_STEP: f64 = 1.2;
/// Multiplier applied by a single zoom-out step.
pub const ZOOM_OUT_STEP: f64 = 0.8;
/// Zoom-in stays available only while the factor is below this.
pub const MAX_ZOOM_FACTOR: f64 = 5.0;
/// Zoom-out stays available only while the factor is above this.
pub const MIN_ZOOM_FACTOR: f64 = 0.1;

/// Delay between two automatic advances in slideshow mode.
pub const SLIDESHOW_INTERVAL: Duration = Duration::from_millis(2000);

pub const READY_MESSAGE_DURATION: Duration = Duration::from_millis(3000);
pub const IMAGE_MESSAGE_DURATION: Duration = Duration::from_millis(2000);

/// Settings namespace: `<config_dir>/<ORGANIZATION>/<APPLICATION>.toml`.
pub const SETTINGS_ORGANIZATION: &str = "FNSPE";
pub const SETTINGS_APPLICATION: &str = "ImageViewer";

/// Number of decoded images kept around for quick back-and-forth navigation.
pub const IMAGE_CACHE_CAPACITY: usize = 6;
