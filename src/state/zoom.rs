//! Zoom factor and display mode.
//!
//! The display mode is a small state machine:
//!
//! ```text
//! NoImage --image shown--> Manual <--fit on/off--> Fit
//!                            ^                      |
//!                            +----image shown-------+
//! ```
//!
//! Showing an image always lands in `Manual` with a factor of 1.0.

use crate::config::{MAX_ZOOM_FACTOR, MIN_ZOOM_FACTOR};
use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Nothing has been displayed yet.
    #[default]
    NoImage,
    /// Image drawn at `factor` times its native size, scrollable.
    Manual,
    /// Image stretched to fill the viewport; the factor is suspended.
    Fit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ZoomState {
    factor: f64,
    mode: DisplayMode,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self {
            factor: 1.0,
            mode: DisplayMode::NoImage,
        }
    }
}

fn is_valid_factor(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl ZoomState {
    pub fn factor(&self) -> f64 {
        self.factor
    }

    #[cfg(test)]
    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn fit_to_window(&self) -> bool {
        self.mode == DisplayMode::Fit
    }

    /// A new image was shown.
    pub fn image_shown(&mut self) {
        self.factor = 1.0;
        self.mode = DisplayMode::Manual;
    }

    fn manual(&self) -> bool {
        self.mode == DisplayMode::Manual
    }

    pub fn zoom_in_enabled(&self) -> bool {
        self.manual() && self.factor < MAX_ZOOM_FACTOR
    }

    pub fn zoom_out_enabled(&self) -> bool {
        self.manual() && self.factor > MIN_ZOOM_FACTOR
    }

    pub fn reset_enabled(&self) -> bool {
        self.manual()
    }

    pub fn fit_enabled(&self) -> bool {
        self.mode != DisplayMode::NoImage
    }

    /// Multiplies the factor. Ignored outside manual mode, and in a
    /// direction whose limit has already been reached.
    pub fn zoom_by(&mut self, multiplier: f64) -> bool {
        if !is_valid_factor(multiplier) {
            return false;
        }
        let allowed = if multiplier > 1.0 {
            self.zoom_in_enabled()
        } else if multiplier < 1.0 {
            self.zoom_out_enabled()
        } else {
            self.manual()
        };
        if !allowed {
            return false;
        }
        self.factor *= multiplier;
        debug!("Zoom factor is now {:.3}", self.factor);
        true
    }

    /// Sets an absolute factor; `set_zoom(1.0)` restores the original size.
    pub fn set_zoom(&mut self, factor: f64) -> bool {
        if !self.manual() || !is_valid_factor(factor) {
            return false;
        }
        self.factor = factor;
        true
    }

    /// Switches between manual and fit mode. Leaving fit mode restores a
    /// factor of 1.0, not the factor used before fitting.
    pub fn set_fit_to_window(&mut self, enabled: bool) -> bool {
        match (self.mode, enabled) {
            (DisplayMode::Manual, true) => {
                self.mode = DisplayMode::Fit;
                true
            }
            (DisplayMode::Fit, false) => {
                self.mode = DisplayMode::Manual;
                self.factor = 1.0;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ZOOM_IN_STEP, ZOOM_OUT_STEP};

    fn shown() -> ZoomState {
        let mut zoom = ZoomState::default();
        zoom.image_shown();
        zoom
    }

    #[test]
    fn nothing_is_enabled_without_an_image() {
        let mut zoom = ZoomState::default();
        assert!(!zoom.zoom_in_enabled());
        assert!(!zoom.zoom_out_enabled());
        assert!(!zoom.reset_enabled());
        assert!(!zoom.fit_enabled());
        assert!(!zoom.zoom_by(ZOOM_IN_STEP));
        assert!(!zoom.set_fit_to_window(true));
        assert_eq!(zoom.mode(), DisplayMode::NoImage);
    }

    #[test]
    fn repeated_zoom_in_disables_itself_at_limit() {
        let mut zoom = shown();
        let mut steps = 0;
        while zoom.zoom_by(ZOOM_IN_STEP) {
            steps += 1;
            assert!(steps < 100, "zoom in never reached its limit");
        }
        assert!(zoom.factor() >= MAX_ZOOM_FACTOR);
        assert!(!zoom.zoom_in_enabled());
        assert!(zoom.zoom_out_enabled());
    }

    #[test]
    fn repeated_zoom_out_disables_itself_at_limit() {
        let mut zoom = shown();
        let mut steps = 0;
        while zoom.zoom_by(ZOOM_OUT_STEP) {
            steps += 1;
            assert!(steps < 100, "zoom out never reached its limit");
        }
        assert!(zoom.factor() <= MIN_ZOOM_FACTOR);
        assert!(!zoom.zoom_out_enabled());
        assert!(zoom.zoom_in_enabled());
    }

    #[test]
    fn showing_an_image_resets_factor_and_leaves_fit() {
        let mut zoom = shown();
        zoom.zoom_by(ZOOM_IN_STEP);
        zoom.set_fit_to_window(true);
        zoom.image_shown();
        assert_eq!(zoom.factor(), 1.0);
        assert_eq!(zoom.mode(), DisplayMode::Manual);
    }

    #[test]
    fn leaving_fit_restores_original_size() {
        let mut zoom = shown();
        zoom.zoom_by(ZOOM_IN_STEP);
        zoom.zoom_by(ZOOM_IN_STEP);
        assert!(zoom.set_fit_to_window(true));
        assert!(!zoom.zoom_in_enabled());
        assert!(!zoom.zoom_out_enabled());
        assert!(!zoom.reset_enabled());
        assert!(zoom.fit_enabled());

        assert!(zoom.set_fit_to_window(false));
        assert_eq!(zoom.factor(), 1.0);
        assert!(zoom.zoom_in_enabled());
    }

    #[test]
    fn manual_zoom_is_ignored_in_fit_mode() {
        let mut zoom = shown();
        zoom.set_fit_to_window(true);
        assert!(!zoom.zoom_by(ZOOM_IN_STEP));
        assert!(!zoom.set_zoom(2.0));
        assert_eq!(zoom.factor(), 1.0);
    }

    #[test]
    fn non_finite_or_non_positive_factors_are_rejected() {
        let mut zoom = shown();
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 0.0, -2.0] {
            assert!(!zoom.zoom_by(bad), "zoom_by accepted {bad}");
            assert!(!zoom.set_zoom(bad), "set_zoom accepted {bad}");
        }
        assert_eq!(zoom.factor(), 1.0);
        assert!(zoom.zoom_in_enabled());
        assert!(zoom.zoom_out_enabled());
    }

    #[test]
    fn set_zoom_resets_to_original_size() {
        let mut zoom = shown();
        zoom.zoom_by(ZOOM_OUT_STEP);
        assert!(zoom.set_zoom(1.0));
        assert_eq!(zoom.factor(), 1.0);
    }
}
