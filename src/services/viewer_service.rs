//! The viewer controller.
//!
//! Owns navigation, zoom and slideshow state and exposes one method per
//! user action. It never touches widgets: callers render the returned
//! [`Displayed`] image and read [`ImageViewer::snapshot`] afterwards.

use crate::config::{ZOOM_IN_STEP, ZOOM_OUT_STEP};
use crate::error::{AppError, Result};
use crate::file_utils;
use crate::image_loader::{DecodedImage, ImageDecoder};
use crate::settings::{Settings, SettingsStore};
use crate::state::{Direction, NavigationState, SlideshowState, ZoomState};
use log::{debug, info};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The image currently on screen.
#[derive(Debug, Clone)]
pub struct Displayed {
    pub path: PathBuf,
    pub image: Arc<DecodedImage>,
}

/// Read-only view of the controller for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub image_loaded: bool,
    pub zoom_factor: f64,
    pub fit_to_window: bool,
    pub zoom_in_enabled: bool,
    pub zoom_out_enabled: bool,
    pub zoom_reset_enabled: bool,
    pub fit_enabled: bool,
    pub prev_enabled: bool,
    pub next_enabled: bool,
    pub slideshow_active: bool,
    /// One-based position and image count, when the index is set.
    pub position: Option<(usize, usize)>,
}

pub struct ImageViewer {
    navigation: NavigationState,
    zoom: ZoomState,
    slideshow: SlideshowState,
    settings: Settings,
    decoder: Box<dyn ImageDecoder>,
    displayed: Option<Displayed>,
}

impl ImageViewer {
    pub fn new(decoder: Box<dyn ImageDecoder>) -> Self {
        Self {
            navigation: NavigationState::new(),
            zoom: ZoomState::default(),
            slideshow: SlideshowState::default(),
            settings: Settings::default(),
            decoder,
            displayed: None,
        }
    }

    /// Lists the directory of `path`, positions on the file and shows it.
    ///
    /// The directory becomes the last working directory even when the image
    /// itself cannot be shown.
    pub fn open_image(&mut self, path: &Path) -> Result<Displayed> {
        let (directory, file_name) = file_utils::resolve_absolute_path(path)?;
        self.settings.last_working_directory = directory.clone();

        let files = file_utils::scan_directory(&directory)?;
        self.navigation
            .replace_listing(directory.clone(), files, &file_name);

        self.display_current().map_err(|e| match e {
            AppError::InvalidIndex {
                index,
                len,
                path: None,
            } => AppError::InvalidIndex {
                index,
                len,
                path: Some(directory.join(&file_name)),
            },
            other => other,
        })
    }

    /// Decodes and shows the image at the current index.
    ///
    /// On failure nothing on screen changes: the previous image and its zoom
    /// factor stay as they were.
    pub fn display_current(&mut self) -> Result<Displayed> {
        let index = self.navigation.current_index();
        let path = index
            .and_then(|i| self.navigation.path_at(i))
            .ok_or_else(|| AppError::InvalidIndex {
                index,
                len: self.navigation.image_count(),
                path: None,
            })?;

        let image = self.decoder.decode(&path)?;

        self.zoom.image_shown();
        let displayed = Displayed { path, image };
        self.displayed = Some(displayed.clone());
        info!("Image: {}", displayed.path.display());

        let neighbours = [Direction::Next, Direction::Previous]
            .into_iter()
            .filter_map(|d| self.navigation.peek(d))
            .filter_map(|i| self.navigation.path_at(i))
            .collect();
        self.decoder.preload(neighbours);

        Ok(displayed)
    }

    /// Steps one image in `direction` and shows it.
    ///
    /// Returns `Ok(None)` at either end of the list. When the new image
    /// cannot be decoded the index still moves, so the next step goes past
    /// the unreadable file.
    pub fn advance(&mut self, direction: Direction) -> Result<Option<Displayed>> {
        if self.navigation.step(direction).is_none() {
            return Ok(None);
        }
        self.display_current().map(Some)
    }

    pub fn next_image(&mut self) -> Result<Option<Displayed>> {
        self.advance(Direction::Next)
    }

    pub fn prev_image(&mut self) -> Result<Option<Displayed>> {
        self.advance(Direction::Previous)
    }

    pub fn zoom_by(&mut self, multiplier: f64) -> bool {
        self.zoom.zoom_by(multiplier)
    }

    pub fn zoom_in(&mut self) -> bool {
        self.zoom_by(ZOOM_IN_STEP)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.zoom_by(ZOOM_OUT_STEP)
    }

    pub fn set_zoom(&mut self, factor: f64) -> bool {
        self.zoom.set_zoom(factor)
    }

    /// Back to the native image size.
    pub fn zoom_original(&mut self) -> bool {
        self.set_zoom(1.0)
    }

    pub fn set_fit_to_window(&mut self, enabled: bool) -> bool {
        let changed = self.zoom.set_fit_to_window(enabled);
        if changed {
            debug!("Fit to window: {}", enabled);
        }
        changed
    }

    pub fn toggle_fit_to_window(&mut self) -> bool {
        let enabled = !self.zoom.fit_to_window();
        self.set_fit_to_window(enabled)
    }

    /// Records whether the slideshow runs. Returns true when the flag changed;
    /// the caller starts or stops its timer accordingly.
    pub fn set_slideshow(&mut self, active: bool) -> bool {
        if self.slideshow.active == active {
            return false;
        }
        self.slideshow.active = active;
        info!("Slideshow {}", if active { "started" } else { "stopped" });
        true
    }

    /// Flips the slideshow flag and returns the new state.
    pub fn toggle_slideshow(&mut self) -> bool {
        let active = !self.slideshow.active;
        self.set_slideshow(active);
        active
    }

    #[cfg(test)]
    pub fn slideshow_active(&self) -> bool {
        self.slideshow.active
    }

    /// One slideshow timer firing. At the end of the list this does nothing
    /// and the slideshow stays active.
    pub fn slideshow_tick(&mut self) -> Result<Option<Displayed>> {
        if !self.slideshow.active {
            return Ok(None);
        }
        self.advance(Direction::Next)
    }

    pub fn load_settings(&mut self, store: &dyn SettingsStore) {
        self.settings = Settings::load(store);
        debug!(
            "Last working directory: {}",
            self.settings.last_working_directory.display()
        );
    }

    pub fn save_settings(&self, store: &mut dyn SettingsStore) -> Result<()> {
        self.settings.save(store);
        store.flush()
    }

    pub fn last_working_directory(&self) -> &Path {
        &self.settings.last_working_directory
    }

    #[cfg(test)]
    pub fn displayed(&self) -> Option<&Displayed> {
        self.displayed.as_ref()
    }

    #[cfg(test)]
    pub fn navigation(&self) -> &NavigationState {
        &self.navigation
    }

    #[cfg(test)]
    pub fn zoom(&self) -> &ZoomState {
        &self.zoom
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        let position = self
            .navigation
            .current_index()
            .map(|i| (i + 1, self.navigation.image_count()));
        ViewSnapshot {
            image_loaded: self.displayed.is_some(),
            zoom_factor: self.zoom.factor(),
            fit_to_window: self.zoom.fit_to_window(),
            zoom_in_enabled: self.zoom.zoom_in_enabled(),
            zoom_out_enabled: self.zoom.zoom_out_enabled(),
            zoom_reset_enabled: self.zoom.reset_enabled(),
            fit_enabled: self.zoom.fit_enabled(),
            prev_enabled: self.navigation.peek(Direction::Previous).is_some(),
            next_enabled: self.navigation.peek(Direction::Next).is_some(),
            slideshow_active: self.slideshow.active,
            position,
        }
    }
}
