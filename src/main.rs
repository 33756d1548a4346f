// Prevent console window in addition to Slint window in Windows release builds when, e.g., starting the app via file manager. Ignored on other platforms.
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

slint::include_modules!();

mod config;
mod error;
mod file_utils;
mod image_cache;
mod image_loader;
mod services;
mod settings;
mod startup;
mod state;
mod ui;

use std::sync::{Arc, Mutex};

use settings::{MemorySettingsStore, SettingsStore, TomlSettingsStore};

fn open_settings_store() -> Box<dyn SettingsStore> {
    match TomlSettingsStore::open_default() {
        Some(store) => {
            log::debug!("Using settings file {}", store.path().display());
            Box::new(store)
        }
        None => {
            log::warn!("No config directory available, settings will not persist");
            Box::new(MemorySettingsStore::default())
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(debug_assertions)]
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Debug)
        .init();
    #[cfg(not(debug_assertions))]
    env_logger::init();

    let mut settings_store = open_settings_store();

    let cache = Arc::new(Mutex::new(image_cache::ImageCache::new(
        config::IMAGE_CACHE_CAPACITY,
    )));
    let mut viewer =
        services::ImageViewer::new(Box::new(image_loader::FileDecoder::new(cache)));
    viewer.load_settings(settings_store.as_ref());

    let app = AppWindow::new()?;
    let app_state = state::AppState::new(viewer);

    // Setup all UI event handlers
    ui::setup_handlers(&app, &app_state);
    startup::configure_startup(&app, &app_state);

    app.run()?;

    app_state.slideshow_timer.stop();
    if let Err(e) = app_state.viewer.borrow().save_settings(settings_store.as_mut()) {
        log::error!("Failed to save settings: {}", e);
    }

    Ok(())
}
