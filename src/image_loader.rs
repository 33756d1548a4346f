//! Image decoding.
//!
//! `FileDecoder` decodes synchronously on the calling thread and can warm
//! its cache with neighbouring images on the rayon pool.

use crate::error::{AppError, Result};
use crate::image_cache::ImageCache;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Decoded RGBA8 pixels ready to hand to the renderer.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl DecodedImage {
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Self {
        Self {
            width,
            height,
            rgba,
        }
    }
}

/// Decode collaborator used by the viewer.
pub trait ImageDecoder {
    /// Decodes the image at `path`.
    fn decode(&self, path: &Path) -> Result<Arc<DecodedImage>>;

    /// Hints that `paths` are likely to be requested soon.
    fn preload(&self, _paths: Vec<PathBuf>) {}
}

/// Decodes a file from disk, guessing the format from its content.
pub fn decode_file(path: &Path) -> Result<DecodedImage> {
    let decode_error = |reason: String| AppError::Decode {
        path: path.to_path_buf(),
        reason,
    };

    let image = image::ImageReader::open(path)
        .map_err(|e| decode_error(e.to_string()))?
        .with_guessed_format()
        .map_err(|e| decode_error(e.to_string()))?
        .decode()
        .map_err(|e| decode_error(e.to_string()))?;

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    Ok(DecodedImage::new(width, height, rgba.into_raw()))
}

/// Decoder backed by the `image` crate with an LRU cache in front.
#[derive(Clone)]
pub struct FileDecoder {
    cache: Arc<Mutex<ImageCache>>,
}

impl FileDecoder {
    pub fn new(cache: Arc<Mutex<ImageCache>>) -> Self {
        Self { cache }
    }

    fn cached(&self, path: &Path) -> Option<Arc<DecodedImage>> {
        self.cache.lock().ok().and_then(|mut c| c.get(path))
    }

    fn store(&self, path: &Path, image: Arc<DecodedImage>) {
        if let Ok(mut cache) = self.cache.lock() {
            cache.put(path.to_path_buf(), image);
        }
    }
}

impl ImageDecoder for FileDecoder {
    fn decode(&self, path: &Path) -> Result<Arc<DecodedImage>> {
        if let Some(image) = self.cached(path) {
            return Ok(image);
        }

        let start = std::time::Instant::now();
        let image = Arc::new(decode_file(path)?);
        log::debug!("Decoded {} in {:?}", path.display(), start.elapsed());

        self.store(path, image.clone());
        Ok(image)
    }

    fn preload(&self, paths: Vec<PathBuf>) {
        for path in paths {
            let should_load = self
                .cache
                .lock()
                .map(|c| !c.contains(&path))
                .unwrap_or(false);
            if !should_load {
                continue;
            }

            let decoder = self.clone();
            rayon::spawn(move || {
                // Silently ignore errors during preload
                if let Ok(image) = decode_file(&path) {
                    decoder.store(&path, Arc::new(image));
                }
            });
        }
    }
}
