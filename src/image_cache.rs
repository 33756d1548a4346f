//! Image cache for fast navigation.
//!
//! Caches decoded RGBA8 images using an LRU policy so stepping back and
//! forth, or a running slideshow, does not decode the same file twice.

use crate::image_loader::DecodedImage;
use lru::LruCache;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// LRU cache for storing decoded images.
pub struct ImageCache {
    cache: LruCache<PathBuf, Arc<DecodedImage>>,
}

impl ImageCache {
    /// Creates a new image cache with the specified capacity (at least one entry).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            cache: LruCache::new(capacity),
        }
    }

    /// Retrieves an image from the cache if it exists.
    pub fn get(&mut self, path: &Path) -> Option<Arc<DecodedImage>> {
        let result = self.cache.get(path).cloned();
        if result.is_some() {
            log::debug!("Cache HIT: {}", path.display());
        } else {
            log::debug!("Cache MISS: {}", path.display());
        }
        result
    }

    /// Stores an image in the cache.
    pub fn put(&mut self, path: PathBuf, image: Arc<DecodedImage>) {
        log::debug!(
            "Cache PUT: {} ({}x{})",
            path.display(),
            image.width,
            image.height
        );
        self.cache.put(path, image);
    }

    /// Checks if an image is in the cache without touching its LRU position.
    pub fn contains(&self, path: &Path) -> bool {
        self.cache.contains(path)
    }
}
