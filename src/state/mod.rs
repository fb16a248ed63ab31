//! State management for the photo viewer application.

use crate::config::IMAGE_CACHE_CAPACITY;
use crate::favorites::FavoritesStore;
use crate::image_cache::ImageCache;
use std::sync::{Arc, Mutex};

pub mod navigation;

pub use navigation::NavigationState;

/// Application-wide state container.
///
/// The favorites store is an explicit handle passed to every collaborator,
/// not a process-wide singleton.
pub struct AppState {
    pub navigation: Arc<Mutex<NavigationState>>,
    pub favorites: Arc<Mutex<FavoritesStore>>,
    /// LRU cache for decoded images.
    pub image_cache: Arc<Mutex<ImageCache>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            navigation: Arc::new(Mutex::new(NavigationState::new())),
            favorites: Arc::new(Mutex::new(FavoritesStore::open_default())),
            image_cache: Arc::new(Mutex::new(ImageCache::new(IMAGE_CACHE_CAPACITY))),
        }
    }
}
