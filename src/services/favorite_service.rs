//! Service for toggling the favorite mark on the displayed image.

use crate::error::{AppError, Result};
use crate::favorites::FavoritesStore;
use crate::state::NavigationState;
use std::sync::{Arc, Mutex};

/// Service coordinating the favorites store with the folder session.
pub struct FavoriteService {
    navigation: Arc<Mutex<NavigationState>>,
    favorites: Arc<Mutex<FavoritesStore>>,
}

impl FavoriteService {
    /// Creates a new favorite service.
    pub fn new(
        navigation: Arc<Mutex<NavigationState>>,
        favorites: Arc<Mutex<FavoritesStore>>,
    ) -> Self {
        Self {
            navigation,
            favorites,
        }
    }

    /// Toggles the favorite mark on the current image and persists it.
    ///
    /// Returns the new membership state, or an error if no image is selected
    /// or the favorites document could not be written.
    pub fn toggle_current(&self) -> Result<bool> {
        let path = {
            let nav_state = self.navigation.lock().unwrap();
            nav_state.current_path()
        };
        let path = path.ok_or_else(|| AppError::Persistence("No image selected".to_string()))?;

        let mut favorites = self.favorites.lock().unwrap();
        favorites.toggle(&path)
    }

    /// Whether the current image is favorited. False when nothing is shown.
    pub fn is_current_favorite(&self) -> bool {
        let path = {
            let nav_state = self.navigation.lock().unwrap();
            nav_state.current_path()
        };
        match path {
            Some(path) => self.favorites.lock().unwrap().is_favorite(&path),
            None => false,
        }
    }
}
