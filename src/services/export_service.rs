//! Service for exporting the open folder's favorites.

use crate::error::{AppError, Result};
use crate::export::{self, ExportReport};
use crate::favorites::FavoritesStore;
use crate::state::NavigationState;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Service driving the export engine from the UI.
pub struct ExportService {
    navigation: Arc<Mutex<NavigationState>>,
    favorites: Arc<Mutex<FavoritesStore>>,
}

impl ExportService {
    /// Creates a new export service.
    pub fn new(
        navigation: Arc<Mutex<NavigationState>>,
        favorites: Arc<Mutex<FavoritesStore>>,
    ) -> Self {
        Self {
            navigation,
            favorites,
        }
    }

    /// Exports the open folder's favorites into the destination folder.
    pub fn export_to(&self, destination: &Path) -> Result<ExportReport> {
        let source = {
            let nav_state = self.navigation.lock().unwrap();
            nav_state.current_directory()
        };
        let source = source.ok_or_else(|| AppError::Export("No folder is open".to_string()))?;

        let favorites = self.favorites.lock().unwrap();
        export::export_favorites(&source, destination, &favorites)
    }

    /// Number of favorites among the open folder's files.
    pub fn favorites_in_current_folder(&self) -> usize {
        let files = {
            let nav_state = self.navigation.lock().unwrap();
            nav_state.image_files().to_vec()
        };
        self.favorites.lock().unwrap().favorites_in_folder(&files).len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn exports_favorites_of_the_open_folder() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("source");
        fs::create_dir(&source).unwrap();
        fs::write(source.join("a.jpg"), b"aaa").unwrap();
        fs::write(source.join("b.jpg"), b"bbb").unwrap();

        let mut nav = NavigationState::new();
        nav.open_folder(&source).unwrap();
        let mut store = FavoritesStore::open(dir.path().join("favorites.json"));
        store.toggle(&source.join("a.jpg")).unwrap();

        let service = ExportService::new(
            Arc::new(Mutex::new(nav)),
            Arc::new(Mutex::new(store)),
        );
        assert_eq!(service.favorites_in_current_folder(), 1);

        let destination = dir.path().join("dest");
        let report = service.export_to(&destination).unwrap();
        assert_eq!(report.copied, 1);
        assert!(destination.join("a.jpg").exists());
        assert!(!destination.join("b.jpg").exists());
    }

    #[test]
    fn export_without_open_folder_fails() {
        let dir = tempfile::tempdir().unwrap();
        let service = ExportService::new(
            Arc::new(Mutex::new(NavigationState::new())),
            Arc::new(Mutex::new(FavoritesStore::open(
                dir.path().join("favorites.json"),
            ))),
        );

        assert!(service.export_to(&dir.path().join("dest")).is_err());
    }
}
