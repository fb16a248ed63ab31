//! Persistent favorites store.
//!
//! Favorites are a set of normalized absolute file paths, persisted as a JSON
//! document in the per-user data directory. Every mutation is flushed to disk
//! before it returns; on a failed flush the in-memory set is rolled back so
//! memory and disk never diverge observably.

use crate::config::{APP_DATA_DIR_NAME, FAVORITES_FILE_NAME};
use crate::error::{AppError, Result};
use crate::file_utils;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// On-disk shape of the favorites document.
///
/// Unknown keys are ignored on read and never written back. The key name is
/// part of the persisted format and must stay stable across versions.
#[derive(Serialize, Deserialize)]
struct FavoritesDocument {
    #[serde(default)]
    favorites: Vec<PathBuf>,
}

/// Set of favorited file paths, kept in sync with a JSON document on disk.
pub struct FavoritesStore {
    store_path: PathBuf,
    favorites: BTreeSet<PathBuf>,
}

/// Returns the default location of the favorites document.
fn default_store_path() -> PathBuf {
    let mut path = dirs::data_dir()
        .or_else(dirs::home_dir)
        .expect("Could not determine user data directory");
    path.push(APP_DATA_DIR_NAME);
    path.push(FAVORITES_FILE_NAME);
    path
}

/// Loads the favorites document, degrading to an empty set on any failure.
///
/// A missing file is the first-run case; a malformed document is discarded
/// (its content is overwritten by the next successful save). Neither
/// propagates an error to the caller.
fn load_document(store_path: &Path) -> BTreeSet<PathBuf> {
    let content = match fs::read_to_string(store_path) {
        Ok(content) => content,
        Err(_) => {
            debug!("No favorites document at {:?}, starting empty", store_path);
            return BTreeSet::new();
        }
    };

    match serde_json::from_str::<FavoritesDocument>(&content) {
        Ok(document) => document
            .favorites
            .iter()
            .map(|p| file_utils::normalize_path(p))
            .collect(),
        Err(e) => {
            warn!("Discarding corrupt favorites document: {}", e);
            BTreeSet::new()
        }
    }
}

impl FavoritesStore {
    /// Opens the store at the default per-user location.
    pub fn open_default() -> Self {
        Self::open(default_store_path())
    }

    /// Opens a store backed by the given document path.
    ///
    /// Never fails: a missing or corrupt document yields an empty set.
    pub fn open(store_path: PathBuf) -> Self {
        let favorites = load_document(&store_path);
        debug!("Loaded {} favorites from {:?}", favorites.len(), store_path);
        Self {
            store_path,
            favorites,
        }
    }

    /// Returns true iff the path is a member of the stored set.
    pub fn is_favorite(&self, path: &Path) -> bool {
        self.favorites.contains(&file_utils::normalize_path(path))
    }

    /// Adds or removes the path and persists the change before returning.
    ///
    /// Returns the new membership state. If the write to disk fails the
    /// in-memory set is restored to its pre-call value and the error is
    /// returned.
    pub fn toggle(&mut self, path: &Path) -> Result<bool> {
        let path = file_utils::normalize_path(path);
        let added = self.favorites.insert(path.clone());
        if !added {
            self.favorites.remove(&path);
        }

        if let Err(e) = self.save() {
            // Roll back so memory and disk stay in agreement.
            if added {
                self.favorites.remove(&path);
            } else {
                self.favorites.insert(path);
            }
            return Err(e);
        }

        Ok(added)
    }

    /// Intersection of a scanned file list with the stored set.
    pub fn favorites_in_folder(&self, files: &[PathBuf]) -> BTreeSet<PathBuf> {
        files
            .iter()
            .map(|p| file_utils::normalize_path(p))
            .filter(|p| self.favorites.contains(p))
            .collect()
    }

    /// Favorites located under the given folder tree.
    ///
    /// Used by export to detect favorites whose files have gone missing from
    /// the source folder.
    pub fn favorites_under(&self, folder: &Path) -> Vec<PathBuf> {
        let folder = file_utils::normalize_path(folder);
        self.favorites
            .iter()
            .filter(|p| p.starts_with(&folder))
            .cloned()
            .collect()
    }

    /// Writes the document atomically: serialize to a sibling temp file,
    /// then rename over the target so a reader never observes a partial
    /// document.
    fn save(&self) -> Result<()> {
        let document = FavoritesDocument {
            favorites: self.favorites.iter().cloned().collect(),
        };
        let json = serde_json::to_string_pretty(&document)
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        if let Some(parent) = self.store_path.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::Persistence(e.to_string()))?;
        }

        let tmp_path = self.store_path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(|e| AppError::Persistence(e.to_string()))?;
        fs::rename(&tmp_path, &self.store_path)
            .map_err(|e| AppError::Persistence(e.to_string()))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &Path) -> FavoritesStore {
        FavoritesStore::open(dir.join(FAVORITES_FILE_NAME))
    }

    #[test]
    fn toggle_is_an_involution() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(dir.path());
        let path = dir.path().join("photo.jpg");

        assert!(!store.is_favorite(&path));
        assert!(store.toggle(&path).unwrap());
        assert!(store.is_favorite(&path));
        assert!(!store.toggle(&path).unwrap());
        assert!(!store.is_favorite(&path));
    }

    #[test]
    fn mutations_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.jpg");
        let b = dir.path().join("b.png");

        let mut store = store_in(dir.path());
        store.toggle(&a).unwrap();
        store.toggle(&b).unwrap();

        let reloaded = store_in(dir.path());
        assert_eq!(reloaded.favorites, store.favorites);
        assert!(reloaded.is_favorite(&a));
        assert!(reloaded.is_favorite(&b));
    }

    #[test]
    fn missing_document_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(dir.path());
        assert_eq!(store.favorites.len(), 0);
    }

    #[test]
    fn corrupt_document_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FAVORITES_FILE_NAME), b"{not json").unwrap();
        let store = store_in(dir.path());
        assert_eq!(store.favorites.len(), 0);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let fav = file_utils::normalize_path(&dir.path().join("kept.jpg"));
        let document = format!(
            r#"{{"favorites": [{}], "version": 3, "window": {{"w": 800}}}}"#,
            serde_json::to_string(&fav).unwrap()
        );
        fs::write(dir.path().join(FAVORITES_FILE_NAME), document).unwrap();

        let store = store_in(dir.path());
        assert!(store.is_favorite(&fav));
        assert_eq!(store.favorites.len(), 1);
    }

    #[test]
    fn failed_save_rolls_back_memory() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the document should be makes the rename fail.
        let store_path = dir.path().join(FAVORITES_FILE_NAME);
        fs::create_dir(&store_path).unwrap();

        let mut store = FavoritesStore::open(store_path);
        let path = dir.path().join("photo.jpg");
        assert!(matches!(
            store.toggle(&path),
            Err(AppError::Persistence(_))
        ));
        assert!(!store.is_favorite(&path));
        assert_eq!(store.favorites.len(), 0);
    }

    #[test]
    fn favorites_in_folder_intersects() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a.jpg");
        let b = dir.path().join("b.png");
        let c = dir.path().join("c.gif");

        let mut store = store_in(dir.path());
        store.toggle(&a).unwrap();
        store.toggle(&c).unwrap();

        let listing = vec![a.clone(), b.clone()];
        let in_folder = store.favorites_in_folder(&listing);
        assert_eq!(in_folder.len(), 1);
        assert!(in_folder.contains(&file_utils::normalize_path(&a)));
    }

    #[test]
    fn favorites_in_folder_empty_cases() {
        let dir = tempfile::tempdir().unwrap();
        let empty_store = store_in(dir.path());
        let listing = vec![dir.path().join("a.jpg")];
        assert!(empty_store.favorites_in_folder(&listing).is_empty());

        let mut store = store_in(dir.path());
        store.toggle(&dir.path().join("elsewhere.jpg")).unwrap();
        assert!(store.favorites_in_folder(&[]).is_empty());
        assert!(store
            .favorites_in_folder(&[dir.path().join("other.png")])
            .is_empty());
    }

    #[test]
    fn favorites_under_matches_subtree() {
        let dir = tempfile::tempdir().unwrap();
        let inside = dir.path().join("sub").join("a.jpg");
        let outside = dir.path().join("..").join("b.jpg");

        let mut store = store_in(dir.path());
        store.toggle(&inside).unwrap();
        store.toggle(&outside).unwrap();

        let under = store.favorites_under(dir.path());
        assert_eq!(under, vec![file_utils::normalize_path(&inside)]);
    }
}
