//! Navigation state for the current folder session.
//!
//! A folder session is transient: the ordered file list is recomputed every
//! time a folder is opened and never persisted.

use crate::error::{AppError, Result};
use crate::file_utils;
use log::{debug, warn};
use std::path::{Path, PathBuf};

/// Direction for navigation through images.
#[derive(Debug, Clone, Copy)]
enum Direction {
    Next,
    Previous,
}

/// Manages the current folder, its ordered image list and the current index.
#[derive(Default)]
pub struct NavigationState {
    current_directory: Option<PathBuf>,
    image_files: Vec<PathBuf>,
    current_index: Option<usize>,
}

impl NavigationState {
    /// Creates a new empty navigation state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens a folder session: scans the folder recursively and selects the
    /// first image. The previous session is kept untouched when the folder
    /// has no supported images.
    pub fn open_folder(&mut self, dir: &Path) -> Result<()> {
        let start = std::time::Instant::now();
        let files = file_utils::scan_directory(dir)?;
        if files.is_empty() {
            return Err(AppError::DirectoryScan(format!(
                "No supported images found in {:?}",
                dir
            )));
        }

        debug!(
            "Opened {:?}: {} images in {:?}",
            dir,
            files.len(),
            start.elapsed()
        );
        self.current_directory = Some(dir.to_path_buf());
        self.image_files = files;
        self.current_index = Some(0);
        Ok(())
    }

    /// Navigates one step in the given direction, wrapping at both ends.
    fn navigate_to(&mut self, direction: Direction) -> Option<PathBuf> {
        if self.image_files.is_empty() {
            warn!("No images available for navigation");
            return None;
        }

        let index = self.current_index?;
        let len = self.image_files.len();
        let new_index = match direction {
            Direction::Next => (index + 1) % len,
            Direction::Previous => (index + len - 1) % len,
        };

        self.current_index = Some(new_index);
        Some(self.image_files[new_index].clone())
    }

    /// Returns the path to the next image, wrapping to the first.
    pub fn next_image(&mut self) -> Option<PathBuf> {
        self.navigate_to(Direction::Next)
    }

    /// Returns the path to the previous image, wrapping to the last.
    pub fn prev_image(&mut self) -> Option<PathBuf> {
        self.navigate_to(Direction::Previous)
    }

    /// Returns the currently displayed image path.
    pub fn current_path(&self) -> Option<PathBuf> {
        self.current_index.map(|i| self.image_files[i].clone())
    }

    /// Returns the folder of the current session.
    pub fn current_directory(&self) -> Option<PathBuf> {
        self.current_directory.clone()
    }

    /// Ordered image list of the current session.
    pub fn image_files(&self) -> &[PathBuf] {
        &self.image_files
    }

    /// One-based position of the current image, for the status bar.
    pub fn current_position(&self) -> Option<usize> {
        self.current_index.map(|i| i + 1)
    }

    /// Number of images in the current session.
    pub fn image_count(&self) -> usize {
        self.image_files.len()
    }

    /// Returns the next image without moving, for cache preloading.
    /// `None` when there is nothing else to preload.
    pub fn peek_next_image(&self) -> Option<PathBuf> {
        self.peek(Direction::Next)
    }

    /// Returns the previous image without moving, for cache preloading.
    pub fn peek_prev_image(&self) -> Option<PathBuf> {
        self.peek(Direction::Previous)
    }

    fn peek(&self, direction: Direction) -> Option<PathBuf> {
        let len = self.image_files.len();
        if len < 2 {
            return None;
        }
        let index = self.current_index?;
        let peek_index = match direction {
            Direction::Next => (index + 1) % len,
            Direction::Previous => (index + len - 1) % len,
        };
        Some(self.image_files[peek_index].clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn session_with(names: &[&str]) -> (tempfile::TempDir, NavigationState) {
        let dir = tempfile::tempdir().unwrap();
        for name in names {
            fs::write(dir.path().join(name), b"img").unwrap();
        }
        let mut state = NavigationState::new();
        state.open_folder(dir.path()).unwrap();
        (dir, state)
    }

    #[test]
    fn open_selects_first_image() {
        let (_dir, state) = session_with(&["b.jpg", "a.png"]);
        assert_eq!(state.image_count(), 2);
        assert_eq!(state.current_position(), Some(1));
        assert!(state.current_path().unwrap().ends_with("a.png"));
    }

    #[test]
    fn navigation_wraps_at_both_ends() {
        let (_dir, mut state) = session_with(&["a.jpg", "b.jpg", "c.jpg"]);

        assert!(state.prev_image().unwrap().ends_with("c.jpg"));
        assert!(state.next_image().unwrap().ends_with("a.jpg"));
        assert!(state.next_image().unwrap().ends_with("b.jpg"));
        assert!(state.next_image().unwrap().ends_with("c.jpg"));
        assert!(state.next_image().unwrap().ends_with("a.jpg"));
    }

    #[test]
    fn empty_folder_keeps_previous_session() {
        let (_dir, mut state) = session_with(&["a.jpg"]);
        let empty = tempfile::tempdir().unwrap();

        assert!(state.open_folder(empty.path()).is_err());
        assert_eq!(state.image_count(), 1);
        assert!(state.current_path().unwrap().ends_with("a.jpg"));
    }

    #[test]
    fn navigation_without_session_returns_none() {
        let mut state = NavigationState::new();
        assert!(state.next_image().is_none());
        assert!(state.prev_image().is_none());
        assert!(state.current_path().is_none());
    }

    #[test]
    fn peek_wraps_but_skips_single_image() {
        let (_dir, state) = session_with(&["a.jpg", "b.jpg"]);
        assert!(state.peek_next_image().unwrap().ends_with("b.jpg"));
        assert!(state.peek_prev_image().unwrap().ends_with("b.jpg"));

        let (_dir2, single) = session_with(&["only.jpg"]);
        assert!(single.peek_next_image().is_none());
        assert!(single.peek_prev_image().is_none());
    }
}
