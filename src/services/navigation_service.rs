//! Service for handling image navigation operations.
//!
//! Provides high-level navigation methods over the shared folder session.

use crate::error::Result;
use crate::state::NavigationState;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Service for managing image navigation.
#[derive(Clone)]
pub struct NavigationService {
    navigation: Arc<Mutex<NavigationState>>,
}

impl NavigationService {
    /// Creates a new navigation service.
    pub fn new(navigation: Arc<Mutex<NavigationState>>) -> Self {
        Self { navigation }
    }

    /// Opens a folder session and returns the first image to display.
    pub fn open_folder(&self, dir: &Path) -> Result<PathBuf> {
        let mut nav_state = self.navigation.lock().unwrap();
        nav_state.open_folder(dir)?;
        Ok(nav_state
            .current_path()
            .expect("open_folder always selects an image"))
    }

    /// Navigates to the next image and returns its path, wrapping around.
    pub fn next(&self) -> Option<PathBuf> {
        self.navigation.lock().unwrap().next_image()
    }

    /// Navigates to the previous image and returns its path, wrapping around.
    pub fn previous(&self) -> Option<PathBuf> {
        self.navigation.lock().unwrap().prev_image()
    }
}
