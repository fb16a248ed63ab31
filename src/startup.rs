//! Startup folder handling.
//!
//! The only CLI surface is an optional starting path: a folder to open, or
//! an image file whose parent folder becomes the session.

use slint::ComponentHandle;
use std::path::PathBuf;

use crate::state::AppState;

fn startup_folder_from_args() -> Option<PathBuf> {
    std::env::args_os()
        .skip(1)
        .filter_map(|arg| {
            let arg_str = arg.to_string_lossy();
            if arg_str.starts_with('-') {
                None
            } else {
                Some(PathBuf::from(arg))
            }
        })
        .find_map(|path| {
            if path.is_dir() {
                Some(path)
            } else if crate::file_utils::is_supported_image(&path) {
                path.parent().map(|parent| parent.to_path_buf())
            } else {
                None
            }
        })
}

/// Opens the folder passed on the command line, if any.
pub fn configure_startup_opening(app: &crate::AppWindow, app_state: &AppState) {
    if let Some(dir) = startup_folder_from_args() {
        log::debug!("Opening startup folder {:?}", dir);
        crate::ui::handlers::open_folder_session(
            app.as_weak(),
            dir,
            app_state.navigation.clone(),
            app_state.favorites.clone(),
            app_state.image_cache.clone(),
        );
    }
}
