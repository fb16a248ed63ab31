//! Event handlers for UI callbacks.
//!
//! Sets up all Logic callbacks (open_folder, next_image, prev_image,
//! toggle_favorite, export_favorites) using the appropriate threading model
//! for each operation type.

use crate::favorites::FavoritesStore;
use crate::image_cache::ImageCache;
use crate::services::{ExportService, FavoriteService, NavigationService};
use crate::state::{AppState, NavigationState};
use crate::ui::image_display::load_and_display_image;
use rfd::AsyncFileDialog;
use slint::ComponentHandle;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Scans a folder on a worker thread and displays its first image.
///
/// Shared by the open-folder handler and startup argument handling.
pub fn open_folder_session(
    ui: slint::Weak<crate::AppWindow>,
    dir: PathBuf,
    navigation: Arc<Mutex<NavigationState>>,
    favorites: Arc<Mutex<FavoritesStore>>,
    cache: Arc<Mutex<ImageCache>>,
) {
    rayon::spawn(move || {
        let result = NavigationService::new(navigation.clone()).open_folder(&dir);

        let _ = slint::invoke_from_event_loop(move || {
            let Some(ui_strong) = ui.upgrade() else {
                return;
            };
            match result {
                Ok(first) => load_and_display_image(
                    ui.clone(),
                    first,
                    "Failed to load image".to_string(),
                    navigation,
                    favorites,
                    cache,
                ),
                Err(e) => crate::ui::set_error_with_prefix(
                    &ui_strong,
                    "Failed to open folder",
                    e.to_string(),
                ),
            }
        });
    });
}

/// Sets up all UI event handlers for the application.
pub fn setup_handlers(app: &crate::AppWindow, app_state: &AppState) {
    // Folder selection handler
    // Uses slint::spawn_local because AsyncFileDialog must run on the main thread
    app.global::<crate::Logic>().on_open_folder({
        let ui_handle = app.as_weak();
        let navigation = app_state.navigation.clone();
        let favorites = app_state.favorites.clone();
        let cache = app_state.image_cache.clone();
        move || {
            let ui_handle = ui_handle.clone();
            let navigation = navigation.clone();
            let favorites = favorites.clone();
            let cache = cache.clone();
            let _ = slint::spawn_local(async move {
                let Some(folder) = AsyncFileDialog::new().pick_folder().await else {
                    return;
                };
                open_folder_session(
                    ui_handle,
                    folder.path().to_path_buf(),
                    navigation,
                    favorites,
                    cache,
                );
            });
        }
    });

    // Next image handler
    app.global::<crate::Logic>().on_next_image({
        let ui_handle = app.as_weak();
        let nav_service = NavigationService::new(app_state.navigation.clone());
        let navigation = app_state.navigation.clone();
        let favorites = app_state.favorites.clone();
        let cache = app_state.image_cache.clone();
        move || {
            if let Some(path) = nav_service.next() {
                load_and_display_image(
                    ui_handle.clone(),
                    path,
                    "Failed to load next image".to_string(),
                    navigation.clone(),
                    favorites.clone(),
                    cache.clone(),
                );
            }
        }
    });

    // Previous image handler
    app.global::<crate::Logic>().on_prev_image({
        let ui_handle = app.as_weak();
        let nav_service = NavigationService::new(app_state.navigation.clone());
        let navigation = app_state.navigation.clone();
        let favorites = app_state.favorites.clone();
        let cache = app_state.image_cache.clone();
        move || {
            if let Some(path) = nav_service.previous() {
                load_and_display_image(
                    ui_handle.clone(),
                    path,
                    "Failed to load previous image".to_string(),
                    navigation.clone(),
                    favorites.clone(),
                    cache.clone(),
                );
            }
        }
    });

    // Favorite toggle handler
    // The store write is synchronous and small, so it stays on the UI thread
    app.global::<crate::Logic>().on_toggle_favorite({
        let ui_handle = app.as_weak();
        let favorite_service =
            FavoriteService::new(app_state.navigation.clone(), app_state.favorites.clone());
        move || {
            let Some(ui) = ui_handle.upgrade() else {
                return;
            };
            match favorite_service.toggle_current() {
                Ok(is_favorite) => crate::ui::set_favorite_state(&ui, is_favorite),
                Err(e) => crate::ui::set_error_with_prefix(
                    &ui,
                    "Failed to update favorites",
                    e.to_string(),
                ),
            }
        }
    });

    // Export handler: destination dialog on the UI thread, copies on rayon
    app.global::<crate::Logic>().on_export_favorites({
        let ui_handle = app.as_weak();
        let navigation = app_state.navigation.clone();
        let favorites = app_state.favorites.clone();
        move || {
            let ui_handle = ui_handle.clone();
            let navigation = navigation.clone();
            let favorites = favorites.clone();
            let _ = slint::spawn_local(async move {
                let export_service = ExportService::new(navigation.clone(), favorites.clone());

                let has_folder = navigation.lock().unwrap().current_directory().is_some();
                if !has_folder {
                    if let Some(ui) = ui_handle.upgrade() {
                        crate::ui::set_status_message(
                            &ui,
                            "Open a folder before exporting".to_string(),
                        );
                    }
                    return;
                }
                if export_service.favorites_in_current_folder() == 0 {
                    if let Some(ui) = ui_handle.upgrade() {
                        crate::ui::set_status_message(
                            &ui,
                            "No favorites in this folder".to_string(),
                        );
                    }
                    return;
                }

                let Some(folder) = AsyncFileDialog::new().pick_folder().await else {
                    return;
                };
                let destination = folder.path().to_path_buf();

                rayon::spawn(move || {
                    let result = export_service.export_to(&destination);

                    let _ = slint::invoke_from_event_loop(move || {
                        let Some(ui) = ui_handle.upgrade() else {
                            return;
                        };
                        match result {
                            Ok(report) => {
                                for failure in &report.failures {
                                    log::warn!(
                                        "Export failure {:?}: {}",
                                        failure.source,
                                        failure.reason
                                    );
                                }
                                if report.failures.is_empty() {
                                    crate::ui::clear_error(&ui);
                                } else {
                                    crate::ui::set_error_with_prefix(
                                        &ui,
                                        "Export finished with failures",
                                        report.summary(),
                                    );
                                }
                                crate::ui::set_status_message(&ui, report.summary());
                            }
                            Err(e) => crate::ui::set_error_with_prefix(
                                &ui,
                                "Export failed",
                                e.to_string(),
                            ),
                        }
                    });
                });
            });
        }
    });
}
