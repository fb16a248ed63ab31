//! Image loading and display logic.
//!
//! Uses `rayon::spawn` for CPU-intensive image decoding, then
//! `slint::invoke_from_event_loop` to update the UI from the background
//! thread. Adjacent images are preloaded into the cache for fast stepping.

use crate::favorites::FavoritesStore;
use crate::image_cache::{CachedImage, ImageCache};
use crate::image_loader;
use crate::state::NavigationState;
use slint::ComponentHandle;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Decodes an image into cacheable form.
fn load_image_data(path: &PathBuf) -> Result<CachedImage, String> {
    let (data, width, height) =
        image_loader::load_image_blocking(path).map_err(|e| e.to_string())?;
    Ok(CachedImage::new(data, width, height))
}

/// Refreshes the favorite heart and status bar for the given image.
///
/// Runs even when decoding failed: an undecodable image can still be
/// favorited and exported.
fn update_session_indicators(
    ui: &crate::AppWindow,
    path: &PathBuf,
    navigation: &Arc<Mutex<NavigationState>>,
    favorites: &Arc<Mutex<FavoritesStore>>,
) {
    let is_favorite = favorites.lock().unwrap().is_favorite(path);
    crate::ui::set_favorite_state(ui, is_favorite);

    let (position, count) = {
        let nav_state = navigation.lock().unwrap();
        (nav_state.current_position(), nav_state.image_count())
    };
    if let Some(position) = position {
        crate::ui::set_session_status(ui, position, count, path);
    }
}

/// Updates the UI with a successfully decoded image.
fn update_ui_state(
    ui: &crate::AppWindow,
    image: slint::Image,
    path: &PathBuf,
    navigation: &Arc<Mutex<NavigationState>>,
    favorites: &Arc<Mutex<FavoritesStore>>,
) {
    ui.global::<crate::ViewState>().set_dynamic_image(image);
    ui.global::<crate::ViewState>().set_image_loaded(true);
    crate::ui::clear_error(ui);
    update_session_indicators(ui, path, navigation, favorites);
}

/// Stores the decoded image in the cache, shows it and triggers preloading.
fn update_ui_with_image(
    ui: &crate::AppWindow,
    image_data: CachedImage,
    path: PathBuf,
    navigation: Arc<Mutex<NavigationState>>,
    favorites: Arc<Mutex<FavoritesStore>>,
    cache: Arc<Mutex<ImageCache>>,
) {
    if let Ok(mut cache) = cache.lock() {
        cache.put(path.clone(), image_data.clone());
    }

    let image =
        image_loader::create_slint_image(image_data.data, image_data.width, image_data.height);
    update_ui_state(ui, image, &path, &navigation, &favorites);

    preload_adjacent_images(navigation, cache);
}

/// Shows a per-image error state without breaking the session.
fn update_ui_with_error(
    ui: &crate::AppWindow,
    error_prefix: &str,
    error: String,
    path: &PathBuf,
    navigation: &Arc<Mutex<NavigationState>>,
    favorites: &Arc<Mutex<FavoritesStore>>,
) {
    ui.global::<crate::ViewState>().set_image_loaded(false);
    crate::ui::set_error_with_prefix(ui, error_prefix, error);
    update_session_indicators(ui, path, navigation, favorites);
}

/// Loads an image in a background thread and updates the UI.
///
/// 1. Checks the cache first for instant display
/// 2. On cache miss, decodes on a rayon thread
/// 3. Returns to the UI thread via invoke_from_event_loop
/// 4. Updates ViewState with the image or a per-file error
pub fn load_and_display_image(
    ui: slint::Weak<crate::AppWindow>,
    path: PathBuf,
    error_prefix: String,
    navigation: Arc<Mutex<NavigationState>>,
    favorites: Arc<Mutex<FavoritesStore>>,
    cache: Arc<Mutex<ImageCache>>,
) {
    let cached = cache.lock().ok().and_then(|mut c| c.get(&path));

    if let Some(cached_image) = cached {
        if let Some(ui) = ui.upgrade() {
            let image = image_loader::create_slint_image(
                cached_image.data,
                cached_image.width,
                cached_image.height,
            );
            update_ui_state(&ui, image, &path, &navigation, &favorites);
            preload_adjacent_images(navigation, cache);
        }
        return;
    }

    let cache_clone = cache.clone();
    rayon::spawn(move || {
        let result = load_image_data(&path);

        let _ = slint::invoke_from_event_loop(move || {
            if let Some(ui) = ui.upgrade() {
                match result {
                    Ok(image_data) => update_ui_with_image(
                        &ui,
                        image_data,
                        path,
                        navigation,
                        favorites,
                        cache_clone,
                    ),
                    Err(error) => update_ui_with_error(
                        &ui,
                        &error_prefix,
                        error,
                        &path,
                        &navigation,
                        &favorites,
                    ),
                }
            }
        });
    });
}

/// Preloads the neighboring images in the background.
fn preload_adjacent_images(navigation: Arc<Mutex<NavigationState>>, cache: Arc<Mutex<ImageCache>>) {
    let (next_path, prev_path) = {
        if let Ok(nav_state) = navigation.lock() {
            (nav_state.peek_next_image(), nav_state.peek_prev_image())
        } else {
            return;
        }
    };

    for path in [next_path, prev_path].into_iter().flatten() {
        let should_load = cache
            .lock()
            .ok()
            .map(|mut c| !c.contains(&path))
            .unwrap_or(false);

        if should_load {
            let cache_clone = cache.clone();
            rayon::spawn(move || {
                // Preload errors are ignored; the file errors again when shown.
                if let Ok(image_data) = load_image_data(&path) {
                    if let Ok(mut cache) = cache_clone.lock() {
                        cache.put(path, image_data);
                    }
                }
            });
        }
    }
}
