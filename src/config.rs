//! Application configuration constants.

/// Supported image file extensions for scanning directories.
///
/// HEIC/HEIF files are listed, favorited and exported like any other image;
/// decoding them is reported as a per-file error by the loader.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 8] =
    ["jpg", "jpeg", "png", "webp", "bmp", "gif", "heic", "heif"];

/// Directory name under the per-user data dir holding persistent state.
pub const APP_DATA_DIR_NAME: &str = "slint-photo-viewer";

/// File name of the persisted favorites document.
pub const FAVORITES_FILE_NAME: &str = "favorites.json";

/// Number of decoded images kept in the LRU cache.
pub const IMAGE_CACHE_CAPACITY: usize = 10;
