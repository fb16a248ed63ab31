//! Helper functions to set grouped ViewState properties.

use log::error;
use slint::ComponentHandle;
use std::path::Path;

/// Sets an error message in the UI with a prefix.
///
/// Logs the error and updates the ViewState error-message property.
pub fn set_error_with_prefix(ui: &crate::AppWindow, prefix: &str, error: String) {
    let error_message = format!("{}: {}", prefix, error);
    error!("{}", error_message);
    ui.global::<crate::ViewState>()
        .set_error_message(error_message.into());
}

/// Clears the error message.
pub fn clear_error(ui: &crate::AppWindow) {
    ui.global::<crate::ViewState>().set_error_message("".into());
}

/// Sets the favorite heart state for the displayed image.
pub fn set_favorite_state(ui: &crate::AppWindow, is_favorite: bool) {
    ui.global::<crate::ViewState>().set_is_favorite(is_favorite);
}

/// Sets the status bar to "position/count — path".
pub fn set_session_status(ui: &crate::AppWindow, position: usize, count: usize, path: &Path) {
    ui.global::<crate::ViewState>()
        .set_status_text(format!("{}/{} — {}", position, count, path.display()).into());
}

/// Sets a free-form status line (export summaries, notices).
pub fn set_status_message(ui: &crate::AppWindow, message: String) {
    ui.global::<crate::ViewState>().set_status_text(message.into());
}
