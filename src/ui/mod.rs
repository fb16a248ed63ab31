//! UI module for handling user interactions and UI updates.
//!
//! Threading model:
//! - `slint::spawn_local`: async UI work that must stay on the main thread
//!   (file dialogs)
//! - `rayon::spawn`: heavy work off the UI thread (image decode, folder
//!   scan, export copies)
//! - `slint::invoke_from_event_loop`: returning results from rayon to the
//!   UI thread

pub mod handlers;
pub mod image_display;
mod state_helpers;

pub use handlers::setup_handlers;
pub use state_helpers::*;
