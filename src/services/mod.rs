//! Service layer for business logic.
//!
//! Separates business logic from UI handlers for better testability and
//! maintainability.

pub mod export_service;
pub mod favorite_service;
pub mod navigation_service;

pub use export_service::ExportService;
pub use favorite_service::FavoriteService;
pub use navigation_service::NavigationService;
