//! Places Map Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod source;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, LoadState, UiState};
pub use core::{filter_places, normalize_query, GeoBounds, GeoPoint, MapCamera, Place, PlaceStore};
pub use shared::{MapScene, ViewerOptions};
pub use source::{fetch_places, DataSource, LoadError, PendingLoad};
