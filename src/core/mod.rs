//! Core-Domänentypen: Orte, Place-Store, Textfilter, Geometrie, Kamera, Kacheln.

pub mod camera;
pub mod directions;
pub mod filter;
pub mod geo;
/// Datenmodell eines Ortes aus der Datenquelle
pub mod place;
pub mod place_store;
pub mod tiles;

pub use camera::MapCamera;
pub use directions::directions_link;
pub use filter::{filter_places, normalize_query};
pub use geo::{GeoBounds, GeoPoint};
pub use place::Place;
pub use place_store::PlaceStore;
pub use tiles::{TileId, TileLayer, VisibleTile, MAX_TILE_ZOOM};
