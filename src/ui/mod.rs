//! UI-Komponenten: Suchleiste, Ortsliste, Karten-Canvas, Popup, Statusleiste.

mod map_canvas;
mod place_list;
mod popup;
mod search_bar;
pub mod status;

pub use map_canvas::render_map;
pub use place_list::render_place_list;
pub use search_bar::render_search_bar;
pub use status::render_status_bar;

/// Konvertiert eine RGBA-Farbe aus den Optionen in `Color32`.
fn color32(rgba: [f32; 4]) -> egui::Color32 {
    egui::Rgba::from_rgba_unmultiplied(rgba[0], rgba[1], rgba[2], rgba[3]).into()
}
