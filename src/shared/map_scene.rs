//! Karten-Szene als expliziter Übergabevertrag zwischen App und Karten-Canvas.
//!
//! Lebt im shared-Modul, da `app` sie baut und `ui::map_canvas` sie konsumiert.

use super::options::ViewerOptions;
use crate::core::{GeoPoint, MapCamera, TileLayer};

/// Quelle eines Marker-Icons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerIcon {
    /// Eingebettetes Standard-Icon
    Default,
    /// Bild-URI (`file://…`, `http(s)://…`) für die egui-Loader
    Uri(String),
}

impl MarkerIcon {
    /// Löst eine Icon-Angabe aus den Daten in eine URI auf.
    ///
    /// Absolute URIs bleiben unverändert, alles andere gilt als Dateipfad.
    pub fn resolve(icon: Option<&str>) -> Self {
        match icon {
            None => Self::Default,
            Some(uri) if uri.contains("://") => Self::Uri(uri.to_string()),
            Some(path) => Self::Uri(format!(
                "file://{}",
                path.strip_prefix("./").unwrap_or(path)
            )),
        }
    }
}

/// Ein Link-Button im Popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupLink {
    pub label: String,
    pub url: String,
}

/// Inhalt des Info-Popups eines Markers.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub title: String,
    pub city: String,
    pub address: Option<String>,
    pub notes: Option<String>,
    /// Routen-Link zuerst, danach optional Webseite und Buchung
    pub links: Vec<PopupLink>,
}

/// Ein Marker im aktuellen Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneMarker {
    pub id: String,
    pub position: GeoPoint,
    /// Text des permanenten Labels
    pub label: String,
    pub icon: MarkerIcon,
    /// Zum aktiven Listeneintrag gehörig
    pub active: bool,
}

/// Das geöffnete Popup im aktuellen Frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePopup {
    /// Ankerposition (Marker-Koordinate)
    pub position: GeoPoint,
    pub content: PopupContent,
}

/// Read-only Daten für einen Karten-Frame.
#[derive(Debug, Clone)]
pub struct MapScene {
    /// Kamera-Zustand für diesen Frame
    pub camera: MapCamera,
    /// Viewport-Größe in Pixeln [Breite, Höhe]
    pub viewport_size: [f32; 2],
    /// Alle Marker in Render-Reihenfolge
    pub markers: Vec<SceneMarker>,
    /// Geöffnetes Popup (höchstens eines)
    pub popup: Option<ScenePopup>,
    /// Hintergrund-Kacheln
    pub tile_layer: TileLayer,
    /// Laufzeit-Optionen für Farben und Größen
    pub options: ViewerOptions,
}

impl MapScene {
    /// Gibt zurück, ob Marker zu zeichnen sind.
    pub fn has_markers(&self) -> bool {
        !self.markers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::MarkerIcon;

    #[test]
    fn resolve_icon_variants() {
        assert_eq!(MarkerIcon::resolve(None), MarkerIcon::Default);
        assert_eq!(
            MarkerIcon::resolve(Some("https://cdn.example.org/pin.png")),
            MarkerIcon::Uri("https://cdn.example.org/pin.png".to_string())
        );
        assert_eq!(
            MarkerIcon::resolve(Some("./hotel-marker.svg")),
            MarkerIcon::Uri("file://hotel-marker.svg".to_string())
        );
    }
}
