use crate::core::Place;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Orts-Datei laden (Start und „Neu laden“)
    LoadPlacesRequested,
    /// Hintergrund-Thread hat die Orte geliefert
    PlacesLoaded { places: Vec<Place> },
    /// Laden ist fehlgeschlagen
    PlacesLoadFailed { message: String },
    /// Suchfeld geändert (roher Text)
    SearchQueryChanged { query: String },
    /// Suche leeren (Escape / Leeren-Button)
    SearchCleared,
    /// Marker auf der Karte angeklickt
    MarkerClicked { id: String },
    /// Karte in der Liste angeklickt
    CardClicked { id: String },
    /// Popup geschlossen (Schließen-Button oder Klick ins Leere)
    PopupClosed,
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Karte um Pixel-Delta verschieben
    CameraPan { delta: glam::Vec2 },
    /// Zoom um `delta` Stufen (optional um einen Viewport-Punkt)
    CameraZoom {
        delta: f32,
        focus: Option<glam::Vec2>,
    },
    /// Eine Zoomstufe hinein
    ZoomInRequested,
    /// Eine Zoomstufe heraus
    ZoomOutRequested,
    /// Start-Ansicht wiederherstellen
    ResetViewRequested,
}
