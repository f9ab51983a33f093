use crate::core::Place;

/// Commands sind mutierende Operationen, die vom Controller ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Ladevorgang aus der konfigurierten Quelle starten
    StartPlacesLoad,
    /// Place-Store ersetzen und aktuelle Suche neu anwenden
    ReplacePlaceStore { places: Vec<Place> },
    /// Fatalen Ladefehler festhalten
    RecordLoadFailure { message: String },
    /// Suche setzen: filtern, Karte und Liste neu aufbauen
    SetQuery { query: String },
    /// Karte in der Liste hervorheben
    HighlightCard { id: String },
    /// Karte auf Ort zentrieren (Mindest-Zoom) und Popup öffnen
    FocusPlace { id: String },
    /// Popup eines Markers öffnen
    OpenPopup { id: String },
    /// Popup schließen
    ClosePopup,
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kamera verschieben
    PanCamera { delta: glam::Vec2 },
    /// Kamera zoomen
    ZoomCamera {
        delta: f32,
        focus: Option<glam::Vec2>,
    },
    /// Start-Ansicht wiederherstellen
    ResetView,
}
