//! Application State: zentrale Datenhaltung.
//!
//! Ersetzt globale Modul-Variablen (Datenbestand, Marker-Zuordnung) durch
//! einen einzigen, vom Controller mutierten Zustand.

mod list_view;
mod map_view;

pub use list_view::{Card, ListView};
pub use map_view::{popup_content, MapView, MarkerHandle};

use super::CommandLog;
use crate::core::PlaceStore;
use crate::shared::ViewerOptions;
use crate::source::PendingLoad;

/// Fortschritt des Ladens der Orts-Datei
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Noch kein Ladevorgang gestartet
    #[default]
    Idle,
    /// Hintergrund-Thread arbeitet
    Loading,
    /// Place-Store befüllt
    Loaded,
    /// Laden fehlgeschlagen (fatal, keine Ansicht wird befüllt)
    Failed(String),
}

/// UI-bezogener Anwendungszustand
#[derive(Debug, Default)]
pub struct UiState {
    /// Inhalt des Suchfelds (roh, nicht normalisiert)
    pub search_input: String,
    /// Ladezustand für Statusleiste und Repaint-Steuerung
    pub load_state: LoadState,
    /// Statusnachricht (z.B. doppelte IDs)
    pub status_message: Option<String>,
}

/// Haupt-Anwendungszustand
pub struct AppState {
    /// Geladener Datenbestand (unveränderlich nach dem Laden)
    pub store: Option<PlaceStore>,
    /// Aktuelle, normalisierte Suche
    pub query: String,
    /// Karten-Ansicht
    pub map: MapView,
    /// Listen-Ansicht
    pub list: ListView,
    /// UI-Zustand
    pub ui: UiState,
    /// Laufzeit-Optionen
    pub options: ViewerOptions,
    /// Laufender Ladevorgang (wird pro Frame abgefragt)
    pub pending_load: Option<PendingLoad>,
    /// Command-Log
    pub command_log: CommandLog,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen leeren Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(ViewerOptions::default())
    }

    /// Erstellt einen leeren Zustand mit den gegebenen Optionen.
    pub fn with_options(options: ViewerOptions) -> Self {
        Self {
            store: None,
            query: String::new(),
            map: MapView::new(&options),
            list: ListView::new(),
            ui: UiState::default(),
            options,
            pending_load: None,
            command_log: CommandLog::new(),
        }
    }

    /// Anzahl aller geladenen Orte.
    pub fn total_count(&self) -> usize {
        self.store.as_ref().map_or(0, PlaceStore::len)
    }

    /// Anzahl der aktuell sichtbaren Orte.
    pub fn visible_count(&self) -> usize {
        self.list.cards().len()
    }

    /// Gibt zurück, ob gerade geladen wird.
    pub fn is_loading(&self) -> bool {
        self.ui.load_state == LoadState::Loading
    }
}
