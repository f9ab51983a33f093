//! Handler für das Laden der Orts-Datei.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Place;

/// Startet den Ladevorgang aus der konfigurierten Quelle.
pub fn start_load(state: &mut AppState) {
    use_cases::data_load::start_load(state);
}

/// Ersetzt den Place-Store und wendet die aktuelle Suche neu an.
pub fn replace_store(state: &mut AppState, places: Vec<Place>) {
    use_cases::data_load::install_places(state, places);
}

/// Hält einen fatalen Ladefehler fest.
pub fn record_failure(state: &mut AppState, message: String) {
    use_cases::data_load::record_failure(state, message);
}
