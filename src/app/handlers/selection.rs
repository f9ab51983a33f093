//! Handler für die Auswahl zwischen Karte und Liste.

use crate::app::use_cases;
use crate::app::AppState;

/// Hebt die Karte mit `id` hervor (No-Op für unbekannte IDs).
pub fn highlight_card(state: &mut AppState, id: &str) {
    use_cases::selection::highlight_card(state, id);
}

/// Zentriert die Karte auf den Ort und öffnet sein Popup.
pub fn focus_place(state: &mut AppState, id: &str) {
    use_cases::selection::focus_place(state, id);
}

/// Öffnet das Popup des Markers.
pub fn open_popup(state: &mut AppState, id: &str) {
    use_cases::selection::open_popup(state, id);
}

/// Schließt das geöffnete Popup.
pub fn close_popup(state: &mut AppState) {
    state.map.close_popup();
}
