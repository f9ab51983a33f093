//! Use-Case-Funktionen für die Auswahl-Weiterleitung zwischen Karte und Liste.
//!
//! Unbekannte IDs (z.B. veraltete Events nach einem Re-Render) sind No-Ops.

use crate::app::AppState;

/// Markiert die Karte mit `id` als aktiv.
pub fn highlight_card(state: &mut AppState, id: &str) {
    if !state.list.contains(id) {
        log::debug!("Keine Karte für ID '{}', Hervorhebung übersprungen", id);
        return;
    }
    state.list.set_active(id);
}

/// Zentriert die Karte auf den Ort (Zoom mindestens `detail_zoom`) und öffnet sein Popup.
pub fn focus_place(state: &mut AppState, id: &str) {
    if !state.map.pan_to(id, &state.options) {
        log::debug!("Kein Marker für ID '{}', Fokus übersprungen", id);
    }
}

/// Öffnet das Popup des Markers mit `id`.
pub fn open_popup(state: &mut AppState, id: &str) {
    if !state.map.open_popup(id) {
        log::debug!("Kein Marker für ID '{}', Popup übersprungen", id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Place;

    fn rendered_state() -> AppState {
        let mut state = AppState::new();
        let options = state.options.clone();
        let places = vec![
            Place::new("1", "Museo Egizio", "Torino", 45.0684, 7.6843),
            Place::new("2", "Mole Antonelliana", "Torino", 45.0690, 7.6932),
        ];
        state.map.resize([1024.0, 768.0], &options);
        state.map.render(&places, &options);
        state.list.render(&places);
        state
    }

    #[test]
    fn highlight_unknown_id_keeps_active_card() {
        let mut state = rendered_state();
        highlight_card(&mut state, "1");

        highlight_card(&mut state, "missing");

        assert_eq!(state.list.active_id(), Some("1"));
    }

    #[test]
    fn focus_place_raises_zoom_to_detail_level() {
        let mut state = rendered_state();
        state.map.camera.zoom = 5.0;

        focus_place(&mut state, "2");

        assert!(state.map.camera.zoom >= state.options.detail_zoom);
        assert_eq!(
            state.map.open_popup_marker().map(|m| m.id.as_str()),
            Some("2")
        );
    }
}
