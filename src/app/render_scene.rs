//! Builder für Karten-Szenen aus dem AppState.

use crate::app::AppState;
use crate::shared::{MapScene, SceneMarker, ScenePopup};

/// Baut eine MapScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> MapScene {
    let markers = state
        .map
        .markers()
        .iter()
        .enumerate()
        // Marker und Karten entstehen aus derselben gefilterten Menge, Indizes stimmen überein
        .map(|(index, marker)| SceneMarker {
            id: marker.id.clone(),
            position: marker.position,
            label: marker.label.clone(),
            icon: marker.icon.clone(),
            active: state.list.is_active_at(index),
        })
        .collect();

    let popup = state.map.open_popup_marker().map(|marker| ScenePopup {
        position: marker.position,
        content: marker.popup.clone(),
    });

    MapScene {
        camera: state.map.camera.clone(),
        viewport_size: state.map.viewport_size,
        markers,
        popup,
        tile_layer: state.options.tile_layer(),
        options: state.options.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::AppState;
    use crate::core::Place;

    #[test]
    fn build_marks_active_marker_and_open_popup() {
        let mut state = AppState::new();
        let options = state.options.clone();
        let places = vec![
            Place::new("1", "Museo Egizio", "Torino", 45.0684, 7.6843),
            Place::new("2", "Castello", "Rivoli", 45.0707, 7.5119),
        ];
        state.map.resize([800.0, 600.0], &options);
        state.map.render(&places, &options);
        state.list.render(&places);

        state.list.set_active("2");
        state.map.open_popup("2");
        let scene = build(&state);

        assert_eq!(scene.markers.len(), 2);
        assert!(!scene.markers[0].active);
        assert!(scene.markers[1].active);
        let popup = scene.popup.expect("Popup erwartet");
        assert_eq!(popup.content.title, "Castello");
        assert_eq!(popup.content.links[0].label, "Indicazioni");
    }

    #[test]
    fn build_without_places_has_no_markers() {
        let state = AppState::new();
        let scene = build(&state);

        assert!(!scene.has_markers());
        assert!(scene.popup.is_none());
    }
}
