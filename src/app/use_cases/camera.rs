//! Use-Case-Funktionen für Kamera-Steuerung und Viewport.

use crate::app::AppState;

/// Aktualisiert die Viewport-Größe (holt ein vorgemerktes Einpassen nach).
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    state.map.resize(size, &state.options);
}

/// Verschiebt die Karte um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    state.map.camera.pan_by_pixels(delta.as_dvec2());
}

/// Zoomt um `delta` Stufen.
///
/// Falls `focus` angegeben ist, bleibt der Punkt unter dem Zeiger nach dem
/// Zoom an derselben Bildschirmposition.
pub fn zoom(state: &mut AppState, delta: f32, focus: Option<glam::Vec2>) {
    let viewport = state.map.viewport_vec();
    state.map.camera.zoom_around(
        f64::from(delta),
        focus.map(|f| f.as_dvec2()),
        viewport,
        state.options.zoom_min,
        state.options.zoom_max(),
    );
}

/// Setzt die Kamera auf Start-Mittelpunkt und -Zoom zurück.
pub fn reset_view(state: &mut AppState) {
    let center = state.options.initial_center();
    let zoom = state.options.map_zoom;
    state.map.set_view(center, zoom, &state.options);
}
