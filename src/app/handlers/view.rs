//! Handler für Kamera und Viewport.

use crate::app::use_cases;
use crate::app::AppState;

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::camera::resize(state, size);
}

/// Verschiebt die Karte um ein Pixel-Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    use_cases::camera::pan(state, delta);
}

/// Zoomt um `delta` Stufen mit optionalem Fokuspunkt im Viewport.
pub fn zoom(state: &mut AppState, delta: f32, focus: Option<glam::Vec2>) {
    use_cases::camera::zoom(state, delta, focus);
}

/// Setzt die Kamera auf die Start-Ansicht zurück.
pub fn reset_view(state: &mut AppState) {
    use_cases::camera::reset_view(state);
}
