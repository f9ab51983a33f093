//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::LoadPlacesRequested => {
            if state.is_loading() {
                log::debug!("Ladevorgang läuft bereits, Anfrage ignoriert");
                vec![]
            } else {
                vec![AppCommand::StartPlacesLoad]
            }
        }
        AppIntent::PlacesLoaded { places } => vec![AppCommand::ReplacePlaceStore { places }],
        AppIntent::PlacesLoadFailed { message } => {
            vec![AppCommand::RecordLoadFailure { message }]
        }
        AppIntent::SearchQueryChanged { query } => vec![AppCommand::SetQuery { query }],
        AppIntent::SearchCleared => vec![AppCommand::SetQuery {
            query: String::new(),
        }],
        AppIntent::MarkerClicked { id } => {
            // Veraltete Events nach einem Re-Render sind No-Ops
            if !state.map.has_marker(&id) {
                log::debug!("Marker-Klick auf unbekannte ID '{}' ignoriert", id);
                return vec![];
            }
            vec![
                AppCommand::OpenPopup { id: id.clone() },
                AppCommand::HighlightCard { id },
            ]
        }
        AppIntent::CardClicked { id } => {
            if !state.list.contains(&id) {
                log::debug!("Karten-Klick auf unbekannte ID '{}' ignoriert", id);
                return vec![];
            }
            vec![
                AppCommand::FocusPlace { id: id.clone() },
                AppCommand::HighlightCard { id },
            ]
        }
        AppIntent::PopupClosed => vec![AppCommand::ClosePopup],
        AppIntent::ViewportResized { size } => {
            if state.map.viewport_size == size {
                vec![]
            } else {
                vec![AppCommand::SetViewportSize { size }]
            }
        }
        AppIntent::CameraPan { delta } => vec![AppCommand::PanCamera { delta }],
        AppIntent::CameraZoom { delta, focus } => vec![AppCommand::ZoomCamera { delta, focus }],
        AppIntent::ZoomInRequested => vec![AppCommand::ZoomCamera {
            delta: 1.0,
            focus: None,
        }],
        AppIntent::ZoomOutRequested => vec![AppCommand::ZoomCamera {
            delta: -1.0,
            focus: None,
        }],
        AppIntent::ResetViewRequested => vec![AppCommand::ResetView],
    }
}
