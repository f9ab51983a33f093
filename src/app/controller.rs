//! Application Controller für zentrale Event-Verarbeitung.
//!
//! Der Controller ist der View-Koordinator: er hält Karte und Liste über
//! dieselbe gefilterte Ortsmenge synchron und leitet Auswahl-Events
//! zwischen beiden Ansichten weiter.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::MapScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Daten ===
            AppCommand::StartPlacesLoad => handlers::data::start_load(state),
            AppCommand::ReplacePlaceStore { places } => handlers::data::replace_store(state, places),
            AppCommand::RecordLoadFailure { message } => {
                handlers::data::record_failure(state, message)
            }

            // === Suche ===
            AppCommand::SetQuery { query } => handlers::search::set_query(state, query),

            // === Auswahl ===
            AppCommand::HighlightCard { id } => handlers::selection::highlight_card(state, &id),
            AppCommand::FocusPlace { id } => handlers::selection::focus_place(state, &id),
            AppCommand::OpenPopup { id } => handlers::selection::open_popup(state, &id),
            AppCommand::ClosePopup => handlers::selection::close_popup(state),

            // === Kamera & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::PanCamera { delta } => handlers::view::pan(state, delta),
            AppCommand::ZoomCamera { delta, focus } => handlers::view::zoom(state, delta, focus),
            AppCommand::ResetView => handlers::view::reset_view(state),
        }

        Ok(())
    }

    /// Baut die Karten-Szene aus dem aktuellen AppState.
    pub fn build_map_scene(&self, state: &AppState) -> MapScene {
        render_scene::build(state)
    }
}
