//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, LoadState};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            match &state.ui.load_state {
                LoadState::Idle => {
                    ui.label("Nessun dato");
                }
                LoadState::Loading => {
                    ui.spinner();
                    ui.label(format!("Caricamento da {}…", state.options.data_source));
                }
                LoadState::Loaded => {
                    ui.label(format!(
                        "Luoghi: {} / {}",
                        state.visible_count(),
                        state.total_count()
                    ));
                }
                LoadState::Failed(message) => {
                    ui.label(egui::RichText::new(message).color(egui::Color32::RED));
                }
            }

            ui.separator();

            let center = state.map.camera.center;
            ui.label(format!(
                "Zoom: {:.1} | Centro: ({:.4}, {:.4})",
                state.map.camera.zoom, center.lat, center.lng
            ));

            if !state.query.is_empty() {
                ui.separator();
                ui.label(format!("Filtro: \"{}\"", state.query));
            }

            // Statusnachricht (z.B. doppelte IDs)
            if let Some(ref msg) = state.ui.status_message {
                ui.separator();
                ui.label(egui::RichText::new(format!("⚠ {}", msg)).color(egui::Color32::YELLOW));
            }
        });
    });
}
