//! Suchleiste über Karte und Liste.

use crate::app::{AppIntent, AppState};

/// Rendert die Suchleiste und gibt erzeugte Events zurück.
///
/// Jede Änderung des Suchtexts erzeugt sofort ein `SearchQueryChanged`
/// (keine Entprellung). Escape oder der Leeren-Button setzen die Suche zurück.
pub fn render_search_bar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("search_bar").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label("🔍");

            let mut input = state.ui.search_input.clone();
            let response = ui.add(
                egui::TextEdit::singleline(&mut input)
                    .hint_text("Cerca per nome, città o indirizzo")
                    .desired_width(360.0),
            );

            if response.changed() {
                events.push(AppIntent::SearchQueryChanged { query: input });
            } else if response.lost_focus()
                && ui.input(|i| i.key_pressed(egui::Key::Escape))
                && !state.ui.search_input.is_empty()
            {
                events.push(AppIntent::SearchCleared);
            }

            if !state.ui.search_input.is_empty()
                && ui.small_button("✖").on_hover_text("Svuota ricerca").clicked()
            {
                events.push(AppIntent::SearchCleared);
            }

            ui.separator();

            let reload = ui
                .add_enabled(!state.is_loading(), egui::Button::new("⟳ Ricarica"))
                .on_hover_text(format!("Ricarica da {}", state.options.data_source));
            if reload.clicked() {
                events.push(AppIntent::LoadPlacesRequested);
            }
        });
        ui.add_space(4.0);
    });

    events
}
