//! Seitenleiste mit einer Karte pro sichtbarem Ort.

use super::color32;
use crate::app::{AppIntent, AppState, Card};

/// Rendert die Ortsliste und gibt erzeugte Events zurück.
///
/// Klick auf eine Karte erzeugt `CardClicked`. Wurde die aktive Karte über
/// die Karte (Marker) gesetzt, wird sie einmalig in den sichtbaren Bereich gescrollt.
pub fn render_place_list(ctx: &egui::Context, state: &mut AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();
    let active_stroke = egui::Stroke::new(2.0, color32(state.options.active_card_color));
    let mut scrolled = false;

    egui::SidePanel::left("place_list")
        .default_width(state.options.list_panel_width)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Luoghi");
            ui.separator();

            if state.list.cards().is_empty() {
                if state.store.is_some() {
                    ui.label("Nessun risultato");
                }
                return;
            }

            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for (index, card) in state.list.cards().iter().enumerate() {
                        let active = state.list.is_active_at(index);
                        let response = render_card(ui, card, active, active_stroke);

                        if response.clicked() {
                            events.push(AppIntent::CardClicked {
                                id: card.id.clone(),
                            });
                        }
                        if active && state.list.scroll_to_active {
                            response.scroll_to_me(Some(egui::Align::Center));
                            scrolled = true;
                        }
                        ui.add_space(4.0);
                    }
                });
        });

    if scrolled {
        state.list.scroll_to_active = false;
    }

    events
}

fn render_card(ui: &mut egui::Ui, card: &Card, active: bool, active_stroke: egui::Stroke) -> egui::Response {
    let mut frame = egui::Frame::group(ui.style()).inner_margin(8.0);
    if active {
        frame = frame
            .stroke(active_stroke)
            .fill(ui.visuals().selection.bg_fill.gamma_multiply(0.35));
    }

    let inner = frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(egui::RichText::new(&card.title).strong());
        ui.label(egui::RichText::new(&card.meta).weak());
        if let Some(address) = &card.address {
            ui.label(egui::RichText::new(address).small());
        }
    });

    inner
        .response
        .interact(egui::Sense::click())
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}
