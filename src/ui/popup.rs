//! Info-Popup eines Markers.

use crate::app::AppIntent;
use crate::shared::PopupContent;

const POPUP_WIDTH: f32 = 260.0;

/// Zeigt das Popup über `anchor` und gibt erzeugte Events zurück.
pub(super) fn render_popup(
    ctx: &egui::Context,
    content: &PopupContent,
    anchor: egui::Pos2,
    bounds: egui::Rect,
) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::Area::new(egui::Id::new("place_popup"))
        .order(egui::Order::Foreground)
        .fixed_pos(anchor)
        .pivot(egui::Align2::CENTER_BOTTOM)
        .constrain_to(bounds)
        .show(ctx, |ui| {
            egui::Frame::popup(ui.style()).show(ui, |ui| {
                ui.set_max_width(POPUP_WIDTH);

                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new(&content.title).strong().size(15.0));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.small_button("✖").clicked() {
                            events.push(AppIntent::PopupClosed);
                        }
                    });
                });

                if !content.city.is_empty() {
                    ui.label(egui::RichText::new(&content.city).weak());
                }
                if let Some(address) = &content.address {
                    ui.label(address);
                }
                if let Some(notes) = &content.notes {
                    ui.label(egui::RichText::new(notes).italics());
                }

                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    for link in &content.links {
                        ui.add(
                            egui::Hyperlink::from_label_and_url(&link.label, &link.url)
                                .open_in_new_tab(true),
                        );
                    }
                });
            });
        });

    events
}
