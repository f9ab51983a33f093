//! Karten-Canvas: Kacheln, Marker mit permanenten Labels und Kamera-Gesten.

use super::{color32, popup};
use crate::app::AppIntent;
use crate::core::GeoPoint;
use crate::shared::{MapScene, MarkerIcon, SceneMarker};
use glam::DVec2;

const LABEL_FONT_SIZE: f32 = 12.0;
const CONTROL_BUTTON_SIZE: f32 = 28.0;
const MAP_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(170, 211, 223);

/// Zeichnet die Karte in den verfügbaren Bereich und gibt erzeugte Events zurück.
pub fn render_map(ui: &mut egui::Ui, scene: &MapScene) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (rect, response) = ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
    let viewport_size = [rect.width(), rect.height()];
    events.push(AppIntent::ViewportResized {
        size: viewport_size,
    });

    // Die Szene stammt aus dem vorherigen Frame; Positionen mit ihrer Größe berechnen
    let scene_viewport = DVec2::new(
        f64::from(scene.viewport_size[0]),
        f64::from(scene.viewport_size[1]),
    );

    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, MAP_BACKGROUND);

    paint_tiles(ui, scene, rect, scene_viewport);

    let icon_rects: Vec<(egui::Rect, &SceneMarker)> = scene
        .markers
        .iter()
        .map(|marker| (icon_rect(scene, marker, rect, scene_viewport), marker))
        .collect();

    for (icon_rect, marker) in &icon_rects {
        if rect.expand(scene.options.icon_size[1]).intersects(*icon_rect) {
            paint_marker(ui, &painter, scene, marker, *icon_rect);
        }
    }

    paint_attribution(&painter, scene, rect);

    collect_pointer_events(ui, &response, scene, rect, &icon_rects, &mut events);
    render_controls(ui, rect, &mut events);

    if let Some(scene_popup) = &scene.popup {
        let anchor = to_screen(scene, scene_popup.position, rect, scene_viewport);
        if rect.contains(anchor) {
            let popup_anchor = anchor - egui::vec2(0.0, scene.options.icon_size[1]);
            events.extend(popup::render_popup(ui.ctx(), &scene_popup.content, popup_anchor, rect));
        }
    }

    events
}

fn to_screen(scene: &MapScene, point: GeoPoint, rect: egui::Rect, viewport: DVec2) -> egui::Pos2 {
    let screen = scene.camera.geo_to_screen(point, viewport);
    rect.min + egui::vec2(screen.x as f32, screen.y as f32)
}

/// Icon-Rechteck mit Ankerpunkt unten mittig.
fn icon_rect(scene: &MapScene, marker: &SceneMarker, rect: egui::Rect, viewport: DVec2) -> egui::Rect {
    let anchor = to_screen(scene, marker.position, rect, viewport);
    let [width, height] = scene.options.icon_size;
    egui::Rect::from_min_size(
        anchor - egui::vec2(width * 0.5, height),
        egui::vec2(width, height),
    )
}

fn paint_tiles(ui: &egui::Ui, scene: &MapScene, rect: egui::Rect, viewport: DVec2) {
    for tile in scene.tile_layer.visible_tiles(&scene.camera, viewport) {
        let size = tile.size as f32;
        let tile_rect = egui::Rect::from_min_size(
            rect.min + egui::vec2(tile.screen_min.x as f32, tile.screen_min.y as f32),
            egui::vec2(size, size),
        );
        if !rect.intersects(tile_rect) {
            continue;
        }
        egui::Image::new(scene.tile_layer.tile_url(tile.id))
            .show_loading_spinner(false)
            .paint_at(ui, tile_rect);
    }
}

fn paint_marker(
    ui: &egui::Ui,
    painter: &egui::Painter,
    scene: &MapScene,
    marker: &SceneMarker,
    icon_rect: egui::Rect,
) {
    let anchor = icon_rect.center_bottom();

    if marker.active {
        painter.circle_filled(
            anchor,
            icon_rect.width() * 0.35,
            color32(scene.options.active_card_color),
        );
    }

    let image = match &marker.icon {
        MarkerIcon::Default => egui::Image::new(egui::include_image!("../../assets/hotel-marker.svg")),
        MarkerIcon::Uri(uri) => egui::Image::new(uri.clone()),
    };
    image.show_loading_spinner(false).paint_at(ui, icon_rect);

    // Permanentes Label unter dem Ankerpunkt
    let galley = painter.layout_no_wrap(
        marker.label.clone(),
        egui::FontId::proportional(LABEL_FONT_SIZE),
        color32(scene.options.label_text_color),
    );
    let label_rect = egui::Rect::from_center_size(
        anchor + egui::vec2(0.0, scene.options.label_offset_px + galley.size().y * 0.5),
        galley.size() + egui::vec2(8.0, 4.0),
    );
    painter.rect_filled(label_rect, 4.0, color32(scene.options.label_background_color));
    painter.galley(
        label_rect.min + egui::vec2(4.0, 2.0),
        galley,
        color32(scene.options.label_text_color),
    );
}

fn paint_attribution(painter: &egui::Painter, scene: &MapScene, rect: egui::Rect) {
    let galley = painter.layout_no_wrap(
        scene.tile_layer.attribution.clone(),
        egui::FontId::proportional(10.0),
        egui::Color32::from_gray(40),
    );
    let padding = egui::vec2(4.0, 2.0);
    let box_rect = egui::Rect::from_min_max(
        rect.right_bottom() - galley.size() - padding * 2.0,
        rect.right_bottom(),
    );
    painter.rect_filled(box_rect, 0.0, egui::Color32::from_white_alpha(190));
    painter.galley(box_rect.min + padding, galley, egui::Color32::from_gray(40));
}

// ── Gesten ──────────────────────────────────────────────────────────

fn collect_pointer_events(
    ui: &egui::Ui,
    response: &egui::Response,
    scene: &MapScene,
    rect: egui::Rect,
    icon_rects: &[(egui::Rect, &SceneMarker)],
    events: &mut Vec<AppIntent>,
) {
    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            // Oberster Marker gewinnt (zuletzt gezeichnet)
            let hit = icon_rects
                .iter()
                .rev()
                .find(|(icon_rect, _)| icon_rect.contains(pos));
            match hit {
                Some((_, marker)) => events.push(AppIntent::MarkerClicked {
                    id: marker.id.clone(),
                }),
                None if scene.popup.is_some() => events.push(AppIntent::PopupClosed),
                None => {}
            }
        }
    }

    if response.double_clicked() {
        events.push(AppIntent::CameraZoom {
            delta: 1.0,
            focus: response
                .interact_pointer_pos()
                .map(|pos| to_viewport(pos, rect)),
        });
    }

    if response.dragged() {
        let delta = response.drag_delta();
        if delta != egui::Vec2::ZERO {
            events.push(AppIntent::CameraPan {
                delta: glam::Vec2::new(delta.x, delta.y),
            });
        }
    }

    if response.hovered() {
        let (scroll, pinch) = ui.input(|i| (i.smooth_scroll_delta.y, i.zoom_delta()));
        let mut delta = 0.0;
        if scroll != 0.0 {
            delta += scroll / scene.options.scroll_px_per_zoom_level;
        }
        if pinch != 1.0 {
            delta += pinch.log2();
        }
        if delta != 0.0 {
            events.push(AppIntent::CameraZoom {
                delta,
                focus: response.hover_pos().map(|pos| to_viewport(pos, rect)),
            });
        }
    }
}

fn to_viewport(pos: egui::Pos2, rect: egui::Rect) -> glam::Vec2 {
    let local = pos - rect.min;
    glam::Vec2::new(local.x, local.y)
}

fn render_controls(ui: &mut egui::Ui, rect: egui::Rect, events: &mut Vec<AppIntent>) {
    let size = egui::vec2(CONTROL_BUTTON_SIZE, CONTROL_BUTTON_SIZE);
    let origin = rect.min + egui::vec2(10.0, 10.0);
    let controls = [
        ("+", "Zoom avanti", AppIntent::ZoomInRequested),
        ("−", "Zoom indietro", AppIntent::ZoomOutRequested),
        ("⌂", "Vista iniziale", AppIntent::ResetViewRequested),
    ];

    for (row, (label, hover, intent)) in controls.into_iter().enumerate() {
        let button_rect = egui::Rect::from_min_size(
            origin + egui::vec2(0.0, row as f32 * (CONTROL_BUTTON_SIZE + 2.0)),
            size,
        );
        if ui
            .put(button_rect, egui::Button::new(label))
            .on_hover_text(hover)
            .clicked()
        {
            events.push(intent);
        }
    }
}
