//! Places Map.
//!
//! Interaktive Karte mit synchronisierter Ortsliste und Textsuche.
//! Marker, Listeneinträge und Suchergebnis bleiben stets deckungsgleich.

use eframe::egui;
use places_map::app::use_cases;
use places_map::{ui, AppController, AppIntent, AppState, LoadState, ViewerOptions};
use std::time::Duration;

/// Abfrage-Intervall für den Lade-Thread.
const LOAD_POLL_INTERVAL: Duration = Duration::from_millis(50);

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Places Map v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("Places Map"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "Places Map",
            options,
            Box::new(|cc| {
                // SVG-Marker, Datei-Icons und HTTP-Kacheln
                egui_extras::install_image_loaders(&cc.egui_ctx);
                Ok(Box::new(PlacesApp::new()))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct PlacesApp {
    state: AppState,
    controller: AppController,
    /// Intents, die vor dem ersten Frame feststehen
    startup_intents: Vec<AppIntent>,
}

impl PlacesApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = ViewerOptions::config_path();
        let viewer_options = ViewerOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(viewer_options),
            controller: AppController::new(),
            startup_intents: vec![AppIntent::LoadPlacesRequested],
        }
    }
}

impl eframe::App for PlacesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = std::mem::take(&mut self.startup_intents);
        events.extend(self.collect_ui_events(ctx));

        if let Some(intent) = use_cases::data_load::poll_pending(&mut self.state) {
            events.push(intent);
        }

        let has_meaningful_events = events
            .iter()
            .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

        self.process_events(events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl PlacesApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_search_bar(ctx, &self.state));
        events.extend(ui::render_place_list(ctx, &mut self.state));

        let scene = self.controller.build_map_scene(&self.state);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let rect = ui.available_rect_before_wrap();
                events.extend(ui::render_map(ui, &scene));

                let overlay = match &self.state.ui.load_state {
                    LoadState::Loading => Some(("Caricamento luoghi…", egui::Color32::BLACK)),
                    LoadState::Failed(_) => Some((
                        "Impossibile caricare i luoghi",
                        egui::Color32::DARK_RED,
                    )),
                    LoadState::Loaded if !scene.has_markers() => {
                        Some(("Nessun luogo corrisponde alla ricerca", egui::Color32::BLACK))
                    }
                    _ => None,
                };
                if let Some((text, color)) = overlay {
                    ui.painter().text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        text,
                        egui::FontId::proportional(20.0),
                        color,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events {
            ctx.request_repaint();
        } else if self.state.is_loading() {
            ctx.request_repaint_after(LOAD_POLL_INTERVAL);
        }
    }
}
