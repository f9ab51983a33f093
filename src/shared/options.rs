//! Zentrale Konfiguration für die Orts-Karte.
//!
//! `ViewerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{GeoPoint, TileLayer, MAX_TILE_ZOOM};
use serde::Deserialize;

// ── Daten ───────────────────────────────────────────────────────────

/// Standard-Datenquelle (Pfad relativ zum Arbeitsverzeichnis oder URL).
pub const DATA_SOURCE: &str = "places.json";

// ── Kamera ──────────────────────────────────────────────────────────

/// Start-Mittelpunkt der Karte [lat, lng].
pub const MAP_CENTER: [f64; 2] = [45.11, 7.78];
/// Start-Zoomstufe.
pub const MAP_ZOOM: f64 = 11.0;
/// Mindest-Zoom beim Fokussieren eines Ortes aus der Liste.
pub const DETAIL_ZOOM: f64 = 14.0;
/// Rand beim Einpassen aller Orte (Anteil der Box-Ausdehnung je Seite).
pub const FIT_PADDING: f64 = 0.15;
/// Minimale Zoomstufe.
pub const ZOOM_MIN: f64 = 0.0;
/// Scroll-Pixel pro Zoomstufe.
pub const SCROLL_PX_PER_ZOOM_LEVEL: f32 = 60.0;

// ── Kacheln ─────────────────────────────────────────────────────────

/// OpenStreetMap-Standardlayer.
pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
/// Maximale Kachel-Zoomstufe (zugleich maximaler Karten-Zoom).
pub const TILE_MAX_ZOOM: u8 = 19;
/// Quellenangabe der Kacheln.
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";

// ── Marker ──────────────────────────────────────────────────────────

/// Icon-Größe in Pixeln [Breite, Höhe]; Ankerpunkt unten mittig.
pub const ICON_SIZE: [f32; 2] = [38.0, 52.0];
/// Abstand des permanenten Labels unter dem Ankerpunkt.
pub const LABEL_OFFSET_PX: f32 = 10.0;
/// Textfarbe der Marker-Labels (RGBA).
pub const LABEL_TEXT_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Hintergrund der Marker-Labels (RGBA).
pub const LABEL_BACKGROUND_COLOR: [f32; 4] = [0.08, 0.09, 0.12, 0.85];

// ── Liste ───────────────────────────────────────────────────────────

/// Rahmenfarbe der aktiven Karte (RGBA).
pub const ACTIVE_CARD_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 0.25];
/// Breite der Listen-Seitenleiste.
pub const LIST_PANEL_WIDTH: f32 = 320.0;

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `places_map.toml` neben der Binary gespeichert.
/// Fehlende Felder werden mit Standardwerten aufgefüllt.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ViewerOptions {
    // ── Daten ───────────────────────────────────────────────────
    /// Pfad oder http(s)-URL der Orts-Datei
    pub data_source: String,

    // ── Kamera ──────────────────────────────────────────────────
    /// Start-Mittelpunkt [lat, lng]
    pub map_center: [f64; 2],
    /// Start-Zoom
    pub map_zoom: f64,
    /// Mindest-Zoom beim Fokussieren aus der Liste
    pub detail_zoom: f64,
    /// Rand beim Einpassen (0.15 = 15 % je Seite)
    pub fit_padding: f64,
    /// Minimaler Zoom
    pub zoom_min: f64,
    /// Scroll-Pixel pro Zoomstufe
    pub scroll_px_per_zoom_level: f32,

    // ── Kacheln ─────────────────────────────────────────────────
    /// URL-Vorlage der Kacheln
    pub tile_url: String,
    /// Subdomains für `{s}`
    pub tile_subdomains: Vec<String>,
    /// Maximaler Kachel-Zoom (begrenzt auch den Karten-Zoom)
    pub tile_max_zoom: u8,
    /// Quellenangabe
    pub tile_attribution: String,

    // ── Marker ──────────────────────────────────────────────────
    /// Standard-Icon (Pfad/URI); `None` = eingebettetes Icon
    #[serde(default)]
    pub default_icon: Option<String>,
    /// Icon-Größe [Breite, Höhe]
    pub icon_size: [f32; 2],
    /// Abstand Label ↔ Ankerpunkt
    pub label_offset_px: f32,
    /// Label-Textfarbe
    pub label_text_color: [f32; 4],
    /// Label-Hintergrund
    pub label_background_color: [f32; 4],

    // ── Liste ───────────────────────────────────────────────────
    /// Rahmenfarbe der aktiven Karte
    pub active_card_color: [f32; 4],
    /// Breite der Listen-Seitenleiste
    pub list_panel_width: f32,
}

impl Default for ViewerOptions {
    fn default() -> Self {
        Self {
            data_source: DATA_SOURCE.to_string(),

            map_center: MAP_CENTER,
            map_zoom: MAP_ZOOM,
            detail_zoom: DETAIL_ZOOM,
            fit_padding: FIT_PADDING,
            zoom_min: ZOOM_MIN,
            scroll_px_per_zoom_level: SCROLL_PX_PER_ZOOM_LEVEL,

            tile_url: TILE_URL.to_string(),
            tile_subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            tile_max_zoom: TILE_MAX_ZOOM,
            tile_attribution: TILE_ATTRIBUTION.to_string(),

            default_icon: None,
            icon_size: ICON_SIZE,
            label_offset_px: LABEL_OFFSET_PX,
            label_text_color: LABEL_TEXT_COLOR,
            label_background_color: LABEL_BACKGROUND_COLOR,

            active_card_color: ACTIVE_CARD_COLOR,
            list_panel_width: LIST_PANEL_WIDTH,
        }
    }
}

impl ViewerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("places_map"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("places_map.toml")
    }

    /// Begrenzt Zoom-Werte auf den Bereich, den Kamera und Kacheln verarbeiten.
    fn sanitized(mut self) -> Self {
        if self.tile_max_zoom > MAX_TILE_ZOOM {
            log::warn!(
                "tile_max_zoom {} zu groß, begrenzt auf {}",
                self.tile_max_zoom,
                MAX_TILE_ZOOM
            );
            self.tile_max_zoom = MAX_TILE_ZOOM;
        }
        let zoom_max = self.zoom_max();
        if !(0.0..=zoom_max).contains(&self.zoom_min) {
            log::warn!("zoom_min {} außerhalb von 0..={}, begrenzt", self.zoom_min, zoom_max);
            self.zoom_min = self.zoom_min.clamp(0.0, zoom_max);
        }
        self
    }

    /// Start-Mittelpunkt als Koordinate.
    pub fn initial_center(&self) -> GeoPoint {
        GeoPoint::from(self.map_center)
    }

    /// Maximaler Karten-Zoom (= maximaler Kachel-Zoom).
    pub fn zoom_max(&self) -> f64 {
        f64::from(self.tile_max_zoom)
    }

    /// Kachel-Layer aus den Optionen.
    pub fn tile_layer(&self) -> TileLayer {
        TileLayer {
            url_template: self.tile_url.clone(),
            subdomains: self.tile_subdomains.clone(),
            max_zoom: self.tile_max_zoom,
            attribution: self.tile_attribution.clone(),
        }
    }
}
