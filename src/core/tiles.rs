//! Kachel-Layer: URL-Vorlage und Berechnung der sichtbaren Kacheln.

use super::camera::{MapCamera, TILE_SIZE};
use glam::DVec2;

/// Höchste Kachel-Zoomstufe, die ein Kachel-Layer anbieten kann.
pub const MAX_TILE_ZOOM: u8 = 22;

/// Adresse einer Kachel im XYZ-Schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileId {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

/// Eine sichtbare Kachel mit ihrer Bildschirmposition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibleTile {
    /// Kachel-Adresse (x bereits um die Datumsgrenze gewickelt)
    pub id: TileId,
    /// Obere linke Ecke im Viewport
    pub screen_min: DVec2,
    /// Kantenlänge im Viewport (skaliert bei Zwischen-Zoomstufen)
    pub size: f64,
}

/// Konfiguration der Hintergrund-Kacheln.
#[derive(Debug, Clone, PartialEq)]
pub struct TileLayer {
    /// URL-Vorlage mit `{s}`, `{z}`, `{x}`, `{y}`
    pub url_template: String,
    /// Subdomains für `{s}`
    pub subdomains: Vec<String>,
    /// Höchste verfügbare Zoom-Stufe
    pub max_zoom: u8,
    /// Quellenangabe (unten rechts eingeblendet)
    pub attribution: String,
}

impl TileLayer {
    /// Baut die URL einer Kachel aus der Vorlage.
    pub fn tile_url(&self, tile: TileId) -> String {
        let subdomain = if self.subdomains.is_empty() {
            ""
        } else {
            let index = (tile.x as usize + tile.y as usize) % self.subdomains.len();
            self.subdomains[index].as_str()
        };
        self.url_template
            .replace("{s}", subdomain)
            .replace("{z}", &tile.z.to_string())
            .replace("{x}", &tile.x.to_string())
            .replace("{y}", &tile.y.to_string())
    }

    /// Kachel-Zoomstufe für einen kontinuierlichen Kamera-Zoom.
    pub fn tile_zoom(&self, zoom: f64) -> u8 {
        let max_zoom = self.max_zoom.min(MAX_TILE_ZOOM);
        zoom.round().clamp(0.0, f64::from(max_zoom)) as u8
    }

    /// Alle Kacheln, die den Viewport der Kamera überdecken.
    pub fn visible_tiles(&self, camera: &MapCamera, viewport_size: DVec2) -> Vec<VisibleTile> {
        if viewport_size.x <= 0.0 || viewport_size.y <= 0.0 {
            return Vec::new();
        }

        let z = self.tile_zoom(camera.zoom);
        let scale = (camera.zoom - f64::from(z)).exp2();
        let tile_px = TILE_SIZE * scale;
        let tiles_per_axis = 1_i64 << z;

        // Obere linke Ecke des Viewports in Welt-Pixeln der Kachel-Zoomstufe
        let center = MapCamera::project(camera.center, f64::from(z));
        let top_left = center - viewport_size * 0.5 / scale;
        let bottom_right = center + viewport_size * 0.5 / scale;

        let x_start = (top_left.x / TILE_SIZE).floor() as i64;
        let x_end = (bottom_right.x / TILE_SIZE).floor() as i64;
        let y_start = ((top_left.y / TILE_SIZE).floor() as i64).max(0);
        let y_end = ((bottom_right.y / TILE_SIZE).floor() as i64).min(tiles_per_axis - 1);

        let mut tiles = Vec::new();
        for y in y_start..=y_end {
            for x in x_start..=x_end {
                let origin = DVec2::new(x as f64, y as f64) * TILE_SIZE;
                tiles.push(VisibleTile {
                    id: TileId {
                        x: x.rem_euclid(tiles_per_axis) as u32,
                        y: y as u32,
                        z,
                    },
                    screen_min: (origin - top_left) * scale,
                    size: tile_px,
                });
            }
        }
        tiles
    }
}
