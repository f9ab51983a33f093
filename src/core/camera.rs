//! Karten-Kamera mit Web-Mercator-Projektion, Pan und Zoom.

use super::geo::{GeoBounds, GeoPoint};
use glam::DVec2;

/// Kantenlänge einer Kachel in Pixeln.
pub const TILE_SIZE: f64 = 256.0;

/// Maximaler Breitengrad der Web-Mercator-Projektion.
const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

/// Karten-Kamera: Mittelpunkt in Grad und Zoom-Stufe (0 = ganze Welt in einer Kachel)
#[derive(Debug, Clone, PartialEq)]
pub struct MapCamera {
    /// Kartenmittelpunkt
    pub center: GeoPoint,
    /// Zoom-Stufe (kontinuierlich, Tiles werden auf ganze Stufen gerundet)
    pub zoom: f64,
}

impl MapCamera {
    /// Erstellt eine Kamera mit Mittelpunkt und Zoom.
    pub fn new(center: GeoPoint, zoom: f64) -> Self {
        Self { center, zoom }
    }

    /// Weltgröße in Pixeln bei gegebener Zoom-Stufe.
    pub fn world_size(zoom: f64) -> f64 {
        TILE_SIZE * zoom.exp2()
    }

    /// Projiziert einen geografischen Punkt in Welt-Pixel bei `zoom`.
    pub fn project(point: GeoPoint, zoom: f64) -> DVec2 {
        let size = Self::world_size(zoom);
        let lat = point.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = (point.lng + 180.0) / 360.0 * size;
        let y = (0.5 - (lat.tan() + 1.0 / lat.cos()).ln() / (2.0 * std::f64::consts::PI)) * size;
        DVec2::new(x, y)
    }

    /// Inverse von [`MapCamera::project`].
    pub fn unproject(pixel: DVec2, zoom: f64) -> GeoPoint {
        let size = Self::world_size(zoom);
        let lng = pixel.x / size * 360.0 - 180.0;
        let n = std::f64::consts::PI * (1.0 - 2.0 * pixel.y / size);
        let lat = n.sinh().atan().to_degrees();
        GeoPoint::new(lat, lng)
    }

    /// Mittelpunkt in Welt-Pixeln beim aktuellen Zoom.
    pub fn center_pixel(&self) -> DVec2 {
        Self::project(self.center, self.zoom)
    }

    /// Konvertiert einen geografischen Punkt in Viewport-Koordinaten (Ursprung oben links).
    pub fn geo_to_screen(&self, point: GeoPoint, viewport_size: DVec2) -> DVec2 {
        Self::project(point, self.zoom) - self.center_pixel() + viewport_size * 0.5
    }

    /// Konvertiert Viewport-Koordinaten in einen geografischen Punkt.
    pub fn screen_to_geo(&self, screen_pos: DVec2, viewport_size: DVec2) -> GeoPoint {
        Self::unproject(
            self.center_pixel() + screen_pos - viewport_size * 0.5,
            self.zoom,
        )
    }

    /// Setzt Mittelpunkt und Zoom (Zoom wird begrenzt).
    pub fn set_view(&mut self, center: GeoPoint, zoom: f64, zoom_min: f64, zoom_max: f64) {
        self.center = center;
        self.zoom = zoom.clamp(zoom_min, zoom_max);
    }

    /// Verschiebt die Karte um ein Pixel-Delta (Inhalt folgt dem Zeiger).
    pub fn pan_by_pixels(&mut self, delta: DVec2) {
        self.center = Self::unproject(self.center_pixel() - delta, self.zoom);
    }

    /// Ändert den Zoom um `delta` Stufen.
    ///
    /// Mit `focus` (Viewport-Position) bleibt der Punkt unter dem Zeiger stabil.
    pub fn zoom_around(
        &mut self,
        delta: f64,
        focus: Option<DVec2>,
        viewport_size: DVec2,
        zoom_min: f64,
        zoom_max: f64,
    ) {
        let new_zoom = (self.zoom + delta).clamp(zoom_min, zoom_max);
        let Some(focus) = focus else {
            self.zoom = new_zoom;
            return;
        };

        let focus_geo = self.screen_to_geo(focus, viewport_size);
        let offset = focus - viewport_size * 0.5;
        self.zoom = new_zoom;
        self.center = Self::unproject(Self::project(focus_geo, new_zoom) - offset, new_zoom);
    }

    /// Größte ganzzahlige Zoom-Stufe, bei der `bounds` vollständig in den Viewport passt.
    ///
    /// Eine degenerierte Box (ein einzelner Punkt) ergibt `zoom_max`.
    pub fn bounds_zoom(bounds: &GeoBounds, viewport_size: DVec2, zoom_min: f64, zoom_max: f64) -> f64 {
        let extent = Self::project(bounds.south_east(), 0.0) - Self::project(bounds.north_west(), 0.0);
        let scale_x = if extent.x > 0.0 { viewport_size.x / extent.x } else { f64::INFINITY };
        let scale_y = if extent.y > 0.0 { viewport_size.y / extent.y } else { f64::INFINITY };
        let scale = scale_x.min(scale_y);
        if !scale.is_finite() {
            return zoom_max;
        }
        scale.log2().floor().clamp(zoom_min, zoom_max)
    }

    /// Passt Mittelpunkt und Zoom so an, dass `bounds` sichtbar ist.
    pub fn fit_bounds(
        &mut self,
        bounds: &GeoBounds,
        viewport_size: DVec2,
        zoom_min: f64,
        zoom_max: f64,
    ) {
        let zoom = Self::bounds_zoom(bounds, viewport_size, zoom_min, zoom_max);
        let nw = Self::project(bounds.north_west(), zoom);
        let se = Self::project(bounds.south_east(), zoom);
        self.center = Self::unproject((nw + se) * 0.5, zoom);
        self.zoom = zoom;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const VIEWPORT: DVec2 = DVec2::new(800.0, 600.0);

    #[test]
    fn project_origin_is_world_center() {
        let px = MapCamera::project(GeoPoint::new(0.0, 0.0), 0.0);
        assert_relative_eq!(px.x, 128.0, epsilon = 1e-9);
        assert_relative_eq!(px.y, 128.0, epsilon = 1e-9);
    }

    #[test]
    fn unproject_inverts_project() {
        let turin = GeoPoint::new(45.0703, 7.6869);
        let back = MapCamera::unproject(MapCamera::project(turin, 13.0), 13.0);
        assert_relative_eq!(back.lat, turin.lat, epsilon = 1e-9);
        assert_relative_eq!(back.lng, turin.lng, epsilon = 1e-9);
    }

    #[test]
    fn center_maps_to_viewport_center() {
        let camera = MapCamera::new(GeoPoint::new(45.11, 7.78), 11.0);
        let screen = camera.geo_to_screen(camera.center, VIEWPORT);
        assert_relative_eq!(screen.x, 400.0, epsilon = 1e-6);
        assert_relative_eq!(screen.y, 300.0, epsilon = 1e-6);
    }

    #[test]
    fn pan_moves_content_with_pointer() {
        let mut camera = MapCamera::new(GeoPoint::new(45.11, 7.78), 11.0);
        let before = camera.center;
        camera.pan_by_pixels(DVec2::new(100.0, 0.0));
        // Inhalt nach rechts ziehen → Mittelpunkt wandert nach Westen
        assert!(camera.center.lng < before.lng);
        assert_relative_eq!(camera.center.lat, before.lat, epsilon = 1e-9);
    }

    #[test]
    fn zoom_around_keeps_focus_point_stable() {
        let mut camera = MapCamera::new(GeoPoint::new(45.11, 7.78), 11.0);
        let focus = DVec2::new(650.0, 120.0);
        let geo_before = camera.screen_to_geo(focus, VIEWPORT);

        camera.zoom_around(1.0, Some(focus), VIEWPORT, 0.0, 19.0);

        assert_relative_eq!(camera.zoom, 12.0);
        let geo_after = camera.screen_to_geo(focus, VIEWPORT);
        assert_relative_eq!(geo_after.lat, geo_before.lat, epsilon = 1e-9);
        assert_relative_eq!(geo_after.lng, geo_before.lng, epsilon = 1e-9);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut camera = MapCamera::new(GeoPoint::new(45.11, 7.78), 18.5);
        camera.zoom_around(3.0, None, VIEWPORT, 0.0, 19.0);
        assert_relative_eq!(camera.zoom, 19.0);
    }

    #[test]
    fn fit_bounds_contains_all_corners() {
        let bounds = GeoBounds {
            south_west: GeoPoint::new(45.00, 7.60),
            north_east: GeoPoint::new(45.12, 7.80),
        };
        let mut camera = MapCamera::new(GeoPoint::new(0.0, 0.0), 2.0);

        camera.fit_bounds(&bounds, VIEWPORT, 0.0, 19.0);

        assert_eq!(camera.zoom, camera.zoom.floor());
        for corner in [bounds.north_west(), bounds.south_east()] {
            let screen = camera.geo_to_screen(corner, VIEWPORT);
            assert!(screen.x >= -1e-6 && screen.x <= VIEWPORT.x + 1e-6);
            assert!(screen.y >= -1e-6 && screen.y <= VIEWPORT.y + 1e-6);
        }
        // Eine Stufe mehr würde nicht mehr passen
        assert!(MapCamera::bounds_zoom(&bounds, VIEWPORT, 0.0, 19.0) < 19.0);
    }

    #[test]
    fn fit_bounds_on_single_point_uses_max_zoom() {
        let point = GeoPoint::new(45.07, 7.68);
        let mut camera = MapCamera::new(GeoPoint::new(0.0, 0.0), 2.0);

        camera.fit_bounds(&GeoBounds::from_point(point), VIEWPORT, 0.0, 19.0);

        assert_relative_eq!(camera.zoom, 19.0);
        assert_relative_eq!(camera.center.lat, point.lat, epsilon = 1e-9);
        assert_relative_eq!(camera.center.lng, point.lng, epsilon = 1e-9);
    }
}
