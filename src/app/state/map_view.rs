use crate::core::{directions_link, GeoBounds, GeoPoint, MapCamera, Place};
use crate::shared::{MarkerIcon, PopupContent, PopupLink, ViewerOptions};
use glam::DVec2;
use std::collections::HashMap;

/// Ein Marker auf der Karte (Marker + permanentes Label + gebundenes Popup).
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerHandle {
    /// Orts-ID
    pub id: String,
    /// Ankerposition
    pub position: GeoPoint,
    /// Text des permanenten Labels
    pub label: String,
    /// Marker-Icon
    pub icon: MarkerIcon,
    /// Gebundener Popup-Inhalt
    pub popup: PopupContent,
}

impl MarkerHandle {
    /// Baut Marker, Label und Popup für einen Ort.
    pub fn from_place(place: &Place, default_icon: Option<&str>) -> Self {
        Self {
            id: place.id.clone(),
            position: place.position(),
            label: place.name.clone(),
            icon: MarkerIcon::resolve(place.icon_url().or(default_icon)),
            popup: popup_content(place),
        }
    }
}

/// Popup-Inhalt: Name, Ort, optionale Adresse/Notizen und Link-Buttons.
pub fn popup_content(place: &Place) -> PopupContent {
    let mut links = vec![PopupLink {
        label: "Indicazioni".to_string(),
        url: directions_link(place.position()),
    }];
    if let Some(website) = place.website() {
        links.push(PopupLink {
            label: "Sito".to_string(),
            url: website.to_string(),
        });
    }
    if let Some(booking) = place.booking() {
        links.push(PopupLink {
            label: "Prenota".to_string(),
            url: booking.to_string(),
        });
    }

    PopupContent {
        title: place.name.clone(),
        city: place.city.clone(),
        address: place.address().map(str::to_string),
        notes: place.notes().map(str::to_string),
        links,
    }
}

/// Karten-Ansicht: Kamera, Marker-Layer und ID→Marker-Zuordnung.
///
/// Der Marker-Layer wird bei jedem `render` vollständig verworfen und neu
/// aufgebaut; es gibt kein inkrementelles Diffing.
#[derive(Debug, Clone)]
pub struct MapView {
    /// Kamera (Mittelpunkt + Zoom)
    pub camera: MapCamera,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
    markers: Vec<MarkerHandle>,
    /// Orts-ID → Index in `markers` (bei doppelten IDs gewinnt der letzte)
    marker_by_id: HashMap<String, usize>,
    /// Index des Markers mit geöffnetem Popup
    open_popup: Option<usize>,
    /// Einpassen, das auf die erste bekannte Viewport-Größe wartet
    pending_fit: Option<GeoBounds>,
}

impl MapView {
    /// Erstellt eine leere Karte mit Start-Mittelpunkt und -Zoom.
    pub fn new(options: &ViewerOptions) -> Self {
        Self {
            camera: MapCamera::new(options.initial_center(), options.map_zoom),
            viewport_size: [0.0, 0.0],
            markers: Vec::new(),
            marker_by_id: HashMap::new(),
            open_popup: None,
            pending_fit: None,
        }
    }

    /// Entfernt alle Marker, Labels und Popups.
    pub fn clear_layer(&mut self) {
        self.markers.clear();
        self.marker_by_id.clear();
        self.open_popup = None;
        self.pending_fit = None;
    }

    /// Fügt einen Marker für `place` hinzu.
    pub fn add_marker(&mut self, place: &Place, options: &ViewerOptions) {
        let handle = MarkerHandle::from_place(place, options.default_icon.as_deref());
        self.marker_by_id.insert(handle.id.clone(), self.markers.len());
        self.markers.push(handle);
    }

    /// Verwirft den Marker-Layer und baut ihn für `filtered` neu auf.
    ///
    /// Bei nicht-leerer Menge wird die Ansicht auf die gepolsterte Bounding Box
    /// eingepasst, bei leerer Menge bleibt sie unverändert.
    pub fn render(&mut self, filtered: &[Place], options: &ViewerOptions) {
        self.clear_layer();
        for place in filtered {
            self.add_marker(place, options);
        }

        if let Some(bounds) = GeoBounds::from_points(filtered.iter().map(Place::position)) {
            self.fit_bounds(&bounds.pad(options.fit_padding), options);
        }
    }

    /// Passt die Ansicht an `bounds` an, oder merkt es vor, solange der
    /// Viewport noch keine Größe hat.
    pub fn fit_bounds(&mut self, bounds: &GeoBounds, options: &ViewerOptions) {
        let size = self.viewport_vec();
        if size.x <= 0.0 || size.y <= 0.0 {
            self.pending_fit = Some(*bounds);
            return;
        }

        self.camera
            .fit_bounds(bounds, size, options.zoom_min, options.zoom_max());
        self.pending_fit = None;
        log::debug!(
            "Ansicht eingepasst: center ({:.4}, {:.4}), zoom {}",
            self.camera.center.lat,
            self.camera.center.lng,
            self.camera.zoom
        );
    }

    /// Setzt Mittelpunkt und Zoom.
    pub fn set_view(&mut self, center: GeoPoint, zoom: f64, options: &ViewerOptions) {
        self.camera
            .set_view(center, zoom, options.zoom_min, options.zoom_max());
    }

    /// Aktualisiert die Viewport-Größe und holt ein vorgemerktes Einpassen nach.
    pub fn resize(&mut self, size: [f32; 2], options: &ViewerOptions) {
        self.viewport_size = size;
        if let Some(bounds) = self.pending_fit.take() {
            self.fit_bounds(&bounds, options);
        }
    }

    /// Zentriert auf den Marker, zoomt mindestens auf `detail_zoom` und öffnet
    /// sein Popup. Gibt `false` zurück (ohne Änderung), wenn kein Marker existiert.
    pub fn pan_to(&mut self, id: &str, options: &ViewerOptions) -> bool {
        let Some(&index) = self.marker_by_id.get(id) else {
            return false;
        };
        let position = self.markers[index].position;
        let zoom = self.camera.zoom.max(options.detail_zoom);
        self.set_view(position, zoom, options);
        self.open_popup = Some(index);
        true
    }

    /// Öffnet das Popup des Markers. `false`, wenn kein Marker existiert.
    pub fn open_popup(&mut self, id: &str) -> bool {
        match self.marker_by_id.get(id) {
            Some(&index) => {
                self.open_popup = Some(index);
                true
            }
            None => false,
        }
    }

    /// Schließt das geöffnete Popup.
    pub fn close_popup(&mut self) {
        self.open_popup = None;
    }

    /// Marker mit geöffnetem Popup.
    pub fn open_popup_marker(&self) -> Option<&MarkerHandle> {
        self.open_popup.and_then(|i| self.markers.get(i))
    }

    /// Alle Marker in Render-Reihenfolge.
    pub fn markers(&self) -> &[MarkerHandle] {
        &self.markers
    }

    pub fn has_marker(&self, id: &str) -> bool {
        self.marker_by_id.contains_key(id)
    }

    /// IDs aller Marker in Render-Reihenfolge.
    pub fn marker_ids(&self) -> Vec<&str> {
        self.markers.iter().map(|m| m.id.as_str()).collect()
    }

    /// Gibt zurück, ob ein Einpassen auf die Viewport-Größe wartet.
    pub fn has_pending_fit(&self) -> bool {
        self.pending_fit.is_some()
    }

    /// Viewport-Größe als `DVec2`.
    pub fn viewport_vec(&self) -> DVec2 {
        DVec2::new(
            f64::from(self.viewport_size[0]),
            f64::from(self.viewport_size[1]),
        )
    }
}
