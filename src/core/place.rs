use super::geo::GeoPoint;
use serde::Deserialize;

/// Ein Ort (Point of Interest) aus der Datenquelle.
///
/// Die Felder entsprechen 1:1 den JSON-Objekten der Datei; optionale
/// Textfelder gelten auch als fehlend, wenn sie leer sind.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    /// Eindeutige Kennung (Marker, Karte und Filterergebnis werden darüber verknüpft)
    pub id: String,
    /// Anzeigename
    pub name: String,
    /// Ort/Stadt
    #[serde(default)]
    pub city: String,
    /// Adresse
    #[serde(default)]
    pub address: Option<String>,
    /// Freitext-Notizen
    #[serde(default)]
    pub notes: Option<String>,
    /// Breitengrad
    pub lat: f64,
    /// Längengrad
    pub lng: f64,
    /// Webseite
    #[serde(default)]
    pub website: Option<String>,
    /// Buchungs-Link
    #[serde(default)]
    pub booking: Option<String>,
    /// Eigenes Marker-Icon (sonst Standard-Icon)
    #[serde(default)]
    pub icon_url: Option<String>,
}

impl Place {
    /// Erstellt einen Ort nur mit Pflichtfeldern.
    pub fn new(id: &str, name: &str, city: &str, lat: f64, lng: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            city: city.to_string(),
            address: None,
            notes: None,
            lat,
            lng,
            website: None,
            booking: None,
            icon_url: None,
        }
    }

    /// Setzt die Adresse (Builder-Stil, v.a. für Tests).
    pub fn with_address(mut self, address: &str) -> Self {
        self.address = Some(address.to_string());
        self
    }

    /// Koordinaten des Ortes.
    pub fn position(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }

    /// Adresse, falls vorhanden und nicht leer.
    pub fn address(&self) -> Option<&str> {
        non_empty(&self.address)
    }

    /// Notizen, falls vorhanden und nicht leer.
    pub fn notes(&self) -> Option<&str> {
        non_empty(&self.notes)
    }

    /// Webseite, falls vorhanden und nicht leer.
    pub fn website(&self) -> Option<&str> {
        non_empty(&self.website)
    }

    /// Buchungs-Link, falls vorhanden und nicht leer.
    pub fn booking(&self) -> Option<&str> {
        non_empty(&self.booking)
    }

    /// Eigenes Icon, falls vorhanden und nicht leer.
    pub fn icon_url(&self) -> Option<&str> {
        non_empty(&self.icon_url)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
