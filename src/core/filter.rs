//! Textfilter über den Place-Store.
//!
//! Reine Funktionen: Teilstring-Suche über `name`, `city` und `address`,
//! ohne Ranking, Tokenisierung oder Akzent-Normalisierung.

use super::place::Place;

/// Normalisiert eine Rohsuche (trimmen, Kleinschreibung).
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Prüft, ob ein Ort den bereits normalisierten Suchbegriff enthält.
pub fn matches(place: &Place, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let haystack = format!(
        "{} {} {}",
        place.name,
        place.city,
        place.address.as_deref().unwrap_or_default()
    )
    .to_lowercase();
    haystack.contains(needle)
}

/// Liefert die stabile Teilfolge aller Orte, die zur Suche passen.
///
/// Leere bzw. nur aus Leerzeichen bestehende Suche liefert alle Orte.
pub fn filter_places(places: &[Place], query: &str) -> Vec<Place> {
    let needle = normalize_query(query);
    places
        .iter()
        .filter(|place| matches(place, &needle))
        .cloned()
        .collect()
}
