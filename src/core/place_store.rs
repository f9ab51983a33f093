//! Place-Store: unveränderlicher Datenbestand nach dem Laden.

use super::place::Place;
use std::collections::HashSet;
use std::sync::Arc;

/// Hält alle geladenen Orte. Wird genau einmal pro Ladevorgang befüllt
/// und danach nur noch gelesen; Klone teilen sich die Daten.
#[derive(Debug, Clone, Default)]
pub struct PlaceStore {
    places: Arc<[Place]>,
    duplicate_ids: usize,
}

impl PlaceStore {
    /// Übernimmt die Orte in Original-Reihenfolge.
    ///
    /// Doppelte IDs werden nicht abgelehnt: alle Datensätze bleiben erhalten,
    /// Karte und Liste lösen eine ID jeweils auf das letzte Vorkommen auf.
    pub fn new(places: Vec<Place>) -> Self {
        let duplicate_ids = {
            let mut seen = HashSet::with_capacity(places.len());
            places
                .iter()
                .filter(|place| !seen.insert(place.id.as_str()))
                .count()
        };

        if duplicate_ids > 0 {
            log::warn!(
                "{} doppelte Orts-IDs im Datenbestand (letzter Eintrag gewinnt)",
                duplicate_ids
            );
        }

        Self {
            places: places.into(),
            duplicate_ids,
        }
    }

    /// Alle Orte in Original-Reihenfolge.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Anzahl der Datensätze, deren ID bereits vorher vorkam.
    pub fn duplicate_count(&self) -> usize {
        self.duplicate_ids
    }
}
