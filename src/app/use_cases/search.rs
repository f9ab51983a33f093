//! Use-Case: Textsuche und synchroner Neuaufbau von Karte und Liste.

use crate::app::AppState;
use crate::core::{filter_places, normalize_query};

/// Normalisiert die Suche, filtert den Place-Store und baut Karte und
/// Liste (in dieser Reihenfolge) vollständig neu auf.
///
/// Jeder Aufruf ersetzt die vorherige sichtbare Menge vollständig. Solange
/// noch keine Daten geladen sind, bleiben beide Ansichten leer; die Suche
/// wird beim Laden angewendet.
pub fn set_query(state: &mut AppState, raw_query: &str) {
    state.query = normalize_query(raw_query);
    refresh_views(state);
}

/// Wendet die aktuelle Suche erneut auf den Place-Store an.
pub fn refresh_views(state: &mut AppState) {
    let filtered = match &state.store {
        Some(store) => filter_places(store.places(), &state.query),
        None => Vec::new(),
    };

    state.map.render(&filtered, &state.options);
    state.list.render(&filtered);

    log::debug!(
        "Suche '{}': {} von {} Orten sichtbar",
        state.query,
        filtered.len(),
        state.total_count()
    );
}
