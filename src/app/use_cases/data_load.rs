//! Use-Case-Funktionen für das Laden der Orts-Datei.
//! Alle Datenquellen-Operationen (I/O) laufen über `crate::source`.

use crate::app::{AppIntent, AppState, LoadState};
use crate::core::{Place, PlaceStore};
use crate::source::{DataSource, PendingLoad};

/// Startet das Laden aus `options.data_source` auf einem Hintergrund-Thread.
pub fn start_load(state: &mut AppState) {
    let source = DataSource::parse(&state.options.data_source);
    state.pending_load = Some(PendingLoad::spawn(source));
    state.ui.load_state = LoadState::Loading;
    state.ui.status_message = None;
}

/// Fragt einen laufenden Ladevorgang ab und übersetzt das Ergebnis in einen Intent.
///
/// `None`, solange nichts lädt oder der Thread noch arbeitet.
pub fn poll_pending(state: &mut AppState) -> Option<AppIntent> {
    let result = state.pending_load.as_ref()?.poll()?;
    let pending = state.pending_load.take()?;

    Some(match result {
        Ok(places) => AppIntent::PlacesLoaded { places },
        Err(e) => AppIntent::PlacesLoadFailed {
            message: format!("{} konnte nicht geladen werden: {}", pending.source(), e),
        },
    })
}

/// Befüllt den Place-Store und baut beide Ansichten mit der aktuellen Suche auf.
pub fn install_places(state: &mut AppState, places: Vec<Place>) {
    let store = PlaceStore::new(places);

    log::info!("Place-Store befüllt: {} Orte", store.len());
    state.ui.status_message = (store.duplicate_count() > 0).then(|| {
        format!(
            "{} doppelte IDs, Marker-Zuordnung verwendet jeweils den letzten Eintrag",
            store.duplicate_count()
        )
    });

    state.store = Some(store);
    state.ui.load_state = LoadState::Loaded;
    super::search::refresh_views(state);
}

/// Hält einen fatalen Ladefehler fest. Ein zuvor geladener Bestand bleibt unberührt.
pub fn record_failure(state: &mut AppState, message: String) {
    log::error!("Laden fehlgeschlagen: {}", message);
    state.ui.load_state = LoadState::Failed(message);
}
