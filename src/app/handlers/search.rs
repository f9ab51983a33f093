//! Handler für die Textsuche.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt die Suche und baut Karte und Liste neu auf.
/// Das Suchfeld übernimmt den Rohtext (relevant beim Leeren).
pub fn set_query(state: &mut AppState, query: String) {
    use_cases::search::set_query(state, &query);
    state.ui.search_input = query;
}
