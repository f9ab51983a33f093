use places_map::core::Place;
use places_map::{filter_places, AppCommand, AppController, AppIntent, AppState, LoadState};

const DETAIL_ZOOM: f64 = 14.0;

fn turin_places() -> Vec<Place> {
    vec![
        Place::new("egizio", "Museo Egizio", "Torino", 45.0684, 7.6843)
            .with_address("Via Accademia delle Scienze 6"),
        Place::new("roma", "Hotel Roma", "Torino", 45.0625, 7.6780)
            .with_address("Piazza Carlo Felice 60"),
        Place::new("mole", "Mole Antonelliana", "Torino", 45.0690, 7.6932)
            .with_address("Via Montebello 20"),
    ]
}

fn loaded_state(controller: &mut AppController) -> AppState {
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [1024.0, 768.0],
            },
        )
        .expect("ViewportResized sollte ohne Fehler durchlaufen");
    controller
        .handle_intent(
            &mut state,
            AppIntent::PlacesLoaded {
                places: turin_places(),
            },
        )
        .expect("PlacesLoaded sollte ohne Fehler durchlaufen");
    state
}

fn search(controller: &mut AppController, state: &mut AppState, query: &str) {
    controller
        .handle_intent(
            state,
            AppIntent::SearchQueryChanged {
                query: query.to_string(),
            },
        )
        .expect("SearchQueryChanged sollte ohne Fehler durchlaufen");
}

fn filtered_ids(state: &AppState) -> Vec<String> {
    let store = state.store.as_ref().expect("Place-Store sollte geladen sein");
    filter_places(store.places(), &state.query)
        .into_iter()
        .map(|p| p.id)
        .collect()
}

#[test]
fn test_views_match_filter_after_every_query() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    for query in ["", "museo", "TORINO", "via", "  mole ", "nessuna corrispondenza"] {
        search(&mut controller, &mut state, query);

        let expected = filtered_ids(&state);
        assert_eq!(state.map.marker_ids(), expected, "Marker für '{query}'");
        assert_eq!(state.list.card_ids(), expected, "Karten für '{query}'");
    }
}

#[test]
fn test_museo_query_shows_single_place_in_both_views() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    search(&mut controller, &mut state, "museo");

    assert_eq!(state.map.marker_ids(), vec!["egizio"]);
    assert_eq!(state.list.card_ids(), vec!["egizio"]);
    // Ein einzelner Punkt wird mit maximalem Zoom zentriert
    assert_eq!(state.map.camera.zoom, state.options.zoom_max());
    assert!((state.map.camera.center.lat - 45.0684).abs() < 1e-6);
}

#[test]
fn test_empty_query_restores_full_dataset_in_order() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    search(&mut controller, &mut state, "mole");
    assert_eq!(state.list.card_ids(), vec!["mole"]);

    controller
        .handle_intent(&mut state, AppIntent::SearchCleared)
        .expect("SearchCleared sollte ohne Fehler durchlaufen");

    assert_eq!(state.map.marker_ids(), vec!["egizio", "roma", "mole"]);
    assert_eq!(state.list.card_ids(), vec!["egizio", "roma", "mole"]);
    assert!(state.ui.search_input.is_empty());
}

#[test]
fn test_card_click_activates_one_card_and_zooms_to_detail() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    controller
        .handle_intent(
            &mut state,
            AppIntent::CardClicked {
                id: "roma".to_string(),
            },
        )
        .expect("CardClicked sollte ohne Fehler durchlaufen");

    let active: Vec<&str> = state
        .list
        .cards()
        .iter()
        .enumerate()
        .filter(|(index, _)| state.list.is_active_at(*index))
        .map(|(_, card)| card.id.as_str())
        .collect();
    assert_eq!(active, vec!["roma"]);
    assert!(state.map.camera.zoom >= DETAIL_ZOOM);
    assert_eq!(
        state.map.open_popup_marker().map(|m| m.id.as_str()),
        Some("roma")
    );
    assert!(state.list.scroll_to_active);
}

#[test]
fn test_marker_click_opens_popup_and_highlights_card_without_moving_camera() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);
    let camera_before = state.map.camera.clone();

    controller
        .handle_intent(
            &mut state,
            AppIntent::MarkerClicked {
                id: "mole".to_string(),
            },
        )
        .expect("MarkerClicked sollte ohne Fehler durchlaufen");

    assert_eq!(state.list.active_id(), Some("mole"));
    assert_eq!(
        state.map.open_popup_marker().map(|m| m.id.as_str()),
        Some("mole")
    );
    assert_eq!(state.map.camera, camera_before);
}

#[test]
fn test_stale_ids_are_no_ops() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);
    controller
        .handle_intent(
            &mut state,
            AppIntent::CardClicked {
                id: "egizio".to_string(),
            },
        )
        .expect("CardClicked sollte ohne Fehler durchlaufen");
    search(&mut controller, &mut state, "mole");

    let camera_before = state.map.camera.clone();
    let logged_before = state.command_log.len();

    for intent in [
        AppIntent::MarkerClicked {
            id: "egizio".to_string(),
        },
        AppIntent::CardClicked {
            id: "egizio".to_string(),
        },
    ] {
        controller
            .handle_intent(&mut state, intent)
            .expect("Veraltete IDs sollten keinen Fehler erzeugen");
    }

    assert_eq!(state.command_log.len(), logged_before);
    assert_eq!(state.map.camera, camera_before);
    assert_eq!(state.list.active_id(), None);
    assert_eq!(state.list.card_ids(), vec!["mole"]);
}

#[test]
fn test_query_before_load_is_applied_on_load() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    search(&mut controller, &mut state, "Hotel");
    assert!(state.map.markers().is_empty());
    assert!(state.list.cards().is_empty());

    controller
        .handle_intent(
            &mut state,
            AppIntent::PlacesLoaded {
                places: turin_places(),
            },
        )
        .expect("PlacesLoaded sollte ohne Fehler durchlaufen");

    assert_eq!(state.list.card_ids(), vec!["roma"]);
    assert_eq!(state.ui.search_input, "Hotel");
}

#[test]
fn test_fit_waits_for_first_viewport_size() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PlacesLoaded {
                places: turin_places(),
            },
        )
        .expect("PlacesLoaded sollte ohne Fehler durchlaufen");
    assert!(state.map.has_pending_fit());
    assert_eq!(state.map.camera.zoom, state.options.map_zoom);

    controller
        .handle_intent(
            &mut state,
            AppIntent::ViewportResized {
                size: [1024.0, 768.0],
            },
        )
        .expect("ViewportResized sollte ohne Fehler durchlaufen");

    assert!(!state.map.has_pending_fit());
    assert!(state.map.camera.zoom > state.options.map_zoom);
}

#[test]
fn test_load_failure_is_recorded_and_views_stay_empty() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(
            &mut state,
            AppIntent::PlacesLoadFailed {
                message: "places.json antwortete mit Status 404".to_string(),
            },
        )
        .expect("PlacesLoadFailed sollte ohne Fehler durchlaufen");

    assert!(matches!(state.ui.load_state, LoadState::Failed(_)));
    assert!(state.map.markers().is_empty());
    assert!(state.list.cards().is_empty());

    match state.command_log.entries().last() {
        Some(AppCommand::RecordLoadFailure { message }) => assert!(message.contains("404")),
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_zoom_buttons_respect_tile_max_zoom() {
    let mut controller = AppController::new();
    let mut state = loaded_state(&mut controller);

    for _ in 0..30 {
        controller
            .handle_intent(&mut state, AppIntent::ZoomInRequested)
            .expect("ZoomInRequested sollte ohne Fehler durchlaufen");
    }
    assert_eq!(state.map.camera.zoom, state.options.zoom_max());

    controller
        .handle_intent(&mut state, AppIntent::ResetViewRequested)
        .expect("ResetViewRequested sollte ohne Fehler durchlaufen");
    assert_eq!(state.map.camera.zoom, state.options.map_zoom);
}

#[test]
fn test_duplicate_ids_activate_only_last_card_and_marker() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    controller
        .handle_intent(
            &mut state,
            AppIntent::PlacesLoaded {
                places: vec![
                    Place::new("x", "Primo", "Torino", 45.0684, 7.6843),
                    Place::new("x", "Secondo", "Torino", 45.0690, 7.6932),
                ],
            },
        )
        .expect("PlacesLoaded sollte ohne Fehler durchlaufen");

    controller
        .handle_intent(&mut state, AppIntent::CardClicked { id: "x".to_string() })
        .expect("CardClicked sollte ohne Fehler durchlaufen");

    let active_cards: Vec<&str> = state
        .list
        .cards()
        .iter()
        .enumerate()
        .filter(|(index, _)| state.list.is_active_at(*index))
        .map(|(_, card)| card.title.as_str())
        .collect();
    assert_eq!(active_cards, vec!["Secondo"]);
    assert_eq!(
        state.map.open_popup_marker().map(|m| m.label.as_str()),
        Some("Secondo")
    );

    let scene = controller.build_map_scene(&state);
    let active_markers: Vec<&str> = scene
        .markers
        .iter()
        .filter(|m| m.active)
        .map(|m| m.label.as_str())
        .collect();
    assert_eq!(active_markers, vec!["Secondo"]);
}
