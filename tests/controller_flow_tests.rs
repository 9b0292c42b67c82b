use glam::DVec2;
use mapa_solidario::{
    AppCommand, AppController, AppIntent, AppState, Category, PlacementPhase, ScheduleField,
    TimeRange, ValidationError,
};

fn click(position: DVec2) -> AppIntent {
    AppIntent::MapClicked { position }
}

#[test]
fn test_arm_placement_enters_armed_state() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    assert_eq!(state.workflow.phase, PlacementPhase::Idle);

    controller
        .handle_intent(&mut state, AppIntent::AddMarkerRequested)
        .expect("Platzierung aktivieren sollte funktionieren");

    assert_eq!(state.workflow.phase, PlacementPhase::Armed);
}

#[test]
fn test_arming_twice_is_idempotent() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::AddMarkerRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::AddMarkerRequested)
        .unwrap();

    assert_eq!(state.workflow.phase, PlacementPhase::Armed);

    // Ein einzelner Klick reicht weiterhin, um ins Formular zu wechseln
    controller
        .handle_intent(&mut state, click(DVec2::new(-26.30, -48.85)))
        .unwrap();

    assert_eq!(state.workflow.phase, PlacementPhase::Editing);
}

#[test]
fn test_armed_click_seeds_draft() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::AddMarkerRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, click(DVec2::new(-26.30, -48.85)))
        .unwrap();

    assert_eq!(state.workflow.phase, PlacementPhase::Editing);
    let draft = &state.workflow.draft;
    assert_eq!(draft.position, Some(DVec2::new(-26.30, -48.85)));
    assert_eq!(draft.category, Category::ALL[0]);
    assert!(draft.title.is_empty());
    assert!(draft.description.is_empty());
    assert!(draft.hours.is_empty());
    assert!(draft.info.is_empty());
}

#[test]
fn test_armed_consumes_exactly_one_click() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::AddMarkerRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, click(DVec2::new(-26.30, -48.85)))
        .unwrap();

    // Zweiter Klick trifft nicht mehr den Capture-Pfad
    controller
        .handle_intent(&mut state, click(DVec2::new(-26.40, -48.90)))
        .unwrap();

    assert_eq!(
        state.workflow.draft.position,
        Some(DVec2::new(-26.30, -48.85))
    );

    let last = state
        .command_log
        .entries()
        .last()
        .expect("Es sollte ein Command geloggt sein");
    match last {
        AppCommand::SelectMarkerAt { .. } => {}
        other => panic!("Unerwarteter letzter Command: {other:?}"),
    }
}

#[test]
fn test_click_without_arming_does_not_open_form() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, click(DVec2::new(-26.30, -48.85)))
        .unwrap();

    assert_eq!(state.workflow.phase, PlacementPhase::Idle);
    assert!(state.workflow.draft.position.is_none());
    assert!(state.markers.is_empty());
}

#[test]
fn test_capture_clamps_position_into_bounds() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::AddMarkerRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, click(DVec2::new(0.0, 0.0)))
        .unwrap();

    // (0, 0) liegt nordöstlich des Rahmens → auf die NO-Ecke begrenzt
    assert_eq!(
        state.workflow.draft.position,
        Some(DVec2::new(-25.8, -48.5))
    );
}

#[test]
fn test_commit_with_empty_title_fails_and_keeps_draft() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::AddMarkerRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, click(DVec2::new(-26.30, -48.85)))
        .unwrap();

    controller
        .handle_intent(&mut state, AppIntent::MarkerFormConfirmed)
        .expect("Abgelehnter Commit ist kein harter Fehler");

    assert_eq!(state.workflow.phase, PlacementPhase::Editing);
    assert!(state.markers.is_empty());
    assert_eq!(
        state.ui.form_error.as_deref(),
        Some(ValidationError::MissingTitle.user_message())
    );
    // Entwurf bleibt zur Korrektur erhalten
    assert_eq!(
        state.workflow.draft.position,
        Some(DVec2::new(-26.30, -48.85))
    );
}

#[test]
fn test_commit_without_position_fails() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    // Entwurf ohne Position direkt präparieren (defensiver Pfad)
    state.workflow.phase = PlacementPhase::Editing;
    state.workflow.draft.title = "Abrigo X".to_string();

    controller
        .handle_intent(&mut state, AppIntent::MarkerFormConfirmed)
        .unwrap();

    assert_eq!(state.workflow.phase, PlacementPhase::Editing);
    assert!(state.markers.is_empty());
    assert!(state.ui.form_error.is_some());
}

#[test]
fn test_whitespace_title_is_rejected() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::AddMarkerRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, click(DVec2::new(-26.30, -48.85)))
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DraftTitleChanged {
                title: "   ".to_string(),
            },
        )
        .unwrap();

    controller
        .handle_intent(&mut state, AppIntent::MarkerFormConfirmed)
        .unwrap();

    assert!(state.markers.is_empty());
    assert_eq!(state.workflow.phase, PlacementPhase::Editing);
}

#[test]
fn test_cancel_always_resets_to_idle() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::AddMarkerRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, click(DVec2::new(-26.30, -48.85)))
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DraftTitleChanged {
                title: "Abrigo X".to_string(),
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::ScheduleRangeAdded)
        .unwrap();

    controller
        .handle_intent(&mut state, AppIntent::MarkerFormCancelled)
        .unwrap();

    assert_eq!(state.workflow.phase, PlacementPhase::Idle);
    assert!(state.workflow.draft.position.is_none());
    assert!(state.workflow.draft.title.is_empty());
    assert!(state.workflow.draft.hours.is_empty());
    assert!(state.markers.is_empty());
}

#[test]
fn test_full_add_marker_workflow() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    // Aktivieren → Klick → Formular befüllen → Speichern
    controller
        .handle_intent(&mut state, AppIntent::AddMarkerRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, click(DVec2::new(-26.30, -48.85)))
        .unwrap();
    assert_eq!(state.workflow.phase, PlacementPhase::Editing);

    controller
        .handle_intent(
            &mut state,
            AppIntent::DraftTitleChanged {
                title: "Abrigo X".to_string(),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DraftCategorySelected {
                id: "shelter".to_string(),
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::ScheduleRangeAdded)
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ScheduleFieldEdited {
                index: 0,
                field: ScheduleField::From,
                value: "08:00".to_string(),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ScheduleFieldEdited {
                index: 0,
                field: ScheduleField::To,
                value: "17:00".to_string(),
            },
        )
        .unwrap();

    controller
        .handle_intent(&mut state, AppIntent::MarkerFormConfirmed)
        .unwrap();

    assert_eq!(state.markers.len(), 1);
    let marker = &state.markers.all()[0];
    assert_eq!(marker.title, "Abrigo X");
    assert_eq!(marker.category, Category::Shelter);
    assert_eq!(marker.position, DVec2::new(-26.30, -48.85));
    assert_eq!(
        marker.hours,
        vec![TimeRange {
            from: "08:00".to_string(),
            to: "17:00".to_string(),
        }]
    );

    // Workflow zurück in Idle, Entwurf leer
    assert_eq!(state.workflow.phase, PlacementPhase::Idle);
    assert!(state.workflow.draft.position.is_none());
    assert!(state.workflow.draft.title.is_empty());

    // Filter ausblenden → Marker verschwindet aus der Ableitung,
    // der Store bleibt unverändert
    controller
        .handle_intent(
            &mut state,
            AppIntent::FilterToggled {
                category: Category::Shelter,
            },
        )
        .unwrap();
    assert_eq!(state.visible_count(), 0);
    assert_eq!(state.markers.len(), 1);

    controller
        .handle_intent(
            &mut state,
            AppIntent::FilterToggled {
                category: Category::Shelter,
            },
        )
        .unwrap();
    assert_eq!(state.visible_count(), 1);
}

#[test]
fn test_filter_toggle_parity_via_controller() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    for category in Category::ALL {
        assert!(state.filters.is_visible(category));
        for _ in 0..4 {
            controller
                .handle_intent(&mut state, AppIntent::FilterToggled { category })
                .unwrap();
        }
        assert!(state.filters.is_visible(category));
    }
}

#[test]
fn test_category_normalization_at_form_boundary() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::AddMarkerRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, click(DVec2::new(-26.30, -48.85)))
        .unwrap();

    // Roheingabe mit Whitespace und abweichender Schreibweise
    controller
        .handle_intent(
            &mut state,
            AppIntent::DraftCategorySelected {
                id: "  HelpCenter ".to_string(),
            },
        )
        .unwrap();
    assert_eq!(state.workflow.draft.category, Category::HelpCenter);

    // Unbekannte Eingabe lässt die Kategorie unverändert
    controller
        .handle_intent(
            &mut state,
            AppIntent::DraftCategorySelected {
                id: "hospital".to_string(),
            },
        )
        .unwrap();
    assert_eq!(state.workflow.draft.category, Category::HelpCenter);
}

#[test]
fn test_schedule_edit_out_of_bounds_is_noop() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    controller
        .handle_intent(&mut state, AppIntent::AddMarkerRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, click(DVec2::new(-26.30, -48.85)))
        .unwrap();

    controller
        .handle_intent(
            &mut state,
            AppIntent::ScheduleFieldEdited {
                index: 5,
                field: ScheduleField::From,
                value: "08:00".to_string(),
            },
        )
        .expect("Out-of-Bounds-Edit ist ein stiller No-op");

    assert!(state.workflow.draft.hours.is_empty());
}

#[test]
fn test_chronological_rule_rejects_unordered_hours() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    state.options.require_chronological_hours = true;

    controller
        .handle_intent(&mut state, AppIntent::AddMarkerRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, click(DVec2::new(-26.30, -48.85)))
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DraftTitleChanged {
                title: "Abrigo X".to_string(),
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::ScheduleRangeAdded)
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ScheduleFieldEdited {
                index: 0,
                field: ScheduleField::From,
                value: "17:00".to_string(),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ScheduleFieldEdited {
                index: 0,
                field: ScheduleField::To,
                value: "08:00".to_string(),
            },
        )
        .unwrap();

    controller
        .handle_intent(&mut state, AppIntent::MarkerFormConfirmed)
        .unwrap();

    assert!(state.markers.is_empty());
    assert_eq!(state.workflow.phase, PlacementPhase::Editing);
    assert!(state.ui.form_error.is_some());

    // Zeiten korrigieren → Commit geht durch
    controller
        .handle_intent(
            &mut state,
            AppIntent::ScheduleFieldEdited {
                index: 0,
                field: ScheduleField::To,
                value: "18:00".to_string(),
            },
        )
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ScheduleFieldEdited {
                index: 0,
                field: ScheduleField::From,
                value: "09:00".to_string(),
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::MarkerFormConfirmed)
        .unwrap();

    assert_eq!(state.markers.len(), 1);
    assert_eq!(state.workflow.phase, PlacementPhase::Idle);
}

#[test]
fn test_unordered_hours_pass_without_rule() {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    assert!(!state.options.require_chronological_hours);

    controller
        .handle_intent(&mut state, AppIntent::AddMarkerRequested)
        .unwrap();
    controller
        .handle_intent(&mut state, click(DVec2::new(-26.30, -48.85)))
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::DraftTitleChanged {
                title: "Abrigo X".to_string(),
            },
        )
        .unwrap();
    controller
        .handle_intent(&mut state, AppIntent::ScheduleRangeAdded)
        .unwrap();
    controller
        .handle_intent(
            &mut state,
            AppIntent::ScheduleFieldEdited {
                index: 0,
                field: ScheduleField::From,
                value: "17:00".to_string(),
            },
        )
        .unwrap();

    // Ohne Regel werden Zeiten rein lexikalisch gespeichert
    controller
        .handle_intent(&mut state, AppIntent::MarkerFormConfirmed)
        .unwrap();

    assert_eq!(state.markers.len(), 1);
    assert_eq!(state.markers.all()[0].hours[0].from, "17:00");
    assert_eq!(state.markers.all()[0].hours[0].to, "");
}
