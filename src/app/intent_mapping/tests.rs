use crate::app::{AppCommand, AppIntent, AppState, CoordsForm};
use crate::core::CoordsSettings;
use std::path::PathBuf;

use super::map_intent_to_commands;

#[test]
fn save_requested_maps_to_save_session_without_path() {
    let state = AppState::new();

    let commands = map_intent_to_commands(&state, AppIntent::SaveRequested);

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::SaveSession { path: None }));
}

#[test]
fn save_as_requested_carries_path() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::SaveAsRequested {
            path: PathBuf::from("plot.xml"),
        },
    );

    match commands.as_slice() {
        [AppCommand::SaveSession { path: Some(path) }] => {
            assert_eq!(path, &PathBuf::from("plot.xml"))
        }
        other => panic!("Unerwartete Commands: {other:?}"),
    }
}

#[test]
fn undo_and_redo_on_empty_history_map_to_nothing() {
    let state = AppState::new();

    assert!(map_intent_to_commands(&state, AppIntent::UndoRequested).is_empty());
    assert!(map_intent_to_commands(&state, AppIntent::RedoRequested).is_empty());
}

#[test]
fn confirmed_form_maps_to_apply_command() {
    let state = AppState::new();
    let form = CoordsForm::from_settings(&CoordsSettings::default());

    let commands = map_intent_to_commands(&state, AppIntent::CoordsSettingsConfirmed { form });

    assert_eq!(commands.len(), 1);
    assert!(matches!(commands[0], AppCommand::ApplyCoordsSettings { .. }));
}
