//! Mapping von UI-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::CoordsSettingsConfirmed { form } => {
            vec![AppCommand::ApplyCoordsSettings { form }]
        }
        // Menüeinträge sind in diesem Fall deaktiviert; kein Command nötig
        AppIntent::UndoRequested if !state.history.can_undo() => Vec::new(),
        AppIntent::UndoRequested => vec![AppCommand::Undo],
        AppIntent::RedoRequested if !state.history.can_redo() => Vec::new(),
        AppIntent::RedoRequested => vec![AppCommand::Redo],
        AppIntent::NewDocumentRequested => vec![AppCommand::NewDocument],
        AppIntent::OpenSessionRequested { path } => vec![AppCommand::LoadSession { path }],
        AppIntent::SaveRequested => vec![AppCommand::SaveSession { path: None }],
        AppIntent::SaveAsRequested { path } => {
            vec![AppCommand::SaveSession { path: Some(path) }]
        }
    }
}

#[cfg(test)]
mod tests;
