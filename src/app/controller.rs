//! Application Controller für zentrale Event-Verarbeitung.

use super::{AppCommand, AppIntent, AppState};

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus und protokolliert
    /// das Ergebnis im Command-Log.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        let logged = command.clone();
        let result = Self::dispatch(state, command);
        state.command_log.record(logged, &result);
        result
    }

    /// Dispatcht an Feature-Handler in `handlers/`.
    fn dispatch(state: &mut AppState, command: AppCommand) -> anyhow::Result<()> {
        use super::handlers;

        match command {
            // === Einstellungen ===
            AppCommand::ApplyCoordsSettings { form } => {
                handlers::settings::apply_coords(state, &form)?
            }

            // === History ===
            AppCommand::Undo => handlers::history::undo(state),
            AppCommand::Redo => handlers::history::redo(state),

            // === Datei-I/O ===
            AppCommand::NewDocument => handlers::file_io::new_document(state),
            AppCommand::LoadSession { path } => handlers::file_io::load(state, &path)?,
            AppCommand::SaveSession { path } => handlers::file_io::save(state, path)?,
        }

        Ok(())
    }
}
