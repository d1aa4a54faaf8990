//! Application-Layer: Controller, State, Events, Commands und History.

pub mod command;
pub mod command_log;
pub mod controller;
pub mod coords_form;
pub mod edit_menu;
pub mod events;
pub mod handlers;
pub mod history;
mod intent_mapping;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Dokument, History, Optionen).
pub mod state;

pub use command::{CmdSettingsCoords, CommandTarget, DocumentCommand};
pub use command_log::{CommandLog, CommandLogEntry, CommandOutcome};
pub use controller::AppController;
pub use coords_form::{CoordsForm, CoordsFormControls};
pub use edit_menu::{edit_menu_state, EditMenuState};
pub use events::{AppCommand, AppIntent};
pub use history::CommandHistory;
pub use state::{AppState, DocumentState};
