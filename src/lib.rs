//! Engauge Digitizer Library.
//! Koordinaten-Einstellungen, undo-fähige Commands und Session-Dateien als
//! Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod xml;

pub use app::{
    edit_menu_state, AppCommand, AppController, AppIntent, AppState, CmdSettingsCoords,
    CommandHistory, CommandLogEntry, CommandOutcome, CommandTarget, CoordsForm,
    CoordsFormControls, DocumentCommand, DocumentState, EditMenuState,
};
pub use core::{validate, CoordScale, CoordsSettings, CoordsType, PolarThetaUnits};
pub use shared::DigitizerOptions;
pub use xml::{parse_command, parse_session, write_command, write_session, SessionDocument};
