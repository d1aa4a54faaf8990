//! XML Import/Export für Session-Dateien.
//!
//! Dieses Modul implementiert das Schreiben und Parsen von Session-Dokumenten
//! inklusive des Command-Logs der Undo/Redo-History.

pub mod parser;
pub mod writer;

pub use parser::{parse_command, parse_session, SessionDocument};
pub use writer::{write_command, write_session};

/// Unterstützte Version des Session-Formats.
pub const SESSION_FORMAT_VERSION: u32 = 1;

pub(crate) const TAG_DOCUMENT: &str = "Document";
pub(crate) const TAG_COORDS: &str = "Coords";
pub(crate) const TAG_COMMANDS: &str = "Commands";
pub(crate) const TAG_CMD_SETTINGS_COORDS: &str = "CmdSettingsCoords";
pub(crate) const TAG_BEFORE: &str = "Before";
pub(crate) const TAG_AFTER: &str = "After";

pub(crate) const ATTR_VERSION: &str = "version";
pub(crate) const ATTR_CURSOR: &str = "cursor";
pub(crate) const ATTR_TYPE: &str = "type";
pub(crate) const ATTR_SCALE_X_THETA: &str = "scaleXTheta";
pub(crate) const ATTR_SCALE_Y_RADIUS: &str = "scaleYRadius";
pub(crate) const ATTR_UNITS_THETA: &str = "unitsTheta";
pub(crate) const ATTR_ORIGIN_RADIUS: &str = "originRadius";
