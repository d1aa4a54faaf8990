//! Writer für Session-Dokumente.

use super::*;
use crate::app::{CommandHistory, DocumentCommand};
use crate::core::CoordsSettings;

const INDENT: &str = "    ";

/// Schreibt ein Session-Dokument mit aktuellen Einstellungen und Command-Log.
///
/// # Parameter
/// - `coords`: Aktuell angewendete Einstellungen (maßgeblich beim Laden)
/// - `history`: History, deren Commands und Cursor gespeichert werden
pub fn write_session(coords: &CoordsSettings, history: &CommandHistory) -> String {
    let mut output = String::new();
    output.push_str("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n");
    output.push_str(&format!(
        "<{} {}=\"{}\">\n",
        TAG_DOCUMENT, ATTR_VERSION, SESSION_FORMAT_VERSION
    ));

    write_snapshot(&mut output, TAG_COORDS, coords, 1);

    if history.is_empty() {
        output.push_str(&format!(
            "{}<{} {}=\"0\"/>\n",
            INDENT, TAG_COMMANDS, ATTR_CURSOR
        ));
    } else {
        output.push_str(&format!(
            "{}<{} {}=\"{}\">\n",
            INDENT,
            TAG_COMMANDS,
            ATTR_CURSOR,
            history.cursor()
        ));
        for cmd in history.commands() {
            write_command_at(&mut output, cmd, 2);
        }
        output.push_str(&format!("{}</{}>\n", INDENT, TAG_COMMANDS));
    }

    output.push_str(&format!("</{}>\n", TAG_DOCUMENT));
    output
}

/// Schreibt einen einzelnen Command als eigenständiges XML-Fragment.
pub fn write_command(cmd: &DocumentCommand) -> String {
    let mut output = String::new();
    write_command_at(&mut output, cmd, 0);
    output
}

fn write_command_at(output: &mut String, cmd: &DocumentCommand, depth: usize) {
    let indent = INDENT.repeat(depth);
    match cmd {
        DocumentCommand::SettingsCoords(cmd) => {
            output.push_str(&format!("{}<{}>\n", indent, TAG_CMD_SETTINGS_COORDS));
            // Reihenfolge ist Teil des Formats: erst Before, dann After
            write_snapshot(output, TAG_BEFORE, cmd.before(), depth + 1);
            write_snapshot(output, TAG_AFTER, cmd.after(), depth + 1);
            output.push_str(&format!("{}</{}>\n", indent, TAG_CMD_SETTINGS_COORDS));
        }
    }
}

fn write_snapshot(output: &mut String, tag: &str, settings: &CoordsSettings, depth: usize) {
    output.push_str(&format!(
        "{}<{} {}=\"{}\" {}=\"{}\" {}=\"{}\" {}=\"{}\" {}=\"{}\"/>\n",
        INDENT.repeat(depth),
        tag,
        ATTR_TYPE,
        settings.coords_type.as_token(),
        ATTR_SCALE_X_THETA,
        settings.scale_x_theta.as_token(),
        ATTR_SCALE_Y_RADIUS,
        settings.scale_y_radius.as_token(),
        ATTR_UNITS_THETA,
        settings.units_theta.as_token(),
        ATTR_ORIGIN_RADIUS,
        format_float(settings.origin_radius)
    ));
}

/// Kürzeste Darstellung, die beim Parsen exakt denselben Wert ergibt.
fn format_float(value: f64) -> String {
    format!("{}", value)
}
