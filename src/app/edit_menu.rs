//! Zustand der Undo/Redo-Einträge im Bearbeiten-Menü.

use super::CommandHistory;

/// Aktivierung und Beschriftung der Undo/Redo-Menüeinträge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditMenuState {
    pub undo_enabled: bool,
    pub redo_enabled: bool,
    pub undo_label: String,
    pub redo_label: String,
}

/// Leitet den Menüzustand aus der History ab. Deaktivierte Einträge werden
/// von der UI nicht ausgelöst, daher erreicht ein No-op-Undo die History nie.
pub fn edit_menu_state(history: &CommandHistory) -> EditMenuState {
    EditMenuState {
        undo_enabled: history.can_undo(),
        redo_enabled: history.can_redo(),
        undo_label: menu_label("Undo", history.undo_description()),
        redo_label: menu_label("Redo", history.redo_description()),
    }
}

fn menu_label(action: &str, description: Option<&str>) -> String {
    match description {
        Some(description) => format!("{} {}", action, description),
        None => action.to_string(),
    }
}
