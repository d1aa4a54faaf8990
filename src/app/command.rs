//! Undo-fähige Dokument-Commands.
//!
//! Ein Command hält Vorher- und Nachher-Zustand und wendet sie über das
//! [`CommandTarget`]-Trait auf den Live-Zustand an. Er besitzt den Zustand nicht,
//! sondern bekommt ihn bei jedem `redo`/`undo` explizit übergeben.

use crate::core::CoordsSettings;

/// Beschreibungstext des Koordinaten-Settings-Commands (Menü-Labels).
pub const CMD_SETTINGS_COORDS_DESCRIPTION: &str = "Coordinate settings";

/// Schnittstelle des Dokuments, auf das Commands angewendet werden.
pub trait CommandTarget {
    /// Übernimmt neue Koordinaten-Einstellungen und stößt abhängige Neuberechnung an.
    fn update_settings_coords(&mut self, settings: &CoordsSettings);

    /// Aktualisiert abhängige Ansichten nach jedem Redo/Undo.
    fn update_after_command(&mut self);
}

/// Änderung der Koordinaten-Einstellungen.
#[derive(Debug, Clone, PartialEq)]
pub struct CmdSettingsCoords {
    before: CoordsSettings,
    after: CoordsSettings,
}

impl CmdSettingsCoords {
    /// Erstellt den Command. Keine Validierung: die Einstellungen müssen vorher
    /// geprüft worden sein (siehe [`crate::core::validate`]).
    pub fn new(before: CoordsSettings, after: CoordsSettings) -> Self {
        log::info!(
            "CmdSettingsCoords: {:?} -> {:?}",
            before.coords_type,
            after.coords_type
        );
        Self { before, after }
    }

    /// Zustand vor der Änderung.
    pub fn before(&self) -> &CoordsSettings {
        &self.before
    }

    /// Zustand nach der Änderung.
    pub fn after(&self) -> &CoordsSettings {
        &self.after
    }

    /// Wendet den Nachher-Zustand an (eine Mutation, ein Refresh).
    pub fn redo<T: CommandTarget + ?Sized>(&self, target: &mut T) {
        log::info!("CmdSettingsCoords::redo");
        target.update_settings_coords(&self.after);
        target.update_after_command();
    }

    /// Wendet den Vorher-Zustand an (eine Mutation, ein Refresh).
    pub fn undo<T: CommandTarget + ?Sized>(&self, target: &mut T) {
        log::info!("CmdSettingsCoords::undo");
        target.update_settings_coords(&self.before);
        target.update_after_command();
    }
}

/// Alle Command-Arten, die in der History und im Session-Log vorkommen.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentCommand {
    /// Koordinaten-Einstellungen geändert
    SettingsCoords(CmdSettingsCoords),
}

impl DocumentCommand {
    /// Führt den Command (erneut) aus.
    pub fn redo<T: CommandTarget + ?Sized>(&self, target: &mut T) {
        match self {
            Self::SettingsCoords(cmd) => cmd.redo(target),
        }
    }

    /// Macht den Command rückgängig.
    pub fn undo<T: CommandTarget + ?Sized>(&self, target: &mut T) {
        match self {
            Self::SettingsCoords(cmd) => cmd.undo(target),
        }
    }

    /// Kurzbeschreibung für Undo/Redo-Menüeinträge.
    pub fn description(&self) -> &'static str {
        match self {
            Self::SettingsCoords(_) => CMD_SETTINGS_COORDS_DESCRIPTION,
        }
    }
}

impl From<CmdSettingsCoords> for DocumentCommand {
    fn from(cmd: CmdSettingsCoords) -> Self {
        Self::SettingsCoords(cmd)
    }
}
