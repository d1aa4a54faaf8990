//! Application State: zentrale Datenhaltung.

use super::command::CommandTarget;
use super::history::CommandHistory;
use super::CommandLog;
use crate::core::CoordsSettings;
use crate::shared::DigitizerOptions;
use std::path::PathBuf;

/// Live-Zustand des geöffneten Dokuments, auf den Commands angewendet werden.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentState {
    /// Aktuelle Koordinaten-Einstellungen
    pub coords: CoordsSettings,
    /// Zähler für View-Aktualisierungen; jede Änderung erhöht ihn um 1
    pub view_revision: u64,
}

impl DocumentState {
    /// Erstellt ein Dokument mit den gegebenen Einstellungen.
    pub fn new(coords: CoordsSettings) -> Self {
        Self {
            coords,
            view_revision: 0,
        }
    }

    /// Übernimmt geladene Einstellungen direkt (ohne Command) und aktualisiert Views.
    pub fn replace(&mut self, coords: CoordsSettings) {
        self.coords = coords;
        self.view_revision += 1;
    }
}

impl CommandTarget for DocumentState {
    fn update_settings_coords(&mut self, settings: &CoordsSettings) {
        log::debug!("Koordinaten-Einstellungen übernommen: {:?}", settings);
        self.coords = *settings;
    }

    fn update_after_command(&mut self) {
        self.view_revision += 1;
    }
}

/// Gesamter Anwendungszustand
pub struct AppState {
    /// Live-Dokument
    pub document: DocumentState,
    /// Undo/Redo-History des Dokuments
    pub history: CommandHistory,
    /// Laufzeit-Optionen
    pub options: DigitizerOptions,
    /// Pfad der zuletzt geladenen/gespeicherten Session-Datei
    pub document_path: Option<PathBuf>,
    /// Protokoll der ausgeführten App-Commands
    pub command_log: CommandLog,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Erstellt einen leeren Zustand mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(DigitizerOptions::default())
    }

    /// Erstellt einen leeren Zustand mit den gegebenen Optionen.
    pub fn with_options(options: DigitizerOptions) -> Self {
        Self {
            document: DocumentState::new(options.default_coords),
            history: CommandHistory::new_with_capacity(options.history_max_depth),
            options,
            document_path: None,
            command_log: CommandLog::new(),
        }
    }

    /// `true`, wenn seit dem letzten Speichern/Laden Änderungen vorliegen.
    pub fn is_dirty(&self) -> bool {
        !self.history.is_clean()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CoordsType, PolarThetaUnits};

    #[test]
    fn new_state_uses_option_defaults() {
        let options = DigitizerOptions {
            history_max_depth: 5,
            default_coords: CoordsSettings::polar(PolarThetaUnits::Turns, 2.0),
        };
        let state = AppState::with_options(options);

        assert_eq!(state.document.coords.coords_type, CoordsType::Polar);
        assert_eq!(state.history.max_depth(), 5);
        assert!(!state.is_dirty());
    }

    #[test]
    fn command_target_refresh_bumps_revision() {
        let mut document = DocumentState::new(CoordsSettings::default());
        document.update_settings_coords(&CoordsSettings::polar(PolarThetaUnits::Radians, 0.0));
        assert_eq!(document.view_revision, 0);

        document.update_after_command();
        assert_eq!(document.view_revision, 1);
        assert!(document.coords.is_polar());
    }
}
