use super::super::coords_form::CoordsForm;
use std::path::PathBuf;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Formular prüfen und als undo-fähigen Settings-Command anwenden
    ApplyCoordsSettings { form: CoordsForm },
    /// Undo-Schritt ausführen
    Undo,
    /// Redo-Schritt ausführen
    Redo,
    /// Dokument und History zurücksetzen
    NewDocument,
    /// Session-Datei laden
    LoadSession { path: PathBuf },
    /// Session speichern (`None` = aktueller Pfad)
    SaveSession { path: Option<PathBuf> },
}
