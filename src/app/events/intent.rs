use super::super::coords_form::CoordsForm;
use std::path::PathBuf;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Koordinaten-Einstellungsseite mit OK bestätigt
    CoordsSettingsConfirmed { form: CoordsForm },
    /// Letzte Änderung rückgängig machen
    UndoRequested,
    /// Rückgängig gemachte Änderung wiederherstellen
    RedoRequested,
    /// Neues, leeres Dokument beginnen
    NewDocumentRequested,
    /// Session-Datei wurde zum Öffnen ausgewählt
    OpenSessionRequested { path: PathBuf },
    /// Unter dem aktuellen Pfad speichern
    SaveRequested,
    /// Speicherpfad wurde im Dialog ausgewählt
    SaveAsRequested { path: PathBuf },
}
