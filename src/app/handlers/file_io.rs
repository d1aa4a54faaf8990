//! Handler für Datei-Operationen (Neu, Öffnen, Speichern).

use crate::app::{AppState, CommandHistory, DocumentState};
use crate::xml::{parse_session, write_session};
use anyhow::{anyhow, Context};
use std::path::{Path, PathBuf};

/// Verwirft Dokument und History und beginnt mit den Standard-Einstellungen.
pub fn new_document(state: &mut AppState) {
    state.document = DocumentState::new(state.options.default_coords);
    state.history.clear();
    state.document_path = None;
    log::info!("Neues Dokument erstellt");
}

/// Lädt eine Session-Datei.
///
/// Die gespeicherten Einstellungen gelten als angewendet; kein Command wird
/// erneut ausgeführt. Bei einem Fehler bleibt der bisherige Zustand erhalten.
pub fn load(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Session-Datei nicht lesbar: {}", path.display()))?;
    let session = parse_session(&content)
        .with_context(|| format!("Session-Datei fehlerhaft: {}", path.display()))?;

    let mut history = CommandHistory::new_with_capacity(state.options.history_max_depth);
    history.restore(session.commands, session.cursor)?;

    state.document.replace(session.coords);
    state.history = history;
    state.document_path = Some(path.to_path_buf());

    log::info!(
        "Session geladen: {} ({} Commands)",
        path.display(),
        state.history.len()
    );
    Ok(())
}

/// Speichert die Session.
///
/// `None` speichert unter dem aktuell bekannten Pfad, `Some(p)` unter `p`.
pub fn save(state: &mut AppState, path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = path
        .or_else(|| state.document_path.clone())
        .ok_or_else(|| anyhow!("Kein Speicherpfad bekannt"))?;

    let content = write_session(&state.document.coords, &state.history);
    std::fs::write(&path, content)
        .with_context(|| format!("Session-Datei nicht schreibbar: {}", path.display()))?;

    state.history.mark_clean();
    log::info!("Session gespeichert: {}", path.display());
    state.document_path = Some(path);
    Ok(())
}
