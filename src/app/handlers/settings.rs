//! Handler für Änderungen an den Dokument-Einstellungen.

use crate::app::{AppState, CmdSettingsCoords, CoordsForm};

/// Prüft das Formular und legt bei einer echten Änderung einen
/// `CmdSettingsCoords` auf die History (die ihn sofort anwendet).
///
/// Ungültige Eingaben liefern einen Fehler; dann wird kein Command erzeugt.
pub fn apply_coords(state: &mut AppState, form: &CoordsForm) -> anyhow::Result<()> {
    let after = form.confirm()?;
    let before = state.document.coords;

    if after == before {
        log::debug!("Koordinaten-Einstellungen unverändert, kein Command");
        return Ok(());
    }

    let cmd = CmdSettingsCoords::new(before, after);
    state.history.push(cmd.into(), &mut state.document);
    Ok(())
}
