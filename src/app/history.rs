use super::command::{CommandTarget, DocumentCommand};
use crate::shared::HISTORY_MAX_DEPTH;
use anyhow::{bail, Result};

/// Lineare Undo/Redo-History mit einem Cursor.
///
/// Commands mit Index `< cursor` sind angewendet, ab `cursor` rückgängig
/// gemacht. Es gilt immer `0 <= cursor <= len`.
pub struct CommandHistory {
    commands: Vec<DocumentCommand>,
    cursor: usize,
    max_depth: usize,
    /// Cursor-Position beim letzten Speichern (None = nicht mehr erreichbar)
    clean_cursor: Option<usize>,
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new_with_capacity(HISTORY_MAX_DEPTH)
    }
}

impl CommandHistory {
    /// Erstellt eine leere History mit maximaler Tiefe (mindestens 1).
    pub fn new_with_capacity(max_depth: usize) -> Self {
        let max_depth = max_depth.max(1);
        Self {
            commands: Vec::with_capacity(max_depth),
            cursor: 0,
            max_depth,
            clean_cursor: Some(0),
        }
    }

    /// Verwirft die rückgängig gemachte Zukunft, hängt `cmd` an, führt ihn aus
    /// und setzt den Cursor dahinter.
    pub fn push<T: CommandTarget + ?Sized>(&mut self, cmd: DocumentCommand, target: &mut T) {
        self.truncate_future();
        self.commands.push(cmd);
        self.commands[self.cursor].redo(target);
        self.cursor += 1;
        self.evict_overflow();
    }

    /// Wie [`push`](Self::push), aber ohne `redo`: für Commands, deren Wirkung
    /// bereits im Dokument enthalten ist (Laden einer Session).
    pub fn push_applied(&mut self, cmd: DocumentCommand) {
        self.truncate_future();
        self.commands.push(cmd);
        self.cursor += 1;
        self.evict_overflow();
    }

    /// Ersetzt den Inhalt durch ein geladenes Command-Log. Kein Command wird
    /// ausgeführt; der gespeicherte Zustand gilt als maßgeblich.
    pub fn restore(&mut self, commands: Vec<DocumentCommand>, cursor: usize) -> Result<()> {
        if cursor > commands.len() {
            bail!(
                "History-Cursor {} liegt hinter dem Ende ({} Commands)",
                cursor,
                commands.len()
            );
        }

        self.commands = commands;
        self.cursor = cursor;
        self.clean_cursor = Some(cursor);
        if self.commands.len() > self.max_depth {
            log::warn!(
                "Geladene History hat {} Commands, behalte die letzten {}",
                self.commands.len(),
                self.max_depth
            );
        }
        self.evict_overflow();
        Ok(())
    }

    /// Macht den letzten angewendeten Command rückgängig.
    /// Gibt `false` zurück (No-op), wenn nichts rückgängig zu machen ist.
    pub fn undo<T: CommandTarget + ?Sized>(&mut self, target: &mut T) -> bool {
        if self.cursor == 0 {
            log::debug!("Undo: nichts rückgängig zu machen");
            return false;
        }
        self.cursor -= 1;
        self.commands[self.cursor].undo(target);
        true
    }

    /// Wendet den nächsten rückgängig gemachten Command erneut an.
    /// Gibt `false` zurück (No-op), wenn nichts wiederherzustellen ist.
    pub fn redo<T: CommandTarget + ?Sized>(&mut self, target: &mut T) -> bool {
        if self.cursor == self.commands.len() {
            log::debug!("Redo: nichts wiederherzustellen");
            return false;
        }
        self.commands[self.cursor].redo(target);
        self.cursor += 1;
        true
    }

    /// Prüft ob Undo möglich ist.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Prüft ob Redo möglich ist.
    pub fn can_redo(&self) -> bool {
        self.cursor < self.commands.len()
    }

    /// Beschreibung des Commands, den ein Undo betreffen würde.
    pub fn undo_description(&self) -> Option<&'static str> {
        self.cursor
            .checked_sub(1)
            .map(|index| self.commands[index].description())
    }

    /// Beschreibung des Commands, den ein Redo betreffen würde.
    pub fn redo_description(&self) -> Option<&'static str> {
        self.commands.get(self.cursor).map(|cmd| cmd.description())
    }

    /// Anzahl der angewendeten Commands (Position zwischen Undo- und Redo-Teil).
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Gibt die Anzahl aller Commands zurück.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Maximale Anzahl gehaltener Commands.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Read-only Sicht auf alle Commands (angewendete und rückgängig gemachte).
    pub fn commands(&self) -> &[DocumentCommand] {
        &self.commands
    }

    /// Verwirft alle Commands (z.B. beim Schließen eines Dokuments).
    pub fn clear(&mut self) {
        self.commands.clear();
        self.cursor = 0;
        self.clean_cursor = Some(0);
    }

    /// Markiert die aktuelle Cursor-Position als gespeichert.
    pub fn mark_clean(&mut self) {
        self.clean_cursor = Some(self.cursor);
    }

    /// `true`, solange der Cursor auf der zuletzt gespeicherten Position steht.
    pub fn is_clean(&self) -> bool {
        self.clean_cursor == Some(self.cursor)
    }

    fn truncate_future(&mut self) {
        if self.clean_cursor.is_some_and(|clean| clean > self.cursor) {
            self.clean_cursor = None;
        }
        self.commands.truncate(self.cursor);
    }

    /// Kürzt auf `max_depth`: zuerst die ältesten angewendeten Commands, erst
    /// danach das Ende der rückgängig gemachten Zukunft. Die verbleibenden
    /// Commands schließen so lückenlos an den aktuellen Zustand an.
    fn evict_overflow(&mut self) {
        let excess = self.commands.len().saturating_sub(self.max_depth);
        if excess == 0 {
            return;
        }

        let applied = excess.min(self.cursor);
        self.commands.drain(..applied);
        self.cursor -= applied;
        self.clean_cursor = self
            .clean_cursor
            .and_then(|clean| clean.checked_sub(applied));

        self.commands.truncate(self.max_depth);
        if self.clean_cursor.is_some_and(|clean| clean > self.commands.len()) {
            self.clean_cursor = None;
        }
    }
}
