//! Protokoll der ausgeführten App-Commands samt Ergebnis.
//!
//! Fehlgeschlagene Schritte (z.B. eine kaputte Session-Datei) bleiben hier
//! sichtbar, auch wenn der Aufrufer den Fehler nur anzeigt und verwirft.

use super::AppCommand;
use std::collections::VecDeque;

/// Ausgang eines ausgeführten App-Commands
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutcome {
    /// Ohne Fehler ausgeführt (auch wenn sich nichts geändert hat)
    Completed,
    /// Abgebrochen; enthält die vollständige Fehlerkette
    Failed(String),
}

/// Ein Eintrag im Command-Log
#[derive(Debug, Clone)]
pub struct CommandLogEntry {
    /// Ausgeführter Command
    pub command: AppCommand,
    /// Ergebnis der Ausführung
    pub outcome: CommandOutcome,
}

impl CommandLogEntry {
    /// `true`, wenn der Command abgebrochen wurde.
    pub fn failed(&self) -> bool {
        matches!(self.outcome, CommandOutcome::Failed(_))
    }
}

/// Ringpuffer der zuletzt ausgeführten Commands.
pub struct CommandLog {
    entries: VecDeque<CommandLogEntry>,
    capacity: usize,
}

impl Default for CommandLog {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandLog {
    /// Standard-Kapazität des Protokolls.
    pub const DEFAULT_CAPACITY: usize = 256;

    /// Erstellt ein leeres Command-Log mit Standard-Kapazität.
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Erstellt ein leeres Command-Log, das höchstens `capacity` Einträge hält.
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Hält einen ausgeführten Command mit seinem Ergebnis fest.
    /// Bei voller Kapazität fällt der älteste Eintrag heraus.
    pub fn record(&mut self, command: AppCommand, result: &anyhow::Result<()>) {
        let outcome = match result {
            Ok(()) => CommandOutcome::Completed,
            Err(err) => {
                log::warn!("{:?} fehlgeschlagen: {:#}", command, err);
                CommandOutcome::Failed(format!("{err:#}"))
            }
        };

        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(CommandLogEntry { command, outcome });
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Einträge vom ältesten zum neuesten.
    pub fn entries(&self) -> impl Iterator<Item = &CommandLogEntry> {
        self.entries.iter()
    }

    /// Zuletzt ausgeführter Command.
    pub fn last(&self) -> Option<&CommandLogEntry> {
        self.entries.back()
    }

    /// Jüngster fehlgeschlagener Command.
    pub fn last_failure(&self) -> Option<&CommandLogEntry> {
        self.entries.iter().rev().find(|entry| entry.failed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn records_outcome_per_command() {
        let mut log = CommandLog::new();
        log.record(AppCommand::Undo, &Ok(()));
        log.record(
            AppCommand::SaveSession { path: None },
            &Err(anyhow!("Kein Speicherpfad bekannt")),
        );
        log.record(AppCommand::Redo, &Ok(()));

        assert_eq!(log.len(), 3);
        assert!(matches!(log.last().map(|e| &e.command), Some(AppCommand::Redo)));

        let failure = log.last_failure().expect("Fehler protokolliert");
        assert!(matches!(failure.command, AppCommand::SaveSession { path: None }));
        assert_eq!(
            failure.outcome,
            CommandOutcome::Failed("Kein Speicherpfad bekannt".to_string())
        );
    }

    #[test]
    fn drops_oldest_entry_when_full() {
        let mut log = CommandLog::with_capacity(2);
        log.record(AppCommand::NewDocument, &Err(anyhow!("alt")));
        log.record(AppCommand::Undo, &Ok(()));
        log.record(AppCommand::Redo, &Ok(()));

        assert_eq!(log.len(), 2);
        assert!(log.last_failure().is_none());
        assert!(matches!(
            log.entries().next().map(|e| &e.command),
            Some(AppCommand::Undo)
        ));
    }
}
