//! Zentrale Konfiguration für Engauge Digitizer.
//!
//! `DigitizerOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::CoordsSettings;
use serde::{Deserialize, Serialize};

// ── History ─────────────────────────────────────────────────────────

/// Maximale Anzahl an Commands in der Undo/Redo-History.
pub const HISTORY_MAX_DEPTH: usize = 100;

/// Dateiname der Optionen-Datei neben der Binary.
const CONFIG_FILE_NAME: &str = "engauge_digitizer.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `engauge_digitizer.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitizerOptions {
    /// Maximale Tiefe der Undo/Redo-History (älteste Commands werden verworfen)
    #[serde(default = "default_history_max_depth")]
    pub history_max_depth: usize,
    /// Koordinaten-Einstellungen für neue Dokumente
    #[serde(default)]
    pub default_coords: CoordsSettings,
}

impl Default for DigitizerOptions {
    fn default() -> Self {
        Self {
            history_max_depth: HISTORY_MAX_DEPTH,
            default_coords: CoordsSettings::default(),
        }
    }
}

/// Serde-Default für `history_max_depth` (Abwärtskompatibilität bestehender TOML-Dateien).
fn default_history_max_depth() -> usize {
    HISTORY_MAX_DEPTH
}

impl DigitizerOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parsed Optionen aus TOML-Text und prüft die Werte.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let opts: Self = toml::from_str(content)?;
        if opts.history_max_depth == 0 {
            anyhow::bail!("history_max_depth muss mindestens 1 sein");
        }
        crate::core::validate(&opts.default_coords)?;
        Ok(opts)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("engauge_digitizer"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }
}
