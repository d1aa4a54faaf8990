//! Engauge Digitizer (Kommandozeile).
//!
//! Lädt eine Session-Datei, spielt Undo/Redo-Schritte ab und speichert sie
//! optional wieder. Die eigentliche Oberfläche ist nicht Teil dieses Binaries.
//!
//! Aufruf: `engauge-digitizer <session.xml> [undo|redo|new|save|save-as <pfad>]...`

use anyhow::{bail, Context, Result};
use engauge_digitizer::{edit_menu_state, AppController, AppIntent, AppState, DigitizerOptions};
use std::path::PathBuf;

fn main() -> Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .parse_default_env()
            .init();

        log::info!(
            "Engauge Digitizer v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let args: Vec<String> = std::env::args().skip(1).collect();
        let Some((session_path, steps)) = args.split_first() else {
            bail!("Aufruf: engauge-digitizer <session.xml> [undo|redo|new|save|save-as <pfad>]...");
        };

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = DigitizerOptions::config_path();
        let options = DigitizerOptions::load_from_file(&config_path);

        let mut state = AppState::with_options(options);
        let mut controller = AppController::new();

        let mut intents = vec![AppIntent::OpenSessionRequested {
            path: PathBuf::from(session_path),
        }];
        intents.extend(parse_steps(steps)?);

        for intent in intents {
            controller
                .handle_intent(&mut state, intent)
                .context("Verarbeitung fehlgeschlagen")?;
        }

        print_summary(&state);
        Ok(())
    }
}

/// Übersetzt Kommandozeilen-Schritte in Intents.
fn parse_steps(steps: &[String]) -> Result<Vec<AppIntent>> {
    let mut intents = Vec::new();
    let mut iter = steps.iter();
    while let Some(step) = iter.next() {
        let intent = match step.as_str() {
            "undo" => AppIntent::UndoRequested,
            "redo" => AppIntent::RedoRequested,
            "new" => AppIntent::NewDocumentRequested,
            "save" => AppIntent::SaveRequested,
            "save-as" => {
                let Some(path) = iter.next() else {
                    bail!("'save-as' erwartet einen Pfad");
                };
                AppIntent::SaveAsRequested {
                    path: PathBuf::from(path),
                }
            }
            other => bail!("Unbekannter Schritt: '{}'", other),
        };
        intents.push(intent);
    }
    Ok(intents)
}

fn print_summary(state: &AppState) {
    let coords = &state.document.coords;
    let menu = edit_menu_state(&state.history);

    println!("Koordinaten:    {:?}", coords.coords_type);
    println!("X/Theta-Skala:  {:?}", coords.scale_x_theta);
    println!("Y/R-Skala:      {:?}", coords.scale_y_radius);
    if coords.is_polar() {
        println!("Theta-Einheit:  {}", coords.units_theta.label());
        println!("Ursprungsradius: {}", coords.origin_radius);
    }
    println!(
        "History:        {}/{} (ungespeichert: {})",
        state.history.cursor(),
        state.history.len(),
        state.is_dirty()
    );
    println!(
        "Menü:           {} [{}], {} [{}]",
        menu.undo_label,
        if menu.undo_enabled { "an" } else { "aus" },
        menu.redo_label,
        if menu.redo_enabled { "an" } else { "aus" }
    );
}
