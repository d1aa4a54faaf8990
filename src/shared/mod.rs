//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `app` und das Binary gemeinsam nutzen.

pub mod options;

pub use options::DigitizerOptions;
pub use options::HISTORY_MAX_DEPTH;
