//! Core-Domänentypen: Koordinatensystem-Einstellungen und Winkel-Einheiten.

pub mod coords;
pub mod theta_units;

pub use coords::{validate, CoordScale, CoordsSettings, CoordsType};
pub use theta_units::PolarThetaUnits;
