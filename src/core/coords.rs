//! Koordinatensystem-Einstellungen eines Dokuments.
//!
//! `CoordsSettings` ist ein unveränderlicher Wert (Copy) und dient als
//! Vorher/Nachher-Zustand der Settings-Commands.

use super::theta_units::PolarThetaUnits;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Art des Koordinatensystems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CoordsType {
    /// Kartesisch (X, Y)
    #[default]
    Cartesian,
    /// Polar (Theta, R)
    Polar,
}

impl CoordsType {
    /// Alle Koordinatentypen.
    pub const ALL: [CoordsType; 2] = [Self::Cartesian, Self::Polar];

    /// Stabiler Token für das Session-XML.
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Cartesian => "Cartesian",
            Self::Polar => "Polar",
        }
    }

    /// Parsed einen Token aus dem Session-XML.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Cartesian" => Some(Self::Cartesian),
            "Polar" => Some(Self::Polar),
            _ => None,
        }
    }
}

/// Skalierung einer Achse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CoordScale {
    /// Lineare Skala
    #[default]
    Linear,
    /// Logarithmische Skala (nur positive Werte darstellbar)
    Log,
}

impl CoordScale {
    /// Alle Skalierungen.
    pub const ALL: [CoordScale; 2] = [Self::Linear, Self::Log];

    /// Stabiler Token für das Session-XML.
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Linear => "Linear",
            Self::Log => "Log",
        }
    }

    /// Parsed einen Token aus dem Session-XML.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "Linear" => Some(Self::Linear),
            "Log" => Some(Self::Log),
            _ => None,
        }
    }
}

/// Snapshot einer Koordinatensystem-Konfiguration.
///
/// Invariante: bei `CoordsType::Polar` ist `scale_x_theta` nie `CoordScale::Log`.
/// Die Invariante wird nicht hier, sondern vor dem Erzeugen eines Commands durch
/// [`validate`] bzw. das Einstellungsformular geprüft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordsSettings {
    /// Kartesisch oder Polar
    pub coords_type: CoordsType,
    /// Skala der X- bzw. Theta-Achse
    pub scale_x_theta: CoordScale,
    /// Skala der Y- bzw. R-Achse
    pub scale_y_radius: CoordScale,
    /// Einheit der Winkelachse (nur bei Polar relevant)
    pub units_theta: PolarThetaUnits,
    /// Radius-Wert im Ursprung (z.B. ungleich 0 bei Dezibel-Skalen)
    pub origin_radius: f64,
}

impl Default for CoordsSettings {
    fn default() -> Self {
        Self {
            coords_type: CoordsType::Cartesian,
            scale_x_theta: CoordScale::Linear,
            scale_y_radius: CoordScale::Linear,
            units_theta: PolarThetaUnits::Degrees,
            origin_radius: 0.0,
        }
    }
}

impl CoordsSettings {
    /// Kurzform für Polar-Einstellungen mit linearen Achsen.
    pub fn polar(units_theta: PolarThetaUnits, origin_radius: f64) -> Self {
        Self {
            coords_type: CoordsType::Polar,
            units_theta,
            origin_radius,
            ..Self::default()
        }
    }

    /// Gibt `true` zurück, wenn die Einstellungen ein Polar-System beschreiben.
    pub fn is_polar(&self) -> bool {
        self.coords_type == CoordsType::Polar
    }
}

/// Prüft die Einstellungen, bevor daraus ein Command gebaut wird.
///
/// Abgelehnt werden Polar-Koordinaten mit logarithmischer Theta-Achse sowie ein
/// nicht endlicher Ursprungsradius.
pub fn validate(settings: &CoordsSettings) -> Result<()> {
    if settings.is_polar() && settings.scale_x_theta == CoordScale::Log {
        bail!("Polarkoordinaten sind mit logarithmischer Theta-Skala nicht erlaubt");
    }
    if !settings.origin_radius.is_finite() {
        bail!(
            "Ursprungsradius muss eine endliche Zahl sein: {}",
            settings.origin_radius
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_cartesian_linear_linear() {
        let settings = CoordsSettings::default();
        assert_eq!(settings.coords_type, CoordsType::Cartesian);
        assert_eq!(settings.scale_x_theta, CoordScale::Linear);
        assert_eq!(settings.scale_y_radius, CoordScale::Linear);
        assert!(validate(&settings).is_ok());
    }

    #[test]
    fn polar_with_log_theta_is_rejected() {
        let settings = CoordsSettings {
            scale_x_theta: CoordScale::Log,
            ..CoordsSettings::polar(PolarThetaUnits::Degrees, 0.0)
        };
        let err = validate(&settings).expect_err("Polar + Log muss abgelehnt werden");
        assert!(format!("{err}").contains("logarithmischer Theta-Skala"));
    }

    #[test]
    fn polar_with_log_radius_is_allowed() {
        let settings = CoordsSettings {
            scale_y_radius: CoordScale::Log,
            ..CoordsSettings::polar(PolarThetaUnits::Radians, 1.0)
        };
        assert!(validate(&settings).is_ok());
    }

    #[test]
    fn cartesian_log_log_is_allowed() {
        let settings = CoordsSettings {
            scale_x_theta: CoordScale::Log,
            scale_y_radius: CoordScale::Log,
            ..CoordsSettings::default()
        };
        assert!(validate(&settings).is_ok());
    }

    #[test]
    fn non_finite_origin_radius_is_rejected() {
        let settings = CoordsSettings::polar(PolarThetaUnits::Degrees, f64::NAN);
        assert!(validate(&settings).is_err());
    }

    #[test]
    fn tokens_roundtrip() {
        for kind in CoordsType::ALL {
            assert_eq!(CoordsType::from_token(kind.as_token()), Some(kind));
        }
        for scale in CoordScale::ALL {
            assert_eq!(CoordScale::from_token(scale.as_token()), Some(scale));
        }
        assert_eq!(CoordsType::from_token("polar"), None);
    }
}
