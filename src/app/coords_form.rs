//! Einstellungsformular für das Koordinatensystem.
//!
//! Reines Datenmodell ohne UI-Toolkit: hält die Eingaben, liefert die
//! Aktivierungs-Regeln der Bedienelemente und prüft beim Bestätigen.

use crate::core::{validate, CoordScale, CoordsSettings, CoordsType, PolarThetaUnits};
use anyhow::{Context, Result};

/// Aktivierungszustand der Formular-Bedienelemente
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordsFormControls {
    /// Polar-Auswahl möglich (nicht bei logarithmischer X/Theta-Skala)
    pub polar_enabled: bool,
    /// Log-Auswahl für X/Theta möglich (nicht bei Polar)
    pub x_theta_log_enabled: bool,
    /// Theta-Einheit wählbar (nur bei Polar)
    pub units_theta_enabled: bool,
    /// Ursprungsradius editierbar (nur bei Polar)
    pub origin_radius_enabled: bool,
}

/// Eingabewerte des Koordinaten-Formulars.
#[derive(Debug, Clone, PartialEq)]
pub struct CoordsForm {
    coords_type: CoordsType,
    scale_x_theta: CoordScale,
    scale_y_radius: CoordScale,
    units_theta: PolarThetaUnits,
    origin_radius_text: String,
}

impl CoordsForm {
    /// Füllt das Formular mit bestehenden Einstellungen.
    pub fn from_settings(settings: &CoordsSettings) -> Self {
        Self {
            coords_type: settings.coords_type,
            scale_x_theta: settings.scale_x_theta,
            scale_y_radius: settings.scale_y_radius,
            units_theta: settings.units_theta,
            origin_radius_text: settings.origin_radius.to_string(),
        }
    }

    pub fn set_coords_type(&mut self, coords_type: CoordsType) {
        log::debug!("CoordsForm: Koordinatentyp {:?}", coords_type);
        self.coords_type = coords_type;
    }

    pub fn set_scale_x_theta(&mut self, scale: CoordScale) {
        self.scale_x_theta = scale;
    }

    pub fn set_scale_y_radius(&mut self, scale: CoordScale) {
        self.scale_y_radius = scale;
    }

    pub fn set_units_theta(&mut self, units: PolarThetaUnits) {
        self.units_theta = units;
    }

    pub fn set_origin_radius_text(&mut self, text: impl Into<String>) {
        self.origin_radius_text = text.into();
    }

    pub fn coords_type(&self) -> CoordsType {
        self.coords_type
    }

    pub fn origin_radius_text(&self) -> &str {
        &self.origin_radius_text
    }

    /// Aktivierungsregeln für die aktuelle Auswahl.
    pub fn controls(&self) -> CoordsFormControls {
        let polar = self.coords_type == CoordsType::Polar;
        CoordsFormControls {
            polar_enabled: self.scale_x_theta != CoordScale::Log,
            x_theta_log_enabled: !polar,
            units_theta_enabled: polar,
            origin_radius_enabled: polar,
        }
    }

    /// Baut die Einstellungen aus den Eingaben und prüft sie.
    ///
    /// Schlägt fehl bei ungültigem Ursprungsradius oder Polar + Log-Theta.
    pub fn confirm(&self) -> Result<CoordsSettings> {
        let text = self.origin_radius_text.trim();
        let origin_radius: f64 = text
            .parse()
            .with_context(|| format!("Ungültiger Ursprungsradius: '{}'", text))?;

        let settings = CoordsSettings {
            coords_type: self.coords_type,
            scale_x_theta: self.scale_x_theta,
            scale_y_radius: self.scale_y_radius,
            units_theta: self.units_theta,
            origin_radius,
        };
        validate(&settings)?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_settings_roundtrips_through_confirm() {
        let settings = CoordsSettings {
            scale_y_radius: CoordScale::Log,
            ..CoordsSettings::polar(PolarThetaUnits::DegreesMinutesSeconds, 12.25)
        };
        let form = CoordsForm::from_settings(&settings);
        assert_eq!(form.confirm().expect("gültig"), settings);
    }

    #[test]
    fn cartesian_controls() {
        let form = CoordsForm::from_settings(&CoordsSettings::default());
        assert_eq!(
            form.controls(),
            CoordsFormControls {
                polar_enabled: true,
                x_theta_log_enabled: true,
                units_theta_enabled: false,
                origin_radius_enabled: false,
            }
        );
    }

    #[test]
    fn polar_disables_x_theta_log() {
        let mut form = CoordsForm::from_settings(&CoordsSettings::default());
        form.set_coords_type(CoordsType::Polar);

        let controls = form.controls();
        assert!(!controls.x_theta_log_enabled);
        assert!(controls.units_theta_enabled);
        assert!(controls.origin_radius_enabled);
    }

    #[test]
    fn log_x_disables_polar() {
        let mut form = CoordsForm::from_settings(&CoordsSettings::default());
        form.set_scale_x_theta(CoordScale::Log);
        assert!(!form.controls().polar_enabled);
    }

    #[test]
    fn confirm_rejects_polar_with_log_theta() {
        let mut form = CoordsForm::from_settings(&CoordsSettings::default());
        form.set_scale_x_theta(CoordScale::Log);
        form.set_coords_type(CoordsType::Polar);

        assert!(form.confirm().is_err());
    }

    #[test]
    fn confirm_rejects_unparsable_radius() {
        let mut form = CoordsForm::from_settings(&CoordsSettings::polar(
            PolarThetaUnits::Degrees,
            0.0,
        ));
        form.set_origin_radius_text("zehn");

        let err = form.confirm().expect_err("Text ist keine Zahl");
        assert!(format!("{err:#}").contains("Ursprungsradius"));
    }

    #[test]
    fn confirm_trims_radius_text() {
        let mut form = CoordsForm::from_settings(&CoordsSettings::polar(
            PolarThetaUnits::Gradians,
            0.0,
        ));
        form.set_origin_radius_text("  -3.5 ");
        assert_eq!(form.confirm().expect("gültig").origin_radius, -3.5);
    }
}
