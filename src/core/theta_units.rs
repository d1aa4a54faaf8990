//! Einheiten der Winkelachse (Theta) bei Polarkoordinaten.
//!
//! Intern wird in Grad gerechnet; jede Einheit kennt ihre Periode (eine volle
//! Umdrehung) sowie ein Text-Format für Ein- und Ausgabe.

use anyhow::{anyhow, bail, Context, Result};
use serde::{Deserialize, Serialize};

/// Grad pro voller Umdrehung.
pub const DEGREES_PER_REVOLUTION: f64 = 360.0;
/// Gon pro voller Umdrehung.
pub const GRADIANS_PER_REVOLUTION: f64 = 400.0;

const MINUTES_PER_DEGREE: f64 = 60.0;
const SECONDS_PER_MINUTE: f64 = 60.0;

/// Winkel-Einheit der Theta-Achse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PolarThetaUnits {
    /// Dezimalgrad (DDD.DDDDD)
    #[default]
    Degrees,
    /// Grad und Dezimalminuten (DDD MM.MMM)
    DegreesMinutes,
    /// Grad, Minuten und Dezimalsekunden (DDD MM SS.S)
    DegreesMinutesSeconds,
    /// Gon (400 pro Umdrehung)
    Gradians,
    /// Bogenmaß (2π pro Umdrehung)
    Radians,
    /// Umdrehungen
    Turns,
}

impl PolarThetaUnits {
    /// Alle Einheiten in Anzeige-Reihenfolge.
    pub const ALL: [PolarThetaUnits; 6] = [
        Self::Degrees,
        Self::DegreesMinutes,
        Self::DegreesMinutesSeconds,
        Self::Gradians,
        Self::Radians,
        Self::Turns,
    ];

    /// Wert einer vollen Umdrehung in dieser Einheit.
    pub fn period(self) -> f64 {
        match self {
            Self::Degrees | Self::DegreesMinutes | Self::DegreesMinutesSeconds => {
                DEGREES_PER_REVOLUTION
            }
            Self::Gradians => GRADIANS_PER_REVOLUTION,
            Self::Radians => std::f64::consts::TAU,
            Self::Turns => 1.0,
        }
    }

    /// Rechnet einen Wert dieser Einheit in Grad um.
    pub fn to_degrees(self, value: f64) -> f64 {
        value * DEGREES_PER_REVOLUTION / self.period()
    }

    /// Rechnet Grad in diese Einheit um.
    pub fn from_degrees(self, degrees: f64) -> f64 {
        degrees * self.period() / DEGREES_PER_REVOLUTION
    }

    /// Anzeigetext für Auswahllisten.
    pub fn label(self) -> &'static str {
        match self {
            Self::Degrees => "Degrees (DDD.DDDDD\u{b0})",
            Self::DegreesMinutes => "Degrees Minutes (DDD\u{b0} MM.MMM\u{2032})",
            Self::DegreesMinutesSeconds => {
                "Degrees Minutes Seconds (DDD\u{b0} MM\u{2032} SS.S\u{2033})"
            }
            Self::Gradians => "Gradians",
            Self::Radians => "Radians",
            Self::Turns => "Turns",
        }
    }

    /// Stabiler Token für das Session-XML.
    pub fn as_token(self) -> &'static str {
        match self {
            Self::Degrees => "Degrees",
            Self::DegreesMinutes => "DegreesMinutes",
            Self::DegreesMinutesSeconds => "DegreesMinutesSeconds",
            Self::Gradians => "Gradians",
            Self::Radians => "Radians",
            Self::Turns => "Turns",
        }
    }

    /// Parsed einen Token aus dem Session-XML.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|units| units.as_token() == token)
    }

    /// Formatiert einen Winkel (in Grad) im Text-Format dieser Einheit.
    pub fn format_angle(self, degrees: f64) -> String {
        match self {
            Self::Degrees => format!("{:.5}", degrees),
            Self::DegreesMinutes => {
                // Rundung in Tausendstel-Minuten, damit nie "60.000" entsteht
                let sign = sign_prefix(degrees);
                let thousandths = (degrees.abs() * MINUTES_PER_DEGREE * 1000.0).round() as u64;
                let whole = thousandths / 60_000;
                let minutes = (thousandths % 60_000) as f64 / 1000.0;
                format!("{}{} {:.3}", sign, whole, minutes)
            }
            Self::DegreesMinutesSeconds => {
                let sign = sign_prefix(degrees);
                let tenths = (degrees.abs() * 36_000.0).round() as u64;
                let whole = tenths / 36_000;
                let rest = tenths % 36_000;
                let minutes = rest / 600;
                let seconds = (rest % 600) as f64 / 10.0;
                format!("{}{} {} {:.1}", sign, whole, minutes, seconds)
            }
            Self::Gradians | Self::Radians | Self::Turns => {
                format!("{}", self.from_degrees(degrees))
            }
        }
    }

    /// Parsed eine Winkel-Eingabe in dieser Einheit und liefert Grad.
    ///
    /// Mehrteilige Formate erwarten Leerzeichen zwischen den Zahlen; Grad und
    /// (bei DMS) Minuten müssen ganzzahlig sein.
    pub fn parse_angle(self, text: &str) -> Result<f64> {
        let fields: Vec<&str> = text.split_whitespace().collect();
        match self {
            Self::DegreesMinutes => {
                let [deg, min] = fields[..] else {
                    bail!("Erwartet 'DDD MM.MMM', erhalten: '{}'", text);
                };
                let (negative, whole) = parse_whole_degrees(deg)?;
                let minutes = parse_sub_unit(min, "Minuten")?;
                Ok(apply_sign(negative, whole + minutes / MINUTES_PER_DEGREE))
            }
            Self::DegreesMinutesSeconds => {
                let [deg, min, sec] = fields[..] else {
                    bail!("Erwartet 'DDD MM SS.S', erhalten: '{}'", text);
                };
                let (negative, whole) = parse_whole_degrees(deg)?;
                let minutes = parse_digits(min)
                    .ok_or_else(|| anyhow!("Ungültige Minuten: '{}'", min))?;
                if f64::from(minutes) >= MINUTES_PER_DEGREE {
                    bail!("Minuten müssen kleiner als 60 sein: {}", minutes);
                }
                let seconds = parse_sub_unit(sec, "Sekunden")?;
                let fraction =
                    (f64::from(minutes) + seconds / SECONDS_PER_MINUTE) / MINUTES_PER_DEGREE;
                Ok(apply_sign(negative, whole + fraction))
            }
            Self::Degrees | Self::Gradians | Self::Radians | Self::Turns => {
                let [value] = fields[..] else {
                    bail!("Erwartet genau eine Zahl, erhalten: '{}'", text);
                };
                let value: f64 = value
                    .parse()
                    .with_context(|| format!("Ungültiger Winkel: '{}'", value))?;
                Ok(self.to_degrees(value))
            }
        }
    }
}

fn sign_prefix(degrees: f64) -> &'static str {
    if degrees < 0.0 {
        "-"
    } else {
        ""
    }
}

fn apply_sign(negative: bool, value: f64) -> f64 {
    if negative {
        -value
    } else {
        value
    }
}

/// Ganzzahlige Grad inkl. Vorzeichen; "-0" zählt als negativ.
fn parse_whole_degrees(text: &str) -> Result<(bool, f64)> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let whole =
        parse_digits(digits).ok_or_else(|| anyhow!("Ungültige ganzzahlige Grad: '{}'", text))?;
    Ok((negative, f64::from(whole)))
}

/// Nur Ziffern, ohne Vorzeichen.
fn parse_digits(text: &str) -> Option<u32> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn parse_sub_unit(text: &str, what: &str) -> Result<f64> {
    if text.starts_with(['-', '+']) {
        bail!("{} dürfen kein Vorzeichen haben: '{}'", what, text);
    }
    let value: f64 = text
        .parse()
        .with_context(|| format!("Ungültige {}: '{}'", what, text))?;
    if !(0.0..60.0).contains(&value) {
        bail!("{} müssen im Bereich [0, 60) liegen: {}", what, value);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn periods_match_one_revolution() {
        assert_relative_eq!(PolarThetaUnits::Degrees.period(), 360.0);
        assert_relative_eq!(PolarThetaUnits::Gradians.period(), 400.0);
        assert_relative_eq!(PolarThetaUnits::Radians.period(), std::f64::consts::TAU);
        assert_relative_eq!(PolarThetaUnits::Turns.period(), 1.0);
    }

    #[test]
    fn conversions_to_and_from_degrees() {
        assert_relative_eq!(PolarThetaUnits::Gradians.to_degrees(100.0), 90.0);
        assert_relative_eq!(PolarThetaUnits::Turns.to_degrees(0.5), 180.0);
        assert_relative_eq!(
            PolarThetaUnits::Radians.from_degrees(180.0),
            std::f64::consts::PI
        );
    }

    #[test]
    fn parse_degrees_minutes() {
        let deg = PolarThetaUnits::DegreesMinutes
            .parse_angle("12 30.000")
            .unwrap();
        assert_relative_eq!(deg, 12.5);

        let neg = PolarThetaUnits::DegreesMinutes.parse_angle("-0 30").unwrap();
        assert_relative_eq!(neg, -0.5);
    }

    #[test]
    fn parse_degrees_minutes_seconds() {
        let deg = PolarThetaUnits::DegreesMinutesSeconds
            .parse_angle("10 15 36.0")
            .unwrap();
        assert_relative_eq!(deg, 10.26, epsilon = 1e-12);
    }

    #[test]
    fn parse_rejects_wrong_field_count_and_ranges() {
        assert!(PolarThetaUnits::DegreesMinutes.parse_angle("12").is_err());
        assert!(PolarThetaUnits::DegreesMinutes.parse_angle("12.5 3").is_err());
        assert!(PolarThetaUnits::DegreesMinutes.parse_angle("12 60").is_err());
        assert!(PolarThetaUnits::DegreesMinutesSeconds
            .parse_angle("1 60 0")
            .is_err());
        assert!(PolarThetaUnits::Radians.parse_angle("1 2").is_err());
        assert!(PolarThetaUnits::Degrees.parse_angle("abc").is_err());
    }

    #[test]
    fn parse_rejects_signs_inside_fields() {
        let dm = PolarThetaUnits::DegreesMinutes;
        assert!(dm.parse_angle("+5 30").is_err());
        assert!(dm.parse_angle("-+5 30").is_err());
        assert!(dm.parse_angle("--5 30").is_err());
        assert!(dm.parse_angle("5 -0").is_err());
        assert!(dm.parse_angle("5 +1.5").is_err());

        let dms = PolarThetaUnits::DegreesMinutesSeconds;
        assert!(dms.parse_angle("5 +1 0").is_err());
        assert!(dms.parse_angle("5 1 -0").is_err());
        assert_relative_eq!(dms.parse_angle("-5 0 0").unwrap(), -5.0);
    }

    #[test]
    fn format_multi_field_units() {
        assert_eq!(PolarThetaUnits::Degrees.format_angle(12.5), "12.50000");
        assert_eq!(PolarThetaUnits::DegreesMinutes.format_angle(12.5), "12 30.000");
        assert_eq!(
            PolarThetaUnits::DegreesMinutesSeconds.format_angle(-10.26),
            "-10 15 36.0"
        );
        // 59.9999 Minuten werden auf die nächste volle Grad-Zahl übertragen
        assert_eq!(
            PolarThetaUnits::DegreesMinutes.format_angle(1.0 + 59.999_99 / 60.0),
            "2 0.000"
        );
        assert_eq!(PolarThetaUnits::Turns.format_angle(90.0), "0.25");
    }

    #[test]
    fn tokens_roundtrip() {
        for units in PolarThetaUnits::ALL {
            assert_eq!(PolarThetaUnits::from_token(units.as_token()), Some(units));
        }
        assert_eq!(PolarThetaUnits::from_token("Degree"), None);
    }
}
