//! Inch measurements and the rounding rules applied to cut lengths

use serde::{Deserialize, Serialize};

/// Rod lengths are rounded up to this increment
pub const QUARTER_INCH: f64 = 0.25;

/// Absorbs float noise from decimal inputs such as `84.1` so an exact
/// quarter does not ceil to the next one.
const ROUNDING_TOLERANCE: f64 = 1e-9;

/// A length in inches, displayed to three decimal places
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Inches(pub f64);

impl Inches {
    pub const ZERO: Inches = Inches(0.0);

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }
}

impl std::fmt::Display for Inches {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

/// Round a raw rod length up to the next quarter inch.
///
/// Anything at or below zero becomes exactly zero; anything in `(0, 0.25]`
/// becomes `0.25`.
pub fn round_up_quarter(raw: f64) -> Inches {
    if raw.is_nan() || raw <= 0.0 {
        return Inches::ZERO;
    }
    let quarters = (raw / QUARTER_INCH - ROUNDING_TOLERANCE).ceil().max(1.0);
    Inches(quarters * QUARTER_INCH)
}

/// Round to three decimal places (rail cut lengths)
pub fn round_thousandths(raw: f64) -> Inches {
    Inches((raw * 1000.0).round() / 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_up_quarter_exact_values() {
        assert_eq!(round_up_quarter(30.0), Inches(30.0));
        assert_eq!(round_up_quarter(28.875), Inches(29.0));
        assert_eq!(round_up_quarter(28.75), Inches(28.75));
        assert_eq!(round_up_quarter(28.76), Inches(29.0));
    }

    #[test]
    fn test_round_up_quarter_small_and_non_positive() {
        assert_eq!(round_up_quarter(0.0001), Inches(0.25));
        assert_eq!(round_up_quarter(0.25), Inches(0.25));
        assert_eq!(round_up_quarter(0.0), Inches::ZERO);
        assert_eq!(round_up_quarter(-3.5), Inches::ZERO);
        assert_eq!(round_up_quarter(f64::NEG_INFINITY), Inches::ZERO);
        assert_eq!(round_up_quarter(-3.5).to_string(), "0.000");
    }

    #[test]
    fn test_round_up_quarter_ignores_float_noise() {
        // 84.1 - 41.1 - 13 is a hair off 30.0 in binary
        assert_eq!(round_up_quarter(84.1 - 41.1 - 13.0), Inches(30.0));
    }

    #[test]
    fn test_display_three_places() {
        assert_eq!(Inches(35.0).to_string(), "35.000");
        assert_eq!(round_thousandths(36.0 - 3.395).to_string(), "32.605");
    }
}
