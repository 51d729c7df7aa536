//! Errors raised by the calculators

use miette::Diagnostic;
use thiserror::Error;

/// Input problems reported by the calculators and the handing classifier.
///
/// Every variant is a validation failure; none is fatal and none is worth
/// retrying. An empty search result is not an error.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum CalcError {
    #[error("{field} is required")]
    #[diagnostic(code(doorkit::missing_input))]
    Missing { field: &'static str },

    #[error("{field} must be a positive number (got {value})")]
    #[diagnostic(code(doorkit::invalid_input))]
    NotPositive { field: &'static str, value: f64 },

    #[error("Door Height ({door_height}) must be greater than AFF ({aff})")]
    #[diagnostic(code(doorkit::invalid_input))]
    HeightNotAboveAff { door_height: f64, aff: f64 },

    #[error("Door width {width}\" is below the {minimum}\" minimum")]
    #[diagnostic(code(doorkit::invalid_input))]
    BelowMinimumWidth { width: f64, minimum: f64 },

    #[error("Unknown device series: {key}")]
    #[diagnostic(
        code(doorkit::unknown_series),
        help("Run `doorkit rod series` to list valid series keys")
    )]
    UnknownSeries { key: String },

    #[error("Series {key} is a {actual} device, not {expected}")]
    #[diagnostic(code(doorkit::invalid_input))]
    FamilyMismatch {
        key: String,
        expected: String,
        actual: String,
    },

    #[error("Rail generation {generation} is not in the catalog")]
    #[diagnostic(code(doorkit::unknown_generation))]
    UnknownGeneration { generation: String },

    #[error("Unknown exit device model: {model}")]
    #[diagnostic(
        code(doorkit::unknown_model),
        help("Run `doorkit handing models` to list exit device series")
    )]
    UnknownModel { model: String },
}

/// Require a present, finite, strictly positive measurement
pub fn require_positive(field: &'static str, value: Option<f64>) -> Result<f64, CalcError> {
    let value = value.ok_or(CalcError::Missing { field })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::NotPositive { field, value });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive() {
        assert_eq!(require_positive("Door Height", Some(84.0)), Ok(84.0));
        assert_eq!(
            require_positive("Door Height", None),
            Err(CalcError::Missing { field: "Door Height" })
        );
        assert!(require_positive("AFF", Some(0.0)).is_err());
        assert!(require_positive("AFF", Some(-1.0)).is_err());
        assert!(require_positive("AFF", Some(f64::NAN)).is_err());
        assert!(require_positive("AFF", Some(f64::INFINITY)).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = CalcError::HeightNotAboveAff {
            door_height: 40.0,
            aff: 41.0,
        };
        assert_eq!(err.to_string(), "Door Height (40) must be greater than AFF (41)");
    }
}
