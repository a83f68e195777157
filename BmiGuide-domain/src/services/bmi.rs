use std::fmt;

use thiserror::Error;
use tracing::{debug, warn};

use crate::entities::bmi::{BmiResult, HeightUnit, Measurement};
use crate::services::categorize::categorize_bmi;

/// Maximum accepted body weight in kilograms
pub const MAX_WEIGHT_KG: f64 = 1000.0;

/// Accepted height range when entered in centimeters
pub const MIN_HEIGHT_CM: f64 = 50.0;
pub const MAX_HEIGHT_CM: f64 = 300.0;

/// Accepted height range when entered in meters
pub const MIN_HEIGHT_M: f64 = 0.5;
pub const MAX_HEIGHT_M: f64 = 3.0;

/// Input field an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputField {
    Weight,
    Height,
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputField::Weight => write!(f, "weight"),
            InputField::Height => write!(f, "height"),
        }
    }
}

/// BMI input validation errors
///
/// Every variant is a user-correctable input problem; the display string
/// is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BmiInputError {
    /// A required field was empty
    #[error("{0} is required")]
    MissingInput(InputField),

    /// A field did not parse as a finite number
    #[error("{0} must be a valid number")]
    NotNumeric(InputField),

    /// A field was zero or negative
    #[error("{0} must be greater than zero")]
    NonPositive(InputField),

    /// Weight exceeded the accepted maximum
    #[error("weight must not exceed {} kg", MAX_WEIGHT_KG)]
    WeightOutOfRange,

    /// Height was outside the accepted range for its unit
    #[error("height must be between {min} and {max} {}", .unit.to_string())]
    HeightOutOfRange {
        unit: HeightUnit,
        min: f64,
        max: f64,
    },
}

impl BmiInputError {
    /// Machine-readable error kind for client-side handling
    pub fn kind(&self) -> &'static str {
        match self {
            BmiInputError::MissingInput(_) => "missing_input",
            BmiInputError::NotNumeric(_) => "not_numeric",
            BmiInputError::NonPositive(_) => "non_positive",
            BmiInputError::WeightOutOfRange => "weight_out_of_range",
            BmiInputError::HeightOutOfRange { .. } => "height_out_of_range",
        }
    }
}

/// Validate raw weight and height input
///
/// Rules are applied in order and the first failing rule wins: presence,
/// numeric parse, positivity, weight range, height range. The weight field
/// is checked before the height field within each rule. On success the
/// height is kept in the unit it was entered in.
pub fn validate_input(
    weight_raw: &str,
    height_raw: &str,
    unit: HeightUnit,
) -> Result<Measurement, BmiInputError> {
    let weight_raw = weight_raw.trim();
    let height_raw = height_raw.trim();

    if weight_raw.is_empty() {
        return Err(BmiInputError::MissingInput(InputField::Weight));
    }
    if height_raw.is_empty() {
        return Err(BmiInputError::MissingInput(InputField::Height));
    }

    let weight_kg =
        parse_finite(weight_raw).ok_or(BmiInputError::NotNumeric(InputField::Weight))?;
    let height_value =
        parse_finite(height_raw).ok_or(BmiInputError::NotNumeric(InputField::Height))?;

    if weight_kg <= 0.0 {
        return Err(BmiInputError::NonPositive(InputField::Weight));
    }
    if height_value <= 0.0 {
        return Err(BmiInputError::NonPositive(InputField::Height));
    }

    if weight_kg > MAX_WEIGHT_KG {
        return Err(BmiInputError::WeightOutOfRange);
    }

    let (min, max) = match unit {
        HeightUnit::Centimeter => (MIN_HEIGHT_CM, MAX_HEIGHT_CM),
        HeightUnit::Meter => (MIN_HEIGHT_M, MAX_HEIGHT_M),
    };
    if !(min..=max).contains(&height_value) {
        return Err(BmiInputError::HeightOutOfRange { unit, min, max });
    }

    Ok(Measurement {
        weight_kg,
        height_value,
        height_unit: unit,
    })
}

fn parse_finite(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Compute the BMI for a validated measurement
///
/// The category is derived from the rounded value so that the displayed
/// number and the displayed category can never disagree.
pub fn compute_bmi(measurement: &Measurement) -> BmiResult {
    let height_m = measurement.height_meters();
    let raw = measurement.weight_kg / (height_m * height_m);
    let value = round_to_tenth(raw);
    let category = categorize_bmi(value);

    BmiResult {
        value,
        category,
        description: category.description().to_string(),
    }
}

// f64::round rounds half away from zero, which matches rounding to the
// nearest tenth
fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Validate raw input and compute the BMI in one step
pub fn assess(
    weight_raw: &str,
    height_raw: &str,
    unit: HeightUnit,
) -> Result<BmiResult, BmiInputError> {
    let measurement = validate_input(weight_raw, height_raw, unit)?;
    Ok(compute_bmi(&measurement))
}

/// Trait for BMI service operations
pub trait BmiServiceTrait: Send + Sync {
    /// Validate raw weight and height input
    fn validate_input(
        &self,
        weight_raw: &str,
        height_raw: &str,
        unit: HeightUnit,
    ) -> Result<Measurement, BmiInputError>;

    /// Compute the BMI for a validated measurement
    fn compute(&self, measurement: &Measurement) -> BmiResult;

    /// Validate raw input and compute the BMI in one step
    fn assess(
        &self,
        weight_raw: &str,
        height_raw: &str,
        unit: HeightUnit,
    ) -> Result<BmiResult, BmiInputError>;
}

/// BMI service for domain logic
///
/// The service is stateless; every call is independent and the same input
/// always produces the same output.
#[derive(Debug, Default)]
pub struct BmiService;

impl BmiService {
    /// Create a new BMI service
    pub fn new() -> Self {
        BmiService
    }
}

impl BmiServiceTrait for BmiService {
    fn validate_input(
        &self,
        weight_raw: &str,
        height_raw: &str,
        unit: HeightUnit,
    ) -> Result<Measurement, BmiInputError> {
        validate_input(weight_raw, height_raw, unit)
    }

    fn compute(&self, measurement: &Measurement) -> BmiResult {
        compute_bmi(measurement)
    }

    fn assess(
        &self,
        weight_raw: &str,
        height_raw: &str,
        unit: HeightUnit,
    ) -> Result<BmiResult, BmiInputError> {
        match assess(weight_raw, height_raw, unit) {
            Ok(result) => {
                debug!(
                    "BMI assessed: value={}, category={}",
                    result.value,
                    result.category.to_string()
                );
                Ok(result)
            }
            Err(err) => {
                warn!("BMI input rejected ({}): {}", err.kind(), err);
                Err(err)
            }
        }
    }
}

/// Create a default BMI service
pub fn create_default_bmi_service() -> impl BmiServiceTrait + Send + Sync {
    BmiService::new()
}
