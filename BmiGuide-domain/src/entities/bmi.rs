use serde::{Deserialize, Serialize};

#[cfg(feature = "with-api")]
use utoipa::ToSchema;

/// Unit in which the height was entered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum HeightUnit {
    /// Height entered in centimeters
    #[serde(rename = "cm")]
    Centimeter,

    /// Height entered in meters
    #[serde(rename = "m")]
    Meter,
}

impl ToString for HeightUnit {
    fn to_string(&self) -> String {
        match self {
            HeightUnit::Centimeter => "cm".to_string(),
            HeightUnit::Meter => "m".to_string(),
        }
    }
}

/// A validated pair of weight and height measurements
///
/// Constructed by the input validator; both numbers are finite and
/// strictly positive. The height is kept in the unit the user entered,
/// conversion to meters happens at computation time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct Measurement {
    /// Body weight in kilograms
    pub weight_kg: f64,

    /// Height in the unit given by `height_unit`
    pub height_value: f64,

    /// Unit of `height_value`
    pub height_unit: HeightUnit,
}

impl Measurement {
    /// Height in meters, regardless of the unit it was entered in
    pub fn height_meters(&self) -> f64 {
        match self.height_unit {
            HeightUnit::Centimeter => self.height_value / 100.0,
            HeightUnit::Meter => self.height_value,
        }
    }
}

/// Weight-status category derived from a BMI value
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,

    /// BMI from 18.5 up to (but not including) 25.0
    Normal,

    /// BMI from 25.0 up to (but not including) 30.0
    Overweight,

    /// BMI from 30.0 up to (but not including) 35.0
    ObesityI,

    /// BMI from 35.0 up to (but not including) 40.0
    ObesityII,

    /// BMI of 40.0 or above
    ObesityIII,
}

impl BmiCategory {
    /// All categories in ascending BMI order
    pub const ALL: [BmiCategory; 6] = [
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::ObesityI,
        BmiCategory::ObesityII,
        BmiCategory::ObesityIII,
    ];

    /// Human-readable description of the category
    pub fn description(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::ObesityI => "Obesity grade I",
            BmiCategory::ObesityII => "Obesity grade II",
            BmiCategory::ObesityIII => "Obesity grade III",
        }
    }

    /// Inclusive lower BMI bound, `None` for the open lower end
    pub fn lower_bound(&self) -> Option<f64> {
        match self {
            BmiCategory::Underweight => None,
            BmiCategory::Normal => Some(18.5),
            BmiCategory::Overweight => Some(25.0),
            BmiCategory::ObesityI => Some(30.0),
            BmiCategory::ObesityII => Some(35.0),
            BmiCategory::ObesityIII => Some(40.0),
        }
    }

    /// Exclusive upper BMI bound, `None` for the open upper end
    pub fn upper_bound(&self) -> Option<f64> {
        match self {
            BmiCategory::Underweight => Some(18.5),
            BmiCategory::Normal => Some(25.0),
            BmiCategory::Overweight => Some(30.0),
            BmiCategory::ObesityI => Some(35.0),
            BmiCategory::ObesityII => Some(40.0),
            BmiCategory::ObesityIII => None,
        }
    }
}

impl ToString for BmiCategory {
    fn to_string(&self) -> String {
        match self {
            BmiCategory::Underweight => "Underweight".to_string(),
            BmiCategory::Normal => "Normal".to_string(),
            BmiCategory::Overweight => "Overweight".to_string(),
            BmiCategory::ObesityI => "Obesity I".to_string(),
            BmiCategory::ObesityII => "Obesity II".to_string(),
            BmiCategory::ObesityIII => "Obesity III".to_string(),
        }
    }
}

/// Result of a BMI computation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "with-api", derive(ToSchema))]
pub struct BmiResult {
    /// BMI rounded to one decimal place
    pub value: f64,

    /// Category the rounded value falls into
    pub category: BmiCategory,

    /// Human-readable description of the category
    pub description: String,
}
