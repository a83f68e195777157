use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unit the height was entered in
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ToSchema)]
pub enum PublicHeightUnit {
    /// Height entered in centimeters
    #[serde(rename = "cm")]
    Centimeter,

    /// Height entered in meters
    #[serde(rename = "m")]
    Meter,
}

/// Request payload for a BMI calculation
///
/// Weight and height are the raw strings the user typed; validation of
/// both happens in the domain layer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicBmiRequest {
    /// Body weight in kilograms, as entered
    #[schema(example = "70")]
    pub weight: String,

    /// Height in the unit given by `unit`, as entered
    #[schema(example = "175")]
    pub height: String,

    /// Unit of the height field
    pub unit: PublicHeightUnit,
}

/// Response payload for a successful BMI calculation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicBmiResponse {
    /// BMI rounded to one decimal place
    #[schema(example = 22.9)]
    pub bmi: f64,

    /// Weight-status category of the rounded BMI
    #[schema(example = "Normal")]
    pub category: String,

    /// Human-readable description of the category
    #[schema(example = "Normal weight")]
    pub description: String,
}

/// A weight-status category with its BMI bounds
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicBmiCategoryInfo {
    /// Category name
    pub category: String,

    /// Human-readable description of the category
    pub description: String,

    /// Inclusive lower BMI bound; absent for the open lower end
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bmi: Option<f64>,

    /// Exclusive upper BMI bound; absent for the open upper end
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_bmi: Option<f64>,
}
