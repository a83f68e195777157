use crate::entities::bmi::BmiCategory;

/// Categorize a BMI value into a weight-status category
///
/// Boundary values belong to the higher category: a BMI of exactly 25.0
/// is Overweight, not Normal.
pub fn categorize_bmi(bmi: f64) -> BmiCategory {
    if bmi >= 40.0 {
        BmiCategory::ObesityIII
    } else if bmi >= 35.0 {
        BmiCategory::ObesityII
    } else if bmi >= 30.0 {
        BmiCategory::ObesityI
    } else if bmi >= 25.0 {
        BmiCategory::Overweight
    } else if bmi >= 18.5 {
        BmiCategory::Normal
    } else {
        BmiCategory::Underweight
    }
}
