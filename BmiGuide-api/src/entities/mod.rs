// Public entities for the BmiGuide API
// This module contains data structures that are shared across the application boundary

// Request and response types for BMI calculation
pub mod bmi;
