// Domain entities and value objects
pub mod bmi;

// Re-export common types for easier imports
pub use bmi::{BmiCategory, BmiResult, HeightUnit, Measurement};
