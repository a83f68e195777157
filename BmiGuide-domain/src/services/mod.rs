pub mod bmi;
pub mod categorize;

// Domain services
// This module contains business logic implementations.

// Re-export service traits and factory functions
pub use bmi::{create_default_bmi_service, BmiInputError, BmiService, BmiServiceTrait};
pub use categorize::categorize_bmi;
