//! Domain layer health check functionality
//! This module provides health check services for the application

use std::collections::HashMap;

use async_trait::async_trait;

use crate::entities::bmi::{BmiCategory, HeightUnit};
use crate::services::bmi::assess;

/// System health status
#[derive(Debug, Clone, PartialEq)]
pub enum SystemStatus {
    /// All components are healthy
    Healthy,
    /// Some components are degraded but the system is functional
    Degraded,
    /// System is not functioning properly
    Unhealthy,
}

/// Component health status
#[derive(Debug, Clone, PartialEq)]
pub enum ComponentStatus {
    /// Component is functioning normally
    Healthy,
    /// Component is functioning but with reduced performance
    Degraded,
    /// Component is not functioning
    Unhealthy,
}

/// Represents a health component with status and optional details
#[derive(Debug, Clone)]
pub struct HealthComponent {
    /// Status of the component
    pub status: ComponentStatus,
    /// Optional details about the component status
    pub details: Option<String>,
}

/// Represents the overall health of the system
#[derive(Debug, Clone)]
pub struct SystemHealth {
    /// Overall system status
    pub status: SystemStatus,
    /// Map of component names to their health status
    pub components: HashMap<String, HealthComponent>,
}

/// Trait for health services
#[async_trait]
pub trait HealthServiceTrait: Send + Sync + std::fmt::Debug {
    /// Get the overall system health
    async fn get_system_health(&self) -> SystemHealth;

    /// Check the status of the BMI engine
    /// Returns true if the engine produces the expected reference result
    /// Returns an error if the check could not be performed
    async fn check_engine_status(&self) -> Result<bool, String>;
}

/// Check that the BMI engine produces a known reference result
///
/// Runs the engine against a fixed input (70 kg, 175 cm) and verifies the
/// documented output (22.9, Normal).
pub fn check_engine_status() -> Result<bool, String> {
    match assess("70", "175", HeightUnit::Centimeter) {
        Ok(result) => {
            Ok(result.value == 22.9 && result.category == BmiCategory::Normal)
        }
        Err(e) => Err(format!("BMI engine self-check failed: {}", e)),
    }
}

/// Get overall system health
pub fn get_system_health() -> SystemHealth {
    let engine_status = check_engine_status();

    let engine_component = match engine_status {
        Ok(true) => HealthComponent {
            status: ComponentStatus::Healthy,
            details: None,
        },
        Ok(false) => HealthComponent {
            status: ComponentStatus::Unhealthy,
            details: Some("BMI engine returned an unexpected reference result".to_string()),
        },
        Err(e) => HealthComponent {
            status: ComponentStatus::Unhealthy,
            details: Some(e),
        },
    };

    let overall_status = if engine_component.status == ComponentStatus::Unhealthy {
        SystemStatus::Unhealthy
    } else {
        SystemStatus::Healthy
    };

    SystemHealth {
        status: overall_status,
        components: vec![("engine".to_string(), engine_component)]
            .into_iter()
            .collect(),
    }
}
