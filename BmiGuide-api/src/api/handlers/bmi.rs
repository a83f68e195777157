use std::sync::Arc;

use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use utoipa::ToSchema;

// Import domain entities and services
use bmi_guide_domain::entities::bmi::{BmiCategory, BmiResult, HeightUnit};
use bmi_guide_domain::services::bmi::BmiInputError;
use bmi_guide_domain::services::{create_default_bmi_service, BmiServiceTrait};

// Import our entities
use crate::entities::bmi::{
    PublicBmiCategoryInfo, PublicBmiRequest, PublicBmiResponse, PublicHeightUnit,
};

/// Error response format for API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code - machine-readable identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create an error response from a rejected BMI input
    pub fn validation_error(err: &BmiInputError) -> Self {
        Self {
            error: err.kind().to_string(),
            message: err.to_string(),
            details: None,
        }
    }

    /// Create an internal error response
    pub fn internal_error() -> Self {
        Self {
            error: "internal_error".to_string(),
            message: "An unexpected error occurred".to_string(),
            details: None,
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = match self.error.as_str() {
            "missing_input" | "not_numeric" | "non_positive" | "weight_out_of_range"
            | "height_out_of_range" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(self)).into_response()
    }
}

/// Service type for dependency injection
pub type BmiService = Arc<dyn BmiServiceTrait + Send + Sync>;

/// Create a default service for the handlers to use
pub fn create_service() -> BmiService {
    Arc::new(create_default_bmi_service())
}

/// Calculate the BMI for raw weight and height input
#[utoipa::path(
    post,
    path = "/api/v1/bmi",
    request_body = PublicBmiRequest,
    responses(
        (status = 200, description = "BMI calculated", body = PublicBmiResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
    ),
    tag = "bmi"
)]
#[instrument(skip(service, request))]
pub async fn calculate_bmi(
    State(service): State<BmiService>,
    Json(request): Json<PublicBmiRequest>,
) -> Result<impl IntoResponse, Response> {
    info!("Calculating BMI");

    let unit = convert_to_domain_unit(request.unit);

    // Call domain service
    match service.assess(&request.weight, &request.height, unit) {
        Ok(result) => {
            info!("BMI calculated: {} ({})", result.value, result.category.to_string());
            Ok((StatusCode::OK, Json(convert_to_public_response(result))))
        }
        Err(e) => {
            warn!("Invalid BMI input: {}", e);
            Err(ErrorResponse::validation_error(&e).into_response())
        }
    }
}

/// List the weight-status categories with their BMI bounds
#[utoipa::path(
    get,
    path = "/api/v1/bmi/categories",
    responses(
        (status = 200, description = "Category table", body = [PublicBmiCategoryInfo]),
    ),
    tag = "bmi"
)]
#[instrument]
pub async fn list_bmi_categories() -> impl IntoResponse {
    let categories: Vec<PublicBmiCategoryInfo> = BmiCategory::ALL
        .iter()
        .map(convert_to_public_category)
        .collect();

    (StatusCode::OK, Json(categories))
}

/// Convert a public height unit to the domain entity
fn convert_to_domain_unit(unit: PublicHeightUnit) -> HeightUnit {
    match unit {
        PublicHeightUnit::Centimeter => HeightUnit::Centimeter,
        PublicHeightUnit::Meter => HeightUnit::Meter,
    }
}

/// Convert a domain BMI result to the public response entity
fn convert_to_public_response(result: BmiResult) -> PublicBmiResponse {
    PublicBmiResponse {
        bmi: result.value,
        category: result.category.to_string(),
        description: result.description,
    }
}

/// Convert a domain category to the public category entity
fn convert_to_public_category(category: &BmiCategory) -> PublicBmiCategoryInfo {
    PublicBmiCategoryInfo {
        category: category.to_string(),
        description: category.description().to_string(),
        min_bmi: category.lower_bound(),
        max_bmi: category.upper_bound(),
    }
}
