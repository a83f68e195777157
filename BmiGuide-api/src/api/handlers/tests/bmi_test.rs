#[cfg(test)]
mod bmi_handler_tests {
    use axum::body::to_bytes;
    use axum::extract::{Json, State};
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use crate::api::handlers::bmi::{calculate_bmi, create_service, list_bmi_categories, ErrorResponse};
    use crate::entities::bmi::{
        PublicBmiCategoryInfo, PublicBmiRequest, PublicBmiResponse, PublicHeightUnit,
    };

    fn request(weight: &str, height: &str, unit: PublicHeightUnit) -> PublicBmiRequest {
        PublicBmiRequest {
            weight: weight.to_string(),
            height: height.to_string(),
            unit,
        }
    }

    #[tokio::test]
    async fn test_calculate_bmi_valid_request() {
        let service = create_service();

        let response = calculate_bmi(
            State(service),
            Json(request("70", "175", PublicHeightUnit::Centimeter)),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: PublicBmiResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.bmi, 22.9);
        assert_eq!(body.category, "Normal");
        assert_eq!(body.description, "Normal weight");
    }

    #[tokio::test]
    async fn test_calculate_bmi_underweight() {
        let service = create_service();

        let response = calculate_bmi(
            State(service),
            Json(request("45", "160", PublicHeightUnit::Centimeter)),
        )
        .await
        .unwrap()
        .into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: PublicBmiResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.bmi, 17.6);
        assert_eq!(body.category, "Underweight");
    }

    #[tokio::test]
    async fn test_calculate_bmi_missing_weight() {
        let service = create_service();

        let response = calculate_bmi(
            State(service),
            Json(request("", "175", PublicHeightUnit::Centimeter)),
        )
        .await
        .err()
        .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "missing_input");
        assert_eq!(body.message, "weight is required");
    }

    #[tokio::test]
    async fn test_calculate_bmi_height_out_of_range() {
        let service = create_service();

        let response = calculate_bmi(
            State(service),
            Json(request("70", "400", PublicHeightUnit::Centimeter)),
        )
        .await
        .err()
        .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "height_out_of_range");
        assert_eq!(body.message, "height must be between 50 and 300 cm");
    }

    #[tokio::test]
    async fn test_list_bmi_categories() {
        let response = list_bmi_categories().await.into_response();

        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Vec<PublicBmiCategoryInfo> = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.len(), 6);
        assert_eq!(body[0].category, "Underweight");
        assert_eq!(body[0].min_bmi, None);
        assert_eq!(body[0].max_bmi, Some(18.5));
        assert_eq!(body[5].category, "Obesity III");
        assert_eq!(body[5].min_bmi, Some(40.0));
        assert_eq!(body[5].max_bmi, None);
    }
}
