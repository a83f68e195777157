#[cfg(test)]
mod health_tests {
    use std::collections::HashMap;
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::Extension;

    use bmi_guide_domain::health::{
        ComponentStatus, HealthComponent, HealthServiceTrait, SystemHealth, SystemStatus,
    };

    use crate::api::handlers::health::{
        create_health_service, health_check, initialize_server_start_time, HealthResponse,
    };

    // Direct implementation of a mock health service for testing
    #[derive(Debug)]
    struct TestMockHealthService {
        system_status: SystemStatus,
        engine_status: ComponentStatus,
    }

    impl TestMockHealthService {
        fn new() -> Self {
            Self {
                system_status: SystemStatus::Healthy,
                engine_status: ComponentStatus::Healthy,
            }
        }

        fn with_unhealthy_engine(mut self) -> Self {
            self.system_status = SystemStatus::Unhealthy;
            self.engine_status = ComponentStatus::Unhealthy;
            self
        }
    }

    #[async_trait]
    impl HealthServiceTrait for TestMockHealthService {
        async fn get_system_health(&self) -> SystemHealth {
            let mut components = HashMap::new();
            components.insert(
                "engine".to_string(),
                HealthComponent {
                    status: self.engine_status.clone(),
                    details: match self.engine_status {
                        ComponentStatus::Healthy => None,
                        _ => Some("BMI engine returned an unexpected reference result".to_string()),
                    },
                },
            );

            SystemHealth {
                status: self.system_status.clone(),
                components,
            }
        }

        async fn check_engine_status(&self) -> Result<bool, String> {
            match self.engine_status {
                ComponentStatus::Healthy => Ok(true),
                _ => Ok(false),
            }
        }
    }

    #[tokio::test]
    async fn test_health_check_response() {
        // Initialize start time
        initialize_server_start_time();

        // Use the real health service; the engine self-check always runs
        let health_service = create_health_service();

        let response = health_check(Extension(health_service)).await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: HealthResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.status, "ok");
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(body.components.engine.status, "ok");
        assert_eq!(body.components.api.status, "ok");
        assert!(body.uptime.is_some());
    }

    #[tokio::test]
    async fn test_health_check_reports_unhealthy_engine() {
        initialize_server_start_time();

        let health_service = Arc::new(TestMockHealthService::new().with_unhealthy_engine())
            as Arc<dyn HealthServiceTrait + Send + Sync>;

        let response = health_check(Extension(health_service)).await.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: HealthResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.status, "error");
        assert_eq!(body.components.engine.status, "error");
        assert!(body.components.engine.message.is_some());
    }

    #[tokio::test]
    async fn test_real_health_service_engine_check() {
        let service = create_health_service();

        let health = service.get_system_health().await;
        assert_eq!(health.status, SystemStatus::Healthy);
        assert!(health.components.contains_key("engine"));

        let engine_status = service.check_engine_status().await;
        assert_eq!(engine_status, Ok(true));
    }
}
