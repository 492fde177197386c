//! Error handling integration tests
//!
//! Error types as HTTP responses, and how batch results carry them.

#[cfg(test)]
mod tests {
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;
    use actix_web::http::StatusCode;
    use repo_gateway::config::GithubConfig;
    use repo_gateway::{
        ApiError, CreateRepoResponse, CreateReposResponse, CreateReposResult, GatewayError,
        GithubProvider, derive_status,
    };
    use serde_json::{Value, json};

    fn body_json<E: ResponseError>(error: &E) -> Value {
        let bytes = error.error_response().into_body().try_into_bytes().unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_api_error_response_uses_its_status() {
        let error = ApiError::new(422, "name already exists on this account");

        assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(&error),
            json!({"status": 422, "message": "name already exists on this account"})
        );
    }

    #[test]
    fn test_api_error_out_of_range_status_falls_back() {
        let error = ApiError::new(42, "odd status");
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_startup_errors_name_their_source() {
        let error = GatewayError::server("Failed to bind to 0.0.0.0:8080: address in use");
        assert_eq!(
            error.to_string(),
            "Server error: Failed to bind to 0.0.0.0:8080: address in use"
        );

        let error = GatewayError::config("Configuration is required");
        assert_eq!(error.to_string(), "Configuration error: Configuration is required");
    }

    #[test]
    fn test_provider_builds_from_default_config() {
        assert!(GithubProvider::new(&GithubConfig::default()).is_ok());
    }

    #[test]
    fn test_batch_result_wire_shape() {
        let response = CreateReposResponse {
            status_code: 206,
            results: vec![
                CreateReposResult::success(CreateRepoResponse {
                    id: 9,
                    owner: "getmiranda".to_string(),
                    name: "ok".to_string(),
                }),
                CreateReposResult::failure(ApiError::bad_request("invalid repository name")),
            ],
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["status_code"], 206);
        assert_eq!(value["results"][0]["repository"]["id"], 9);
        assert!(value["results"][0]["error"].is_null());
        assert!(value["results"][1]["repository"].is_null());
        assert_eq!(value["results"][1]["error"]["status"], 400);
    }

    #[test]
    fn test_derive_status_from_public_api() {
        let failed = CreateReposResult::from(Err(ApiError::new(503, "unavailable")));
        assert_eq!(derive_status(&[failed.clone()], 1), 503);

        let ok = CreateReposResult::from(Ok(CreateRepoResponse::default()));
        assert_eq!(derive_status(&[ok, failed], 2), 206);
    }
}
