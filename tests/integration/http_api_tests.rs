//! HTTP routes end to end, over a mocked GitHub API

#[cfg(test)]
mod tests {
    use crate::common::{GithubMock, TEST_OWNER};
    use actix_web::{test, web};
    use repo_gateway::config::BatchConfig;
    use repo_gateway::server::{AppState, HttpServer};
    use serde_json::{Value, json};
    use std::sync::Arc;

    fn state_for(github: &GithubMock) -> web::Data<AppState> {
        let config = github.config(BatchConfig::default());
        let service = github.service(BatchConfig::default());
        web::Data::new(AppState::new(config, Arc::new(service)))
    }

    #[actix_web::test]
    async fn test_post_repository() {
        let github = GithubMock::start().await;
        github.accept_all(0).await;
        let app = test::init_service(HttpServer::create_app(state_for(&github))).await;

        let req = test::TestRequest::post()
            .uri("/repository")
            .set_json(json!({"name": " spaced ", "description": "trimmed on the way in"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 201);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["name"], "spaced");
        assert_eq!(body["owner"], TEST_OWNER);
        assert!(body["id"].as_i64().unwrap() > 0);
    }

    #[actix_web::test]
    async fn test_post_repository_unauthorized_passthrough() {
        let github = GithubMock::start().await;
        github
            .reject(
                "secret",
                401,
                json!({
                    "message": "Bad credentials",
                    "documentation_url": "https://docs.github.com/rest"
                }),
            )
            .await;
        let app = test::init_service(HttpServer::create_app(state_for(&github))).await;

        let req = test::TestRequest::post()
            .uri("/repository")
            .set_json(json!({"name": "secret"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 401);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body, json!({"status": 401, "message": "Bad credentials"}));
    }

    #[actix_web::test]
    async fn test_post_repositories_partial_content() {
        let github = GithubMock::start().await;
        github.accept_all(0).await;
        let app = test::init_service(HttpServer::create_app(state_for(&github))).await;

        let req = test::TestRequest::post()
            .uri("/repositories")
            .set_json(json!([
                {"name": "first"},
                {"name": ""},
                {"name": "third", "description": "with description"}
            ]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 206);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status_code"], 206);
        let results = body["results"].as_array().unwrap();
        assert_eq!(results.len(), 3);
        assert_eq!(
            results.iter().filter(|r| r["repository"].is_object()).count(),
            2
        );
        assert_eq!(results.iter().filter(|r| r["error"].is_object()).count(), 1);
        assert_eq!(github.request_count().await, 2);
    }

    #[actix_web::test]
    async fn test_post_repositories_all_failed() {
        let github = GithubMock::start().await;
        github.accept_all(0).await;
        let app = test::init_service(HttpServer::create_app(state_for(&github))).await;

        let req = test::TestRequest::post()
            .uri("/repositories")
            .set_json(json!([{"name": ""}, {"name": " "}]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 400);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status_code"], 400);
        assert_eq!(github.request_count().await, 0);
    }

    #[actix_web::test]
    async fn test_health() {
        let github = GithubMock::start().await;
        let app = test::init_service(HttpServer::create_app(state_for(&github))).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 200);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["version"], repo_gateway::VERSION);
    }
}
