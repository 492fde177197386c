//! Repository service against a mocked GitHub API

#[cfg(test)]
mod tests {
    use crate::common::{GithubMock, TEST_OWNER, repo_json, requests};
    use repo_gateway::config::BatchConfig;
    use repo_gateway::core::providers::github::INVALID_CREATE_REPO_RESPONSE;
    use repo_gateway::core::repositories::INVALID_REPOSITORY_NAME;
    use repo_gateway::{CreateRepoRequest, RepositoryService};
    use serde_json::json;
    use std::collections::HashSet;
    use tokio_test::{assert_err, assert_ok};
    use wiremock::ResponseTemplate;

    #[tokio::test]
    async fn test_echoing_mock_with_default_batch_config() {
        let server = GithubMock::start().await;
        server.accept_all(20).await;
        let service = server.service(BatchConfig::default());

        let response = service.create_repos(requests(&["a", "b"])).await;

        assert_eq!(response.status_code, 201);
        assert_eq!(response.results.len(), 2);
        assert_eq!(server.request_count().await, 2);
    }

    #[tokio::test]
    async fn test_single_creation_returns_payload_fields() {
        let github = GithubMock::start().await;
        github
            .respond_with(ResponseTemplate::new(201).set_body_json(repo_json(123, "testing")))
            .await;
        let service = github.service(BatchConfig::default());

        let created = assert_ok!(
            service
                .create_repo(CreateRepoRequest::new("testing", "a test repository"))
                .await
        );

        assert_eq!(created.id, 123);
        assert_eq!(created.name, "testing");
        assert_eq!(created.owner, TEST_OWNER);
    }

    #[tokio::test]
    async fn test_single_creation_unparseable_body() {
        let github = GithubMock::start().await;
        github
            .respond_with(ResponseTemplate::new(201).set_body_string("{\"id\": \"abc\""))
            .await;
        let service = github.service(BatchConfig::default());

        let err = assert_err!(service.create_repo(CreateRepoRequest::new("testing", "")).await);

        assert_eq!(err.status(), 500);
        assert_eq!(err.message(), INVALID_CREATE_REPO_RESPONSE);
    }

    #[tokio::test]
    async fn test_single_creation_invalid_name_skips_remote() {
        let github = GithubMock::start().await;
        github.accept_all(0).await;
        let service = github.service(BatchConfig::default());

        let err = assert_err!(service.create_repo(CreateRepoRequest::new("  ", "")).await);

        assert_eq!(err.status(), 400);
        assert_eq!(err.message(), INVALID_REPOSITORY_NAME);
        assert_eq!(github.request_count().await, 0);
    }

    #[tokio::test]
    async fn test_batch_all_valid_is_created() {
        let github = GithubMock::start().await;
        github.accept_all(0).await;
        let service = github.service(BatchConfig::default());

        let response = service.create_repos(requests(&["alpha", "beta"])).await;

        assert_eq!(response.status_code, 201);
        assert_eq!(response.results.len(), 2);
        let names: HashSet<&str> = response
            .results
            .iter()
            .map(|r| r.response().unwrap().name.as_str())
            .collect();
        assert_eq!(names, HashSet::from(["alpha", "beta"]));
        for result in &response.results {
            assert_eq!(result.response().unwrap().owner, TEST_OWNER);
        }
    }

    #[tokio::test]
    async fn test_batch_unparseable_bodies_all_fail() {
        let github = GithubMock::start().await;
        github
            .respond_with(ResponseTemplate::new(201).set_body_string("not json"))
            .await;
        let service = github.service(BatchConfig::default());

        let response = service.create_repos(requests(&["alpha", "beta"])).await;

        assert_eq!(response.status_code, 500);
        assert_eq!(response.failure_count(), 2);
        for result in &response.results {
            assert_eq!(
                result.error().unwrap().message(),
                INVALID_CREATE_REPO_RESPONSE
            );
        }
    }

    #[tokio::test]
    async fn test_batch_invalid_names_never_reach_remote() {
        let github = GithubMock::start().await;
        github.accept_all(0).await;
        let service = github.service(BatchConfig::default());

        let response = service.create_repos(requests(&["", "   ", "\t"])).await;

        assert_eq!(response.status_code, 400);
        assert_eq!(response.results.len(), 3);
        assert_eq!(github.request_count().await, 0);
    }

    #[tokio::test]
    async fn test_batch_mixed_is_partial_content() {
        let github = GithubMock::start().await;
        github.accept_all(0).await;
        let service = github.service(BatchConfig::default());

        let response = service.create_repos(requests(&["valid", ""])).await;

        assert_eq!(response.status_code, 206);
        assert_eq!(response.success_count(), 1);
        assert_eq!(response.failure_count(), 1);
        assert_eq!(github.request_count().await, 1);
    }

    #[tokio::test]
    async fn test_batch_remote_rejection_keeps_other_results() {
        let github = GithubMock::start().await;
        github
            .reject(
                "taken",
                422,
                json!({
                    "message": "Repository creation failed.",
                    "errors": [{
                        "resource": "Repository",
                        "code": "custom",
                        "field": "name",
                        "message": "name already exists on this account"
                    }]
                }),
            )
            .await;
        github.accept_all(0).await;
        let service = github.service(BatchConfig::default());

        let response = service.create_repos(requests(&["taken", "fresh"])).await;

        assert_eq!(response.status_code, 206);
        let error = response.results.iter().find_map(|r| r.error()).unwrap();
        assert_eq!(error.status(), 422);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_batch_fifty_randomly_delayed_creations() {
        let names: Vec<String> = (0..50).map(|i| format!("repo-{}", i)).collect();

        for _ in 0..5 {
            let github = GithubMock::start().await;
            github.accept_all(15).await;
            let service = github.service(BatchConfig::default());

            let batch: Vec<CreateRepoRequest> = names
                .iter()
                .map(|name| CreateRepoRequest::new(name.as_str(), ""))
                .collect();
            let response = service.create_repos(batch).await;

            assert_eq!(response.status_code, 201);
            assert_eq!(response.results.len(), 50);

            let ids: HashSet<i64> = response
                .results
                .iter()
                .map(|r| r.response().unwrap().id)
                .collect();
            assert_eq!(ids.len(), 50);

            let created: HashSet<&str> = response
                .results
                .iter()
                .map(|r| r.response().unwrap().name.as_str())
                .collect();
            let expected: HashSet<&str> = names.iter().map(String::as_str).collect();
            assert_eq!(created, expected);
        }
    }

    #[tokio::test]
    async fn test_batch_with_concurrency_limit() {
        let github = GithubMock::start().await;
        github.accept_all(5).await;
        let service = github.service(BatchConfig::with_max_concurrency(2));

        let names: Vec<String> = (0..12).map(|i| format!("limited-{}", i)).collect();
        let refs: Vec<&str> = names.iter().map(String::as_str).collect();
        let response = service.create_repos(requests(&refs)).await;

        assert_eq!(response.status_code, 201);
        assert_eq!(response.success_count(), 12);
        assert_eq!(github.request_count().await, 12);
    }
}
