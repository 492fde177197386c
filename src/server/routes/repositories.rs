//! Repository creation endpoints

use crate::core::repositories::CreateRepoRequest;
use crate::server::state::AppState;
use crate::utils::error::ApiError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, web};
use tracing::debug;

/// Configure repository routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/repository", web::post().to(create_repo))
        .route("/repositories", web::post().to(create_repos));
}

/// `POST /repository`
///
/// 201 with the created repository, or the [`ApiError`] with its own status.
async fn create_repo(
    state: web::Data<AppState>,
    request: web::Json<CreateRepoRequest>,
) -> Result<HttpResponse, ApiError> {
    let response = state.repositories.create_repo(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

/// `POST /repositories`
///
/// The HTTP status is the batch's derived status code.
async fn create_repos(
    state: web::Data<AppState>,
    requests: web::Json<Vec<CreateRepoRequest>>,
) -> HttpResponse {
    let requests = requests.into_inner();
    debug!("Batch creation requested for {} repositories", requests.len());

    let response = state.repositories.create_repos(requests).await;
    let status =
        StatusCode::from_u16(response.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    HttpResponse::build(status).json(response)
}
