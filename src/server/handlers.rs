//! HTTP route handlers

use actix_web::HttpResponse;
use serde_json::json;
use tracing::debug;

/// Liveness check
pub async fn health_check() -> HttpResponse {
    debug!("Health check requested");
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": crate::NAME,
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": crate::VERSION,
        "build": crate::build_info()
    }))
}
