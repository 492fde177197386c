//! Overall status for a batch of creations

use crate::core::repositories::CreateReposResult;
use actix_web::http::StatusCode;

/// Derive the batch status from the collected outcomes.
///
/// - no requests: 200
/// - nothing succeeded: the status of the first failure in collected order
/// - everything succeeded: 201
/// - anything else: 206
///
/// When several failures race, "first" is whichever completed first.
pub fn derive_status(results: &[CreateReposResult], request_count: usize) -> u16 {
    if request_count == 0 {
        return StatusCode::OK.as_u16();
    }

    let successes = results.iter().filter(|r| r.is_success()).count();

    if successes == 0 {
        return results
            .iter()
            .find_map(CreateReposResult::error)
            .map(|e| e.status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR.as_u16());
    }

    if successes == request_count {
        StatusCode::CREATED.as_u16()
    } else {
        StatusCode::PARTIAL_CONTENT.as_u16()
    }
}
