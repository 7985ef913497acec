use actix_web::{delete, http::StatusCode, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::candidate::application::ports::incoming::use_cases::DeleteCandidateError;
use crate::candidate::domain::CandidateId;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[delete("/candidates/{candidate_id}")]
pub async fn delete_candidate_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let candidate_id = CandidateId::from(path.into_inner());

    match data.candidate.delete.execute(candidate_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteCandidateError::CandidateNotFound) => {
            ApiResponse::not_found("CANDIDATE_NOT_FOUND", "Candidate not found")
        }

        Err(DeleteCandidateError::StorageError(msg)) => {
            error!(%candidate_id, "Failed to delete resume file: {}", msg);
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_ERROR",
                "Could not delete resume file",
            )
        }

        Err(DeleteCandidateError::RepositoryError(msg)) => {
            error!(%candidate_id, "Failed to delete candidate: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
