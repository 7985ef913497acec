use actix_web::{get, web, Responder};
use tracing::error;
use uuid::Uuid;

use crate::candidate::application::ports::incoming::use_cases::GetCandidateError;
use crate::candidate::domain::CandidateId;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/candidates/{candidate_id}")]
pub async fn get_candidate_by_id_handler(
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let candidate_id = CandidateId::from(path.into_inner());

    match data.candidate.get_single.execute(candidate_id).await {
        Ok(record) => ApiResponse::success(record),

        Err(GetCandidateError::CandidateNotFound) => {
            ApiResponse::not_found("CANDIDATE_NOT_FOUND", "Candidate not found")
        }

        Err(GetCandidateError::RepositoryError(msg)) => {
            error!(%candidate_id, "Failed to fetch candidate: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
