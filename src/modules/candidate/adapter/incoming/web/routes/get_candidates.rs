use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::candidate::application::ports::incoming::use_cases::ListCandidatesError;
use crate::candidate::domain::CandidateListFilter;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub struct GetCandidatesQuery {
    pub skill: Option<String>,
    pub min_experience: Option<f64>,
    pub graduation_year: Option<i32>,
}

impl TryFrom<GetCandidatesQuery> for CandidateListFilter {
    type Error = String;

    fn try_from(q: GetCandidatesQuery) -> Result<Self, Self::Error> {
        if let Some(min) = q.min_experience.filter(|min| !min.is_finite()) {
            return Err(format!("min_experience must be a finite number, got {min}"));
        }

        Ok(CandidateListFilter {
            skill: q.skill,
            min_experience: q.min_experience,
            graduation_year: q.graduation_year,
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[get("/candidates")]
pub async fn get_candidates_handler(
    query: web::Query<GetCandidatesQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let filter = match CandidateListFilter::try_from(query.into_inner()) {
        Ok(filter) => filter,
        Err(msg) => return ApiResponse::bad_request("INVALID_QUERY", &msg),
    };

    match data.candidate.list.execute(filter).await {
        Ok(records) => ApiResponse::success(records),

        Err(ListCandidatesError::RepositoryError(msg)) => {
            error!("Failed to list candidates: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
