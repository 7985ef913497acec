use actix_multipart::Multipart;
use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use tracing::{error, warn};

use crate::candidate::adapter::incoming::web::candidate_form::{CandidateForm, CandidateFormError};
use crate::candidate::application::ports::incoming::use_cases::SubmitCandidateError;
use crate::candidate::domain::policies::UploadPolicyError;
use crate::shared::api::ApiResponse;
use crate::AppState;

fn form_error_response(err: CandidateFormError) -> HttpResponse {
    warn!(error = %err, "Rejected candidate submission");
    let message = err.to_string();

    match err {
        CandidateFormError::Upload(UploadPolicyError::FileTooLarge { .. }) => {
            ApiResponse::payload_too_large("FILE_TOO_LARGE", &message)
        }
        CandidateFormError::Upload(
            UploadPolicyError::DisallowedExtension(_) | UploadPolicyError::DisallowedContentType(_),
        ) => ApiResponse::bad_request("INVALID_FILE_TYPE", &message),
        CandidateFormError::Upload(_) | CandidateFormError::MissingResume => {
            ApiResponse::bad_request("INVALID_FILE", &message)
        }
        _ => ApiResponse::bad_request("VALIDATION_ERROR", &message),
    }
}

#[post("/candidates")]
pub async fn create_candidate_handler(
    payload: Multipart,
    data: web::Data<AppState>,
) -> impl Responder {
    let command = match CandidateForm::read(payload, &data.upload_policy)
        .await
        .and_then(CandidateForm::into_command)
    {
        Ok(command) => command,
        Err(err) => return form_error_response(err),
    };

    match data.candidate.submit.execute(command).await {
        Ok(record) => ApiResponse::created(record),

        Err(SubmitCandidateError::InvalidCandidate(msg)) => {
            ApiResponse::bad_request("VALIDATION_ERROR", &msg)
        }

        Err(SubmitCandidateError::StorageError(msg)) => {
            error!("Failed to save resume: {}", msg);
            ApiResponse::error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "STORAGE_ERROR",
                "Could not save resume file",
            )
        }

        Err(SubmitCandidateError::RepositoryError(msg)) => {
            error!("Failed to create candidate: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
