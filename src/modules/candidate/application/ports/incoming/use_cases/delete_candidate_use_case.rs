use async_trait::async_trait;

use crate::candidate::domain::CandidateId;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DeleteCandidateError {
    #[error("Candidate not found")]
    CandidateNotFound,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Removes a candidate and its resume file together.
#[async_trait]
pub trait DeleteCandidateUseCase: Send + Sync {
    async fn execute(&self, candidate_id: CandidateId) -> Result<(), DeleteCandidateError>;
}
