use async_trait::async_trait;

use crate::candidate::domain::{CandidateId, CandidateRecord};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GetCandidateError {
    #[error("Candidate not found")]
    CandidateNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetCandidateUseCase: Send + Sync {
    async fn execute(&self, candidate_id: CandidateId) -> Result<CandidateRecord, GetCandidateError>;
}
