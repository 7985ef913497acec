use async_trait::async_trait;

use crate::candidate::domain::{CandidateListFilter, CandidateRecord};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListCandidatesError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListCandidatesUseCase: Send + Sync {
    async fn execute(
        &self,
        filter: CandidateListFilter,
    ) -> Result<Vec<CandidateRecord>, ListCandidatesError>;
}
