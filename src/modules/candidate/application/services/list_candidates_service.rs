use async_trait::async_trait;

use crate::candidate::application::ports::{
    incoming::use_cases::{ListCandidatesError, ListCandidatesUseCase},
    outgoing::CandidateRepository,
};
use crate::candidate::domain::{CandidateListFilter, CandidateRecord};

#[derive(Debug, Clone)]
pub struct ListCandidatesService<R>
where
    R: CandidateRepository,
{
    repository: R,
}

impl<R> ListCandidatesService<R>
where
    R: CandidateRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ListCandidatesUseCase for ListCandidatesService<R>
where
    R: CandidateRepository + Send + Sync,
{
    async fn execute(
        &self,
        filter: CandidateListFilter,
    ) -> Result<Vec<CandidateRecord>, ListCandidatesError> {
        self.repository
            .list_candidates(filter)
            .await
            .map_err(|e| ListCandidatesError::RepositoryError(e.to_string()))
    }
}
