use async_trait::async_trait;

use crate::candidate::application::ports::{
    incoming::use_cases::{GetCandidateError, GetCandidateUseCase},
    outgoing::{CandidateRepository, CandidateRepositoryError},
};
use crate::candidate::domain::{CandidateId, CandidateRecord};

#[derive(Debug, Clone)]
pub struct GetCandidateService<R>
where
    R: CandidateRepository,
{
    repository: R,
}

impl<R> GetCandidateService<R>
where
    R: CandidateRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetCandidateUseCase for GetCandidateService<R>
where
    R: CandidateRepository + Send + Sync,
{
    async fn execute(&self, candidate_id: CandidateId) -> Result<CandidateRecord, GetCandidateError> {
        self.repository
            .fetch_candidate_by_id(candidate_id)
            .await
            .map_err(|e| match e {
                CandidateRepositoryError::NotFound => GetCandidateError::CandidateNotFound,
                other => GetCandidateError::RepositoryError(other.to_string()),
            })
    }
}
