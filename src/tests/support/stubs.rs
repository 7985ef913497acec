use async_trait::async_trait;

use crate::candidate::application::ports::incoming::use_cases::{
    DeleteCandidateError, DeleteCandidateUseCase, GetCandidateError, GetCandidateUseCase,
    ListCandidatesError, ListCandidatesUseCase, SubmitCandidateCommand, SubmitCandidateError,
    SubmitCandidateUseCase,
};
use crate::candidate::domain::{CandidateId, CandidateListFilter, CandidateRecord};

#[derive(Default, Clone)]
pub struct StubSubmitCandidateUseCase;

#[async_trait]
impl SubmitCandidateUseCase for StubSubmitCandidateUseCase {
    async fn execute(
        &self,
        _command: SubmitCandidateCommand,
    ) -> Result<CandidateRecord, SubmitCandidateError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubListCandidatesUseCase;

#[async_trait]
impl ListCandidatesUseCase for StubListCandidatesUseCase {
    async fn execute(
        &self,
        _filter: CandidateListFilter,
    ) -> Result<Vec<CandidateRecord>, ListCandidatesError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Clone)]
pub struct StubGetCandidateUseCase {
    pub result: Result<CandidateRecord, GetCandidateError>,
}

impl StubGetCandidateUseCase {
    pub fn success(record: CandidateRecord) -> Self {
        Self { result: Ok(record) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(GetCandidateError::CandidateNotFound),
        }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(GetCandidateError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl GetCandidateUseCase for StubGetCandidateUseCase {
    async fn execute(&self, _candidate_id: CandidateId) -> Result<CandidateRecord, GetCandidateError> {
        self.result.clone()
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteCandidateUseCase;

#[async_trait]
impl DeleteCandidateUseCase for StubDeleteCandidateUseCase {
    async fn execute(&self, _candidate_id: CandidateId) -> Result<(), DeleteCandidateError> {
        unimplemented!("Not used in this test")
    }
}
