use std::sync::Arc;

use crate::candidate::application::ports::incoming::use_cases::{
    DeleteCandidateUseCase, GetCandidateUseCase, ListCandidatesUseCase, SubmitCandidateUseCase,
};
use crate::candidate::application::ports::outgoing::{CandidateRepository, ResumeStorage};
use crate::candidate::application::services::{
    DeleteCandidateService, GetCandidateService, ListCandidatesService, SubmitCandidateService,
};

#[derive(Clone)]
pub struct CandidateUseCases {
    pub submit: Arc<dyn SubmitCandidateUseCase + Send + Sync>,
    pub list: Arc<dyn ListCandidatesUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetCandidateUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteCandidateUseCase + Send + Sync>,
}

impl CandidateUseCases {
    /// Wires every use case against one record store and one file custodian.
    pub fn new<R, S>(repository: R, storage: S) -> Self
    where
        R: CandidateRepository + Clone + 'static,
        S: ResumeStorage + Clone + 'static,
    {
        Self {
            submit: Arc::new(SubmitCandidateService::new(
                repository.clone(),
                storage.clone(),
            )),
            list: Arc::new(ListCandidatesService::new(repository.clone())),
            get_single: Arc::new(GetCandidateService::new(repository.clone())),
            delete: Arc::new(DeleteCandidateService::new(repository, storage)),
        }
    }
}
