use crate::candidate::application::ports::incoming::use_cases::{
    DeleteCandidateUseCase, GetCandidateUseCase, ListCandidatesUseCase, SubmitCandidateUseCase,
};
use crate::candidate::application::CandidateUseCases;
use crate::candidate::domain::policies::ResumeUploadPolicy;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    candidate: CandidateUseCases,
    upload_policy: ResumeUploadPolicy,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            candidate: CandidateUseCases {
                submit: Arc::new(StubSubmitCandidateUseCase),
                list: Arc::new(StubListCandidatesUseCase),
                get_single: Arc::new(StubGetCandidateUseCase::not_found()),
                delete: Arc::new(StubDeleteCandidateUseCase),
            },
            upload_policy: ResumeUploadPolicy::default(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_submit_candidate(
        mut self,
        uc: impl SubmitCandidateUseCase + Send + Sync + 'static,
    ) -> Self {
        self.candidate.submit = Arc::new(uc);
        self
    }

    pub fn with_list_candidates(
        mut self,
        uc: impl ListCandidatesUseCase + Send + Sync + 'static,
    ) -> Self {
        self.candidate.list = Arc::new(uc);
        self
    }

    pub fn with_get_single_candidate(
        mut self,
        uc: impl GetCandidateUseCase + Send + Sync + 'static,
    ) -> Self {
        self.candidate.get_single = Arc::new(uc);
        self
    }

    pub fn with_delete_candidate(
        mut self,
        uc: impl DeleteCandidateUseCase + Send + Sync + 'static,
    ) -> Self {
        self.candidate.delete = Arc::new(uc);
        self
    }

    pub fn with_upload_policy(mut self, policy: ResumeUploadPolicy) -> Self {
        self.upload_policy = policy;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            candidate: self.candidate,
            upload_policy: self.upload_policy,
        })
    }
}
