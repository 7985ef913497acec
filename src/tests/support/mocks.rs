use async_trait::async_trait;
use mockall::mock;

use crate::candidate::application::ports::outgoing::{
    CandidateRepository, CandidateRepositoryError, RemovedCandidate,
};
use crate::candidate::domain::{
    CandidateId, CandidateListFilter, CandidateProfile, CandidateRecord, ResumeLocation,
};

mock! {
    pub CandidateRepositoryMock {}
    #[async_trait]
    impl CandidateRepository for CandidateRepositoryMock {
        async fn next_id(&self) -> CandidateId;
        async fn create_candidate(
            &self,
            id: CandidateId,
            profile: CandidateProfile,
            resume_location: ResumeLocation,
        ) -> Result<CandidateRecord, CandidateRepositoryError>;
        async fn list_candidates(
            &self,
            filter: CandidateListFilter,
        ) -> Result<Vec<CandidateRecord>, CandidateRepositoryError>;
        async fn fetch_candidate_by_id(
            &self,
            id: CandidateId,
        ) -> Result<CandidateRecord, CandidateRepositoryError>;
        async fn delete_candidate(
            &self,
            id: CandidateId,
        ) -> Result<RemovedCandidate, CandidateRepositoryError>;
        async fn restore_candidate(
            &self,
            removed: RemovedCandidate,
        ) -> Result<CandidateRecord, CandidateRepositoryError>;
    }
}
