use async_trait::async_trait;

use crate::candidate::domain::{
    CandidateId, CandidateListFilter, CandidateProfile, CandidateRecord, ResumeLocation,
};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CandidateRepositoryError {
    #[error("Candidate not found")]
    NotFound,

    #[error("Candidate id {0} is already in use")]
    DuplicateId(CandidateId),

    #[error("Invalid candidate: {0}")]
    InvalidRecord(String),
}

/// A record taken out of the table together with the slot it occupied, so a
/// failed delete can put it back where it was.
#[derive(Debug, Clone, PartialEq)]
pub struct RemovedCandidate {
    pub record: CandidateRecord,
    pub position: u64,
}

impl RemovedCandidate {
    pub fn resume_location(&self) -> &ResumeLocation {
        &self.record.resume_location
    }
}

#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// Returns an id no live record uses.
    async fn next_id(&self) -> CandidateId;

    /// Stores a new record. Rejects an id that is already live and values no
    /// candidate can have (empty name, negative experience).
    async fn create_candidate(
        &self,
        id: CandidateId,
        profile: CandidateProfile,
        resume_location: ResumeLocation,
    ) -> Result<CandidateRecord, CandidateRepositoryError>;

    /// Records matching `filter`, in creation order.
    async fn list_candidates(
        &self,
        filter: CandidateListFilter,
    ) -> Result<Vec<CandidateRecord>, CandidateRepositoryError>;

    async fn fetch_candidate_by_id(
        &self,
        id: CandidateId,
    ) -> Result<CandidateRecord, CandidateRepositoryError>;

    /// Removes the record; it is invisible to every later read.
    async fn delete_candidate(
        &self,
        id: CandidateId,
    ) -> Result<RemovedCandidate, CandidateRepositoryError>;

    /// Undoes `delete_candidate`.
    async fn restore_candidate(
        &self,
        removed: RemovedCandidate,
    ) -> Result<CandidateRecord, CandidateRepositoryError>;
}
