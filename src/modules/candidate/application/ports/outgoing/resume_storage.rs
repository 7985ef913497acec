use async_trait::async_trait;

use crate::candidate::domain::{CandidateId, ResumeLocation};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResumeStorageError {
    #[error("Could not save file: {0}")]
    WriteFailed(String),

    #[error("Could not remove file: {0}")]
    RemoveFailed(String),
}

#[async_trait]
pub trait ResumeStorage: Send + Sync {
    /// Persists `bytes` at a location owned by `candidate_id`.
    /// Leaves nothing behind when it fails.
    async fn store_resume(
        &self,
        candidate_id: CandidateId,
        original_filename: &str,
        bytes: &[u8],
    ) -> Result<ResumeLocation, ResumeStorageError>;

    /// Ensures no file exists at `location`. Already gone counts as success.
    async fn remove_resume(&self, location: &ResumeLocation) -> Result<(), ResumeStorageError>;
}
