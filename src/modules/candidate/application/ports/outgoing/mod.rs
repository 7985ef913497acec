mod candidate_repository;
mod resume_storage;

pub use candidate_repository::{CandidateRepository, CandidateRepositoryError, RemovedCandidate};
pub use resume_storage::{ResumeStorage, ResumeStorageError};
