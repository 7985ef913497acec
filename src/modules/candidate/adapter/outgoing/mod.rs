pub mod candidate_repository_in_memory;
pub mod resume_storage_local;

pub use candidate_repository_in_memory::CandidateRepositoryInMemory;
pub use resume_storage_local::ResumeStorageLocal;
