pub mod entities;
pub mod filter;
pub mod policies;
pub mod skills;

pub use entities::{CandidateId, CandidateProfile, CandidateRecord, ResumeLocation};
pub use filter::CandidateListFilter;
