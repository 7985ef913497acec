pub mod candidate_use_cases;
pub mod ports;
pub mod services;

pub use candidate_use_cases::CandidateUseCases;
