mod delete_candidate_service;
mod get_candidate_service;
mod list_candidates_service;
mod submit_candidate_service;

pub use delete_candidate_service::DeleteCandidateService;
pub use get_candidate_service::GetCandidateService;
pub use list_candidates_service::ListCandidatesService;
pub use submit_candidate_service::SubmitCandidateService;
