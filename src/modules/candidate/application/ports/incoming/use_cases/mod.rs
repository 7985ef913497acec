mod delete_candidate_use_case;
mod get_candidate_use_case;
mod list_candidates_use_case;
mod submit_candidate_use_case;

pub use delete_candidate_use_case::{DeleteCandidateError, DeleteCandidateUseCase};
pub use get_candidate_use_case::{GetCandidateError, GetCandidateUseCase};
pub use list_candidates_use_case::{ListCandidatesError, ListCandidatesUseCase};
pub use submit_candidate_use_case::{
    SubmitCandidateCommand, SubmitCandidateCommandError, SubmitCandidateError,
    SubmitCandidateUseCase,
};
