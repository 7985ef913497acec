mod create_candidate;
mod delete_candidate;
mod get_candidates;
mod get_single_candidate;

pub use create_candidate::create_candidate_handler;
pub use delete_candidate::delete_candidate_handler;
pub use get_candidates::get_candidates_handler;
pub use get_single_candidate::get_candidate_by_id_handler;
