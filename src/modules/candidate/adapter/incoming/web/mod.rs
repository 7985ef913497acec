pub mod candidate_form;
pub mod routes;
