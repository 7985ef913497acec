pub mod app_state_builder;
pub mod candidate_fixtures;
pub mod mocks;
pub mod multipart;
pub mod stubs;
