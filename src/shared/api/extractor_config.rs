// src/shared/api/extractor_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::{PathConfig, QueryConfig};

pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("INVALID_QUERY", &message),
        )
        .into()
    })
}

/// A path segment that does not parse (e.g. a malformed id) cannot name an
/// existing resource, so it is reported as not found.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::not_found("NOT_FOUND", "Resource not found"),
        )
        .into()
    })
}
