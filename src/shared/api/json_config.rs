use crate::shared::api::ApiResponse;
use actix_web::{
    error::InternalError,
    web::{JsonConfig, PathConfig, QueryConfig},
    Error as ActixError,
};

fn validation_error<E>(err: E) -> ActixError
where
    E: std::fmt::Debug + std::fmt::Display + 'static,
{
    let message = err.to_string();
    InternalError::from_response(err, ApiResponse::bad_request("VALIDATION_ERROR", &message))
        .into()
}

/// Malformed or incomplete JSON bodies become 400 `VALIDATION_ERROR`.
pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| validation_error(err))
}

/// Non-numeric `page`/`size` query values.
pub fn custom_query_config() -> QueryConfig {
    QueryConfig::default().error_handler(|err, _req| validation_error(err))
}

/// Non-numeric `{id}` path segments.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| validation_error(err))
}
