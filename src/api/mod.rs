use actix_web::web::JsonConfig;
use utoipa_actix_web::{scope, service_config::ServiceConfig};

use crate::domain::error::AppError;

pub mod controllers;
pub mod dto;
pub mod protocols;

const PAYLOAD_LIMIT: usize = 32768;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(scope("/api/v1").configure(controllers::signup::routes));
}

/// Unreadable payloads are answered with a `BadRequest` body instead of
/// actix's plain text error.
pub fn json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(PAYLOAD_LIMIT)
        .content_type(|mime| mime == mime::APPLICATION_JSON)
        .error_handler(|err, _| AppError::from(err).into())
}
