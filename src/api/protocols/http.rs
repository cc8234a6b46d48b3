use actix_web::{HttpRequest as ActixRequest, Responder, body::BoxBody, http::StatusCode};
use serde::Serialize;

use crate::api::dto::signup::AccountDTO;
use crate::domain::error::AppError;
use crate::domain::models::account::Account;

#[derive(Debug, Clone)]
pub struct HttpRequest<B> {
    pub body: B,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Account(AccountDTO),
    Error(AppError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status_code: u16,
    pub body: ResponseBody,
}

pub fn bad_request(error: AppError) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::BAD_REQUEST.as_u16(),
        body: ResponseBody::Error(error),
    }
}

/// The cause stays in the logs, the body is always the bare server error.
pub fn server_error(error: AppError) -> HttpResponse {
    tracing::error!(
        cause = error.trace.as_deref().unwrap_or(error.message.as_str()),
        "unexpected failure while handling request"
    );

    HttpResponse {
        status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        body: ResponseBody::Error(AppError::ServerError()),
    }
}

pub fn ok(account: Account) -> HttpResponse {
    HttpResponse {
        status_code: StatusCode::OK.as_u16(),
        body: ResponseBody::Account(account.into()),
    }
}

impl Responder for HttpResponse {
    type Body = BoxBody;

    fn respond_to(self, _: &ActixRequest) -> actix_web::HttpResponse<Self::Body> {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        actix_web::HttpResponse::build(status).json(self.body)
    }
}
