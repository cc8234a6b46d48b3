use actix_web::{
    HttpResponse, ResponseError,
    http::{StatusCode, header::ContentType},
    web::Json,
};

use actix_web::error::JsonPayloadError;

use serde::Serialize;
use utoipa::ToSchema;

use argon2::password_hash::errors::Error as Argon2Error;

pub type AppResult<T> = core::result::Result<T, AppError>;

macro_rules! static_error {
    ($name:ident, $status:expr) => {
        #[allow(non_snake_case, missing_docs)]
        pub fn $name(message: impl ToString) -> AppError {
            AppError {
                name: stringify!($name).to_string(),
                message: message.to_string(),
                code: $status.as_u16(),
                trace: None,
            }
        }
    };

    ($name:ident, $status:expr, $default:expr) => {
        #[allow(non_snake_case, missing_docs)]
        pub fn $name() -> AppError {
            AppError {
                name: stringify!($name).to_string(),
                message: $default.to_string(),
                code: $status.as_u16(),
                trace: None,
            }
        }
    };
}

macro_rules! param_error {
    ($name:ident, $prefix:expr) => {
        #[allow(non_snake_case, missing_docs)]
        pub fn $name(param: &str) -> AppError {
            AppError {
                name: stringify!($name).to_string(),
                message: format!("{}: {param}", $prefix),
                code: StatusCode::BAD_REQUEST.as_u16(),
                trace: None,
            }
        }
    };
}

/// Error carried in a response body. `trace` holds the internal cause and is
/// only ever logged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct AppError {
    pub name: String,
    pub message: String,
    pub code: u16,
    #[serde(skip)]
    pub trace: Option<String>,
}

#[rustfmt::skip]
pub mod message {
    pub static MISSING_PARAM: &str = "Missing param";
    pub static INVALID_PARAM: &str = "Invalid param";
    pub static INTERNAL_ERROR: &str = "Internal server error";
    pub static BAD_REQUEST: &str = "The server would not process the request due to something the server considered to be a client error";
}

#[rustfmt::skip]
impl AppError {
    // 1. Errors naming the offending parameter
    param_error!(MissingParamError, message::MISSING_PARAM);
    param_error!(InvalidParamError, message::INVALID_PARAM);

    // 2. Errors with Custom Message
    static_error!(BadRequest, StatusCode::BAD_REQUEST);

    // 3. Errors with Default Message
    static_error!(ServerError, StatusCode::INTERNAL_SERVER_ERROR, message::INTERNAL_ERROR);

    pub fn trace(self, message: &str) -> AppError {
        AppError {
            name: self.name,
            code: self.code,
            message: self.message,
            trace: Some(message.to_owned()),
        }
    }

    pub fn example_400_missing() -> AppError {
        AppError::MissingParamError("name")
    }

    pub fn example_400_invalid() -> AppError {
        AppError::InvalidParamError("email")
    }

    pub fn example_400() -> AppError {
        AppError::BadRequest(message::BAD_REQUEST)
    }

    pub fn example_500() -> AppError {
        AppError::ServerError()
    }
}

impl std::error::Error for AppError {}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}: {}", self.name, self.code, self.message)
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .content_type(ContentType::json())
            .json(Json(self))
    }

    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<Argon2Error> for AppError {
    fn from(error: Argon2Error) -> Self {
        AppError::ServerError().trace(&error.to_string())
    }
}

impl From<JsonPayloadError> for AppError {
    fn from(error: JsonPayloadError) -> Self {
        AppError::BadRequest(error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use serde_json::json;

    #[rstest]
    #[case::missing(
        AppError::MissingParamError("passwordConfirmation"),
        "MissingParamError",
        "Missing param: passwordConfirmation"
    )]
    #[case::invalid(
        AppError::InvalidParamError("email"),
        "InvalidParamError",
        "Invalid param: email"
    )]
    fn test_param_errors_name_the_field(
        #[case] error: AppError,
        #[case] name: &str,
        #[case] message: &str,
    ) {
        assert_eq!(error.name, name);
        assert_eq!(error.message, message);
        assert_eq!(error.code, 400);
    }

    #[test]
    fn test_trace_is_never_serialized() {
        let error = AppError::ServerError().trace("hasher exploded");

        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({
                "name": "ServerError",
                "message": "Internal server error",
                "code": 500
            })
        );
    }

    #[test]
    fn test_argon2_error_becomes_server_error() {
        let error: AppError = Argon2Error::Password.into();

        assert_eq!(error.code, 500);
        assert_eq!(error.name, "ServerError");
        assert!(error.trace.is_some());
    }

    #[test]
    fn test_response_error_status() {
        assert_eq!(
            AppError::MissingParamError("name").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::ServerError().status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
