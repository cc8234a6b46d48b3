use std::any::Any;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::api::dto::signup::{AccountDTO, SignupRequestDTO};
use crate::api::protocols::controller::Controller;
use crate::api::protocols::http::{HttpRequest, HttpResponse, bad_request, ok, server_error};
use crate::domain::error::{AppError, AppResult};
use crate::domain::models::account::AddAccountInput;
use crate::domain::services::add_account::AddAccount;
use crate::domain::services::email_validator::EmailValidator;

use actix_web::{post, web::Data as State, web::Json};
use async_trait::async_trait;
use futures::FutureExt;

use utoipa_actix_web::service_config::ServiceConfig;

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(signup);
}

#[utoipa::path(
    responses(
        (status = 200, body = AccountDTO, description = "Account Created"),
        (status = 400, body = AppError, examples(
            ("Missing" = (value = json!(AppError::example_400_missing()))),
            ("Invalid" = (value = json!(AppError::example_400_invalid()))),
            ("Malformed" = (value = json!(AppError::example_400())))
        )),
        (status = 500, body = AppError, example = json!(AppError::example_500()))
    ),
    request_body = SignupRequestDTO,
    tag = "Account",
)]
#[post("/signup")]
pub async fn signup(
    payload: Json<SignupRequestDTO>,
    controller: State<Arc<dyn Controller<SignupRequestDTO>>>,
) -> HttpResponse {
    controller
        .handle(HttpRequest {
            body: payload.into_inner(),
        })
        .await
}

pub struct SignUpController {
    email_validator: Arc<dyn EmailValidator>,
    add_account: Arc<dyn AddAccount>,
}

impl SignUpController {
    pub fn new(email_validator: Arc<dyn EmailValidator>, add_account: Arc<dyn AddAccount>) -> Self {
        Self {
            email_validator,
            add_account,
        }
    }
}

struct SignupFields {
    name: String,
    email: String,
    password: String,
    password_confirmation: String,
}

/// Stages move forward only; any failure jumps straight to `Responded`.
enum Stage {
    ValidatingFields(SignupRequestDTO),
    ValidatingConfirmation(SignupFields),
    ValidatingEmail(AddAccountInput),
    Executing(AddAccountInput),
    Responded(HttpResponse),
}

#[async_trait]
impl Controller<SignupRequestDTO> for SignUpController {
    async fn handle(&self, request: HttpRequest<SignupRequestDTO>) -> HttpResponse {
        let mut stage = Stage::ValidatingFields(request.body);

        loop {
            stage = match stage {
                Stage::ValidatingFields(body) => match required_fields(body) {
                    Ok(fields) => Stage::ValidatingConfirmation(fields),
                    Err(field) => reject(AppError::MissingParamError(field)),
                },
                Stage::ValidatingConfirmation(fields) => {
                    if fields.password != fields.password_confirmation {
                        reject(AppError::InvalidParamError("passwordConfirmation"))
                    } else {
                        Stage::ValidatingEmail(AddAccountInput {
                            name: fields.name,
                            email: fields.email,
                            password: fields.password,
                        })
                    }
                }
                Stage::ValidatingEmail(input) => {
                    match fault_boundary(|| self.email_validator.is_valid(&input.email)) {
                        Ok(true) => Stage::Executing(input),
                        Ok(false) => reject(AppError::InvalidParamError("email")),
                        Err(error) => Stage::Responded(server_error(error)),
                    }
                }
                Stage::Executing(input) => {
                    match async_fault_boundary(self.add_account.add(input)).await {
                        Ok(account) => {
                            tracing::info!(id = %account.id, "account created");
                            Stage::Responded(ok(account))
                        }
                        Err(error) => Stage::Responded(server_error(error)),
                    }
                }
                Stage::Responded(response) => return response,
            };
        }
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String, &'static str> {
    value.filter(|value| !value.is_empty()).ok_or(field)
}

// Field order decides which error is reported when several are missing.
fn required_fields(body: SignupRequestDTO) -> Result<SignupFields, &'static str> {
    Ok(SignupFields {
        name: required(body.name, "name")?,
        email: required(body.email, "email")?,
        password: required(body.password, "password")?,
        password_confirmation: required(body.password_confirmation, "passwordConfirmation")?,
    })
}

fn reject(error: AppError) -> Stage {
    tracing::info!(reason = %error.message, "signup request rejected");
    Stage::Responded(bad_request(error))
}

fn fault_boundary<T>(call: impl FnOnce() -> AppResult<T>) -> AppResult<T> {
    panic::catch_unwind(AssertUnwindSafe(call)).unwrap_or_else(|payload| Err(panicked(payload)))
}

async fn async_fault_boundary<T>(call: impl Future<Output = AppResult<T>>) -> AppResult<T> {
    AssertUnwindSafe(call)
        .catch_unwind()
        .await
        .unwrap_or_else(|payload| Err(panicked(payload)))
}

fn panicked(payload: Box<dyn Any + Send>) -> AppError {
    let cause = payload
        .downcast_ref::<&str>()
        .map(|cause| cause.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "collaborator panicked".to_string());

    AppError::ServerError().trace(&cause)
}
