use std::sync::Arc;

use crate::api::dto::signup::SignupRequestDTO;
use crate::api::protocols::controller::Controller;
use crate::config::Argon2Config;
use crate::domain::services::add_account::AddAccount;
use crate::domain::services::email_validator::EmailValidator;
use crate::domain::services::encrypter::Encrypter;

use crate::api::controllers::signup::SignUpController;
use crate::services::add_account::AddAccountImpl;
use crate::services::email_validator::EmailValidatorAdapter;
use crate::services::encrypter::Argon2Encrypter;

pub struct Container {
    pub signup_controller: Arc<dyn Controller<SignupRequestDTO>>,
}

impl Container {
    pub fn new(argon2: &Argon2Config) -> Result<Self, argon2::Error> {
        let encrypter: Arc<dyn Encrypter> = Arc::new(Argon2Encrypter::new(argon2)?);

        Ok(Container {
            signup_controller: signup_controller(encrypter),
        })
    }
}

fn signup_controller(encrypter: Arc<dyn Encrypter>) -> Arc<dyn Controller<SignupRequestDTO>> {
    let email_validator: Arc<dyn EmailValidator> = Arc::new(EmailValidatorAdapter);
    let add_account: Arc<dyn AddAccount> = Arc::new(AddAccountImpl::new(encrypter));

    Arc::new(SignUpController::new(email_validator, add_account))
}
