use crate::domain::{error::AppResult, services::email_validator::EmailValidator};

use validator::ValidateEmail;

/// Delegates the format check to the `validator` crate.
pub struct EmailValidatorAdapter;

impl EmailValidator for EmailValidatorAdapter {
    fn is_valid(&self, email: &str) -> AppResult<bool> {
        Ok(email.validate_email())
    }
}
