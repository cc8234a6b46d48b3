use crate::domain::error::AppResult;

pub trait EmailValidator: 'static + Sync + Send {
    fn is_valid(&self, email: &str) -> AppResult<bool>;
}
