use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::{Account, AddAccountInput};

#[async_trait]
pub trait AddAccount: 'static + Sync + Send {
    async fn add(&self, input: AddAccountInput) -> AppResult<Account>;
}
