use std::sync::Arc;

use crate::domain::{
    error::{AppError, AppResult},
    models::account::{Account, AddAccountInput},
    services::{add_account::AddAccount, encrypter::Encrypter},
};

use async_trait::async_trait;
use uuid::Uuid;

pub struct AddAccountImpl {
    encrypter: Arc<dyn Encrypter>,
}

impl AddAccountImpl {
    pub fn new(encrypter: Arc<dyn Encrypter>) -> Self {
        Self { encrypter }
    }
}

#[async_trait]
impl AddAccount for AddAccountImpl {
    async fn add(&self, input: AddAccountInput) -> AppResult<Account> {
        let hashed_password = self.encrypter.encrypt(&input.password).await?;

        if hashed_password == input.password {
            return Err(
                AppError::ServerError().trace("encrypter returned the plaintext password")
            );
        }

        Ok(Account {
            id: Uuid::new_v4().to_string(),
            name: input.name,
            email: input.email,
            password: hashed_password,
        })
    }
}

#[cfg(test)]
pub mod mock {
    use tokio::sync::Mutex;

    use super::*;

    #[derive(Debug, Clone)]
    pub enum Outcome {
        Created(Account),
        Fail,
        Panic,
    }

    pub struct AddAccountStub {
        pub calls: Mutex<Vec<AddAccountInput>>,
        pub outcome: Outcome,
    }

    impl AddAccountStub {
        pub fn new(outcome: Outcome) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                outcome,
            }
        }
    }

    #[async_trait]
    impl AddAccount for AddAccountStub {
        async fn add(&self, input: AddAccountInput) -> AppResult<Account> {
            self.calls.lock().await.push(input);

            match &self.outcome {
                Outcome::Created(account) => Ok(account.clone()),
                Outcome::Fail => Err(AppError::ServerError().trace("add account stub failure")),
                Outcome::Panic => panic!("add account stub panicked"),
            }
        }
    }
}
