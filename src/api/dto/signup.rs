use crate::domain::models::account::Account;
use serde::Deserialize;
use serde::Serialize;
use utoipa::ToSchema;

/// Every field is optional on the wire so that presence is checked by the
/// controller, in a fixed order.
#[derive(Debug, Default, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequestDTO {
    #[schema(examples("your_name"))]
    pub name: Option<String>,

    #[schema(examples("your@email.com"))]
    pub email: Option<String>,

    #[schema(examples("stR0ngP4ssw0rd!"))]
    pub password: Option<String>,

    #[schema(examples("stR0ngP4ssw0rd!"))]
    pub password_confirmation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AccountDTO {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Argon2id hash of the submitted password.
    pub password: String,
}

impl From<Account> for AccountDTO {
    fn from(val: Account) -> Self {
        AccountDTO {
            id: val.id,
            name: val.name,
            email: val.email,
            password: val.password,
        }
    }
}
