/// An account as produced by the signup use case. `password` holds the hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddAccountInput {
    pub name: String,
    pub email: String,
    pub password: String,
}
