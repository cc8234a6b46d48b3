pub mod add_account;
pub mod email_validator;
pub mod encrypter;
