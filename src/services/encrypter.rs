use crate::config::Argon2Config;
use crate::domain::{
    error::{AppError, AppResult},
    services::encrypter::Encrypter,
};

use actix_web::rt::task;

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};

use async_trait::async_trait;

pub struct Argon2Encrypter {
    argon2: Argon2<'static>,
}

impl Argon2Encrypter {
    pub fn new(config: &Argon2Config) -> Result<Self, argon2::Error> {
        let params = Params::new(
            config.memory_cost,
            config.time_cost,
            config.parallelism,
            None,
        )?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }
}

#[async_trait]
impl Encrypter for Argon2Encrypter {
    async fn encrypt(&self, plaintext: &str) -> AppResult<String> {
        let argon2 = self.argon2.clone();
        let plaintext = plaintext.to_owned();

        // hashing is CPU bound, keep it off the executor threads
        task::spawn_blocking(move || encrypt_password(&argon2, &plaintext))
            .await
            .map_err(|err| AppError::ServerError().trace(&err.to_string()))?
    }
}

pub fn encrypt_password(argon2: &Argon2<'_>, password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    Ok(argon2
        .hash_password(password.as_bytes(), &salt)?
        .to_string())
}


#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{PasswordHash, PasswordVerifier};
    use rstest::*;

    #[fixture]
    fn config() -> Argon2Config {
        Argon2Config {
            memory_cost: 1024,
            time_cost: 1,
            parallelism: 1,
        }
    }

    #[fixture]
    fn encrypter(config: Argon2Config) -> Argon2Encrypter {
        Argon2Encrypter::new(&config).unwrap()
    }

    #[rstest]
    #[tokio::test]
    async fn test_hash_verifies_against_plaintext(encrypter: Argon2Encrypter) {
        let hash = encrypter.encrypt("any_p@assw0rd").await.unwrap();

        assert_ne!(hash, "any_p@assw0rd");

        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(
            Argon2::default()
                .verify_password(b"any_p@assw0rd", &parsed)
                .is_ok()
        );
        assert!(
            Argon2::default()
                .verify_password(b"other_p@assw0rd", &parsed)
                .is_err()
        );
    }

    #[rstest]
    #[tokio::test]
    async fn test_hashes_are_salted(encrypter: Argon2Encrypter) {
        let first = encrypter.encrypt("any_p@assw0rd").await.unwrap();
        let second = encrypter.encrypt("any_p@assw0rd").await.unwrap();

        assert_ne!(first, second);
    }

    #[rstest]
    fn test_invalid_parameters_are_rejected(mut config: Argon2Config) {
        config.parallelism = 0;

        assert!(Argon2Encrypter::new(&config).is_err());
    }
}
