use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub logging: LoggingConfig,
    pub server: ServerConfig,
    pub argon2: Argon2Config,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: String,
    /// Export spans to an OTLP collector over gRPC.
    pub otlp: bool,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Argon2id cost parameters, `memory_cost` in KiB.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Argon2Config {
    pub memory_cost: u32,
    pub time_cost: u32,
    pub parallelism: u32,
}

impl AppConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(AppConfig {
                service: ServiceConfig {
                    name: "signup-actix".to_string(),
                },
                logging: LoggingConfig {
                    level: "info".to_string(),
                    otlp: false,
                },
                server: ServerConfig {
                    host: "127.0.0.1".to_string(),
                    port: 8080,
                },
                argon2: Argon2Config {
                    memory_cost: argon2::Params::DEFAULT_M_COST,
                    time_cost: argon2::Params::DEFAULT_T_COST,
                    parallelism: argon2::Params::DEFAULT_P_COST,
                },
            }))
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file(format!(
                "config/{}.toml",
                std::env::var("RUST_ENV").unwrap_or("development".to_string())
            )))
            .merge(Env::prefixed("APP_").split("__"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;

    #[test]
    fn test_environment_overrides_files() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file(
                "config/default.toml",
                r#"
                [server]
                port = 9000

                [argon2]
                time_cost = 3
                "#,
            )?;
            jail.set_env("APP_SERVER__HOST", "0.0.0.0");
            jail.set_env("APP_LOGGING__OTLP", "true");

            let config = AppConfig::load()?;

            assert_eq!(config.server.host, "0.0.0.0");
            assert_eq!(config.server.port, 9000);
            assert!(config.logging.otlp);
            assert_eq!(config.argon2.time_cost, 3);
            assert_eq!(config.argon2.memory_cost, argon2::Params::DEFAULT_M_COST);
            assert_eq!(config.service.name, "signup-actix");

            Ok(())
        });
    }

    #[test]
    fn test_environment_file_overrides_default_file() {
        Jail::expect_with(|jail| {
            jail.create_dir("config")?;
            jail.create_file(
                "config/default.toml",
                r#"
                [service]
                name = "from-default"

                [server]
                port = 9000
                "#,
            )?;
            jail.create_file(
                "config/staging.toml",
                r#"
                [server]
                port = 7000

                [logging]
                level = "debug"
                "#,
            )?;
            jail.set_env("RUST_ENV", "staging");

            let config = AppConfig::load()?;

            assert_eq!(config.server.port, 7000);
            assert_eq!(config.logging.level, "debug");
            assert_eq!(config.service.name, "from-default");

            jail.set_env("APP_SERVER__PORT", "6000");

            assert_eq!(AppConfig::load()?.server.port, 6000);

            Ok(())
        });
    }
}
