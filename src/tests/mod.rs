
use std::sync::Arc;

use serde::Deserialize;

use crate::{config::AppConfig, container::Container};

use rstest::*;

pub struct TestContext {
    pub container: Arc<Container>,
}

#[fixture]
fn context() -> TestContext {
    let mut config = AppConfig::load().unwrap();

    // keep hashing cheap, the parameters do not change behavior
    config.argon2.memory_cost = 1024;
    config.argon2.time_cost = 1;

    let container = Arc::new(Container::new(&config.argon2).unwrap());

    TestContext { container }
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct Error {
    name: String,
    message: String,
    code: u16,
}
