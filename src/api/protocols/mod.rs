pub mod controller;
pub mod http;
