#[allow(clippy::module_inception)]
pub mod client;
pub mod config;
pub mod error;
pub mod key;
