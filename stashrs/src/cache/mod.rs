#[allow(clippy::module_inception)]
pub mod cache;
pub mod coercion;
pub mod error;
pub mod value;
