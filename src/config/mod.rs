#[allow(clippy::module_inception)]
mod config;
pub use config::*;

mod error;
pub use error::*;
