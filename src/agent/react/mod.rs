#[allow(clippy::module_inception)]
mod agent;
pub use agent::*;

mod builder;
pub use builder::*;

mod prompt;
pub use prompt::*;
