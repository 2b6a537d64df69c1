#[allow(clippy::module_inception)]
mod agent;
pub use agent::*;

mod agent_output;
pub use agent_output::*;

mod agent_result;
pub use agent_result::*;

mod agent_step;
pub use agent_step::*;

mod error;
pub use error::*;

mod executor;
pub use executor::*;

mod react;
pub use react::*;

#[cfg(test)]
pub(crate) mod testing;
