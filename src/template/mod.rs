mod prompt_template;
pub use prompt_template::*;

mod error;
pub use error::*;
