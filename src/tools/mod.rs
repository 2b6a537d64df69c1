mod tool;
pub use tool::*;

mod search;
pub use search::*;

mod error;
pub use error::*;
