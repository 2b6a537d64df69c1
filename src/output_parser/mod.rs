mod react_parser;
pub use react_parser::*;

mod error;
pub use error::*;
