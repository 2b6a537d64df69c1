mod serper;
pub use serper::*;
