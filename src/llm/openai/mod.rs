mod request;

mod client;
pub use client::*;

mod builder;
pub use builder::*;
