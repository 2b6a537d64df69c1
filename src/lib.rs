pub mod agent;
pub mod config;
pub mod llm;
pub mod output_parser;
pub mod render;
pub mod server;
pub mod template;
pub mod tools;
