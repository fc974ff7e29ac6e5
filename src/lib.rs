pub mod analyzers;
pub mod config;
pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod output;
pub mod parser;
