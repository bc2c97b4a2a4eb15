//! Configuration management for Transformer DB
//!
//! - **settings**: TOML config file (server address, window, log level)

pub mod settings;

pub use settings::Config;
