//! Configuration management module

pub mod builder;
pub mod loader;
pub mod validation;

pub use builder::ConfigOverrides;
pub use loader::Config;
