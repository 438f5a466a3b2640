//! Utility modules for common functionality

pub mod filesystem;

// Re-export commonly used functions
pub use filesystem::ensure_parent_exists;
