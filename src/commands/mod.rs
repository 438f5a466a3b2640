//! Command implementations

pub mod base;
pub mod ls;
pub mod open;
pub mod search;
pub mod show;

pub use base::{Command, CommandContext};
pub use ls::ListCommand;
pub use open::OpenCommand;
pub use search::SearchCommand;
pub use show::ShowCommand;
