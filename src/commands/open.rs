//! Open command implementation

use super::{Command, CommandContext, ListCommand, ShowCommand};
use crate::router::Route;
use anyhow::Result;
use async_trait::async_trait;

/// Open command: resolve a path and run the page it names
pub struct OpenCommand {
    pub path: String,
}

#[async_trait]
impl Command for OpenCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        match Route::parse(&self.path)? {
            Route::Dashboard => ListCommand { json: false }.execute(context).await,
            Route::Repository { owner, name } => {
                let repository = match name {
                    Some(name) => format!("{owner}/{name}"),
                    None => owner,
                };
                ShowCommand::new(repository).execute(context).await
            }
        }
    }
}
