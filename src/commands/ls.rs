//! List command implementation

use super::{Command, CommandContext};
use crate::render;
use anyhow::Result;
use async_trait::async_trait;

/// List command for displaying the searched repositories
pub struct ListCommand {
    /// Output in JSON format
    pub json: bool,
}

#[async_trait]
impl Command for ListCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let entries = context.history().load();

        if self.json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
            return Ok(());
        }

        print!("{}", render::render_dashboard(&entries, None));
        Ok(())
    }
}
