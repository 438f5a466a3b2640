//! Show command implementation

use super::{Command, CommandContext};
use crate::detail::RepositoryView;
use crate::render;
use anyhow::Result;
use async_trait::async_trait;
use explorer_github::split_name_with_owner;

/// Show command: render the repository page for `owner/name`
pub struct ShowCommand {
    pub repository: String,
}

impl ShowCommand {
    pub fn new(repository: impl Into<String>) -> Self {
        Self {
            repository: repository.into(),
        }
    }

    /// The view this command loads
    pub fn view(&self) -> RepositoryView {
        let (owner, name) = split_name_with_owner(&self.repository);
        RepositoryView::new(owner, name)
    }
}

#[async_trait]
impl Command for ShowCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let client = context.config.client()?;
        let mut view = self.view();

        print!("{}", render::render_detail(view.state()));
        let state = view.load(&client).await;
        print!("{}", render::render_detail(state));
        Ok(())
    }
}
