//! Search command implementation

use super::{Command, CommandContext};
use crate::dashboard::{Dashboard, Resolution};
use crate::render;
use crate::storage::{KeyValueStore, SearchHistory};
use anyhow::Result;
use async_trait::async_trait;
use colored::*;
use explorer_github::RepositoryApi;

/// Search command: look up each `owner/name` and add it to the list
pub struct SearchCommand {
    /// Inputs in submission order
    pub inputs: Vec<String>,
}

impl SearchCommand {
    pub fn new(inputs: Vec<String>) -> Self {
        Self { inputs }
    }

    /// Submit every input through a dashboard backed by `history`
    ///
    /// Failed lookups print their inline message and do not stop the
    /// remaining inputs.
    pub async fn run<A, S>(&self, api: &A, history: SearchHistory<S>) -> Dashboard
    where
        A: RepositoryApi + ?Sized,
        S: KeyValueStore + Send + 'static,
    {
        let mut dashboard = Dashboard::with_history(history);

        for input in &self.inputs {
            match dashboard.submit(api, input).await {
                Ok(Resolution::Added(entry)) => {
                    println!("{} {}", "Added".green(), entry.name_with_owner.bold());
                }
                Ok(Resolution::Stale) => {}
                Err(err) => {
                    println!("{} {}", format!("{input}:").bold(), err.to_string().red());
                }
            }
        }

        dashboard
    }

    /// Dashboard page after all inputs were submitted
    pub fn summary(dashboard: &Dashboard) -> String {
        render::render_dashboard(dashboard.entries(), dashboard.error_message())
    }
}

#[async_trait]
impl Command for SearchCommand {
    async fn execute(&self, context: &CommandContext) -> Result<()> {
        let client = context.config.client()?;
        let dashboard = self.run(&client, context.history()).await;

        println!();
        print!("{}", Self::summary(&dashboard));
        Ok(())
    }
}
