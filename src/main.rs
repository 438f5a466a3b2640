use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use explorer::commands::*;
use explorer::{Config, ConfigOverrides, constants};
use std::{env, path::PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "explorer")]
#[command(about = "Explore GitHub repositories and keep a list of past searches")]
#[command(version)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command
#[derive(Args)]
struct ConfigArgs {
    /// Configuration file path (default: explorer.yaml when present)
    #[arg(short, long)]
    config: Option<String>,

    /// GitHub token (falls back to GITHUB_TOKEN, then the config file)
    #[arg(long)]
    token: Option<String>,

    /// GraphQL endpoint
    #[arg(long)]
    endpoint: Option<String>,

    /// Local store file
    #[arg(long)]
    storage: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Look up repositories by owner/name and add them to the list
    Search {
        /// Repositories to look up, e.g. facebook/react
        #[arg(value_name = "OWNER/NAME", required = true)]
        repos: Vec<String>,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// List previously searched repositories
    Ls {
        /// Output in JSON format for machine consumption
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Show stars, forks and recent issues of a repository
    Show {
        /// Repository, e.g. facebook/react
        #[arg(value_name = "OWNER/NAME")]
        repo: String,

        #[command(flatten)]
        config: ConfigArgs,
    },

    /// Open a page by path: / or /repository/<owner>/<name>
    Open {
        #[arg(value_name = "PATH", default_value = "/")]
        path: String,

        #[command(flatten)]
        config: ConfigArgs,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build_context(args: ConfigArgs) -> Result<CommandContext> {
    let overrides = ConfigOverrides::new()
        .with_token(args.token)
        .with_env_token(
            env::var(constants::github::TOKEN_ENV)
                .ok()
                .filter(|token| !token.is_empty()),
        )
        .with_endpoint(args.endpoint)
        .with_storage(args.storage);

    let config = Config::load_or_default(args.config.as_deref())?.apply_overrides(overrides)?;
    Ok(CommandContext::new(config))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Search { repos, config } => {
            let context = build_context(config)?;
            SearchCommand::new(repos).execute(&context).await?;
        }
        Commands::Ls { json, config } => {
            let context = build_context(config)?;
            ListCommand { json }.execute(&context).await?;
        }
        Commands::Show { repo, config } => {
            let context = build_context(config)?;
            ShowCommand::new(repo).execute(&context).await?;
        }
        Commands::Open { path, config } => {
            let context = build_context(config)?;
            OpenCommand { path }.execute(&context).await?;
        }
    }

    Ok(())
}
