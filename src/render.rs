//! Plain-text layouts for the dashboard and repository pages

use crate::constants::messages;
use crate::detail::visible_issues;
use crate::router::Route;
use crate::state::QueryState;
use crate::storage::SearchEntry;
use colored::*;
use explorer_github::RepositoryDetail;
use std::fmt::Write;

/// Render the search list with an optional inline error
pub fn render_dashboard(entries: &[SearchEntry], error: Option<&str>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", messages::TITLE.bold());
    let _ = writeln!(out);

    if let Some(error) = error {
        let _ = writeln!(out, "{}", error.red());
        let _ = writeln!(out);
    }

    out.push_str(&render_entries(entries));
    out
}

/// Render each entry with its description and page route
pub fn render_entries(entries: &[SearchEntry]) -> String {
    let mut out = String::new();

    if entries.is_empty() {
        let _ = writeln!(out, "{}", "No repositories searched yet".yellow());
        return out;
    }

    for entry in entries {
        let _ = writeln!(out, "{} {}", "•".blue(), entry.name_with_owner.bold());
        if let Some(description) = &entry.description {
            let _ = writeln!(out, "  {}", description);
        }
        let _ = writeln!(out, "  Owner: {} ({})", entry.owner.login, entry.owner.avatar_url);
        let _ = writeln!(
            out,
            "  {} {}",
            "›".cyan(),
            Route::repository(&entry.name_with_owner)
        );
        let _ = writeln!(out);
    }

    let _ = writeln!(
        out,
        "{}",
        format!("Total: {} repositories", entries.len()).green()
    );
    out
}

/// Render the repository page for its current state
pub fn render_detail(state: &QueryState<RepositoryDetail>) -> String {
    match state {
        QueryState::Idle | QueryState::Loading => format!("{}\n", messages::LOADING),
        QueryState::Error(message) => format!("{}\n", message.red()),
        QueryState::Success(repository) => render_repository(repository),
    }
}

fn render_repository(repository: &RepositoryDetail) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "‹ {} ({})", messages::BACK, Route::Dashboard);
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{} {}",
        repository.name_with_owner.bold(),
        format!("by {}", repository.owner.login).dimmed()
    );
    let _ = writeln!(out, "  Avatar: {}", repository.owner.avatar_url);
    if let Some(description) = &repository.description {
        let _ = writeln!(out, "  {}", description);
    }
    let _ = writeln!(out);

    let _ = writeln!(
        out,
        "  {} Stars   {} Forks   {} Issues",
        repository.stargazers.total_count.to_string().bold(),
        repository.fork_count.to_string().bold(),
        repository.issues.total_count.to_string().bold()
    );
    let _ = writeln!(out);

    for issue in visible_issues(repository) {
        let _ = writeln!(out, "{} {}", "•".blue(), issue.title.bold());
        let _ = writeln!(out, "  {}", issue.author_login());
        let _ = writeln!(out, "  {}", issue.url.underline());
    }

    out
}
