//! Search dashboard
//!
//! The dashboard owns the list of found repositories and the search state
//! machine:
//!
//! ```text
//! Idle -> Searching -> Success | Failure
//! ```
//!
//! `Success` and `Failure` accept the next search. Every accepted search is
//! identified by a [`SearchTicket`]; only the ticket of the latest search can
//! change the state, so late responses to superseded searches are dropped.
//!
//! The list is written through to the store by a change observer that runs
//! right after each mutation.

use crate::constants::messages;
use crate::error::ExplorerError;
use crate::storage::{KeyValueStore, SearchEntry, SearchHistory};
use explorer_github::{GitHubError, RepositoryApi, split_name_with_owner};
use tracing::{debug, warn};

/// Callback invoked with the full list after every change
pub type ChangeObserver = Box<dyn FnMut(&[SearchEntry]) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardPhase {
    Idle,
    Searching,
    Success,
    Failure,
}

/// Identifies one accepted search
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    pub owner: String,
    pub name: Option<String>,
}

impl SearchTicket {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Outcome of resolving a ticket that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// The repository was appended to the list
    Added(SearchEntry),
    /// A newer search was started; the response was ignored
    Stale,
}

pub struct Dashboard {
    entries: Vec<SearchEntry>,
    error: Option<String>,
    phase: DashboardPhase,
    generation: u64,
    observer: ChangeObserver,
}

impl Dashboard {
    /// Create a dashboard with an initial list and a change observer
    pub fn new(initial: Vec<SearchEntry>, observer: ChangeObserver) -> Self {
        Self {
            entries: initial,
            error: None,
            phase: DashboardPhase::Idle,
            generation: 0,
            observer,
        }
    }

    /// Create a dashboard backed by `history`
    ///
    /// The stored list is loaded once and every later change is saved back.
    /// Save failures are logged and otherwise ignored.
    pub fn with_history<S>(history: SearchHistory<S>) -> Self
    where
        S: KeyValueStore + Send + 'static,
    {
        let initial = history.load();
        Self::new(
            initial,
            Box::new(move |entries: &[SearchEntry]| {
                if let Err(err) = history.save(entries) {
                    warn!(error = %err, "failed to persist search history");
                }
            }),
        )
    }

    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    /// Inline message from the last failed search
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn phase(&self) -> DashboardPhase {
        self.phase
    }

    /// Accept a search and issue its ticket
    ///
    /// Empty input is rejected without a ticket. Otherwise the input is
    /// split into owner and name as typed; no further validation happens.
    pub fn begin_search(&mut self, input: &str) -> Result<SearchTicket, ExplorerError> {
        if input.is_empty() {
            self.fail(messages::EMPTY_INPUT);
            return Err(ExplorerError::Validation(messages::EMPTY_INPUT.to_string()));
        }

        let (owner, name) = split_name_with_owner(input);
        self.generation += 1;
        self.phase = DashboardPhase::Searching;
        debug!(generation = self.generation, %owner, ?name, "search started");

        Ok(SearchTicket {
            generation: self.generation,
            owner,
            name,
        })
    }

    /// Apply the response for `ticket`
    ///
    /// Responses for anything but the latest ticket leave the state untouched.
    pub fn resolve(
        &mut self,
        ticket: &SearchTicket,
        outcome: Result<Option<SearchEntry>, GitHubError>,
    ) -> Result<Resolution, ExplorerError> {
        if ticket.generation != self.generation {
            warn!(
                ticket = ticket.generation,
                latest = self.generation,
                "discarding response for superseded search"
            );
            return Ok(Resolution::Stale);
        }

        match outcome {
            Ok(Some(entry)) => {
                debug!(repository = %entry.name_with_owner, "search succeeded");
                self.entries.push(entry.clone());
                (self.observer)(&self.entries);
                self.error = None;
                self.phase = DashboardPhase::Success;
                Ok(Resolution::Added(entry))
            }
            Ok(None) => {
                debug!(owner = %ticket.owner, "repository not found");
                self.fail(messages::NOT_FOUND);
                Err(ExplorerError::Query(messages::NOT_FOUND.to_string()))
            }
            Err(err) => {
                debug!(owner = %ticket.owner, error = %err, "search failed");
                self.fail(messages::NOT_FOUND);
                Err(ExplorerError::Query(messages::NOT_FOUND.to_string()))
            }
        }
    }

    /// Run one search end to end against `api`
    pub async fn submit<A>(&mut self, api: &A, input: &str) -> Result<Resolution, ExplorerError>
    where
        A: RepositoryApi + ?Sized,
    {
        let ticket = self.begin_search(input)?;
        let outcome = api
            .lookup_repository(&ticket.owner, ticket.name.as_deref())
            .await;
        self.resolve(&ticket, outcome)
    }

    fn fail(&mut self, message: &str) {
        self.error = Some(message.to_string());
        self.phase = DashboardPhase::Failure;
    }
}
