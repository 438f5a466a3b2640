//! Lifecycle state of a single query

/// Transient state of one query, owned by the view that issued it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryState<T> {
    Idle,
    Loading,
    Success(T),
    Error(String),
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, QueryState::Loading)
    }

    /// Resolved data, if the query succeeded
    pub fn data(&self) -> Option<&T> {
        match self {
            QueryState::Success(data) => Some(data),
            _ => None,
        }
    }

    /// Error message, if the query failed
    pub fn error(&self) -> Option<&str> {
        match self {
            QueryState::Error(message) => Some(message),
            _ => None,
        }
    }
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        QueryState::Idle
    }
}
