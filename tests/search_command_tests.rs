//! Search command tests

mod common;

use common::FakeApi;
use explorer::commands::SearchCommand;
use explorer::constants::messages;
use explorer::{FileStore, SearchHistory};
use tempfile::TempDir;

#[tokio::test]
async fn test_search_continues_after_failures() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    let api = FakeApi::new()
        .with_repository("facebook/react")
        .with_repository("rust-lang/rust");

    let command = SearchCommand::new(vec![
        "facebook/react".to_string(),
        String::new(),
        "nobody/nothing".to_string(),
        "rust-lang/rust".to_string(),
    ]);
    let dashboard = command
        .run(&api, SearchHistory::new(FileStore::new(&path)))
        .await;

    assert_eq!(dashboard.entries().len(), 2);
    assert!(dashboard.error_message().is_none());
    // The empty input never reached the API
    assert_eq!(api.calls(), 3);

    let stored = SearchHistory::new(FileStore::new(&path)).load();
    assert_eq!(stored, dashboard.entries());
}

#[tokio::test]
async fn test_search_ending_in_failure_keeps_message() {
    let dir = TempDir::new().unwrap();
    let api = FakeApi::new().with_repository("facebook/react");

    let command = SearchCommand::new(vec![
        "facebook/react".to_string(),
        "facebook/nothing".to_string(),
    ]);
    let dashboard = command
        .run(&api, SearchHistory::new(FileStore::new(dir.path().join("store.json"))))
        .await;

    assert_eq!(dashboard.entries().len(), 1);
    assert_eq!(dashboard.error_message(), Some(messages::NOT_FOUND));
}
