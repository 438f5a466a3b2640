//! GraphQL client tests against a mock endpoint

use explorer_github::{GitHubClient, GitHubError, RepositoryApi};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> GitHubClient {
    GitHubClient::new(format!("{}/graphql", server.uri()), "test-token")
}

#[tokio::test]
async fn test_lookup_sends_bearer_token_and_variables() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(header("authorization", "Bearer test-token"))
        .and(body_partial_json(json!({
            "variables": { "owner": "facebook", "name": "react" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "repository": {
                    "nameWithOwner": "facebook/react",
                    "description": "The library for web and native user interfaces.",
                    "owner": { "login": "facebook", "avatarUrl": "https://avatars.example/fb" }
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let repo = client
        .lookup_repository("facebook", Some("react"))
        .await
        .unwrap()
        .expect("repository should be present");

    assert_eq!(repo.name_with_owner, "facebook/react");
    assert_eq!(repo.owner.login, "facebook");
}

#[tokio::test]
async fn test_lookup_null_repository_is_none() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "data": { "repository": null } })),
        )
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let repo = client.lookup_repository("nobody", Some("nothing")).await.unwrap();
    assert!(repo.is_none());
}

#[tokio::test]
async fn test_graphql_errors_are_reported() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "repository": null },
            "errors": [{
                "type": "NOT_FOUND",
                "message": "Could not resolve to a Repository with the name 'nobody/nothing'."
            }]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .lookup_repository("nobody", Some("nothing"))
        .await
        .unwrap_err();

    match err {
        GitHubError::GraphQl(messages) => {
            assert_eq!(messages.len(), 1);
            assert!(messages[0].contains("Could not resolve"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_missing_name_is_sent_as_null() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({ "variables": { "owner": "facebook", "name": null } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "errors": [{ "message": "Variable $name of type String! was provided invalid value" }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let result = client.lookup_repository("facebook", None).await;
    assert!(matches!(result, Err(GitHubError::GraphQl(_))));
}

#[tokio::test]
async fn test_unauthorized_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Bad credentials"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .lookup_repository("facebook", Some("react"))
        .await
        .unwrap_err();

    assert!(err.is_unauthorized());
    assert!(err.to_string().contains("Bad credentials"));
}

#[tokio::test]
async fn test_invalid_json_is_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .lookup_repository("facebook", Some("react"))
        .await
        .unwrap_err();
    assert!(matches!(err, GitHubError::Decode(_)));
}

#[tokio::test]
async fn test_response_without_data_is_missing_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client
        .lookup_repository("facebook", Some("react"))
        .await
        .unwrap_err();
    assert!(matches!(err, GitHubError::MissingData));
}

#[tokio::test]
async fn test_repository_with_issues_keeps_server_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "repository": {
                    "id": "R_kgDO",
                    "nameWithOwner": "facebook/react",
                    "description": "UI library",
                    "stargazers": { "totalCount": 220000 },
                    "forkCount": 45000,
                    "owner": { "login": "facebook", "avatarUrl": "https://avatars.example/fb" },
                    "issues": {
                        "totalCount": 900,
                        "nodes": [
                            { "id": "I_3", "title": "Third", "url": "https://github.com/facebook/react/issues/3", "author": { "login": "c" } },
                            { "id": "I_1", "title": "First", "url": "https://github.com/facebook/react/issues/1", "author": { "login": "a" } }
                        ]
                    }
                }
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let detail = client
        .repository_with_issues("facebook", Some("react"))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(detail.stargazers.total_count, 220000);
    assert_eq!(detail.fork_count, 45000);
    assert_eq!(detail.issues.total_count, 900);
    let titles: Vec<_> = detail.issues.nodes.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(titles, vec!["Third", "First"]);
}
