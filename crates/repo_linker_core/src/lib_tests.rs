//! Unit tests for the linking workflow.

use super::*;
use std::io::Write;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TEST_TOKEN: &str = "ghp_testtoken1234567890";

fn client_for(mock_server: &MockServer) -> GitHubClient {
    let octocrab = octocrab::Octocrab::builder()
        .base_uri(mock_server.uri())
        .unwrap()
        .personal_token(TEST_TOKEN.to_string())
        .build()
        .unwrap();
    GitHubClient::new(octocrab)
}

fn write_config(contents: &serde_json::Value) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.to_string().as_bytes())
        .expect("write config");
    file
}

fn acme_config() -> serde_json::Value {
    json!({
        "owner": "acme",
        "installations": [
            { "id": 42, "comment": "bot" }
        ]
    })
}

async fn mount_user_and_repo(mock_server: &MockServer, owner: &str, repo: &str, repo_id: u64) {
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "login": "testuser"
        })))
        .mount(mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/repos/{owner}/{repo}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": repo_id,
            "node_id": "MDEwOlJlcG9zaXRvcnkx",
            "name": repo,
            "full_name": format!("{owner}/{repo}"),
            "private": false,
            "url": format!("https://api.github.com/repos/{owner}/{repo}")
        })))
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_add_links_each_installation() {
    let mock_server = MockServer::start().await;
    mount_user_and_repo(&mock_server, "acme", "widgets", 1234).await;

    Mock::given(method("PUT"))
        .and(path("/user/installations/42/repositories/1234"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config_file = write_config(&acme_config());
    let request = AddRequest {
        repository: "acme/widgets".to_string(),
        config_source: config_file.path().to_str().unwrap().to_string(),
        token: TEST_TOKEN.to_string(),
    };

    let report = add_repository_with_client(&request, &client_for(&mock_server))
        .await
        .expect("add succeeds");

    assert_eq!(report.owner, "acme");
    assert_eq!(report.repository, "widgets");
    assert_eq!(report.repository_id, 1234);
    assert_eq!(report.authenticated_login, "testuser");
    assert_eq!(report.installations.len(), 1);
    assert_eq!(report.installations[0].id, 42);
    assert_eq!(
        report.settings_url,
        "https://github.com/acme/widgets/settings/installations"
    );
}

#[tokio::test]
async fn test_add_links_every_installation_in_the_batch() {
    let mock_server = MockServer::start().await;
    mount_user_and_repo(&mock_server, "acme", "widgets", 1234).await;

    for installation_id in [42, 43, 44] {
        Mock::given(method("PUT"))
            .and(path(format!(
                "/user/installations/{installation_id}/repositories/1234"
            )))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;
    }

    let config_file = write_config(&json!({
        "owner": "acme",
        "installations": [
            { "id": 42, "comment": "bot" },
            { "id": 43, "comment": "ci" },
            { "id": 44, "comment": "deploy" }
        ]
    }));
    let request = AddRequest {
        repository: "acme/widgets".to_string(),
        config_source: config_file.path().to_str().unwrap().to_string(),
        token: TEST_TOKEN.to_string(),
    };

    let report = add_repository_with_client(&request, &client_for(&mock_server))
        .await
        .expect("add succeeds");

    assert_eq!(
        report
            .installations
            .iter()
            .map(|i| i.id)
            .collect::<Vec<_>>(),
        vec![42, 43, 44]
    );
}

#[tokio::test]
async fn test_add_fails_on_owner_mismatch_before_any_api_call() {
    let mock_server = MockServer::start().await;

    // Nothing may reach the API when the owner gate fails.
    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config_file = write_config(&acme_config());
    let request = AddRequest {
        repository: "other-org/widgets".to_string(),
        config_source: config_file.path().to_str().unwrap().to_string(),
        token: TEST_TOKEN.to_string(),
    };

    let result = add_repository_with_client(&request, &client_for(&mock_server)).await;

    match result {
        Err(Error::OwnerMismatch {
            config_owner,
            repository_owner,
        }) => {
            assert_eq!(config_owner, "acme");
            assert_eq!(repository_owner, "other-org");
        }
        other => panic!("expected OwnerMismatch, got {:?}", other),
    }

    mock_server.verify().await;
}

#[tokio::test]
async fn test_add_fails_when_a_link_request_fails() {
    let mock_server = MockServer::start().await;
    mount_user_and_repo(&mock_server, "acme", "widgets", 1234).await;

    Mock::given(method("PUT"))
        .and(path("/user/installations/42/repositories/1234"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "message": "Not Found",
            "documentation_url": "https://docs.github.com/rest"
        })))
        .mount(&mock_server)
        .await;

    let config_file = write_config(&acme_config());
    let request = AddRequest {
        repository: "acme/widgets".to_string(),
        config_source: config_file.path().to_str().unwrap().to_string(),
        token: TEST_TOKEN.to_string(),
    };

    let result = add_repository_with_client(&request, &client_for(&mock_server)).await;

    assert!(matches!(
        result,
        Err(Error::GitHub(github_client::Error::InstallationLink {
            installation_id: 42
        }))
    ));
}

#[tokio::test]
async fn test_add_fails_on_invalid_config_before_any_api_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let config_file = write_config(&json!({ "owner": "acme" }));
    let request = AddRequest {
        repository: "acme/widgets".to_string(),
        config_source: config_file.path().to_str().unwrap().to_string(),
        token: TEST_TOKEN.to_string(),
    };

    let result = add_repository_with_client(&request, &client_for(&mock_server)).await;

    assert!(matches!(
        result,
        Err(Error::Config(
            config_manager::ConfigurationError::Invalid { .. }
        ))
    ));

    mock_server.verify().await;
}

#[tokio::test]
async fn test_add_fails_on_unparseable_reference() {
    let mock_server = MockServer::start().await;

    let config_file = write_config(&acme_config());
    let request = AddRequest {
        repository: "https://github.com/acme".to_string(),
        config_source: config_file.path().to_str().unwrap().to_string(),
        token: TEST_TOKEN.to_string(),
    };

    let result = add_repository_with_client(&request, &client_for(&mock_server)).await;

    assert!(matches!(result, Err(Error::Reference(_))));
}

#[tokio::test]
async fn test_add_with_blank_token_fails_without_network() {
    let config_file = write_config(&acme_config());
    let request = AddRequest {
        repository: "acme/widgets".to_string(),
        config_source: config_file.path().to_str().unwrap().to_string(),
        token: "".to_string(),
    };

    let result = add_repository_to_installations(request).await;

    assert!(matches!(
        result,
        Err(Error::GitHub(github_client::Error::AuthError(_)))
    ));
}

#[tokio::test]
async fn test_validate_configuration_success() {
    let config_file = write_config(&acme_config());

    let description = validate_configuration(config_file.path().to_str().unwrap())
        .await
        .expect("validation succeeds");

    assert!(description.starts_with("local file: "));
}

#[tokio::test]
async fn test_validate_configuration_reports_all_errors() {
    let config_file = write_config(&json!({}));

    let message = validate_configuration(config_file.path().to_str().unwrap())
        .await
        .unwrap_err()
        .to_string();

    assert!(message.contains("owner"));
    assert!(message.contains("installations"));
}
