use super::*;
use std::io::Write;

#[tokio::test]
async fn test_execute_fails_for_missing_config() {
    let dir = tempfile::tempdir().expect("temp dir");
    let missing = dir.path().join("non-existent.json");

    let args = AddArgs {
        repo: "acme/widgets".to_string(),
        config: missing.to_str().unwrap().to_string(),
        token: "ghp_token".to_string(),
    };

    let result = execute(&args).await;

    assert!(matches!(
        result,
        Err(Error::Config(
            config_manager::ConfigurationError::NotFound { .. }
        ))
    ));
}

#[tokio::test]
async fn test_execute_fails_for_blank_token() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(
        serde_json::json!({
            "owner": "acme",
            "installations": [{ "id": 42, "comment": "bot" }]
        })
        .to_string()
        .as_bytes(),
    )
    .expect("write config");

    let args = AddArgs {
        repo: "acme/widgets".to_string(),
        config: file.path().to_str().unwrap().to_string(),
        token: "   ".to_string(),
    };

    let result = execute(&args).await;

    assert!(matches!(
        result,
        Err(Error::GitHub(github_client::Error::AuthError(_)))
    ));
}
