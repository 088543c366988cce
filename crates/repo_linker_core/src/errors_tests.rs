use super::*;

#[test]
fn test_owner_mismatch_message() {
    let error = Error::OwnerMismatch {
        config_owner: "acme".to_string(),
        repository_owner: "other-org".to_string(),
    };

    let message = error.to_string();

    assert!(message.contains("(acme)"));
    assert!(message.contains("(other-org)"));
    assert!(message.contains("do not match"));
}

#[test]
fn test_config_errors_pass_through_unchanged() {
    let error = Error::Config(config_manager::ConfigurationError::MissingSource);

    assert_eq!(error.to_string(), "No configuration source specified");
}

#[test]
fn test_reference_errors_pass_through_unchanged() {
    let parse_error = github_client::repo_reference::parse("not a reference").unwrap_err();
    let expected = parse_error.to_string();

    let error = Error::Reference(parse_error);

    assert_eq!(error.to_string(), expected);
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Error>();
}
