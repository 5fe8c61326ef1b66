use taskdeck::validation::*;

#[test]
fn test_username_length_rule() {
    assert!(validate_username("").is_some());
    assert!(validate_username("ab").is_some());
    assert!(validate_username("abc").is_none());
}

#[test]
fn test_email_shape_rule() {
    assert!(validate_email("alice@example.com").is_none());
    assert!(validate_email("a@b.co").is_none());

    assert!(validate_email("").is_some());
    assert!(validate_email("alice").is_some());
    assert!(validate_email("@example.com").is_some());
    assert!(validate_email("alice@").is_some());
    assert!(validate_email("alice@example").is_some());
    assert!(validate_email("alice@.com").is_some());
    assert!(validate_email("alice@example.").is_some());
    assert!(validate_email("a@b@c.com").is_some());
}

#[test]
fn test_password_length_rule() {
    assert!(validate_password("short").is_some());
    assert!(validate_password("longenough").is_none());
}

#[test]
fn test_confirmation_must_match() {
    assert!(validate_confirmation("secret11", "secret11").is_none());
    assert_eq!(
        validate_confirmation("secret11", "secret12").as_deref(),
        Some("Passwords don't match")
    );
}

#[test]
fn test_validate_form_collects_every_failure() {
    let errors = validate_form("ab", "not-an-email", "short", "other");
    assert!(errors.username.is_some());
    assert!(errors.email.is_some());
    assert!(errors.password.is_some());
    assert!(errors.confirmation.is_some());
    assert!(!errors.is_empty());
}

#[test]
fn test_valid_draft_has_no_errors() {
    let errors = validate_form("alice", "alice@example.com", "hunter2hunter2", "hunter2hunter2");
    assert!(errors.is_empty());
}
