use taskdeck::token::{TokenStore, TOKEN_ENV_VAR};

// Environment handling and file handling are exercised in one test because
// the override variable is process-wide state.
#[test]
fn test_token_load_precedence() {
    std::env::remove_var(TOKEN_ENV_VAR);

    let dir = tempfile::tempdir().unwrap();
    let store = TokenStore::new(dir.path().join("auth_token"));

    // Missing file is not an error
    assert_eq!(store.load().unwrap(), None);

    // Save and load round trip, with whitespace trimmed
    store.save("  secret-token\n").unwrap();
    assert_eq!(store.load().unwrap(), Some("secret-token".to_string()));

    // A whitespace-only file counts as no token
    std::fs::write(store.path(), "   \n").unwrap();
    assert_eq!(store.load().unwrap(), None);

    // The environment variable wins over the file
    std::fs::write(store.path(), "file-token").unwrap();
    std::env::set_var(TOKEN_ENV_VAR, "env-token");
    assert_eq!(store.load().unwrap(), Some("env-token".to_string()));

    // An empty variable falls back to the file
    std::env::set_var(TOKEN_ENV_VAR, "");
    assert_eq!(store.load().unwrap(), Some("file-token".to_string()));

    std::env::remove_var(TOKEN_ENV_VAR);
}

#[test]
fn test_save_creates_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let store = TokenStore::new(dir.path().join("nested").join("auth_token"));

    store.save("tok").unwrap();
    assert!(store.path().exists());
}
