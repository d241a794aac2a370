use anyhow::Result;
use tempdir::TempDir;

use super::TokenStore;

#[test]
fn it_returns_empty_values_without_a_file() -> Result<()> {
    let tmp_dir = TempDir::new("auth")?;
    let store = TokenStore::new(tmp_dir.path().join("auth.json"));

    assert_eq!(store.token(), "");
    assert_eq!(store.username(), "");
    return Ok(());
}

#[test]
fn it_round_trips_tokens() -> Result<()> {
    let tmp_dir = TempDir::new("auth")?;
    let store = TokenStore::new(tmp_dir.path().join("auth.json"));

    store.set_tokens("token123", "linh")?;

    assert_eq!(store.token(), "token123");
    assert_eq!(store.username(), "linh");
    return Ok(());
}

#[test]
fn it_replaces_previous_session_wholesale() -> Result<()> {
    let tmp_dir = TempDir::new("auth")?;
    let store = TokenStore::new(tmp_dir.path().join("auth.json"));

    store.set_tokens("token123", "linh")?;
    store.set_tokens("token456", "minh")?;

    assert_eq!(store.token(), "token456");
    assert_eq!(store.username(), "minh");
    return Ok(());
}

#[test]
fn it_clears_the_session() -> Result<()> {
    let tmp_dir = TempDir::new("auth")?;
    let store = TokenStore::new(tmp_dir.path().join("auth.json"));

    store.set_tokens("token123", "linh")?;
    store.clear()?;

    assert_eq!(store.token(), "");
    assert_eq!(store.username(), "");

    // Clearing an already-empty store is fine.
    store.clear()?;
    return Ok(());
}

#[test]
fn it_creates_missing_parent_directories() -> Result<()> {
    let tmp_dir = TempDir::new("auth")?;
    let store = TokenStore::new(tmp_dir.path().join("nested/dir/auth.json"));

    store.set_tokens("token123", "linh")?;

    assert_eq!(store.token(), "token123");
    return Ok(());
}
