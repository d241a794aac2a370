use anyhow::Result;
use tempdir::TempDir;

use super::AuthGuard;
use crate::domain::services::TokenStore;

#[test]
fn it_starts_logged_out_without_a_session() -> Result<()> {
    let tmp_dir = TempDir::new("auth")?;
    let guard = AuthGuard::new(TokenStore::new(tmp_dir.path().join("auth.json")));

    assert!(!guard.logged_in);
    assert!(!guard.is_authenticated());
    assert_eq!(guard.username, "");
    return Ok(());
}

#[test]
fn it_reflects_a_stored_session() -> Result<()> {
    let tmp_dir = TempDir::new("auth")?;
    let store = TokenStore::new(tmp_dir.path().join("auth.json"));
    store.set_tokens("token123", "linh")?;

    let guard = AuthGuard::new(store);

    assert!(guard.logged_in);
    assert_eq!(guard.username, "linh");
    return Ok(());
}

#[test]
fn it_flips_state_after_logout() -> Result<()> {
    let tmp_dir = TempDir::new("auth")?;
    let store = TokenStore::new(tmp_dir.path().join("auth.json"));
    store.set_tokens("token123", "linh")?;

    let mut guard = AuthGuard::new(store);
    assert!(guard.logged_in);

    guard.store().clear()?;
    assert!(!guard.check_auth());
    assert!(!guard.logged_in);
    assert_eq!(guard.username, "");
    return Ok(());
}

#[test]
fn it_picks_up_logins_between_checks() -> Result<()> {
    let tmp_dir = TempDir::new("auth")?;
    let store = TokenStore::new(tmp_dir.path().join("auth.json"));

    let mut guard = AuthGuard::new(store);
    assert!(!guard.logged_in);

    guard.store().set_tokens("token123", "minh")?;
    assert!(guard.check_auth());
    assert!(guard.logged_in);
    assert_eq!(guard.username, "minh");
    return Ok(());
}
