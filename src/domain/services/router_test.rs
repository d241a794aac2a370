use anyhow::Result;
use tempdir::TempDir;

use super::Router;
use crate::domain::models::Route;
use crate::domain::services::AuthGuard;
use crate::domain::services::TokenStore;

fn anonymous_guard(tmp_dir: &TempDir) -> AuthGuard {
    return AuthGuard::new(TokenStore::new(tmp_dir.path().join("auth.json")));
}

#[test]
fn it_redirects_protected_routes_to_login_when_logged_out() -> Result<()> {
    let tmp_dir = TempDir::new("router")?;
    let mut guard = anonymous_guard(&tmp_dir);
    let mut router = Router::default();

    let destination = router.navigate(Route::Library, &mut guard);

    assert_eq!(*destination, Route::Login);
    assert_eq!(router.active, Route::Login);
    return Ok(());
}

#[test]
fn it_activates_protected_routes_with_a_session() -> Result<()> {
    let tmp_dir = TempDir::new("router")?;
    let store = TokenStore::new(tmp_dir.path().join("auth.json"));
    store.set_tokens("token123", "linh")?;
    let mut guard = AuthGuard::new(store);
    let mut router = Router::default();

    let destination = router.navigate(Route::History, &mut guard);

    assert_eq!(*destination, Route::History);
    return Ok(());
}

#[test]
fn it_activates_public_routes_without_a_session() -> Result<()> {
    let tmp_dir = TempDir::new("router")?;
    let mut guard = anonymous_guard(&tmp_dir);
    let mut router = Router::default();

    let destination = router.navigate(Route::Search, &mut guard);

    assert_eq!(*destination, Route::Search);
    return Ok(());
}

#[test]
fn it_rechecks_the_guard_on_every_navigation() -> Result<()> {
    let tmp_dir = TempDir::new("router")?;
    let store = TokenStore::new(tmp_dir.path().join("auth.json"));
    store.set_tokens("token123", "linh")?;
    let mut guard = AuthGuard::new(store);
    let mut router = Router::default();

    assert_eq!(*router.navigate(Route::Library, &mut guard), Route::Library);

    // An in-app logout flips the guard on the next route change.
    guard.store().clear()?;
    assert_eq!(*router.navigate(Route::Library, &mut guard), Route::Login);
    assert!(!guard.logged_in);
    return Ok(());
}
