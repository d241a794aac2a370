use anyhow::Result;
use tempdir::TempDir;
use test_utils::auth_failure_body;
use test_utils::auth_success_body;

use super::AuthFlow;
use crate::domain::models::FlowState;
use crate::domain::models::Language;
use crate::domain::models::UiText;
use crate::domain::services::FormField;
use crate::domain::services::TokenStore;
use crate::infrastructure::api::HttpApi;

fn store_in(tmp_dir: &TempDir) -> TokenStore {
    return TokenStore::new(tmp_dir.path().join("auth.json"));
}

#[tokio::test]
async fn it_blocks_invalid_login_forms_without_a_request() -> Result<()> {
    let tmp_dir = TempDir::new("auth")?;
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/auth/login")
        .expect(0)
        .with_status(200)
        .create();

    let api = HttpApi::with_url(server.url());
    let mut flow = AuthFlow::new(Language::EN);

    let res = flow
        .login(&api, &store_in(&tmp_dir), "ab", "abcdef")
        .await?;

    assert!(!res);
    assert_eq!(flow.state, FlowState::Idle);
    assert_eq!(
        flow.validator.error_for(FormField::Username),
        Some(UiText::UsernameMinLength.localized(Language::EN))
    );
    assert_eq!(flow.validator.error_for(FormField::Password), None);
    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_logs_in_and_stores_the_session() -> Result<()> {
    let tmp_dir = TempDir::new("auth")?;
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/auth/login")
        .with_status(200)
        .with_body(auth_success_body("token123", "linh"))
        .create();

    let api = HttpApi::with_url(server.url());
    let store = store_in(&tmp_dir);
    let mut flow = AuthFlow::new(Language::EN);

    let res = flow.login(&api, &store, "linh", "abcdef").await?;

    assert!(res);
    assert_eq!(
        flow.state.success_message(),
        Some(UiText::LoginSuccess.localized(Language::EN))
    );
    assert_eq!(store.token(), "token123");
    assert_eq!(store.username(), "linh");
    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_localizes_invalid_credentials() -> Result<()> {
    let tmp_dir = TempDir::new("auth")?;
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/auth/login")
        .with_status(401)
        .with_body(auth_failure_body("Invalid username or password"))
        .create();

    let api = HttpApi::with_url(server.url());
    let store = store_in(&tmp_dir);
    let mut flow = AuthFlow::new(Language::EN);

    let res = flow.login(&api, &store, "linh", "abcdef").await?;

    assert!(!res);
    assert_eq!(
        flow.state.error_message(),
        Some(UiText::InvalidCredentials.localized(Language::EN))
    );
    assert_eq!(store.token(), "");
    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_passes_unknown_server_messages_through() -> Result<()> {
    let tmp_dir = TempDir::new("auth")?;
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/auth/login")
        .with_status(403)
        .with_body(auth_failure_body("Account suspended"))
        .create();

    let api = HttpApi::with_url(server.url());
    let mut flow = AuthFlow::new(Language::EN);

    flow.login(&api, &store_in(&tmp_dir), "linh", "abcdef")
        .await?;

    assert_eq!(flow.state.error_message(), Some("Account suspended"));
    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_maps_rate_limited_logins() -> Result<()> {
    let tmp_dir = TempDir::new("auth")?;
    let mut server = mockito::Server::new();
    let mock = server.mock("POST", "/auth/login").with_status(429).create();

    let api = HttpApi::with_url(server.url());
    let mut flow = AuthFlow::new(Language::EN);

    flow.login(&api, &store_in(&tmp_dir), "linh", "abcdef")
        .await?;

    assert_eq!(
        flow.state.error_message(),
        Some(UiText::RateLimitError.localized(Language::EN))
    );
    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_maps_unreachable_servers_to_network_errors() -> Result<()> {
    let tmp_dir = TempDir::new("auth")?;

    let api = HttpApi::with_url("http://127.0.0.1:1".to_string());
    let mut flow = AuthFlow::new(Language::EN);

    let res = flow
        .login(&api, &store_in(&tmp_dir), "linh", "abcdef")
        .await?;

    assert!(!res);
    assert_eq!(
        flow.state.error_message(),
        Some(UiText::NetworkError.localized(Language::EN))
    );
    return Ok(());
}

#[tokio::test]
async fn it_registers_and_signals_switch_to_login() -> Result<()> {
    let tmp_dir = TempDir::new("auth")?;
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/auth/register")
        .with_status(200)
        .with_body(auth_success_body("", "linh"))
        .create();

    let api = HttpApi::with_url(server.url());
    let store = store_in(&tmp_dir);
    let mut flow = AuthFlow::new(Language::EN);

    let res = flow.register(&api, "linh", "abcdef", "abcdef").await?;

    assert!(res);
    assert_eq!(
        flow.state.success_message(),
        Some(UiText::RegisterSuccess.localized(Language::EN))
    );
    // Registration never authenticates by itself.
    assert_eq!(store.token(), "");
    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_localizes_duplicate_usernames_on_register() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/auth/register")
        .with_status(400)
        .with_body(auth_failure_body("Username already exists"))
        .create();

    let api = HttpApi::with_url(server.url());
    let mut flow = AuthFlow::new(Language::VN);

    let res = flow.register(&api, "linh", "abcdef", "abcdef").await?;

    assert!(!res);
    assert_eq!(
        flow.state.error_message(),
        Some(UiText::UsernameExists.localized(Language::VN))
    );
    mock.assert();
    return Ok(());
}

#[tokio::test]
async fn it_requires_every_register_field() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/auth/register")
        .expect(0)
        .with_status(200)
        .create();

    let api = HttpApi::with_url(server.url());
    let mut flow = AuthFlow::new(Language::EN);

    let res = flow.register(&api, "", "abc", "abcd").await?;

    assert!(!res);
    assert!(flow
        .validator
        .error_for(FormField::Username)
        .is_some());
    assert!(flow
        .validator
        .error_for(FormField::Password)
        .is_some());
    assert!(flow
        .validator
        .error_for(FormField::ConfirmPassword)
        .is_some());
    mock.assert();
    return Ok(());
}
