use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let toml_res = res.parse::<toml_edit::Document>();
    assert!(toml_res.is_ok());

    let doc = toml_res.unwrap();
    assert_eq!(doc["api-url"].as_str(), Some("http://localhost:5000"));
    assert_eq!(doc["language"].as_str(), Some("VN"));
    assert_eq!(doc["per-page"].as_integer(), Some(12));
    assert_eq!(doc["region"].as_str(), Some("all"));
    assert_eq!(doc["request-timeout"].as_integer(), Some(30000));
    // Path-valued keys stay commented out so the file is portable.
    assert!(doc.get("auth-file").is_none());
    assert!(doc.get("config-file").is_none());
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["foodlens", "-c", "./config.example.toml"])?;
    Config::load(cli::build(), vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::Language), "VN");
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_loads_config_from_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["foodlens", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(cli::build(), vec![&matches]).await;
    assert!(res.is_err());
    return Ok(());
}
