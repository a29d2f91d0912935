use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let toml_res = res.parse::<toml_edit::Document>();
    assert!(toml_res.is_ok());

    assert!(res.contains("model = \"models/gemini-2.0-flash\""));
    assert!(res.contains("# gemini-token = \"\""));
    assert!(res.contains("health-check-timeout = 1000"));
    assert!(res.contains("# username = \"\""));
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["chatmate", "-c", "./config.example.toml"])?;
    Config::load(vec![&matches]).await?;

    assert_eq!(Config::get(ConfigKey::Model), "models/gemini-2.0-flash");
    assert_eq!(
        Config::get(ConfigKey::GeminiURL),
        "https://generativelanguage.googleapis.com"
    );

    return Ok(());
}

#[tokio::test]
async fn it_fails_to_load_bad_config_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["chatmate", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(vec![&matches]).await;

    assert!(res.is_err());

    return Ok(());
}
