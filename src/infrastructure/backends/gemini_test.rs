use anyhow::Result;
use test_utils::completion_fixture;
use test_utils::completion_missing_reply_fixture;

use super::Gemini;
use crate::domain::models::Backend;
use crate::domain::models::Completion;

impl Gemini {
    fn with_url(url: String) -> Gemini {
        return Gemini {
            url,
            token: "abc".to_string(),
            model: "models/gemini-test".to_string(),
            timeout: "200".to_string(),
        };
    }
}

#[tokio::test]
async fn it_successfully_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v1beta/models/gemini-test")
        .match_header("x-goog-api-key", "abc")
        .with_status(200)
        .create();

    let backend = Gemini::with_url(server.url());
    let res = backend.health_check().await;

    assert!(res.is_ok());
    mock.assert();
}

#[tokio::test]
async fn it_fails_health_checks() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/v1beta/models/gemini-test")
        .with_status(500)
        .create();

    let backend = Gemini::with_url(server.url());
    let res = backend.health_check().await;

    assert!(res.is_err());
    mock.assert();
}

#[tokio::test]
async fn it_fails_health_checks_without_token() {
    let backend = Gemini {
        url: "http://localhost:0".to_string(),
        token: "".to_string(),
        model: "models/gemini-test".to_string(),
        timeout: "200".to_string(),
    };

    let res = backend.health_check().await;
    assert!(res.is_err());
}

#[tokio::test]
async fn it_gets_completions() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1beta/models/gemini-test:generateContent")
        .match_header("x-goog-api-key", "abc")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "contents": [{ "parts": [{ "text": "Say hi" }] }]
        })))
        .with_status(200)
        .with_body(completion_fixture())
        .create();

    let backend = Gemini::with_url(server.url());
    let res = backend.generate("Say hi").await?;

    mock.assert();
    assert_eq!(res, Completion::Reply("Hi there".to_string()));

    return Ok(());
}

#[tokio::test]
async fn it_falls_back_when_reply_path_is_missing() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1beta/models/gemini-test:generateContent")
        .with_status(200)
        .with_body(completion_missing_reply_fixture())
        .create();

    let backend = Gemini::with_url(server.url());
    let res = backend.generate("Say hi").await?;

    mock.assert();
    assert_eq!(res, Completion::NoReply);

    return Ok(());
}

#[tokio::test]
async fn it_falls_back_when_candidates_are_empty() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1beta/models/gemini-test:generateContent")
        .with_status(200)
        .with_body(r#"{"candidates":[]}"#)
        .create();

    let backend = Gemini::with_url(server.url());
    let res = backend.generate("Say hi").await?;

    mock.assert();
    assert_eq!(res, Completion::NoReply);

    return Ok(());
}

#[tokio::test]
async fn it_falls_back_when_reply_is_empty() -> Result<()> {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1beta/models/gemini-test:generateContent")
        .with_status(200)
        .with_body(r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#)
        .create();

    let backend = Gemini::with_url(server.url());
    let res = backend.generate("Say hi").await?;

    mock.assert();
    assert_eq!(res, Completion::NoReply);

    return Ok(());
}

#[tokio::test]
async fn it_errors_on_failed_status() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1beta/models/gemini-test:generateContent")
        .with_status(500)
        .create();

    let backend = Gemini::with_url(server.url());
    let res = backend.generate("Say hi").await;

    mock.assert();
    assert!(res.is_err());
}

#[tokio::test]
async fn it_errors_on_malformed_body() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/v1beta/models/gemini-test:generateContent")
        .with_status(200)
        .with_body("definitely not json")
        .create();

    let backend = Gemini::with_url(server.url());
    let res = backend.generate("Say hi").await;

    mock.assert();
    assert!(res.is_err());
}
