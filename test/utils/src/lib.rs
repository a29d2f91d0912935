/// Canned generateContent response carrying the reply "Hi there" at the
/// expected path.
pub fn completion_fixture() -> &'static str {
    return r#"{"candidates":[{"content":{"parts":[{"text":"Hi there"}]}}]}"#;
}

/// A success response with none of the expected reply path present.
pub fn completion_missing_reply_fixture() -> &'static str {
    return "{}";
}
