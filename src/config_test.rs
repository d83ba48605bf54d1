use super::*;
use std::collections::HashMap;

fn attrs(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn no_attributes_yields_defaults() {
    let cfg = ClientConfig::from_attributes(attrs(&[])).unwrap();
    assert_eq!(cfg, ClientConfig::default());
    assert_eq!(cfg.api_base, "/api/");
    assert_eq!(cfg.poll_interval, Duration::from_secs(3));
    assert_eq!(cfg.conversation_limit, 50);
    assert_eq!(cfg.max_message_chars, 1000);
    assert_eq!(cfg.stylesheet_href, "/static/app/style.css");
}

#[test]
fn attributes_override_defaults() {
    let cfg = ClientConfig::from_attributes(attrs(&[
        ("data-api-base", "/backend/"),
        ("data-poll-ms", "1500"),
        ("data-conversation-limit", "20"),
        ("data-stylesheet", "/app.css"),
    ]))
    .unwrap();
    assert_eq!(cfg.api_base, "/backend/");
    assert_eq!(cfg.poll_interval, Duration::from_millis(1500));
    assert_eq!(cfg.conversation_limit, 20);
    assert_eq!(cfg.stylesheet_href, "/app.css");
    assert_eq!(cfg.max_comment_chars, MAX_COMMENT_CHARS);
}

#[test]
fn blank_attribute_is_ignored() {
    let cfg = ClientConfig::from_attributes(attrs(&[("data-api-base", "   ")])).unwrap();
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
}

#[test]
fn non_numeric_poll_interval_is_rejected() {
    let err = ClientConfig::from_attributes(attrs(&[("data-poll-ms", "soon")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidNumber { attr: "data-poll-ms", value: "soon".to_owned() });
}

#[test]
fn zero_limit_is_rejected() {
    assert!(ClientConfig::from_attributes(attrs(&[("data-conversation-limit", "0")])).is_err());
}

#[test]
fn invalid_config_falls_back_to_defaults() {
    let cfg = ClientConfig::from_attributes_or_default(attrs(&[("data-poll-ms", "-1")]));
    assert_eq!(cfg, ClientConfig::default());
}
