//! Client configuration read from the mount element.
//!
//! The host page can override defaults through `data-*` attributes on the
//! root element:
//! - `data-api-base`: backend base path (default `/api/`)
//! - `data-poll-ms`: message poll interval in milliseconds (default 3000)
//! - `data-conversation-limit`: conversations fetched on load (default 50)
//! - `data-stylesheet`: stylesheet injected at mount

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "/api/";
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 3000;
pub const DEFAULT_CONVERSATION_LIMIT: u32 = 50;
pub const MAX_MESSAGE_CHARS: usize = 1000;
pub const MAX_COMMENT_CHARS: usize = 500;
pub const DEFAULT_STYLESHEET_HREF: &str = "/static/app/style.css";

/// Id of the element the app mounts into.
pub const ROOT_ELEMENT_ID: &str = "root";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {attr}: {value:?}")]
    InvalidNumber { attr: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub poll_interval: Duration,
    pub conversation_limit: u32,
    pub max_message_chars: usize,
    pub max_comment_chars: usize,
    pub stylesheet_href: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            conversation_limit: DEFAULT_CONVERSATION_LIMIT,
            max_message_chars: MAX_MESSAGE_CHARS,
            max_comment_chars: MAX_COMMENT_CHARS,
            stylesheet_href: DEFAULT_STYLESHEET_HREF.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build config from attribute lookups, falling back to defaults for
    /// absent or blank attributes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidNumber`] when a numeric attribute does not
    /// parse or is zero.
    pub fn from_attributes(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let attr = |name: &str| lookup(name).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let api_base = attr("data-api-base").unwrap_or(defaults.api_base);
        let stylesheet_href = attr("data-stylesheet").unwrap_or(defaults.stylesheet_href);
        let poll_interval = match attr("data-poll-ms") {
            Some(raw) => Duration::from_millis(parse_positive("data-poll-ms", &raw)?),
            None => defaults.poll_interval,
        };
        let conversation_limit = match attr("data-conversation-limit") {
            Some(raw) => {
                let limit = parse_positive("data-conversation-limit", &raw)?;
                u32::try_from(limit).map_err(|_| ConfigError::InvalidNumber { attr: "data-conversation-limit", value: raw })?
            }
            None => defaults.conversation_limit,
        };

        Ok(Self { api_base, poll_interval, conversation_limit, stylesheet_href, ..defaults })
    }

    /// Like [`ClientConfig::from_attributes`], but logs and falls back to
    /// defaults on invalid input so a bad attribute never blocks mounting.
    pub fn from_attributes_or_default(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self::from_attributes(lookup).unwrap_or_else(|e| {
            log::warn!("ignoring root element config: {e}");
            Self::default()
        })
    }
}

fn parse_positive(attr: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse::<u64>()
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| ConfigError::InvalidNumber { attr, value: raw.to_owned() })
}
