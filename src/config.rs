use std::env;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

/// Credential wrapper that never prints its value.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

/// Process-wide settings, read once at startup.
///
/// Environment variables:
/// - `OPENAI_API_KEY`: chat-completion credential
/// - `OPENAI_MODEL`: model identifier (default `gpt-3.5-turbo`)
/// - `GOOGLE_API_KEY`: Custom Search credential
/// - `CUSTOM_SEARCH_ENGINE_ID`: Custom Search engine id (`cx`)
/// - `BIND_ADDR`: listen address (default `127.0.0.1:5000`)
///
/// Missing credentials are not an error here; they surface when the
/// corresponding API call is made.
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr: String,
    pub openai_api_key: Secret,
    pub openai_model: String,
    pub google_api_key: Secret,
    pub search_engine_id: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            openai_api_key: Secret::new(get("OPENAI_API_KEY").unwrap_or_default()),
            openai_model: get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string()),
            google_api_key: Secret::new(get("GOOGLE_API_KEY").unwrap_or_default()),
            search_engine_id: get("CUSTOM_SEARCH_ENGINE_ID").unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4"),
            ("GOOGLE_API_KEY", "g-key"),
            ("CUSTOM_SEARCH_ENGINE_ID", "engine"),
            ("BIND_ADDR", "0.0.0.0:8080"),
        ]));

        assert_eq!(config.openai_api_key.expose(), "sk-test");
        assert_eq!(config.openai_model, "gpt-4");
        assert_eq!(config.google_api_key.expose(), "g-key");
        assert_eq!(config.search_engine_id, "engine");
        assert_eq!(config.bind_addr, "0.0.0.0:8080");
    }

    #[test]
    fn missing_credentials_do_not_fail() {
        let config = Config::from_lookup(|_| None);

        assert!(config.openai_api_key.is_empty());
        assert!(config.google_api_key.is_empty());
        assert!(config.search_engine_id.is_empty());
        assert_eq!(config.openai_model, DEFAULT_OPENAI_MODEL);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let config = Config::from_lookup(lookup_from(&[("OPENAI_MODEL", "  "), ("BIND_ADDR", "")]));

        assert_eq!(config.openai_model, DEFAULT_OPENAI_MODEL);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR);
    }

    #[test]
    fn secret_debug_is_redacted() {
        let config = Config::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-very-secret")]));

        let printed = format!("{config:?}");
        assert!(!printed.contains("sk-very-secret"));
        assert!(printed.contains("[REDACTED]"));
    }
}
