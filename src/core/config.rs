//! Application configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.

/// Client slug attached to contact submissions that do not carry one
pub const DEFAULT_CLIENT_SLUG: &str = "gruntworksagency";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Slug recorded with contact submissions when the form omits it
    pub client_slug: String,

    /// Inbox that contact submissions are addressed to
    /// Example: info@gruntworksagency.com
    pub contact_email: Option<String>,

    /// Whether accepted tracking events are logged
    pub analytics_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let client_slug = lookup("CLIENT_SLUG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_CLIENT_SLUG.to_string());

        let analytics_enabled = lookup("ANALYTICS_ENABLED")
            .map(|v| parse_flag(&v))
            .unwrap_or(true);

        Self {
            client_slug,
            contact_email: lookup("CONTACT_EMAIL").filter(|s| !s.trim().is_empty()),
            analytics_enabled,
        }
    }

    /// Check if a contact inbox is configured
    pub fn has_contact_email(&self) -> bool {
        self.contact_email.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            client_slug: DEFAULT_CLIENT_SLUG.to_string(),
            contact_email: None,
            analytics_enabled: true,
        }
    }
}

/// Anything but an explicit "off" value enables the flag
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_config_with_no_vars() {
        let config = Config::from_lookup(lookup(&[]));

        assert_eq!(config, Config::default());
        assert_eq!(config.client_slug, "gruntworksagency");
        assert!(!config.has_contact_email());
        assert!(config.analytics_enabled);
    }

    #[test]
    fn test_config_with_all_vars() {
        let config = Config::from_lookup(lookup(&[
            ("CLIENT_SLUG", "acme-lawns"),
            ("CONTACT_EMAIL", "hello@acme.test"),
            ("ANALYTICS_ENABLED", "false"),
        ]));

        assert_eq!(config.client_slug, "acme-lawns");
        assert_eq!(config.contact_email.as_deref(), Some("hello@acme.test"));
        assert!(!config.analytics_enabled);
    }

    #[test]
    fn test_blank_values_fall_back() {
        let config = Config::from_lookup(lookup(&[("CLIENT_SLUG", "  "), ("CONTACT_EMAIL", "")]));

        assert_eq!(config.client_slug, DEFAULT_CLIENT_SLUG);
        assert!(config.contact_email.is_none());
    }

    #[test]
    fn test_parse_flag() {
        for off in ["0", "false", "FALSE", " no ", "off"] {
            assert!(!parse_flag(off), "{off:?}");
        }
        for on in ["1", "true", "yes", "on", ""] {
            assert!(parse_flag(on), "{on:?}");
        }
    }

    #[test]
    fn test_config_from_env_returns_config() {
        // Values depend on the environment; only check it loads
        let config = Config::from_env();

        assert!(!config.client_slug.is_empty());
    }
}
