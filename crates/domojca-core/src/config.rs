use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{DomOjcaError, Result};
use crate::types::Language;

/// Top-level configuration for the site.
///
/// Loaded from `~/.domojca/config.toml` by default. Secrets (the Gemini API
/// key and the EmailJS identifiers) are normally supplied through the
/// environment, see [`DomOjcaConfig::apply_env`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DomOjcaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub contact: ContactConfig,
}

impl DomOjcaConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: DomOjcaConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| DomOjcaError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Overlay credentials and identifiers from the process environment.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|name| std::env::var(name).ok());
    }

    /// Overlay credentials from an arbitrary lookup.
    ///
    /// Empty values are treated as absent. `GEMINI_API_KEY` takes priority
    /// over the legacy `API_KEY` name.
    pub fn apply_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = get("GEMINI_API_KEY").or_else(|| get("API_KEY")) {
            self.chat.api_key = Some(key);
        }
        if let Some(id) = get("EMAILJS_SERVICE_ID") {
            self.contact.service_id = Some(id);
        }
        if let Some(id) = get("EMAILJS_TEMPLATE_ID") {
            self.contact.template_id = Some(id);
        }
        if let Some(key) = get("EMAILJS_PUBLIC_KEY") {
            self.contact.public_key = Some(key);
        }
    }
}

/// Server and logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Address to bind the HTTP server to.
    pub bind_address: String,
    /// HTTP port.
    pub port: u16,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 3030,
            log_level: "info".to_string(),
        }
    }
}

/// Site presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Language used when a request does not select one.
    pub default_language: Language,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_language: Language::Pl,
        }
    }
}

/// Chat assistant settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Gemini API key. Absent means the assistant answers with fallback text.
    pub api_key: Option<String>,
    /// Generative model name.
    pub model: String,
    /// Gemini REST base URL (overridable for tests and proxies).
    pub base_url: String,
    /// Sampling temperature.
    pub temperature: f32,
    /// Deadline for a single reply, in seconds.
    pub timeout_secs: u64,
    /// Replace failed replies with a localized apology instead of staying silent.
    pub fallback_replies: bool,
    /// Maximum accepted message length in characters.
    pub max_message_chars: usize,
    /// Idle minutes before a visitor's chat session is discarded.
    pub session_idle_minutes: u32,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1beta/models".to_string(),
            temperature: 0.7,
            timeout_secs: 30,
            fallback_replies: true,
            max_message_chars: 2000,
            session_idle_minutes: 30,
        }
    }
}

impl ChatConfig {
    /// The API key, unless it is missing or blank.
    pub fn usable_api_key(&self) -> Option<&str> {
        non_blank(&self.api_key)
    }
}

/// Contact form delivery settings (EmailJS).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
    /// EmailJS REST base URL.
    pub base_url: String,
    /// Deadline for a single delivery, in seconds.
    pub timeout_secs: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            service_id: None,
            template_id: None,
            public_key: None,
            base_url: "https://api.emailjs.com".to_string(),
            timeout_secs: 20,
        }
    }
}

impl ContactConfig {
    /// Whether all three EmailJS identifiers are present and non-blank.
    pub fn is_complete(&self) -> bool {
        non_blank(&self.service_id).is_some()
            && non_blank(&self.template_id).is_some()
            && non_blank(&self.public_key).is_some()
    }
}

/// A configured value, treating blank strings as absent.
pub fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_config() {
        let config = DomOjcaConfig::default();
        assert_eq!(config.general.port, 3030);
        assert_eq!(config.general.bind_address, "127.0.0.1");
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.site.default_language, Language::Pl);
        assert_eq!(config.chat.model, "gemini-2.5-flash");
        assert!((config.chat.temperature - 0.7).abs() < f32::EPSILON);
        assert!(config.chat.api_key.is_none());
        assert!(config.chat.fallback_replies);
        assert_eq!(config.chat.max_message_chars, 2000);
        assert!(config.contact.service_id.is_none());
        assert_eq!(config.contact.base_url, "https://api.emailjs.com");
    }

    #[test]
    fn test_load_valid_config() {
        let content = r#"
[general]
bind_address = "0.0.0.0"
port = 8080
log_level = "debug"

[site]
default_language = "en"

[chat]
model = "gemini-2.0-flash"
temperature = 0.2
timeout_secs = 10
fallback_replies = false

[contact]
service_id = "svc"
template_id = "tpl"
public_key = "pk"
"#;
        let file = create_temp_config(content);
        let config = DomOjcaConfig::load(file.path()).unwrap();
        assert_eq!(config.general.bind_address, "0.0.0.0");
        assert_eq!(config.general.port, 8080);
        assert_eq!(config.site.default_language, Language::En);
        assert_eq!(config.chat.model, "gemini-2.0-flash");
        assert_eq!(config.chat.timeout_secs, 10);
        assert!(!config.chat.fallback_replies);
        assert_eq!(config.contact.service_id.as_deref(), Some("svc"));
        assert_eq!(config.contact.public_key.as_deref(), Some("pk"));
    }

    #[test]
    fn test_load_partial_config_uses_defaults() {
        let content = r#"
[general]
log_level = "warn"
"#;
        let file = create_temp_config(content);
        let config = DomOjcaConfig::load(file.path()).unwrap();
        assert_eq!(config.general.log_level, "warn");
        assert_eq!(config.general.port, 3030);
        assert_eq!(config.chat.timeout_secs, 30);
    }

    #[test]
    fn test_load_invalid_toml() {
        let file = create_temp_config("this is {{ not valid TOML");
        assert!(DomOjcaConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_load_unknown_language_is_error() {
        let file = create_temp_config("[site]\ndefault_language = \"de\"\n");
        assert!(DomOjcaConfig::load(file.path()).is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = DomOjcaConfig::load_or_default(Path::new("/nonexistent/config.toml"));
        assert_eq!(config.general.port, 3030);
    }

    #[test]
    fn test_save_creates_parent_dirs_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sub").join("config.toml");

        let mut config = DomOjcaConfig::default();
        config.general.port = 4040;
        config.save(&path).unwrap();

        let reloaded = DomOjcaConfig::load(&path).unwrap();
        assert_eq!(reloaded.general.port, 4040);
        assert_eq!(reloaded.chat.model, config.chat.model);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let file = create_temp_config("");
        let config = DomOjcaConfig::load(file.path()).unwrap();
        assert_eq!(config.general.port, 3030);
        assert_eq!(config.site.default_language, Language::Pl);
    }

    // ---- Environment overlay ----

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_apply_env_sets_credentials() {
        let mut config = DomOjcaConfig::default();
        config.apply_env_from(lookup(&[
            ("GEMINI_API_KEY", "g-key"),
            ("EMAILJS_SERVICE_ID", "svc"),
            ("EMAILJS_TEMPLATE_ID", "tpl"),
            ("EMAILJS_PUBLIC_KEY", "pk"),
        ]));
        assert_eq!(config.chat.api_key.as_deref(), Some("g-key"));
        assert_eq!(config.contact.service_id.as_deref(), Some("svc"));
        assert_eq!(config.contact.template_id.as_deref(), Some("tpl"));
        assert_eq!(config.contact.public_key.as_deref(), Some("pk"));
    }

    #[test]
    fn test_apply_env_legacy_api_key_name() {
        let mut config = DomOjcaConfig::default();
        config.apply_env_from(lookup(&[("API_KEY", "legacy")]));
        assert_eq!(config.chat.api_key.as_deref(), Some("legacy"));

        let mut config = DomOjcaConfig::default();
        config.apply_env_from(lookup(&[("API_KEY", "legacy"), ("GEMINI_API_KEY", "new")]));
        assert_eq!(config.chat.api_key.as_deref(), Some("new"));
    }

    #[test]
    fn test_apply_env_ignores_blank_values() {
        let mut config = DomOjcaConfig::default();
        config.contact.service_id = Some("from-file".to_string());
        config.apply_env_from(lookup(&[("EMAILJS_SERVICE_ID", "  "), ("GEMINI_API_KEY", "")]));
        assert_eq!(config.contact.service_id.as_deref(), Some("from-file"));
        assert!(config.chat.api_key.is_none());
    }

    // ---- Credential checks ----

    #[test]
    fn test_blank_api_key_is_not_usable() {
        let mut chat = ChatConfig::default();
        assert_eq!(chat.usable_api_key(), None);
        chat.api_key = Some("   ".to_string());
        assert_eq!(chat.usable_api_key(), None);
        chat.api_key = Some("secret".to_string());
        assert_eq!(chat.usable_api_key(), Some("secret"));
    }

    #[test]
    fn test_contact_config_complete_only_with_all_ids() {
        let mut contact = ContactConfig {
            service_id: Some("service_x".to_string()),
            template_id: Some("template_y".to_string()),
            public_key: Some("".to_string()),
            ..ContactConfig::default()
        };
        assert!(!contact.is_complete());
        contact.public_key = Some("pk".to_string());
        assert!(contact.is_complete());
    }
}
