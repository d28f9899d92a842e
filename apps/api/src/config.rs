//! API server configuration.
//!
//! Configuration is loaded from environment variables (optionally via a
//! `.env` file) with fallback to defaults.
//!
//! | Variable                  | Default                        |
//! |---------------------------|--------------------------------|
//! | `COURSEDESK_PORT`         | `3000`                         |
//! | `COURSEDESK_DATA_DIR`     | `./data`                       |
//! | `COURSEDESK_COMPANY_NAME` | `Training Management System`   |
//! | `SMTP_HOST`               | unset (emails are only logged) |
//! | `SMTP_PORT`               | `587`                          |
//! | `EMAIL_USER`              | unset                          |
//! | `EMAIL_PASS`              | unset                          |
//! | `EMAIL_FROM_NAME`         | company name                   |

use std::env;
use std::path::PathBuf;

use coursedesk_core::DEFAULT_COMPANY_NAME;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// HTTP listen port
    pub port: u16,

    /// Directory holding the JSON data files
    pub data_dir: PathBuf,

    /// Name printed on PDFs and used as the email sender name
    pub company_name: String,

    /// Outgoing mail server; `None` logs emails instead of sending them
    pub smtp: Option<SmtpConfig>,
}

/// SMTP relay settings.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub from_name: String,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let company_name = lookup("COURSEDESK_COMPANY_NAME")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_COMPANY_NAME.to_string());

        let smtp = match (lookup("SMTP_HOST"), lookup("EMAIL_USER")) {
            (Some(host), Some(username)) if !host.is_empty() && !username.is_empty() => {
                Some(SmtpConfig {
                    host,
                    port: lookup("SMTP_PORT")
                        .unwrap_or_else(|| "587".to_string())
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("SMTP_PORT".to_string()))?,
                    username,
                    password: lookup("EMAIL_PASS")
                        .ok_or_else(|| ConfigError::MissingRequired("EMAIL_PASS".to_string()))?,
                    from_name: lookup("EMAIL_FROM_NAME").unwrap_or_else(|| company_name.clone()),
                })
            }
            _ => None,
        };

        Ok(ApiConfig {
            port: lookup("COURSEDESK_PORT")
                .unwrap_or_else(|| "3000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("COURSEDESK_PORT".to_string()))?,

            data_dir: lookup("COURSEDESK_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./data")),

            company_name,
            smtp,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(pairs: &[(&str, &str)]) -> Result<ApiConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ApiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.company_name, DEFAULT_COMPANY_NAME);
        assert!(config.smtp.is_none());
    }

    #[test]
    fn test_smtp_configured() {
        let config = load(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("EMAIL_USER", "bot@example.com"),
            ("EMAIL_PASS", "secret"),
            ("COURSEDESK_COMPANY_NAME", "Acme Learning"),
        ])
        .unwrap();

        let smtp = config.smtp.unwrap();
        assert_eq!(smtp.port, 587);
        assert_eq!(smtp.from_name, "Acme Learning");
    }

    #[test]
    fn test_invalid_port() {
        assert!(matches!(
            load(&[("COURSEDESK_PORT", "http")]),
            Err(ConfigError::InvalidValue(key)) if key == "COURSEDESK_PORT"
        ));
    }

    #[test]
    fn test_smtp_without_password() {
        assert!(matches!(
            load(&[("SMTP_HOST", "smtp.example.com"), ("EMAIL_USER", "bot@example.com")]),
            Err(ConfigError::MissingRequired(_))
        ));
    }
}
