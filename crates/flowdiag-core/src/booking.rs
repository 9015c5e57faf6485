//! Booking call-to-action.
//!
//! The link is static configuration. Opening it hands the URL to the system
//! opener and returns immediately; nothing comes back from the booking page.

use serde::Serialize;
use url::Url;

use crate::error::{ConfigError, CoreError};
use crate::storage::BookingConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingLink {
    pub url: Url,
    pub label: String,
    pub blurb: String,
}

impl BookingLink {
    /// Build from configuration, validating the URL.
    pub fn from_config(config: &BookingConfig) -> Result<Self, ConfigError> {
        let url = Url::parse(&config.url).map_err(|e| ConfigError::InvalidValue {
            key: "booking.url".to_string(),
            message: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                key: "booking.url".to_string(),
                message: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        Ok(Self {
            url,
            label: config.label.clone(),
            blurb: config.blurb.clone(),
        })
    }

    /// Open the link in the default browser.
    pub fn open(&self) -> Result<(), CoreError> {
        tracing::info!(url = %self.url, "opening booking link");
        open::that_detached(self.url.as_str()).map_err(|source| CoreError::Open {
            url: self.url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds() {
        let link = BookingLink::from_config(&BookingConfig::default()).unwrap();
        assert_eq!(link.url.as_str(), "https://calendly.com/your-link");
        assert_eq!(link.label, "Book Your FLOW Session");
    }

    #[test]
    fn rejects_non_web_scheme() {
        let config = BookingConfig {
            url: "file:///etc/passwd".into(),
            ..Default::default()
        };
        assert!(matches!(
            BookingLink::from_config(&config),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn rejects_malformed_url() {
        let config = BookingConfig {
            url: "calendly".into(),
            ..Default::default()
        };
        assert!(BookingLink::from_config(&config).is_err());
    }
}
