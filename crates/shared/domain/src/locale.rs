use crate::constants::DEFAULT_SITE;
use serde::{Deserialize, Serialize};

/// Site, language and currency a request is processed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Locale {
    pub site_id: String,
    pub language_id: Option<String>,
    pub currency_id: Option<String>,
}

impl Locale {
    #[must_use]
    pub fn new(site_id: impl Into<String>) -> Self {
        Self { site_id: site_id.into(), language_id: None, currency_id: None }
    }

    #[must_use]
    pub fn with_language(mut self, language_id: impl Into<String>) -> Self {
        self.language_id = Some(language_id.into());
        self
    }

    #[must_use]
    pub fn with_currency(mut self, currency_id: impl Into<String>) -> Self {
        self.currency_id = Some(currency_id.into());
        self
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::new(DEFAULT_SITE)
    }
}
