//! Environment-driven configuration.

use std::path::PathBuf;

use reqwest::Url;
use thiserror::Error;

pub const PAGE_URL_VAR: &str = "TRAINER_PAGE_URL";
pub const CSRF_TOKEN_VAR: &str = "TRAINER_CSRF_TOKEN";
pub const SESSION_ID_VAR: &str = "TRAINER_SESSION_ID";
pub const CARDS_FILE_VAR: &str = "TRAINER_CARDS_FILE";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid URL in {var}: {value} ({reason})")]
    InvalidUrl {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Trainer settings.
#[derive(Debug, Clone)]
pub struct Config {
    /// Training page URL. Progress updates are posted back to it.
    pub page_url: Url,
    pub csrf_token: String,
    pub session_id: Option<String>,
    /// Read cards from this file instead of fetching the page.
    pub cards_file: Option<PathBuf>,
}

impl Config {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load using an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let raw_url = non_blank(PAGE_URL_VAR).ok_or(ConfigError::Missing(PAGE_URL_VAR))?;
        let page_url = Url::parse(raw_url.trim()).map_err(|e| ConfigError::InvalidUrl {
            var: PAGE_URL_VAR,
            value: raw_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(page_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                var: PAGE_URL_VAR,
                value: raw_url,
                reason: "scheme must be http or https".to_string(),
            });
        }

        let csrf_token = non_blank(CSRF_TOKEN_VAR).ok_or(ConfigError::Missing(CSRF_TOKEN_VAR))?;

        Ok(Self {
            page_url,
            csrf_token,
            session_id: non_blank(SESSION_ID_VAR),
            cards_file: non_blank(CARDS_FILE_VAR).map(PathBuf::from),
        })
    }

    /// `Cookie` header value carrying the anti-forgery and session cookies.
    pub fn cookie_header(&self) -> String {
        match &self.session_id {
            Some(session) => format!("csrftoken={}; sessionid={}", self.csrf_token, session),
            None => format!("csrftoken={}", self.csrf_token),
        }
    }
}
