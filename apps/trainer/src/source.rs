//! Card sources: where the deck for a training run comes from.

use std::path::PathBuf;

use reqwest::header::{ACCEPT, COOKIE};
use reqwest::{Client, Url};
use serde::Deserialize;
use thiserror::Error;
use training_core::FlashCard;

use crate::config::Config;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("page returned status {0}")]
    Status(u16),

    #[error("malformed card data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Card payload as embedded in the page: a bare list or `{"cards": [...]}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CardPayload {
    List(Vec<FlashCard>),
    Wrapped { cards: Vec<FlashCard> },
}

impl CardPayload {
    fn into_cards(self) -> Vec<FlashCard> {
        match self {
            Self::List(cards) | Self::Wrapped { cards } => cards,
        }
    }
}

/// Parse card JSON in either accepted shape.
pub fn parse_cards(json: &str) -> Result<Vec<FlashCard>, SourceError> {
    let payload: CardPayload = serde_json::from_str(json)?;
    Ok(payload.into_cards())
}

/// Read-once source of cards. `load` consumes the source.
#[derive(Debug, Clone)]
pub enum CardSource {
    File(PathBuf),
    Page {
        client: Client,
        url: Url,
        cookie: String,
    },
}

impl CardSource {
    pub fn from_config(config: &Config) -> Self {
        match &config.cards_file {
            Some(path) => Self::File(path.clone()),
            None => Self::Page {
                client: Client::new(),
                url: config.page_url.clone(),
                cookie: config.cookie_header(),
            },
        }
    }

    pub async fn load(self) -> Result<Vec<FlashCard>, SourceError> {
        match self {
            Self::File(path) => {
                let json = tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|source| SourceError::Io { path, source })?;
                parse_cards(&json)
            }
            Self::Page {
                client,
                url,
                cookie,
            } => {
                let resp = client
                    .get(url)
                    .header(ACCEPT, "application/json")
                    .header(COOKIE, cookie)
                    .send()
                    .await?;

                if !resp.status().is_success() {
                    return Err(SourceError::Status(resp.status().as_u16()));
                }

                let json = resp.text().await?;
                parse_cards(&json)
            }
        }
    }
}
