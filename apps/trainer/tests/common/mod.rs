//! Shared fixtures for trainer integration tests.

#![allow(dead_code)]

use reqwest::Url;
use training_core::{Direction, FlashCard, WordId};
use vocab_trainer::config::{Config, CARDS_FILE_VAR, CSRF_TOKEN_VAR, PAGE_URL_VAR, SESSION_ID_VAR};
use wiremock::MockServer;

pub const CSRF_TOKEN: &str = "test-csrf-token";
pub const SESSION_ID: &str = "test-session";
pub const TRAINING_PATH: &str = "/training";

/// Config pointing at `<server>/training`.
pub fn config_for(server: &MockServer) -> Config {
    config_with(&format!("{}{}", server.uri(), TRAINING_PATH), None)
}

pub fn config_with(page_url: &str, cards_file: Option<&str>) -> Config {
    let page_url = page_url.to_string();
    let cards_file = cards_file.map(str::to_string);
    Config::from_lookup(move |key| match key {
        k if k == PAGE_URL_VAR => Some(page_url.clone()),
        k if k == CSRF_TOKEN_VAR => Some(CSRF_TOKEN.to_string()),
        k if k == SESSION_ID_VAR => Some(SESSION_ID.to_string()),
        k if k == CARDS_FILE_VAR => cards_file.clone(),
        _ => None,
    })
    .expect("valid test config")
}

pub fn card(id: &str, prompt: &str, answer: &str) -> FlashCard {
    FlashCard {
        id: WordId::new(id),
        direction: Direction::NativeToStudying,
        prompt: prompt.to_string(),
        expected_answer: Some(answer.to_string()),
        example_sentence: None,
        audio_ref: None,
    }
}

/// An address nothing listens on.
pub async fn dead_endpoint() -> Url {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}{TRAINING_PATH}").parse().unwrap()
}
