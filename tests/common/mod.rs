#![allow(
    unused,
    reason = "Each test crate only uses part of the shared helpers"
)]

use httpmock::MockServer;
use newsapi_client_sdk::{Client, Config};
use serde_json::{Value, json};

/// Key accepted by the mocked endpoints.
pub const API_KEY: &str = "0123456789abcdef0123456789abcdef";
/// Key the mocked endpoints reject.
pub const INVALID_KEY: &str = "00000000000000000000000000000000";

pub const API_KEY_HEADER: &str = "X-Api-Key";

pub fn create_client(server: &MockServer) -> anyhow::Result<Client> {
    create_client_with_key(server, API_KEY)
}

pub fn create_client_with_key(server: &MockServer, key: &str) -> anyhow::Result<Client> {
    let config = Config::builder().api_key(key.to_owned()).build();
    Ok(Client::new(&server.base_url(), config)?)
}

pub fn unauthorized_body() -> Value {
    json!({
        "status": "error",
        "code": "apiKeyInvalid",
        "message": "Your API key is invalid or incorrect. Check your key, or go to https://newsapi.org to create a free API key."
    })
}

pub fn article_body() -> Value {
    json!({
        "source": {"id": "wired", "name": "Wired"},
        "author": "Lauren Goode",
        "title": "Go Turns 15",
        "description": "The programming language keeps growing.",
        "url": "https://www.wired.com/story/go-turns-15",
        "urlToImage": "https://media.wired.com/photos/go.jpg",
        "publishedAt": "2024-11-10T12:00:00Z",
        "content": "Go was announced in November 2009... [+3120 chars]"
    })
}
