//! HTTP access to the world server.
//!
//! Wraps the three endpoints the client needs. Requests are never retried:
//! a failure is returned to the caller, who keeps the previous display.

use std::time::Duration;

use log::debug;
use reqwest::header::CONTENT_TYPE;

use crate::client::error::ClientError;
use crate::client::types::{Direction, DirectionEncoding, WorldSnapshot};

const WORLD_PATH: &str = "/world";
const MOVE_PATH: &str = "/move";
const RESTART_PATH: &str = "/restart";

/// Client for `/world`, `/move` and `/restart`.
///
/// Cloning shares the underlying connection pool.
#[derive(Debug, Clone)]
pub struct WorldClient {
    http: reqwest::Client,
    base_url: String,
    encoding: DirectionEncoding,
}

impl WorldClient {
    /// Build a client for the server at `base_url` (no trailing slash).
    pub fn new(base_url: impl Into<String>, timeout: Duration, encoding: DirectionEncoding) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::network("client", e))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
            encoding,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the current world state.
    pub async fn fetch_world(&self) -> Result<WorldSnapshot, ClientError> {
        let request = self.http.get(format!("{}{}", self.base_url, WORLD_PATH));
        Self::send(WORLD_PATH, request).await
    }

    /// Move the player one cell. The response carries `collected`.
    pub async fn move_player(&self, direction: Direction) -> Result<WorldSnapshot, ClientError> {
        let body = move_form_body(direction, self.encoding);
        debug!("[WorldClient] POST {} {}", MOVE_PATH, body);
        let request = self.http
            .post(format!("{}{}", self.base_url, MOVE_PATH))
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body);
        Self::send(MOVE_PATH, request).await
    }

    /// Ask the server to reset the game.
    pub async fn restart(&self) -> Result<WorldSnapshot, ClientError> {
        let request = self.http.post(format!("{}{}", self.base_url, RESTART_PATH));
        Self::send(RESTART_PATH, request).await
    }

    async fn send(endpoint: &'static str, request: reqwest::RequestBuilder) -> Result<WorldSnapshot, ClientError> {
        let response = request
            .send()
            .await
            .map_err(|e| ClientError::network(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::network(endpoint, format!("status {}", status)));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ClientError::network(endpoint, e))?;
        serde_json::from_str(&text).map_err(|e| ClientError::parse(endpoint, e))
    }
}

/// Form body for `/move`, e.g. `dir=U`.
pub fn move_form_body(direction: Direction, encoding: DirectionEncoding) -> String {
    format!("dir={}", urlencoding::encode(direction.code(encoding)))
}
