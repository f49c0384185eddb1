//! HTTP connection to the card database API.
//!
//! Every request is a GET. A 2xx response is decoded as the requested type;
//! any other status is decoded as a [`RequestError`] body. Transport and decode
//! failures come back as [`DatatankError`] values naming the URL.

use std::time::Duration;

use image::DynamicImage;
use log::{debug, info};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::{DatatankError, Result};
use crate::models::RequestError;

/// Thin wrapper over a shared [`reqwest::Client`] bound to one API base URL.
pub struct Connection {
    client: Client,
    base_url: String,
    offline: bool,
}

impl Connection {
    /// Create a connection.
    ///
    /// # Arguments
    ///
    /// * `base_url` - API root, e.g. `https://api.scryfall.com`. A trailing
    ///   slash is ignored.
    /// * `timeout` - Per-request timeout.
    /// * `user_agent` - Value of the `User-Agent` header.
    /// * `offline` - When set, every request fails with
    ///   [`DatatankError::Offline`] without touching the network.
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str, offline: bool) -> Result<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .gzip(true)
            .build()
            .map_err(|e| DatatankError::http(&base_url, e))?;
        Ok(Self {
            client,
            base_url,
            offline,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn is_offline(&self) -> bool {
        self.offline
    }

    /// GET `url` and decode the JSON body as `T`.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.get_bytes(url).await?;
        serde_json::from_slice(&body).map_err(|e| DatatankError::json(url, e))
    }

    /// GET `url` and decode the body as an image.
    pub async fn get_image(&self, url: &str) -> Result<DynamicImage> {
        let body = self.get_bytes(url).await?;
        image::load_from_memory(&body).map_err(|e| DatatankError::image(url, e))
    }

    /// GET `url` and return the raw body of a successful response.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>> {
        if self.offline {
            return Err(DatatankError::Offline(url.to_string()));
        }

        info!("Fetching {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| DatatankError::http(url, e))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| DatatankError::http(url, e))?;
        debug!("{} returned {} ({} bytes)", url, status, body.len());

        if status.is_success() {
            return Ok(body.to_vec());
        }

        match serde_json::from_slice::<RequestError>(&body) {
            Ok(err) => Err(DatatankError::Request(err)),
            Err(_) => Err(DatatankError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }),
        }
    }
}
