//! HTTP Object Store Adapter
//!
//! Talks to a remote content-addressed store:
//!
//! | Call | Request | Response |
//! |------|---------|----------|
//! | put | `POST {url}/objects` with the envelope bytes | `{"hash": "<base64>"}` |
//! | get | `GET {url}/objects/{hex hash}?audience={hex key}` | envelope bytes, 404 if unknown |

use crate::domain::{EncryptedEnvelope, ObjectStoreError};
use crate::ports::ObjectStoreTransport;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use shared_crypto::Secp256k1PublicKey;
use shared_types::ContentHash;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct PutResponse {
    hash: String,
}

/// HTTP object store client.
pub struct HttpObjectStore {
    client: Client,
    base_url: String,
}

impl HttpObjectStore {
    /// Create a client for `base_url`.
    ///
    /// `request_timeout` is a transport-level backstop; the encrypted object
    /// client applies its own per-call timeout on top.
    pub fn new(
        base_url: impl Into<String>,
        request_timeout: Duration,
    ) -> Result<Self, ObjectStoreError> {
        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(request_timeout.min(Duration::from_secs(5)))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Base url without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn object_url(&self, hash: &ContentHash) -> String {
        format!("{}/objects/{}", self.base_url, hex::encode(hash.as_bytes()))
    }
}

#[async_trait]
impl ObjectStoreTransport for HttpObjectStore {
    async fn put(&self, envelope: &EncryptedEnvelope) -> Result<ContentHash, ObjectStoreError> {
        let body = envelope.encode()?;
        let url = format!("{}/objects", self.base_url);
        debug!(url = %url, size = body.len(), "[ao-02] HTTP put");

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(body)
            .send()
            .await?
            .error_for_status()?;

        let parsed: PutResponse = response
            .json()
            .await
            .map_err(|e| ObjectStoreError::Codec(e.to_string()))?;
        ContentHash::from_base64(&parsed.hash).map_err(|e| ObjectStoreError::Codec(e.to_string()))
    }

    async fn get(
        &self,
        hash: &ContentHash,
        audience: &Secp256k1PublicKey,
    ) -> Result<EncryptedEnvelope, ObjectStoreError> {
        let url = self.object_url(hash);
        debug!(url = %url, "[ao-02] HTTP get");

        let response = self
            .client
            .get(&url)
            .query(&[("audience", audience.to_hex())])
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(ObjectStoreError::ObjectNotFound(hash.to_string()));
        }
        let bytes = response.error_for_status()?.bytes().await?;
        EncryptedEnvelope::decode(&bytes)
    }
}
