//! Time-bounded cache for the identity provider's published key set
//!
//! The provider rotates signing keys rarely; fetching the JWKS document on
//! every protected request would make every API call depend on a live
//! round-trip to the provider. Keys are cached for a fixed TTL and the
//! cache is invalidated early when a token references an unknown key id.

use jsonwebtoken::jwk::JwkSet;
use jsonwebtoken::DecodingKey;
use reqwest::Client;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

use crate::common::ApiError;

const DEFAULT_TTL: Duration = Duration::from_secs(600);

struct CachedKeys {
    fetched_at: Instant,
    keys: JwkSet,
}

pub struct JwksCache {
    http: Client,
    jwks_url: String,
    ttl: Duration,
    cached: RwLock<Option<CachedKeys>>,
}

impl JwksCache {
    pub fn new(http: Client, jwks_url: String) -> Self {
        Self {
            http,
            jwks_url,
            ttl: DEFAULT_TTL,
            cached: RwLock::new(None),
        }
    }

    /// Returns the decoding key for `kid`, refreshing the cached document
    /// when it is stale or does not contain the key id.
    pub async fn decoding_key(&self, kid: &str) -> Result<DecodingKey, ApiError> {
        {
            let cached = self.cached.read().await;
            if let Some(c) = cached.as_ref() {
                if c.fetched_at.elapsed() < self.ttl {
                    if let Some(jwk) = c.keys.find(kid) {
                        return decoding_key_from_jwk(jwk, kid);
                    }
                    // Fresh document without this kid: fall through and
                    // refetch once in case the provider rotated keys.
                    debug!(kid = %kid, "Key id not in cached key set, refreshing");
                }
            }
        }

        let keys = self.fetch().await?;
        let key = match keys.find(kid) {
            Some(jwk) => decoding_key_from_jwk(jwk, kid),
            None => {
                warn!(kid = %kid, "Key id not present in identity provider key set");
                Err(ApiError::InvalidAuthHeader(
                    "Unable to find appropriate key".to_string(),
                ))
            }
        };

        let mut cached = self.cached.write().await;
        *cached = Some(CachedKeys {
            fetched_at: Instant::now(),
            keys,
        });

        key
    }

    async fn fetch(&self) -> Result<JwkSet, ApiError> {
        let resp = self
            .http
            .get(&self.jwks_url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                error!(error = %e, jwks_url = %self.jwks_url, "Failed to fetch identity provider key set");
                ApiError::ServiceUnavailable(
                    "Unable to fetch identity provider keys".to_string(),
                )
            })?;

        let keys: JwkSet = resp.json().await.map_err(|e| {
            error!(error = %e, jwks_url = %self.jwks_url, "Identity provider key set is not valid JSON");
            ApiError::ServiceUnavailable("Unable to fetch identity provider keys".to_string())
        })?;

        debug!(
            key_count = keys.keys.len(),
            jwks_url = %self.jwks_url,
            "Fetched identity provider key set"
        );

        Ok(keys)
    }
}

fn decoding_key_from_jwk(
    jwk: &jsonwebtoken::jwk::Jwk,
    kid: &str,
) -> Result<DecodingKey, ApiError> {
    DecodingKey::from_jwk(jwk).map_err(|e| {
        warn!(error = %e, kid = %kid, "Published key could not be used for verification");
        ApiError::InvalidAuthHeader("Unable to find appropriate key".to_string())
    })
}
