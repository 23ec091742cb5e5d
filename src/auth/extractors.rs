//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
    response::Redirect,
};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, decode_header, Algorithm, DecodingKey, Validation};
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_sessions::Session;
use tracing::warn;

use super::models::{Claims, SessionProfile};
use crate::common::helpers::safe_token_log;
use crate::common::{ApiError, AppState};

/// Session key under which the authenticated profile is stored
pub const PROFILE_KEY: &str = "profile";

/// Verified bearer-token claims extractor
///
/// Parses the `Authorization` header, resolves the signing key from the
/// identity provider's key set, and verifies signature, audience, and
/// issuer. Scope checks are a separate gate performed by handlers after
/// this extractor succeeds.
#[derive(Debug)]
pub struct BearerClaims(pub Claims);

#[async_trait]
impl<S> FromRequestParts<S> for BearerClaims
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let app_state = state_lock.read().await.clone();

        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok());

        let token = parse_bearer(header)?;

        let token_header = decode_header(token).map_err(|e| {
            warn!(error = %e, token = %safe_token_log(token), "Bearer token header could not be parsed");
            ApiError::InvalidAuthHeader(
                "Invalid header. Use an RS256 signed JWT Access Token".to_string(),
            )
        })?;

        if token_header.alg != Algorithm::RS256 {
            warn!(alg = ?token_header.alg, "Bearer token uses an unsupported algorithm");
            return Err(ApiError::InvalidAuthHeader(
                "Invalid header. Use an RS256 signed JWT Access Token".to_string(),
            ));
        }

        let kid = token_header.kid.ok_or_else(|| {
            warn!("Bearer token header is missing a key id");
            ApiError::InvalidAuthHeader("Unable to find appropriate key".to_string())
        })?;

        let key = app_state.jwks.decoding_key(&kid).await?;

        let claims = verify_token(
            token,
            &key,
            &app_state.config.audience,
            &app_state.config.issuer(),
        )?;

        Ok(BearerClaims(claims))
    }
}

/// Extracts the bare token from an `Authorization` header value.
///
/// The header must be present and contain exactly two space-separated
/// parts, the first case-insensitively equal to `Bearer`.
pub(crate) fn parse_bearer(header: Option<&str>) -> Result<&str, ApiError> {
    let header = match header {
        Some(h) => h,
        None => {
            warn!("Authentication failed: missing Authorization header");
            return Err(ApiError::AuthHeaderMissing);
        }
    };

    let mut parts = header.split_whitespace();
    let scheme = parts.next().unwrap_or("");
    let token = parts.next();

    if !scheme.eq_ignore_ascii_case("bearer") {
        warn!("Authentication failed: Authorization scheme is not Bearer");
        return Err(ApiError::InvalidAuthHeader(
            "Authorization header must start with Bearer".to_string(),
        ));
    }

    let token = match token {
        Some(t) => t,
        None => {
            warn!("Authentication failed: Authorization header has no token");
            return Err(ApiError::InvalidAuthHeader("Token not found".to_string()));
        }
    };

    if parts.next().is_some() {
        warn!("Authentication failed: Authorization header has extra parts");
        return Err(ApiError::InvalidAuthHeader(
            "Authorization header must be Bearer token".to_string(),
        ));
    }

    Ok(token)
}

/// Verifies signature, audience, and issuer, and decodes the claim set.
pub(crate) fn verify_token(
    token: &str,
    key: &DecodingKey,
    audience: &str,
    issuer: &str,
) -> Result<Claims, ApiError> {
    let mut validation = Validation::new(Algorithm::RS256);
    validation.set_audience(&[audience]);
    validation.set_issuer(&[issuer]);

    match decode::<Claims>(token, key, &validation) {
        Ok(data) => Ok(data.claims),
        Err(e) => match e.kind() {
            ErrorKind::ExpiredSignature => {
                warn!("Bearer token is expired");
                Err(ApiError::TokenExpired)
            }
            ErrorKind::InvalidAudience
            | ErrorKind::InvalidIssuer
            | ErrorKind::MissingRequiredClaim(_) => {
                warn!(error = %e, "Bearer token claims do not match this API");
                Err(ApiError::InvalidClaims)
            }
            _ => {
                warn!(error = %e, token = %safe_token_log(token), "Bearer token verification failed");
                Err(ApiError::InvalidAuthHeader(
                    "Unable to parse authentication token".to_string(),
                ))
            }
        },
    }
}

/// Session-cookie guard for browser-facing pages
///
/// Unauthenticated requests are redirected to the login entry point; no
/// error payload is produced.
#[derive(Debug)]
pub struct SessionUser(pub SessionProfile);

#[async_trait]
impl<S> FromRequestParts<S> for SessionUser
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|_| Redirect::to("/login"))?;

        match session.get::<SessionProfile>(PROFILE_KEY).await {
            Ok(Some(profile)) => Ok(SessionUser(profile)),
            _ => Err(Redirect::to("/login")),
        }
    }
}
