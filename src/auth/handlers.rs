//! Authentication handlers
//!
//! Browser-facing login/callback/logout flow against the external identity
//! provider, plus the session-protected dashboard. Token acquisition and
//! verification for the JSON API live in `extractors` and `jwks`.

use axum::extract::{Extension, Query};
use axum::response::{Html, Redirect};
use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::Rng;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower_sessions::Session;
use tracing::{debug, error, info, warn};

use super::extractors::{SessionUser, PROFILE_KEY};
use super::models::{CallbackParams, SessionProfile, TokenResponse};
use crate::common::{html_escape, ApiError, AppState};

const OAUTH_STATE_KEY: &str = "oauth_state";

/// GET /login - Start the authorization-code flow
///
/// Stores a state nonce in the session and redirects to the provider's
/// authorize endpoint.
pub async fn login(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: Session,
) -> Result<Redirect, ApiError> {
    let state = state_lock.read().await.clone();

    let nonce: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect();

    session
        .insert(OAUTH_STATE_KEY, &nonce)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to store OAuth state in session");
            ApiError::InternalServer("session error".to_string())
        })?;

    let authorize_url = format!(
        "https://{}/authorize?response_type=code&client_id={}&redirect_uri={}&scope={}&audience={}&state={}",
        state.config.auth_domain,
        urlencoding::encode(&state.config.client_id),
        urlencoding::encode(&state.config.redirect_uri()),
        urlencoding::encode("openid profile email"),
        urlencoding::encode(&state.config.audience),
        urlencoding::encode(&nonce),
    );

    info!("Redirecting to identity provider authorize endpoint");
    Ok(Redirect::to(&authorize_url))
}

/// GET /callback - Handle the provider redirect
///
/// Validates the state nonce, exchanges the authorization code for tokens,
/// fetches the userinfo profile, and establishes the session.
pub async fn callback(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<Redirect, ApiError> {
    let state = state_lock.read().await.clone();

    if let Some(err) = params.error {
        warn!(
            oauth_error = %err,
            description = params.error_description.as_deref().unwrap_or(""),
            "Identity provider returned an error callback"
        );
        return Err(ApiError::BadRequest(format!(
            "identity provider error: {}",
            err
        )));
    }

    let expected_state: Option<String> =
        session.remove(OAUTH_STATE_KEY).await.unwrap_or_default();
    match (expected_state.as_deref(), params.state.as_deref()) {
        (Some(expected), Some(got)) if expected == got => {}
        _ => {
            warn!("OAuth callback state mismatch");
            return Err(ApiError::BadRequest("state mismatch".to_string()));
        }
    }

    let code = params.code.ok_or_else(|| {
        warn!("OAuth callback missing authorization code");
        ApiError::BadRequest("No authorization code provided".to_string())
    })?;

    let token_url = format!("https://{}/oauth/token", state.config.auth_domain);
    let token_resp = state
        .http
        .post(&token_url)
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", &state.config.client_id),
            ("client_secret", &state.config.client_secret),
            ("code", &code),
            ("redirect_uri", &state.config.redirect_uri()),
        ])
        .send()
        .await;

    let tokens: TokenResponse = match token_resp {
        Ok(r) if r.status().is_success() => r.json().await.map_err(|e| {
            error!(error = %e, "Token endpoint returned malformed JSON");
            ApiError::InternalServer("token exchange failed".to_string())
        })?,
        Ok(r) => {
            warn!(http_status = %r.status(), "Token exchange was rejected by the provider");
            return Err(ApiError::BadRequest(
                "authorization code exchange failed".to_string(),
            ));
        }
        Err(e) => {
            error!(error = %e, endpoint = %token_url, "HTTP error contacting token endpoint");
            return Err(ApiError::ServiceUnavailable(
                "identity provider unavailable".to_string(),
            ));
        }
    };

    debug!(
        has_id_token = tokens.id_token.is_some(),
        token_type = tokens.token_type.as_deref().unwrap_or(""),
        expires_in = tokens.expires_in.unwrap_or_default(),
        "Authorization code exchanged for tokens"
    );

    let userinfo_url = format!("https://{}/userinfo", state.config.auth_domain);
    let userinfo: serde_json::Value = match state
        .http
        .get(&userinfo_url)
        .bearer_auth(&tokens.access_token)
        .send()
        .await
    {
        Ok(r) if r.status().is_success() => r.json().await.map_err(|e| {
            error!(error = %e, "Userinfo endpoint returned malformed JSON");
            ApiError::InternalServer("userinfo fetch failed".to_string())
        })?,
        Ok(r) => {
            warn!(http_status = %r.status(), "Userinfo request was rejected by the provider");
            return Err(ApiError::InternalServer("userinfo fetch failed".to_string()));
        }
        Err(e) => {
            error!(error = %e, endpoint = %userinfo_url, "HTTP error contacting userinfo endpoint");
            return Err(ApiError::ServiceUnavailable(
                "identity provider unavailable".to_string(),
            ));
        }
    };

    let user_id = userinfo
        .get("sub")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| {
            warn!("Userinfo response is missing the subject field");
            ApiError::InternalServer("userinfo missing subject".to_string())
        })?;

    let profile = SessionProfile {
        user_id,
        name: userinfo
            .get("name")
            .and_then(|v| v.as_str())
            .map(str::to_string),
        picture: userinfo
            .get("picture")
            .and_then(|v| v.as_str())
            .map(str::to_string),
        authenticated_at: Utc::now().to_rfc3339(),
    };

    session.insert(PROFILE_KEY, &profile).await.map_err(|e| {
        error!(error = %e, "Failed to store profile in session");
        ApiError::InternalServer("session error".to_string())
    })?;

    info!(user_id = %profile.user_id, "User session established via identity provider");

    Ok(Redirect::to("/dashboard"))
}

/// GET /logout - Destroy the session and log out of the provider
pub async fn logout(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    _user: SessionUser,
    session: Session,
) -> Result<Redirect, ApiError> {
    let state = state_lock.read().await.clone();

    session.flush().await.map_err(|e| {
        error!(error = %e, "Failed to destroy session on logout");
        ApiError::InternalServer("session error".to_string())
    })?;

    let logout_url = format!(
        "https://{}/v2/logout?client_id={}&returnTo={}",
        state.config.auth_domain,
        urlencoding::encode(&state.config.client_id),
        urlencoding::encode(&state.config.base_url),
    );

    info!("User logout successful");
    Ok(Redirect::to(&logout_url))
}

/// GET /dashboard - Session-protected profile page
pub async fn dashboard(SessionUser(profile): SessionUser) -> Html<String> {
    let display_name = profile.name.as_deref().unwrap_or(&profile.user_id);
    let picture_tag = profile
        .picture
        .as_deref()
        .map(|p| format!(r#"<img src="{}" alt="avatar" width="64" height="64">"#, html_escape(p)))
        .unwrap_or_default();

    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Dashboard</title></head>
<body>
    <h1>Welcome, {name}!</h1>
    {picture}
    <p>User id: {user_id}</p>
    <p>Signed in at: {authenticated_at}</p>
    <p><a href="/logout">Log out</a></p>
</body>
</html>
"#,
        name = html_escape(display_name),
        picture = picture_tag,
        user_id = html_escape(&profile.user_id),
        authenticated_at = html_escape(&profile.authenticated_at),
    ))
}
