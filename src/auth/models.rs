//! Authentication data models

use serde::{Deserialize, Serialize};

/// Access token claims decoded from a verified bearer token
///
/// Audience and issuer are enforced during signature verification, so they
/// are not carried here. The `scope` claim is the provider's space-delimited
/// capability list.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Claims {
    pub sub: String,
    #[serde(default)]
    pub scope: Option<String>,
    pub exp: usize,
}

impl Claims {
    /// Checks the space-delimited `scope` claim for an exact member.
    pub fn has_scope(&self, required: &str) -> bool {
        self.scope
            .as_deref()
            .map(|s| s.split(' ').any(|granted| granted == required))
            .unwrap_or(false)
    }
}

/// Profile stored server-side in the session after a successful callback
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SessionProfile {
    pub user_id: String,
    pub name: Option<String>,
    pub picture: Option<String>,
    pub authenticated_at: String,
}

/// Query parameters the identity provider sends to `/callback`
#[derive(Deserialize, Debug)]
pub struct CallbackParams {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

/// Token endpoint response for the authorization-code exchange
#[derive(Deserialize, Debug)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub id_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
}
