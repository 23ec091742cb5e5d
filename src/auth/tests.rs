//! Tests for auth module
//!
//! These tests verify core authentication functionality including:
//! - Authorization header parsing
//! - Scope membership checks
//! - Claims structure

#[cfg(test)]
mod tests {
    use super::super::*;
    use super::super::extractors::parse_bearer;
    use crate::common::ApiError;

    #[test]
    fn test_parse_bearer_missing_header() {
        let result = parse_bearer(None);
        assert!(matches!(result, Err(ApiError::AuthHeaderMissing)));
    }

    #[test]
    fn test_parse_bearer_wrong_scheme() {
        let result = parse_bearer(Some("Basic abc123"));
        match result {
            Err(ApiError::InvalidAuthHeader(desc)) => {
                assert_eq!(desc, "Authorization header must start with Bearer");
            }
            other => panic!("expected invalid_header, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_bearer_missing_token() {
        let result = parse_bearer(Some("Bearer"));
        match result {
            Err(ApiError::InvalidAuthHeader(desc)) => {
                assert_eq!(desc, "Token not found");
            }
            other => panic!("expected invalid_header, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_bearer_extra_parts() {
        let result = parse_bearer(Some("Bearer one two"));
        match result {
            Err(ApiError::InvalidAuthHeader(desc)) => {
                assert_eq!(desc, "Authorization header must be Bearer token");
            }
            other => panic!("expected invalid_header, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_bearer_case_insensitive_scheme() {
        assert_eq!(parse_bearer(Some("bearer token123")).unwrap(), "token123");
        assert_eq!(parse_bearer(Some("BEARER token123")).unwrap(), "token123");
        assert_eq!(parse_bearer(Some("Bearer token123")).unwrap(), "token123");
    }

    #[test]
    fn test_has_scope_membership() {
        let claims = models::Claims {
            sub: "auth0|user".to_string(),
            scope: Some("openid read:data profile".to_string()),
            exp: 9999999999,
        };

        assert!(claims.has_scope("read:data"));
        assert!(claims.has_scope("openid"));
        assert!(!claims.has_scope("write:data"));
        // Substrings of a granted scope must not match
        assert!(!claims.has_scope("read"));
    }

    #[test]
    fn test_has_scope_without_scope_claim() {
        let claims = models::Claims {
            sub: "auth0|user".to_string(),
            scope: None,
            exp: 9999999999,
        };

        assert!(!claims.has_scope("read:data"));
    }

    #[test]
    fn test_session_profile_round_trips_through_json() {
        // The profile is stored in the session store as JSON
        let profile = models::SessionProfile {
            user_id: "auth0|abc123".to_string(),
            name: Some("Test User".to_string()),
            picture: None,
            authenticated_at: "2024-01-01T00:00:00Z".to_string(),
        };

        let json = serde_json::to_string(&profile).expect("serialize profile");
        let back: models::SessionProfile =
            serde_json::from_str(&json).expect("deserialize profile");

        assert_eq!(back.user_id, "auth0|abc123");
        assert_eq!(back.name, Some("Test User".to_string()));
        assert_eq!(back.picture, None);
    }

    #[test]
    fn test_claims_deserialize_ignores_unknown_fields() {
        // Provider tokens carry aud/iss/azp and friends; only the fields we
        // model should be required.
        let claims: models::Claims = serde_json::from_str(
            r#"{"sub":"auth0|abc","aud":["https://api"],"iss":"https://tenant/","azp":"client","scope":"read:data","exp":1735689600}"#,
        )
        .expect("deserialize claims");

        assert_eq!(claims.sub, "auth0|abc");
        assert!(claims.has_scope("read:data"));
    }
}
