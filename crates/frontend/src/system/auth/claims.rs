//! Client-side decode of the access token payload.
//!
//! The signature is never checked here: the result is a hint for what the
//! UI shows, not a permission. The server re-validates the token on every
//! request.

use base64::Engine;
use contracts::auth::TokenPayload;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ClaimsError {
    #[error("token does not have three segments")]
    SegmentCount,
    #[error("token payload is not valid base64")]
    Base64,
    #[error("token payload is not valid JSON")]
    Payload,
}

/// Identity attributes shown in the UI and used to gate navigation.
/// Display hint only; never a substitute for server-side authorization.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayClaims {
    pub user_id: i64,
    pub username: String,
    pub is_admin: bool,
}

/// Decode the middle segment of a JWT-shaped access token.
///
/// Fails on malformed input (wrong segment count, non-base64, non-JSON);
/// fields absent from the payload default rather than fail.
pub fn decode(access_token: &str) -> Result<DisplayClaims, ClaimsError> {
    let mut segments = access_token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next(), segments.next()) {
        (Some(_), Some(payload), Some(_), None) => payload,
        _ => return Err(ClaimsError::SegmentCount),
    };

    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| ClaimsError::Base64)?;

    let payload: TokenPayload =
        serde_json::from_slice(&bytes).map_err(|_| ClaimsError::Payload)?;

    Ok(DisplayClaims {
        user_id: payload.user_id,
        username: payload.username,
        is_admin: payload.is_staff,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(json: &str) -> String {
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(json);
        format!("header.{}.signature", payload)
    }

    #[test]
    fn test_decode_full_payload() {
        let token =
            token_with_payload(r#"{"user_id":7,"username":"alice","is_staff":true,"exp":99}"#);
        let claims = decode(&token).unwrap();
        assert_eq!(claims.user_id, 7);
        assert_eq!(claims.username, "alice");
        assert!(claims.is_admin);
    }

    #[test]
    fn test_decode_is_deterministic() {
        let token = token_with_payload(r#"{"user_id":3,"username":"bob","is_staff":false}"#);
        assert_eq!(decode(&token).unwrap(), decode(&token).unwrap());
    }

    #[test]
    fn test_missing_fields_default() {
        let claims = decode(&token_with_payload("{}")).unwrap();
        assert_eq!(claims.user_id, 0);
        assert_eq!(claims.username, "");
        assert!(!claims.is_admin);
    }

    #[test]
    fn test_wrong_segment_count_fails() {
        assert_eq!(decode("onlyonesegment"), Err(ClaimsError::SegmentCount));
        assert_eq!(decode("two.segments"), Err(ClaimsError::SegmentCount));
        assert_eq!(decode("a.b.c.d"), Err(ClaimsError::SegmentCount));
    }

    #[test]
    fn test_non_base64_payload_fails() {
        assert_eq!(decode("a.$$$$.c"), Err(ClaimsError::Base64));
    }

    #[test]
    fn test_non_json_payload_fails() {
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode("not json");
        let token = format!("a.{}.c", payload);
        assert_eq!(decode(&token), Err(ClaimsError::Payload));
    }
}
