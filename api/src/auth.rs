use crate::config::Config;
use crate::errors::ApiError;
use axum::http::{HeaderMap, header};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

/// Claims of a token issued by the identity provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // Subject (user ID)
    #[serde(default)]
    pub email: String,
    pub exp: usize,
}

/// Verify the `Authorization: Bearer <jwt>` header.
pub fn validate_token(headers: &HeaderMap, config: &Config) -> Result<Claims, ApiError> {
    optional_claims(headers, config)?.ok_or(ApiError::Unauthorized)
}

/// Like [`validate_token`], but a missing header means an anonymous caller.
/// A header that is present and invalid is still rejected.
pub fn optional_claims(headers: &HeaderMap, config: &Config) -> Result<Option<Claims>, ApiError> {
    let Some(auth_header) = headers.get(header::AUTHORIZATION) else {
        return Ok(None);
    };
    let auth_header = auth_header.to_str().map_err(|_| ApiError::Unauthorized)?;

    // Check for "Bearer " prefix
    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::Unauthorized)?;

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&[config.jwt_audience.as_str()]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
        &validation,
    )
    .map(|data| Some(data.claims))
    .map_err(|_| ApiError::Unauthorized)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use chrono::{Duration, Utc};
    use jsonwebtoken::{EncodingKey, Header, encode};

    fn token(secret: &str, aud: &str, expires_in: Duration) -> String {
        let claims = serde_json::json!({
            "sub": "1",
            "email": "sarah@example.com",
            "aud": aud,
            "exp": (Utc::now() + expires_in).timestamp(),
        });
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_valid_token_yields_claims() {
        let config = Config::new("secret");
        let bearer = format!("Bearer {}", token("secret", "authenticated", Duration::hours(1)));
        let claims = validate_token(&headers(&bearer), &config).unwrap();
        assert_eq!(claims.sub, "1");
        assert_eq!(claims.email, "sarah@example.com");
    }

    #[test]
    fn test_missing_header() {
        let config = Config::new("secret");
        assert!(matches!(
            validate_token(&HeaderMap::new(), &config),
            Err(ApiError::Unauthorized)
        ));
        assert!(optional_claims(&HeaderMap::new(), &config).unwrap().is_none());
    }

    #[test]
    fn test_rejects_bad_tokens() {
        let config = Config::new("secret");
        let cases = [
            format!("Bearer {}", token("other", "authenticated", Duration::hours(1))),
            format!("Bearer {}", token("secret", "someone-else", Duration::hours(1))),
            format!("Bearer {}", token("secret", "authenticated", Duration::hours(-2))),
            format!("Token {}", token("secret", "authenticated", Duration::hours(1))),
        ];
        for value in cases {
            assert!(optional_claims(&headers(&value), &config).is_err(), "{value}");
        }
    }
}
