use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: u8,
    pub exp: usize,
}

/// Decode the claims of a bearer token without verifying its signature.
///
/// The console never holds the signing secret; the server re-verifies
/// every request. Expiry is still enforced here so a stale credential is
/// treated as absent instead of producing a doomed request.
pub fn inspect_token(token: &str) -> Result<Claims, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();

    decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map(|data| data.claims)
        .map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{EncodingKey, Header, encode};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn now() -> usize {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs() as usize
    }

    fn token_with_exp(exp: usize) -> String {
        let claims = Claims {
            sub: "hradmin".to_string(),
            role: 2,
            exp,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"server-side-secret"),
        )
        .unwrap()
    }

    #[test]
    fn live_token_decodes_without_secret() {
        let claims = inspect_token(&token_with_exp(now() + 900)).unwrap();
        assert_eq!(claims.sub, "hradmin");
        assert_eq!(claims.role, 2);
    }

    #[test]
    fn expired_token_is_rejected() {
        assert!(inspect_token(&token_with_exp(now() - 3600)).is_err());
    }

    #[test]
    fn garbage_token_is_rejected() {
        assert!(inspect_token("not-a-jwt").is_err());
    }
}
