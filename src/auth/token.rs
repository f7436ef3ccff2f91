use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Sessions last one hour; there is no refresh, an expired token means
/// logging in again.
const TOKEN_TTL_HOURS: i64 = 1;

/// Represents the claims encoded within a session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject of the token: the user's unique identifier.
    pub sub: i32,
    /// Expiration timestamp (seconds since epoch).
    pub exp: usize,
}

/// Generates a signed session token for a given user ID.
///
/// The token expires one hour after issuance. The signing secret comes from
/// the caller (ultimately `Config`), never from ambient process state.
///
/// # Arguments
/// * `user_id` - The ID of the user for whom the token is generated.
/// * `secret` - The HMAC signing secret.
pub fn generate_token(user_id: i32, secret: &str) -> Result<String, AppError> {
    let expiration = chrono::Utc::now()
        .checked_add_signed(chrono::Duration::hours(TOKEN_TTL_HOURS))
        .expect("valid timestamp")
        .timestamp() as usize;

    let claims = Claims {
        sub: user_id,
        exp: expiration,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::InternalServerError(format!("Failed to generate token: {}", e)))
}

/// Verifies a session token and decodes its claims.
///
/// Fails with `AppError::TokenInvalid` if the token is malformed, its
/// signature does not match `secret`, or it has expired.
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| AppError::TokenInvalid(format!("Invalid token: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_generation_and_verification() {
        let user_id = 1;
        let token = generate_token(user_id, "test_secret_for_gen_verify").unwrap();
        let claims = verify_token(&token, "test_secret_for_gen_verify").unwrap();
        assert_eq!(claims.sub, user_id);
    }

    #[test]
    fn test_token_expiration() {
        let secret = "test_secret_for_expiration";

        // Forge a token that expired two hours ago, past any clock leeway.
        let expiration = chrono::Utc::now()
            .checked_sub_signed(chrono::Duration::hours(2))
            .expect("valid timestamp")
            .timestamp() as usize;

        let claims_expired = Claims {
            sub: 2,
            exp: expiration,
        };
        let expired_token = encode(
            &Header::default(),
            &claims_expired,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap();

        match verify_token(&expired_token, secret) {
            Err(AppError::TokenInvalid(msg)) => {
                assert!(
                    msg.contains("ExpiredSignature"),
                    "Unexpected error message for expired token: {}",
                    msg
                );
            }
            Ok(_) => panic!("Token should have been invalid due to expiration"),
            Err(e) => panic!("Unexpected error type for expired token: {:?}", e),
        }
    }

    #[test]
    fn test_invalid_token_signature() {
        let token = generate_token(3, "signing_secret").unwrap();

        match verify_token(&token, "a_completely_different_secret") {
            Err(AppError::TokenInvalid(msg)) => {
                assert!(
                    msg.contains("InvalidSignature") || msg.contains("InvalidToken"),
                    "Unexpected error message for invalid signature: {}",
                    msg
                );
            }
            Ok(_) => panic!("Token should have been invalid due to signature mismatch"),
            Err(e) => panic!("Unexpected error type for invalid signature: {:?}", e),
        }
    }
}
