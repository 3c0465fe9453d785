use crate::{abstract_trait::JwtServiceTrait, errors::ServiceError};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub role: String,
    pub iat: usize,
    pub exp: usize,
}

impl Claims {
    pub fn new(sub: i64, role: String, iat: usize, exp: usize) -> Self {
        Claims {
            sub,
            role,
            iat,
            exp,
        }
    }
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub jwt_secret: String,
    pub expires_secs: i64,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str, expires_secs: i64) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
            expires_secs,
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, user_id: i64, role: &str) -> Result<String, ServiceError> {
        let now = Utc::now();
        let iat = now.timestamp() as usize;
        let exp = (now + Duration::seconds(self.expires_secs)).timestamp() as usize;

        let claims = Claims::new(user_id, role.to_string(), iat, exp);

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str) -> Result<Claims, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let token_data = decode::<Claims>(token, &decoding_key, &Validation::default())
            .map_err(ServiceError::Jwt)?;

        let current_time = Utc::now().timestamp() as usize;

        if token_data.claims.exp < current_time {
            return Err(ServiceError::TokenExpired);
        }

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_round_trip_preserves_claims() {
        let jwt = JwtConfig::new("test-secret", 3600);

        let token = jwt.generate_token(42, "administrator").unwrap();
        let claims = jwt.verify_token(&token).unwrap();

        assert_eq!(claims.sub, 42);
        assert_eq!(claims.role, "administrator");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let signer = JwtConfig::new("secret-a", 3600);
        let verifier = JwtConfig::new("secret-b", 3600);

        let token = signer.generate_token(1, "endUser").unwrap();

        assert!(matches!(
            verifier.verify_token(&token),
            Err(ServiceError::Jwt(_))
        ));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let jwt = JwtConfig::new("test-secret", 3600);

        assert!(matches!(
            jwt.verify_token("not.a.token"),
            Err(ServiceError::Jwt(_))
        ));
    }
}
