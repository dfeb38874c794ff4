//! Admin gate: shared-secret login and signed, time-limited tokens

use crate::config::Config;
use crate::contract::ADMIN_ROLE;
use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// JWT claims of an admin token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub iat: i64,
    pub exp: i64,
    pub iss: String,
    pub jti: String,
}

/// Issues and verifies admin tokens.
///
/// The admin secret is held only as a SHA-256 digest.
#[derive(Clone)]
pub struct AuthGate {
    secret_digest: [u8; 32],
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
    ttl: Duration,
}

impl AuthGate {
    pub fn new(secret_digest: [u8; 32], jwt_secret: &str, issuer: String, ttl: Duration) -> Self {
        Self {
            secret_digest,
            encoding_key: EncodingKey::from_secret(jwt_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(jwt_secret.as_bytes()),
            issuer,
            ttl,
        }
    }

    /// Build the gate from module configuration.
    ///
    /// `admin_password_sha256` takes precedence over `admin_password`; one of
    /// them must be set. `jwt_secret` must be set and non-blank.
    pub fn from_config(cfg: &Config) -> Result<Self> {
        let secret_digest = match (&cfg.admin_password_sha256, &cfg.admin_password) {
            (Some(hashed), _) => parse_digest(hashed)?,
            (None, Some(plain)) => sha256(plain),
            (None, None) => bail!("member_directory: admin_password or admin_password_sha256 must be set"),
        };
        let jwt_secret = match cfg.jwt_secret.as_deref() {
            Some(secret) if !secret.trim().is_empty() => secret,
            _ => bail!("member_directory: jwt_secret must be set"),
        };
        if cfg.token_ttl_hours == 0 {
            bail!("member_directory: token_ttl_hours must be positive");
        }

        Ok(Self::new(
            secret_digest,
            jwt_secret,
            cfg.jwt_issuer.clone(),
            Duration::hours(i64::from(cfg.token_ttl_hours)),
        ))
    }

    /// Compare a login password against the admin secret in constant time
    pub fn check_password(&self, password: &str) -> bool {
        constant_time_eq(&sha256(password), &self.secret_digest)
    }

    /// Issue a token valid for the configured window starting now
    pub fn issue_token(&self) -> Result<String> {
        self.issue_token_at(Utc::now())
    }

    pub fn issue_token_at(&self, issued_at: DateTime<Utc>) -> Result<String> {
        let claims = Claims {
            sub: ADMIN_ROLE.to_string(),
            role: ADMIN_ROLE.to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
            iss: self.issuer.clone(),
            jti: Uuid::new_v4().to_string(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .context("failed to sign admin token")
    }

    /// Decode a token, checking signature, expiry, issuer and role
    pub fn decode(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);
        validation.leeway = 0;

        let claims = decode::<Claims>(token, &self.decoding_key, &validation)?.claims;
        if claims.role != ADMIN_ROLE {
            return Err(anyhow!("unexpected role claim: {}", claims.role));
        }
        Ok(claims)
    }

    /// Whether the token is currently acceptable
    pub fn verify(&self, token: &str) -> bool {
        match self.decode(token) {
            Ok(_) => true,
            Err(e) => {
                tracing::debug!("Rejected admin token: {}", e);
                false
            }
        }
    }
}

fn sha256(value: &str) -> [u8; 32] {
    Sha256::digest(value.as_bytes()).into()
}

fn parse_digest(hex_digest: &str) -> Result<[u8; 32]> {
    let bytes = hex::decode(hex_digest.trim()).context("admin_password_sha256 is not valid hex")?;
    bytes
        .try_into()
        .map_err(|_| anyhow!("admin_password_sha256 must be 32 bytes"))
}

fn constant_time_eq(a: &[u8; 32], b: &[u8; 32]) -> bool {
    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gate(jwt_secret: &str) -> AuthGate {
        AuthGate::new(
            sha256("iamanadmin"),
            jwt_secret,
            "test_issuer".to_string(),
            Duration::hours(24),
        )
    }

    #[test]
    fn test_password_check() {
        let gate = gate("test_secret_key");
        assert!(gate.check_password("iamanadmin"));
        assert!(!gate.check_password("wrong-password"));
        assert!(!gate.check_password(""));
    }

    #[test]
    fn test_create_and_verify_token() {
        let gate = gate("test_secret_key");
        let token = gate.issue_token().unwrap();

        let claims = gate.decode(&token).unwrap();
        assert_eq!(claims.role, "admin");
        assert_eq!(claims.iss, "test_issuer");
        assert!(gate.verify(&token));
        // No revocation: the same token keeps working
        assert!(gate.verify(&token));
    }

    #[test]
    fn test_token_lifetime_is_24_hours() {
        let gate = gate("test_secret_key");
        let token = gate.issue_token().unwrap();
        let claims = gate.decode(&token).unwrap();
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
    }

    #[test]
    fn test_wrong_secret() {
        let token = gate("secret1").issue_token().unwrap();
        assert!(!gate("secret2").verify(&token));
    }

    #[test]
    fn test_expired_token() {
        let gate = gate("test_secret_key");
        let token = gate
            .issue_token_at(Utc::now() - Duration::hours(25))
            .unwrap();
        assert!(!gate.verify(&token));
    }

    #[test]
    fn test_invalid_token() {
        let gate = gate("test_secret_key");
        assert!(!gate.verify("invalid_token"));
        assert!(!gate.verify(""));
    }

    #[test]
    fn test_from_config_prefers_hashed_secret() {
        let cfg = Config {
            admin_password: Some("plain".to_string()),
            admin_password_sha256: Some(hex::encode(sha256("hashed"))),
            jwt_secret: Some("test_secret_key".to_string()),
            ..Config::default()
        };
        let gate = AuthGate::from_config(&cfg).unwrap();
        assert!(gate.check_password("hashed"));
        assert!(!gate.check_password("plain"));
    }

    #[test]
    fn test_from_config_requires_secret() {
        assert!(AuthGate::from_config(&Config::default()).is_err());
    }

    #[test]
    fn test_from_config_requires_jwt_secret() {
        let mut cfg = Config {
            admin_password: Some("iamanadmin".to_string()),
            ..Config::default()
        };
        assert!(AuthGate::from_config(&cfg).is_err());

        cfg.jwt_secret = Some("   ".to_string());
        assert!(AuthGate::from_config(&cfg).is_err());

        cfg.jwt_secret = Some("test_secret_key".to_string());
        assert!(AuthGate::from_config(&cfg).is_ok());
    }

    #[test]
    fn test_no_grace_period_after_expiry() {
        let gate = gate("test_secret_key");
        let token = gate
            .issue_token_at(Utc::now() - Duration::hours(24) - Duration::seconds(5))
            .unwrap();
        assert!(!gate.verify(&token));
    }
}
