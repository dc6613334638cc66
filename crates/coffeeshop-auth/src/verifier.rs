//! Token verification.
//!
//! [`TokenVerifier`] is the seam between the HTTP layer and whoever signs
//! access tokens. Two implementations are provided:
//!
//! - [`SecretVerifier`]: HS256 tokens signed with a shared secret
//! - [`JwksVerifier`]: RS256 tokens signed by an Auth0 tenant, keys selected
//!   by the token's `kid` header from the tenant's JWKS document
//!
//! Both check signature, expiry, and (when configured) audience and issuer.

use std::sync::Arc;

use jsonwebtoken::{
    Algorithm, DecodingKey, Validation, decode, decode_header, errors::ErrorKind, jwk::JwkSet,
};
use tracing::{info, instrument};

use coffeeshop_config::AuthConfig;
use coffeeshop_core::AuthError;

use crate::claims::Claims;

#[derive(Debug, thiserror::Error)]
pub enum VerificationError {
    #[error("Token expired.")]
    Expired,
    #[error("Incorrect claims. Please, check the audience and issuer.")]
    InvalidClaims,
    #[error("Authorization malformed.")]
    MissingKeyId,
    #[error("Unable to find the appropriate key.")]
    UnknownKey,
    #[error("Unable to parse authentication token.")]
    Invalid(#[source] jsonwebtoken::errors::Error),
}

impl From<jsonwebtoken::errors::Error> for VerificationError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            ErrorKind::ExpiredSignature => VerificationError::Expired,
            ErrorKind::InvalidAudience
            | ErrorKind::InvalidIssuer
            | ErrorKind::MissingRequiredClaim(_) => VerificationError::InvalidClaims,
            _ => VerificationError::Invalid(err),
        }
    }
}

impl From<VerificationError> for AuthError {
    fn from(err: VerificationError) -> Self {
        AuthError::invalid_token(err.to_string())
    }
}

/// Verifies a raw token and returns its claims.
pub trait TokenVerifier: Send + Sync {
    fn verify(&self, token: &str) -> Result<Claims, VerificationError>;
}

fn validation(
    algorithm: Algorithm,
    audience: Option<&str>,
    issuer: Option<&str>,
    leeway: u64,
) -> Validation {
    let mut validation = Validation::new(algorithm);
    validation.leeway = leeway;
    validation.set_required_spec_claims(&["exp"]);

    match audience {
        Some(audience) => validation.set_audience(&[audience]),
        None => validation.validate_aud = false,
    }

    if let Some(issuer) = issuer {
        validation.set_issuer(&[issuer]);
    }

    validation
}

/// HS256 verification with a shared secret.
pub struct SecretVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl SecretVerifier {
    pub fn new(secret: &str, audience: Option<&str>, leeway: u64) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: validation(Algorithm::HS256, audience, None, leeway),
        }
    }
}

impl TokenVerifier for SecretVerifier {
    fn verify(&self, token: &str) -> Result<Claims, VerificationError> {
        let data = decode::<Claims>(token, &self.key, &self.validation)?;
        Ok(data.claims)
    }
}

/// RS256 verification against a JWKS document.
///
/// The key set is loaded once, when the verifier is built.
pub struct JwksVerifier {
    keys: JwkSet,
    validation: Validation,
}

impl JwksVerifier {
    pub fn new(keys: JwkSet, audience: Option<&str>, issuer: Option<&str>, leeway: u64) -> Self {
        Self {
            keys,
            validation: validation(Algorithm::RS256, audience, issuer, leeway),
        }
    }

    /// Downloads the key set from `url`.
    #[instrument(skip(audience, issuer))]
    pub async fn fetch(
        url: &str,
        audience: Option<&str>,
        issuer: Option<&str>,
        leeway: u64,
    ) -> anyhow::Result<Self> {
        let keys = reqwest::get(url)
            .await?
            .error_for_status()?
            .json::<JwkSet>()
            .await?;

        info!(keys = keys.keys.len(), "Loaded JWKS");

        Ok(Self::new(keys, audience, issuer, leeway))
    }
}

impl TokenVerifier for JwksVerifier {
    fn verify(&self, token: &str) -> Result<Claims, VerificationError> {
        let header = decode_header(token)?;
        let kid = header.kid.ok_or(VerificationError::MissingKeyId)?;
        let jwk = self.keys.find(&kid).ok_or(VerificationError::UnknownKey)?;
        let key = DecodingKey::from_jwk(jwk)?;

        let data = decode::<Claims>(token, &key, &self.validation)?;
        Ok(data.claims)
    }
}

/// Builds the verifier selected by `config`: JWKS when an Auth0 domain is
/// configured, shared secret otherwise.
pub async fn verifier_from_config(config: &AuthConfig) -> anyhow::Result<Arc<dyn TokenVerifier>> {
    match config.jwks_url() {
        Some(url) => {
            let issuer = config.issuer();
            let verifier = JwksVerifier::fetch(
                &url,
                config.audience.as_deref(),
                issuer.as_deref(),
                config.leeway,
            )
            .await?;
            Ok(Arc::new(verifier))
        }
        None => {
            info!("AUTH0_DOMAIN not set, verifying HS256 tokens with JWT_SECRET");
            Ok(Arc::new(SecretVerifier::new(
                &config.secret,
                config.audience.as_deref(),
                config.leeway,
            )))
        }
    }
}
