//! # Coffee Shop Auth
//!
//! Everything between a raw `Authorization` header and a set of granted
//! permissions:
//!
//! - [`header`]: `Bearer <token>` parsing
//! - [`claims`]: the decoded access token payload
//! - [`verifier`]: the [`TokenVerifier`] seam with a shared-secret (HS256)
//!   implementation and a JWKS (RS256, Auth0) implementation
//!
//! # Example
//!
//! ```ignore
//! use coffeeshop_auth::{bearer_token, verifier_from_config};
//! use coffeeshop_config::AuthConfig;
//!
//! let verifier = verifier_from_config(&AuthConfig::from_env()).await?;
//! let token = bearer_token(Some("Bearer eyJhbGciOi..."))?;
//! let claims = verifier.verify(token)?;
//! ```

pub mod claims;
pub mod header;
pub mod verifier;

pub use claims::Claims;
pub use header::bearer_token;
pub use verifier::{
    JwksVerifier, SecretVerifier, TokenVerifier, VerificationError, verifier_from_config,
};
