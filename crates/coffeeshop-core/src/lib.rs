//! # Coffee Shop Core
//!
//! Foundational types shared by every crate in the Coffee Shop workspace:
//!
//! - [`errors`]: the error taxonomy and its JSON envelope rendering
//! - [`permissions`]: permission strings checked against token claims
//! - [`serde`]: deserialization helpers for partial-update bodies
//!
//! # Example
//!
//! ```ignore
//! use coffeeshop_core::{AppError, AuthError, permissions};
//!
//! let error = AppError::not_found(anyhow::anyhow!("Drink 7 not found"));
//! let denied = AuthError::forbidden(format!("Missing permission {}", permissions::POST_DRINKS));
//! ```

pub mod errors;
pub mod permissions;
pub mod serde;

pub use errors::{AppError, AuthError, AuthErrorKind};
