//! Request authentication and authorization.
//!
//! - [`auth`]: the `AuthUser` extractor and the permission check
//! - [`permission`]: middleware that enforces a permission on a route
//!
//! # Authentication Flow
//!
//! 1. Client sends request with `Authorization: Bearer <token>` header
//! 2. `AuthUser` parses the header and verifies the token
//! 3. `require_permission` checks the `permissions` claim
//! 4. Handler executes with the `AuthUser` available as an extension
//!
//! # Example
//!
//! ```ignore
//! use axum::routing::post;
//! use crate::middleware::permission::guarded;
//!
//! let route = guarded(&state, permissions::POST_DRINKS, post(create_drink));
//! ```

pub mod auth;
pub mod permission;
