//! Permission constants for the Coffee Shop API.
//!
//! These strings must match the permissions granted by the token issuer
//! (the `permissions` claim of an access token).
//!
//! # Example
//!
//! ```ignore
//! use coffeeshop_core::permissions;
//!
//! if claims.has_permission(permissions::PATCH_DRINKS) {
//!     // Update drink
//! }
//! ```

/// Permission to list drinks with full recipe detail
pub const GET_DRINKS_DETAIL: &str = "get:drinks-detail";
/// Permission to create drinks
pub const POST_DRINKS: &str = "post:drinks";
/// Permission to update drinks
pub const PATCH_DRINKS: &str = "patch:drinks";
/// Permission to delete drinks
pub const DELETE_DRINKS: &str = "delete:drinks";

/// Every permission the API checks, in route order.
pub const ALL: &[&str] = &[GET_DRINKS_DETAIL, POST_DRINKS, PATCH_DRINKS, DELETE_DRINKS];
