use std::env;

/// Token verification settings.
///
/// When `AUTH0_DOMAIN` is set, access tokens are RS256 tokens verified against
/// the tenant's JWKS document. Otherwise tokens are HS256 tokens signed with
/// `JWT_SECRET`.
#[derive(Clone, Debug)]
pub struct AuthConfig {
    pub auth0_domain: Option<String>,
    pub audience: Option<String>,
    pub secret: String,
    /// Clock skew tolerated when checking `exp`, in seconds.
    pub leeway: u64,
}

impl AuthConfig {
    pub fn from_env() -> Self {
        Self {
            auth0_domain: non_empty(env::var("AUTH0_DOMAIN").ok()),
            audience: non_empty(env::var("API_AUDIENCE").ok()),
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            leeway: env::var("JWT_LEEWAY")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(60),
        }
    }

    /// Expected `iss` claim, `https://{domain}/` for an Auth0 tenant.
    pub fn issuer(&self) -> Option<String> {
        self.auth0_domain
            .as_deref()
            .map(|domain| format!("https://{}/", domain.trim_end_matches('/')))
    }

    pub fn jwks_url(&self) -> Option<String> {
        self.issuer()
            .map(|issuer| format!("{}.well-known/jwks.json", issuer))
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
