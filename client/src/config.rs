//! Session/auth configuration for the browser client.

/// Local-storage key holding the persisted `{ token, user }` pair.
pub const DEFAULT_STORAGE_KEY: &str = "ncir_auth";
pub const DEFAULT_LOGIN_ENDPOINT: &str = "/api/auth/login";
pub const DEFAULT_LOGIN_TIMEOUT_MS: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthConfig {
    pub storage_key: String,
    pub login_endpoint: String,
    pub login_timeout_ms: u32,
    /// Synthesize a local demo session when the auth endpoint fails.
    pub demo_fallback: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            login_endpoint: DEFAULT_LOGIN_ENDPOINT.to_owned(),
            login_timeout_ms: DEFAULT_LOGIN_TIMEOUT_MS,
            demo_fallback: true,
        }
    }
}

impl AuthConfig {
    /// Same as the default but with the demo fallback disabled, so remote
    /// failures propagate to the login form.
    #[must_use]
    pub fn strict() -> Self {
        Self { demo_fallback: false, ..Self::default() }
    }
}
