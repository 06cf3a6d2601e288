//! Credential management for Steam accounts.

use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};

use crate::auth::guard::{
    ConfirmationTag, generate_confirmation_signature, generate_login_code_at,
};
use crate::auth::clock::{SystemTimeProvider, TimeProvider};
use crate::error::SteamError;

/// Environment variable holding the Steam Web API key.
pub const ENV_API_KEY: &str = "STEAM_API_KEY";
/// Environment variable holding the account name.
pub const ENV_USERNAME: &str = "STEAM_USERNAME";
/// Environment variable holding the account password.
pub const ENV_PASSWORD: &str = "STEAM_PASSWORD";
/// Environment variable holding the base64 shared secret.
pub const ENV_SHARED_SECRET: &str = "STEAM_SHARED_SECRET";
/// Environment variable holding the base64 identity secret.
pub const ENV_IDENTITY_SECRET: &str = "STEAM_IDENTITY_SECRET";

/// Account login credentials.
#[derive(Clone)]
pub struct Credentials {
    /// The account name
    pub username: String,
    password: SecretString,
}

impl Credentials {
    /// Create new credentials from an account name and password.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// Get the password for the login form.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_password(&self) -> &str {
        self.password.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// The mobile authenticator secrets of a bot account.
///
/// Both secrets are the base64 strings exported from the authenticator;
/// they are decoded on every use so malformed values surface as
/// [`SteamError::SecretDecode`] from the call that needed them.
#[derive(Clone)]
pub struct SteamGuard {
    shared_secret: SecretString,
    identity_secret: Option<SecretString>,
    clock: Arc<dyn TimeProvider>,
}

impl SteamGuard {
    /// Create a guard from a shared secret and an identity secret.
    pub fn new(shared_secret: impl Into<String>, identity_secret: impl Into<String>) -> Self {
        Self {
            shared_secret: SecretString::from(shared_secret.into()),
            identity_secret: Some(SecretString::from(identity_secret.into())),
            clock: Arc::new(SystemTimeProvider),
        }
    }

    /// Create a guard that can only produce login codes.
    pub fn login_only(shared_secret: impl Into<String>) -> Self {
        Self {
            shared_secret: SecretString::from(shared_secret.into()),
            identity_secret: None,
            clock: Arc::new(SystemTimeProvider),
        }
    }

    /// Replace the clock used for code generation.
    pub fn with_clock(mut self, clock: Arc<dyn TimeProvider>) -> Self {
        self.clock = clock;
        self
    }

    /// Current Unix time according to this guard's clock.
    pub fn unix_time(&self) -> i64 {
        self.clock.unix_time()
    }

    /// Login code for the current time step.
    pub fn login_code(&self) -> Result<String, SteamError> {
        self.login_code_at(self.clock.unix_time())
    }

    /// Login code valid at `unix_seconds`.
    pub fn login_code_at(&self, unix_seconds: i64) -> Result<String, SteamError> {
        generate_login_code_at(self.shared_secret.expose_secret(), unix_seconds)
    }

    /// Whether confirmation signatures can be produced.
    pub fn has_identity_secret(&self) -> bool {
        self.identity_secret.is_some()
    }

    /// Confirmation signature for `tag` at `unix_seconds`.
    pub fn confirmation_key(&self, tag: &str, unix_seconds: i64) -> Result<String, SteamError> {
        let secret = self
            .identity_secret
            .as_ref()
            .ok_or(SteamError::MissingGuard)?;
        generate_confirmation_signature(secret.expose_secret(), tag, unix_seconds)
    }

    /// Confirmation signature for `tag` at the current time.
    ///
    /// Returns the timestamp that was signed alongside the key, since Steam
    /// expects both in the request.
    pub fn confirmation_key_now(&self, tag: ConfirmationTag) -> Result<(i64, String), SteamError> {
        let now = self.clock.unix_time();
        Ok((now, self.confirmation_key(tag.as_str(), now)?))
    }
}

impl std::fmt::Debug for SteamGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SteamGuard")
            .field("shared_secret", &"[REDACTED]")
            .field(
                "identity_secret",
                &self.identity_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

/// Bot account settings read from environment variables.
///
/// Reads `STEAM_API_KEY`, `STEAM_USERNAME`, `STEAM_PASSWORD`,
/// `STEAM_SHARED_SECRET` and `STEAM_IDENTITY_SECRET`.
pub struct EnvCredentials {
    /// Steam Web API key
    pub api_key: SecretString,
    /// Login credentials, if both username and password are set
    pub credentials: Option<Credentials>,
    /// Authenticator secrets, if a shared secret is set
    pub guard: Option<SteamGuard>,
}

impl EnvCredentials {
    /// Read the bot settings from the environment.
    ///
    /// Fails with [`SteamError::MissingApiKey`] if `STEAM_API_KEY` is unset or empty.
    pub fn from_env() -> Result<Self, SteamError> {
        let api_key = non_empty_var(ENV_API_KEY).ok_or(SteamError::MissingApiKey)?;

        let credentials = match (non_empty_var(ENV_USERNAME), non_empty_var(ENV_PASSWORD)) {
            (Some(username), Some(password)) => Some(Credentials::new(username, password)),
            _ => None,
        };

        let guard = non_empty_var(ENV_SHARED_SECRET).map(|shared| {
            match non_empty_var(ENV_IDENTITY_SECRET) {
                Some(identity) => SteamGuard::new(shared, identity),
                None => SteamGuard::login_only(shared),
            }
        });

        Ok(Self {
            api_key: SecretString::from(api_key),
            credentials,
            guard,
        })
    }

    /// Try to read the bot settings from the environment.
    ///
    /// Returns `None` if the API key is not set.
    pub fn try_from_env() -> Option<Self> {
        Self::from_env().ok()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::FixedTime;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("bot_account", "hunter2");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("bot_account"));
        assert!(!debug_str.contains("hunter2"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_guard_debug_redacted() {
        let guard = SteamGuard::new("c2hhcmVk", "aWRlbnRpdHk=");
        let debug_str = format!("{:?}", guard);
        assert!(!debug_str.contains("c2hhcmVk"));
        assert!(!debug_str.contains("aWRlbnRpdHk="));
    }

    #[test]
    fn test_guard_uses_injected_clock() {
        let clock = Arc::new(FixedTime::new(0));
        let guard = SteamGuard::login_only("MTIzNDU2Nzg5MDEyMzQ1Njc4OTA=").with_clock(clock.clone());
        assert_eq!(guard.login_code().unwrap(), "GG5F5");

        clock.set(1_000_000_000);
        assert_eq!(guard.login_code().unwrap(), "D4KB3");
    }

    #[test]
    fn test_confirmation_key_requires_identity_secret() {
        let guard = SteamGuard::login_only("MTIzNDU2Nzg5MDEyMzQ1Njc4OTA=");
        assert!(matches!(
            guard.confirmation_key("conf", 0),
            Err(SteamError::MissingGuard)
        ));
    }

    #[test]
    fn test_confirmation_key_now_signs_clock_time() {
        let guard = SteamGuard::new("MTIzNDU2Nzg5MDEyMzQ1Njc4OTA=", "AAAAAAAAAAAAAAAAAAAAAAAAAAA=")
            .with_clock(Arc::new(FixedTime::new(1_000_000_000)));
        let (time, key) = guard.confirmation_key_now(ConfirmationTag::Conf).unwrap();
        assert_eq!(time, 1_000_000_000);
        assert_eq!(key, "8k3i7HtvxPAfSJnYZUQjsWN+Y64=");
    }
}
