//! Authentication module for Steam bot accounts.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Steam Guard login codes (TOTP variant, 30 second step)
//! - HMAC-SHA1 confirmation signatures for mobile confirmations
//! - Injectable wall-clock sources

mod credentials;
mod guard;
mod clock;

pub use credentials::{
    Credentials, ENV_API_KEY, ENV_IDENTITY_SECRET, ENV_PASSWORD, ENV_SHARED_SECRET, ENV_USERNAME,
    EnvCredentials, SteamGuard,
};
pub use guard::{
    CODE_ALPHABET, CODE_LENGTH, ConfirmationTag, TIME_STEP_SECS, generate_confirmation_signature,
    generate_login_code, generate_login_code_at, generate_login_code_with,
};
pub use clock::{FixedTime, SystemTimeProvider, TimeProvider};
