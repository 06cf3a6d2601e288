//! Steam Guard code generation.
//!
//! Steam's mobile authenticator is a TOTP variant (RFC 4226 dynamic truncation,
//! 30 second step) that renders the truncated value in a 26-symbol alphabet
//! instead of decimal digits:
//!
//! ```text
//! counter = floor(unix_time / 30)                      (8 bytes, big-endian)
//! digest  = HMAC-SHA1(base64_decode(shared_secret), counter)
//! offset  = digest[19] & 0x0F
//! value   = digest[offset..offset + 4] as u32 & 0x7FFF_FFFF
//! code    = 5 symbols of value in base 26, least significant first
//! ```
//!
//! Mobile confirmations are authorized with the full digest instead:
//!
//! ```text
//! HMAC-SHA1(base64_decode(identity_secret), be_bytes(unix_time) + tag) -> Base64
//! ```

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::auth::clock::{SystemTimeProvider, TimeProvider};
use crate::error::{SecretKind, SteamError};

type HmacSha1 = Hmac<Sha1>;

/// Symbols used by Steam Guard codes.
pub const CODE_ALPHABET: &[u8; 26] = b"23456789BCDFGHJKMNPQRTVWXY";

/// Number of symbols in a Steam Guard code.
pub const CODE_LENGTH: usize = 5;

/// Seconds per time step.
pub const TIME_STEP_SECS: i64 = 30;

/// Tags Steam uses for mobile confirmation signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfirmationTag {
    /// Listing pending confirmations
    Conf,
    /// Fetching confirmation details
    Details,
    /// Accepting a confirmation
    Allow,
    /// Declining a confirmation
    Cancel,
}

impl ConfirmationTag {
    /// Tag string mixed into the signature.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfirmationTag::Conf => "conf",
            ConfirmationTag::Details => "details",
            ConfirmationTag::Allow => "allow",
            ConfirmationTag::Cancel => "cancel",
        }
    }
}

impl std::fmt::Display for ConfirmationTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generate the Steam Guard login code for the current time.
///
/// # Example
///
/// ```rust
/// use steam_trade_client::auth::generate_login_code;
///
/// let code = generate_login_code("MTIzNDU2Nzg5MDEyMzQ1Njc4OTA=").unwrap();
/// assert_eq!(code.len(), 5);
/// ```
pub fn generate_login_code(shared_secret: &str) -> Result<String, SteamError> {
    generate_login_code_with(shared_secret, &SystemTimeProvider)
}

/// Generate the Steam Guard login code using the given clock.
pub fn generate_login_code_with(
    shared_secret: &str,
    clock: &dyn TimeProvider,
) -> Result<String, SteamError> {
    generate_login_code_at(shared_secret, clock.unix_time())
}

/// Generate the Steam Guard login code valid at `unix_seconds`.
pub fn generate_login_code_at(shared_secret: &str, unix_seconds: i64) -> Result<String, SteamError> {
    let key = decode_secret(shared_secret, SecretKind::Shared)?;
    let counter = unix_seconds.div_euclid(TIME_STEP_SECS) as u64;

    let mut hmac = new_hmac(&key)?;
    hmac.update(&counter.to_be_bytes());
    let digest = hmac.finalize().into_bytes();

    Ok(encode_code(truncate(&digest)))
}

/// Generate the confirmation signature for `tag` at `unix_seconds`.
///
/// Returns the base64-encoded HMAC-SHA1 digest. Any tag is accepted,
/// including the empty string.
///
/// # Example
///
/// ```rust
/// use steam_trade_client::auth::generate_confirmation_signature;
///
/// let key = generate_confirmation_signature("AAAAAAAAAAAAAAAAAAAAAAAAAAA=", "conf", 1_000_000_000)
///     .unwrap();
/// assert_eq!(key, "8k3i7HtvxPAfSJnYZUQjsWN+Y64=");
/// ```
pub fn generate_confirmation_signature(
    identity_secret: &str,
    tag: &str,
    unix_seconds: i64,
) -> Result<String, SteamError> {
    let key = decode_secret(identity_secret, SecretKind::Identity)?;

    let mut hmac = new_hmac(&key)?;
    hmac.update(&unix_seconds.to_be_bytes());
    hmac.update(tag.as_bytes());
    let digest = hmac.finalize().into_bytes();

    Ok(BASE64.encode(digest))
}

fn decode_secret(secret: &str, kind: SecretKind) -> Result<Vec<u8>, SteamError> {
    BASE64
        .decode(secret)
        .map_err(|source| SteamError::SecretDecode { kind, source })
}

fn new_hmac(key: &[u8]) -> Result<HmacSha1, SteamError> {
    HmacSha1::new_from_slice(key)
        .map_err(|e| SteamError::InvalidResponse(format!("Invalid HMAC key: {e}")))
}

/// RFC 4226 dynamic truncation to a 31-bit value.
fn truncate(digest: &[u8]) -> u32 {
    let offset = (digest[19] & 0x0F) as usize;
    (u32::from(digest[offset]) & 0x7F) << 24
        | (u32::from(digest[offset + 1]) & 0xFF) << 16
        | (u32::from(digest[offset + 2]) & 0xFF) << 8
        | (u32::from(digest[offset + 3]) & 0xFF)
}

/// Base-26 rendering, least significant symbol first.
fn encode_code(mut value: u32) -> String {
    let radix = CODE_ALPHABET.len() as u32;
    let mut code = String::with_capacity(CODE_LENGTH);
    for _ in 0..CODE_LENGTH {
        code.push(CODE_ALPHABET[(value % radix) as usize] as char);
        value /= radix;
    }
    code
}
