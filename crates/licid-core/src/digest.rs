//! # License Digest: Content-Addressed License Identifiers
//!
//! Defines `LicenseDigest`, the 128-bit fingerprint that identifies a
//! license by the canonical form of its body.
//!
//! ## Invariant
//!
//! `LicenseDigest::compute()` accepts only [`NormalizedText`], so every
//! digest in the system was taken over whitespace-canonical text. Two bodies
//! that normalize identically always produce the same digest.
//!
//! MD5 is used for stable fingerprinting only. It offers no collision
//! resistance against an adversary and must not be used to authenticate
//! license content.

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

use crate::error::LicenseError;
use crate::normalize::NormalizedText;

/// Width of a license digest in bytes.
pub const DIGEST_LEN: usize = 16;

/// MD5 fingerprint of a normalized license body.
///
/// The 16 bytes are read as an unsigned big-endian integer: byte-wise
/// ordering and equality agree with numeric ordering and equality of
/// [`as_u128()`](Self::as_u128). Serialized as 32 lowercase hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct LicenseDigest([u8; DIGEST_LEN]);

impl LicenseDigest {
    /// Compute the digest of canonical license text.
    pub fn compute(text: &NormalizedText<'_>) -> Self {
        let hash = Md5::digest(text.as_bytes());
        let mut bytes = [0u8; DIGEST_LEN];
        bytes.copy_from_slice(&hash);
        Self(bytes)
    }

    /// Wrap raw digest bytes, e.g. read back from a store.
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// The raw digest bytes, most significant first.
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// The digest as an unsigned 128-bit integer.
    pub fn as_u128(&self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// Render the digest as 32 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }

    /// Parse a digest from exactly 32 hex digits (either case).
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::InvalidDigest`] on wrong length or non-hex input.
    pub fn from_hex(hex: &str) -> Result<Self, LicenseError> {
        if hex.len() != DIGEST_LEN * 2 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(LicenseError::InvalidDigest(format!(
                "expected {} hex digits, got {hex:?}",
                DIGEST_LEN * 2
            )));
        }
        let mut bytes = [0u8; DIGEST_LEN];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16)
                .map_err(|e| LicenseError::InvalidDigest(e.to_string()))?;
        }
        Ok(Self(bytes))
    }
}

impl From<u128> for LicenseDigest {
    fn from(value: u128) -> Self {
        Self(value.to_be_bytes())
    }
}

impl std::fmt::Display for LicenseDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl std::str::FromStr for LicenseDigest {
    type Err = LicenseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl From<LicenseDigest> for String {
    fn from(digest: LicenseDigest) -> Self {
        digest.to_hex()
    }
}

impl TryFrom<String> for LicenseDigest {
    type Error = LicenseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value)
    }
}
