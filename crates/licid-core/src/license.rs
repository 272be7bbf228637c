//! # License: Immutable License Text with Digest Identity
//!
//! A `License` carries the body text of a software license (the full text
//! or an annotation) and an optional URL pointing at the full text.
//! Licenses are compared by the digest of their normalized body, so copies
//! of the same text that differ only in line wrapping or indentation
//! deduplicate to a single license.
//!
//! ## Identity
//!
//! - Equality, hashing and ordering all delegate to [`License::digest`].
//! - The URL is auxiliary metadata and never participates in identity.
//!
//! ## Concurrency
//!
//! The digest is computed on first demand inside a `OnceLock`. Concurrent
//! first readers block until the single computation finishes, and every
//! later reader on any thread observes the completed value. A `License` is
//! `Send + Sync` and may be shared freely behind `Arc`.
//!
//! ## URL Handling
//!
//! [`License::new`] and [`License::try_new`] keep a malformed URL out of
//! the value and emit a `warn` event instead of failing. Callers that need
//! to surface the problem use [`License::new_strict`].

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

#[cfg(test)]
use std::sync::atomic::{self, AtomicUsize};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use url::Url;

use crate::digest::LicenseDigest;
use crate::error::LicenseError;
use crate::normalize::NormalizedText;

/// A software license identified by the digest of its normalized body.
pub struct License {
    url: Option<Url>,
    body: String,
    digest: OnceLock<LicenseDigest>,
    #[cfg(test)]
    computations: AtomicUsize,
}

impl License {
    /// Create a license from its body and an optional URL string.
    ///
    /// A URL string that does not parse is dropped and logged at `warn`.
    pub fn new(url: Option<&str>, body: impl Into<String>) -> Self {
        Self::from_parts(url.and_then(parse_lenient), body.into())
    }

    /// Create a license from a body that may be absent.
    ///
    /// This is the entry point for records coming from outside the type
    /// system (stores, documents, foreign callers).
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::InvalidArgument`] when `body` is `None`,
    /// whatever the value of `url`.
    pub fn try_new(url: Option<&str>, body: Option<String>) -> Result<Self, LicenseError> {
        let body = body.ok_or_else(LicenseError::missing_body)?;
        Ok(Self::new(url, body))
    }

    /// Create a license, rejecting a malformed URL instead of dropping it.
    ///
    /// # Errors
    ///
    /// Returns [`LicenseError::MalformedReference`] when `url` is present
    /// and does not parse.
    pub fn new_strict(url: Option<&str>, body: impl Into<String>) -> Result<Self, LicenseError> {
        let url = url
            .map(|reference| {
                Url::parse(reference).map_err(|source| LicenseError::MalformedReference {
                    reference: reference.to_string(),
                    source,
                })
            })
            .transpose()?;
        Ok(Self::from_parts(url, body.into()))
    }

    fn from_parts(url: Option<Url>, body: String) -> Self {
        Self {
            url,
            body,
            digest: OnceLock::new(),
            #[cfg(test)]
            computations: AtomicUsize::new(0),
        }
    }

    /// The URL of the full license text, if one was supplied and parsed.
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// The license body exactly as supplied. Never normalized.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// The digest of the normalized body.
    ///
    /// Computed on the first call and cached for the life of the value.
    pub fn digest(&self) -> LicenseDigest {
        *self.digest.get_or_init(|| {
            #[cfg(test)]
            self.computations.fetch_add(1, atomic::Ordering::SeqCst);

            let text = NormalizedText::new(&self.body);
            let digest = LicenseDigest::compute(&text);
            tracing::trace!(
                %digest,
                body_len = self.body.len(),
                rewritten = text.is_rewritten(),
                "computed license digest"
            );
            digest
        })
    }

    /// The digest if it has already been computed.
    pub fn cached_digest(&self) -> Option<LicenseDigest> {
        self.digest.get().copied()
    }
}

fn parse_lenient(reference: &str) -> Option<Url> {
    match Url::parse(reference) {
        Ok(url) => Some(url),
        Err(error) => {
            tracing::warn!(reference, %error, "discarding malformed license URL");
            None
        }
    }
}

impl Clone for License {
    fn clone(&self) -> Self {
        Self {
            url: self.url.clone(),
            body: self.body.clone(),
            digest: self.digest.clone(),
            #[cfg(test)]
            computations: AtomicUsize::new(self.computations.load(atomic::Ordering::SeqCst)),
        }
    }
}

impl PartialEq for License {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other) || self.digest() == other.digest()
    }
}

impl Eq for License {}

impl Hash for License {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.digest().hash(state);
    }
}

impl PartialOrd for License {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for License {
    fn cmp(&self, other: &Self) -> Ordering {
        if std::ptr::eq(self, other) {
            return Ordering::Equal;
        }
        self.digest().cmp(&other.digest())
    }
}

impl std::fmt::Debug for License {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("License")
            .field("url", &self.url.as_ref().map(Url::as_str))
            .field("body_len", &self.body.len())
            .field("digest", &self.cached_digest())
            .finish()
    }
}

impl std::fmt::Display for License {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "license:{}", self.digest())
    }
}

/// Wire shape of a license: `{"url": ..., "body": ...}`.
#[derive(Serialize)]
struct LicenseRecordRef<'a> {
    url: Option<&'a str>,
    body: &'a str,
}

#[derive(Deserialize)]
struct LicenseRecord {
    url: Option<String>,
    body: Option<String>,
}

impl Serialize for License {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        LicenseRecordRef {
            url: self.url.as_ref().map(Url::as_str),
            body: &self.body,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for License {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let record = LicenseRecord::deserialize(deserializer)?;
        License::try_new(record.url.as_deref(), record.body).map_err(serde::de::Error::custom)
    }
}
