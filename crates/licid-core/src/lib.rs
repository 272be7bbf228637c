//! # licid-core: License Identity
//!
//! Content-addressed identity for immutable license texts held by a
//! metadata store. Two licenses whose bodies differ only in whitespace
//! layout are the same license: they share a digest, compare equal, and
//! collapse to one entry in any set or map.
//!
//! ## Key Design Principles
//!
//! 1. **`NormalizedText` newtype.** ALL digest computation flows through
//!    `NormalizedText::new()`. `LicenseDigest::compute()` accepts nothing
//!    else, so a digest over un-normalized text cannot be produced.
//!
//! 2. **`LicenseDigest` is 16 raw bytes.** The MD5 output is kept as a
//!    fixed-width array read as an unsigned big-endian integer. It is never
//!    routed through a signed or variable-width representation.
//!
//! 3. **Identity is the digest.** `License` implements `PartialEq`, `Hash`
//!    and `Ord` by hand, delegating to the digest. The URL never takes part.
//!
//! 4. **Compute once.** The digest is filled lazily through a `OnceLock`;
//!    concurrent first readers wait on a single computation.
//!
//! ## Crate Policy
//!
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - The digest is a deduplication key, not a tamper-evidence mechanism.

pub mod digest;
pub mod error;
pub mod license;
pub mod normalize;
pub mod set;

// Re-export primary types for ergonomic imports.
pub use digest::{LicenseDigest, DIGEST_LEN};
pub use error::LicenseError;
pub use license::License;
pub use normalize::{is_license_whitespace, normalize, NormalizedText};
pub use set::LicenseSet;
