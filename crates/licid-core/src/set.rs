//! # License Set: Digest-Keyed Deduplication
//!
//! An insertion-ordered collection holding at most one [`License`] per
//! digest. Metadata stores use it to gather the distinct licenses attached
//! to many installable units before showing or persisting them.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::digest::LicenseDigest;
use crate::license::License;

/// Insertion-ordered set of licenses, unique by digest.
///
/// When an equal license is inserted again, the instance already in the set
/// is kept, along with its URL and verbatim body.
#[derive(Debug, Clone, Default)]
pub struct LicenseSet {
    index: HashMap<LicenseDigest, usize>,
    licenses: Vec<License>,
}

impl LicenseSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty set with room for `capacity` distinct licenses.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            licenses: Vec::with_capacity(capacity),
        }
    }

    /// Insert a license. Returns `false` if an equal license was present.
    pub fn insert(&mut self, license: License) -> bool {
        match self.index.entry(license.digest()) {
            Entry::Occupied(slot) => {
                tracing::debug!(digest = %slot.key(), "collapsed duplicate license");
                false
            }
            Entry::Vacant(slot) => {
                slot.insert(self.licenses.len());
                self.licenses.push(license);
                true
            }
        }
    }

    /// Whether a license equal to `license` is present.
    pub fn contains(&self, license: &License) -> bool {
        self.index.contains_key(&license.digest())
    }

    /// Look up the retained license for a digest.
    pub fn get(&self, digest: &LicenseDigest) -> Option<&License> {
        self.index.get(digest).map(|&i| &self.licenses[i])
    }

    /// Number of distinct licenses.
    pub fn len(&self) -> usize {
        self.licenses.len()
    }

    /// Returns true if the set holds no licenses.
    pub fn is_empty(&self) -> bool {
        self.licenses.is_empty()
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, License> {
        self.licenses.iter()
    }
}

impl Extend<License> for LicenseSet {
    fn extend<I: IntoIterator<Item = License>>(&mut self, iter: I) {
        for license in iter {
            self.insert(license);
        }
    }
}

impl FromIterator<License> for LicenseSet {
    fn from_iter<I: IntoIterator<Item = License>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for LicenseSet {
    type Item = License;
    type IntoIter = std::vec::IntoIter<License>;

    fn into_iter(self) -> Self::IntoIter {
        self.licenses.into_iter()
    }
}

impl<'a> IntoIterator for &'a LicenseSet {
    type Item = &'a License;
    type IntoIter = std::slice::Iter<'a, License>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_reports_novelty() {
        let mut set = LicenseSet::new();
        assert!(set.is_empty());
        assert!(set.insert(License::new(None, "MIT License")));
        assert!(!set.insert(License::new(None, "  MIT\n License ")));
        assert!(set.insert(License::new(None, "BSD License")));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_first_instance_retained() {
        let mut set = LicenseSet::new();
        set.insert(License::new(Some("http://example.com/first"), "EPL 1.0"));
        set.insert(License::new(Some("http://example.com/second"), "EPL   1.0"));

        let kept = set.iter().next().unwrap();
        assert_eq!(kept.body(), "EPL 1.0");
        assert_eq!(kept.url().unwrap().as_str(), "http://example.com/first");
    }

    #[test]
    fn test_contains_and_get() {
        let set: LicenseSet = vec![License::new(None, "Apache License 2.0")]
            .into_iter()
            .collect();
        let probe = License::new(None, "Apache\tLicense\t2.0");
        assert!(set.contains(&probe));
        assert_eq!(set.get(&probe.digest()).unwrap().body(), "Apache License 2.0");
        assert!(!set.contains(&License::new(None, "Apache License 1.1")));
        assert!(set.get(&LicenseDigest::from(0u128)).is_none());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let bodies = ["C", "A", "B", "A ", "C"];
        let set: LicenseSet = bodies.iter().map(|b| License::new(None, *b)).collect();
        let kept: Vec<&str> = set.iter().map(License::body).collect();
        assert_eq!(kept, vec!["C", "A", "B"]);

        let owned: Vec<String> = set.into_iter().map(|l| l.body().to_string()).collect();
        assert_eq!(owned, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_extend_and_borrowed_iteration() {
        let mut set = LicenseSet::with_capacity(4);
        set.extend([License::new(None, "x"), License::new(None, " x ")]);
        assert_eq!((&set).into_iter().count(), 1);
    }
}
