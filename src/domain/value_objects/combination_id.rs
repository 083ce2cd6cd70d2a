//! Combination identifier
//!
//! Derived from the set of loaded package names, independent of the order in
//! which they are listed.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CombinationId(String);

impl CombinationId {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Compute the id of the combination loading exactly `names`.
    pub fn from_package_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let sorted: BTreeSet<String> = names.into_iter().map(|n| n.as_ref().to_string()).collect();
        let mut hasher = Sha256::new();
        for name in &sorted {
            hasher.update(name.as_bytes());
            hasher.update(b"\n");
        }
        Self(format!("{:x}", hasher.finalize()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CombinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
