//! Operator-supplied profile identifier and the set it is validated against.

use std::collections::BTreeSet;
use std::fmt;

/// Name of the user profile the configuration is deployed into.
///
/// Kept verbatim: whitespace, separators, `..` and case all take part in the
/// membership check. Callers reading a line strip its terminator first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier(String);

impl Identifier {
    pub fn new(raw: &str) -> Self {
        Self(raw.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Names of the entries found under the users root at listing time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDirectorySet(BTreeSet<String>);

impl UserDirectorySet {
    /// Exact, case-sensitive membership.
    pub fn contains(&self, identifier: &Identifier) -> bool {
        self.0.contains(identifier.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for UserDirectorySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}
