// Copyright (c) 2025 - Cowboy AI, Inc.
//! Opaque Provider Identifier

use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider-assigned identifier for a subnet, interface or other network entity
///
/// The value is opaque: no format is assumed and no validation is applied.
/// Ordering is plain lexicographic string ordering, which is what sorted
/// identifier output relies on.
///
/// # Examples
///
/// ```rust
/// use cim_network_topology::domain::Id;
///
/// let id = Id::from("subnet-0a1b");
/// assert_eq!(id.as_str(), "subnet-0a1b");
/// assert!(Id::from("bar") < Id::from("foo"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
