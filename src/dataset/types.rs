//! Core type definitions for the influencer roster

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Influencer handle (e.g., "@alice"), the unique key of an entity record
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
pub struct Handle(String);

impl Handle {
    pub fn new(handle: impl Into<String>) -> Self {
        Handle(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Handle {
    fn from(s: String) -> Self {
        Handle(s)
    }
}

impl From<&str> for Handle {
    fn from(s: &str) -> Self {
        Handle(s.to_string())
    }
}

// Lets the handle index be probed with a plain `&str` selection key.
impl Borrow<str> for Handle {
    fn borrow(&self) -> &str {
        &self.0
    }
}
