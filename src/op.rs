// src/op.rs

//! Operation tags.

use std::fmt;

/// Identifies where an error originated, conventionally a call path such as
/// `"database.Service.fetchStation"`.
///
/// The empty tag is the zero value returned for absent errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Op(String);

impl Op {
    /// The zero value.
    pub const EMPTY: Op = Op(String::new());

    pub fn new(tag: impl Into<String>) -> Self {
        Op(tag.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Op {
    fn from(s: &str) -> Self {
        Op(s.to_string())
    }
}

impl From<String> for Op {
    fn from(s: String) -> Self {
        Op(s)
    }
}

impl From<&Op> for Op {
    fn from(op: &Op) -> Self {
        op.clone()
    }
}

impl AsRef<str> for Op {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Op {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Op {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for Op {
    fn eq(&self, other: &String) -> bool {
        &self.0 == other
    }
}
