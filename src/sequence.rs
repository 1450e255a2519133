//! Sequence model: a named, ordered list of transform calls.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A segment parameter: a field reference, an integer literal or a string
/// literal. Immutable after parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Param {
    /// `$key`, `$domain` or `$user`, substituted at execution time.
    Field(String),
    /// A decimal integer literal.
    Number(i64),
    /// A double-quoted string literal (no escape processing).
    Str(String),
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Param::Field(name) => write!(f, "${}", name),
            Param::Number(n) => write!(f, "{}", n),
            Param::Str(s) => write!(f, "\"{}\"", s),
        }
    }
}

/// One transform call: a registry function name plus its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub function: String,
    pub parameters: Vec<Param>,
}

impl Segment {
    pub fn new(function: impl Into<String>, parameters: Vec<Param>) -> Self {
        Self { function: function.into(), parameters }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params: Vec<String> = self.parameters.iter().map(Param::to_string).collect();
        write!(f, "{}({})", self.function, params.join(", "))
    }
}

/// A named transformation sequence.
///
/// `is_default` marks the sequence a configuration file flagged with `+`;
/// at most one sequence per file carries it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sequence {
    pub name: String,
    pub segments: Vec<Segment>,
    pub is_default: bool,
}

impl Sequence {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), segments: Vec::new(), is_default: false }
    }

    pub fn with_segments(name: impl Into<String>, segments: Vec<Segment>) -> Self {
        Self { name: name.into(), segments, is_default: false }
    }
}

/// Sequences compare structurally over their segments only; two sequences
/// with different names but the same segments derive the same passwords.
impl PartialEq for Sequence {
    fn eq(&self, other: &Self) -> bool {
        self.segments == other.segments
    }
}

impl Eq for Sequence {}
