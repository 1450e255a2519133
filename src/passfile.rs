//! Configuration root: domains, users and named sequences.
//!
//! A [`Passfile`] owns every [`Domain`] and [`Sequence`]; users reference
//! their sequence by name only, so renaming a sequence rewrites the default
//! name and every referencing user in one pass.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::registry::{builtin_registry, TransformRegistry};
use crate::sequence::{Param, Segment, Sequence};

/// Symbols that may not appear in domain, user or sequence names.
pub const FORBIDDEN_NAME_SYMBOLS: [char; 7] = [':', ';', ',', '<', '>', '[', ']'];

/// Sequence names with fixed meaning; never serialized, never reassignable.
pub const RESERVED_SEQUENCE_NAMES: [&str; 3] = ["LEGACY1", "LEGACY2", "DEFAULT"];

/// First forbidden symbol occurring in a name, if any.
pub fn find_forbidden_symbol(name: &str) -> Option<char> {
    FORBIDDEN_NAME_SYMBOLS.into_iter().find(|&symbol| name.contains(symbol))
}

/// Error type for structural invariant violations; validation reports the
/// first violation it finds.
#[derive(Debug, Clone)]
pub enum ValidationError {
    ForbiddenSymbol { name: String, symbol: char },
    ReservedName(String),
    DuplicateName(String),
    UnknownSequence { user: String, domain: String, sequence: String },
    MissingDefault(String),
    EmptySequence(String),
    UnknownFunction { sequence: String, function: String },
    ArityMismatch { function: String, expected: usize, given: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::ForbiddenSymbol { name, symbol } => {
                write!(f, "forbidden symbol '{}' in name '{}'", symbol, name)
            }
            ValidationError::ReservedName(name) => write!(f, "name '{}' is reserved", name),
            ValidationError::DuplicateName(name) => write!(f, "name '{}' already exists", name),
            ValidationError::UnknownSequence { user, domain, sequence } => write!(
                f,
                "user '{}' of domain '{}' uses unknown sequence '{}'",
                user, domain, sequence
            ),
            ValidationError::MissingDefault(name) => {
                write!(f, "default sequence '{}' does not exist", name)
            }
            ValidationError::EmptySequence(name) => {
                write!(f, "sequence '{}' contains no segments", name)
            }
            ValidationError::UnknownFunction { sequence, function } => {
                write!(f, "function '{}' not recognized in sequence '{}'", function, sequence)
            }
            ValidationError::ArityMismatch { function, expected, given } => {
                write!(f, "function '{}' expects {} parameters, {} given", function, expected, given)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// A user bound to a sequence by name. `DEFAULT` resolves through the
/// passfile's default sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub name: String,
    pub sequence: String,
}

impl User {
    pub fn new(name: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self { name: name.into(), sequence: sequence.into() }
    }
}

/// A domain and its users, keyed by user name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Domain {
    pub name: String,
    pub users: IndexMap<String, User>,
}

impl Domain {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), users: IndexMap::new() }
    }

    /// Add a user, replacing any previous user of the same name.
    pub fn add_user(&mut self, user: User) {
        self.users.insert(user.name.clone(), user);
    }
}

/// The configuration root.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Passfile {
    pub domains: IndexMap<String, Domain>,
    pub sequences: IndexMap<String, Sequence>,
    /// Name of the sequence `DEFAULT` resolves to.
    pub default: String,
}

impl Passfile {
    /// An empty passfile, pre-populated with the two legacy sequences.
    pub fn new() -> Self {
        let mut sequences = IndexMap::new();

        let mut legacy1 = Sequence::new("LEGACY1");
        legacy1.segments.push(Segment::new(
            "bad_legacy1",
            vec![Param::Field("key".into()), Param::Field("domain".into())],
        ));
        sequences.insert(legacy1.name.clone(), legacy1);

        let mut legacy2 = Sequence::new("LEGACY2");
        legacy2.segments.push(Segment::new(
            "bad_legacy2",
            vec![
                Param::Field("key".into()),
                Param::Field("domain".into()),
                Param::Field("user".into()),
            ],
        ));
        sequences.insert(legacy2.name.clone(), legacy2);

        Self { domains: IndexMap::new(), sequences, default: String::new() }
    }

    /// Look up a sequence by name; `DEFAULT` resolves to the default.
    pub fn get_sequence(&self, name: &str) -> Option<&Sequence> {
        if name == "DEFAULT" {
            self.sequences.get(&self.default)
        } else {
            self.sequences.get(name)
        }
    }

    /// Rename a sequence and rewrite everything that references it by name:
    /// the default and every user binding. Renaming a missing sequence is a
    /// no-op; renaming a reserved sequence, or to a taken or invalid name,
    /// is an error.
    pub fn rename_sequence(&mut self, name: &str, new_name: &str) -> Result<(), ValidationError> {
        let actual = if name == "DEFAULT" { self.default.clone() } else { name.to_string() };
        if !self.sequences.contains_key(&actual) {
            return Ok(());
        }
        if RESERVED_SEQUENCE_NAMES.contains(&actual.as_str()) {
            return Err(ValidationError::ReservedName(actual));
        }
        if RESERVED_SEQUENCE_NAMES.contains(&new_name) {
            return Err(ValidationError::ReservedName(new_name.into()));
        }
        if let Some(symbol) = find_forbidden_symbol(new_name) {
            return Err(ValidationError::ForbiddenSymbol { name: new_name.into(), symbol });
        }
        if self.sequences.contains_key(new_name) {
            return Err(ValidationError::DuplicateName(new_name.into()));
        }

        if let Some(mut sequence) = self.sequences.shift_remove(&actual) {
            sequence.name = new_name.to_string();
            self.sequences.insert(new_name.to_string(), sequence);
        }
        if self.default == actual {
            self.default = new_name.to_string();
        }
        for domain in self.domains.values_mut() {
            for user in domain.users.values_mut() {
                if user.sequence == actual {
                    user.sequence = new_name.to_string();
                }
            }
        }
        Ok(())
    }

    /// Check every structural invariant against the built-in registry.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.validate_with(builtin_registry())
    }

    /// Check every structural invariant, reporting the first violation:
    /// symbol-clean names, resolvable user bindings and default, non-empty
    /// sequences, and known functions with matching parameter counts.
    pub fn validate_with(&self, registry: &TransformRegistry) -> Result<(), ValidationError> {
        for domain in self.domains.values() {
            if let Some(symbol) = find_forbidden_symbol(&domain.name) {
                return Err(ValidationError::ForbiddenSymbol { name: domain.name.clone(), symbol });
            }
            for user in domain.users.values() {
                if let Some(symbol) = find_forbidden_symbol(&user.name) {
                    return Err(ValidationError::ForbiddenSymbol {
                        name: user.name.clone(),
                        symbol,
                    });
                }
                if user.sequence != "DEFAULT" && !self.sequences.contains_key(&user.sequence) {
                    return Err(ValidationError::UnknownSequence {
                        user: user.name.clone(),
                        domain: domain.name.clone(),
                        sequence: user.sequence.clone(),
                    });
                }
            }
        }

        for sequence in self.sequences.values() {
            if let Some(symbol) = find_forbidden_symbol(&sequence.name) {
                return Err(ValidationError::ForbiddenSymbol {
                    name: sequence.name.clone(),
                    symbol,
                });
            }
            if sequence.segments.is_empty() {
                return Err(ValidationError::EmptySequence(sequence.name.clone()));
            }
            for segment in &sequence.segments {
                let Some(transformation) = registry.get(&segment.function) else {
                    return Err(ValidationError::UnknownFunction {
                        sequence: sequence.name.clone(),
                        function: segment.function.clone(),
                    });
                };
                if transformation.arity() != segment.parameters.len() {
                    return Err(ValidationError::ArityMismatch {
                        function: segment.function.clone(),
                        expected: transformation.arity(),
                        given: segment.parameters.len(),
                    });
                }
            }
        }

        if !self.sequences.contains_key(&self.default) {
            return Err(ValidationError::MissingDefault(self.default.clone()));
        }
        Ok(())
    }
}

impl Default for Passfile {
    fn default() -> Self {
        Self::new()
    }
}
