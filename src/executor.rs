//! Sequence executor: a pure linear fold over a sequence's segments.
//!
//! One accumulator value starts empty and is threaded through the segments
//! in order; each segment resolves its parameters against the runtime
//! `key`/`domain`/`user` strings, invokes its registry function, and
//! replaces the accumulator with the result. There is no other state, no
//! parallelism, and no early exit except on error.

use std::fmt;

use crate::registry::{builtin_registry, Arg, TransformError, TransformRegistry, Value};
use crate::sequence::{Param, Sequence};

/// Error type for sequence execution.
#[derive(Debug, Clone)]
pub enum ExecutionError {
    UnknownFunction(String),
    ArityMismatch { function: String, expected: usize, given: usize },
    UnknownField(String),
    Transform { function: String, source: TransformError },
}

impl fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionError::UnknownFunction(name) => {
                write!(f, "function '{}' not recognized", name)
            }
            ExecutionError::ArityMismatch { function, expected, given } => {
                write!(f, "function '{}' expects {} parameters, {} given", function, expected, given)
            }
            ExecutionError::UnknownField(name) => write!(f, "unknown field '${}'", name),
            ExecutionError::Transform { function, source } => {
                write!(f, "function '{}' failed: {}", function, source)
            }
        }
    }
}

impl std::error::Error for ExecutionError {}

/// Resolve one parameter: field references substitute the matching runtime
/// string, literals pass through.
fn resolve_param(
    param: &Param,
    key: &str,
    domain: &str,
    user: &str,
) -> Result<Arg, ExecutionError> {
    match param {
        Param::Field(field) => match field.as_str() {
            "key" => Ok(Arg::Text(key.to_string())),
            "domain" => Ok(Arg::Text(domain.to_string())),
            "user" => Ok(Arg::Text(user.to_string())),
            other => Err(ExecutionError::UnknownField(other.to_string())),
        },
        Param::Number(n) => Ok(Arg::Int(*n)),
        Param::Str(s) => Ok(Arg::Text(s.clone())),
    }
}

/// Execute a sequence against the built-in registry.
pub fn execute_sequence(
    sequence: &Sequence,
    key: &str,
    domain: &str,
    user: &str,
) -> Result<String, ExecutionError> {
    execute_sequence_with(builtin_registry(), sequence, key, domain, user)
}

/// Execute a sequence against a specific registry, producing the derived
/// string. The final accumulator is coerced to text.
pub fn execute_sequence_with(
    registry: &TransformRegistry,
    sequence: &Sequence,
    key: &str,
    domain: &str,
    user: &str,
) -> Result<String, ExecutionError> {
    let mut acc = Value::empty();

    for segment in &sequence.segments {
        let Some(transformation) = registry.get(&segment.function) else {
            return Err(ExecutionError::UnknownFunction(segment.function.clone()));
        };
        if transformation.arity() != segment.parameters.len() {
            return Err(ExecutionError::ArityMismatch {
                function: segment.function.clone(),
                expected: transformation.arity(),
                given: segment.parameters.len(),
            });
        }

        let args = segment
            .parameters
            .iter()
            .map(|param| resolve_param(param, key, domain, user))
            .collect::<Result<Vec<_>, _>>()?;

        acc = transformation.call(acc, &args).map_err(|source| ExecutionError::Transform {
            function: segment.function.clone(),
            source,
        })?;
    }

    acc.into_text().map_err(|source| ExecutionError::Transform {
        function: sequence
            .segments
            .last()
            .map(|segment| segment.function.clone())
            .unwrap_or_default(),
        source,
    })
}
