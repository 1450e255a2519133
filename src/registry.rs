//! Transform registry: the fixed catalog of named transformation functions.
//!
//! The registry maps a function name to its declared parameters and
//! implementation. It is built once at startup and read-only afterwards;
//! sequences reference entries by name and are checked against the declared
//! parameter count both at validation and at execution time.

use std::fmt;

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::transform;
use crate::transform::legacy;

/// Error type for transform invocations.
#[derive(Debug, Clone)]
pub enum TransformError {
    InvalidArgs(String),
    Encoding(String),
}

impl fmt::Display for TransformError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformError::InvalidArgs(msg) => write!(f, "invalid arguments: {}", msg),
            TransformError::Encoding(msg) => write!(f, "encoding error: {}", msg),
        }
    }
}

impl std::error::Error for TransformError {}

/// The accumulator threaded through a sequence.
///
/// Transforms may hand back either representation; the next transform (and
/// the final output step) coerces as needed. Text-to-bytes coercion is
/// UTF-8 encoding and always succeeds; bytes-to-text requires valid UTF-8.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Text(String),
    Bytes(Vec<u8>),
}

impl Value {
    /// The empty text value every sequence starts from.
    pub fn empty() -> Self {
        Value::Text(String::new())
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Value::Text(s) => s.into_bytes(),
            Value::Bytes(b) => b,
        }
    }

    pub fn into_text(self) -> Result<String, TransformError> {
        match self {
            Value::Text(s) => Ok(s),
            Value::Bytes(b) => String::from_utf8(b)
                .map_err(|_| TransformError::Encoding("value is not valid UTF-8 text".into())),
        }
    }

    fn as_seed_bytes(&self) -> &[u8] {
        match self {
            Value::Text(s) => s.as_bytes(),
            Value::Bytes(b) => b.as_slice(),
        }
    }
}

/// A resolved segment parameter: the literal (or field-substituted) values
/// a transform is invoked with.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Int(i64),
    Text(String),
}

impl Arg {
    /// Textual form; integers render in decimal.
    pub fn to_text(&self) -> String {
        match self {
            Arg::Int(n) => n.to_string(),
            Arg::Text(s) => s.clone(),
        }
    }

    pub fn as_int(&self) -> Result<i64, TransformError> {
        match self {
            Arg::Int(n) => Ok(*n),
            Arg::Text(s) => Err(TransformError::InvalidArgs(format!(
                "expected an integer, got string \"{}\"",
                s
            ))),
        }
    }

    pub fn as_str(&self) -> Result<&str, TransformError> {
        match self {
            Arg::Text(s) => Ok(s),
            Arg::Int(n) => {
                Err(TransformError::InvalidArgs(format!("expected a string, got number {}", n)))
            }
        }
    }
}

/// A transform implementation adapted to the registry calling convention.
pub type TransformFn = fn(Value, &[Arg]) -> Result<Value, TransformError>;

/// A registry entry: declared parameter names, a one-line description and
/// the implementation.
pub struct Transformation {
    params: &'static [&'static str],
    doc: &'static str,
    func: TransformFn,
}

impl Transformation {
    /// Declared parameter count, excluding the accumulator.
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// `name(param, ...): description` rendering for listings.
    pub fn describe(&self, name: &str) -> String {
        format!("{}({}):\n  {}", name, self.params.join(", "), self.doc)
    }

    /// Invoke the transform on an accumulator value.
    pub fn call(&self, input: Value, args: &[Arg]) -> Result<Value, TransformError> {
        if args.len() != self.arity() {
            return Err(TransformError::InvalidArgs(format!(
                "expected {} parameters, {} given",
                self.arity(),
                args.len()
            )));
        }
        (self.func)(input, args)
    }
}

/// Registry of transformation functions, in catalog order.
pub struct TransformRegistry {
    transforms: IndexMap<String, Transformation>,
}

impl TransformRegistry {
    /// Create a new empty transform registry.
    pub fn new() -> Self {
        Self { transforms: IndexMap::new() }
    }

    /// Register a transformation under a name.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        params: &'static [&'static str],
        doc: &'static str,
        func: TransformFn,
    ) {
        self.transforms.insert(name.into(), Transformation { params, doc, func });
    }

    /// Look up a transformation by name.
    pub fn get(&self, name: &str) -> Option<&Transformation> {
        self.transforms.get(name)
    }

    /// Check if a transformation is registered.
    pub fn has_transform(&self, name: &str) -> bool {
        self.transforms.contains_key(name)
    }

    /// Number of registered transformations.
    pub fn count(&self) -> usize {
        self.transforms.len()
    }

    /// Iterate over `(name, transformation)` in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Transformation)> {
        self.transforms.iter().map(|(name, t)| (name.as_str(), t))
    }

    /// The full built-in catalog.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("base58", &[], "converts the input to base58", apply_base58);
        registry.register("base64", &[], "converts the input to base64", apply_base64);
        registry.register("sha256", &[], "hashes the input with sha256", apply_sha256);
        registry.register("sha512", &[], "hashes the input with sha512", apply_sha512);
        registry.register("append", &["text"], "appends the parameter to the input", apply_append);
        registry.register(
            "prepend",
            &["text"],
            "prepends the parameter to the input",
            apply_prepend,
        );
        registry.register(
            "init",
            &["key", "domain", "user"],
            "appends key, user and domain to the input; the usual first segment",
            apply_init,
        );
        registry.register(
            "cut",
            &["begin", "end"],
            "cuts the input from the begin index to the end index, exclusive",
            apply_cut,
        );
        registry.register("limit", &["n"], "limits the input to n characters", apply_limit);
        registry.register(
            "replace",
            &["from", "to"],
            "replaces a given string in the input with another string",
            apply_replace,
        );
        registry.register(
            "replace_at",
            &["index", "replacement"],
            "replaces the character at the given index",
            apply_replace_at,
        );
        registry.register(
            "insert",
            &["index", "text"],
            "inserts text at the given index",
            apply_insert,
        );
        registry.register(
            "to_int",
            &[],
            "converts the bytes of the input to an integer",
            apply_to_int,
        );
        registry.register(
            "seed",
            &["min", "max"],
            "gets a deterministic number in the given range from the input",
            apply_seed,
        );
        registry.register(
            "make_unambiguous",
            &[],
            "replaces easily confused characters with safer ones",
            apply_make_unambiguous,
        );
        registry.register(
            "add_special_characters",
            &["min", "max", "charset"],
            "adds seeded characters from the charset to the input",
            apply_add_special_characters,
        );
        registry.register(
            "add_simple_special_characters",
            &["min", "max"],
            "adds seeded characters from a predefined charset to the input",
            apply_add_simple_special_characters,
        );
        registry.register(
            "add_some_special_characters",
            &["charset"],
            "adds at most sqrt(len)/2 charset characters to the input, but at least 1",
            apply_add_some_special_characters,
        );
        registry.register(
            "add_some_simple_special_characters",
            &[],
            "adds at most sqrt(len)/2 predefined characters to the input, but at least 1",
            apply_add_some_simple_special_characters,
        );
        registry.register(
            "capitalize_some",
            &[],
            "capitalizes some words found in the input, maybe all, but at least one",
            apply_capitalize_some,
        );
        registry.register(
            "diceware",
            &["min", "max"],
            "generates a seeded word sequence from the fixed word list",
            apply_diceware,
        );
        registry.register(
            "diceware_short",
            &[],
            "generates 3 to 4 diceware words from the input",
            apply_diceware_short,
        );
        registry.register(
            "diceware_long",
            &[],
            "generates 4 to 5 diceware words from the input",
            apply_diceware_long,
        );
        registry.register(
            "bad_legacy1",
            &["key", "domain"],
            "DO NOT USE outside LEGACY1; the original derivation, kept for compatibility",
            apply_bad_legacy1,
        );
        registry.register(
            "bad_legacy2",
            &["key", "domain", "user"],
            "DO NOT USE outside LEGACY2; the version 2 to 3.1 derivation, kept for compatibility",
            apply_bad_legacy2,
        );
        registry
    }
}

impl Default for TransformRegistry {
    fn default() -> Self {
        Self::new()
    }
}

static BUILTIN: Lazy<TransformRegistry> = Lazy::new(TransformRegistry::builtin);

/// The process-wide built-in registry, initialized on first use.
pub fn builtin_registry() -> &'static TransformRegistry {
    &BUILTIN
}

fn apply_base58(input: Value, _args: &[Arg]) -> Result<Value, TransformError> {
    Ok(Value::Text(transform::base58(&input.into_bytes())))
}

fn apply_base64(input: Value, _args: &[Arg]) -> Result<Value, TransformError> {
    Ok(Value::Text(transform::base64(&input.into_bytes())))
}

fn apply_sha256(input: Value, _args: &[Arg]) -> Result<Value, TransformError> {
    Ok(Value::Bytes(transform::sha256(&input.into_bytes())))
}

fn apply_sha512(input: Value, _args: &[Arg]) -> Result<Value, TransformError> {
    Ok(Value::Bytes(transform::sha512(&input.into_bytes())))
}

fn apply_append(input: Value, args: &[Arg]) -> Result<Value, TransformError> {
    Ok(Value::Text(transform::append(&input.into_text()?, &args[0].to_text())))
}

fn apply_prepend(input: Value, args: &[Arg]) -> Result<Value, TransformError> {
    Ok(Value::Text(transform::prepend(&input.into_text()?, &args[0].to_text())))
}

fn apply_init(input: Value, args: &[Arg]) -> Result<Value, TransformError> {
    Ok(Value::Text(transform::init(
        &input.into_text()?,
        &args[0].to_text(),
        &args[1].to_text(),
        &args[2].to_text(),
    )))
}

fn apply_cut(input: Value, args: &[Arg]) -> Result<Value, TransformError> {
    Ok(Value::Text(transform::cut(&input.into_text()?, args[0].as_int()?, args[1].as_int()?)))
}

fn apply_limit(input: Value, args: &[Arg]) -> Result<Value, TransformError> {
    Ok(Value::Text(transform::limit(&input.into_text()?, args[0].as_int()?)))
}

fn apply_replace(input: Value, args: &[Arg]) -> Result<Value, TransformError> {
    Ok(Value::Text(transform::replace(&input.into_text()?, args[0].as_str()?, args[1].as_str()?)))
}

fn apply_replace_at(input: Value, args: &[Arg]) -> Result<Value, TransformError> {
    Ok(Value::Text(transform::replace_at(
        &input.into_text()?,
        args[0].as_int()?,
        &args[1].to_text(),
    )))
}

fn apply_insert(input: Value, args: &[Arg]) -> Result<Value, TransformError> {
    Ok(Value::Text(transform::insert(&input.into_text()?, args[0].as_int()?, &args[1].to_text())))
}

fn apply_to_int(input: Value, _args: &[Arg]) -> Result<Value, TransformError> {
    Ok(Value::Text(transform::to_int(&input.into_bytes())))
}

fn apply_seed(input: Value, args: &[Arg]) -> Result<Value, TransformError> {
    let min = args[0].as_int()?;
    let max = args[1].as_int()?;
    match transform::seed_number(input.as_seed_bytes(), min, max) {
        Some(number) => Ok(Value::Text(number)),
        None => Ok(input),
    }
}

fn apply_make_unambiguous(input: Value, _args: &[Arg]) -> Result<Value, TransformError> {
    Ok(Value::Text(transform::make_unambiguous(&input.into_text()?)))
}

fn apply_add_special_characters(input: Value, args: &[Arg]) -> Result<Value, TransformError> {
    Ok(Value::Text(transform::add_special_characters(
        &input.into_text()?,
        args[0].as_int()?,
        args[1].as_int()?,
        args[2].as_str()?,
    )))
}

fn apply_add_simple_special_characters(input: Value, args: &[Arg]) -> Result<Value, TransformError> {
    Ok(Value::Text(transform::add_simple_special_characters(
        &input.into_text()?,
        args[0].as_int()?,
        args[1].as_int()?,
    )))
}

fn apply_add_some_special_characters(input: Value, args: &[Arg]) -> Result<Value, TransformError> {
    Ok(Value::Text(transform::add_some_special_characters(&input.into_text()?, args[0].as_str()?)))
}

fn apply_add_some_simple_special_characters(
    input: Value,
    _args: &[Arg],
) -> Result<Value, TransformError> {
    Ok(Value::Text(transform::add_some_simple_special_characters(&input.into_text()?)))
}

fn apply_capitalize_some(input: Value, _args: &[Arg]) -> Result<Value, TransformError> {
    Ok(Value::Text(transform::capitalize_some(&input.into_text()?)))
}

fn apply_diceware(input: Value, args: &[Arg]) -> Result<Value, TransformError> {
    Ok(Value::Text(transform::diceware(&input.into_text()?, args[0].as_int()?, args[1].as_int()?)))
}

fn apply_diceware_short(input: Value, _args: &[Arg]) -> Result<Value, TransformError> {
    Ok(Value::Text(transform::diceware_short(&input.into_text()?)))
}

fn apply_diceware_long(input: Value, _args: &[Arg]) -> Result<Value, TransformError> {
    Ok(Value::Text(transform::diceware_long(&input.into_text()?)))
}

fn apply_bad_legacy1(input: Value, args: &[Arg]) -> Result<Value, TransformError> {
    Ok(Value::Text(legacy::bad_legacy1(
        &input.into_text()?,
        &args[0].to_text(),
        &args[1].to_text(),
    )))
}

fn apply_bad_legacy2(input: Value, args: &[Arg]) -> Result<Value, TransformError> {
    Ok(Value::Text(legacy::bad_legacy2(
        &input.into_text()?,
        &args[0].to_text(),
        &args[1].to_text(),
        &args[2].to_text(),
    )))
}
