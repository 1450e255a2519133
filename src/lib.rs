//! # Passloom: Deterministic Password Derivation Library
//!
//! Passloom derives reproducible passwords from a secret key plus a
//! domain/user identity pair by running a named, user-editable "sequence"
//! of transformation functions.
//!
//! ## Features
//!
//! - **Passfile format**: hand-parsed text configuration mapping domains
//!   and users to named transformation sequences
//! - **Transform registry system**: fixed catalog of named transforms with
//!   declared parameter counts, checked at validation and execution time
//! - **Deterministic transform library**: hashing, encodings and seeded
//!   string transformations that are bit-reproducible across versions
//! - **Legacy compatibility**: frozen derivation pipelines for passwords
//!   generated by earlier format versions
//!
//! ## Example
//!
//! ```
//! use passloom::{execute_sequence, Passfile};
//!
//! let passfile = Passfile::parse(
//!     "example.com:\n    alice - DEFAULT\n\n[+mine]\n    init($key, $domain, $user)\n    diceware(3, 4)\n",
//! );
//! passfile.validate().expect("well-formed configuration");
//!
//! let sequence = passfile.get_sequence("DEFAULT").expect("default sequence");
//! let first = execute_sequence(sequence, "secret", "example.com", "alice").unwrap();
//! let again = execute_sequence(sequence, "secret", "example.com", "alice").unwrap();
//! assert_eq!(first, again);
//! ```

// Core modules
pub mod executor;
pub mod parser;
pub mod passfile;
pub mod registry;
pub mod sequence;
pub mod serializer;

// Deterministic transform library
pub mod transform;

// Re-export key types
pub use executor::{execute_sequence, execute_sequence_with, ExecutionError};
pub use parser::{parse_passfile, parse_segments, ParseError};
pub use passfile::{
    find_forbidden_symbol, Domain, Passfile, User, ValidationError, FORBIDDEN_NAME_SYMBOLS,
    RESERVED_SEQUENCE_NAMES,
};
pub use registry::{builtin_registry, Arg, TransformError, TransformRegistry, Value};
pub use sequence::{Param, Segment, Sequence};
pub use serializer::{load_passfile, passfile_to_string, save_passfile};
