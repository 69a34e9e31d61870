//! Nested structures and the operations that address and rewrite them
//!
//! A [`Structure`] is a JSON-shaped tree: scalars, ordered sequences, and
//! mappings from string keys to structures. Mappings keep insertion order
//! until something explicitly reorders them.
//!
//! - **[`PathAddress`]**: a validated, dotted path such as `data.rank`
//! - **[`access`]**: GET or POP the value at a path, strict or lenient
//! - **[`translate`]**: rename (and optionally prune) mapping keys
//! - **[`canonicalize`]**: sort keys through every mapping-valued level
//! - **[`stringify_large_ints`]**: turn integers beyond 32 bits into strings
//!
//! # Addressing
//!
//! ```text
//! {
//!   "success": true,
//!   "data": {                 <- "data"
//!     "rank": "student",      <- "data.rank"
//!     "age": 20               <- "data.age"
//!   }
//! }
//! ```
//!
//! Every path step is a keyed lookup into a mapping. Sequences are not
//! addressable by position.
//!
//! # Mutation
//!
//! Only [`pop_at`] mutates, and only the mapping that holds the final path
//! segment. Every other operation returns a fresh structure.

mod access;
mod canonical;
mod path;
mod stringify;
mod translate;

pub use access::{access, get, get_ref, pop_at, AccessError, AccessOptions, Mode, TraversalError};
pub use canonical::{canonicalize, canonicalize_value, fingerprint};
pub use path::{segments, InvalidPathError, PathAddress, Segment, Segments, PATH_SEPARATOR};
pub use stringify::{is_large_int, stringify_large_ints, FormatError, OutFormat, LARGE_INT_THRESHOLD};
pub use translate::{translate, translate_value, TranslateOptions, TranslationTable};

/// Any nested value: null, boolean, number, string, sequence or mapping.
pub type Structure = serde_json::Value;

/// An insertion-ordered mapping from string keys to structures.
pub type Mapping = serde_json::Map<String, Structure>;

/// Human-readable name of a structure's variant, used in error context
pub fn kind_of(value: &Structure) -> &'static str {
    match value {
        Structure::Null => "null",
        Structure::Bool(_) => "boolean",
        Structure::Number(_) => "number",
        Structure::String(_) => "string",
        Structure::Array(_) => "sequence",
        Structure::Object(_) => "mapping",
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, found {found}")]
pub struct TypeMismatchError {
    pub expected: &'static str,
    pub found: &'static str,
}

impl TypeMismatchError {
    pub fn mapping(found: &Structure) -> Self {
        Self {
            expected: "mapping",
            found: kind_of(found),
        }
    }

    pub fn sequence(found: &Structure) -> Self {
        Self {
            expected: "sequence",
            found: kind_of(found),
        }
    }
}

/// Borrow a structure as a mapping, or report what it actually is
pub fn expect_mapping(value: &Structure) -> Result<&Mapping, TypeMismatchError> {
    value
        .as_object()
        .ok_or_else(|| TypeMismatchError::mapping(value))
}

/// Borrow a structure as a sequence, or report what it actually is
pub fn expect_sequence(value: &Structure) -> Result<&Vec<Structure>, TypeMismatchError> {
    value
        .as_array()
        .ok_or_else(|| TypeMismatchError::sequence(value))
}
