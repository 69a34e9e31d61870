use super::path::{segments, InvalidPathError, Segment};
use super::{kind_of, Structure};

/// What to do with the value found at the end of a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Return a copy of the value, leaving the root untouched
    #[default]
    Get,
    /// Remove the final key from its mapping and return its value
    Pop,
}

/// Failure behaviour of a traversal.
///
/// In strict mode a failed lookup is an error. In lenient mode it yields
///  `default` instead. `default` is also what a POP returns when the final
///  key is absent, in either mode.
#[derive(Debug, Clone, PartialEq)]
pub struct AccessOptions {
    pub strict: bool,
    pub default: Structure,
}

impl Default for AccessOptions {
    fn default() -> Self {
        Self::strict()
    }
}

impl AccessOptions {
    pub fn strict() -> Self {
        Self {
            strict: true,
            default: Structure::Null,
        }
    }

    pub fn lenient(default: Structure) -> Self {
        Self {
            strict: false,
            default,
        }
    }

    pub fn with_default(mut self, default: Structure) -> Self {
        self.default = default;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TraversalError {
    #[error("key '{key}' not found at '{path}'")]
    MissingKey { key: String, path: String },
    #[error("cannot look up '{segment}' at '{path}': found {found}, not a mapping")]
    NotIndexable {
        segment: String,
        path: String,
        found: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error(transparent)]
    InvalidPath(#[from] InvalidPathError),
    #[error(transparent)]
    Traversal(#[from] TraversalError),
}

impl AccessError {
    pub fn is_traversal(&self) -> bool {
        matches!(self, AccessError::Traversal(_))
    }
}

fn missing_key(segment: &Segment<'_>) -> TraversalError {
    TraversalError::MissingKey {
        key: segment.key.to_string(),
        path: segment.consumed.to_string(),
    }
}

fn not_indexable(segment: &Segment<'_>, found: &Structure) -> TraversalError {
    TraversalError::NotIndexable {
        segment: segment.key.to_string(),
        path: segment.consumed.to_string(),
        found: kind_of(found),
    }
}

fn lookup<'a>(node: &'a Structure, segment: &Segment<'_>) -> Result<&'a Structure, TraversalError> {
    match node {
        Structure::Object(map) => map.get(segment.key).ok_or_else(|| missing_key(segment)),
        other => Err(not_indexable(segment, other)),
    }
}

fn lookup_mut<'a>(
    node: &'a mut Structure,
    segment: &Segment<'_>,
) -> Result<&'a mut Structure, TraversalError> {
    match node {
        Structure::Object(map) => map.get_mut(segment.key).ok_or_else(|| missing_key(segment)),
        other => Err(not_indexable(segment, other)),
    }
}

// Lenient mode swallows lookup failures, never invalid paths.
fn recover(
    result: Result<Structure, AccessError>,
    path: &str,
    options: &AccessOptions,
) -> Result<Structure, AccessError> {
    match result {
        Err(AccessError::Traversal(err)) if !options.strict => {
            tracing::debug!(path, error = %err, "lookup failed, returning default");
            Ok(options.default.clone())
        }
        other => other,
    }
}

/// Borrow the value at `path`, failing on any lookup error.
pub fn get_ref<'a>(root: &'a Structure, path: &str) -> Result<&'a Structure, AccessError> {
    let mut current = root;
    for segment in segments(path) {
        let segment = segment?;
        tracing::trace!(key = segment.key, position = segment.position, "descending");
        current = lookup(current, &segment)?;
    }
    Ok(current)
}

/// Copy the value at `path`.
///
/// ```
/// use common::structure::{get, AccessOptions};
/// use serde_json::json;
///
/// let doc = json!({"success": true, "data": {"rank": "student", "age": 20}});
/// assert_eq!(get(&doc, "data.rank", &AccessOptions::strict()).unwrap(), json!("student"));
///
/// let lenient = AccessOptions::lenient(json!("doctor"));
/// assert_eq!(get(&doc, "data.profession", &lenient).unwrap(), json!("doctor"));
/// ```
pub fn get(root: &Structure, path: &str, options: &AccessOptions) -> Result<Structure, AccessError> {
    let result = get_ref(root, path).cloned();
    recover(result, path, options)
}

/// Remove the key addressed by `path` from its mapping and return its value.
///
/// This is the only mutating traversal. It holds the root exclusively for the
///  duration of the call and touches nothing but the mapping that owns the
///  final segment: every lookup before that is read-only, so any failure
///  along the way leaves `root` exactly as it was. Sibling keys keep their
///  order. A missing final key yields `options.default` even in strict mode.
pub fn pop_at(
    root: &mut Structure,
    path: &str,
    options: &AccessOptions,
) -> Result<Structure, AccessError> {
    let result = pop_inner(root, path, &options.default);
    recover(result, path, options)
}

fn pop_inner(
    root: &mut Structure,
    path: &str,
    default: &Structure,
) -> Result<Structure, AccessError> {
    let mut current = root;
    for segment in segments(path) {
        let segment = segment?;
        if segment.is_last {
            return match current {
                Structure::Object(map) => {
                    let removed = map.shift_remove(segment.key);
                    tracing::trace!(
                        key = segment.key,
                        found = removed.is_some(),
                        "popping final key"
                    );
                    Ok(removed.unwrap_or_else(|| default.clone()))
                }
                other => Err(not_indexable(&segment, other).into()),
            };
        }
        tracing::trace!(key = segment.key, position = segment.position, "descending");
        current = lookup_mut(current, &segment)?;
    }
    // segments() always yields a final segment or an error
    Ok(default.clone())
}

/// Traverse `root` along `path` in the given mode.
///
/// `root` is only modified in [`Mode::Pop`].
pub fn access(
    root: &mut Structure,
    path: &str,
    mode: Mode,
    options: &AccessOptions,
) -> Result<Structure, AccessError> {
    match mode {
        Mode::Get => get(root, path, options),
        Mode::Pop => pop_at(root, path, options),
    }
}
