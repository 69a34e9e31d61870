use super::{Mapping, Structure, TypeMismatchError};

/// Rebuild `input` with its keys sorted, recursing through mapping values.
///
/// Keys are ordered by plain string comparison. Only mappings reached
///  through other mappings are reordered: a mapping sitting inside a
///  sequence is copied as-is.
pub fn canonicalize(input: &Mapping) -> Mapping {
    let mut entries: Vec<(&String, &Structure)> = input.iter().collect();
    entries.sort_by(|(a, _), (b, _)| a.cmp(b));

    entries
        .into_iter()
        .map(|(key, value)| {
            let value = match value {
                Structure::Object(map) => Structure::Object(canonicalize(map)),
                other => other.clone(),
            };
            (key.clone(), value)
        })
        .collect()
}

/// Like [`canonicalize`], for a structure that should be a mapping
pub fn canonicalize_value(input: &Structure) -> Result<Structure, TypeMismatchError> {
    match input {
        Structure::Object(map) => Ok(Structure::Object(canonicalize(map))),
        other => Err(TypeMismatchError::mapping(other)),
    }
}

/// Stable BLAKE3 digest of the canonical form of `input`, hex encoded.
///
/// Mappings with the same content hash the same regardless of the order
///  their keys were inserted in, subject to the same limitation as
///  [`canonicalize`]: mappings inside sequences are hashed in their own order.
pub fn fingerprint(input: &Mapping) -> String {
    let canonical = Structure::Object(canonicalize(input));
    let hash = blake3::hash(canonical.to_string().as_bytes());
    hex::encode(hash.as_bytes())
}
