use std::collections::BTreeMap;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

use super::{Mapping, Structure, TypeMismatchError};

/// Source key to destination key renames.
///
/// A table does not have to be injective: two source keys may share a
///  destination, in which case the later source key wins (see [`translate`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable(BTreeMap<String, String>);

impl Deref for TranslationTable {
    type Target = BTreeMap<String, String>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TranslationTable {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Add a rename, returning the previous destination for `from` if any
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) -> Option<String> {
        self.0.insert(from.into(), to.into())
    }

    /// Destination for `key`, if the table maps it
    pub fn destination(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for TranslationTable
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .collect(),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateOptions {
    /// Also translate mappings nested in values, and mappings held
    ///  directly inside sequence values
    #[serde(default)]
    pub nested: bool,
    /// Drop every key the table does not mention
    #[serde(default)]
    pub ignore_extra: bool,
}

impl TranslateOptions {
    pub fn nested(mut self, nested: bool) -> Self {
        self.nested = nested;
        self
    }

    pub fn ignore_extra(mut self, ignore_extra: bool) -> Self {
        self.ignore_extra = ignore_extra;
        self
    }
}

/// Rename the keys of `source` according to `table`, producing a new mapping.
///
/// Keys missing from the table are kept as-is, or dropped when
///  `ignore_extra` is set. When two source keys land on the same destination,
///  the one visited last (in `source` order) keeps its value, and the
///  destination stays at the position where it was first written. Callers
///  that need a particular winner must order `source` accordingly.
///
/// ```
/// use common::structure::{translate, TranslateOptions, TranslationTable};
/// use serde_json::json;
///
/// let source = json!({"name": "geneva", "country": "ch"});
/// let table: TranslationTable = [("name", "n")].into_iter().collect();
/// let options = TranslateOptions::default().ignore_extra(true);
///
/// let translated = translate(source.as_object().unwrap(), &table, options);
/// assert_eq!(serde_json::Value::Object(translated), json!({"n": "geneva"}));
/// ```
pub fn translate(source: &Mapping, table: &TranslationTable, options: TranslateOptions) -> Mapping {
    let mut translated = Mapping::with_capacity(source.len());
    for (key, value) in source {
        let destination = match table.destination(key) {
            Some(destination) => destination.to_string(),
            None if options.ignore_extra => continue,
            None => key.clone(),
        };

        let value = if options.nested {
            translate_nested(value, table, options)
        } else {
            value.clone()
        };

        if translated.insert(destination, value).is_some() {
            tracing::trace!(key = key.as_str(), "destination key collision, later value kept");
        }
    }
    translated
}

/// Like [`translate`], for a structure that should be a mapping
pub fn translate_value(
    source: &Structure,
    table: &TranslationTable,
    options: TranslateOptions,
) -> Result<Structure, TypeMismatchError> {
    match source {
        Structure::Object(map) => Ok(Structure::Object(translate(map, table, options))),
        other => Err(TypeMismatchError::mapping(other)),
    }
}

// Sequences are only searched one level deep: a mapping inside a sequence is
//  translated (and recursed into), a sequence inside a sequence is copied.
fn translate_nested(value: &Structure, table: &TranslationTable, options: TranslateOptions) -> Structure {
    match value {
        Structure::Object(map) => Structure::Object(translate(map, table, options)),
        Structure::Array(items) => Structure::Array(
            items
                .iter()
                .map(|item| match item {
                    Structure::Object(map) => Structure::Object(translate(map, table, options)),
                    other => other.clone(),
                })
                .collect(),
        ),
        other => other.clone(),
    }
}
