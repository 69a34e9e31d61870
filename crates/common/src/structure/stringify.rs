use std::fmt;
use std::str::FromStr;

use serde_json::Number;

use super::Structure;

/// Integers at or beyond this magnitude are turned into strings (2^32)
pub const LARGE_INT_THRESHOLD: u64 = 1 << 32;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("format template '{0}' has no placeholder")]
    MissingPlaceholder(String),
    #[error("unmatched '{brace}' at byte {position} in format template '{template}'")]
    UnmatchedBrace {
        template: String,
        position: usize,
        brace: char,
    },
    #[error("unsupported field '{{{field}}}' in format template '{template}'")]
    UnsupportedField { template: String, field: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Value,
}

/// Output template for stringified integers.
///
/// `{}` and `{0}` stand for the decimal digits, `{{` and `}}` are literal
///  braces. A template like `'{}` keeps spreadsheet tools from reading the
///  digits back as a float.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutFormat {
    template: String,
    pieces: Vec<Piece>,
}

impl OutFormat {
    pub fn parse(template: &str) -> Result<Self, FormatError> {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut chars = template.char_indices().peekable();

        while let Some((position, c)) = chars.next() {
            match c {
                '{' if chars.peek().map(|(_, next)| *next) == Some('{') => {
                    chars.next();
                    literal.push('{');
                }
                '{' => {
                    let mut field = String::new();
                    let mut closed = false;
                    for (_, next) in chars.by_ref() {
                        if next == '}' {
                            closed = true;
                            break;
                        }
                        field.push(next);
                    }
                    if !closed {
                        return Err(FormatError::UnmatchedBrace {
                            template: template.to_string(),
                            position,
                            brace: '{',
                        });
                    }
                    if !field.is_empty() && field != "0" {
                        return Err(FormatError::UnsupportedField {
                            template: template.to_string(),
                            field,
                        });
                    }
                    if !literal.is_empty() {
                        pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                    }
                    pieces.push(Piece::Value);
                }
                '}' if chars.peek().map(|(_, next)| *next) == Some('}') => {
                    chars.next();
                    literal.push('}');
                }
                '}' => {
                    return Err(FormatError::UnmatchedBrace {
                        template: template.to_string(),
                        position,
                        brace: '}',
                    });
                }
                other => literal.push(other),
            }
        }

        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }
        if !pieces.contains(&Piece::Value) {
            return Err(FormatError::MissingPlaceholder(template.to_string()));
        }

        Ok(Self {
            template: template.to_string(),
            pieces,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }

    /// Render the template with every placeholder replaced by `value`
    pub fn apply(&self, value: &str) -> String {
        self.pieces
            .iter()
            .map(|piece| match piece {
                Piece::Literal(text) => text.as_str(),
                Piece::Value => value,
            })
            .collect()
    }
}

impl FromStr for OutFormat {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for OutFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.template)
    }
}

/// Whether `number` is an integer with magnitude of at least 2^32.
///
/// Integer literals too wide for 64 bits are kept as text by serde_json's
///  `arbitrary_precision` and always count as large.
pub fn is_large_int(number: &Number) -> bool {
    if let Some(signed) = number.as_i64() {
        signed.unsigned_abs() >= LARGE_INT_THRESHOLD
    } else if let Some(unsigned) = number.as_u64() {
        unsigned >= LARGE_INT_THRESHOLD
    } else {
        is_integer_literal(&number.to_string())
    }
}

fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Replace every large integer in `value` with its string form.
///
/// Consumers that parse numbers as doubles (JavaScript, spreadsheets) lose
///  precision past 2^53; this keeps 64-bit identifiers intact. Sequences and
///  mappings are walked recursively. Mapping keys are already strings and
///  come through unchanged. Applying this twice is the same as applying it
///  once.
///
/// ```
/// use common::structure::stringify_large_ints;
/// use serde_json::json;
///
/// let doc = json!({"types": [2, 3], "ids": [2820046943342890302u64]});
/// let out = stringify_large_ints(&doc, None);
/// assert_eq!(out, json!({"types": [2, 3], "ids": ["2820046943342890302"]}));
/// ```
pub fn stringify_large_ints(value: &Structure, out_format: Option<&OutFormat>) -> Structure {
    match value {
        Structure::Array(items) => Structure::Array(
            items
                .iter()
                .map(|item| stringify_large_ints(item, out_format))
                .collect(),
        ),
        Structure::Object(map) => Structure::Object(
            map.iter()
                .map(|(key, item)| (key.clone(), stringify_large_ints(item, out_format)))
                .collect(),
        ),
        Structure::Number(number) if is_large_int(number) => {
            let digits = number.to_string();
            Structure::String(match out_format {
                Some(format) => format.apply(&digits),
                None => digits,
            })
        }
        other => other.clone(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_threshold_boundary() {
        let below = stringify_large_ints(&json!({"a": 4294967295u64}), None);
        assert_eq!(below, json!({"a": 4294967295u64}));

        let at = stringify_large_ints(&json!({"a": 4294967296u64}), None);
        assert_eq!(at, json!({"a": "4294967296"}));
    }

    #[test]
    fn test_negative_threshold_uses_magnitude() {
        let out = stringify_large_ints(&json!([-4294967296i64, -4294967295i64]), None);
        assert_eq!(out, json!(["-4294967296", -4294967295i64]));
    }

    #[test]
    fn test_u64_beyond_i64() {
        let out = stringify_large_ints(&json!(u64::MAX), None);
        assert_eq!(out, json!("18446744073709551615"));
    }

    #[test]
    fn test_integers_beyond_64_bits_keep_their_digits() {
        let doc: Structure =
            serde_json::from_str(r#"{"id": 18446744073709551617, "neg": -9223372036854775809}"#)
                .unwrap();
        let out = stringify_large_ints(&doc, None);
        assert_eq!(
            out,
            json!({"id": "18446744073709551617", "neg": "-9223372036854775809"})
        );
    }

    #[test]
    fn test_float_literals_are_not_integers() {
        let doc: Structure = serde_json::from_str(r#"[1e40, 5000000000.0, -1.5E+20]"#).unwrap();
        assert_eq!(stringify_large_ints(&doc, None), doc);
    }

    #[test]
    fn test_floats_and_other_scalars_pass_through() {
        let doc = json!({"f": 1e20, "s": "5000000000", "b": true, "n": null, "small": 7});
        assert_eq!(stringify_large_ints(&doc, None), doc);
    }

    #[test]
    fn test_out_format_applied() {
        let format = OutFormat::parse("'{}").unwrap();
        let out = stringify_large_ints(&json!({"id": 9007199254740993u64}), Some(&format));
        assert_eq!(out, json!({"id": "'9007199254740993"}));
    }

    #[test]
    fn test_idempotent() {
        let doc = json!({"ids": [2820046943342890302u64, 1], "nested": {"x": 4563046943342890302u64}});
        let once = stringify_large_ints(&doc, None);
        let twice = stringify_large_ints(&once, None);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_out_format_parsing() {
        assert_eq!(OutFormat::parse("{0}").unwrap().apply("12"), "12");
        assert_eq!(OutFormat::parse("id:{}").unwrap().apply("12"), "id:12");
        assert_eq!(OutFormat::parse("{{{}}}").unwrap().apply("12"), "{12}");
        assert_eq!(OutFormat::parse("{}-{0}").unwrap().apply("7"), "7-7");
        assert_eq!("'{}".parse::<OutFormat>().unwrap().to_string(), "'{}");
    }

    #[test]
    fn test_out_format_rejections() {
        assert_eq!(
            OutFormat::parse("plain").unwrap_err(),
            FormatError::MissingPlaceholder("plain".to_string())
        );
        assert!(matches!(
            OutFormat::parse("{").unwrap_err(),
            FormatError::UnmatchedBrace { brace: '{', position: 0, .. }
        ));
        assert!(matches!(
            OutFormat::parse("a}").unwrap_err(),
            FormatError::UnmatchedBrace { brace: '}', position: 1, .. }
        ));
        assert!(matches!(
            OutFormat::parse("{:>20}").unwrap_err(),
            FormatError::UnsupportedField { .. }
        ));
        assert!(matches!(
            OutFormat::parse("{{}}").unwrap_err(),
            FormatError::MissingPlaceholder(_)
        ));
    }
}
