use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

/// Separator between the segments of a dotted path
pub const PATH_SEPARATOR: char = '.';

// NOTE: the optional dotted groups can never match, since paths are split
//  on the separator before a segment is checked. What remains is the
//  character class: ASCII word characters, hyphen and pipe. Unicode mode is
//  off, so `\w` is `[A-Za-z0-9_]`.
const SEGMENT_PATTERN: &str = r"^[-\w\|]+(\.[-\w\|]+)?(\.[-\w\|]+)?(\.[-\w\|]+)?$";

fn segment_regex() -> &'static Regex {
    static SEGMENT_REGEX: OnceLock<Regex> = OnceLock::new();
    SEGMENT_REGEX.get_or_init(|| {
        RegexBuilder::new(SEGMENT_PATTERN)
            .unicode(false)
            .build()
            .expect("segment pattern must compile")
    })
}

/// Check a single path segment against the accepted alphabet
pub fn is_valid_segment(segment: &str) -> bool {
    segment_regex().is_match(segment)
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{segment}' is an invalid path segment (position {position} of '{path}')")]
pub struct InvalidPathError {
    /// The segment that failed validation
    pub segment: String,
    /// Zero-based position of the segment within the path
    pub position: usize,
    /// The full path being addressed
    pub path: String,
}

/// One validated step of a dotted path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// The key to look up at this level
    pub key: &'a str,
    /// Zero-based position within the path
    pub position: usize,
    /// Whether this is the final segment of the path
    pub is_last: bool,
    /// The path up to and including this segment
    pub consumed: &'a str,
}

/// Lazy, validate-as-you-go iterator over the segments of a dotted path.
///
/// Each segment is checked only when it is reached, so a traversal driven
///  by this iterator may complete several lookups before hitting an invalid
///  segment further along. Iteration stops after the first error.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    path: &'a str,
    offset: usize,
    position: usize,
    done: bool,
}

/// Iterate the segments of `path`, validating each one as it is yielded
pub fn segments(path: &str) -> Segments<'_> {
    Segments {
        path,
        offset: 0,
        position: 0,
        done: false,
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = Result<Segment<'a>, InvalidPathError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let rest = &self.path[self.offset..];
        let (key, end, is_last) = match rest.find(PATH_SEPARATOR) {
            Some(i) => (&rest[..i], self.offset + i, false),
            None => (rest, self.path.len(), true),
        };

        let position = self.position;
        self.position += 1;
        self.offset = end + PATH_SEPARATOR.len_utf8();
        self.done = is_last;

        if !is_valid_segment(key) {
            self.done = true;
            return Some(Err(InvalidPathError {
                segment: key.to_string(),
                position,
                path: self.path.to_string(),
            }));
        }

        Some(Ok(Segment {
            key,
            position,
            is_last,
            consumed: &self.path[..end],
        }))
    }
}

impl std::iter::FusedIterator for Segments<'_> {}

/// A fully validated dotted path.
///
/// Use this when a path is reused across many structures. Traversals that
///  take a `&str` validate lazily instead (see [`Segments`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathAddress {
    path: String,
    segments: Vec<String>,
}

impl PathAddress {
    /// Parse and validate every segment of `path`
    pub fn parse(path: &str) -> Result<Self, InvalidPathError> {
        let segments = segments(path)
            .map(|segment| segment.map(|s| s.key.to_string()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            path: path.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl FromStr for PathAddress {
    type Err = InvalidPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PathAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path)
    }
}

impl AsRef<str> for PathAddress {
    fn as_ref(&self) -> &str {
        &self.path
    }
}
