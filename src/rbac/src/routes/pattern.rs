//! Route pattern type definitions and matching
//!
//! Provides the [`RoutePattern`] type: a `/`-separated path template whose
//! segments are either literal text or a named `{placeholder}`.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PatternError;

/// Result type for pattern operations
pub type PatternResult<T> = Result<T, PatternError>;

/// One parsed segment of a pattern
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum Segment {
    /// Must equal the candidate segment exactly
    Literal(String),
    /// Matches any single non-empty segment
    Placeholder(String),
}

/// A navigable path template
///
/// - `/taxpayer/dashboard` (literal, exact string match)
/// - `/taxpayer/course/{id}` (one placeholder, matches `/taxpayer/course/42`)
///
/// Trailing slashes are never normalized: `/profile/` does not match
/// `/profile`, and `/taxpayer/course/` does not match `/taxpayer/course/{id}`.
///
/// # Examples
///
/// ```
/// use itas_rbac::routes::RoutePattern;
///
/// let pattern = RoutePattern::new("/taxpayer/course/{id}").unwrap();
/// assert!(pattern.matches("/taxpayer/course/42"));
/// assert!(!pattern.matches("/taxpayer/course/42/extra"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutePattern {
    /// Pattern string as written
    raw: String,
    /// Parsed segments, excluding the empty root segment
    segments: Vec<Segment>,
    /// Whether any segment is a placeholder
    has_placeholders: bool,
}

impl RoutePattern {
    /// Parse and validate a pattern
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] if the pattern is empty, does not start with
    /// `/`, has an empty segment, mixes a placeholder with literal text in one
    /// segment, repeats a placeholder name, or has no literal segment at all.
    pub fn new(s: &str) -> PatternResult<Self> {
        if s.is_empty() {
            return Err(PatternError::Empty);
        }

        let rest = s
            .strip_prefix('/')
            .ok_or_else(|| PatternError::MissingLeadingSlash(s.to_string()))?;

        let mut segments = Vec::new();
        let mut names: Vec<&str> = Vec::new();

        for raw_segment in rest.split('/') {
            if raw_segment.is_empty() {
                return Err(PatternError::EmptySegment(s.to_string()));
            }

            let segment = match Self::placeholder_name(raw_segment) {
                Some(name) => {
                    if names.contains(&name) {
                        return Err(PatternError::DuplicatePlaceholder {
                            pattern: s.to_string(),
                            name: name.to_string(),
                        });
                    }
                    names.push(name);
                    Segment::Placeholder(name.to_string())
                }
                None if raw_segment.contains('{') || raw_segment.contains('}') => {
                    return Err(PatternError::MalformedPlaceholder(raw_segment.to_string()));
                }
                None => Segment::Literal(raw_segment.to_string()),
            };

            segments.push(segment);
        }

        if !segments.iter().any(|seg| matches!(seg, Segment::Literal(_))) {
            return Err(PatternError::NoLiteralSegment(s.to_string()));
        }

        Ok(Self {
            raw: s.to_string(),
            has_placeholders: !names.is_empty(),
            segments,
        })
    }

    /// `{name}` with a non-empty name and no nested braces
    fn placeholder_name(segment: &str) -> Option<&str> {
        let name = segment.strip_prefix('{')?.strip_suffix('}')?;
        if name.is_empty() || name.contains(['{', '}']) {
            return None;
        }
        Some(name)
    }

    /// Returns the raw pattern string
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns whether this pattern contains placeholders
    pub fn has_placeholders(&self) -> bool {
        self.has_placeholders
    }

    /// Number of segments, not counting the root
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Placeholder names, in path order
    pub fn placeholders(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|seg| match seg {
            Segment::Placeholder(name) => Some(name.as_str()),
            Segment::Literal(_) => None,
        })
    }

    /// Checks if a concrete path matches this pattern
    ///
    /// The path must already be stripped of query string and fragment.
    pub fn matches(&self, path: &str) -> bool {
        if !self.has_placeholders {
            return self.raw == path;
        }
        self.match_segments(path, |_, _| {})
    }

    /// Placeholder bindings for a matching path, `None` if it does not match
    ///
    /// # Examples
    ///
    /// ```
    /// use itas_rbac::routes::RoutePattern;
    ///
    /// let pattern = RoutePattern::new("/taxpayer/course/{id}").unwrap();
    /// let captures = pattern.captures("/taxpayer/course/abc").unwrap();
    /// assert_eq!(captures.get("id").map(String::as_str), Some("abc"));
    /// ```
    pub fn captures(&self, path: &str) -> Option<BTreeMap<String, String>> {
        if !self.has_placeholders {
            return (self.raw == path).then(BTreeMap::new);
        }

        let mut bindings = BTreeMap::new();
        let matched = self.match_segments(path, |name, value| {
            bindings.insert(name.to_string(), value.to_string());
        });
        matched.then_some(bindings)
    }

    /// Segment-wise match; `bind` is called for each placeholder binding
    fn match_segments<'p>(&self, path: &'p str, mut bind: impl FnMut(&str, &'p str)) -> bool {
        let Some(rest) = path.strip_prefix('/') else {
            return false;
        };

        let candidate: Vec<&str> = rest.split('/').collect();

        // Segment counts must agree exactly
        if candidate.len() != self.segments.len() {
            return false;
        }

        for (pattern_seg, path_seg) in self.segments.iter().zip(candidate) {
            match pattern_seg {
                Segment::Literal(literal) => {
                    if literal.as_str() != path_seg {
                        return false;
                    }
                }
                Segment::Placeholder(name) => {
                    if path_seg.is_empty() {
                        return false;
                    }
                    bind(name.as_str(), path_seg);
                }
            }
        }

        true
    }
}

impl FromStr for RoutePattern {
    type Err = PatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for RoutePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl Serialize for RoutePattern {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for RoutePattern {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_pattern() {
        let pattern = RoutePattern::new("/admin/analytics").unwrap();
        assert!(!pattern.has_placeholders());
        assert_eq!(pattern.depth(), 2);
        assert!(pattern.matches("/admin/analytics"));
        assert!(!pattern.matches("/admin/analytics/"));
        assert!(!pattern.matches("/admin"));
    }

    #[test]
    fn test_placeholder_pattern() {
        let pattern = RoutePattern::new("/taxpayer/course/{id}").unwrap();
        assert!(pattern.has_placeholders());
        assert_eq!(pattern.placeholders().collect::<Vec<_>>(), vec!["id"]);

        assert!(pattern.matches("/taxpayer/course/42"));
        assert!(pattern.matches("/taxpayer/course/abc"));
        assert!(!pattern.matches("/taxpayer/course/42/extra"));
        assert!(!pattern.matches("/taxpayer/course/"));
        assert!(!pattern.matches("/taxpayer/course"));
        assert!(!pattern.matches("/taxpayer/courses/42"));
        assert!(!pattern.matches("taxpayer/course/42"));
    }

    #[test]
    fn test_segment_count_sensitivity() {
        let short = RoutePattern::new("/admin/analytics").unwrap();
        let long = RoutePattern::new("/admin/analytics/{id}").unwrap();

        assert!(!long.matches("/admin/analytics"));
        assert!(!short.matches("/admin/analytics/7"));
    }

    #[test]
    fn test_empty_candidate_never_matches() {
        assert!(!RoutePattern::new("/profile").unwrap().matches(""));
        assert!(!RoutePattern::new("/course/{id}").unwrap().matches(""));
    }

    #[test]
    fn test_validation_errors() {
        assert_eq!(RoutePattern::new(""), Err(PatternError::Empty));
        assert!(matches!(
            RoutePattern::new("profile"),
            Err(PatternError::MissingLeadingSlash(_))
        ));
        assert!(matches!(
            RoutePattern::new("/admin//users"),
            Err(PatternError::EmptySegment(_))
        ));
        assert!(matches!(
            RoutePattern::new("/profile/"),
            Err(PatternError::EmptySegment(_))
        ));
        assert!(matches!(
            RoutePattern::new("/course/id{id}"),
            Err(PatternError::MalformedPlaceholder(_))
        ));
        assert!(matches!(
            RoutePattern::new("/course/{}"),
            Err(PatternError::MalformedPlaceholder(_))
        ));
        assert!(matches!(
            RoutePattern::new("/{section}/{id}"),
            Err(PatternError::NoLiteralSegment(_))
        ));
        assert!(matches!(
            RoutePattern::new("/course/{id}/module/{id}"),
            Err(PatternError::DuplicatePlaceholder { .. })
        ));
    }

    #[test]
    fn test_captures() {
        let pattern = RoutePattern::new("/course/{course}/module/{module}").unwrap();
        let captures = pattern.captures("/course/tax-101/module/3").unwrap();
        assert_eq!(captures["course"], "tax-101");
        assert_eq!(captures["module"], "3");

        assert!(pattern.captures("/course/tax-101/module").is_none());

        let literal = RoutePattern::new("/profile").unwrap();
        assert_eq!(literal.captures("/profile"), Some(BTreeMap::new()));
        assert_eq!(literal.captures("/profile/"), None);
    }

    #[test]
    fn test_serde_round_trip_validates() {
        let pattern: RoutePattern = serde_json::from_str("\"/staff/courses\"").unwrap();
        assert_eq!(pattern.as_str(), "/staff/courses");
        assert!(serde_json::from_str::<RoutePattern>("\"staff\"").is_err());
    }
}
