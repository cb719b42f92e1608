//! Object matcher service - selects scene objects by name pattern
//!
//! This module contains pure matching logic with no I/O dependencies.
//!
//! Patterns are globs (`crate_*`, `*_v00?`) unless prefixed with `re:`, in
//! which case the rest is a regular expression searched in the name.

use glob::Pattern;
use regex::Regex;

use crate::core::models::ObjectRef;

/// Prefix marking a regular-expression pattern
pub const REGEX_PREFIX: &str = "re:";

/// A compiled object-name pattern
#[derive(Debug, Clone)]
pub enum ObjectPattern {
    /// Glob over the whole name
    Glob(Pattern),
    /// Regular expression, unanchored
    Regex(Regex),
    /// Literal name (used when the glob does not compile)
    Exact(String),
}

impl ObjectPattern {
    /// Compile a pattern
    ///
    /// An invalid glob falls back to exact comparison; an invalid regular
    /// expression is an error.
    pub fn parse(pattern: &str) -> Result<Self, regex::Error> {
        if let Some(expr) = pattern.strip_prefix(REGEX_PREFIX) {
            return Ok(Self::Regex(Regex::new(expr)?));
        }
        Ok(Pattern::new(pattern).map_or_else(|_| Self::Exact(pattern.to_string()), Self::Glob))
    }

    /// Whether the name matches
    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Self::Glob(p) => p.matches(name),
            Self::Regex(re) => re.is_match(name),
            Self::Exact(literal) => literal == name,
        }
    }
}

/// Check if an object name matches a pattern
///
/// A pattern that does not compile matches nothing.
#[must_use]
pub fn matches_object(pattern: &str, name: &str) -> bool {
    ObjectPattern::parse(pattern).is_ok_and(|p| p.matches(name))
}

/// Select the objects matching any of the patterns, in `objects` order
///
/// Returns the selection and the patterns that matched nothing.
pub fn select_objects<'p>(
    objects: &[ObjectRef],
    patterns: &'p [String],
) -> Result<(Vec<ObjectRef>, Vec<&'p str>), regex::Error> {
    let compiled =
        patterns.iter().map(|p| ObjectPattern::parse(p)).collect::<Result<Vec<_>, _>>()?;

    let selected = objects
        .iter()
        .filter(|o| compiled.iter().any(|p| p.matches(o.as_str())))
        .cloned()
        .collect();

    let unmatched = patterns
        .iter()
        .zip(&compiled)
        .filter(|(_, p)| !objects.iter().any(|o| p.matches(o.as_str())))
        .map(|(raw, _)| raw.as_str())
        .collect();

    Ok((selected, unmatched))
}
