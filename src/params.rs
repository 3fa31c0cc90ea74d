//! Typed query parameters.
//!
//! Raw path and query-string values are parsed here, at the service boundary,
//! so the lookups in [`crate::query`] only ever see constrained values.

use std::fmt;
use std::str::FromStr;

use crate::error::QueryError;

/// Non-empty search text, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    raw: String,
    folded: String,
}

impl SearchTerm {
    /// Parse a raw value for the named parameter.
    ///
    /// ```rust
    /// use catalogo::SearchTerm;
    ///
    /// let term = SearchTerm::parse("apellido", "GARCÍA").unwrap();
    /// assert_eq!(term.as_str(), "GARCÍA");
    /// assert_eq!(term.folded(), "garcía");
    /// assert!(SearchTerm::parse("apellido", "").is_err());
    /// ```
    pub fn parse(parameter: &'static str, raw: impl Into<String>) -> Result<Self, QueryError> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(QueryError::InvalidParameter {
                parameter,
                value: raw,
            });
        }
        let folded = raw.to_lowercase();
        Ok(Self { raw, folded })
    }

    /// The value as received.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lowercased form used for matching.
    pub fn folded(&self) -> &str {
        &self.folded
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Leading letters of a surname, compared case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurnamePrefix(SearchTerm);

impl SurnamePrefix {
    /// An absent or empty `apellido` query value means "no prefix".
    pub fn from_query(raw: Option<String>) -> Option<Self> {
        raw.and_then(|value| SearchTerm::parse("apellido", value).ok())
            .map(SurnamePrefix)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn folded(&self) -> &str {
        self.0.folded()
    }
}

impl fmt::Display for SurnamePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Edition year parsed from text.
///
/// Surrounding whitespace is tolerated; anything else that is not a base-10
/// integer is rejected instead of silently matching nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EditionYear(i32);

impl EditionYear {
    pub fn new(year: i32) -> Self {
        Self(year)
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl FromStr for EditionYear {
    type Err = QueryError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        raw.trim()
            .parse::<i32>()
            .map(EditionYear)
            .map_err(|_| QueryError::InvalidParameter {
                parameter: "year",
                value: raw.to_string(),
            })
    }
}

impl From<i32> for EditionYear {
    fn from(year: i32) -> Self {
        Self(year)
    }
}

impl fmt::Display for EditionYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
