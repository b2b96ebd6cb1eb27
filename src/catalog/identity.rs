use serde::Serialize;
use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize)]
#[serde(transparent)]
/// Course identifier used as the catalog key (e.g., `CSCI200`).
///
/// Identifiers are always stored trimmed and ASCII-uppercased, so lookups are
/// case-insensitive as long as callers build keys through `CourseId::normalize`.
/// Ordering is plain byte order on the normalized text.
pub struct CourseId(String);

impl CourseId {
    /// Trim surrounding whitespace and uppercase ASCII letters.
    pub fn normalize(raw: &str) -> Self {
        Self(raw.trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
