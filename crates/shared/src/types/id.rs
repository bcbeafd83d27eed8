//! Typed IDs for expense records and their derived occurrences.
//!
//! Storage assigns integer row ids to definitions. Occurrences never get a
//! row id of their own from the engine; they are identified structurally by
//! their parent id and generation index, which is unique and stable across runs.

use serde::{Deserialize, Serialize};

/// Error returned when an id cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid id: {0}")]
pub struct ParseIdError(pub String);

/// Unique identifier for a stored expense definition.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ExpenseId(pub i64);

impl ExpenseId {
    /// Placeholder id for a definition that has not been stored yet.
    pub const UNASSIGNED: Self = Self(0);

    /// Creates an id from a storage row id.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the inner row id.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }

    /// Returns true if the storage collaborator has assigned this id.
    #[must_use]
    pub const fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ExpenseId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ParseIdError(s.to_string()))
    }
}

/// Identity of one occurrence: the parent definition plus its generation index.
///
/// Index 0 is the occurrence at the parent's original effective date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OccurrenceId {
    /// Definition this occurrence was generated from.
    pub parent: ExpenseId,
    /// Zero-based position in the generated series.
    pub index: u32,
}

impl OccurrenceId {
    /// Creates an occurrence id.
    #[must_use]
    pub const fn new(parent: ExpenseId, index: u32) -> Self {
        Self { parent, index }
    }

    /// Returns true if this is the first occurrence of its series.
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.index == 0
    }
}

impl std::fmt::Display for OccurrenceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.parent, self.index)
    }
}

impl std::str::FromStr for OccurrenceId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Parent ids may be negative, so split on the last separator.
        let (parent, index) = s
            .rsplit_once('-')
            .ok_or_else(|| ParseIdError(s.to_string()))?;
        let parent = parent.parse::<ExpenseId>()?;
        let index = index
            .parse::<u32>()
            .map_err(|_| ParseIdError(s.to_string()))?;
        Ok(Self { parent, index })
    }
}
