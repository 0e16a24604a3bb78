//! Closed value sets shared by every catalog domain.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Result};

/// An enumeration whose values are fixed and matched by their textual form.
///
/// Parsing is case-insensitive and ignores surrounding whitespace, so a CSV
/// cell of ` Next.js ` resolves to the same variant as `next.js`.
pub trait ClosedSet: Copy + PartialEq + Sized + 'static {
    /// Field name reported when a value does not belong to the set.
    const FIELD: &'static str;

    fn all() -> &'static [Self];

    fn as_str(self) -> &'static str;

    fn parse(value: &str) -> Result<Self> {
        let needle = value.trim();
        Self::all()
            .iter()
            .copied()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| CatalogError::InvalidValue {
                field: Self::FIELD,
                value: value.to_string(),
            })
    }
}

/// Three-step ordinal used for complexity, effort, impact and urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Low,
    Medium,
    High,
}

impl ClosedSet for Level {
    const FIELD: &'static str = "level";

    fn all() -> &'static [Self] {
        &[Self::Low, Self::Medium, Self::High]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Priority attached to a recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl ClosedSet for Priority {
    const FIELD: &'static str = "priority";

    fn all() -> &'static [Self] {
        &[Self::Critical, Self::High, Self::Medium, Self::Low]
    }

    fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
