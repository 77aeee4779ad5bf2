//! Per-letter feedback classification

use std::fmt;

/// Feedback for a single letter of a guess
///
/// Variants are ordered by strength: `Absent < Present < Exact`.
/// Keyboard hints rely on this ordering to keep the best result seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Classification {
    /// Letter has no remaining unconsumed match in the target
    Absent,
    /// Letter is in the target at a different position
    Present,
    /// Letter matches the target at this position
    Exact,
}

impl Classification {
    /// Short code used in plain text output: `G`, `Y` or `-`
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Merge with a previous result, keeping the stronger one
    #[must_use]
    pub fn best(self, other: Self) -> Self {
        self.max(other)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Exact => "exact",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(name)
    }
}
