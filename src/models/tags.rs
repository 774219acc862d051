//! Person and category tag enumerations
//!
//! Both sets are closed: every expense carries exactly one member of each, and
//! summary buckets are indexed exhaustively so no lookup can miss. The
//! lowercase serde form matches the exported CSV and the original data set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which household member incurred the expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PersonTag {
    #[default]
    Myself,
    Mom,
    Dad,
    Other,
}

impl PersonTag {
    /// Number of person tags
    pub const COUNT: usize = 4;

    /// All person tags, in display order
    pub const ALL: [PersonTag; Self::COUNT] =
        [Self::Myself, Self::Mom, Self::Dad, Self::Other];

    /// Stable index for array-backed bucket maps
    pub const fn index(self) -> usize {
        match self {
            Self::Myself => 0,
            Self::Mom => 1,
            Self::Dad => 2,
            Self::Other => 3,
        }
    }

    /// Lowercase label, as serialized and displayed
    pub const fn label(self) -> &'static str {
        match self {
            Self::Myself => "myself",
            Self::Mom => "mom",
            Self::Dad => "dad",
            Self::Other => "other",
        }
    }

    /// The next tag in display order, wrapping around
    pub const fn next(self) -> Self {
        match self {
            Self::Myself => Self::Mom,
            Self::Mom => Self::Dad,
            Self::Dad => Self::Other,
            Self::Other => Self::Myself,
        }
    }

    /// The previous tag in display order, wrapping around
    pub const fn prev(self) -> Self {
        match self {
            Self::Myself => Self::Other,
            Self::Mom => Self::Myself,
            Self::Dad => Self::Mom,
            Self::Other => Self::Dad,
        }
    }
}

impl fmt::Display for PersonTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for PersonTag {
    type Err = UnknownTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| UnknownTagError(s.to_string()))
    }
}

/// The type of spending
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CategoryTag {
    Food,
    Groceries,
    Bills,
    Transportation,
    Entertainment,
    Shopping,
    Accessories,
    Health,
    #[default]
    Other,
}

impl CategoryTag {
    /// Number of category tags
    pub const COUNT: usize = 9;

    /// All category tags, in display order
    pub const ALL: [CategoryTag; Self::COUNT] = [
        Self::Food,
        Self::Groceries,
        Self::Bills,
        Self::Transportation,
        Self::Entertainment,
        Self::Shopping,
        Self::Accessories,
        Self::Health,
        Self::Other,
    ];

    /// Stable index for array-backed bucket maps
    pub const fn index(self) -> usize {
        match self {
            Self::Food => 0,
            Self::Groceries => 1,
            Self::Bills => 2,
            Self::Transportation => 3,
            Self::Entertainment => 4,
            Self::Shopping => 5,
            Self::Accessories => 6,
            Self::Health => 7,
            Self::Other => 8,
        }
    }

    /// Lowercase label, as serialized and displayed
    pub const fn label(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Groceries => "groceries",
            Self::Bills => "bills",
            Self::Transportation => "transportation",
            Self::Entertainment => "entertainment",
            Self::Shopping => "shopping",
            Self::Accessories => "accessories",
            Self::Health => "health",
            Self::Other => "other",
        }
    }

    /// The next tag in display order, wrapping around
    pub fn next(self) -> Self {
        let i = (self.index() + 1) % Self::COUNT;
        Self::ALL[i]
    }

    /// The previous tag in display order, wrapping around
    pub fn prev(self) -> Self {
        let i = (self.index() + Self::COUNT - 1) % Self::COUNT;
        Self::ALL[i]
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for CategoryTag {
    type Err = UnknownTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| UnknownTagError(s.to_string()))
    }
}

/// Error for parsing an unknown tag label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTagError(pub String);

impl fmt::Display for UnknownTagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown tag: {}", self.0)
    }
}

impl std::error::Error for UnknownTagError {}
