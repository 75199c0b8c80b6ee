//! Engine kinds and their names

use std::fmt;
use std::str::FromStr;

use super::EngineError;

/// Engine implementations the factory can build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineKind {
    /// Segment tree, logarithmic query and update
    #[cfg_attr(feature = "serde", serde(rename = "fast", alias = "tree"))]
    Tree,

    /// Linear scan over a private copy, used as the oracle
    #[cfg_attr(feature = "serde", serde(rename = "slow", alias = "reference"))]
    Reference,
}

impl EngineKind {
    /// Every engine kind, for harnesses that enumerate them
    pub const ALL: [EngineKind; 2] = [EngineKind::Tree, EngineKind::Reference];

    /// Canonical name accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            EngineKind::Tree => "fast",
            EngineKind::Reference => "slow",
        }
    }

    /// Descriptive alias, also accepted by [`FromStr`]
    pub fn alias(&self) -> &'static str {
        match self {
            EngineKind::Tree => "tree",
            EngineKind::Reference => "reference",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            EngineKind::Tree => "Segment tree with O(log n) query and update.",
            EngineKind::Reference => "Brute-force scan with O(n) query and O(1) update.",
        }
    }
}

impl FromStr for EngineKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EngineKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s || kind.alias() == s)
            .ok_or_else(|| EngineError::UnknownKind(s.to_string()))
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
