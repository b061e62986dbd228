//! Daily cost levels.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Discrete daily spending level of a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DailyCostLevel {
    Low,
    Mid,
    High,
}

impl DailyCostLevel {
    /// Cheapness rank. Lower is cheaper.
    pub fn rank(self) -> u8 {
        match self {
            DailyCostLevel::Low => 1,
            DailyCostLevel::Mid => 2,
            DailyCostLevel::High => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DailyCostLevel::Low => "Low",
            DailyCostLevel::Mid => "Mid",
            DailyCostLevel::High => "High",
        }
    }
}

impl PartialOrd for DailyCostLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DailyCostLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl fmt::Display for DailyCostLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
