use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PolicyError;

/// Classification of a loanable item governing its loan period and fine rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Regular,
    Popular,
    Reference,
}

impl ItemCategory {
    pub const fn ordered() -> [Self; 3] {
        [Self::Regular, Self::Popular, Self::Reference]
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Popular => "popular",
            Self::Reference => "reference",
        }
    }
}

impl fmt::Display for ItemCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ItemCategory {
    type Err = PolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "regular" => Ok(Self::Regular),
            "popular" => Ok(Self::Popular),
            "reference" => Ok(Self::Reference),
            other => Err(PolicyError::config(format!("unknown item category: {other}"))),
        }
    }
}

/// Borrower classification governing how many items may be held at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserTier {
    Regular,
    Premium,
    Researcher,
}

impl UserTier {
    pub const fn ordered() -> [Self; 3] {
        [Self::Regular, Self::Premium, Self::Researcher]
    }

    pub const fn tag(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Premium => "premium",
            Self::Researcher => "researcher",
        }
    }
}

impl fmt::Display for UserTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for UserTier {
    type Err = PolicyError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "regular" => Ok(Self::Regular),
            "premium" => Ok(Self::Premium),
            "researcher" => Ok(Self::Researcher),
            other => Err(PolicyError::config(format!("unknown user tier: {other}"))),
        }
    }
}

/// Request to extend an active loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenewalRequest {
    pub category: ItemCategory,
    pub days_already_loaned: i64,
    pub renewal_days: i64,
    #[serde(default)]
    pub previous_renewals: i64,
    #[serde(default)]
    pub requested_by_another_user: bool,
}

impl RenewalRequest {
    /// First renewal with no competing request.
    pub fn new(category: ItemCategory, days_already_loaned: i64, renewal_days: i64) -> Self {
        Self {
            category,
            days_already_loaned,
            renewal_days,
            previous_renewals: 0,
            requested_by_another_user: false,
        }
    }
}
