use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::domain::{ItemCategory, UserTier};
use super::fines::fine_cap;
use crate::error::PolicyError;

/// Inclusive range of days an item may be loaned for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanPeriod {
    pub min_days: u32,
    pub max_days: u32,
}

impl LoanPeriod {
    pub const fn new(min_days: u32, max_days: u32) -> Self {
        Self { min_days, max_days }
    }

    pub fn contains(&self, days: i64) -> bool {
        i64::from(self.min_days) <= days && days <= i64::from(self.max_days)
    }
}

/// Immutable lookup tables keyed by category and tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LendingTables {
    pub periods: BTreeMap<ItemCategory, LoanPeriod>,
    pub quantity_ceilings: BTreeMap<UserTier, u32>,
    pub fine_rates: BTreeMap<ItemCategory, Decimal>,
    pub max_renewals: u32,
    pub fine_cap_multiplier: u32,
}

impl LendingTables {
    pub const DEFAULT_MAX_RENEWALS: u32 = 2;
    pub const DEFAULT_FINE_CAP_MULTIPLIER: u32 = 10;

    pub fn standard() -> Self {
        let periods = BTreeMap::from([
            (ItemCategory::Regular, LoanPeriod::new(14, 30)),
            (ItemCategory::Popular, LoanPeriod::new(7, 14)),
            (ItemCategory::Reference, LoanPeriod::new(1, 3)),
        ]);

        let quantity_ceilings = BTreeMap::from([
            (UserTier::Regular, 5),
            (UserTier::Premium, 10),
            (UserTier::Researcher, 15),
        ]);

        let fine_rates = BTreeMap::from([
            (ItemCategory::Regular, Decimal::new(50, 2)),
            (ItemCategory::Popular, Decimal::new(100, 2)),
            (ItemCategory::Reference, Decimal::new(200, 2)),
        ]);

        Self {
            periods,
            quantity_ceilings,
            fine_rates,
            max_renewals: Self::DEFAULT_MAX_RENEWALS,
            fine_cap_multiplier: Self::DEFAULT_FINE_CAP_MULTIPLIER,
        }
    }

    pub fn with_max_renewals(mut self, max_renewals: u32) -> Self {
        self.max_renewals = max_renewals;
        self
    }

    /// Rejects tables whose entries cannot describe a usable policy.
    pub fn validate(&self) -> Result<(), PolicyError> {
        for (category, period) in &self.periods {
            if period.min_days > period.max_days {
                return Err(PolicyError::config(format!(
                    "loan period for {category} has min {} above max {}",
                    period.min_days, period.max_days
                )));
            }
        }

        for (tier, ceiling) in &self.quantity_ceilings {
            if *ceiling == 0 {
                return Err(PolicyError::config(format!(
                    "quantity ceiling for {tier} must be positive"
                )));
            }
        }

        for (category, rate) in &self.fine_rates {
            if *rate < Decimal::ZERO {
                return Err(PolicyError::config(format!(
                    "fine rate for {category} cannot be negative, found {rate}"
                )));
            }
            fine_cap(*rate, self.fine_cap_multiplier)?;
        }

        Ok(())
    }

    pub fn loan_period(&self, category: ItemCategory) -> Result<LoanPeriod, PolicyError> {
        self.periods
            .get(&category)
            .copied()
            .ok_or_else(|| {
                PolicyError::config(format!("no loan period configured for {category}"))
            })
    }

    pub fn max_items(&self, tier: UserTier) -> Result<u32, PolicyError> {
        self.quantity_ceilings
            .get(&tier)
            .copied()
            .ok_or_else(|| {
                PolicyError::config(format!("no quantity ceiling configured for {tier}"))
            })
    }

    pub fn daily_fine_rate(&self, category: ItemCategory) -> Result<Decimal, PolicyError> {
        self.fine_rates
            .get(&category)
            .copied()
            .ok_or_else(|| {
                PolicyError::config(format!("no fine rate configured for {category}"))
            })
    }
}

impl Default for LendingTables {
    fn default() -> Self {
        Self::standard()
    }
}
