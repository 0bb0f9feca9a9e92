//! Library lending rules: loan periods, borrowing ceilings, renewals, due dates and fines.

mod domain;
mod fines;
mod renewal;
mod tables;

#[cfg(test)]
mod tests;

pub use domain::{ItemCategory, RenewalRequest, UserTier};
pub use renewal::{RenewalVerdict, RenewalVeto};
pub use tables::{LendingTables, LoanPeriod};

use chrono::{DateTime, Duration, TimeZone};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::PolicyError;

/// Stateless evaluator over a fixed set of lending tables.
#[derive(Debug, Clone, Default)]
pub struct LendingPolicy {
    tables: LendingTables,
}

impl LendingPolicy {
    pub fn new(tables: LendingTables) -> Self {
        Self { tables }
    }

    /// Builds a policy after checking the tables, e.g. ones deserialized from JSON.
    pub fn try_new(tables: LendingTables) -> Result<Self, PolicyError> {
        tables.validate()?;
        Ok(Self::new(tables))
    }

    pub fn tables(&self) -> &LendingTables {
        &self.tables
    }

    pub fn validate_loan_days(
        &self,
        category: ItemCategory,
        requested_days: i64,
    ) -> Result<bool, PolicyError> {
        let period = self.tables.loan_period(category)?;
        Ok(period.contains(requested_days))
    }

    pub fn validate_quantity(
        &self,
        tier: UserTier,
        currently_borrowed: i64,
        additional_requested: i64,
    ) -> Result<bool, PolicyError> {
        let max_items = self
            .tables
            .max_items(tier)
            .map_err(PolicyError::into_invalid_argument)?;

        if currently_borrowed < 0 {
            return Err(PolicyError::invalid(
                "currently borrowed items cannot be negative",
            ));
        }
        if additional_requested <= 0 {
            return Err(PolicyError::invalid("additional items must be positive"));
        }

        let total = currently_borrowed.saturating_add(additional_requested);
        Ok(total <= i64::from(max_items))
    }

    /// Single-item form of [`LendingPolicy::validate_quantity`].
    pub fn validate_additional_item(
        &self,
        tier: UserTier,
        currently_borrowed: i64,
    ) -> Result<bool, PolicyError> {
        self.validate_quantity(tier, currently_borrowed, 1)
    }

    pub fn can_renew(&self, request: &RenewalRequest) -> Result<bool, PolicyError> {
        Ok(self.renewal_verdict(request)?.is_allowed())
    }

    /// Like [`LendingPolicy::can_renew`], naming the veto that denied the renewal.
    pub fn renewal_verdict(&self, request: &RenewalRequest) -> Result<RenewalVerdict, PolicyError> {
        let period = self
            .tables
            .loan_period(request.category)
            .map_err(PolicyError::into_invalid_argument)?;

        if request.days_already_loaned < 0 {
            return Err(PolicyError::invalid("days already loaned cannot be negative"));
        }
        if request.renewal_days <= 0 {
            return Err(PolicyError::invalid("renewal days must be positive"));
        }
        if request.previous_renewals < 0 {
            return Err(PolicyError::invalid("previous renewals cannot be negative"));
        }

        match renewal::first_veto(request, period, self.tables.max_renewals) {
            Some(veto) => {
                debug!(category = %request.category, ?veto, "renewal denied");
                Ok(RenewalVerdict::Denied(veto))
            }
            None => Ok(RenewalVerdict::Allowed),
        }
    }

    /// Offsets `loan_start` by exactly `loan_days` whole days.
    pub fn due_date<Tz: TimeZone>(
        &self,
        loan_start: DateTime<Tz>,
        loan_days: i64,
    ) -> Result<DateTime<Tz>, PolicyError> {
        if loan_days <= 0 {
            return Err(PolicyError::invalid("loan days must be positive"));
        }

        Duration::try_days(loan_days)
            .and_then(|offset| loan_start.checked_add_signed(offset))
            .ok_or_else(|| {
                PolicyError::invalid(format!("due date {loan_days} days out is not representable"))
            })
    }

    /// Non-positive `days_overdue` owes nothing and skips the category lookup.
    pub fn calculate_fine(
        &self,
        days_overdue: i64,
        category: ItemCategory,
    ) -> Result<Decimal, PolicyError> {
        if days_overdue <= 0 {
            return Ok(Decimal::ZERO);
        }

        let daily_rate = self.tables.daily_fine_rate(category)?;
        fines::capped_fine(days_overdue, daily_rate, self.tables.fine_cap_multiplier)
    }

    pub fn max_fine(&self, category: ItemCategory) -> Result<Decimal, PolicyError> {
        let daily_rate = self.tables.daily_fine_rate(category)?;
        let cap = fines::fine_cap(daily_rate, self.tables.fine_cap_multiplier)?;
        Ok(cap.round_dp(2))
    }
}
