use rust_decimal::Decimal;

use crate::error::PolicyError;

/// Largest fine a category can accrue: `cap_multiplier` days at the daily rate.
pub(crate) fn fine_cap(daily_rate: Decimal, cap_multiplier: u32) -> Result<Decimal, PolicyError> {
    daily_rate
        .checked_mul(Decimal::from(cap_multiplier))
        .ok_or_else(|| {
            PolicyError::config(format!(
                "fine cap of {cap_multiplier} days at rate {daily_rate} overflows"
            ))
        })
}

/// Overdue fine capped at `cap_multiplier` days, rounded to whole cents.
pub(crate) fn capped_fine(
    days_overdue: i64,
    daily_rate: Decimal,
    cap_multiplier: u32,
) -> Result<Decimal, PolicyError> {
    let cap = fine_cap(daily_rate, cap_multiplier)?;
    let fine = Decimal::from(days_overdue)
        .checked_mul(daily_rate)
        .map_or(cap, |fine| fine.min(cap));

    Ok(fine.round_dp(2))
}
