use crate::lending::{ItemCategory, LendingPolicy, LendingTables, RenewalRequest, UserTier};

pub(super) fn policy() -> LendingPolicy {
    LendingPolicy::default()
}

pub(super) fn policy_without_category(category: ItemCategory) -> LendingPolicy {
    let mut tables = LendingTables::standard();
    tables.periods.remove(&category);
    tables.fine_rates.remove(&category);
    LendingPolicy::new(tables)
}

pub(super) fn policy_without_tier(tier: UserTier) -> LendingPolicy {
    let mut tables = LendingTables::standard();
    tables.quantity_ceilings.remove(&tier);
    LendingPolicy::new(tables)
}

/// Renewal that passes every veto for a regular item.
pub(super) fn permissive_renewal() -> RenewalRequest {
    RenewalRequest {
        category: ItemCategory::Regular,
        days_already_loaned: 14,
        renewal_days: 7,
        previous_renewals: 0,
        requested_by_another_user: false,
    }
}
