use rust_decimal::Decimal;

use crate::lending::{ItemCategory, LendingPolicy, LendingTables, LoanPeriod, UserTier};

#[test]
fn standard_tables_are_valid() {
    assert_eq!(LendingTables::standard().validate(), Ok(()));
    assert!(LendingPolicy::try_new(LendingTables::standard()).is_ok());
}

#[test]
fn inverted_loan_period_is_rejected() {
    let mut tables = LendingTables::standard();
    tables
        .periods
        .insert(ItemCategory::Popular, LoanPeriod::new(14, 7));

    let err = tables.validate().expect_err("min above max");
    assert!(err.is_config());
    assert!(err.to_string().contains("popular"));
}

#[test]
fn zero_quantity_ceiling_is_rejected() {
    let mut tables = LendingTables::standard();
    tables.quantity_ceilings.insert(UserTier::Premium, 0);

    let err = LendingPolicy::try_new(tables).expect_err("zero ceiling");
    assert!(err.is_config());
}

#[test]
fn negative_fine_rate_is_rejected() {
    let mut tables = LendingTables::standard();
    tables
        .fine_rates
        .insert(ItemCategory::Reference, Decimal::new(-100, 2));

    let err = tables.validate().expect_err("negative rate");
    assert!(err.is_config());
}

#[test]
fn overflowing_fine_cap_is_rejected() {
    let mut tables = LendingTables::standard();
    tables.fine_rates.insert(ItemCategory::Regular, Decimal::MAX);

    assert!(tables.validate().expect_err("cap overflows").is_config());
}

#[test]
fn missing_entries_are_left_to_lookups() {
    let mut tables = LendingTables::standard();
    tables.periods.remove(&ItemCategory::Reference);
    tables.quantity_ceilings.remove(&UserTier::Researcher);

    assert_eq!(tables.validate(), Ok(()));
}
