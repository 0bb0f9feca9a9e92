use super::config::ApprovalThresholds;
use super::ApplicantProfile;

/// Values derived from a profile once, before any rule is consulted.
pub(crate) struct ApprovalSignals {
    pub debt_ratio: f64,
    pub ratio_within_limit: bool,
    pub meets_min_income: bool,
    pub exceptional_income: bool,
    pub exceptional_ratio: bool,
}

/// Debt-to-income ratio; zero income is infinitely risky regardless of debt.
pub fn debt_ratio(annual_income: f64, existing_debt: f64) -> f64 {
    if annual_income == 0.0 {
        f64::INFINITY
    } else {
        existing_debt / annual_income
    }
}

pub(crate) fn collect_signals(
    profile: &ApplicantProfile,
    thresholds: &ApprovalThresholds,
) -> ApprovalSignals {
    let debt_ratio = debt_ratio(profile.annual_income, profile.existing_debt);

    ApprovalSignals {
        debt_ratio,
        ratio_within_limit: debt_ratio <= thresholds.max_debt_ratio,
        meets_min_income: profile.annual_income >= thresholds.min_income,
        exceptional_income: profile.annual_income >= 2.0 * thresholds.min_income,
        exceptional_ratio: debt_ratio <= thresholds.max_debt_ratio / 2.0,
    }
}
