use serde::{Deserialize, Serialize};

use super::domain::RenewalRequest;
use super::tables::LoanPeriod;

/// Condition that alone is sufficient to deny a renewal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenewalVeto {
    RequestedByAnotherUser,
    RenewalLimitReached { previous_renewals: i64, max_renewals: u32 },
    ExceedsLoanPeriod { total_days: i64, max_days: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenewalVerdict {
    Allowed,
    Denied(RenewalVeto),
}

impl RenewalVerdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, RenewalVerdict::Allowed)
    }

    pub fn veto(&self) -> Option<RenewalVeto> {
        match self {
            RenewalVerdict::Allowed => None,
            RenewalVerdict::Denied(veto) => Some(*veto),
        }
    }
}

/// Vetoes in priority order; a competing request overrides everything else.
pub(crate) fn first_veto(
    request: &RenewalRequest,
    period: LoanPeriod,
    max_renewals: u32,
) -> Option<RenewalVeto> {
    if request.requested_by_another_user {
        return Some(RenewalVeto::RequestedByAnotherUser);
    }

    if request.previous_renewals >= i64::from(max_renewals) {
        return Some(RenewalVeto::RenewalLimitReached {
            previous_renewals: request.previous_renewals,
            max_renewals,
        });
    }

    let total_days = request
        .days_already_loaned
        .saturating_add(request.renewal_days);
    if total_days > i64::from(period.max_days) {
        return Some(RenewalVeto::ExceedsLoanPeriod {
            total_days,
            max_days: period.max_days,
        });
    }

    None
}
