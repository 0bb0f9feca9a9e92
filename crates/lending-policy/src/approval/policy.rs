use std::fmt;

use super::config::ApprovalThresholds;
use super::rules::ApprovalSignals;
use super::ApplicantProfile;
use serde::{Deserialize, Serialize};

/// Adjudication outcome for a loan application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Approved,
    Rejected,
    ManualReview,
}

impl Decision {
    pub const fn label(self) -> &'static str {
        match self {
            Decision::Approved => "Approved",
            Decision::Rejected => "Rejected",
            Decision::ManualReview => "Manual Review",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Guard in the approval chain that produced a decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalRule {
    EmploymentGate,
    HighCreditTier,
    MidCreditTier,
    CompensatingFactors,
    LowCreditTier,
}

pub(crate) struct RuleMatch {
    pub rule: ApprovalRule,
    pub decision: Decision,
    pub rationale: String,
}

/// Ordered guard chain; the first matching guard wins.
pub(crate) fn decide_outcome(
    profile: &ApplicantProfile,
    thresholds: &ApprovalThresholds,
    signals: &ApprovalSignals,
) -> RuleMatch {
    if !profile.is_employed {
        return RuleMatch {
            rule: ApprovalRule::EmploymentGate,
            decision: Decision::Rejected,
            rationale: "applicant is not employed".to_string(),
        };
    }

    if profile.credit_score >= thresholds.high_credit_score {
        let (decision, rationale) = if signals.ratio_within_limit {
            (
                Decision::Approved,
                format!(
                    "credit score {} meets high tier {} with debt ratio {:.2}",
                    profile.credit_score, thresholds.high_credit_score, signals.debt_ratio
                ),
            )
        } else {
            (
                Decision::ManualReview,
                format!(
                    "debt ratio {:.2} exceeds {:.2} despite high credit score",
                    signals.debt_ratio, thresholds.max_debt_ratio
                ),
            )
        };
        return RuleMatch {
            rule: ApprovalRule::HighCreditTier,
            decision,
            rationale,
        };
    }

    if profile.credit_score >= thresholds.mid_credit_score {
        let (decision, rationale) = if signals.meets_min_income && signals.ratio_within_limit {
            (
                Decision::Approved,
                format!(
                    "credit score {} meets mid tier with income and debt ratio within policy",
                    profile.credit_score
                ),
            )
        } else if !signals.meets_min_income {
            (
                Decision::ManualReview,
                format!(
                    "income {:.2} below minimum {:.2}",
                    profile.annual_income, thresholds.min_income
                ),
            )
        } else {
            (
                Decision::ManualReview,
                format!(
                    "debt ratio {:.2} exceeds {:.2}",
                    signals.debt_ratio, thresholds.max_debt_ratio
                ),
            )
        };
        return RuleMatch {
            rule: ApprovalRule::MidCreditTier,
            decision,
            rationale,
        };
    }

    if signals.exceptional_income && signals.exceptional_ratio {
        return RuleMatch {
            rule: ApprovalRule::CompensatingFactors,
            decision: Decision::ManualReview,
            rationale: format!(
                "credit score {} below {} but income and debt ratio {:.2} are exceptional",
                profile.credit_score, thresholds.mid_credit_score, signals.debt_ratio
            ),
        };
    }

    RuleMatch {
        rule: ApprovalRule::LowCreditTier,
        decision: Decision::Rejected,
        rationale: format!(
            "credit score {} below {} without compensating factors",
            profile.credit_score, thresholds.mid_credit_score
        ),
    }
}
