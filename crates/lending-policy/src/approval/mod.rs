mod config;
mod policy;
mod rules;


pub use config::ApprovalThresholds;
pub use policy::{ApprovalRule, Decision};
pub use rules::debt_ratio;

use policy::decide_outcome;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Applicant attributes consulted by the decider. Values are never range-checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApplicantProfile {
    pub credit_score: i32,
    pub annual_income: f64,
    pub existing_debt: f64,
    pub is_employed: bool,
}

/// Stateless decider that applies fixed thresholds to an applicant.
#[derive(Debug, Clone, Default)]
pub struct ApprovalDecider {
    thresholds: ApprovalThresholds,
}

impl ApprovalDecider {
    pub fn new(thresholds: ApprovalThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &ApprovalThresholds {
        &self.thresholds
    }

    pub fn decide(
        &self,
        credit_score: i32,
        annual_income: f64,
        existing_debt: f64,
        is_employed: bool,
    ) -> Decision {
        self.decide_profile(&ApplicantProfile {
            credit_score,
            annual_income,
            existing_debt,
            is_employed,
        })
        .decision
    }

    pub fn decide_profile(&self, profile: &ApplicantProfile) -> ApprovalOutcome {
        let signals = rules::collect_signals(profile, &self.thresholds);
        let matched = decide_outcome(profile, &self.thresholds, &signals);

        debug!(
            credit_score = profile.credit_score,
            debt_ratio = signals.debt_ratio,
            rule = ?matched.rule,
            decision = %matched.decision,
            "loan application evaluated"
        );

        ApprovalOutcome {
            decision: matched.decision,
            rule: matched.rule,
            debt_ratio: signals.debt_ratio,
            rationale: matched.rationale,
        }
    }
}

/// Decision plus the audit trail that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalOutcome {
    pub decision: Decision,
    pub rule: ApprovalRule,
    pub debt_ratio: f64,
    pub rationale: String,
}
