use serde::{Deserialize, Serialize};

/// Threshold dials used by the approval guard chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApprovalThresholds {
    pub high_credit_score: i32,
    pub mid_credit_score: i32,
    pub min_income: f64,
    pub max_debt_ratio: f64,
}

impl Default for ApprovalThresholds {
    fn default() -> Self {
        Self {
            high_credit_score: 750,
            mid_credit_score: 650,
            min_income: 30_000.0,
            max_debt_ratio: 0.4,
        }
    }
}
