//! Loan approval and library lending policy evaluation.
//!
//! Both surfaces are pure: every call reads only its arguments and the immutable
//! thresholds or tables the evaluator was constructed with.

pub mod approval;
pub mod config;
pub mod error;
pub mod lending;
pub mod telemetry;

pub use approval::{
    ApplicantProfile, ApprovalDecider, ApprovalOutcome, ApprovalRule, ApprovalThresholds, Decision,
};
pub use error::PolicyError;
pub use lending::{
    ItemCategory, LendingPolicy, LendingTables, LoanPeriod, RenewalRequest, RenewalVerdict,
    RenewalVeto, UserTier,
};
