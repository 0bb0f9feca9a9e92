use std::env;
use std::str::FromStr;

use crate::approval::{ApprovalDecider, ApprovalThresholds};
use crate::lending::{LendingPolicy, LendingTables};

/// Distinguishes runtime behavior for different deployment stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyEnvironment {
    Development,
    Test,
    Production,
}

impl PolicyEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }

    /// Human-friendly logs while developing, single-line logs everywhere else.
    pub fn log_format(self) -> LogFormat {
        match self {
            Self::Development => LogFormat::Pretty,
            Self::Test | Self::Production => LogFormat::Compact,
        }
    }
}

/// Settings used to build independently configured evaluators.
#[derive(Debug, Clone)]
pub struct PolicySettings {
    pub environment: PolicyEnvironment,
    pub telemetry: TelemetryConfig,
    pub approval: ApprovalThresholds,
    pub max_renewals: u32,
}

impl PolicySettings {
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let environment = PolicyEnvironment::from_str(
            &env::var("LENDING_ENV").unwrap_or_else(|_| "development".to_string()),
        );
        let log_level = env::var("LENDING_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let defaults = ApprovalThresholds::default();
        let approval = ApprovalThresholds {
            high_credit_score: read_var("LENDING_HIGH_CREDIT_SCORE", defaults.high_credit_score)?,
            mid_credit_score: read_var("LENDING_MID_CREDIT_SCORE", defaults.mid_credit_score)?,
            min_income: read_var("LENDING_MIN_INCOME", defaults.min_income)?,
            max_debt_ratio: read_var("LENDING_MAX_DEBT_RATIO", defaults.max_debt_ratio)?,
        };
        validate_thresholds(&approval)?;

        let max_renewals = read_var("LENDING_MAX_RENEWALS", LendingTables::DEFAULT_MAX_RENEWALS)?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig {
                log_level,
                format: environment.log_format(),
            },
            approval,
            max_renewals,
        })
    }

    pub fn approval_decider(&self) -> ApprovalDecider {
        ApprovalDecider::new(self.approval.clone())
    }

    pub fn lending_policy(&self) -> LendingPolicy {
        LendingPolicy::new(LendingTables::standard().with_max_renewals(self.max_renewals))
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("{key} has unparsable value '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("inconsistent approval thresholds: {0}")]
    Inconsistent(String),
}

fn read_var<T: FromStr>(key: &'static str, default: T) -> Result<T, SettingsError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| SettingsError::InvalidValue { key, value: raw }),
        Err(_) => Ok(default),
    }
}

fn validate_thresholds(thresholds: &ApprovalThresholds) -> Result<(), SettingsError> {
    if thresholds.mid_credit_score > thresholds.high_credit_score {
        return Err(SettingsError::Inconsistent(format!(
            "mid credit score {} exceeds high credit score {}",
            thresholds.mid_credit_score, thresholds.high_credit_score
        )));
    }

    if !thresholds.max_debt_ratio.is_finite() || thresholds.max_debt_ratio < 0.0 {
        return Err(SettingsError::Inconsistent(format!(
            "max debt ratio must be a non-negative number, found {}",
            thresholds.max_debt_ratio
        )));
    }

    if !thresholds.min_income.is_finite() {
        return Err(SettingsError::Inconsistent(
            "minimum income must be finite".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approval::Decision;
    use crate::lending::{ItemCategory, RenewalRequest};
    use std::sync::{Mutex, OnceLock};

    const KEYS: [&str; 7] = [
        "LENDING_ENV",
        "LENDING_LOG_LEVEL",
        "LENDING_HIGH_CREDIT_SCORE",
        "LENDING_MID_CREDIT_SCORE",
        "LENDING_MIN_INCOME",
        "LENDING_MAX_DEBT_RATIO",
        "LENDING_MAX_RENEWALS",
    ];

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let settings = PolicySettings::load().expect("settings load with defaults");
        assert_eq!(settings.environment, PolicyEnvironment::Development);
        assert_eq!(settings.telemetry.log_level, "info");
        assert_eq!(settings.telemetry.format, LogFormat::Pretty);
        assert_eq!(settings.approval, ApprovalThresholds::default());
        assert_eq!(settings.max_renewals, 2);
    }

    #[test]
    fn overrides_flow_into_built_evaluators() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("LENDING_ENV", "prod");
        env::set_var("LENDING_MIN_INCOME", "45000");
        env::set_var("LENDING_MAX_RENEWALS", "3");
        let settings = PolicySettings::load().expect("settings load");
        reset_env();

        assert_eq!(settings.environment, PolicyEnvironment::Production);
        assert_eq!(settings.telemetry.format, LogFormat::Compact);

        let decider = settings.approval_decider();
        assert_eq!(decider.decide(700, 40_000.0, 4_000.0, true), Decision::ManualReview);

        let policy = settings.lending_policy();
        let request = RenewalRequest {
            category: ItemCategory::Regular,
            days_already_loaned: 10,
            renewal_days: 5,
            previous_renewals: 2,
            requested_by_another_user: false,
        };
        assert!(policy.can_renew(&request).expect("valid request"));
    }

    #[test]
    fn rejects_unparsable_values() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("LENDING_MAX_DEBT_RATIO", "forty percent");
        let result = PolicySettings::load();
        reset_env();

        match result {
            Err(SettingsError::InvalidValue { key, value }) => {
                assert_eq!(key, "LENDING_MAX_DEBT_RATIO");
                assert_eq!(value, "forty percent");
            }
            other => panic!("expected invalid value, got {other:?}"),
        }
    }

    #[test]
    fn rejects_inverted_credit_tiers() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("LENDING_MID_CREDIT_SCORE", "800");
        let result = PolicySettings::load();
        reset_env();

        assert!(matches!(result, Err(SettingsError::Inconsistent(_))));
    }

    #[test]
    fn ci_environment_logs_compactly() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("LENDING_ENV", "CI");
        let settings = PolicySettings::load().expect("settings load");
        reset_env();

        assert_eq!(settings.environment, PolicyEnvironment::Test);
        assert_eq!(settings.telemetry.format, LogFormat::Compact);
    }
}
