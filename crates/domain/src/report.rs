//! Suite reporting types
//!
//! Per-scenario outcomes and the aggregate suite report produced by a
//! run.

use std::fmt;
use std::time::Duration;

/// Outcome of a single scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScenarioStatus {
    /// Every assertion in the scenario held.
    Passed,
    /// An assertion or transport call failed; the message is the
    /// rendered error.
    Failed(String),
    /// A prerequisite fixture was missing, so the scenario never ran.
    Skipped(String),
}

/// The recorded result of one scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReport {
    /// Scenario name, as declared by the runner.
    pub name: String,
    /// What happened.
    pub status: ScenarioStatus,
    /// Wall-clock time spent in the scenario.
    pub duration: Duration,
}

impl ScenarioReport {
    /// Creates a passed report.
    #[must_use]
    pub fn passed(name: impl Into<String>, duration: Duration) -> Self {
        Self {
            name: name.into(),
            status: ScenarioStatus::Passed,
            duration,
        }
    }

    /// Creates a failed report from a rendered error.
    #[must_use]
    pub fn failed(name: impl Into<String>, error: impl fmt::Display, duration: Duration) -> Self {
        Self {
            name: name.into(),
            status: ScenarioStatus::Failed(error.to_string()),
            duration,
        }
    }

    /// Creates a skipped report.
    #[must_use]
    pub fn skipped(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: ScenarioStatus::Skipped(reason.into()),
            duration: Duration::ZERO,
        }
    }

    /// Returns true if the scenario passed.
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self.status, ScenarioStatus::Passed)
    }

    /// Returns true if the scenario failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self.status, ScenarioStatus::Failed(_))
    }

    /// Returns true if the scenario was skipped.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self.status, ScenarioStatus::Skipped(_))
    }
}

impl fmt::Display for ScenarioReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.status {
            ScenarioStatus::Passed => {
                write!(f, "PASS {} ({} ms)", self.name, self.duration.as_millis())
            }
            ScenarioStatus::Failed(error) => write!(
                f,
                "FAIL {} ({} ms): {}",
                self.name,
                self.duration.as_millis(),
                error
            ),
            ScenarioStatus::Skipped(reason) => write!(f, "SKIP {}: {}", self.name, reason),
        }
    }
}

/// Aggregate results from a full suite run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteReport {
    /// Individual scenario reports, in declaration order.
    pub scenarios: Vec<ScenarioReport>,
    /// Number of passed scenarios.
    pub passed: usize,
    /// Number of failed scenarios.
    pub failed: usize,
    /// Number of skipped scenarios.
    pub skipped: usize,
}

impl SuiteReport {
    /// Builds a report from scenario results, computing the counts.
    #[must_use]
    pub fn new(scenarios: Vec<ScenarioReport>) -> Self {
        let passed = scenarios.iter().filter(|s| s.is_passed()).count();
        let failed = scenarios.iter().filter(|s| s.is_failed()).count();
        let skipped = scenarios.iter().filter(|s| s.is_skipped()).count();

        Self {
            scenarios,
            passed,
            failed,
            skipped,
        }
    }

    /// Returns true if no scenario failed or was skipped.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0 && self.skipped == 0
    }
}
