//! imparity-harness - Fixture-test runner for figure comparisons
//!
//! Registers named comparison cases, runs them sequentially, and classifies
//! every outcome so a broken comparison is never mistaken for a legitimate
//! mismatch:
//!
//! - **PASS**: the case behaved as declared (similar, or a mismatch where
//!   one was expected)
//! - **FAIL**: a similarity assertion went the wrong way
//! - **ERROR**: the comparison itself crashed (malformed snapshot, capture
//!   residue), kept apart from FAIL so fixture bugs stand out
//!
//! # Example
//!
//! ```
//! use imparity_core::{assert_similar_figures, Canvas};
//! use imparity_harness::FixtureRunner;
//!
//! let summary = FixtureRunner::new()
//!     .case("empty figures match", || {
//!         let a = Canvas::new();
//!         let b = Canvas::new();
//!         assert_similar_figures(&a.snapshot()?, &b.snapshot()?, None)
//!     })
//!     .run();
//! assert!(summary.all_passed());
//! ```

use std::fmt;

use crossterm::style::Stylize;

use imparity_core::ImparityResult;

pub mod report;

pub use report::Summary;

/// Outcome classification of one fixture case
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestStatus {
    Pass,
    Fail,
    Error,
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestStatus::Pass => write!(f, "{}", "PASS".green()),
            TestStatus::Fail => write!(f, "{}", "FAIL".red()),
            TestStatus::Error => write!(f, "{}", "ERROR".yellow()),
        }
    }
}

/// Result of one fixture case
#[derive(Clone, Debug)]
pub struct CaseOutcome {
    pub name: String,
    pub status: TestStatus,
    pub message: Option<String>,
}

type CaseFn = Box<dyn Fn() -> ImparityResult<()>>;

struct FixtureCase {
    name: String,
    expect_mismatch: bool,
    run: CaseFn,
}

/// Sequential runner for figure-comparison fixture cases
#[derive(Default)]
pub struct FixtureRunner {
    cases: Vec<FixtureCase>,
}

impl FixtureRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a case expected to compare similar
    pub fn case(
        mut self,
        name: impl Into<String>,
        run: impl Fn() -> ImparityResult<()> + 'static,
    ) -> Self {
        self.cases.push(FixtureCase {
            name: name.into(),
            expect_mismatch: false,
            run: Box::new(run),
        });
        self
    }

    /// Register a case expected to end in a similarity mismatch
    pub fn case_expecting_mismatch(
        mut self,
        name: impl Into<String>,
        run: impl Fn() -> ImparityResult<()> + 'static,
    ) -> Self {
        self.cases.push(FixtureCase {
            name: name.into(),
            expect_mismatch: true,
            run: Box::new(run),
        });
        self
    }

    /// Run every case in registration order, printing a styled report line
    /// per case and a summary block at the end.
    pub fn run(&self) -> Summary {
        println!("Running {} cases", self.cases.len());
        println!();

        let mut outcomes = Vec::with_capacity(self.cases.len());
        for case in &self.cases {
            let outcome = run_case(case);
            tracing::debug!(
                case = %outcome.name,
                status = ?outcome.status,
                "fixture case finished"
            );
            print_outcome(&outcome);
            outcomes.push(outcome);
        }

        let summary = Summary::new(outcomes);
        println!();
        summary.print();
        summary
    }
}

fn run_case(case: &FixtureCase) -> CaseOutcome {
    let (status, message) = match (case.run)() {
        Ok(()) => {
            if case.expect_mismatch {
                (
                    TestStatus::Fail,
                    Some("expected a mismatch, but the figures compared similar".to_string()),
                )
            } else {
                (TestStatus::Pass, None)
            }
        }
        Err(error) if error.is_mismatch() => {
            if case.expect_mismatch {
                (TestStatus::Pass, None)
            } else {
                (TestStatus::Fail, Some(error.to_string()))
            }
        }
        // A crash is never a legitimate mismatch, whatever was expected
        Err(error) => (TestStatus::Error, Some(error.to_string())),
    };

    CaseOutcome {
        name: case.name.clone(),
        status,
        message,
    }
}

fn print_outcome(outcome: &CaseOutcome) {
    match &outcome.message {
        Some(message) => println!("{}: {}. {message}", outcome.name, outcome.status),
        None => println!("{}: {}.", outcome.name, outcome.status),
    }
}

/// Install the default log subscriber; respects `RUST_LOG`.
pub fn init_logging() {
    tracing_subscriber::fmt::init();
}
