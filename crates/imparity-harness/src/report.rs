//! Run summaries

use crate::{CaseOutcome, TestStatus};

/// Aggregated outcome of one runner invocation
#[derive(Clone, Debug, Default)]
pub struct Summary {
    outcomes: Vec<CaseOutcome>,
}

impl Summary {
    pub(crate) fn new(outcomes: Vec<CaseOutcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[CaseOutcome] {
        &self.outcomes
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passes(&self) -> usize {
        self.count(TestStatus::Pass)
    }

    pub fn fails(&self) -> usize {
        self.count(TestStatus::Fail)
    }

    pub fn errors(&self) -> usize {
        self.count(TestStatus::Error)
    }

    pub fn all_passed(&self) -> bool {
        self.passes() == self.total()
    }

    /// Print the summary block
    pub fn print(&self) {
        let total = self.total();
        println!("Summary:");
        println!("    Passes: {}/{}", self.passes(), total);
        println!("    Fails:  {}/{}", self.fails(), total);
        println!("    Errors: {}/{}", self.errors(), total);
    }

    fn count(&self, status: TestStatus) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status == status)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(status: TestStatus) -> CaseOutcome {
        CaseOutcome {
            name: "case".to_string(),
            status,
            message: None,
        }
    }

    #[test]
    fn test_summary_counts() {
        let summary = Summary::new(vec![
            outcome(TestStatus::Pass),
            outcome(TestStatus::Pass),
            outcome(TestStatus::Fail),
            outcome(TestStatus::Error),
        ]);
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.passes(), 2);
        assert_eq!(summary.fails(), 1);
        assert_eq!(summary.errors(), 1);
        assert!(!summary.all_passed());
    }

    #[test]
    fn test_empty_summary_counts_as_passed() {
        let summary = Summary::new(Vec::new());
        assert!(summary.all_passed());
    }
}
