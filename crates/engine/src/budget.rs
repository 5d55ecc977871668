//! Budget consumption evaluation.
//!
//! Both the post-log alert and the budget overview derive their severity from
//! this single evaluator, so the thresholds cannot drift apart between call
//! sites.

use crate::Money;

/// Discrete alert severity derived from spend/limit percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum BudgetTier {
    Ok,
    Caution,
    Warning,
    Exceeded,
}

impl BudgetTier {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            BudgetTier::Ok => "ok",
            BudgetTier::Caution => "caution",
            BudgetTier::Warning => "warning",
            BudgetTier::Exceeded => "exceeded",
        }
    }
}

/// Utilization of a single budget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BudgetStatus {
    pub percentage: f64,
    pub tier: BudgetTier,
}

impl BudgetStatus {
    /// Evaluates current spending against a monthly limit.
    ///
    /// The percentage is defined as `0` for a non-positive limit: limits are
    /// invariant-positive at creation, but the evaluator must not divide by
    /// zero on corrupted data.
    #[must_use]
    pub fn evaluate(spent: Money, limit: Money) -> BudgetStatus {
        let percentage = if limit.is_positive() {
            spent.cents() as f64 / limit.cents() as f64 * 100.0
        } else {
            0.0
        };

        let tier = if percentage >= 100.0 {
            BudgetTier::Exceeded
        } else if percentage >= 80.0 {
            BudgetTier::Warning
        } else if percentage >= 50.0 {
            BudgetTier::Caution
        } else {
            BudgetTier::Ok
        };

        BudgetStatus { percentage, tier }
    }
}
