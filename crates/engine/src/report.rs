//! Summary report composition and the chart-renderer contract.

use thiserror::Error;

use crate::{Breakdown, Currency, Money, PeriodRange};

/// Chart rendering failed. The summary degrades to text-only; this error is
/// never surfaced to the user as a failed operation.
#[derive(Debug, Error)]
#[error("chart rendering failed: {0}")]
pub struct RenderError(pub String);

/// External chart renderer contract.
///
/// Pure data in, opaque image bytes out. An empty slice must still produce a
/// valid "no data" placeholder image, not an error.
pub trait ChartRenderer {
    fn render(&self, slices: &[(String, Money)], currency: Currency) -> Result<Vec<u8>, RenderError>;
}

/// Builds the textual spending summary: a total line and one line per
/// category with the formatted amount and its share, one decimal.
#[must_use]
pub fn compose_summary(range: &PeriodRange, breakdown: &Breakdown, currency: Currency) -> String {
    let mut text = format!(
        "Spending summary - {label}\nTotal spent: {total}\n",
        label = range.label,
        total = breakdown.total().format(currency)
    );
    for entry in breakdown.entries() {
        text.push_str(&format!(
            "\n{category}: {amount} ({share:.1}%)",
            category = entry.category,
            amount = entry.amount.format(currency),
            share = breakdown.percentage(entry)
        ));
    }
    text
}

/// The category→amount mapping handed to the chart renderer, in breakdown
/// order.
#[must_use]
pub fn chart_slices(breakdown: &Breakdown) -> Vec<(String, Money)> {
    breakdown
        .entries()
        .iter()
        .map(|entry| (entry.category.clone(), entry.amount))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{Period, SpendRow, aggregate};

    fn breakdown() -> (PeriodRange, Breakdown) {
        let now = NaiveDate::from_ymd_opt(2026, 8, 7)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let range = Period::Month.resolve(now);
        let rows = vec![
            SpendRow {
                category: "#food".to_string(),
                amount: Money::new(80_000),
                occurred_at: now,
            },
            SpendRow {
                category: "#transport".to_string(),
                amount: Money::new(43_400),
                occurred_at: now,
            },
        ];
        let breakdown = aggregate(rows, &range).unwrap();
        (range, breakdown)
    }

    #[test]
    fn summary_lists_total_then_categories() {
        let (range, breakdown) = breakdown();
        let text = compose_summary(&range, &breakdown, Currency::Inr);
        assert!(text.starts_with("Spending summary - This Month\nTotal spent: ₹1234.00\n"));
        assert!(text.contains("#food: ₹800.00 (64.8%)"));
        assert!(text.contains("#transport: ₹434.00 (35.2%)"));
    }

    #[test]
    fn chart_slices_follow_breakdown_order() {
        let (_, breakdown) = breakdown();
        let slices = chart_slices(&breakdown);
        assert_eq!(slices[0].0, "#food");
        assert_eq!(slices[1].0, "#transport");
        assert_eq!(slices[0].1, Money::new(80_000));
    }
}
