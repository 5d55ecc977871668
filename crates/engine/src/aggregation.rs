//! Period-bucketed category aggregation.
//!
//! Pure: rows in, [`Breakdown`] out. Filtering honors the inclusive bounds of
//! [`PeriodRange`]; grouping preserves first-seen order so the final
//! amount-descending sort is deterministic under equal amounts.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use crate::{Money, PeriodRange};

/// One spending row, as stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpendRow {
    pub category: String,
    pub amount: Money,
    pub occurred_at: NaiveDateTime,
}

/// Aggregated spend for one category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: Money,
}

/// Per-category totals for a period, ordered by amount descending.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Breakdown {
    total: Money,
    entries: Vec<CategoryTotal>,
}

impl Breakdown {
    /// Sum of every included amount, exact in cents.
    #[must_use]
    pub fn total(&self) -> Money {
        self.total
    }

    #[must_use]
    pub fn entries(&self) -> &[CategoryTotal] {
        &self.entries
    }

    /// Share of the total for one entry, in percent. Rounding to one decimal
    /// happens at render time, not here.
    #[must_use]
    pub fn percentage(&self, entry: &CategoryTotal) -> f64 {
        entry.amount.cents() as f64 / self.total.cents() as f64 * 100.0
    }
}

/// Filters `rows` to `range`, groups by category and sums amounts.
///
/// Returns `None` when nothing falls inside the range: the "no data" state
/// callers must render as a "no expenses" message instead of an empty chart.
#[must_use]
pub fn aggregate<I>(rows: I, range: &PeriodRange) -> Option<Breakdown>
where
    I: IntoIterator<Item = SpendRow>,
{
    let mut entries: Vec<CategoryTotal> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut total = Money::ZERO;

    for row in rows {
        if !range.contains(row.occurred_at) {
            continue;
        }
        total += row.amount;
        match index.get(&row.category) {
            Some(&slot) => entries[slot].amount += row.amount,
            None => {
                index.insert(row.category.clone(), entries.len());
                entries.push(CategoryTotal {
                    category: row.category,
                    amount: row.amount,
                });
            }
        }
    }

    if !total.is_positive() {
        return None;
    }

    // Vec::sort_by is stable: equal amounts keep first-seen order.
    entries.sort_by(|a, b| b.amount.cmp(&a.amount));

    Some(Breakdown { total, entries })
}
