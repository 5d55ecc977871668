//! Period summaries.

use chrono::NaiveDateTime;
use sea_orm::{QueryFilter, QueryOrder, prelude::*};

use crate::{
    Breakdown, Money, Period, PeriodRange, ResultEngine, SpendRow, aggregate, transactions,
};

use super::Engine;

impl Engine {
    /// Aggregates the user's spending over the period containing `now`.
    ///
    /// `None` in the breakdown slot is the "no data" state: nothing was spent
    /// in the range, and callers must answer with a "no expenses" message
    /// rather than an empty chart.
    pub async fn spending_summary(
        &self,
        user_id: i64,
        period: Period,
        now: NaiveDateTime,
    ) -> ResultEngine<(PeriodRange, Option<Breakdown>)> {
        let range = period.resolve(now);

        // Insertion order keyed by occurrence keeps the aggregation's
        // first-seen tie-breaking deterministic across runs.
        let rows = transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id))
            .filter(transactions::Column::OccurredAt.between(range.start, range.end))
            .order_by_asc(transactions::Column::OccurredAt)
            .order_by_asc(transactions::Column::Id)
            .all(&self.database)
            .await?;

        let spend = rows.into_iter().map(|row| SpendRow {
            category: row.category,
            amount: Money::new(row.amount_cents),
            occurred_at: row.occurred_at,
        });

        let breakdown = aggregate(spend, &range);
        Ok((range, breakdown))
    }
}
