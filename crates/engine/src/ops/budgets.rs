//! Budget operations.

use chrono::NaiveDateTime;
use sea_orm::{
    ActiveValue, QueryFilter, QueryOrder, QuerySelect, prelude::*, sea_query::OnConflict,
};

use crate::{
    BudgetStatus, Category, EngineError, Money, Period, PeriodRange, ResultEngine, budgets,
    transactions,
};

use super::Engine;

/// One budget with its current-month consumption.
#[derive(Clone, Debug, PartialEq)]
pub struct BudgetProgress {
    pub category: String,
    pub limit: Money,
    pub spent: Money,
    pub status: BudgetStatus,
}

impl Engine {
    /// Sets or replaces the monthly limit for (user, category).
    pub async fn set_budget(
        &self,
        user_id: i64,
        category: &Category,
        amount: Money,
    ) -> ResultEngine<()> {
        if !amount.is_positive() {
            return Err(EngineError::InvalidAmount(
                "budget limit must be > 0".to_string(),
            ));
        }

        let row = budgets::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            category: ActiveValue::Set(category.as_str().to_string()),
            amount_cents: ActiveValue::Set(amount.cents()),
            ..Default::default()
        };
        budgets::Entity::insert(row)
            .on_conflict(
                OnConflict::columns([budgets::Column::UserId, budgets::Column::Category])
                    .update_column(budgets::Column::AmountCents)
                    .to_owned(),
            )
            .exec(&self.database)
            .await?;
        Ok(())
    }

    /// All budgets of the user as (category, limit), ordered by category.
    pub async fn list_budgets(&self, user_id: i64) -> ResultEngine<Vec<(String, Money)>> {
        let rows = budgets::Entity::find()
            .filter(budgets::Column::UserId.eq(user_id))
            .order_by_asc(budgets::Column::Category)
            .all(&self.database)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| (row.category, Money::new(row.amount_cents)))
            .collect())
    }

    /// The monthly limit for one category, if set.
    pub async fn budget_for(&self, user_id: i64, category: &str) -> ResultEngine<Option<Money>> {
        let row = budgets::Entity::find()
            .filter(budgets::Column::UserId.eq(user_id))
            .filter(budgets::Column::Category.eq(category))
            .one(&self.database)
            .await?;

        Ok(row.map(|b| Money::new(b.amount_cents)))
    }

    /// Spend of one category inside `range`, bounds inclusive.
    pub async fn category_spend(
        &self,
        user_id: i64,
        category: &str,
        range: &PeriodRange,
    ) -> ResultEngine<Money> {
        let total: Option<Option<i64>> = transactions::Entity::find()
            .select_only()
            .column_as(transactions::Column::AmountCents.sum(), "total")
            .filter(transactions::Column::UserId.eq(user_id))
            .filter(transactions::Column::Category.eq(category))
            .filter(transactions::Column::OccurredAt.between(range.start, range.end))
            .into_tuple()
            .one(&self.database)
            .await?;

        Ok(Money::new(total.flatten().unwrap_or(0)))
    }

    /// Every budget with its consumption over the month containing `now`.
    ///
    /// Shares the month-range semantics of the summary path, December
    /// rollover included.
    pub async fn budget_overview(
        &self,
        user_id: i64,
        now: NaiveDateTime,
    ) -> ResultEngine<Vec<BudgetProgress>> {
        let range = Period::Month.resolve(now);
        let budgets = self.list_budgets(user_id).await?;

        let mut overview = Vec::with_capacity(budgets.len());
        for (category, limit) in budgets {
            let spent = self.category_spend(user_id, &category, &range).await?;
            overview.push(BudgetProgress {
                status: BudgetStatus::evaluate(spent, limit),
                category,
                limit,
                spent,
            });
        }
        Ok(overview)
    }
}
