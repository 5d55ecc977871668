//! Expense write/read operations.

use chrono::NaiveDateTime;
use sea_orm::{ActiveValue, QueryFilter, QueryOrder, QuerySelect, prelude::*};

use crate::{
    EngineError, Expense, ResultEngine, transactions, transactions::Transaction,
};

use super::Engine;

impl Engine {
    /// Records an expense and returns the new transaction id.
    ///
    /// The amount invariant is re-checked here so the store can never hold a
    /// non-positive amount, whatever path produced the [`Expense`].
    pub async fn log_expense(
        &self,
        user_id: i64,
        expense: &Expense,
        occurred_at: NaiveDateTime,
    ) -> ResultEngine<i64> {
        if !expense.amount.is_positive() {
            return Err(EngineError::InvalidAmount(
                "amount must be > 0".to_string(),
            ));
        }

        let row = transactions::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            amount_cents: ActiveValue::Set(expense.amount.cents()),
            category: ActiveValue::Set(expense.category.as_str().to_string()),
            description: ActiveValue::Set(expense.description.clone()),
            occurred_at: ActiveValue::Set(occurred_at),
            ..Default::default()
        };
        let inserted = row.insert(&self.database).await?;
        Ok(inserted.id)
    }

    /// Deletes a transaction owned by `user_id`.
    ///
    /// The owner filter is part of the statement, so a foreign id leaves the
    /// store untouched and reports not-found exactly like a missing one.
    pub async fn delete_transaction(&self, user_id: i64, transaction_id: i64) -> ResultEngine<()> {
        let result = transactions::Entity::delete_many()
            .filter(transactions::Column::Id.eq(transaction_id))
            .filter(transactions::Column::UserId.eq(user_id))
            .exec(&self.database)
            .await?;

        if result.rows_affected == 0 {
            return Err(EngineError::NotFound(format!(
                "transaction {transaction_id}"
            )));
        }
        Ok(())
    }

    /// Lists the user's transactions, most recent first.
    pub async fn list_transactions(
        &self,
        user_id: i64,
        limit: u64,
    ) -> ResultEngine<Vec<Transaction>> {
        let rows = transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id))
            .order_by_desc(transactions::Column::OccurredAt)
            .order_by_desc(transactions::Column::Id)
            .limit(limit)
            .all(&self.database)
            .await?;

        Ok(rows.into_iter().map(Transaction::from).collect())
    }

    /// Every transaction of the user, oldest first, for exports.
    pub async fn export_transactions(&self, user_id: i64) -> ResultEngine<Vec<Transaction>> {
        let rows = transactions::Entity::find()
            .filter(transactions::Column::UserId.eq(user_id))
            .order_by_asc(transactions::Column::OccurredAt)
            .order_by_asc(transactions::Column::Id)
            .all(&self.database)
            .await?;

        Ok(rows.into_iter().map(Transaction::from).collect())
    }
}
