//! User lifecycle operations.

use chrono::NaiveDateTime;
use sea_orm::{ActiveValue, QueryFilter, prelude::*, sea_query::Expr};

use crate::{Currency, EngineError, ResultEngine, users, users::User};

use super::Engine;

impl Engine {
    /// Fetches a user, or [`EngineError::NotFound`] if they never started.
    pub async fn user(&self, user_id: i64) -> ResultEngine<User> {
        users::Entity::find_by_id(user_id)
            .one(&self.database)
            .await?
            .map(User::from)
            .ok_or_else(|| EngineError::NotFound(format!("user {user_id}")))
    }

    /// Creates the user on first contact. Returns `true` when the row was
    /// newly created, `false` when the user already existed.
    pub async fn ensure_user(
        &self,
        user_id: i64,
        currency: Currency,
        created_at: NaiveDateTime,
    ) -> ResultEngine<bool> {
        if users::Entity::find_by_id(user_id)
            .one(&self.database)
            .await?
            .is_some()
        {
            return Ok(false);
        }

        let user = users::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            currency: ActiveValue::Set(currency.code().to_string()),
            created_at: ActiveValue::Set(created_at),
        };
        user.insert(&self.database).await?;
        Ok(true)
    }

    /// Updates the preferred currency of an existing user.
    pub async fn set_currency(&self, user_id: i64, currency: Currency) -> ResultEngine<()> {
        let result = users::Entity::update_many()
            .col_expr(users::Column::Currency, Expr::value(currency.code()))
            .filter(users::Column::UserId.eq(user_id))
            .exec(&self.database)
            .await?;

        if result.rows_affected == 0 {
            return Err(EngineError::NotFound(format!("user {user_id}")));
        }
        Ok(())
    }
}
