//! Command handlers, one module per concern.
//!
//! Every module exposes a `schema()` that filters its own command group;
//! `lib.rs` branches them together. Shared helpers live here.

use engine::{EngineError, User};
use teloxide::prelude::*;

use crate::{ConfigParameters, ui};

pub(crate) mod budgets;
pub(crate) mod exports;
pub(crate) mod expenses;
pub(crate) mod onboarding;
pub(crate) mod reports;

/// Extracts the numeric sender id, replying when the update carries none.
async fn sender_id(bot: &Bot, msg: &Message) -> ResponseResult<Option<i64>> {
    match msg.from.as_ref() {
        Some(user) => Ok(Some(user.id.0 as i64)),
        None => {
            bot.send_message(msg.chat.id, "Could not identify the sender.")
                .await?;
            Ok(None)
        }
    }
}

/// Loads the user row, or asks the sender to /start first.
async fn require_user(
    bot: &Bot,
    msg: &Message,
    cfg: &ConfigParameters,
    user_id: i64,
) -> ResponseResult<Option<User>> {
    match cfg.engine.user(user_id).await {
        Ok(user) => Ok(Some(user)),
        Err(EngineError::NotFound(_)) => {
            bot.send_message(msg.chat.id, ui::start_first()).await?;
            Ok(None)
        }
        Err(err) => {
            tracing::warn!("user lookup failed: {err}");
            bot.send_message(msg.chat.id, ui::storage_trouble()).await?;
            Ok(None)
        }
    }
}
