//! Handlers for expense logging and history commands.

use engine::{
    BudgetStatus, EngineError, Period, User, parse_expense, parse_history_limit,
    parse_transaction_id,
};
use teloxide::{
    RequestError,
    dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler},
    prelude::*,
};

use crate::{ConfigParameters, commands::ExpenseCommands, ui};

use super::{require_user, sender_id};

/// Build the schema for `ExpenseCommands` commands
pub fn schema() -> UpdateHandler<RequestError> {
    Update::filter_message()
        .filter_command::<ExpenseCommands>()
        .endpoint(handle_expense_commands)
}

async fn handle_expense_commands(
    bot: Bot,
    cfg: ConfigParameters,
    msg: Message,
    cmd: ExpenseCommands,
) -> ResponseResult<()> {
    let Some(user_id) = sender_id(&bot, &msg).await? else {
        return Ok(());
    };
    let Some(user) = require_user(&bot, &msg, &cfg, user_id).await? else {
        return Ok(());
    };

    match cmd {
        ExpenseCommands::Log { text } | ExpenseCommands::Spent { text } => {
            handle_log(&bot, &cfg, &msg, &user, &text).await?;
        }
        ExpenseCommands::Delete { text } => {
            let reply = match parse_transaction_id(&text) {
                Ok(id) => match cfg.engine.delete_transaction(user.user_id, id).await {
                    Ok(()) => ui::deleted(id),
                    Err(EngineError::NotFound(_)) => ui::delete_not_found(id),
                    Err(err) => {
                        tracing::warn!("delete failed: {err}");
                        ui::storage_trouble().to_string()
                    }
                },
                Err(err) => ui::delete_error(&err),
            };
            bot.send_message(msg.chat.id, reply).await?;
        }
        ExpenseCommands::ListHistory { text } => {
            let limit = match parse_history_limit(&text) {
                Ok(limit) => limit,
                Err(_) => {
                    bot.send_message(msg.chat.id, ui::history_error()).await?;
                    return Ok(());
                }
            };

            let reply = match cfg.engine.list_transactions(user.user_id, limit).await {
                Ok(transactions) if transactions.is_empty() => ui::no_transactions().to_string(),
                Ok(transactions) => ui::history(&transactions, user.currency),
                Err(err) => {
                    tracing::warn!("history lookup failed: {err}");
                    ui::storage_trouble().to_string()
                }
            };
            bot.send_message(msg.chat.id, reply).await?;
        }
    }

    Ok(())
}

async fn handle_log(
    bot: &Bot,
    cfg: &ConfigParameters,
    msg: &Message,
    user: &User,
    text: &str,
) -> ResponseResult<()> {
    let expense = match parse_expense(text) {
        Ok(expense) => expense,
        Err(err) => {
            bot.send_message(msg.chat.id, ui::expense_error(&err)).await?;
            return Ok(());
        }
    };

    let now = cfg.now_local();
    if let Err(err) = cfg.engine.log_expense(user.user_id, &expense, now).await {
        tracing::warn!("expense insert failed: {err}");
        bot.send_message(msg.chat.id, ui::storage_trouble()).await?;
        return Ok(());
    }

    // The expense is saved at this point; a failed budget lookup only loses
    // the alert line, it must not fail the confirmation.
    let status = match budget_status(cfg, user.user_id, expense.category.as_str(), now).await {
        Ok(status) => status,
        Err(err) => {
            tracing::warn!("budget check failed: {err}");
            None
        }
    };

    let reply = ui::log_confirmation(
        &expense.amount.format(user.currency),
        expense.category.as_str(),
        expense.description.as_deref(),
        status.as_ref(),
    );
    bot.send_message(msg.chat.id, reply).await?;
    Ok(())
}

/// Current-month consumption for the logged category, if it has a budget.
async fn budget_status(
    cfg: &ConfigParameters,
    user_id: i64,
    category: &str,
    now: chrono::NaiveDateTime,
) -> Result<Option<BudgetStatus>, EngineError> {
    let Some(limit) = cfg.engine.budget_for(user_id, category).await? else {
        return Ok(None);
    };
    let range = Period::Month.resolve(now);
    let spent = cfg.engine.category_spend(user_id, category, &range).await?;
    Ok(Some(BudgetStatus::evaluate(spent, limit)))
}
