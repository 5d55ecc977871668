//! Handlers for budget commands.

use engine::parse_budget;
use teloxide::{
    RequestError,
    dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler},
    prelude::*,
};

use crate::{ConfigParameters, commands::BudgetCommands, ui};

use super::{require_user, sender_id};

/// Build the schema for `BudgetCommands` commands
pub fn schema() -> UpdateHandler<RequestError> {
    Update::filter_message()
        .filter_command::<BudgetCommands>()
        .endpoint(handle_budget_commands)
}

async fn handle_budget_commands(
    bot: Bot,
    cfg: ConfigParameters,
    msg: Message,
    cmd: BudgetCommands,
) -> ResponseResult<()> {
    let Some(user_id) = sender_id(&bot, &msg).await? else {
        return Ok(());
    };
    let Some(user) = require_user(&bot, &msg, &cfg, user_id).await? else {
        return Ok(());
    };

    match cmd {
        BudgetCommands::Budget { text } => {
            let reply = match parse_budget(&text) {
                Ok(budget) => {
                    match cfg
                        .engine
                        .set_budget(user.user_id, &budget.category, budget.amount)
                        .await
                    {
                        Ok(()) => ui::budget_set(
                            budget.category.as_str(),
                            &budget.amount.format(user.currency),
                        ),
                        Err(err) => {
                            tracing::warn!("budget upsert failed: {err}");
                            ui::storage_trouble().to_string()
                        }
                    }
                }
                Err(err) => ui::budget_error(&err),
            };
            bot.send_message(msg.chat.id, reply).await?;
        }
        BudgetCommands::ViewBudgets => {
            let reply = match cfg.engine.budget_overview(user.user_id, cfg.now_local()).await {
                Ok(overview) if overview.is_empty() => ui::no_budgets().to_string(),
                Ok(overview) => ui::budget_overview(&overview, user.currency),
                Err(err) => {
                    tracing::warn!("budget overview failed: {err}");
                    ui::storage_trouble().to_string()
                }
            };
            bot.send_message(msg.chat.id, reply).await?;
        }
    }

    Ok(())
}
