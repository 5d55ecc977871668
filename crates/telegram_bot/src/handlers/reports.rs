//! Handler for the summary report.

use engine::{chart_slices, compose_summary, parse_period};
use teloxide::{
    RequestError,
    dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler},
    prelude::*,
    types::InputFile,
};

use crate::{ConfigParameters, commands::ReportCommands, ui};

use super::{require_user, sender_id};

/// Build the schema for `ReportCommands` commands
pub fn schema() -> UpdateHandler<RequestError> {
    Update::filter_message()
        .filter_command::<ReportCommands>()
        .endpoint(handle_report_commands)
}

async fn handle_report_commands(
    bot: Bot,
    cfg: ConfigParameters,
    msg: Message,
    cmd: ReportCommands,
) -> ResponseResult<()> {
    let Some(user_id) = sender_id(&bot, &msg).await? else {
        return Ok(());
    };
    let Some(user) = require_user(&bot, &msg, &cfg, user_id).await? else {
        return Ok(());
    };

    let ReportCommands::Summary { text } = cmd;
    let Ok(period) = parse_period(&text) else {
        bot.send_message(msg.chat.id, ui::period_error()).await?;
        return Ok(());
    };

    let (range, breakdown) = match cfg
        .engine
        .spending_summary(user.user_id, period, cfg.now_local())
        .await
    {
        Ok(summary) => summary,
        Err(err) => {
            tracing::warn!("summary failed: {err}");
            bot.send_message(msg.chat.id, ui::storage_trouble()).await?;
            return Ok(());
        }
    };

    let Some(breakdown) = breakdown else {
        bot.send_message(msg.chat.id, ui::no_expenses(range.label))
            .await?;
        return Ok(());
    };

    bot.send_message(msg.chat.id, compose_summary(&range, &breakdown, user.currency))
        .await?;

    // Chart failures degrade to the text summary already sent.
    match cfg.charts.render(&chart_slices(&breakdown), user.currency) {
        Ok(bytes) => {
            bot.send_document(
                msg.chat.id,
                InputFile::memory(bytes).file_name("spending.svg"),
            )
            .caption(ui::chart_caption(range.label))
            .await?;
        }
        Err(err) => {
            tracing::warn!("chart rendering failed: {err}");
        }
    }

    Ok(())
}
