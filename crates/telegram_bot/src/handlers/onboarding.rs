//! Handlers for onboarding and settings commands.

use engine::{Currency, EngineError, ParseError, parse_currency};
use teloxide::{
    RequestError,
    dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler},
    prelude::*,
};

use crate::{ConfigParameters, commands::UserCommands, ui};

use super::sender_id;

/// Build the schema for `UserCommands` commands
pub fn schema() -> UpdateHandler<RequestError> {
    Update::filter_message()
        .filter_command::<UserCommands>()
        .endpoint(handle_user_commands)
}

async fn handle_user_commands(
    bot: Bot,
    cfg: ConfigParameters,
    msg: Message,
    cmd: UserCommands,
) -> ResponseResult<()> {
    let Some(user_id) = sender_id(&bot, &msg).await? else {
        return Ok(());
    };

    match cmd {
        UserCommands::Start => {
            let created = cfg
                .engine
                .ensure_user(user_id, Currency::default(), cfg.now_local())
                .await;
            match created {
                Ok(true) => {
                    bot.send_message(msg.chat.id, ui::welcome_new(Currency::default()))
                        .await?;
                }
                Ok(false) => {
                    let currency = match cfg.engine.user(user_id).await {
                        Ok(user) => user.currency,
                        Err(err) => {
                            tracing::warn!("user lookup failed: {err}");
                            Currency::default()
                        }
                    };
                    bot.send_message(msg.chat.id, ui::welcome_back(currency))
                        .await?;
                }
                Err(err) => {
                    tracing::warn!("user creation failed: {err}");
                    bot.send_message(msg.chat.id, ui::storage_trouble()).await?;
                }
            }
        }
        UserCommands::Help => {
            bot.send_message(msg.chat.id, ui::help_text()).await?;
        }
        UserCommands::SetCurrency { text } => {
            if text.trim().is_empty() {
                bot.send_message(msg.chat.id, ui::currency_usage()).await?;
                return Ok(());
            }

            let reply = match parse_currency(&text) {
                Ok(currency) => match cfg.engine.set_currency(user_id, currency).await {
                    Ok(()) => ui::currency_updated(currency),
                    Err(EngineError::NotFound(_)) => ui::start_first().to_string(),
                    Err(err) => {
                        tracing::warn!("currency update failed: {err}");
                        ui::storage_trouble().to_string()
                    }
                },
                Err(ParseError::UnsupportedCurrency(code)) => ui::unsupported_currency(&code),
                Err(_) => ui::currency_usage(),
            };
            bot.send_message(msg.chat.id, reply).await?;
        }
    }

    Ok(())
}
