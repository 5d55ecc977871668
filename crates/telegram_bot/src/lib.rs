//! Telegram bot.
//!
//! The bot is a thin surface: parsing and all financial logic live in
//! `engine`; handlers only shuttle command text in and render replies out.

use std::{str::FromStr, sync::Arc};

use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;
use engine::{ChartRenderer, Engine};
use teloxide::prelude::*;

mod charts;
mod commands;
mod handlers;
mod ui;

pub use charts::SvgPieChart;

/// Timezone applied when the settings do not name one. Period ranges are
/// computed on this local calendar.
const DEFAULT_TIMEZONE: Tz = chrono_tz::Asia::Kolkata;

#[derive(Clone)]
pub struct ConfigParameters {
    engine: Arc<Engine>,
    charts: Arc<dyn ChartRenderer + Send + Sync>,
    timezone: Tz,
}

impl ConfigParameters {
    /// The current wall-clock instant on the configured calendar.
    fn now_local(&self) -> NaiveDateTime {
        Utc::now().with_timezone(&self.timezone).naive_local()
    }
}

pub struct Bot {
    token: String,
    timezone: Tz,
    engine: Arc<Engine>,
}

impl Bot {
    pub fn builder() -> BotBuilder {
        BotBuilder::default()
    }

    pub async fn run(&self) {
        tracing::info!("Starting telegram bot...");

        let bot = teloxide::Bot::new(&self.token);
        let parameters = ConfigParameters {
            engine: self.engine.clone(),
            charts: Arc::new(SvgPieChart::default()),
            timezone: self.timezone,
        };

        let handler = dptree::entry()
            .branch(handlers::onboarding::schema())
            .branch(handlers::expenses::schema())
            .branch(handlers::budgets::schema())
            .branch(handlers::reports::schema())
            .branch(handlers::exports::schema());

        Dispatcher::builder(bot, handler)
            .dependencies(dptree::deps![parameters])
            .default_handler(|upd| async move {
                tracing::warn!("Unhandled update: {:?}", upd);
            })
            .error_handler(LoggingErrorHandler::with_custom_text(
                "An error has occurred in the dispatcher",
            ))
            .enable_ctrlc_handler()
            .build()
            .dispatch()
            .await;
    }
}

#[derive(Default, Debug)]
pub struct BotBuilder {
    token: String,
    timezone: Option<String>,
    engine: Option<Engine>,
}

impl BotBuilder {
    pub fn token(mut self, token: &str) -> BotBuilder {
        self.token = token.to_string();
        self
    }

    /// IANA timezone name for period resolution, e.g. `Asia/Kolkata`.
    pub fn timezone(mut self, timezone: &str) -> BotBuilder {
        if !timezone.trim().is_empty() {
            self.timezone = Some(timezone.trim().to_string());
        }
        self
    }

    pub fn engine(mut self, engine: Engine) -> BotBuilder {
        self.engine = Some(engine);
        self
    }

    pub fn build(self) -> Result<Bot, String> {
        tracing::info!("Initializing telegram bot...");

        let timezone = match self.timezone {
            Some(name) => {
                Tz::from_str(&name).map_err(|err| format!("invalid timezone {name:?}: {err}"))?
            }
            None => DEFAULT_TIMEZONE,
        };
        let engine = self.engine.ok_or_else(|| "missing engine".to_string())?;

        Ok(Bot {
            token: self.token,
            timezone,
            engine: Arc::new(engine),
        })
    }
}
