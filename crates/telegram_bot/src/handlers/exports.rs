//! Handler for commands that export data

use csv::Writer;
use engine::Transaction;
use serde::Serialize;
use teloxide::{
    RequestError,
    dispatching::{HandlerExt, UpdateFilterExt, UpdateHandler},
    prelude::*,
    types::InputFile,
};

use crate::{ConfigParameters, commands::ExportCommands, ui};

use super::{require_user, sender_id};

/// Build the schema for `ExportCommands` commands
pub fn schema() -> UpdateHandler<RequestError> {
    Update::filter_message()
        .filter_command::<ExportCommands>()
        .endpoint(handle_exports)
}

#[derive(Serialize)]
struct ExportRow<'a> {
    id: i64,
    occurred_at: String,
    amount: String,
    currency: &'static str,
    category: &'a str,
    description: &'a str,
}

async fn handle_exports(
    bot: Bot,
    cfg: ConfigParameters,
    msg: Message,
    cmd: ExportCommands,
) -> ResponseResult<()> {
    let Some(user_id) = sender_id(&bot, &msg).await? else {
        return Ok(());
    };
    let Some(user) = require_user(&bot, &msg, &cfg, user_id).await? else {
        return Ok(());
    };

    let ExportCommands::Export = cmd;

    let transactions = match cfg.engine.export_transactions(user.user_id).await {
        Ok(transactions) => transactions,
        Err(err) => {
            tracing::warn!("export query failed: {err}");
            bot.send_message(msg.chat.id, ui::storage_trouble()).await?;
            return Ok(());
        }
    };

    if transactions.is_empty() {
        bot.send_message(msg.chat.id, ui::nothing_to_export()).await?;
        return Ok(());
    }

    let bytes = match write_csv(&transactions, user.currency.code()) {
        Ok(bytes) => bytes,
        Err(err) => {
            tracing::warn!("export serialization failed: {err}");
            bot.send_message(msg.chat.id, ui::storage_trouble()).await?;
            return Ok(());
        }
    };

    bot.send_document(
        msg.chat.id,
        InputFile::memory(bytes).file_name("expenses.csv"),
    )
    .await?;

    Ok(())
}

fn write_csv(transactions: &[Transaction], currency: &'static str) -> Result<Vec<u8>, String> {
    let mut writer = Writer::from_writer(Vec::new());
    for tx in transactions {
        writer
            .serialize(ExportRow {
                id: tx.id,
                occurred_at: tx.occurred_at.format("%Y-%m-%d %H:%M:%S").to_string(),
                amount: tx.amount.to_string(),
                currency,
                category: &tx.category,
                description: tx.description.as_deref().unwrap_or(""),
            })
            .map_err(|err| err.to_string())?;
    }
    writer.into_inner().map_err(|err| err.to_string())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use engine::Money;

    use super::*;

    #[test]
    fn csv_has_one_row_per_transaction_with_headers() {
        let rows = vec![
            Transaction {
                id: 1,
                amount: Money::new(15_000),
                category: "#food".to_string(),
                description: Some("lunch".to_string()),
                occurred_at: NaiveDate::from_ymd_opt(2026, 8, 5)
                    .unwrap()
                    .and_hms_opt(12, 30, 0)
                    .unwrap(),
            },
            Transaction {
                id: 2,
                amount: Money::new(2_500),
                category: "#coffee".to_string(),
                description: None,
                occurred_at: NaiveDate::from_ymd_opt(2026, 8, 6)
                    .unwrap()
                    .and_hms_opt(9, 0, 0)
                    .unwrap(),
            },
        ];

        let bytes = write_csv(&rows, "INR").unwrap();
        let text = String::from_utf8(bytes).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "id,occurred_at,amount,currency,category,description");
        assert_eq!(lines[1], "1,2026-08-05 12:30:00,150.00,INR,#food,lunch");
        assert_eq!(lines[2], "2,2026-08-06 09:00:00,25.00,INR,#coffee,");
    }
}
