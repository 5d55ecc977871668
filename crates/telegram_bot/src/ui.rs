//! User-facing message rendering.
//!
//! Pure string builders, no I/O: handlers call the engine, then hand the
//! results here to be turned into reply text.

use engine::{
    BudgetProgress, BudgetStatus, BudgetTier, Currency, ParseError, Transaction,
};
use teloxide::utils::command::BotCommands;

use crate::commands::{
    BudgetCommands, ExpenseCommands, ExportCommands, ReportCommands, UserCommands,
};

pub(crate) fn start_first() -> &'static str {
    "Please start with /start first!"
}

pub(crate) fn storage_trouble() -> &'static str {
    "Something went wrong on my side. Please try again!"
}

pub(crate) fn welcome_new(currency: Currency) -> String {
    format!(
        "Welcome to Paisa! I track your spending so you don't have to.\n\n\
         Quick start:\n\
         1. Log an expense: /log 50 on #coffee for morning latte\n\
         2. Set a budget: /budget #coffee 200\n\
         3. See where it goes: /summary\n\n\
         Your currency is set to {code} ({symbol}). \
         Change it anytime with /setcurrency <code>.\n\
         Type /help for everything I can do.",
        code = currency.code(),
        symbol = currency.symbol()
    )
}

pub(crate) fn welcome_back(currency: Currency) -> String {
    format!(
        "Welcome back! Your currency is {code}.\n\n\
         /log 25 on #lunch to log an expense\n\
         /summary to see your spending\n\
         /help for all commands",
        code = currency.code()
    )
}

pub(crate) fn help_text() -> String {
    format!(
        "{expenses}\n\n{budgets}\n\n{reports}\n\n{exports}\n\n{user}\n\n\
         Categories are hashtags (#food, #transport); descriptions are free text.",
        expenses = ExpenseCommands::descriptions(),
        budgets = BudgetCommands::descriptions(),
        reports = ReportCommands::descriptions(),
        exports = ExportCommands::descriptions(),
        user = UserCommands::descriptions()
    )
}

pub(crate) fn expense_error(err: &ParseError) -> String {
    match err {
        ParseError::EmptyInput => "I need some expense details.\n\n\
             Format: /log <amount> on #<category> [for <description>]\n\
             Example: /log 150 on #food for lunch"
            .to_string(),
        ParseError::InvalidAmount => {
            "The amount must be a number greater than 0, like 150 or 99.50.".to_string()
        }
        ParseError::InvalidCategory => {
            "Categories are single hashtags, like #food or #transport.".to_string()
        }
        _ => "I did not understand that.\n\n\
             Format: /log <amount> on #<category> [for <description>]\n\
             Examples:\n\
             /log 150 on #food for pizza dinner\n\
             /log 80 on #transport"
            .to_string(),
    }
}

pub(crate) fn budget_error(err: &ParseError) -> String {
    match err {
        ParseError::EmptyInput => "Format: /budget #<category> <amount>\n\
             Example: /budget #groceries 8000"
            .to_string(),
        ParseError::InvalidAmount => {
            "The budget amount must be a number greater than 0.".to_string()
        }
        ParseError::InvalidCategory => {
            "Categories are single hashtags, like #food or #transport.".to_string()
        }
        _ => "I did not understand that.\n\n\
             Format: /budget #<category> <amount>\n\
             Examples:\n\
             /budget #groceries 8000\n\
             /budget #entertainment 2000"
            .to_string(),
    }
}

pub(crate) fn delete_error(err: &ParseError) -> String {
    match err {
        ParseError::EmptyInput => "Tell me which transaction to delete, e.g. /delete 123.\n\
             Use /listhistory to see transaction IDs."
            .to_string(),
        _ => "Transaction IDs are positive numbers. Use /listhistory to look one up.".to_string(),
    }
}

pub(crate) fn history_error() -> &'static str {
    "The limit must be a number between 1 and 50."
}

pub(crate) fn period_error() -> &'static str {
    "Unknown period. Use: today, week, month or year."
}

pub(crate) fn currency_usage() -> String {
    format!(
        "Usage: /setcurrency <code>\n\nSupported currencies:\n{list}",
        list = currency_list()
    )
}

pub(crate) fn unsupported_currency(code: &str) -> String {
    format!(
        "{code} isn't supported.\n\nChoose one of:\n{list}",
        list = currency_list()
    )
}

fn currency_list() -> String {
    Currency::ALL
        .iter()
        .map(|currency| format!("- {} - {}", currency.code(), currency.display_name()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub(crate) fn currency_updated(currency: Currency) -> String {
    format!(
        "Done! Your currency is now {name}. All amounts will show in {code}.",
        name = currency.display_name(),
        code = currency.code()
    )
}

pub(crate) fn log_confirmation(
    amount: &str,
    category: &str,
    description: Option<&str>,
    budget: Option<&BudgetStatus>,
) -> String {
    let mut text = format!("Logged {amount} on {category}.");
    if let Some(description) = description {
        text.push_str(&format!("\nNote: {description}"));
    }
    match budget {
        Some(status) => {
            text.push_str("\n\n");
            text.push_str(&budget_alert(category, status));
        }
        None => {
            text.push_str(&format!(
                "\n\nTip: set a budget for {category} with /budget {category} <amount>"
            ));
        }
    }
    text
}

fn budget_alert(category: &str, status: &BudgetStatus) -> String {
    match status.tier {
        BudgetTier::Exceeded => format!(
            "Budget alert! You are {over:.1}% over your {category} budget this month.",
            over = status.percentage - 100.0
        ),
        BudgetTier::Warning => format!(
            "Heads up: you've spent {pct:.1}% of your {category} budget this month.",
            pct = status.percentage
        ),
        BudgetTier::Caution | BudgetTier::Ok => format!(
            "Budget status: {pct:.1}% of your {category} budget used.",
            pct = status.percentage
        ),
    }
}

pub(crate) fn deleted(transaction_id: i64) -> String {
    format!("Transaction {transaction_id} deleted.")
}

pub(crate) fn delete_not_found(transaction_id: i64) -> String {
    format!("Could not delete transaction {transaction_id}. Check the ID and try again.")
}

pub(crate) fn no_transactions() -> &'static str {
    "No transactions found."
}

pub(crate) fn history(transactions: &[Transaction], currency: Currency) -> String {
    let mut text = format!("Your last {} transactions:\n", transactions.len());
    for tx in transactions {
        text.push_str(&format!(
            "\nID: {id} | {date} | {amount} | {category}",
            id = tx.id,
            date = tx.occurred_at.format("%d-%b"),
            amount = tx.amount.format(currency),
            category = tx.category
        ));
        if let Some(description) = tx.description.as_deref() {
            text.push_str(&format!(" - {description}"));
        }
    }
    text.push_str("\n\nUse /delete <ID> to remove an entry.");
    text
}

pub(crate) fn budget_set(category: &str, amount: &str) -> String {
    format!("Budget set: {category} = {amount}/month")
}

pub(crate) fn no_budgets() -> &'static str {
    "No budgets set yet.\n\nCreate one with: /budget #<category> <amount>\nExample: /budget #food 5000"
}

pub(crate) fn budget_overview(overview: &[BudgetProgress], currency: Currency) -> String {
    let mut text = String::from("Your monthly budgets:\n");
    for item in overview {
        text.push_str(&format!(
            "\n{marker} {category}: {spent} / {limit} ({pct:.1}%)\n   {bar}\n",
            marker = tier_marker(item.status.tier),
            category = item.category,
            spent = item.spent.format(currency),
            limit = item.limit.format(currency),
            pct = item.status.percentage,
            bar = progress_bar(item.status.percentage)
        ));
    }
    text
}

fn tier_marker(tier: BudgetTier) -> &'static str {
    match tier {
        BudgetTier::Exceeded => "🚨",
        BudgetTier::Warning => "⚠️",
        BudgetTier::Caution => "🟡",
        BudgetTier::Ok => "🟢",
    }
}

fn progress_bar(percentage: f64) -> String {
    const LEN: usize = 10;
    let filled = (((percentage / 100.0) * LEN as f64) as usize).min(LEN);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(LEN - filled))
}

pub(crate) fn no_expenses(label: &str) -> String {
    format!("No expenses recorded for {}.", label.to_lowercase())
}

pub(crate) fn chart_caption(label: &str) -> String {
    format!("{label} spending chart")
}

pub(crate) fn nothing_to_export() -> &'static str {
    "No transactions to export yet."
}

#[cfg(test)]
mod tests {
    use engine::Money;

    use super::*;

    #[test]
    fn log_confirmation_without_budget_carries_the_tip() {
        let text = log_confirmation("₹150.00", "#food", Some("lunch"), None);
        assert!(text.contains("₹150.00"));
        assert!(text.contains("#food"));
        assert!(text.contains("lunch"));
        assert!(text.contains("/budget #food"));
    }

    #[test]
    fn log_confirmation_at_ninety_percent_warns() {
        let status = BudgetStatus::evaluate(Money::new(90_000), Money::new(100_000));
        let text = log_confirmation("₹50.00", "#food", None, Some(&status));
        assert!(text.contains("90.0%"));
        assert!(text.contains("Heads up"));
        assert!(!text.contains("Tip:"));
    }

    #[test]
    fn progress_bar_clamps_at_full() {
        assert_eq!(progress_bar(0.0), "[░░░░░░░░░░]");
        assert_eq!(progress_bar(50.0), "[█████░░░░░]");
        assert_eq!(progress_bar(250.0), "[██████████]");
    }

    #[test]
    fn history_lines_include_id_amount_and_description() {
        let rows = vec![Transaction {
            id: 7,
            amount: Money::new(15_000),
            category: "#food".to_string(),
            description: Some("lunch".to_string()),
            occurred_at: chrono::NaiveDate::from_ymd_opt(2026, 8, 7)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        }];
        let text = history(&rows, Currency::Inr);
        assert!(text.contains("ID: 7"));
        assert!(text.contains("07-Aug"));
        assert!(text.contains("₹150.00"));
        assert!(text.contains("- lunch"));
    }
}
