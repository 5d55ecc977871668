//! Command structs

use teloxide::utils::command::{BotCommands, ParseError};

/// Passes the raw argument text through untouched.
///
/// The engine's parser owns every grammar; splitting here would only lose
/// information (descriptions may contain spaces).
pub fn raw_args(input: String) -> Result<(String,), ParseError> {
    Ok((input,))
}

/// Commands that record or inspect expenses.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Expense tracking:")]
pub enum ExpenseCommands {
    #[command(
        description = "log an expense: /log <amount> on #<category> [for <description>]",
        parse_with = raw_args
    )]
    Log { text: String },
    #[command(description = "alias of /log.", parse_with = raw_args)]
    Spent { text: String },
    #[command(description = "delete a logged expense: /delete <id>", parse_with = raw_args)]
    Delete { text: String },
    #[command(
        description = "show recent expenses: /listhistory [count]",
        parse_with = raw_args
    )]
    ListHistory { text: String },
}

/// Commands that manage monthly budgets.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Budget management:")]
pub enum BudgetCommands {
    #[command(
        description = "set a monthly limit: /budget #<category> <amount>",
        parse_with = raw_args
    )]
    Budget { text: String },
    #[command(description = "show progress on every budget.")]
    ViewBudgets,
}

/// Reporting commands.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Reports:")]
pub enum ReportCommands {
    #[command(
        description = "spending breakdown with chart: /summary [today|week|month|year]",
        parse_with = raw_args
    )]
    Summary { text: String },
}

/// Onboarding and settings commands.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Getting started:")]
pub enum UserCommands {
    #[command(description = "create your account and show the quick start.")]
    Start,
    #[command(description = "show this message.")]
    Help,
    #[command(description = "change your currency: /setcurrency <code>", parse_with = raw_args)]
    SetCurrency { text: String },
}

/// Commands for exporting user data.
#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Exports:")]
pub enum ExportCommands {
    #[command(description = "export all your expenses as a CSV file.")]
    Export,
}
