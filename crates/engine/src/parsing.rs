//! Command-text parsing.
//!
//! Everything here is pure and I/O-free: the transport identifies the command
//! keyword, hands over the raw argument text, and gets back a typed operation
//! or a [`ParseError`] naming exactly what was wrong. The grammar is a
//! hand-written tokenizer with one error variant per failure mode; there is no
//! silent fallback.

use crate::{Category, Currency, Money, Period};

/// Smallest accepted `/listhistory` limit.
pub const MIN_HISTORY_LIMIT: u64 = 1;
/// Largest accepted `/listhistory` limit.
pub const MAX_HISTORY_LIMIT: u64 = 50;
/// Limit applied when `/listhistory` is called without one.
pub const DEFAULT_HISTORY_LIMIT: u64 = 10;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty input")]
    EmptyInput,
    #[error("malformed expense")]
    MalformedExpense,
    #[error("malformed budget")]
    MalformedBudget,
    #[error("invalid amount")]
    InvalidAmount,
    #[error("invalid category")]
    InvalidCategory,
    #[error("invalid period")]
    InvalidPeriod,
    #[error("invalid history limit")]
    InvalidLimit,
    #[error("invalid transaction id")]
    InvalidTransactionId,
    #[error("unsupported currency: {0}")]
    UnsupportedCurrency(String),
    #[error("unknown command: {0}")]
    UnknownCommand(String),
}

/// A parsed `log` operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expense {
    pub amount: Money,
    pub category: Category,
    pub description: Option<String>,
}

/// A parsed `budget` operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BudgetSpec {
    pub category: Category,
    pub amount: Money,
}

/// One of the operations the assistant understands, fully typed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    LogExpense(Expense),
    SetBudget(BudgetSpec),
    SetCurrency(Currency),
    DeleteTransaction { id: i64 },
    ListHistory { limit: u64 },
    Summary { period: Period },
}

/// Dispatches on an already-identified command keyword.
pub fn parse_command(keyword: &str, input: &str) -> Result<Command, ParseError> {
    match keyword.to_ascii_lowercase().as_str() {
        "log" | "spent" => parse_expense(input).map(Command::LogExpense),
        "budget" => parse_budget(input).map(Command::SetBudget),
        "setcurrency" => parse_currency(input).map(Command::SetCurrency),
        "delete" => parse_transaction_id(input).map(|id| Command::DeleteTransaction { id }),
        "listhistory" => parse_history_limit(input).map(|limit| Command::ListHistory { limit }),
        "summary" => parse_period(input).map(|period| Command::Summary { period }),
        other => Err(ParseError::UnknownCommand(other.to_string())),
    }
}

/// Parses `<amount> on <#category> [for <description>]`.
///
/// `on` and `for` are case-insensitive. The description is the remainder of
/// the text verbatim; it is not re-validated.
pub fn parse_expense(input: &str) -> Result<Expense, ParseError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (amount_token, rest) = next_token(text).ok_or(ParseError::MalformedExpense)?;
    let (on, rest) = next_token(rest).ok_or(ParseError::MalformedExpense)?;
    if !on.eq_ignore_ascii_case("on") {
        return Err(ParseError::MalformedExpense);
    }
    let (category_token, rest) = next_token(rest).ok_or(ParseError::MalformedExpense)?;

    let description = if rest.is_empty() {
        None
    } else {
        let (keyword, tail) = next_token(rest).ok_or(ParseError::MalformedExpense)?;
        if !keyword.eq_ignore_ascii_case("for") || tail.is_empty() {
            return Err(ParseError::MalformedExpense);
        }
        Some(tail.trim_end().to_string())
    };

    let amount: Money = amount_token.parse().map_err(|_| ParseError::InvalidAmount)?;
    if !amount.is_positive() {
        return Err(ParseError::InvalidAmount);
    }
    let category = Category::parse(category_token)?;

    Ok(Expense {
        amount,
        category,
        description,
    })
}

/// Parses `<#category> <amount>`.
pub fn parse_budget(input: &str) -> Result<BudgetSpec, ParseError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let (category_token, rest) = next_token(text).ok_or(ParseError::MalformedBudget)?;
    let (amount_token, rest) = next_token(rest).ok_or(ParseError::MalformedBudget)?;
    if !rest.is_empty() {
        return Err(ParseError::MalformedBudget);
    }

    let category = Category::parse(category_token)?;
    let amount: Money = amount_token.parse().map_err(|_| ParseError::InvalidAmount)?;
    if !amount.is_positive() {
        return Err(ParseError::InvalidAmount);
    }

    Ok(BudgetSpec { category, amount })
}

/// Parses a currency code token against the supported set.
pub fn parse_currency(input: &str) -> Result<Currency, ParseError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let (token, _) = next_token(text).ok_or(ParseError::EmptyInput)?;
    Currency::try_from(token)
}

/// Parses a summary period token; absence defaults to [`Period::Month`].
pub fn parse_period(input: &str) -> Result<Period, ParseError> {
    let text = input.trim();
    if text.is_empty() {
        return Ok(Period::default());
    }
    Period::parse(text).ok_or(ParseError::InvalidPeriod)
}

/// Parses a history limit in `[1, 50]`; absence defaults to 10.
pub fn parse_history_limit(input: &str) -> Result<u64, ParseError> {
    let text = input.trim();
    if text.is_empty() {
        return Ok(DEFAULT_HISTORY_LIMIT);
    }
    let limit: u64 = text.parse().map_err(|_| ParseError::InvalidLimit)?;
    if !(MIN_HISTORY_LIMIT..=MAX_HISTORY_LIMIT).contains(&limit) {
        return Err(ParseError::InvalidLimit);
    }
    Ok(limit)
}

/// Parses a positive transaction id.
pub fn parse_transaction_id(input: &str) -> Result<i64, ParseError> {
    let text = input.trim();
    if text.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let id: i64 = text.parse().map_err(|_| ParseError::InvalidTransactionId)?;
    if id <= 0 {
        return Err(ParseError::InvalidTransactionId);
    }
    Ok(id)
}

/// Splits off the next whitespace-delimited token, returning it together with
/// the remainder (leading whitespace stripped).
fn next_token(s: &str) -> Option<(&str, &str)> {
    let s = s.trim_start();
    if s.is_empty() {
        return None;
    }
    match s.split_once(char::is_whitespace) {
        Some((token, rest)) => Some((token, rest.trim_start())),
        None => Some((s, "")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_with_description() {
        let expense = parse_expense("150 on #food for lunch").unwrap();
        assert_eq!(expense.amount.cents(), 15_000);
        assert_eq!(expense.category.as_str(), "#food");
        assert_eq!(expense.description.as_deref(), Some("lunch"));
    }

    #[test]
    fn expense_without_description() {
        let expense = parse_expense("25 on #coffee").unwrap();
        assert_eq!(expense.amount.cents(), 2500);
        assert_eq!(expense.category.as_str(), "#coffee");
        assert_eq!(expense.description, None);
    }

    #[test]
    fn expense_keywords_are_case_insensitive() {
        let expense = parse_expense("80 ON #Transport FOR airport taxi").unwrap();
        assert_eq!(expense.category.as_str(), "#transport");
        assert_eq!(expense.description.as_deref(), Some("airport taxi"));
    }

    #[test]
    fn expense_description_is_verbatim() {
        let expense = parse_expense("12.50 on #food for two samosas, one chai").unwrap();
        assert_eq!(expense.description.as_deref(), Some("two samosas, one chai"));
    }

    #[test]
    fn expense_rejects_zero_and_bad_numerals_as_invalid_amount() {
        assert_eq!(parse_expense("0 on #food").unwrap_err(), ParseError::InvalidAmount);
        assert_eq!(parse_expense("12x on #food").unwrap_err(), ParseError::InvalidAmount);
        assert_eq!(parse_expense("-5 on #food").unwrap_err(), ParseError::InvalidAmount);
    }

    #[test]
    fn expense_rejects_structural_noise() {
        assert_eq!(parse_expense("").unwrap_err(), ParseError::EmptyInput);
        assert_eq!(parse_expense("150").unwrap_err(), ParseError::MalformedExpense);
        assert_eq!(parse_expense("150 #food").unwrap_err(), ParseError::MalformedExpense);
        assert_eq!(
            parse_expense("150 on #food lunch").unwrap_err(),
            ParseError::MalformedExpense
        );
        assert_eq!(parse_expense("150 on #food for").unwrap_err(), ParseError::MalformedExpense);
    }

    #[test]
    fn expense_rejects_bad_category() {
        assert_eq!(parse_expense("150 on food").unwrap_err(), ParseError::InvalidCategory);
        assert_eq!(parse_expense("150 on #").unwrap_err(), ParseError::InvalidCategory);
    }

    #[test]
    fn budget_round_trip() {
        let budget = parse_budget("#groceries 8000").unwrap();
        assert_eq!(budget.category.as_str(), "#groceries");
        assert_eq!(budget.amount.cents(), 800_000);
    }

    #[test]
    fn budget_rejects_extra_tokens_and_zero() {
        assert_eq!(parse_budget("").unwrap_err(), ParseError::EmptyInput);
        assert_eq!(parse_budget("#food").unwrap_err(), ParseError::MalformedBudget);
        assert_eq!(parse_budget("#food 10 20").unwrap_err(), ParseError::MalformedBudget);
        assert_eq!(parse_budget("#food 0").unwrap_err(), ParseError::InvalidAmount);
    }

    #[test]
    fn period_defaults_to_month() {
        assert_eq!(parse_period("").unwrap(), Period::Month);
        assert_eq!(parse_period("WEEK").unwrap(), Period::Week);
        assert_eq!(parse_period("quarter").unwrap_err(), ParseError::InvalidPeriod);
    }

    #[test]
    fn history_limit_bounds() {
        assert_eq!(parse_history_limit("").unwrap(), DEFAULT_HISTORY_LIMIT);
        assert_eq!(parse_history_limit("1").unwrap(), 1);
        assert_eq!(parse_history_limit("50").unwrap(), 50);
        assert_eq!(parse_history_limit("0").unwrap_err(), ParseError::InvalidLimit);
        assert_eq!(parse_history_limit("51").unwrap_err(), ParseError::InvalidLimit);
        assert_eq!(parse_history_limit("ten").unwrap_err(), ParseError::InvalidLimit);
    }

    #[test]
    fn transaction_id_must_be_positive() {
        assert_eq!(parse_transaction_id("123").unwrap(), 123);
        assert_eq!(parse_transaction_id("0").unwrap_err(), ParseError::InvalidTransactionId);
        assert_eq!(parse_transaction_id("-4").unwrap_err(), ParseError::InvalidTransactionId);
        assert_eq!(parse_transaction_id("abc").unwrap_err(), ParseError::InvalidTransactionId);
    }

    #[test]
    fn command_dispatch_covers_aliases() {
        assert!(matches!(
            parse_command("spent", "25 on #coffee").unwrap(),
            Command::LogExpense(_)
        ));
        assert!(matches!(
            parse_command("summary", "today").unwrap(),
            Command::Summary { period: Period::Today }
        ));
        assert!(matches!(
            parse_command("setcurrency", "usd").unwrap(),
            Command::SetCurrency(Currency::Usd)
        ));
        assert!(matches!(
            parse_command("teleport", "").unwrap_err(),
            ParseError::UnknownCommand(_)
        ));
    }
}
