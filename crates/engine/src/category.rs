use std::fmt;

use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

use crate::parsing::ParseError;

/// A normalized spending category: `#` followed by one or more word
/// characters, folded to a canonical lowercase key.
///
/// The same normalization is applied when logging expenses and when setting
/// budgets, so `#Food`, `#food` and `#Fóod` all address the same bucket.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Category(String);

impl Category {
    /// Parses a raw category token.
    ///
    /// Requires the `#` prefix and at least one word character; anything else
    /// in the token is rejected so a typo never silently creates a bucket.
    pub fn parse(token: &str) -> Result<Self, ParseError> {
        let Some(raw) = token.strip_prefix('#') else {
            return Err(ParseError::InvalidCategory);
        };
        if raw.is_empty() || !raw.chars().all(|c| c.is_alphanumeric() || c == '_') {
            return Err(ParseError::InvalidCategory);
        }

        let folded = fold_key(raw);
        if folded.is_empty() {
            return Err(ParseError::InvalidCategory);
        }
        Ok(Self(format!("#{folded}")))
    }

    /// The stored form, `#` prefix included.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.0
    }
}

/// NFKD-decompose, drop combining marks, lowercase.
fn fold_key(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.nfkd() {
        if is_combining_mark(ch) {
            continue;
        }
        for lower in ch.to_lowercase() {
            out.push(lower);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_keeps_hash_prefix() {
        assert_eq!(Category::parse("#Food").unwrap().as_str(), "#food");
        assert_eq!(Category::parse("#groceries").unwrap().as_str(), "#groceries");
        assert_eq!(Category::parse("#home_office").unwrap().as_str(), "#home_office");
    }

    #[test]
    fn folds_accents_to_the_same_key() {
        assert_eq!(Category::parse("#Café").unwrap(), Category::parse("#cafe").unwrap());
    }

    #[test]
    fn rejects_missing_hash_and_empty_label() {
        assert!(matches!(Category::parse("food"), Err(ParseError::InvalidCategory)));
        assert!(matches!(Category::parse("#"), Err(ParseError::InvalidCategory)));
    }

    #[test]
    fn rejects_embedded_punctuation() {
        assert!(Category::parse("#foo-bar").is_err());
        assert!(Category::parse("#foo bar").is_err());
        assert!(Category::parse("##food").is_err());
    }
}
