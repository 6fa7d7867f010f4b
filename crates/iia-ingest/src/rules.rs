//! Rule book parsing.
//!
//! The rule book is a TOML document with an optional `[policy]` table, a
//! `[default]` rule, and one `[areas."<name>"]` table per area with a bespoke
//! rule. See `data/rules.toml` for the shipped rules.

use iia_model::RuleBook;

use crate::error::{IngestError, Result};

/// Parse a rule book from TOML text.
pub fn parse_rule_book(content: &str, file: &str) -> Result<RuleBook> {
    let book: RuleBook = toml::from_str(content).map_err(|source| IngestError::RuleBook {
        file: file.to_string(),
        source,
    })?;
    tracing::debug!(
        file,
        areas = book.areas.len(),
        default = book.default.kind(),
        "parsed rule book"
    );
    Ok(book)
}
