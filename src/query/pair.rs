//! Currency pair parsing.

use crate::domain::{CurrencyPair, QueryFailure};

const SEPARATOR: &str = " TO ";

/// Split `"<CUR1> to <CUR2> [date phrase]"` on the case-insensitive `" to "`.
///
/// Exactly one separator is required. The target currency is the first word
/// after it; the rest of the text is the date phrase and is not part of the pair.
pub fn parse_pair(query: &str) -> Result<CurrencyPair, QueryFailure> {
    let upper = query.to_uppercase();
    let parts: Vec<&str> = upper.split(SEPARATOR).collect();
    let [from, rest] = parts.as_slice() else {
        return Err(QueryFailure::query_format());
    };

    Ok(CurrencyPair {
        from: from.trim().to_string(),
        to: rest.split_whitespace().next().unwrap_or_default().to_string(),
    })
}
