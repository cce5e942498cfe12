use super::*;

/// Failures surfaced by the table, the wheel catalog, and strategy lookup.
///
/// Only [`RouletteError::TableLimit`] is part of ordinary play: it ends a
/// session early. The lookup variants indicate a configuration mistake.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouletteError {
    #[error("bet of {amount} breaks table rules (running total {total}, minimum {minimum}, limit {limit})")]
    TableLimit {
        amount: Chips,
        total: Chips,
        minimum: Chips,
        limit: Chips,
    },
    #[error("unknown outcome: {0}")]
    UnknownOutcome(String),
    #[error("unknown strategy: {0}")]
    UnknownStrategy(String),
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl RouletteError {
    /// Whether this is a table-rule violation rather than a lookup failure.
    pub fn is_table_limit(&self) -> bool {
        matches!(self, Self::TableLimit { .. })
    }
}
