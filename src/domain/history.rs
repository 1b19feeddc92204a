use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Tags the kind of a recorded transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    Deposit,
    Withdrawal,
}

/// One applied transaction, stamped at application time.
///
/// Entries are immutable once appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub recorded_at: DateTime<Utc>,
}

/// Append-only log of the transactions applied to one account.
///
/// Created with its account and never replaced; entries keep insertion
/// order and are never removed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry stamped with the current wall-clock time.
    pub fn record(&mut self, kind: TransactionKind, amount: Decimal) {
        self.entries.push(HistoryEntry {
            kind,
            amount,
            recorded_at: Utc::now(),
        });
    }

    /// Entries in append order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of recorded entries of the given kind.
    pub fn count_of(&self, kind: TransactionKind) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
