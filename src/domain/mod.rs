//! Banking domain models: clients, accounts, transactions, and the registry.

pub mod account;
pub mod bank;
pub mod client;
pub mod common;
pub mod history;
pub mod transaction;

pub use account::{Account, OverdraftPolicy};
pub use bank::{Bank, NewClient};
pub use client::Client;
pub use common::{Displayable, Identifiable, NamedEntity};
pub use history::{History, HistoryEntry, TransactionKind};
pub use transaction::Transaction;
