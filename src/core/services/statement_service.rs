use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::bank::Bank;
use crate::domain::history::HistoryEntry;
use crate::errors::BankError;

use super::ServiceResult;

/// Snapshot of an account's history and balance for display.
///
/// A pure read: producing a statement never mutates the account, so two
/// statements taken back to back are identical.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Statement {
    pub account_number: u32,
    pub branch: String,
    pub holder: String,
    pub balance: Decimal,
    pub lines: Vec<HistoryEntry>,
}

pub struct StatementService;

impl StatementService {
    pub fn statement(bank: &Bank, number: u32) -> ServiceResult<Statement> {
        let account = bank
            .account(number)
            .ok_or(BankError::AccountNotFound(number))?;
        let holder = bank
            .client_by_id(account.owner)
            .map(|client| client.name.clone())
            .unwrap_or_default();
        Ok(Statement {
            account_number: account.number,
            branch: account.branch.clone(),
            holder,
            balance: account.balance(),
            lines: account.history().entries().to_vec(),
        })
    }
}
