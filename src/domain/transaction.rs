use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::account::Account;
use crate::domain::history::TransactionKind;
use crate::errors::Decline;

/// A monetary operation to apply against a single account.
///
/// Transactions are short-lived values: constructed, applied once, then
/// discarded — the history entry is their durable trace. The amount is
/// validated at the account boundary, not at construction. New kinds extend
/// this enum and the `amount`/`apply` dispatch below.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Transaction {
    Deposit(Decimal),
    Withdrawal(Decimal),
}

impl Transaction {
    pub fn amount(&self) -> Decimal {
        match self {
            Self::Deposit(amount) | Self::Withdrawal(amount) => *amount,
        }
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            Self::Deposit(_) => TransactionKind::Deposit,
            Self::Withdrawal(_) => TransactionKind::Withdrawal,
        }
    }

    /// Applies this transaction to the account.
    ///
    /// The account owns the validation rule; this dispatches to it and
    /// records a history entry only when the balance mutation succeeded.
    /// Rejection and history append are mutually exclusive: a declined
    /// transaction leaves the account byte-for-byte unchanged.
    pub fn apply(&self, account: &mut Account) -> Result<(), Decline> {
        match self {
            Self::Deposit(amount) => account.deposit(*amount)?,
            Self::Withdrawal(amount) => account.withdraw(*amount)?,
        }
        account.record(self.kind(), self.amount());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn account() -> Account {
        Account::new_basic(1, "0001", Uuid::new_v4())
    }

    #[test]
    fn applied_deposit_records_history() {
        let mut account = account();
        Transaction::Deposit(dec!(75)).apply(&mut account).unwrap();

        assert_eq!(account.balance(), dec!(75));
        let entries = account.history().entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, TransactionKind::Deposit);
        assert_eq!(entries[0].amount, dec!(75));
    }

    #[test]
    fn declined_transaction_leaves_no_trace() {
        let mut account = account();
        let result = Transaction::Withdrawal(dec!(10)).apply(&mut account);

        assert_eq!(result, Err(Decline::InsufficientFunds));
        assert_eq!(account.balance(), Decimal::ZERO);
        assert!(account.history().is_empty());

        let result = Transaction::Deposit(dec!(-5)).apply(&mut account);
        assert_eq!(result, Err(Decline::InvalidAmount));
        assert!(account.history().is_empty());
    }
}
