use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};
use crate::domain::history::{History, TransactionKind};
use crate::errors::Decline;

/// Overdraft terms attached to a checking account.
///
/// `limit` bounds both how far the balance may go negative and the size of
/// any single withdrawal. `max_withdrawals` is a lifetime cap counted from
/// the withdrawals recorded in the account's history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverdraftPolicy {
    pub limit: Decimal,
    pub max_withdrawals: usize,
}

impl Default for OverdraftPolicy {
    fn default() -> Self {
        Self {
            limit: Decimal::from(500),
            max_withdrawals: 3,
        }
    }
}

/// A bank account owned by exactly one client.
///
/// The account keeps its own balance and transaction history; the owning
/// client is referenced by id only, since the registry owns both sides.
/// An account without an overdraft policy is a basic account whose balance
/// never goes below zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub id: Uuid,
    pub number: u32,
    pub branch: String,
    pub owner: Uuid,
    balance: Decimal,
    history: History,
    pub overdraft: Option<OverdraftPolicy>,
}

impl Account {
    /// Creates a basic account with a zero balance and no overdraft terms.
    pub fn new_basic(number: u32, branch: impl Into<String>, owner: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            number,
            branch: branch.into(),
            owner,
            balance: Decimal::ZERO,
            history: History::new(),
            overdraft: None,
        }
    }

    /// Creates a checking account governed by the given overdraft policy.
    pub fn new_checking(
        number: u32,
        branch: impl Into<String>,
        owner: Uuid,
        policy: OverdraftPolicy,
    ) -> Self {
        Self {
            overdraft: Some(policy),
            ..Self::new_basic(number, branch, owner)
        }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Credits the account. Declines non-positive amounts without mutation.
    pub fn deposit(&mut self, amount: Decimal) -> Result<(), Decline> {
        if amount <= Decimal::ZERO {
            return Err(Decline::InvalidAmount);
        }
        self.balance += amount;
        Ok(())
    }

    /// Debits the account under the rules of its variant.
    ///
    /// Basic accounts reject any amount above the current balance. Checking
    /// accounts evaluate four gates in order, the first failure winning:
    /// invalid amount, flat per-withdrawal limit, lifetime withdrawal count,
    /// and available funds including overdraft. A rejected withdrawal never
    /// mutates the balance.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), Decline> {
        if amount <= Decimal::ZERO {
            return Err(Decline::InvalidAmount);
        }
        match &self.overdraft {
            None => {
                if amount > self.balance {
                    return Err(Decline::InsufficientFunds);
                }
            }
            Some(policy) => {
                // The flat ceiling is checked against the raw amount, not
                // against balance + limit: a large positive balance does not
                // lift it.
                if amount > policy.limit {
                    return Err(Decline::ExceedsWithdrawalLimit);
                }
                if self.history.count_of(TransactionKind::Withdrawal) >= policy.max_withdrawals {
                    return Err(Decline::WithdrawalCountExceeded);
                }
                if amount > self.balance + policy.limit {
                    return Err(Decline::ExceedsAvailableFunds);
                }
            }
        }
        self.balance -= amount;
        Ok(())
    }

    /// Appends an applied transaction to the account's history.
    ///
    /// Called by [`crate::domain::Transaction::apply`] after a successful
    /// balance mutation, under the same mutable borrow.
    pub(crate) fn record(&mut self, kind: TransactionKind, amount: Decimal) {
        self.history.record(kind, amount);
    }
}

impl Identifiable for Account {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Account {
    fn display_label(&self) -> String {
        format!("branch {} · account {}", self.branch, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn basic() -> Account {
        Account::new_basic(1, "0001", Uuid::new_v4())
    }

    fn checking() -> Account {
        Account::new_checking(1, "0001", Uuid::new_v4(), OverdraftPolicy::default())
    }

    #[test]
    fn deposit_rejects_non_positive_amounts() {
        let mut account = basic();
        assert_eq!(account.deposit(dec!(0)), Err(Decline::InvalidAmount));
        assert_eq!(account.deposit(dec!(-10)), Err(Decline::InvalidAmount));
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn basic_withdrawal_stops_at_zero() {
        let mut account = basic();
        account.deposit(dec!(100)).unwrap();
        assert_eq!(account.withdraw(dec!(150)), Err(Decline::InsufficientFunds));
        assert_eq!(account.balance(), dec!(100));
        account.withdraw(dec!(100)).unwrap();
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn checking_flat_limit_ignores_balance() {
        let mut account = checking();
        account.deposit(dec!(10_000)).unwrap();
        assert_eq!(
            account.withdraw(dec!(600)),
            Err(Decline::ExceedsWithdrawalLimit)
        );
        assert_eq!(account.balance(), dec!(10_000));
    }

    #[test]
    fn checking_overdraft_scenario_only_first_withdrawal_lands() {
        let mut account = checking();
        account.withdraw(dec!(500)).unwrap();
        assert_eq!(account.balance(), dec!(-500));
        // Available funds are now -500 + 500 = 0; every positive amount
        // fails the last gate until a deposit raises the balance.
        assert_eq!(
            account.withdraw(dec!(500)),
            Err(Decline::ExceedsAvailableFunds)
        );
        assert_eq!(
            account.withdraw(dec!(100)),
            Err(Decline::ExceedsAvailableFunds)
        );
        assert_eq!(account.balance(), dec!(-500));

        account.deposit(dec!(600)).unwrap();
        account.withdraw(dec!(100)).unwrap();
        assert_eq!(account.balance(), Decimal::ZERO);
    }

    #[test]
    fn checking_count_cap_counts_recorded_withdrawals() {
        let mut account = checking();
        account.deposit(dec!(1_000)).unwrap();
        for _ in 0..3 {
            account.withdraw(dec!(100)).unwrap();
            account.record(TransactionKind::Withdrawal, dec!(100));
        }
        assert_eq!(
            account.withdraw(dec!(100)),
            Err(Decline::WithdrawalCountExceeded)
        );
        assert_eq!(account.balance(), dec!(700));
    }
}
