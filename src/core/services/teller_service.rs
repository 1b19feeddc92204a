use rust_decimal::Decimal;

use crate::domain::bank::Bank;
use crate::domain::transaction::Transaction;
use crate::errors::BankError;

use super::ServiceResult;

pub struct TellerService;

impl TellerService {
    pub fn deposit(
        bank: &mut Bank,
        tax_id: &str,
        number: u32,
        amount: Decimal,
    ) -> ServiceResult<()> {
        Self::execute(bank, tax_id, number, Transaction::Deposit(amount))
    }

    pub fn withdraw(
        bank: &mut Bank,
        tax_id: &str,
        number: u32,
        amount: Decimal,
    ) -> ServiceResult<()> {
        Self::execute(bank, tax_id, number, Transaction::Withdrawal(amount))
    }

    /// Routes a transaction through the owning client onto the account.
    ///
    /// A decline comes back as `BankError::Declined`; its display text is
    /// the reason the caller shows the user.
    pub fn execute(
        bank: &mut Bank,
        tax_id: &str,
        number: u32,
        transaction: Transaction,
    ) -> ServiceResult<()> {
        match bank.execute(tax_id, number, &transaction) {
            Ok(()) => {
                tracing::info!(
                    %tax_id,
                    number,
                    kind = ?transaction.kind(),
                    amount = %transaction.amount(),
                    "transaction registered"
                );
                Ok(())
            }
            Err(BankError::Declined(reason)) => {
                tracing::warn!(
                    %tax_id,
                    number,
                    kind = ?transaction.kind(),
                    amount = %transaction.amount(),
                    %reason,
                    "transaction declined"
                );
                Err(BankError::Declined(reason))
            }
            Err(err) => {
                tracing::warn!(%tax_id, number, %err, "transaction failed");
                Err(err)
            }
        }
    }
}
