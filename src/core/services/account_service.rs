use crate::domain::account::{Account, OverdraftPolicy};
use crate::domain::bank::Bank;

use super::ServiceResult;

pub struct AccountService;

impl AccountService {
    /// Opens a checking account under the bank's configured overdraft terms.
    pub fn open_checking(bank: &mut Bank, tax_id: &str) -> ServiceResult<u32> {
        let number = bank.open_checking_account(tax_id)?;
        tracing::info!(%tax_id, number, "checking account opened");
        Ok(number)
    }

    /// Opens a checking account with explicit overdraft terms.
    pub fn open_checking_with_policy(
        bank: &mut Bank,
        tax_id: &str,
        policy: OverdraftPolicy,
    ) -> ServiceResult<u32> {
        let number = bank.open_checking_account_with_policy(tax_id, policy)?;
        tracing::info!(%tax_id, number, "checking account opened");
        Ok(number)
    }

    /// Opens a basic account with a zero balance floor.
    pub fn open_basic(bank: &mut Bank, tax_id: &str) -> ServiceResult<u32> {
        let number = bank.open_basic_account(tax_id)?;
        tracing::info!(%tax_id, number, "basic account opened");
        Ok(number)
    }

    /// All accounts in creation order, for listing.
    pub fn list(bank: &Bank) -> &[Account] {
        bank.all_accounts()
    }
}
