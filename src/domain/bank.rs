use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::BankConfig;
use crate::domain::account::{Account, OverdraftPolicy};
use crate::domain::client::Client;
use crate::domain::transaction::Transaction;
use crate::errors::BankError;

/// Data required to register a new client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewClient {
    pub tax_id: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub address: String,
}

/// Process-scoped registry of all clients and accounts.
///
/// The bank is the single owner of every `Client` and `Account` (the two
/// sides reference each other by id and number only), so there is no shared
/// ownership to untangle. Both collections keep creation order. State lives
/// for the process lifetime; there is no load/save contract.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Bank {
    config: BankConfig,
    clients: Vec<Client>,
    accounts: Vec<Account>,
}

impl Bank {
    pub fn new() -> Self {
        Self::with_config(BankConfig::default())
    }

    pub fn with_config(config: BankConfig) -> Self {
        Self {
            config,
            clients: Vec::new(),
            accounts: Vec::new(),
        }
    }

    pub fn config(&self) -> &BankConfig {
        &self.config
    }

    /// Registers a client, rejecting a tax id that is already taken.
    pub fn create_client(&mut self, new_client: NewClient) -> Result<&Client, BankError> {
        if self.find_client(&new_client.tax_id).is_some() {
            return Err(BankError::DuplicateClient(new_client.tax_id));
        }
        let client = Client::new(
            new_client.tax_id,
            new_client.name,
            new_client.birth_date,
            new_client.address,
        );
        let index = self.clients.len();
        self.clients.push(client);
        Ok(&self.clients[index])
    }

    /// Linear scan by tax id; fine at this scale.
    pub fn find_client(&self, tax_id: &str) -> Option<&Client> {
        self.clients.iter().find(|client| client.tax_id == tax_id)
    }

    pub fn find_client_mut(&mut self, tax_id: &str) -> Option<&mut Client> {
        self.clients
            .iter_mut()
            .find(|client| client.tax_id == tax_id)
    }

    pub fn client_by_id(&self, id: Uuid) -> Option<&Client> {
        self.clients.iter().find(|client| client.id == id)
    }

    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Next sequential account number, starting at 1. Accounts are never
    /// destroyed, so numbers are strictly increasing with no gaps.
    pub fn next_account_number(&self) -> u32 {
        self.accounts.len() as u32 + 1
    }

    /// Opens a checking account with the bank's configured overdraft terms.
    pub fn open_checking_account(&mut self, tax_id: &str) -> Result<u32, BankError> {
        let policy = OverdraftPolicy {
            limit: self.config.overdraft_limit,
            max_withdrawals: self.config.max_withdrawals,
        };
        self.open_checking_account_with_policy(tax_id, policy)
    }

    /// Opens a checking account under explicit overdraft terms.
    pub fn open_checking_account_with_policy(
        &mut self,
        tax_id: &str,
        policy: OverdraftPolicy,
    ) -> Result<u32, BankError> {
        let number = self.next_account_number();
        let branch = self.config.branch_code.clone();
        let client = self
            .find_client_mut(tax_id)
            .ok_or_else(|| BankError::ClientNotFound(tax_id.into()))?;
        let account = Account::new_checking(number, branch, client.id, policy);
        client.add_account(number);
        self.accounts.push(account);
        Ok(number)
    }

    /// Opens a basic account: zero balance floor, no overdraft.
    pub fn open_basic_account(&mut self, tax_id: &str) -> Result<u32, BankError> {
        let number = self.next_account_number();
        let branch = self.config.branch_code.clone();
        let client = self
            .find_client_mut(tax_id)
            .ok_or_else(|| BankError::ClientNotFound(tax_id.into()))?;
        let account = Account::new_basic(number, branch, client.id);
        client.add_account(number);
        self.accounts.push(account);
        Ok(number)
    }

    pub fn account(&self, number: u32) -> Option<&Account> {
        self.accounts.iter().find(|account| account.number == number)
    }

    pub fn account_mut(&mut self, number: u32) -> Option<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|account| account.number == number)
    }

    /// All accounts in creation order.
    pub fn all_accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Executes a transaction on one of the client's accounts.
    ///
    /// The account must belong to the named client; balance mutation and
    /// history append happen under the single mutable borrow taken here, so
    /// a decline leaves both untouched.
    pub fn execute(
        &mut self,
        tax_id: &str,
        number: u32,
        transaction: &Transaction,
    ) -> Result<(), BankError> {
        let client = self
            .clients
            .iter()
            .find(|client| client.tax_id == tax_id)
            .ok_or_else(|| BankError::ClientNotFound(tax_id.into()))?;
        if !client.owns(number) {
            return Err(BankError::AccountNotFound(number));
        }
        let account = self
            .accounts
            .iter_mut()
            .find(|account| account.number == number)
            .ok_or(BankError::AccountNotFound(number))?;
        client.execute(account, transaction)?;
        Ok(())
    }
}
