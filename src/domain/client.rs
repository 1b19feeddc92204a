use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::account::Account;
use crate::domain::common::{Displayable, Identifiable, NamedEntity};
use crate::domain::transaction::Transaction;
use crate::errors::Decline;

/// A registered bank client and the accounts they own.
///
/// The tax id is immutable and unique across the registry. Owned accounts
/// are referenced by number, in creation order; the registry owns the
/// `Account` values themselves.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Client {
    pub id: Uuid,
    pub tax_id: String,
    pub name: String,
    pub birth_date: NaiveDate,
    pub address: String,
    accounts: Vec<u32>,
}

impl Client {
    pub fn new(
        tax_id: impl Into<String>,
        name: impl Into<String>,
        birth_date: NaiveDate,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tax_id: tax_id.into(),
            name: name.into(),
            birth_date,
            address: address.into(),
            accounts: Vec::new(),
        }
    }

    /// Account numbers owned by this client, in creation order.
    pub fn accounts(&self) -> &[u32] {
        &self.accounts
    }

    pub fn owns(&self, number: u32) -> bool {
        self.accounts.contains(&number)
    }

    pub(crate) fn add_account(&mut self, number: u32) {
        self.accounts.push(number);
    }

    /// Realizes a transaction against one of the client's accounts.
    ///
    /// Forwards to [`Transaction::apply`]; the indirection is the seam where
    /// client-level authorization or auditing would slot in without touching
    /// `Transaction` or `Account`.
    pub fn execute(&self, account: &mut Account, transaction: &Transaction) -> Result<(), Decline> {
        transaction.apply(account)
    }
}

impl Identifiable for Client {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Client {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Displayable for Client {
    fn display_label(&self) -> String {
        format!("{} ({})", self.name, self.tax_id)
    }
}
