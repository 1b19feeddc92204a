//! Bank-wide settings applied when clients and accounts are created.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters every new checking account inherits unless overridden.
///
/// Passed explicitly into [`crate::domain::Bank::with_config`]; there is no
/// ambient global configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BankConfig {
    /// Administrative branch code stamped on every account.
    pub branch_code: String,
    /// How far below zero a checking-account balance may go, and the flat
    /// ceiling on any single withdrawal.
    pub overdraft_limit: Decimal,
    /// Lifetime cap on recorded withdrawals per checking account.
    pub max_withdrawals: usize,
}

impl Default for BankConfig {
    fn default() -> Self {
        Self {
            branch_code: "0001".into(),
            overdraft_limit: Decimal::from(500),
            max_withdrawals: 3,
        }
    }
}
