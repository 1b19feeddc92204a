use thiserror::Error;

/// Business-rule rejection of a deposit or withdrawal.
///
/// Declines are normal outcomes, not faults: the operation leaves the
/// account untouched and the caller may retry with corrected input. The
/// `Display` text is the reason surfaced to the user.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Decline {
    #[error("amount must be greater than zero")]
    InvalidAmount,
    #[error("insufficient funds")]
    InsufficientFunds,
    #[error("amount exceeds the per-withdrawal limit")]
    ExceedsWithdrawalLimit,
    #[error("maximum number of withdrawals reached")]
    WithdrawalCountExceeded,
    #[error("amount exceeds available funds including overdraft")]
    ExceedsAvailableFunds,
}

/// Error type that captures failures at the bank boundary.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BankError {
    #[error("no client registered under tax id {0}")]
    ClientNotFound(String),
    #[error("account {0} not found")]
    AccountNotFound(u32),
    #[error("a client with tax id {0} already exists")]
    DuplicateClient(String),
    #[error("operation declined: {0}")]
    Declined(#[from] Decline),
}
