pub mod account_service;
pub mod client_service;
pub mod statement_service;
pub mod teller_service;

pub use account_service::AccountService;
pub use client_service::ClientService;
pub use statement_service::{Statement, StatementService};
pub use teller_service::TellerService;

use crate::errors::BankError;

pub type ServiceResult<T> = Result<T, BankError>;
