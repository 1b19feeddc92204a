//! Balance conservation: after any operation sequence, the balance equals
//! the sum of successful deposits minus successful withdrawals, never dips
//! below the account's floor, and the history holds exactly the successes.

use bank_core::domain::{Account, OverdraftPolicy, Transaction, TransactionKind};
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use rust_decimal::Decimal;
use uuid::Uuid;

#[derive(Debug, Clone)]
enum Op {
    Deposit(i64),
    Withdraw(i64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (-100i64..=1_000).prop_map(Op::Deposit),
        (-100i64..=1_000).prop_map(Op::Withdraw),
    ]
}

fn check_conservation(
    mut account: Account,
    floor: Decimal,
    ops: Vec<Op>,
) -> Result<(), TestCaseError> {
    let mut expected = Decimal::ZERO;
    let mut successes = 0usize;

    for op in ops {
        let transaction = match op {
            Op::Deposit(raw) => Transaction::Deposit(Decimal::from(raw)),
            Op::Withdraw(raw) => Transaction::Withdrawal(Decimal::from(raw)),
        };
        if transaction.apply(&mut account).is_ok() {
            match transaction.kind() {
                TransactionKind::Deposit => expected += transaction.amount(),
                TransactionKind::Withdrawal => expected -= transaction.amount(),
            }
            successes += 1;
        }
        prop_assert!(account.balance() >= floor);
        prop_assert_eq!(account.balance(), expected);
        prop_assert_eq!(account.history().len(), successes);
    }
    Ok(())
}

proptest! {
    #[test]
    fn basic_account_conserves_balance(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let account = Account::new_basic(1, "0001", Uuid::new_v4());
        check_conservation(account, Decimal::ZERO, ops)?;
    }

    #[test]
    fn checking_account_conserves_balance(ops in proptest::collection::vec(op_strategy(), 0..64)) {
        let policy = OverdraftPolicy::default();
        let floor = -policy.limit;
        let account = Account::new_checking(1, "0001", Uuid::new_v4(), policy);
        check_conservation(account, floor, ops)?;
    }
}
