use std::fmt::Display;

use tracing::{debug, info, warn};

use crate::error::{AccountError, Operation};
use crate::fixedpoint::Amount;

pub type AccountNumber = i32;
pub type PhoneNumber = i64;

/**
 * The one account record kept by a session.
 *
 * Identity fields are private and only set by `create`, so nothing can
 * change them afterwards. The balance only moves through `deposit` and
 * `withdraw`.
 */
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    number: AccountNumber,
    holder: String,
    phone: PhoneNumber,
    balance: Amount,
}

impl Account {
    /// Creation takes every value as given, including a negative opening balance.
    pub fn create(
        number: AccountNumber,
        holder: impl Into<String>,
        phone: PhoneNumber,
        initial_balance: Amount,
    ) -> Self {
        let holder = holder.into();
        if initial_balance.is_negative() {
            warn!(number, balance = %initial_balance, "account opened with a negative balance");
        }
        info!(number, holder = %holder, "account created");
        Account {
            number,
            holder,
            phone,
            balance: initial_balance,
        }
    }

    /// Returns the new balance.
    pub fn deposit(&mut self, amount: Amount) -> Result<Amount, AccountError> {
        if !amount.is_positive() {
            debug!(%amount, "deposit rejected");
            return Err(AccountError::InvalidAmount(Operation::Deposit));
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AccountError::BalanceOverflow)?;
        debug!(%amount, balance = %self.balance, "deposit applied");
        Ok(self.balance)
    }

    /// Returns the new balance. Withdrawing the whole balance is allowed.
    pub fn withdraw(&mut self, amount: Amount) -> Result<Amount, AccountError> {
        if amount.is_positive() && amount <= self.balance {
            self.balance = self
                .balance
                .checked_sub(amount)
                .ok_or(AccountError::BalanceOverflow)?;
            debug!(%amount, balance = %self.balance, "withdrawal applied");
            Ok(self.balance)
        } else if amount > self.balance {
            debug!(%amount, balance = %self.balance, "withdrawal rejected: insufficient balance");
            Err(AccountError::InsufficientBalance)
        } else {
            debug!(%amount, "withdrawal rejected");
            Err(AccountError::InvalidAmount(Operation::Withdrawal))
        }
    }
}

/// The account details report, one field per line.
impl Display for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Account Number: {}", self.number)?;
        writeln!(f, "Account Holder: {}", self.holder)?;
        writeln!(f, "Phone Number: {}", self.phone)?;
        write!(f, "Current Balance: {}", self.balance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NUMBER: AccountNumber = 1001;
    const PHONE: PhoneNumber = 9998887777;
    const FIVE_HUNDRED: Amount = Amount::from_ten_thousandths(5_000_000);
    const TWO_FIFTY: Amount = Amount::from_ten_thousandths(2_500_000);
    const SEVEN_FIFTY: Amount = Amount::from_ten_thousandths(7_500_000);
    const ONE_THOUSAND: Amount = Amount::from_ten_thousandths(10_000_000);
    const MINUS_TEN: Amount = Amount::from_ten_thousandths(-100_000);

    fn asha(balance: Amount) -> Account {
        Account::create(NUMBER, "Asha", PHONE, balance)
    }

    mod create {
        use super::*;

        #[test]
        fn create_sets_every_field() {
            let account = asha(FIVE_HUNDRED);

            assert_eq!(account.number, 1001);
            assert_eq!(account.holder, "Asha");
            assert_eq!(account.phone, 9998887777);
            assert_eq!(account.balance, FIVE_HUNDRED);
        }
        #[test]
        fn negative_initial_balance_is_accepted() {
            assert_eq!(asha(MINUS_TEN).balance, MINUS_TEN);
        }
    }

    mod deposits {
        use super::*;

        #[test]
        fn deposit_works() {
            let mut account = asha(FIVE_HUNDRED);

            assert_eq!(account.deposit(TWO_FIFTY), Ok(SEVEN_FIFTY));
            assert_eq!(account.balance, SEVEN_FIFTY);
        }
        #[test]
        fn deposit_zero_rejected() {
            let mut account = asha(FIVE_HUNDRED);

            assert_eq!(
                account.deposit(Amount::ZERO),
                Err(AccountError::InvalidAmount(Operation::Deposit))
            );
            assert_eq!(account.balance, FIVE_HUNDRED);
        }
        #[test]
        fn deposit_negative_rejected() {
            let mut account = asha(FIVE_HUNDRED);

            assert_eq!(
                account.deposit(MINUS_TEN),
                Err(AccountError::InvalidAmount(Operation::Deposit))
            );
            assert_eq!(account.balance, FIVE_HUNDRED);
        }
        #[test]
        fn deposit_overflow_rejected() {
            let mut account = asha(Amount::from_ten_thousandths(i64::MAX));

            assert_eq!(
                account.deposit(TWO_FIFTY),
                Err(AccountError::BalanceOverflow)
            );
            assert_eq!(account.balance, Amount::from_ten_thousandths(i64::MAX));
        }
    }

    mod withdrawals {
        use super::*;

        #[test]
        fn withdrawal_works() {
            let mut account = asha(SEVEN_FIFTY);

            assert_eq!(account.withdraw(TWO_FIFTY), Ok(FIVE_HUNDRED));
        }
        #[test]
        fn withdrawal_of_whole_balance_leaves_zero() {
            let mut account = asha(SEVEN_FIFTY);

            assert_eq!(account.withdraw(SEVEN_FIFTY), Ok(Amount::ZERO));
            assert_eq!(account.balance, Amount::ZERO);
        }
        #[test]
        fn withdrawal_rejected_insufficient_balance() {
            let mut account = asha(SEVEN_FIFTY);

            assert_eq!(
                account.withdraw(ONE_THOUSAND),
                Err(AccountError::InsufficientBalance)
            );
            assert_eq!(account.balance, SEVEN_FIFTY);
        }
        #[test]
        fn withdrawal_rejected_non_positive() {
            let mut account = asha(SEVEN_FIFTY);

            for amount in [Amount::ZERO, MINUS_TEN] {
                assert_eq!(
                    account.withdraw(amount),
                    Err(AccountError::InvalidAmount(Operation::Withdrawal))
                );
            }
            assert_eq!(account.balance, SEVEN_FIFTY);
        }
        #[test]
        fn withdrawal_from_negative_balance_reports_insufficient() {
            let mut account = asha(MINUS_TEN);

            assert_eq!(
                account.withdraw(Amount::ZERO),
                Err(AccountError::InsufficientBalance)
            );
            assert_eq!(account.balance, MINUS_TEN);
        }
    }

    mod display {
        use super::*;

        #[test]
        fn display_lists_fields_in_order() {
            assert_eq!(
                asha(FIVE_HUNDRED).to_string(),
                "Account Number: 1001\n\
                 Account Holder: Asha\n\
                 Phone Number: 9998887777\n\
                 Current Balance: 500.0"
            );
        }
        #[test]
        fn display_is_idempotent() {
            let account = asha(FIVE_HUNDRED);
            let before = account.clone();

            assert_eq!(account.to_string(), account.to_string());
            assert_eq!(account, before);
        }
    }
}
