use chrono::NaiveDate;
use rust_decimal::Decimal;

pub mod error;
use error::OperationError;

pub mod movement;
use movement::Movement;

use crate::clock::Clock;
use crate::{DAILY_DEPOSIT_LIMIT, DAILY_WITHDRAWAL_CAP};

/// A single account holding a balance and its full movement history.
///
/// The balance is derived state: it always equals the opening balance plus
/// the signed sum of recorded movements. Both mutating operations validate
/// fully before touching anything, so a rejected call leaves the account
/// exactly as it was.
#[derive(Debug, Default)]
pub struct Account {
    balance: Decimal,
    movements: Vec<Movement>,
}

impl Account {
    /// An empty account: zero balance, no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens an account with a trusted opening balance.
    ///
    /// The opening amount is set directly: it is not validated and no
    /// movement is recorded for it. Only later deposits and withdrawals go
    /// through validation and appear in the history.
    pub fn with_opening_balance(amount: Decimal) -> Self {
        Self {
            balance: amount,
            movements: Vec::new(),
        }
    }

    /// Adds `amount` to the balance and records a deposit movement dated
    /// `clock.today()`.
    ///
    /// Rejects non-positive amounts, and any deposit past the
    /// [`DAILY_DEPOSIT_LIMIT`]th of the day.
    pub fn deposit(&mut self, amount: Decimal, clock: &dyn Clock) -> Result<(), OperationError> {
        let today = clock.today();

        if let Err(rejection) = self.validate_deposit(amount, today) {
            tracing::debug!(%amount, %rejection, "deposit rejected");
            return Err(rejection);
        }

        self.balance += amount;
        self.movements.push(Movement::deposit(today, amount));
        tracing::debug!(%amount, balance = %self.balance, "deposit accepted");
        Ok(())
    }

    /// Subtracts `amount` from the balance and records a withdrawal
    /// movement dated `clock.today()`.
    ///
    /// Rejects non-positive amounts, amounts above the current balance,
    /// and amounts above what is left of today's [`DAILY_WITHDRAWAL_CAP`].
    pub fn withdraw(&mut self, amount: Decimal, clock: &dyn Clock) -> Result<(), OperationError> {
        let today = clock.today();

        if let Err(rejection) = self.validate_withdrawal(amount, today) {
            tracing::debug!(%amount, %rejection, "withdrawal rejected");
            return Err(rejection);
        }

        self.balance -= amount;
        self.movements.push(Movement::withdrawal(today, amount));
        tracing::debug!(%amount, balance = %self.balance, "withdrawal accepted");
        Ok(())
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// The recorded movements in the order the operations were accepted.
    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    /// Sum of the withdrawal amounts dated exactly `date`. Zero for any
    /// date with no withdrawals. Computed fresh from the history.
    pub fn total_withdrawn_on(&self, date: NaiveDate) -> Decimal {
        self.movements
            .iter()
            .filter(|movement| !movement.is_deposit() && movement.date() == date)
            .map(Movement::amount)
            .sum()
    }

    fn validate_deposit(&self, amount: Decimal, today: NaiveDate) -> Result<(), OperationError> {
        if amount <= Decimal::ZERO {
            return Err(OperationError::InvalidAmount { amount });
        }

        if self.deposits_on(today) >= DAILY_DEPOSIT_LIMIT {
            return Err(OperationError::DepositLimitExceeded {
                limit: DAILY_DEPOSIT_LIMIT,
            });
        }

        Ok(())
    }

    fn validate_withdrawal(&self, amount: Decimal, today: NaiveDate) -> Result<(), OperationError> {
        if amount <= Decimal::ZERO {
            return Err(OperationError::InvalidAmount { amount });
        }

        if self.balance - amount < Decimal::ZERO {
            return Err(OperationError::InsufficientBalance {
                balance: self.balance,
            });
        }

        let remaining = DAILY_WITHDRAWAL_CAP - self.total_withdrawn_on(today);
        if amount > remaining {
            return Err(OperationError::DailyWithdrawalLimitExceeded { remaining });
        }

        Ok(())
    }

    fn deposits_on(&self, date: NaiveDate) -> u32 {
        self.movements
            .iter()
            .filter(|movement| movement.is_deposit() && movement.date() == date)
            .count() as u32
    }
}
