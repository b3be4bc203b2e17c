use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

/// Rejection outcomes of the mutating account operations.
///
/// These are expected validation results, not faults. Each variant carries
/// the structured data a caller needs to branch on or display, so nothing
/// has to be parsed back out of the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
pub enum OperationError {
    /// The amount was zero or negative.
    #[error("amount must be positive, got {amount}")]
    InvalidAmount { amount: Decimal },

    /// The daily number-of-deposits cap was already reached today.
    #[error("no more than {limit} deposits accepted per day")]
    DepositLimitExceeded { limit: u32 },

    /// The withdrawal would drive the balance below zero.
    #[error("cannot withdraw more than the current balance of {balance}")]
    InsufficientBalance { balance: Decimal },

    /// The withdrawal would exceed today's remaining withdrawal allowance.
    #[error("daily withdrawal cap exceeded, {remaining} remaining today")]
    DailyWithdrawalLimitExceeded { remaining: Decimal },
}
