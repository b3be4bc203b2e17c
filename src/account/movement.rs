use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// Direction of a movement. The amount is always a positive magnitude;
/// direction lives here, never in the sign of the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MovementKind {
    Deposit,
    Withdrawal,
}

/// One recorded deposit or withdrawal.
///
/// Immutable once created. Only the owning account constructs movements,
/// exactly one per accepted operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Movement {
    date: NaiveDate,
    amount: Decimal,
    kind: MovementKind,
}

impl Movement {
    pub(crate) fn deposit(date: NaiveDate, amount: Decimal) -> Self {
        Self {
            date,
            amount,
            kind: MovementKind::Deposit,
        }
    }

    pub(crate) fn withdrawal(date: NaiveDate, amount: Decimal) -> Self {
        Self {
            date,
            amount,
            kind: MovementKind::Withdrawal,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn kind(&self) -> MovementKind {
        self.kind
    }

    pub fn is_deposit(&self) -> bool {
        self.kind == MovementKind::Deposit
    }
}
