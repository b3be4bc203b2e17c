use rust_decimal::Decimal;

pub mod account;
pub mod clock;

pub use account::error::OperationError;
pub use account::movement::{Movement, MovementKind};
pub use account::Account;
pub use clock::{Clock, FixedClock, SystemClock};

/// Maximum number of deposits accepted per calendar date.
pub const DAILY_DEPOSIT_LIMIT: u32 = 3;

/// Maximum cumulative amount withdrawable per calendar date.
pub const DAILY_WITHDRAWAL_CAP: Decimal = Decimal::ONE_THOUSAND;
