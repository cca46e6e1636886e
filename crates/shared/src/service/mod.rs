pub mod banking;
mod roundup;
mod savings;

pub use self::roundup::{DEFAULT_MINOR_UNIT_DIVISOR, RoundUpCalculator, compute_round_up};
pub use self::savings::{RoundUpService, RoundUpSummary};
