use crate::model::{MonetaryAmount, Transaction};
use std::num::NonZeroU64;

/// Minor units per whole unit for two-decimal currencies such as GBP.
pub const DEFAULT_MINOR_UNIT_DIVISOR: NonZeroU64 = NonZeroU64::new(100).unwrap();

/// Sums, over settled outgoing transactions, the amount needed to reach the
/// next whole currency unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundUpCalculator {
    divisor: NonZeroU64,
}

impl Default for RoundUpCalculator {
    fn default() -> Self {
        Self::new(DEFAULT_MINOR_UNIT_DIVISOR)
    }
}

impl RoundUpCalculator {
    pub fn new(divisor: NonZeroU64) -> Self {
        Self { divisor }
    }

    pub fn divisor(&self) -> NonZeroU64 {
        self.divisor
    }

    pub fn contribution(&self, amount: &MonetaryAmount) -> u64 {
        let divisor = self.divisor.get();
        let remainder = amount.minor_units % divisor;

        if remainder == 0 { 0 } else { divisor - remainder }
    }

    pub fn compute(&self, transactions: &[Transaction]) -> u64 {
        transactions
            .iter()
            .filter(|tx| tx.is_settled_outgoing())
            .map(|tx| self.contribution(&tx.amount))
            .sum()
    }
}

pub fn compute_round_up(transactions: &[Transaction]) -> u64 {
    RoundUpCalculator::default().compute(transactions)
}
