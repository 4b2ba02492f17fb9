use crate::{Balance, Error};

/// Factor applied to the premium by the baseline curve.
pub const DEFAULT_TAX_MULTIPLIER: u128 = 99;

/// Mapping from priority premium to owed amount.
///
/// Implementations must be deterministic, monotonic non-decreasing and map a
/// zero premium to zero. The gate trusts these properties and never checks
/// them at runtime.
pub trait TaxFunction {
    fn tax(&self, premium: Balance) -> Result<Balance, Error>;
}

/// Linear curve: `tax = factor × premium`, checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Multiplier {
    factor: u128,
}

impl Multiplier {
    pub const fn new(factor: u128) -> Self {
        Self { factor }
    }
}

impl Default for Multiplier {
    fn default() -> Self {
        Self::new(DEFAULT_TAX_MULTIPLIER)
    }
}

impl TaxFunction for Multiplier {
    fn tax(&self, premium: Balance) -> Result<Balance, Error> {
        premium
            .checked_mul(self.factor)
            .ok_or(Error::ArithmeticOverflow)
    }
}

/// Any plain function or closure with the right shape is a curve.
impl<F> TaxFunction for F
where
    F: Fn(Balance) -> Result<Balance, Error>,
{
    fn tax(&self, premium: Balance) -> Result<Balance, Error> {
        self(premium)
    }
}

// =========================================================================
// UNIT TESTS
// =========================================================================
