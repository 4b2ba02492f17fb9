use crate::{Balance, Error};

/// Per-invocation prices reported by the host environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub struct PriorityQuote {
    /// Price per unit of work the transaction declared.
    pub specified_price: Balance,
    /// Network floor price for inclusion.
    pub floor_price: Balance,
}

impl PriorityQuote {
    pub fn new(specified_price: Balance, floor_price: Balance) -> Self {
        Self {
            specified_price,
            floor_price,
        }
    }

    /// `specified − floor`. A floor above the specified price can only come
    /// from a broken host and is rejected rather than clamped.
    pub fn premium(&self) -> Result<Balance, Error> {
        self.specified_price
            .checked_sub(self.floor_price)
            .ok_or(Error::InvalidPrioritySignal)
    }
}

/// Source of the priority signal for the current invocation.
pub trait PrioritySignal {
    fn priority_quote(&self) -> Result<PriorityQuote, Error>;
}

impl<F> PrioritySignal for F
where
    F: Fn() -> Result<PriorityQuote, Error>,
{
    fn priority_quote(&self) -> Result<PriorityQuote, Error> {
        self()
    }
}
