use crate::AccountId;

/// Settlement asset. Exactly one mode is active at a time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub enum Currency {
    /// Push-payment: the caller attaches the environment's base asset.
    #[default]
    Native,
    /// Pull-payment: the gate draws from the caller's allowance on this token.
    Token(AccountId),
}

impl Currency {
    pub fn is_native(&self) -> bool {
        matches!(self, Currency::Native)
    }
}
