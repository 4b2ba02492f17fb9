use crate::{AccountId, Currency, Error};

/// Proof that `holder` was the owner when the capability was minted.
///
/// Setters re-check the holder against the current owner, so a capability
/// outlives neither an ownership transfer nor the call that minted it.
#[derive(Debug, PartialEq, Eq)]
pub struct OwnerCap {
    holder: AccountId,
}

/// Settlement configuration owned by the embedding contract.
#[derive(Debug, Clone, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct TaxConfiguration {
    currency: Currency,
    beneficiary: AccountId,
    owner: AccountId,
}

impl TaxConfiguration {
    pub fn new(owner: AccountId, beneficiary: AccountId, currency: Currency) -> Self {
        Self {
            currency,
            beneficiary,
            owner,
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn beneficiary(&self) -> AccountId {
        self.beneficiary
    }

    pub fn owner(&self) -> AccountId {
        self.owner
    }

    /// Mint the owner capability for `caller`.
    pub fn authorize(&self, caller: AccountId) -> Result<OwnerCap, Error> {
        if caller != self.owner {
            return Err(Error::Unauthorized);
        }
        Ok(OwnerCap { holder: caller })
    }

    pub fn set_currency(&mut self, cap: &OwnerCap, currency: Currency) -> Result<(), Error> {
        self.check(cap)?;
        self.currency = currency;
        Ok(())
    }

    pub fn set_beneficiary(&mut self, cap: &OwnerCap, beneficiary: AccountId) -> Result<(), Error> {
        self.check(cap)?;
        self.beneficiary = beneficiary;
        Ok(())
    }

    /// Hand the owner role to `new_owner`. Consumes the capability.
    pub fn transfer_ownership(&mut self, cap: OwnerCap, new_owner: AccountId) -> Result<(), Error> {
        self.check(&cap)?;
        self.owner = new_owner;
        Ok(())
    }

    fn check(&self, cap: &OwnerCap) -> Result<(), Error> {
        if cap.holder != self.owner {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }
}

// =========================================================================
// UNIT TESTS
// =========================================================================
