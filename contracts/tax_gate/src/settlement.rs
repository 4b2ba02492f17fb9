use crate::{AccountId, Balance, Currency, Error, Host};

/// One collection order. Built by the gate, consumed immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettlementRequest {
    pub payer: AccountId,
    pub beneficiary: AccountId,
    pub amount: Balance,
    pub currency: Currency,
}

impl SettlementRequest {
    /// Move `amount` to the beneficiary through the path `currency` selects.
    ///
    /// `available` is the attached native value not yet spent in this unit
    /// of work; only the native path reads it. A zero amount moves nothing
    /// on either path.
    pub fn execute<H: Host>(&self, host: &mut H, available: Balance) -> Result<(), Error> {
        match self.currency {
            Currency::Native => {
                if available < self.amount {
                    return Err(Error::InsufficientPayment);
                }
                if self.amount == 0 {
                    return Ok(());
                }
                host.transfer_native(self.beneficiary, self.amount)
            }
            Currency::Token(token) => {
                if self.amount == 0 {
                    return Ok(());
                }
                if !host.transfer_from(token, self.payer, self.beneficiary, self.amount) {
                    return Err(Error::TransferRejected);
                }
                Ok(())
            }
        }
    }
}
