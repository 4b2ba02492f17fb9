use crate::{
    AccountId, Balance, Currency, Error, Host, SettlementRequest, TaxConfiguration, TaxFunction,
};

/// Outcome of one successful gate application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub struct TaxReceipt {
    pub payer: AccountId,
    pub beneficiary: AccountId,
    pub premium: Balance,
    pub amount: Balance,
    pub currency: Currency,
    /// Unspent attached value returned to the payer. Only the outermost
    /// application of a unit of work refunds.
    pub refunded: Balance,
}

/// Wraps protected actions with tax collection.
///
/// A gate value lives for exactly one unit of work. It tracks how much of the
/// attached native value has already been spent (`neg_delta`) so repeated and
/// nested applications share one budget instead of each seeing the full
/// attached amount.
pub struct TaxGate<T> {
    tax_fn: T,
    neg_delta: Balance,
    depth: u32,
}

impl<T: TaxFunction> TaxGate<T> {
    pub fn new(tax_fn: T) -> Self {
        Self {
            tax_fn,
            neg_delta: 0,
            depth: 0,
        }
    }

    /// Attached native value already spent in this unit of work.
    pub fn value_adjustment(&self) -> Balance {
        self.neg_delta
    }

    /// Attached native value still unspent in this unit of work.
    pub fn available_value<H: Host>(&self, host: &H) -> Balance {
        host.transferred_value().saturating_sub(self.neg_delta)
    }

    /// Claim `amount` of the attached value for the protected action itself.
    ///
    /// Actions that keep attached value must claim it here, otherwise it is
    /// refunded when the outermost application completes.
    pub fn consume_value<H: Host>(&mut self, host: &H, amount: Balance) -> Result<(), Error> {
        if self.available_value(host) < amount {
            return Err(Error::InsufficientPayment);
        }
        self.charge(amount)
    }

    /// `(premium, tax)` for the current invocation without settling.
    pub fn quote<H: Host>(&self, host: &H) -> Result<(Balance, Balance), Error> {
        let premium = host.priority_quote()?.premium()?;
        let amount = self.tax_fn.tax(premium)?;
        Ok((premium, amount))
    }

    /// Run `action`, then collect the tax owed for the current priority
    /// premium.
    ///
    /// The action sees pre-tax state. The premium is read only after it
    /// returns. On any error, from the action or from settlement, the host
    /// is rolled back to the state on entry and the spent-value counter is
    /// restored, so the caller observes either both effects or neither.
    /// Hosts without partial rollback (`InkHost`) abort the unit of work
    /// instead of letting an enclosing action carry on past the failure.
    pub fn apply<H, A, R, E>(
        &mut self,
        host: &mut H,
        config: &TaxConfiguration,
        action: A,
    ) -> Result<(R, TaxReceipt), E>
    where
        H: Host,
        A: FnOnce(&mut H, &mut Self) -> Result<R, E>,
        E: From<Error>,
    {
        let checkpoint = host.checkpoint();
        let entry_delta = self.neg_delta;
        self.depth += 1;

        let outcome = self.run(host, config, action);

        self.depth -= 1;
        match outcome {
            Ok(done) => {
                host.commit(checkpoint);
                Ok(done)
            }
            Err(err) => {
                host.rollback(checkpoint);
                self.neg_delta = entry_delta;
                Err(err)
            }
        }
    }

    fn run<H, A, R, E>(
        &mut self,
        host: &mut H,
        config: &TaxConfiguration,
        action: A,
    ) -> Result<(R, TaxReceipt), E>
    where
        H: Host,
        A: FnOnce(&mut H, &mut Self) -> Result<R, E>,
        E: From<Error>,
    {
        let output = action(&mut *host, &mut *self)?;

        let (premium, amount) = self.quote(host)?;
        let request = SettlementRequest {
            payer: host.caller(),
            beneficiary: config.beneficiary(),
            amount,
            currency: config.currency(),
        };
        let available = self.available_value(host);
        request.execute(host, available)?;
        if request.currency.is_native() {
            self.charge(amount)?;
        }

        let refunded = if self.depth == 1 {
            self.refund_excess(host)?
        } else {
            0
        };

        Ok((
            output,
            TaxReceipt {
                payer: request.payer,
                beneficiary: request.beneficiary,
                premium,
                amount,
                currency: request.currency,
                refunded,
            },
        ))
    }

    fn refund_excess<H: Host>(&mut self, host: &mut H) -> Result<Balance, Error> {
        let excess = self.available_value(host);
        if excess == 0 {
            return Ok(0);
        }
        let payer = host.caller();
        host.transfer_native(payer, excess)?;
        self.charge(excess)?;
        Ok(excess)
    }

    fn charge(&mut self, amount: Balance) -> Result<(), Error> {
        self.neg_delta = self
            .neg_delta
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        Ok(())
    }
}

// =========================================================================
// UNIT TESTS
// =========================================================================
