use core::marker::PhantomData;

use ink::env::call::{build_call, ExecutionInput, Selector};
use ink::env::Environment;

use crate::{AccountId, Balance, Error, Host, PriorityQuote, PrioritySignal};

/// `Host` backed by the ink! environment of the executing contract.
///
/// ink! cannot undo part of a message. Effects are discarded only when the
/// whole message fails, either by returning `Err` or by trapping. So:
///
/// - a failed outermost application leaves the host reverted and the
///   embedding contract must return the error from its message;
/// - a failed application inside another one traps at once, since the
///   enclosing action could otherwise catch the error and keep its effects;
/// - any checkpoint or commit on a reverted host traps.
///
/// The priority signal comes from `signal`, usually a closure over the
/// contract's chain extension.
pub struct InkHost<E, S> {
    signal: S,
    /// Applications currently open on this host.
    open: u32,
    reverted: bool,
    _env: PhantomData<fn() -> E>,
}

impl<E, S> InkHost<E, S>
where
    E: Environment<AccountId = AccountId, Balance = Balance>,
    S: PrioritySignal,
{
    pub fn new(signal: S) -> Self {
        Self {
            signal,
            open: 0,
            reverted: false,
            _env: PhantomData,
        }
    }

    /// Whether a failed application has left this message to be reverted.
    pub fn is_reverted(&self) -> bool {
        self.reverted
    }

    fn ensure_live(&self) {
        if self.reverted {
            panic!("tax gate reused after a failed application; reverting message");
        }
    }
}

impl<E, S: PrioritySignal> PrioritySignal for InkHost<E, S> {
    fn priority_quote(&self) -> Result<PriorityQuote, Error> {
        self.signal.priority_quote()
    }
}

impl<E, S> Host for InkHost<E, S>
where
    E: Environment<AccountId = AccountId, Balance = Balance>,
    S: PrioritySignal,
{
    /// Nesting level the checkpoint was taken at.
    type Checkpoint = u32;

    fn caller(&self) -> AccountId {
        ink::env::caller::<E>()
    }

    fn transferred_value(&self) -> Balance {
        ink::env::transferred_value::<E>()
    }

    fn transfer_native(&mut self, to: AccountId, amount: Balance) -> Result<(), Error> {
        ink::env::transfer::<E>(to, amount).map_err(|_| Error::NativeTransferFailed)
    }

    /// Calls `transfer_from(from, to, value) -> Result<(), _>` on `token`.
    /// The token's error enum is read as its variant index only: any `Err`,
    /// language error or trapped call counts as a rejection.
    fn transfer_from(
        &mut self,
        token: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Balance,
    ) -> bool {
        let result = build_call::<E>()
            .call(token)
            .exec_input(
                ExecutionInput::new(Selector::new(ink::selector_bytes!("transfer_from")))
                    .push_arg(from)
                    .push_arg(to)
                    .push_arg(amount),
            )
            .returns::<Result<(), u8>>()
            .try_invoke();

        matches!(result, Ok(Ok(Ok(()))))
    }

    fn checkpoint(&mut self) -> u32 {
        self.ensure_live();
        let level = self.open;
        self.open += 1;
        level
    }

    fn rollback(&mut self, level: u32) {
        self.open = level;
        if level > 0 {
            panic!("nested tax gate application failed; reverting message");
        }
        self.reverted = true;
    }

    fn commit(&mut self, level: u32) {
        self.ensure_live();
        self.open = level;
    }
}

// =========================================================================
// UNIT TESTS
// =========================================================================
