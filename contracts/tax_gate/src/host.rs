use crate::{AccountId, Balance, Error, PrioritySignal};

/// Execution environment seen by the gate.
///
/// One host value covers exactly one unit of work: a single top-level call
/// from a single payer.
pub trait Host: PrioritySignal {
    /// Opaque marker for a restorable state.
    type Checkpoint;

    /// Account that initiated the unit of work and pays the tax.
    fn caller(&self) -> AccountId;

    /// Native value attached to the unit of work.
    fn transferred_value(&self) -> Balance;

    /// Push `amount` of the native asset from the executing contract to `to`.
    fn transfer_native(&mut self, to: AccountId, amount: Balance) -> Result<(), Error>;

    /// Pull `amount` of `token` from `from` to `to` against the executing
    /// contract's allowance. `false` on any rejection.
    fn transfer_from(
        &mut self,
        token: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Balance,
    ) -> bool;

    fn checkpoint(&mut self) -> Self::Checkpoint;

    /// Discard every effect recorded since `checkpoint` was taken. A host
    /// that cannot discard them in place must abort the whole unit of work.
    fn rollback(&mut self, checkpoint: Self::Checkpoint);

    /// Keep every effect recorded since `checkpoint` was taken.
    fn commit(&mut self, checkpoint: Self::Checkpoint);
}
