//! In-memory host for unit tests: one contract account, native balances,
//! token balances and allowances granted to the contract, plus a snapshot
//! stack for checkpoints.

use std::cell::Cell;
use std::collections::BTreeMap;

use crate::{AccountId, Balance, Error, Host, PriorityQuote, PrioritySignal};

pub fn account(byte: u8) -> AccountId {
    AccountId::from([byte; 32])
}

pub fn alice() -> AccountId {
    account(0x01)
}

pub fn bob() -> AccountId {
    account(0x02)
}

pub fn charlie() -> AccountId {
    account(0x03)
}

/// The executing contract.
pub fn contract() -> AccountId {
    account(0xC0)
}

pub fn token() -> AccountId {
    account(0x70)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Ledger {
    native: BTreeMap<AccountId, Balance>,
    /// (token, holder) → balance
    tokens: BTreeMap<(AccountId, AccountId), Balance>,
    /// (token, holder) → allowance granted to the contract
    allowances: BTreeMap<(AccountId, AccountId), Balance>,
    /// Effects written by protected actions.
    effects: Vec<u32>,
}

pub struct MockHost {
    caller: AccountId,
    attached: Balance,
    quote: PriorityQuote,
    ledger: Ledger,
    snapshots: Vec<Ledger>,
    refuse_native: bool,
    token_calls: u32,
    quote_reads: Cell<u32>,
}

impl MockHost {
    /// `attached` is already credited to the contract, as a runtime does
    /// before the message body runs. Prices default to a zero premium.
    pub fn new(caller: AccountId, attached: Balance) -> Self {
        let mut ledger = Ledger::default();
        ledger.native.insert(contract(), attached);
        Self {
            caller,
            attached,
            quote: PriorityQuote::new(100, 100),
            ledger,
            snapshots: Vec::new(),
            refuse_native: false,
            token_calls: 0,
            quote_reads: Cell::new(0),
        }
    }

    pub fn with_prices(mut self, specified_price: Balance, floor_price: Balance) -> Self {
        self.quote = PriorityQuote::new(specified_price, floor_price);
        self
    }

    pub fn refuse_native_transfers(&mut self) {
        self.refuse_native = true;
    }

    pub fn mint(&mut self, token: AccountId, holder: AccountId, amount: Balance) {
        *self.ledger.tokens.entry((token, holder)).or_default() += amount;
    }

    pub fn approve(&mut self, token: AccountId, holder: AccountId, amount: Balance) {
        self.ledger.allowances.insert((token, holder), amount);
    }

    pub fn record(&mut self, effect: u32) {
        self.ledger.effects.push(effect);
    }

    pub fn effects(&self) -> &[u32] {
        &self.ledger.effects
    }

    pub fn native_balance(&self, who: AccountId) -> Balance {
        self.ledger.native.get(&who).copied().unwrap_or(0)
    }

    pub fn token_balance(&self, token: AccountId, who: AccountId) -> Balance {
        self.ledger.tokens.get(&(token, who)).copied().unwrap_or(0)
    }

    pub fn allowance(&self, token: AccountId, who: AccountId) -> Balance {
        self.ledger.allowances.get(&(token, who)).copied().unwrap_or(0)
    }

    pub fn token_calls(&self) -> u32 {
        self.token_calls
    }

    pub fn quote_reads(&self) -> u32 {
        self.quote_reads.get()
    }

    pub fn open_checkpoints(&self) -> usize {
        self.snapshots.len()
    }
}

impl PrioritySignal for MockHost {
    fn priority_quote(&self) -> Result<PriorityQuote, Error> {
        self.quote_reads.set(self.quote_reads.get() + 1);
        Ok(self.quote)
    }
}

impl Host for MockHost {
    type Checkpoint = usize;

    fn caller(&self) -> AccountId {
        self.caller
    }

    fn transferred_value(&self) -> Balance {
        self.attached
    }

    fn transfer_native(&mut self, to: AccountId, amount: Balance) -> Result<(), Error> {
        let held = self.native_balance(contract());
        if self.refuse_native || held < amount {
            return Err(Error::NativeTransferFailed);
        }
        self.ledger.native.insert(contract(), held - amount);
        *self.ledger.native.entry(to).or_default() += amount;
        Ok(())
    }

    fn transfer_from(
        &mut self,
        token: AccountId,
        from: AccountId,
        to: AccountId,
        amount: Balance,
    ) -> bool {
        self.token_calls += 1;
        let allowance = self.allowance(token, from);
        let balance = self.token_balance(token, from);
        if allowance < amount || balance < amount {
            return false;
        }
        self.ledger.allowances.insert((token, from), allowance - amount);
        self.ledger.tokens.insert((token, from), balance - amount);
        *self.ledger.tokens.entry((token, to)).or_default() += amount;
        true
    }

    fn checkpoint(&mut self) -> usize {
        self.snapshots.push(self.ledger.clone());
        self.snapshots.len() - 1
    }

    fn rollback(&mut self, checkpoint: usize) {
        if let Some(saved) = self.snapshots.get(checkpoint).cloned() {
            self.ledger = saved;
        }
        self.snapshots.truncate(checkpoint);
    }

    fn commit(&mut self, checkpoint: usize) {
        self.snapshots.truncate(checkpoint);
    }
}
