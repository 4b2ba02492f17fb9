#![cfg_attr(not(feature = "std"), no_std)]

//! # Priority Tax Gate
//!
//! **Role:** Settlement core shared by every contract that wants to tax the
//! priority premium its callers pay to the block author.
//!
//! **Flow:**
//! ```text
//!   caller ──► [protected action] ──► read priority signal
//!                                          │
//!                         premium = gas_price − base_fee
//!                                          │
//!                                tax = TaxFunction(premium)
//!                                          │
//!              ┌───────────── Currency ────┴──────────────┐
//!              ▼                                          ▼
//!   Native: push attached value               Token: pull via transfer_from
//!              └──────────────► beneficiary ◄─────────────┘
//! ```
//!
//! Any failure rolls the host back to the checkpoint taken on entry: the
//! action and the settlement commit together or not at all.
//!
//! The crate carries no contract of its own. `InkHost` binds the gate to
//! `ink::env`; tests bind it to an in-memory ledger.

pub mod config;
pub mod currency;
pub mod error;
pub mod gate;
pub mod host;
pub mod ink_host;
pub mod settlement;
pub mod signal;
pub mod tax;

#[cfg(test)]
mod mock;

pub use config::{OwnerCap, TaxConfiguration};
pub use currency::Currency;
pub use error::Error;
pub use gate::{TaxGate, TaxReceipt};
pub use host::Host;
pub use ink_host::InkHost;
pub use settlement::SettlementRequest;
pub use signal::{PriorityQuote, PrioritySignal};
pub use tax::{Multiplier, TaxFunction, DEFAULT_TAX_MULTIPLIER};

/// Account type shared with `ink::env::DefaultEnvironment`.
pub type AccountId = ink::primitives::AccountId;

/// Balance type shared with `ink::env::DefaultEnvironment`.
pub type Balance = u128;
