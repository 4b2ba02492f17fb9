#![cfg_attr(not(feature = "std"), no_std, no_main)]

//! # Priority Claims — Taxed Contract
//!
//! **Role:** First-come registry and native deposit book whose every
//! state-changing message sits behind the priority tax gate. Whoever pays the
//! block author a premium to land first pays 99× that premium to the
//! configured beneficiary as well.
//!
//! **Architecture:**
//! ```text
//!   [caller] ──claim / deposit / withdraw──► [Priority Claims]
//!                                                 │  action body
//!                                                 ▼
//!                              PriorityFeeExtension: gas_price, base_fee
//!                                                 │  tax = 99 × premium
//!                        ┌────────── Currency ────┴───────────┐
//!                        ▼                                    ▼
//!              Native: attached value              Token: transfer_from XCC
//!                        └────────────► beneficiary ◄─────────┘
//! ```
//!
//! Excess attached value is refunded to the caller when the message
//! completes. Any error reverts the whole message, action included.
//!
//! **Compatibility:** ink! v5 with a runtime exposing `PriorityFeeExtension`.

use ink::env::{DefaultEnvironment, Environment};

/// Host functions reporting the prices of the transaction being executed.
#[ink::chain_extension(extension = 0x5046)]
pub trait PriorityFeeExtension {
    type ErrorCode = PriorityFeeError;

    /// Price per unit of work declared by the current transaction.
    #[ink(function = 1, handle_status = false)]
    fn gas_price() -> u128;

    /// Network floor price for the current block.
    #[ink(function = 2, handle_status = false)]
    fn base_fee() -> u128;
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum PriorityFeeError {
    Unavailable,
}

impl ink::env::chain_extension::FromStatusCode for PriorityFeeError {
    fn from_status_code(status_code: u32) -> Result<(), Self> {
        match status_code {
            0 => Ok(()),
            _ => Err(Self::Unavailable),
        }
    }
}

/// `DefaultEnvironment` plus the priority fee extension.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum PriorityEnvironment {}

impl Environment for PriorityEnvironment {
    const MAX_EVENT_TOPICS: usize = <DefaultEnvironment as Environment>::MAX_EVENT_TOPICS;

    type AccountId = <DefaultEnvironment as Environment>::AccountId;
    type Balance = <DefaultEnvironment as Environment>::Balance;
    type Hash = <DefaultEnvironment as Environment>::Hash;
    type BlockNumber = <DefaultEnvironment as Environment>::BlockNumber;
    type Timestamp = <DefaultEnvironment as Environment>::Timestamp;

    type ChainExtension = PriorityFeeExtension;
}

#[ink::contract(env = crate::PriorityEnvironment)]
mod priority_claims {
    use ink::storage::Mapping;
    use tax_gate::{
        Currency, Host, InkHost, Multiplier, PriorityQuote, TaxConfiguration, TaxFunction,
        TaxGate, TaxReceipt, DEFAULT_TAX_MULTIPLIER,
    };

    // =========================================================================
    // CONSTANTS
    // =========================================================================

    /// Tax owed per unit of priority premium.
    pub const TAX_MULTIPLIER: u128 = DEFAULT_TAX_MULTIPLIER;

    type Signal = fn() -> Result<PriorityQuote, tax_gate::Error>;
    type ContractHost = InkHost<crate::PriorityEnvironment, Signal>;

    // =========================================================================
    // STORAGE
    // =========================================================================

    #[ink(storage)]
    pub struct PriorityClaims {
        /// Currency, beneficiary and owner of the gate.
        config: TaxConfiguration,

        /// Slot → first account that claimed it.
        claims: Mapping<u32, AccountId>,

        /// Native value parked by each depositor.
        deposits: Mapping<AccountId, Balance>,
        total_deposits: Balance,
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    /// Emitted for every successful gated message, zero tax included.
    #[ink(event)]
    pub struct TaxCollected {
        #[ink(topic)]
        payer: AccountId,
        #[ink(topic)]
        beneficiary: AccountId,
        premium: Balance,
        amount: Balance,
        currency: Currency,
    }

    #[ink(event)]
    pub struct OverpaymentRefunded {
        #[ink(topic)]
        payer: AccountId,
        amount: Balance,
    }

    #[ink(event)]
    pub struct CurrencyChanged {
        currency: Currency,
    }

    #[ink(event)]
    pub struct BeneficiaryChanged {
        #[ink(topic)]
        beneficiary: AccountId,
    }

    #[ink(event)]
    pub struct OwnershipTransferred {
        #[ink(topic)]
        previous_owner: AccountId,
        #[ink(topic)]
        new_owner: AccountId,
    }

    #[ink(event)]
    pub struct SlotClaimed {
        #[ink(topic)]
        slot: u32,
        #[ink(topic)]
        claimant: AccountId,
    }

    #[ink(event)]
    pub struct Deposited {
        #[ink(topic)]
        depositor: AccountId,
        amount: Balance,
        total_deposits: Balance,
    }

    #[ink(event)]
    pub struct Withdrawn {
        #[ink(topic)]
        depositor: AccountId,
        amount: Balance,
        total_deposits: Balance,
    }

    // =========================================================================
    // ERRORS
    // =========================================================================

    #[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Error {
        /// Caller is not the owner.
        Unauthorized,
        /// Attached value does not cover the tax (and any deposit).
        InsufficientPayment,
        /// Token refused to pull the tax.
        TransferRejected,
        ArithmeticOverflow,
        /// Runtime reported a floor price above the gas price.
        InvalidPrioritySignal,
        NativeTransferFailed,
        /// Slot already belongs to someone.
        SlotTaken,
        ZeroDeposit,
        /// Withdrawal larger than the caller's deposit.
        InsufficientDeposit,
    }

    impl From<tax_gate::Error> for Error {
        fn from(err: tax_gate::Error) -> Self {
            match err {
                tax_gate::Error::Unauthorized => Error::Unauthorized,
                tax_gate::Error::InsufficientPayment => Error::InsufficientPayment,
                tax_gate::Error::TransferRejected => Error::TransferRejected,
                tax_gate::Error::ArithmeticOverflow => Error::ArithmeticOverflow,
                tax_gate::Error::InvalidPrioritySignal => Error::InvalidPrioritySignal,
                tax_gate::Error::NativeTransferFailed => Error::NativeTransferFailed,
            }
        }
    }

    // =========================================================================
    // IMPLEMENTATION
    // =========================================================================

    impl PriorityClaims {
        #[ink(constructor)]
        pub fn new(beneficiary: AccountId, currency: Currency) -> Self {
            Self {
                config: TaxConfiguration::new(Self::env().caller(), beneficiary, currency),
                claims: Mapping::default(),
                deposits: Mapping::default(),
                total_deposits: 0,
            }
        }

        // =================================================================
        // GATED ACTIONS
        // =================================================================

        /// Take `slot` for the caller. Fails if anyone already holds it.
        #[ink(message, payable)]
        pub fn claim(&mut self, slot: u32) -> Result<TaxReceipt, Error> {
            let mut host = Self::host();
            let mut gate = TaxGate::new(Self::tax_curve());
            let claims = &mut self.claims;

            let (claimant, receipt) = gate.apply(&mut host, &self.config, |host, _| {
                if claims.contains(slot) {
                    return Err(Error::SlotTaken);
                }
                let claimant = host.caller();
                claims.insert(slot, &claimant);
                Ok(claimant)
            })?;

            self.emit_receipt(&receipt);
            self.env().emit_event(SlotClaimed { slot, claimant });
            Ok(receipt)
        }

        /// Park `amount` of the attached value. The attached value must
        /// cover the deposit plus the tax in native mode.
        #[ink(message, payable)]
        pub fn deposit(&mut self, amount: Balance) -> Result<TaxReceipt, Error> {
            if amount == 0 {
                return Err(Error::ZeroDeposit);
            }
            let mut host = Self::host();
            let mut gate = TaxGate::new(Self::tax_curve());
            let deposits = &mut self.deposits;
            let total = &mut self.total_deposits;

            let (depositor, receipt) = gate.apply(&mut host, &self.config, |host, gate| {
                gate.consume_value(host, amount)?;
                let depositor = host.caller();
                let held = deposits.get(depositor).unwrap_or(0);
                let updated = held.checked_add(amount).ok_or(Error::ArithmeticOverflow)?;
                deposits.insert(depositor, &updated);
                *total = total.checked_add(amount).ok_or(Error::ArithmeticOverflow)?;
                Ok::<_, Error>(depositor)
            })?;

            self.emit_receipt(&receipt);
            self.env().emit_event(Deposited {
                depositor,
                amount,
                total_deposits: self.total_deposits,
            });
            Ok(receipt)
        }

        /// Return `amount` of the caller's deposit.
        #[ink(message, payable)]
        pub fn withdraw(&mut self, amount: Balance) -> Result<TaxReceipt, Error> {
            let mut host = Self::host();
            let mut gate = TaxGate::new(Self::tax_curve());
            let deposits = &mut self.deposits;
            let total = &mut self.total_deposits;

            let (depositor, receipt) = gate.apply(&mut host, &self.config, |host, _| {
                let depositor = host.caller();
                let held = deposits.get(depositor).unwrap_or(0);
                if held < amount {
                    return Err(Error::InsufficientDeposit);
                }
                deposits.insert(depositor, &(held - amount));
                *total = total.checked_sub(amount).ok_or(Error::ArithmeticOverflow)?;
                host.transfer_native(depositor, amount)?;
                Ok(depositor)
            })?;

            self.emit_receipt(&receipt);
            self.env().emit_event(Withdrawn {
                depositor,
                amount,
                total_deposits: self.total_deposits,
            });
            Ok(receipt)
        }

        // =================================================================
        // TAX VIEWS
        // =================================================================

        /// Amount owed for `premium`.
        #[ink(message)]
        pub fn tax(&self, premium: Balance) -> Result<Balance, Error> {
            Ok(Self::tax_curve().tax(premium)?)
        }

        /// `(premium, tax)` for the transaction executing this call.
        #[ink(message)]
        pub fn quote_tax(&self) -> Result<(Balance, Balance), Error> {
            let host = Self::host();
            Ok(TaxGate::new(Self::tax_curve()).quote(&host)?)
        }

        // =================================================================
        // CONFIGURATION
        // =================================================================

        #[ink(message)]
        pub fn set_currency(&mut self, currency: Currency) -> Result<(), Error> {
            let cap = self.config.authorize(self.env().caller())?;
            self.config.set_currency(&cap, currency)?;
            self.env().emit_event(CurrencyChanged { currency });
            Ok(())
        }

        #[ink(message)]
        pub fn set_beneficiary(&mut self, beneficiary: AccountId) -> Result<(), Error> {
            let cap = self.config.authorize(self.env().caller())?;
            self.config.set_beneficiary(&cap, beneficiary)?;
            self.env().emit_event(BeneficiaryChanged { beneficiary });
            Ok(())
        }

        #[ink(message)]
        pub fn transfer_ownership(&mut self, new_owner: AccountId) -> Result<(), Error> {
            let previous_owner = self.config.owner();
            let cap = self.config.authorize(self.env().caller())?;
            self.config.transfer_ownership(cap, new_owner)?;
            self.env().emit_event(OwnershipTransferred {
                previous_owner,
                new_owner,
            });
            Ok(())
        }

        #[ink(message)]
        pub fn currency(&self) -> Currency {
            self.config.currency()
        }

        #[ink(message)]
        pub fn beneficiary(&self) -> AccountId {
            self.config.beneficiary()
        }

        #[ink(message)]
        pub fn owner(&self) -> AccountId {
            self.config.owner()
        }

        // =================================================================
        // STATE VIEWS
        // =================================================================

        #[ink(message)]
        pub fn claimant_of(&self, slot: u32) -> Option<AccountId> {
            self.claims.get(slot)
        }

        #[ink(message)]
        pub fn deposit_of(&self, depositor: AccountId) -> Balance {
            self.deposits.get(depositor).unwrap_or(0)
        }

        #[ink(message)]
        pub fn total_deposits(&self) -> Balance {
            self.total_deposits
        }

        // =================================================================
        // INTERNAL
        // =================================================================

        fn tax_curve() -> Multiplier {
            Multiplier::new(TAX_MULTIPLIER)
        }

        fn host() -> ContractHost {
            InkHost::new(Self::priority_quote as Signal)
        }

        fn priority_quote() -> Result<PriorityQuote, tax_gate::Error> {
            let gas_price = Self::env().extension().gas_price();
            let base_fee = Self::env().extension().base_fee();
            Ok(PriorityQuote::new(gas_price, base_fee))
        }

        fn emit_receipt(&self, receipt: &TaxReceipt) {
            self.env().emit_event(TaxCollected {
                payer: receipt.payer,
                beneficiary: receipt.beneficiary,
                premium: receipt.premium,
                amount: receipt.amount,
                currency: receipt.currency,
            });
            if receipt.refunded > 0 {
                self.env().emit_event(OverpaymentRefunded {
                    payer: receipt.payer,
                    amount: receipt.refunded,
                });
            }
        }
    }

    // =========================================================================
    // UNIT TESTS
    // =========================================================================

}
