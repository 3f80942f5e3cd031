//! GrantHub Contract
//!
//! Administrative state of the GrantHub DAO:
//! - Pause flag (suspends normal operations)
//! - Emergency mode flag (heightened-restriction state)
//! - Read-only counters: total supply, treasury balance, oracle count
//!
//! The two flags are independent. Every mutating entry point is owner-only;
//! a non-owner always gets `Unauthorized` (100) whatever the current state.
//! Re-pausing a paused contract fails with `InvalidInput` (112); the other
//! transitions accept a call that leaves the flag unchanged.

use odra::prelude::*;
use odra::casper_types::U256;
use crate::access_control::OwnerGate;
use crate::errors::GrantHubError;
use crate::events::{
    ContractPaused, ContractUnpaused, EmergencyModeDisabled, EmergencyModeEnabled,
};
use crate::types::ContractState;

/// GrantHub administrative gate
#[odra::module(events = [
    ContractPaused,
    ContractUnpaused,
    EmergencyModeEnabled,
    EmergencyModeDisabled
])]
pub struct GrantHub {
    /// Owner access control
    owner_gate: SubModule<OwnerGate>,
    /// Whether normal operations are suspended
    paused: Var<bool>,
    /// Whether emergency mode is active
    emergency_mode: Var<bool>,
    /// Total governance token supply
    total_supply: Var<U256>,
    /// Treasury balance
    treasury_balance: Var<U256>,
    /// Number of registered oracles
    oracle_count: Var<u32>,
}

#[odra::module]
impl GrantHub {
    /// Initialize the contract. The deploying account becomes the owner.
    pub fn init(&mut self) {
        let deployer = self.env().caller();
        self.owner_gate.init(deployer);

        self.paused.set(false);
        self.emergency_mode.set(false);
        self.total_supply.set(U256::zero());
        self.treasury_balance.set(U256::zero());
        self.oracle_count.set(0);
    }

    // ========== Pause (Owner Only) ==========

    /// Pause the contract. Fails if it is already paused.
    pub fn pause_contract(&mut self) -> bool {
        let caller = self.owner_gate.require_owner();

        if self.is_contract_paused() {
            self.env().revert(GrantHubError::InvalidInput);
        }

        self.paused.set(true);
        self.env().emit_event(ContractPaused { by: caller });
        true
    }

    /// Unpause the contract
    pub fn unpause_contract(&mut self) -> bool {
        let caller = self.owner_gate.require_owner();

        if self.is_contract_paused() {
            self.paused.set(false);
            self.env().emit_event(ContractUnpaused { by: caller });
        }
        true
    }

    // ========== Emergency Mode (Owner Only) ==========

    /// Enable emergency mode
    pub fn enable_emergency_mode(&mut self) -> bool {
        let caller = self.owner_gate.require_owner();

        if !self.is_emergency_mode() {
            self.emergency_mode.set(true);
            self.env().emit_event(EmergencyModeEnabled { by: caller });
        }
        true
    }

    /// Disable emergency mode
    pub fn disable_emergency_mode(&mut self) -> bool {
        let caller = self.owner_gate.require_owner();

        if self.is_emergency_mode() {
            self.emergency_mode.set(false);
            self.env().emit_event(EmergencyModeDisabled { by: caller });
        }
        true
    }

    // ========== View Functions ==========

    /// Get total supply
    pub fn get_total_supply(&self) -> U256 {
        self.total_supply.get().unwrap_or(U256::zero())
    }

    /// Get treasury balance
    pub fn get_treasury_balance(&self) -> U256 {
        self.treasury_balance.get().unwrap_or(U256::zero())
    }

    /// Check if the contract is paused
    pub fn is_contract_paused(&self) -> bool {
        self.paused.get().unwrap_or(false)
    }

    /// Check if emergency mode is active
    pub fn is_emergency_mode(&self) -> bool {
        self.emergency_mode.get().unwrap_or(false)
    }

    /// Get the number of registered oracles
    pub fn get_oracle_count(&self) -> u32 {
        self.oracle_count.get().unwrap_or(0)
    }

    /// Get the owner address
    pub fn get_owner(&self) -> Option<Address> {
        self.owner_gate.get_owner()
    }

    /// Check if account is the owner
    pub fn is_owner(&self, account: Address) -> bool {
        self.owner_gate.is_owner(account)
    }

    /// Get the full administrative state in one call
    pub fn get_contract_state(&self) -> ContractState {
        ContractState {
            owner: self.get_owner(),
            paused: self.is_contract_paused(),
            emergency_mode: self.is_emergency_mode(),
            total_supply: self.get_total_supply(),
            treasury_balance: self.get_treasury_balance(),
            oracle_count: self.get_oracle_count(),
        }
    }
}
