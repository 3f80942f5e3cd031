//! Owner Gate
//!
//! Single-owner access control for the GrantHub contract.
//! - The owner is fixed once, at initialization
//! - No entry point can replace or renounce it
//! - Every administrative entry point calls `require_owner` before touching state

use odra::prelude::*;
use crate::errors::GrantHubError;

/// Owner-only access control, embedded into contracts as a submodule.
#[odra::module]
pub struct OwnerGate {
    /// Contract owner
    owner: Var<Address>,
}

#[odra::module]
impl OwnerGate {
    /// Record the owner
    pub fn init(&mut self, owner: Address) {
        self.owner.set(owner);
    }

    /// Get the owner address
    pub fn get_owner(&self) -> Option<Address> {
        self.owner.get()
    }

    /// Check if account is the owner
    pub fn is_owner(&self, account: Address) -> bool {
        self.owner.get().map_or(false, |owner| owner == account)
    }

    /// Revert with `Unauthorized` unless the current caller is the owner.
    /// Returns the caller on success.
    pub fn require_owner(&self) -> Address {
        let caller = self.env().caller();
        if !self.is_owner(caller) {
            self.env().revert(GrantHubError::Unauthorized);
        }
        caller
    }
}
