//! Events emitted on administrative state transitions.
//!
//! Only effective transitions are recorded; a call that leaves a flag at the
//! value it already had emits nothing.

use odra::prelude::*;

/// The contract was paused.
#[odra::event]
pub struct ContractPaused {
    pub by: Address,
}

/// The contract was unpaused.
#[odra::event]
pub struct ContractUnpaused {
    pub by: Address,
}

/// Emergency mode was switched on.
#[odra::event]
pub struct EmergencyModeEnabled {
    pub by: Address,
}

/// Emergency mode was switched off.
#[odra::event]
pub struct EmergencyModeDisabled {
    pub by: Address,
}
