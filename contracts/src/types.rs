//! Types shared by the contract modules.

use odra::prelude::*;
use odra::casper_types::U256;

/// Snapshot of the whole administrative state, returned by
/// `GrantHub::get_contract_state`.
#[odra::odra_type]
pub struct ContractState {
    /// Account allowed to perform administrative actions
    pub owner: Option<Address>,
    /// Normal operations are suspended
    pub paused: bool,
    /// Heightened-restriction operating state
    pub emergency_mode: bool,
    /// Total governance token supply
    pub total_supply: U256,
    /// Treasury balance
    pub treasury_balance: U256,
    /// Number of registered oracles
    pub oracle_count: u32,
}
