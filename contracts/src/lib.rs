//! GrantHub Contracts
//!
//! Administrative gate of the GrantHub DAO on Casper.
//!
//! ## Architecture
//!
//! - **GrantHub**: Pause flag, emergency mode flag and read-only counters
//! - **OwnerGate**: Single-owner access control, embedded as a submodule
//!
//! ## Error Codes
//!
//! - `100` Unauthorized: caller is not the owner
//! - `112` InvalidInput: redundant pause request

#![cfg_attr(target_arch = "wasm32", no_std)]

#[cfg(target_arch = "wasm32")]
extern crate alloc;

// Re-export odra for downstream usage
pub use odra;

// Core module declarations
pub mod types;
pub mod errors;
pub mod events;

// Contract modules
pub mod access_control;
pub mod grant_hub;
