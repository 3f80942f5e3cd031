//! Contract error definitions.

use odra::prelude::*;

/// GrantHub user errors.
///
/// Codes are part of the public interface: clients match on the numeric
/// value, so existing variants must keep their discriminants.
#[repr(u16)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum GrantHubError {
    // Access control
    Unauthorized = 100,

    // Input validation
    InvalidInput = 112,
}

impl GrantHubError {
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    pub const fn message(&self) -> &'static str {
        match self {
            GrantHubError::Unauthorized => "Caller is not the contract owner",
            GrantHubError::InvalidInput => "Invalid input for current contract state",
        }
    }
}

impl core::fmt::Display for GrantHubError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.message())
    }
}

impl From<GrantHubError> for OdraError {
    fn from(error: GrantHubError) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            OdraError::user(error as u16)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            OdraError::user(error as u16, error.message())
        }
    }
}
