//! Error types for the networks crate

/// Errors that can occur during registry and custom chain operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A generic error with a message
    #[error("Error: {0}")]
    Generic(String),

    /// A block time was requested for a chain that is not a registered
    /// parent chain
    #[error("couldn't get block time. unexpected chain ID: {0}")]
    BlockTimeLookup(u64),

    /// A confirm period was requested for a chain that is not registered
    #[error("couldn't get confirm period blocks. unexpected chain ID: {0}")]
    ConfirmPeriodLookup(u64),

    /// The chain is already present in the registry
    #[error("chain {0} is already registered")]
    AlreadyRegistered(u64),

    /// The chain does not declare the chain it was registered with as its
    /// parent
    #[error("chain {child} does not declare {parent} as its parent chain")]
    ParentMismatch {
        /// The child chain ID
        child: u64,
        /// The parent chain ID the registration was attempted against
        parent: u64,
    },

    /// The chain ID is reserved and can never be stored as a custom chain
    #[error("chain {0} is reserved and cannot be saved as a custom chain")]
    ReservedChain(u64),

    /// An error from the local storage layer
    #[error("Storage error: {0}")]
    Storage(#[from] arbridge_storage::error::Error),
}
