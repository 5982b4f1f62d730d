//! Network metadata registry for the arbridge UI backend.
//!
//! This crate maps chain IDs to the metadata the bridge needs (RPC
//! endpoints, explorer URLs, bridge contract addresses, block timing
//! parameters), persists user-added custom chain definitions through
//! [`arbridge_storage`], and provides classification and display helpers
//! over the registered chains.

/// Chain ID enumeration and fixed chain-ID lists.
pub mod chain;

/// Chain classification predicates.
pub mod classify;

/// Fixed protocol data: legacy per-token gateway address tables.
pub mod constants;

/// Persistence of user-added custom chains.
pub mod custom;

/// Hard-coded network descriptors.
pub mod descriptors;

/// Display helpers: network names, logos, and supported-network listing.
pub mod display;

/// Error types for the networks crate.
pub mod error;

/// The shared network registry and its lookup and registration operations.
pub mod registry;

/// Network descriptor types.
pub mod types;

pub use chain::{ChainId, SUPPORTED_CUSTOM_ORBIT_PARENT_CHAINS};
pub use classify::{is_network, NetworkFlags};
pub use custom::{
    custom_chain_by_id, list_custom_chains, remove_custom_chain, save_custom_chain,
    CUSTOM_CHAIN_STORAGE_KEY,
};
pub use display::{get_network_logo, get_network_name, get_supported_networks, LogoVariant};
pub use error::Error;
pub use registry::{
    get_block_time, get_confirm_period_blocks, get_default_l2_chain_ids, get_explorer_url,
    get_l2_chain_ids, get_rpc_url, map_custom_chain_to_network_data, register_chain,
    register_local_network, register_network, RegisterLocalNetworkParams, Registry,
};
pub use types::{
    ChainWithRpcUrl, ChildChain, Erc20Data, EthBridgeAddresses, ParentChain,
    TokenBridgeAddresses,
};
