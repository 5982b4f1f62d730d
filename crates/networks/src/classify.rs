//! Chain classification predicates.

use crate::{chain::ChainId, custom};

/// Classification flags for a chain ID, computed in one pass.
///
/// Persisted custom chains count as orbit chains and as testnets; reading
/// them is best-effort, so an unreadable store degrades to the flags of an
/// unknown chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkFlags {
    /// Ethereum mainnet
    pub is_ethereum_mainnet: bool,
    /// Ethereum mainnet or one of its testnets (including the local devnet)
    pub is_ethereum_mainnet_or_testnet: bool,
    /// Goerli
    pub is_goerli: bool,
    /// Sepolia
    pub is_sepolia: bool,
    /// Any Arbitrum chain (One, Nova, Goerli, Sepolia, or local)
    pub is_arbitrum: bool,
    /// Arbitrum One
    pub is_arbitrum_one: bool,
    /// Arbitrum Nova
    pub is_arbitrum_nova: bool,
    /// Arbitrum Goerli
    pub is_arbitrum_goerli: bool,
    /// Arbitrum Sepolia
    pub is_arbitrum_sepolia: bool,
    /// Neither an Ethereum-family chain nor an Arbitrum chain
    pub is_orbit_chain: bool,
    /// Xai testnet
    pub is_xai_testnet: bool,
    /// Deriw devnet
    pub is_deriw_devnet: bool,
    /// Deriw testnet
    pub is_deriw_testnet: bool,
    /// Stylus testnet
    pub is_stylus_testnet: bool,
    /// Any testnet, including persisted custom chains
    pub is_testnet: bool,
    /// Whether the bridge supports the chain
    pub is_supported: bool,
}

/// Classifies a chain ID.
///
/// ```
/// use arbridge_networks::{is_network, ChainId};
///
/// let flags = is_network(ChainId::ArbitrumOne as u64);
/// assert!(flags.is_arbitrum && flags.is_supported && !flags.is_testnet);
/// ```
pub fn is_network(chain_id: u64) -> NetworkFlags {
    let is_ethereum_mainnet = chain_id == ChainId::Ethereum as u64;

    let is_goerli = chain_id == ChainId::Goerli as u64;
    let is_sepolia = chain_id == ChainId::Sepolia as u64;
    let is_local = chain_id == ChainId::Local as u64;

    let is_arbitrum_one = chain_id == ChainId::ArbitrumOne as u64;
    let is_arbitrum_nova = chain_id == ChainId::ArbitrumNova as u64;
    let is_arbitrum_goerli = chain_id == ChainId::ArbitrumGoerli as u64;
    let is_arbitrum_sepolia = chain_id == ChainId::ArbitrumSepolia as u64;
    let is_arbitrum_local = chain_id == ChainId::ArbitrumLocal as u64;

    let is_xai_testnet = chain_id == ChainId::XaiTestnet as u64;
    let is_stylus_testnet = chain_id == ChainId::StylusTestnet as u64;
    let is_deriw_devnet = chain_id == ChainId::DeriwDevnet as u64;
    let is_deriw_testnet = chain_id == ChainId::DeriwTestnet as u64;

    let is_ethereum_mainnet_or_testnet =
        is_ethereum_mainnet || is_goerli || is_sepolia || is_local;

    let is_arbitrum = is_arbitrum_one ||
        is_arbitrum_nova ||
        is_arbitrum_goerli ||
        is_arbitrum_local ||
        is_arbitrum_sepolia;

    let is_custom_orbit_chain = custom::custom_chains_or_empty()
        .iter()
        .any(|chain| chain.chain.chain_id == chain_id);

    let is_testnet = is_goerli ||
        is_local ||
        is_arbitrum_goerli ||
        is_sepolia ||
        is_arbitrum_sepolia ||
        is_xai_testnet ||
        is_deriw_devnet ||
        is_stylus_testnet ||
        is_custom_orbit_chain ||
        is_deriw_testnet;

    let is_supported = is_arbitrum_one ||
        is_arbitrum_nova ||
        is_ethereum_mainnet ||
        is_goerli ||
        is_arbitrum_goerli ||
        is_sepolia ||
        is_arbitrum_sepolia ||
        is_stylus_testnet ||
        is_xai_testnet ||
        is_deriw_devnet ||
        is_deriw_testnet;

    NetworkFlags {
        is_ethereum_mainnet,
        is_ethereum_mainnet_or_testnet,
        is_goerli,
        is_sepolia,
        is_arbitrum,
        is_arbitrum_one,
        is_arbitrum_nova,
        is_arbitrum_goerli,
        is_arbitrum_sepolia,
        is_orbit_chain: !is_ethereum_mainnet_or_testnet && !is_arbitrum,
        is_xai_testnet,
        is_deriw_devnet,
        is_deriw_testnet,
        is_stylus_testnet,
        is_testnet,
        is_supported,
    }
}
