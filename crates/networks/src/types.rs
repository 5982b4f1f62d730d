//! Network descriptor types.
//!
//! Serialized field names match the JSON blob persisted by the bridge UI
//! (`chainID`, `partnerChainID`, `rpcUrl`, ...), so stored custom chain
//! definitions round-trip unchanged.

use std::str::FromStr;

use alloy_primitives::Address;
use serde::{Deserialize, Deserializer, Serialize};

/// Parse an address literal. Only used for the hard-coded descriptor and
/// gateway tables.
pub(crate) fn address(value: &str) -> Address {
    Address::from_str(value).expect("invalid address literal")
}

/// Deserialize a chain ID that may be stored as either a JSON number or a
/// numeric string. Persisted blobs are not fully trusted, so the ID is
/// always coerced to a number on read.
fn deserialize_chain_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>, {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumberOrText {
        Number(u64),
        Text(String),
    }

    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(id) => Ok(id),
        NumberOrText::Text(text) => text.parse::<u64>().map_err(serde::de::Error::custom),
    }
}

/// Core rollup bridge contract addresses of a child chain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EthBridgeAddresses {
    /// The bridge contract
    pub bridge: Address,
    /// The delayed inbox
    pub inbox: Address,
    /// The outbox
    pub outbox: Address,
    /// The rollup contract
    pub rollup: Address,
    /// The sequencer inbox
    #[serde(rename = "sequencerInbox")]
    pub sequencer_inbox: Address,
}

/// Token bridge contract addresses of a child chain, on both the parent
/// (l1) and child (l2) side.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TokenBridgeAddresses {
    /// Custom gateway on the parent chain
    #[serde(rename = "l1CustomGateway")]
    pub l1_custom_gateway: Address,
    /// Standard ERC-20 gateway on the parent chain
    #[serde(rename = "l1ERC20Gateway")]
    pub l1_erc20_gateway: Address,
    /// Gateway router on the parent chain
    #[serde(rename = "l1GatewayRouter")]
    pub l1_gateway_router: Address,
    /// Multicall on the parent chain
    #[serde(rename = "l1MultiCall")]
    pub l1_multicall: Address,
    /// Proxy admin on the parent chain
    #[serde(rename = "l1ProxyAdmin")]
    pub l1_proxy_admin: Address,
    /// WETH on the parent chain
    #[serde(rename = "l1Weth")]
    pub l1_weth: Address,
    /// WETH gateway on the parent chain
    #[serde(rename = "l1WethGateway")]
    pub l1_weth_gateway: Address,
    /// Custom gateway on the child chain
    #[serde(rename = "l2CustomGateway")]
    pub l2_custom_gateway: Address,
    /// Standard ERC-20 gateway on the child chain
    #[serde(rename = "l2ERC20Gateway")]
    pub l2_erc20_gateway: Address,
    /// Gateway router on the child chain
    #[serde(rename = "l2GatewayRouter")]
    pub l2_gateway_router: Address,
    /// Multicall on the child chain
    #[serde(rename = "l2Multicall")]
    pub l2_multicall: Address,
    /// Proxy admin on the child chain
    #[serde(rename = "l2ProxyAdmin")]
    pub l2_proxy_admin: Address,
    /// WETH on the child chain
    #[serde(rename = "l2Weth")]
    pub l2_weth: Address,
    /// WETH gateway on the child chain
    #[serde(rename = "l2WethGateway")]
    pub l2_weth_gateway: Address,
}

/// A parent network descriptor: an L1, or an L2 acting as the parent of an
/// orbit chain.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ParentChain {
    /// The chain ID
    #[serde(rename = "chainID", deserialize_with = "deserialize_chain_id")]
    pub chain_id: u64,
    /// Display name
    pub name: String,
    /// Block explorer URL, empty for local devnets
    #[serde(rename = "explorerUrl", default)]
    pub explorer_url: String,
    /// Seconds between blocks. Parents without an explicit block time report
    /// the post-merge default of 12.
    #[serde(rename = "blockTime", default, skip_serializing_if = "Option::is_none")]
    pub block_time: Option<u64>,
    /// Whether the chain was registered at runtime rather than shipped with
    /// the bridge
    #[serde(rename = "isCustom", default)]
    pub is_custom: bool,
    /// Whether the chain is itself an Arbitrum chain
    #[serde(rename = "isArbitrum", default)]
    pub is_arbitrum: bool,
    /// Candidate child chain IDs
    #[serde(rename = "partnerChainIDs", default)]
    pub partner_chain_ids: Vec<u64>,
}

/// A child (rollup or orbit) chain descriptor.
///
/// Every non-identity field defaults, so a minimal persisted record with
/// only `chainID`, `partnerChainID` and `name` still parses.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ChildChain {
    /// The chain ID
    #[serde(rename = "chainID", deserialize_with = "deserialize_chain_id")]
    pub chain_id: u64,
    /// The parent chain ID
    #[serde(rename = "partnerChainID", default)]
    pub partner_chain_id: u64,
    /// Display name
    pub name: String,
    /// Block explorer URL, empty for local devnets
    #[serde(rename = "explorerUrl", default)]
    pub explorer_url: String,
    /// Number of parent-chain blocks in the challenge window
    #[serde(rename = "confirmPeriodBlocks", default)]
    pub confirm_period_blocks: u64,
    /// Lifetime of a retryable ticket, in seconds
    #[serde(rename = "retryableLifetimeSeconds", default)]
    pub retryable_lifetime_seconds: u64,
    /// First nitro block on the chain
    #[serde(rename = "nitroGenesisBlock", default)]
    pub nitro_genesis_block: u64,
    /// Parent-chain block at nitro genesis
    #[serde(rename = "nitroGenesisL1Block", default)]
    pub nitro_genesis_l1_block: u64,
    /// Deposit timeout, in milliseconds
    #[serde(rename = "depositTimeout", default)]
    pub deposit_timeout: u64,
    /// Whether the chain is an Arbitrum chain
    #[serde(rename = "isArbitrum", default)]
    pub is_arbitrum: bool,
    /// Whether the chain was registered at runtime rather than shipped with
    /// the bridge
    #[serde(rename = "isCustom", default)]
    pub is_custom: bool,
    /// Candidate child chain IDs, for chains that are themselves parents
    #[serde(rename = "partnerChainIDs", default)]
    pub partner_chain_ids: Vec<u64>,
    /// Address of the chain's fee token on the parent chain, when it is not
    /// ether
    #[serde(rename = "nativeToken", default, skip_serializing_if = "Option::is_none")]
    pub native_token: Option<Address>,
    /// Core bridge contract addresses
    #[serde(rename = "ethBridge", default, skip_serializing_if = "Option::is_none")]
    pub eth_bridge: Option<EthBridgeAddresses>,
    /// Token bridge contract addresses
    #[serde(rename = "tokenBridge", default, skip_serializing_if = "Option::is_none")]
    pub token_bridge: Option<TokenBridgeAddresses>,
}

/// ERC-20 metadata for a custom chain's native token.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Erc20Data {
    /// Token name
    pub name: String,
    /// Token symbol
    pub symbol: String,
    /// Token decimals
    pub decimals: u8,
    /// Token contract address on the parent chain
    pub address: Address,
}

/// A custom chain descriptor as persisted to local storage: a [`ChildChain`]
/// plus the RPC endpoint it is reachable at.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct ChainWithRpcUrl {
    /// The chain descriptor
    #[serde(flatten)]
    pub chain: ChildChain,
    /// RPC endpoint for the chain
    #[serde(rename = "rpcUrl", default)]
    pub rpc_url: String,
    /// ERC-20 metadata for the chain's native token, when it is not ether
    #[serde(rename = "nativeTokenData", default, skip_serializing_if = "Option::is_none")]
    pub native_token_data: Option<Erc20Data>,
}
