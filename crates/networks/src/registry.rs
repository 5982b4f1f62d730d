//! The shared network registry.
//!
//! The registry owns the mutable chain metadata tables: RPC URLs, explorer
//! URLs, the parent-to-default-child map, and the registered network
//! descriptors. All mutation goes through explicit registration operations
//! behind one process-wide `RwLock`, so the tables can be touched from any
//! thread and lookups for unregistered chains fail loudly instead of
//! falling back silently.
//!
//! Two generations of child registries are kept, mirroring the two external
//! registration APIs the bridge historically wrote to: `register_network`
//! fills the legacy parent/child pair table, `register_chain` the newer
//! orbit chain table. `get_confirm_period_blocks` consults both.

use std::collections::{BTreeSet, HashMap};
use std::sync::RwLock;

use lazy_static::lazy_static;
use tracing::error;

use crate::{
    chain::ChainId,
    custom,
    descriptors::{
        ARBITRUM_GOERLI, ARBITRUM_GOERLI_PARENT, ARBITRUM_NOVA, ARBITRUM_NOVA_PARENT,
        ARBITRUM_ONE, ARBITRUM_ONE_PARENT, ARBITRUM_SEPOLIA, ARBITRUM_SEPOLIA_PARENT,
        DEFAULT_L1_NETWORK, DEFAULT_L2_NETWORK, DERIW_DEVNET, DERIW_TESTNET, ETHEREUM, GOERLI,
        SEPOLIA, XAI_TESTNET,
    },
    error::Error,
    types::{ChainWithRpcUrl, ChildChain, ParentChain},
};
use arbridge_common::utils::env::{get_env, load_env_with_fallback};

/// Block time reported for registered parent chains without an explicit
/// value, in seconds.
const DEFAULT_BLOCK_TIME: u64 = 12;

lazy_static! {
    /// The process-wide registry, seeded with the static tables.
    static ref REGISTRY: RwLock<Registry> = RwLock::new(Registry::bootstrap());
}

/// Resolve an Ethereum-family RPC URL: the env override when set, otherwise
/// the Infura endpoint. The Infura API key is only required when no
/// override is present; a missing key is fatal, as the bridge cannot run
/// without mainnet-family endpoints.
fn rpc_url_from_env(env_key: &str, infura_subdomain: &str) -> String {
    match get_env(env_key) {
        Some(url) if !url.is_empty() => url,
        _ => {
            let key = get_env("INFURA_API_KEY").expect("Infura API key not provided");
            format!("https://{infura_subdomain}.infura.io/v3/{key}")
        }
    }
}

/// RPC URL for the local Ethereum devnet.
pub fn local_l1_rpc_url() -> String {
    load_env_with_fallback("LOCAL_ETHEREUM_RPC_URL", "http://localhost:8545")
}

/// RPC URL for the local Arbitrum devnet.
pub fn local_l2_rpc_url() -> String {
    load_env_with_fallback("LOCAL_ARBITRUM_RPC_URL", "http://localhost:8547")
}

/// The network registry: lookup tables plus registered network descriptors.
#[derive(Debug, Default)]
pub struct Registry {
    rpc_urls: HashMap<u64, String>,
    explorer_urls: HashMap<u64, String>,
    default_child_chains: HashMap<u64, BTreeSet<u64>>,
    parent_chains: HashMap<u64, ParentChain>,
    child_networks: HashMap<u64, ChildChain>,
    orbit_chains: HashMap<u64, ChildChain>,
}

impl Registry {
    /// Builds the registry seeded with the static tables: RPC and explorer
    /// URLs for every shipped chain, the default child-chain pairings, and
    /// the descriptors of the chains the bridge supports out of the box.
    pub fn bootstrap() -> Self {
        let mut registry = Self::default();

        // L1
        registry.set_rpc_url(
            ChainId::Ethereum as u64,
            rpc_url_from_env("ETHEREUM_RPC_URL", "mainnet"),
        );
        // L1 Testnets
        registry.set_rpc_url(ChainId::Goerli as u64, rpc_url_from_env("GOERLI_RPC_URL", "goerli"));
        registry.set_rpc_url(
            ChainId::Sepolia as u64,
            rpc_url_from_env("SEPOLIA_RPC_URL", "sepolia"),
        );
        // L2
        registry.set_rpc_url(ChainId::ArbitrumOne as u64, "https://arb1.arbitrum.io/rpc");
        registry.set_rpc_url(ChainId::ArbitrumNova as u64, "https://nova.arbitrum.io/rpc");
        // L2 Testnets
        registry
            .set_rpc_url(ChainId::ArbitrumGoerli as u64, "https://goerli-rollup.arbitrum.io/rpc");
        registry
            .set_rpc_url(ChainId::ArbitrumSepolia as u64, "https://sepolia-rollup.arbitrum.io/rpc");
        // Orbit Testnets
        registry.set_rpc_url(ChainId::XaiTestnet as u64, "https://testnet.xai-chain.net/rpc");
        registry
            .set_rpc_url(ChainId::StylusTestnet as u64, "https://stylus-testnet.arbitrum.io/rpc");
        registry.set_rpc_url(ChainId::DeriwDevnet as u64, "https://rpc.dev.deriw.com");
        registry.set_rpc_url(ChainId::DeriwTestnet as u64, "https://rpc.test.deriw.com");

        for (chain_id, explorer_url) in [
            (ChainId::Ethereum, "https://etherscan.io"),
            (ChainId::Goerli, "https://goerli.etherscan.io"),
            (ChainId::Sepolia, "https://sepolia.etherscan.io"),
            (ChainId::ArbitrumOne, "https://arbiscan.io"),
            (ChainId::ArbitrumNova, "https://nova.arbiscan.io"),
            (ChainId::ArbitrumGoerli, "https://goerli.arbiscan.io"),
            (ChainId::ArbitrumSepolia, "https://sepolia.arbiscan.io"),
            (ChainId::XaiTestnet, "https://testnet-explorer.xai-chain.net"),
            (ChainId::StylusTestnet, "https://stylus-testnet-explorer.arbitrum.io"),
            (ChainId::DeriwDevnet, "https://explorer.dev.deriw.com"),
            (ChainId::DeriwTestnet, "https://explorer.test.deriw.com"),
        ] {
            registry.set_explorer_url(chain_id as u64, explorer_url);
        }

        for (chain_id, children) in [
            (ChainId::Ethereum, vec![ChainId::ArbitrumOne, ChainId::ArbitrumNova]),
            (ChainId::Goerli, vec![ChainId::ArbitrumGoerli]),
            (ChainId::Sepolia, vec![ChainId::ArbitrumSepolia]),
            (ChainId::ArbitrumOne, vec![ChainId::ArbitrumOne]),
            (ChainId::ArbitrumNova, vec![ChainId::ArbitrumNova]),
            (ChainId::ArbitrumGoerli, vec![ChainId::ArbitrumGoerli, ChainId::XaiTestnet]),
            (
                ChainId::ArbitrumSepolia,
                vec![
                    ChainId::ArbitrumSepolia,
                    ChainId::StylusTestnet,
                    ChainId::DeriwTestnet,
                    ChainId::DeriwDevnet,
                ],
            ),
            (ChainId::XaiTestnet, vec![ChainId::XaiTestnet]),
            (ChainId::StylusTestnet, vec![ChainId::StylusTestnet]),
            (ChainId::DeriwDevnet, vec![ChainId::DeriwDevnet]),
            (ChainId::DeriwTestnet, vec![ChainId::DeriwTestnet]),
        ] {
            for child in children {
                registry.add_default_child(chain_id as u64, child as u64);
            }
        }

        for parent in [
            &*ETHEREUM,
            &*GOERLI,
            &*SEPOLIA,
            &*ARBITRUM_ONE_PARENT,
            &*ARBITRUM_NOVA_PARENT,
            &*ARBITRUM_GOERLI_PARENT,
            &*ARBITRUM_SEPOLIA_PARENT,
        ] {
            registry.parent_chains.insert(parent.chain_id, parent.clone());
        }

        for child in [&*ARBITRUM_ONE, &*ARBITRUM_NOVA, &*ARBITRUM_GOERLI, &*ARBITRUM_SEPOLIA] {
            registry.child_networks.insert(child.chain_id, child.clone());
        }

        for chain in [&*XAI_TESTNET, &*DERIW_DEVNET, &*DERIW_TESTNET] {
            registry.orbit_chains.insert(chain.chain_id, chain.clone());
        }

        registry
    }

    /// Returns the RPC URL for a chain, if one is registered.
    pub fn rpc_url(&self, chain_id: u64) -> Option<String> {
        self.rpc_urls.get(&chain_id).cloned()
    }

    /// Assigns the RPC URL for a chain, replacing any existing entry.
    pub fn set_rpc_url(&mut self, chain_id: u64, rpc_url: impl Into<String>) {
        self.rpc_urls.insert(chain_id, rpc_url.into());
    }

    /// Returns the explorer URL for a chain. Unknown chains fall back to the
    /// mainnet explorer, so the result is never empty.
    pub fn explorer_url(&self, chain_id: u64) -> String {
        self.explorer_urls
            .get(&chain_id)
            .or_else(|| self.explorer_urls.get(&(ChainId::Ethereum as u64)))
            .cloned()
            .unwrap_or_else(|| "https://etherscan.io".to_string())
    }

    /// Assigns the explorer URL for a chain, replacing any existing entry.
    pub fn set_explorer_url(&mut self, chain_id: u64, explorer_url: impl Into<String>) {
        self.explorer_urls.insert(chain_id, explorer_url.into());
    }

    /// Returns the seconds between blocks of a registered parent chain.
    /// Errors when the chain is not a registered parent.
    pub fn block_time(&self, chain_id: u64) -> Result<u64, Error> {
        let parent = self.parent_chains.get(&chain_id).ok_or(Error::BlockTimeLookup(chain_id))?;
        Ok(parent.block_time.unwrap_or(DEFAULT_BLOCK_TIME))
    }

    /// Returns the challenge window of a registered child chain, in parent
    /// chain blocks. Both child registries are consulted; errors when the
    /// chain is registered in neither.
    pub fn confirm_period_blocks(&self, chain_id: u64) -> Result<u64, Error> {
        let chain = self
            .child_networks
            .get(&chain_id)
            .or_else(|| self.orbit_chains.get(&chain_id))
            .ok_or(Error::ConfirmPeriodLookup(chain_id))?;
        Ok(chain.confirm_period_blocks)
    }

    /// Returns the default child chain IDs paired with a chain, in ascending
    /// order.
    pub fn default_children(&self, chain_id: u64) -> Vec<u64> {
        self.default_child_chains
            .get(&chain_id)
            .map(|children| children.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Pairs a child chain with a parent in the default child-chain map.
    /// Children are kept as a set, so repeated pairing is idempotent.
    pub fn add_default_child(&mut self, chain_id: u64, child_chain_id: u64) {
        self.default_child_chains.entry(chain_id).or_default().insert(child_chain_id);
    }

    /// Replaces the default child chain entry for a chain.
    pub fn set_default_children(&mut self, chain_id: u64, children: impl IntoIterator<Item = u64>) {
        self.default_child_chains.insert(chain_id, children.into_iter().collect());
    }

    /// Registers a parent/child network pair in the legacy pair table.
    ///
    /// The child must declare the parent as its partner chain, and must not
    /// already be registered. An already-known parent is left untouched.
    pub fn register_network(
        &mut self,
        parent: ParentChain,
        child: ChildChain,
    ) -> Result<(), Error> {
        if child.partner_chain_id != parent.chain_id {
            return Err(Error::ParentMismatch { child: child.chain_id, parent: parent.chain_id });
        }
        if self.child_networks.contains_key(&child.chain_id) {
            return Err(Error::AlreadyRegistered(child.chain_id));
        }

        self.parent_chains.entry(parent.chain_id).or_insert(parent);
        self.child_networks.insert(child.chain_id, child);

        Ok(())
    }

    /// Registers a parent chain and child chain pair in the orbit chain
    /// table. Same validation rules as [`Registry::register_network`].
    pub fn register_chain(&mut self, parent: ParentChain, chain: ChildChain) -> Result<(), Error> {
        if chain.partner_chain_id != parent.chain_id {
            return Err(Error::ParentMismatch { child: chain.chain_id, parent: parent.chain_id });
        }
        if self.orbit_chains.contains_key(&chain.chain_id) {
            return Err(Error::AlreadyRegistered(chain.chain_id));
        }

        self.parent_chains.entry(parent.chain_id).or_insert(parent);
        self.orbit_chains.insert(chain.chain_id, chain);

        Ok(())
    }
}

/// Returns the RPC URL for a chain, if one is registered.
pub fn get_rpc_url(chain_id: u64) -> Option<String> {
    REGISTRY.read().expect("registry lock poisoned").rpc_url(chain_id)
}

/// Returns the explorer URL for a chain, falling back to the mainnet
/// explorer for unknown chains. Never empty.
pub fn get_explorer_url(chain_id: u64) -> String {
    REGISTRY.read().expect("registry lock poisoned").explorer_url(chain_id)
}

/// Returns the seconds between blocks of a registered parent chain.
///
/// Callers must only pass chain IDs already registered as parents; anything
/// else is an error, not a default.
pub fn get_block_time(chain_id: u64) -> Result<u64, Error> {
    REGISTRY.read().expect("registry lock poisoned").block_time(chain_id)
}

/// Returns the challenge window of a registered child chain, in parent
/// chain blocks.
///
/// Callers must only pass chain IDs already registered as children;
/// anything else is an error, not a default.
pub fn get_confirm_period_blocks(chain_id: u64) -> Result<u64, Error> {
    REGISTRY.read().expect("registry lock poisoned").confirm_period_blocks(chain_id)
}

/// Returns the default child chain IDs paired with a chain.
pub fn get_default_l2_chain_ids(chain_id: u64) -> Vec<u64> {
    REGISTRY.read().expect("registry lock poisoned").default_children(chain_id)
}

/// Registers a parent/child network pair in the legacy pair table of the
/// shared registry.
pub fn register_network(parent: ParentChain, child: ChildChain) -> Result<(), Error> {
    REGISTRY.write().expect("registry lock poisoned").register_network(parent, child)
}

/// Registers a parent chain and child chain pair in the orbit chain table
/// of the shared registry.
pub fn register_chain(parent: ParentChain, chain: ChildChain) -> Result<(), Error> {
    REGISTRY.write().expect("registry lock poisoned").register_chain(parent, chain)
}

/// Parameters for [`register_local_network`].
#[derive(Debug, Clone)]
pub struct RegisterLocalNetworkParams {
    /// The local parent chain
    pub parent: ParentChain,
    /// The local child chain
    pub child: ChildChain,
}

impl Default for RegisterLocalNetworkParams {
    fn default() -> Self {
        Self { parent: DEFAULT_L1_NETWORK.clone(), child: DEFAULT_L2_NETWORK.clone() }
    }
}

/// Registers a local devnet pair with the shared registry.
///
/// Assigns the local RPC URLs to both chains, pairs them in the default
/// child-chain map, then attempts both registration calls. The two child
/// registries apply their own validation, so each call is attempted
/// independently: a failure in the first is logged and does not block the
/// second.
pub fn register_local_network(params: RegisterLocalNetworkParams) {
    let RegisterLocalNetworkParams { parent, child } = params;

    let mut registry = REGISTRY.write().expect("registry lock poisoned");

    registry.set_rpc_url(parent.chain_id, local_l1_rpc_url());
    registry.set_rpc_url(child.chain_id, local_l2_rpc_url());

    registry.set_default_children(parent.chain_id, [child.chain_id]);
    registry.set_default_children(child.chain_id, [child.chain_id]);

    if let Err(e) = registry.register_network(parent.clone(), child.clone()) {
        error!("failed to register local network: {e}");
    }
    let _ = registry.register_chain(parent, child);
}

/// Splices a custom chain's data into the shared registry so that
/// subsequent lookups treat it as fully registered.
///
/// Must be invoked once per session for each custom chain the user wants
/// active. Safe to invoke again: URL entries are overwritten and
/// child-chain pairings are kept as a set.
pub fn map_custom_chain_to_network_data(chain: &ChainWithRpcUrl) {
    let mut registry = REGISTRY.write().expect("registry lock poisoned");

    // pair the chain with its declared parent, and with itself
    registry.add_default_child(chain.chain.partner_chain_id, chain.chain.chain_id);
    registry.add_default_child(chain.chain.chain_id, chain.chain.chain_id);

    registry.set_rpc_url(chain.chain.chain_id, chain.rpc_url.clone());
    registry.set_explorer_url(chain.chain.chain_id, chain.chain.explorer_url.clone());
}

/// Returns the candidate child chain IDs for a parent chain: the fixed
/// pairings the bridge ships with, plus any persisted custom chains whose
/// declared parent matches.
pub fn get_l2_chain_ids(l1_chain_id: u64) -> Vec<u64> {
    let mut chain_ids = match ChainId::from_id(l1_chain_id) {
        // Ethereum as the parent chain
        Some(ChainId::Ethereum) => {
            return vec![ChainId::ArbitrumOne as u64, ChainId::ArbitrumNova as u64]
        }
        Some(ChainId::Goerli) => vec![ChainId::ArbitrumGoerli as u64, ChainId::XaiTestnet as u64],
        Some(ChainId::Sepolia) => {
            vec![ChainId::ArbitrumSepolia as u64, ChainId::DeriwTestnet as u64]
        }
        Some(ChainId::Local) => vec![ChainId::ArbitrumLocal as u64],
        // Arbitrum as the parent chain
        Some(ChainId::ArbitrumGoerli) => {
            vec![ChainId::Goerli as u64, ChainId::XaiTestnet as u64]
        }
        Some(ChainId::ArbitrumSepolia) => {
            vec![ChainId::Sepolia as u64, ChainId::DeriwTestnet as u64]
        }
        Some(ChainId::ArbitrumLocal) => vec![ChainId::Local as u64],
        _ => return Vec::new(),
    };

    let custom_parent = match ChainId::from_id(l1_chain_id) {
        Some(ChainId::Goerli) | Some(ChainId::ArbitrumGoerli) => ChainId::ArbitrumGoerli,
        Some(ChainId::Sepolia) | Some(ChainId::ArbitrumSepolia) => ChainId::ArbitrumSepolia,
        _ => ChainId::ArbitrumLocal,
    };
    chain_ids.extend(custom::custom_chain_ids_for(custom_parent as u64));

    chain_ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::ChainId;
    use arbridge_common::utils::env::set_env;
    use serial_test::serial;

    fn setup() {
        // registry bootstrap needs an Infura key unless RPC overrides are set
        set_env("INFURA_API_KEY", "test-key");
    }

    #[test]
    #[serial]
    fn test_explorer_url_known_chains() {
        setup();
        assert_eq!(get_explorer_url(ChainId::Ethereum as u64), "https://etherscan.io");
        assert_eq!(get_explorer_url(ChainId::ArbitrumOne as u64), "https://arbiscan.io");
        assert_eq!(get_explorer_url(ChainId::XaiTestnet as u64), "https://testnet-explorer.xai-chain.net");
        // the table entry wins over the descriptor's explorer URL
        assert_eq!(get_explorer_url(ChainId::DeriwTestnet as u64), "https://explorer.test.deriw.com");
    }

    #[test]
    #[serial]
    fn test_explorer_url_unknown_chain_falls_back_to_mainnet() {
        setup();
        assert_eq!(get_explorer_url(0), "https://etherscan.io");
        assert_eq!(get_explorer_url(987654321), "https://etherscan.io");
    }

    #[test]
    #[serial]
    fn test_explorer_url_never_empty_for_known_chains() {
        setup();
        for chain in [
            ChainId::Ethereum,
            ChainId::Goerli,
            ChainId::Local,
            ChainId::Sepolia,
            ChainId::ArbitrumOne,
            ChainId::ArbitrumNova,
            ChainId::ArbitrumGoerli,
            ChainId::ArbitrumSepolia,
            ChainId::ArbitrumLocal,
            ChainId::XaiTestnet,
            ChainId::StylusTestnet,
            ChainId::DeriwDevnet,
            ChainId::DeriwTestnet,
        ] {
            assert!(!get_explorer_url(chain as u64).is_empty());
        }
    }

    #[test]
    #[serial]
    fn test_rpc_url_static_entries() {
        setup();
        assert_eq!(
            get_rpc_url(ChainId::ArbitrumOne as u64),
            Some("https://arb1.arbitrum.io/rpc".to_string())
        );
        assert_eq!(
            get_rpc_url(ChainId::DeriwTestnet as u64),
            Some("https://rpc.test.deriw.com".to_string())
        );
        assert!(get_rpc_url(5555555).is_none());
    }

    #[test]
    #[serial]
    fn test_block_time_registered_parents() {
        setup();
        assert_eq!(get_block_time(ChainId::Ethereum as u64).expect("lookup failed"), 12);
        // parents without an explicit block time report the default
        assert_eq!(get_block_time(ChainId::ArbitrumSepolia as u64).expect("lookup failed"), 12);
    }

    #[test]
    #[serial]
    fn test_block_time_unknown_chain_errors() {
        setup();
        let result = get_block_time(424242);
        assert!(matches!(result, Err(Error::BlockTimeLookup(424242))));
    }

    #[test]
    #[serial]
    fn test_confirm_period_blocks_registered_chains() {
        setup();
        assert_eq!(
            get_confirm_period_blocks(ChainId::ArbitrumOne as u64).expect("lookup failed"),
            45818
        );
        // orbit chains are found through the second registry
        assert_eq!(
            get_confirm_period_blocks(ChainId::XaiTestnet as u64).expect("lookup failed"),
            20
        );
    }

    #[test]
    #[serial]
    fn test_confirm_period_blocks_unknown_chain_errors() {
        setup();
        let result = get_confirm_period_blocks(424242);
        assert!(matches!(result, Err(Error::ConfirmPeriodLookup(424242))));
    }

    #[test]
    #[serial]
    fn test_register_local_network_defaults() {
        setup();
        register_local_network(RegisterLocalNetworkParams::default());

        assert_eq!(get_rpc_url(1337), Some(local_l1_rpc_url()));
        assert_eq!(get_rpc_url(412346), Some(local_l2_rpc_url()));
        assert_eq!(get_default_l2_chain_ids(1337), vec![412346]);
        assert_eq!(get_default_l2_chain_ids(412346), vec![412346]);
        assert_eq!(get_block_time(1337).expect("lookup failed"), 10);
        assert_eq!(get_confirm_period_blocks(412346).expect("lookup failed"), 20);
    }

    #[test]
    #[serial]
    fn test_register_local_network_twice_is_tolerated() {
        setup();
        register_local_network(RegisterLocalNetworkParams::default());
        // second registration fails inside the registry, is logged, and the
        // tables stay intact
        register_local_network(RegisterLocalNetworkParams::default());

        assert_eq!(get_default_l2_chain_ids(1337), vec![412346]);
        assert_eq!(get_block_time(1337).expect("lookup failed"), 10);
    }

    #[test]
    #[serial]
    fn test_register_network_parent_mismatch() {
        setup();
        let parent = ETHEREUM.clone();
        let mut child = DEFAULT_L2_NETWORK.clone();
        child.chain_id = 555001;
        child.partner_chain_id = 424242;

        let result = register_network(parent, child);
        assert!(matches!(
            result,
            Err(Error::ParentMismatch { child: 555001, parent: 1 })
        ));
    }

    #[test]
    #[serial]
    fn test_map_custom_chain_is_idempotent() {
        setup();
        let chain = ChainWithRpcUrl {
            chain: ChildChain {
                chain_id: 660279,
                partner_chain_id: ChainId::ArbitrumSepolia as u64,
                name: "Xai Local".to_string(),
                explorer_url: "https://explorer.chain660279.example".to_string(),
                ..Default::default()
            },
            rpc_url: "https://rpc.chain660279.example".to_string(),
            native_token_data: None,
        };

        map_custom_chain_to_network_data(&chain);
        map_custom_chain_to_network_data(&chain);

        let children = get_default_l2_chain_ids(ChainId::ArbitrumSepolia as u64);
        assert_eq!(children.iter().filter(|&&id| id == 660279).count(), 1);
        assert_eq!(get_default_l2_chain_ids(660279), vec![660279]);
        assert_eq!(get_rpc_url(660279), Some("https://rpc.chain660279.example".to_string()));
        assert_eq!(get_explorer_url(660279), "https://explorer.chain660279.example");
    }

    #[test]
    #[serial]
    fn test_get_l2_chain_ids_ethereum() {
        setup();
        assert_eq!(
            get_l2_chain_ids(ChainId::Ethereum as u64),
            vec![ChainId::ArbitrumOne as u64, ChainId::ArbitrumNova as u64]
        );
    }

    #[test]
    #[serial]
    fn test_get_l2_chain_ids_unknown_parent() {
        setup();
        assert!(get_l2_chain_ids(424242).is_empty());
    }

    #[test]
    #[serial]
    fn test_default_children_bootstrap() {
        setup();
        let children = get_default_l2_chain_ids(ChainId::Ethereum as u64);
        assert!(children.contains(&(ChainId::ArbitrumOne as u64)));
        assert!(children.contains(&(ChainId::ArbitrumNova as u64)));
    }
}
