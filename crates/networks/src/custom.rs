//! Persistence of user-added custom chains.
//!
//! The whole custom chain list lives under a single storage key and is
//! re-serialized on every write. Reads defensively re-apply the denylist of
//! reserved chain IDs, and writes reject reserved IDs outright, so a
//! tampered blob can hide entries but never activate them.

use tracing::warn;

use crate::{
    chain::SUPPORTED_CUSTOM_ORBIT_PARENT_CHAINS, error::Error, types::ChainWithRpcUrl,
};
use arbridge_storage::{read_store, write_store};

/// Storage key holding the user-added custom chain list.
pub const CUSTOM_CHAIN_STORAGE_KEY: &str = "custom_chains";

/// Returns all custom chains currently persisted.
///
/// Returns an empty list when nothing is stored. Chains with a reserved
/// chain ID are filtered out on every read; `chainID` values stored as
/// strings are coerced to numbers by deserialization.
pub fn list_custom_chains() -> Result<Vec<ChainWithRpcUrl>, Error> {
    let chains: Vec<ChainWithRpcUrl> =
        read_store(CUSTOM_CHAIN_STORAGE_KEY)?.unwrap_or_default();

    // filter again in case the stored blob was tampered with
    Ok(chains
        .into_iter()
        .filter(|chain| !SUPPORTED_CUSTOM_ORBIT_PARENT_CHAINS.contains(&chain.chain.chain_id))
        .collect())
}

/// Returns the persisted custom chain with the given ID, if any.
pub fn custom_chain_by_id(chain_id: u64) -> Result<Option<ChainWithRpcUrl>, Error> {
    Ok(list_custom_chains()?.into_iter().find(|chain| chain.chain.chain_id == chain_id))
}

/// Persists a new custom chain.
///
/// Saving a chain ID that is already stored is a no-op, so the operation is
/// idempotent. Reserved chain IDs are rejected with
/// [`Error::ReservedChain`].
pub fn save_custom_chain(new_chain: ChainWithRpcUrl) -> Result<(), Error> {
    if SUPPORTED_CUSTOM_ORBIT_PARENT_CHAINS.contains(&new_chain.chain.chain_id) {
        return Err(Error::ReservedChain(new_chain.chain.chain_id));
    }

    let mut chains = list_custom_chains()?;

    if chains.iter().any(|chain| chain.chain.chain_id == new_chain.chain.chain_id) {
        // chain already exists
        return Ok(());
    }

    chains.push(new_chain);
    write_store(CUSTOM_CHAIN_STORAGE_KEY, &chains)?;

    Ok(())
}

/// Removes the custom chain with the given ID from storage. Removing an
/// absent ID is not an error.
pub fn remove_custom_chain(chain_id: u64) -> Result<(), Error> {
    let chains: Vec<ChainWithRpcUrl> = list_custom_chains()?
        .into_iter()
        .filter(|chain| chain.chain.chain_id != chain_id)
        .collect();

    write_store(CUSTOM_CHAIN_STORAGE_KEY, &chains)?;

    Ok(())
}

/// Custom chain list for derived queries. An unreadable store degrades to
/// an empty list here; the direct store operations above stay loud.
pub(crate) fn custom_chains_or_empty() -> Vec<ChainWithRpcUrl> {
    match list_custom_chains() {
        Ok(chains) => chains,
        Err(e) => {
            warn!("failed to read custom chains: {e}");
            Vec::new()
        }
    }
}

/// IDs of persisted custom chains whose declared parent matches the given
/// chain ID.
pub(crate) fn custom_chain_ids_for(parent_chain_id: u64) -> Vec<u64> {
    custom_chains_or_empty()
        .iter()
        .filter(|chain| chain.chain.partner_chain_id == parent_chain_id)
        .map(|chain| chain.chain.chain_id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{chain::ChainId, types::ChildChain};
    use arbridge_storage::{delete_store, store_path};
    use serial_test::serial;

    fn test_chain(chain_id: u64, partner_chain_id: u64, name: &str) -> ChainWithRpcUrl {
        ChainWithRpcUrl {
            chain: ChildChain {
                chain_id,
                partner_chain_id,
                name: name.to_string(),
                explorer_url: format!("https://explorer.chain{chain_id}.example"),
                confirm_period_blocks: 20,
                is_arbitrum: true,
                is_custom: true,
                ..Default::default()
            },
            rpc_url: format!("https://rpc.chain{chain_id}.example"),
            native_token_data: None,
        }
    }

    fn reset_store() {
        delete_store(CUSTOM_CHAIN_STORAGE_KEY).expect("failed to delete custom chain store");
    }

    #[test]
    #[serial]
    fn test_list_empty_store() {
        reset_store();
        assert!(list_custom_chains().expect("failed to list custom chains").is_empty());
    }

    #[test]
    #[serial]
    fn test_save_and_list_roundtrip() {
        reset_store();

        save_custom_chain(test_chain(660279, 421614, "Xai Local"))
            .expect("failed to save custom chain");

        let chains = list_custom_chains().expect("failed to list custom chains");
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].chain.chain_id, 660279);
        assert_eq!(chains[0].chain.name, "Xai Local");
    }

    #[test]
    #[serial]
    fn test_save_is_idempotent() {
        reset_store();

        save_custom_chain(test_chain(660279, 421614, "First")).expect("failed to save");
        save_custom_chain(test_chain(660279, 421614, "Second")).expect("failed to save");

        let chains = list_custom_chains().expect("failed to list custom chains");
        assert_eq!(chains.len(), 1);
        // the original record wins
        assert_eq!(chains[0].chain.name, "First");
    }

    #[test]
    #[serial]
    fn test_remove_then_lookup_not_found() {
        reset_store();

        save_custom_chain(test_chain(660279, 421614, "Test")).expect("failed to save");
        remove_custom_chain(660279).expect("failed to remove");

        assert!(custom_chain_by_id(660279).expect("failed to look up").is_none());
    }

    #[test]
    #[serial]
    fn test_remove_absent_is_ok() {
        reset_store();
        remove_custom_chain(123456789).expect("failed to remove absent chain");
    }

    #[test]
    #[serial]
    fn test_save_reserved_chain_rejected() {
        reset_store();

        for reserved in SUPPORTED_CUSTOM_ORBIT_PARENT_CHAINS {
            let result = save_custom_chain(test_chain(reserved, 1, "Reserved"));
            assert!(matches!(result, Err(Error::ReservedChain(id)) if id == reserved));
        }

        assert!(list_custom_chains().expect("failed to list custom chains").is_empty());
    }

    #[test]
    #[serial]
    fn test_injected_blob_is_filtered_and_coerced() {
        reset_store();

        // write the blob directly, bypassing save_custom_chain
        let blob = format!(
            r#"[
                {{"chainID": "99999", "partnerChainID": 1, "name": "Test", "rpcUrl": "http://x"}},
                {{"chainID": {}, "partnerChainID": 5, "name": "Smuggled", "rpcUrl": "http://y"}}
            ]"#,
            ChainId::ArbitrumSepolia as u64
        );
        let path = store_path(CUSTOM_CHAIN_STORAGE_KEY).expect("failed to get store path");
        arbridge_common::utils::io::write_file(
            path.to_str().expect("failed to convert path to string"),
            &blob,
        )
        .expect("failed to write blob");

        let chains = list_custom_chains().expect("failed to list custom chains");
        assert_eq!(chains.len(), 1);
        assert_eq!(chains[0].chain.chain_id, 99999);
    }

    #[test]
    #[serial]
    fn test_malformed_blob_propagates_parse_error() {
        reset_store();

        let path = store_path(CUSTOM_CHAIN_STORAGE_KEY).expect("failed to get store path");
        arbridge_common::utils::io::write_file(
            path.to_str().expect("failed to convert path to string"),
            "[ not json",
        )
        .expect("failed to write blob");

        let result = list_custom_chains();
        assert!(matches!(result, Err(Error::Storage(_))));

        reset_store();
    }

    #[test]
    #[serial]
    fn test_custom_chain_ids_for_parent() {
        reset_store();

        save_custom_chain(test_chain(660279, 421614, "A")).expect("failed to save");
        save_custom_chain(test_chain(37714555429, 421614, "B")).expect("failed to save");
        save_custom_chain(test_chain(53456, 421613, "C")).expect("failed to save");

        let mut ids = custom_chain_ids_for(421614);
        ids.sort_unstable();
        assert_eq!(ids, vec![660279, 37714555429]);

        reset_store();
    }
}
