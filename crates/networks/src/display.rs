//! Display helpers: network names, logos, and supported-network listing.

use crate::{chain::ChainId, classify::is_network, custom};

/// Logo color variant, for orbit chains whose logo differs between light
/// and dark UI themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoVariant {
    /// Light theme
    Light,
    /// Dark theme
    #[default]
    Dark,
}

/// Returns the display name of a chain.
///
/// Persisted custom chains report their stored name. Local devnets report
/// the name of the network they stand in for, so a UI against a devnet
/// reads the same as one against the real chains. Unknown chains report
/// `"Unknown"`.
pub fn get_network_name(chain_id: u64) -> String {
    if let Some(custom_chain) =
        custom::custom_chains_or_empty().into_iter().find(|chain| chain.chain.chain_id == chain_id)
    {
        return custom_chain.chain.name;
    }

    match ChainId::from_id(chain_id) {
        Some(ChainId::Ethereum) => "Ethereum",
        Some(ChainId::Goerli) => "Goerli",
        Some(ChainId::Sepolia) => "Sepolia",
        Some(ChainId::Local) => "Ethereum",
        Some(ChainId::ArbitrumOne) => "Arbitrum One",
        Some(ChainId::ArbitrumNova) => "Arbitrum Nova",
        Some(ChainId::ArbitrumGoerli) => "Arbitrum Goerli",
        Some(ChainId::ArbitrumSepolia) => "Arbitrum Sepolia",
        Some(ChainId::ArbitrumLocal) => "Arbitrum",
        Some(ChainId::XaiTestnet) => "Xai Testnet",
        Some(ChainId::StylusTestnet) => "Stylus Testnet",
        Some(ChainId::DeriwDevnet) => "Deriw Devnet",
        Some(ChainId::DeriwTestnet) => "Deriw Testnet",
        None => "Unknown",
    }
    .to_string()
}

/// Returns the logo asset path for a chain.
///
/// Chains without their own logo fall back by classification: Arbitrum
/// chains get the Arbitrum One logo, orbit chains the theme-dependent orbit
/// logo, everything else the Ethereum logo.
pub fn get_network_logo(chain_id: u64, variant: LogoVariant) -> &'static str {
    match ChainId::from_id(chain_id) {
        // L1 networks
        Some(ChainId::Ethereum) | Some(ChainId::Goerli) | Some(ChainId::Sepolia) => {
            "/images/EthereumLogo.svg"
        }
        // L2 networks
        Some(ChainId::ArbitrumOne) => "/images/ArbitrumOneLogo.svg",
        Some(ChainId::ArbitrumGoerli) |
        Some(ChainId::ArbitrumSepolia) |
        Some(ChainId::ArbitrumLocal) => "/images/ArbitrumLogo.svg",
        Some(ChainId::ArbitrumNova) => "/images/ArbitrumNovaLogo.svg",
        // Orbit chains
        Some(ChainId::XaiTestnet) => "/images/XaiLogo.svg",
        Some(ChainId::DeriwDevnet) | Some(ChainId::DeriwTestnet) => "/images/DeriwLogo.png",
        Some(ChainId::StylusTestnet) => "/images/StylusLogo.svg",
        _ => {
            let flags = is_network(chain_id);
            if flags.is_arbitrum {
                "/images/ArbitrumOneLogo.svg"
            } else if flags.is_orbit_chain {
                match variant {
                    LogoVariant::Dark => "/images/OrbitLogo.svg",
                    LogoVariant::Light => "/images/OrbitLogoWhite.svg",
                }
            } else {
                "/images/EthereumLogo.svg"
            }
        }
    }
}

/// Returns the chain IDs selectable alongside the given chain.
///
/// A testnet chain only offers the testnets (including persisted custom
/// chains); a mainnet chain offers the mainnet networks, plus the testnets
/// when `include_testnets` is set.
pub fn get_supported_networks(chain_id: u64, include_testnets: bool) -> Vec<u64> {
    let testnet_networks = || {
        let mut testnets = vec![
            ChainId::Sepolia as u64,
            ChainId::ArbitrumSepolia as u64,
            ChainId::DeriwTestnet as u64,
        ];
        testnets.extend(
            custom::custom_chains_or_empty().iter().map(|chain| chain.chain.chain_id),
        );
        testnets
    };

    if is_network(chain_id).is_testnet {
        return testnet_networks();
    }

    let mut networks =
        vec![ChainId::Ethereum as u64, ChainId::ArbitrumOne as u64, ChainId::ArbitrumNova as u64];
    if include_testnets {
        networks.extend(testnet_networks());
    }

    networks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        custom::{save_custom_chain, CUSTOM_CHAIN_STORAGE_KEY},
        types::{ChainWithRpcUrl, ChildChain},
    };
    use arbridge_storage::delete_store;
    use serial_test::serial;

    fn reset_store() {
        delete_store(CUSTOM_CHAIN_STORAGE_KEY).expect("failed to reset store");
    }

    #[test]
    #[serial]
    fn test_network_names() {
        reset_store();

        assert_eq!(get_network_name(ChainId::Ethereum as u64), "Ethereum");
        assert_eq!(get_network_name(ChainId::ArbitrumOne as u64), "Arbitrum One");
        assert_eq!(get_network_name(ChainId::XaiTestnet as u64), "Xai Testnet");
        assert_eq!(get_network_name(424242), "Unknown");
    }

    #[test]
    #[serial]
    fn test_local_devnets_use_stand_in_names() {
        reset_store();

        assert_eq!(get_network_name(ChainId::Local as u64), "Ethereum");
        assert_eq!(get_network_name(ChainId::ArbitrumLocal as u64), "Arbitrum");
    }

    #[test]
    #[serial]
    fn test_custom_chain_name_wins() {
        reset_store();

        save_custom_chain(ChainWithRpcUrl {
            chain: ChildChain {
                chain_id: 660279,
                partner_chain_id: ChainId::ArbitrumSepolia as u64,
                name: "Xai Local".to_string(),
                is_custom: true,
                ..Default::default()
            },
            rpc_url: "https://rpc.chain660279.example".to_string(),
            native_token_data: None,
        })
        .expect("failed to save custom chain");

        assert_eq!(get_network_name(660279), "Xai Local");

        reset_store();
    }

    #[test]
    #[serial]
    fn test_network_logos() {
        reset_store();

        assert_eq!(
            get_network_logo(ChainId::Ethereum as u64, LogoVariant::default()),
            "/images/EthereumLogo.svg"
        );
        assert_eq!(
            get_network_logo(ChainId::ArbitrumNova as u64, LogoVariant::default()),
            "/images/ArbitrumNovaLogo.svg"
        );
        assert_eq!(
            get_network_logo(ChainId::DeriwTestnet as u64, LogoVariant::default()),
            "/images/DeriwLogo.png"
        );
    }

    #[test]
    #[serial]
    fn test_unknown_orbit_chain_logo_follows_variant() {
        reset_store();

        assert_eq!(get_network_logo(424242, LogoVariant::Dark), "/images/OrbitLogo.svg");
        assert_eq!(get_network_logo(424242, LogoVariant::Light), "/images/OrbitLogoWhite.svg");
    }

    #[test]
    #[serial]
    fn test_supported_networks_from_mainnet() {
        reset_store();

        let networks = get_supported_networks(ChainId::Ethereum as u64, false);
        assert_eq!(
            networks,
            vec![
                ChainId::Ethereum as u64,
                ChainId::ArbitrumOne as u64,
                ChainId::ArbitrumNova as u64
            ]
        );

        let with_testnets = get_supported_networks(ChainId::Ethereum as u64, true);
        assert!(with_testnets.contains(&(ChainId::Sepolia as u64)));
        assert!(with_testnets.contains(&(ChainId::DeriwTestnet as u64)));
    }

    #[test]
    #[serial]
    fn test_supported_networks_from_testnet() {
        reset_store();

        let networks = get_supported_networks(ChainId::Sepolia as u64, false);
        assert_eq!(
            networks,
            vec![
                ChainId::Sepolia as u64,
                ChainId::ArbitrumSepolia as u64,
                ChainId::DeriwTestnet as u64
            ]
        );
        assert!(!networks.contains(&(ChainId::Ethereum as u64)));
    }

    #[test]
    #[serial]
    fn test_supported_networks_include_custom_chains() {
        reset_store();

        save_custom_chain(ChainWithRpcUrl {
            chain: ChildChain {
                chain_id: 660279,
                partner_chain_id: ChainId::ArbitrumSepolia as u64,
                name: "Xai Local".to_string(),
                is_custom: true,
                ..Default::default()
            },
            rpc_url: "https://rpc.chain660279.example".to_string(),
            native_token_data: None,
        })
        .expect("failed to save custom chain");

        let networks = get_supported_networks(ChainId::Sepolia as u64, false);
        assert!(networks.contains(&660279));

        reset_store();
    }
}
