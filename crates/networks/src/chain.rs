//! Chain ID enumeration for the networks known to the bridge.

/// Chain IDs of the networks known to the bridge.
///
/// Custom (user-added) chains carry arbitrary IDs and are not part of this
/// enum; lookup functions take a raw `u64` for that reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u64)]
pub enum ChainId {
    /// Ethereum mainnet
    Ethereum = 1,
    /// Goerli testnet
    Goerli = 5,
    /// Local Ethereum devnet
    Local = 1337,
    /// Sepolia testnet
    Sepolia = 11155111,
    /// Arbitrum One
    ArbitrumOne = 42161,
    /// Arbitrum Nova
    ArbitrumNova = 42170,
    /// Arbitrum Goerli testnet
    ArbitrumGoerli = 421613,
    /// Arbitrum Sepolia testnet
    ArbitrumSepolia = 421614,
    /// Local Arbitrum devnet
    ArbitrumLocal = 412346,
    /// Xai orbit testnet
    XaiTestnet = 47279324479,
    /// Stylus orbit testnet
    StylusTestnet = 23011913,
    /// Deriw orbit devnet
    DeriwDevnet = 80707394653,
    /// Deriw orbit testnet
    DeriwTestnet = 2109095698,
}

impl ChainId {
    /// Returns the [`ChainId`] for a raw chain ID, or `None` if the ID does
    /// not belong to a known chain.
    pub fn from_id(id: u64) -> Option<Self> {
        match id {
            1 => Some(Self::Ethereum),
            5 => Some(Self::Goerli),
            1337 => Some(Self::Local),
            11155111 => Some(Self::Sepolia),
            42161 => Some(Self::ArbitrumOne),
            42170 => Some(Self::ArbitrumNova),
            421613 => Some(Self::ArbitrumGoerli),
            421614 => Some(Self::ArbitrumSepolia),
            412346 => Some(Self::ArbitrumLocal),
            47279324479 => Some(Self::XaiTestnet),
            23011913 => Some(Self::StylusTestnet),
            80707394653 => Some(Self::DeriwDevnet),
            2109095698 => Some(Self::DeriwTestnet),
            _ => None,
        }
    }

    /// Returns the raw chain ID.
    pub fn id(&self) -> u64 {
        *self as u64
    }
}

impl From<ChainId> for u64 {
    fn from(chain: ChainId) -> Self {
        chain as u64
    }
}

/// Chain IDs allowed to act as parents of user-added orbit chains.
///
/// These IDs are never allowed to be stored as custom chains themselves:
/// the custom chain store rejects them on write and filters them on every
/// read.
pub const SUPPORTED_CUSTOM_ORBIT_PARENT_CHAINS: [u64; 2] =
    [ChainId::ArbitrumGoerli as u64, ChainId::ArbitrumSepolia as u64];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_id_known_chains() {
        assert_eq!(ChainId::from_id(1), Some(ChainId::Ethereum));
        assert_eq!(ChainId::from_id(42161), Some(ChainId::ArbitrumOne));
        assert_eq!(ChainId::from_id(421614), Some(ChainId::ArbitrumSepolia));
        assert_eq!(ChainId::from_id(47279324479), Some(ChainId::XaiTestnet));
    }

    #[test]
    fn test_from_id_unknown_chain() {
        assert_eq!(ChainId::from_id(0), None);
        assert_eq!(ChainId::from_id(999999999), None);
    }

    #[test]
    fn test_id_roundtrip() {
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
            assert_eq!(ChainId::from_id(chain.id()), Some(chain));
        }
    }

    #[test]
    fn test_denylist_contents() {
        assert!(SUPPORTED_CUSTOM_ORBIT_PARENT_CHAINS.contains(&421613));
        assert!(SUPPORTED_CUSTOM_ORBIT_PARENT_CHAINS.contains(&421614));
        assert!(!SUPPORTED_CUSTOM_ORBIT_PARENT_CHAINS.contains(&42161));
    }
}
