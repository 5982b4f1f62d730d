//! Fixed protocol data used throughout the networks crate.

use std::collections::HashMap;

use alloy_primitives::Address;
use lazy_static::lazy_static;

use crate::{chain::ChainId, types::address};

lazy_static! {
    /// L2 reverse gateway addresses for ARB, registered before custom chain
    /// support existed
    pub static ref L2_ARB_REVERSE_GATEWAY_ADDRESSES: HashMap<u64, Address> = HashMap::from([
        (ChainId::ArbitrumOne as u64, address("0xCaD7828a19b363A2B44717AFB1786B5196974D8E")),
        (ChainId::ArbitrumNova as u64, address("0xbf544970E6BD77b21C6492C281AB60d0770451F4")),
        (ChainId::ArbitrumGoerli as u64, address("0x584d4D9bED1bEb39f02bb51dE07F493D3A5CdaA0")),
    ]);

    /// L2 DAI gateway addresses
    pub static ref L2_DAI_GATEWAY_ADDRESSES: HashMap<u64, Address> = HashMap::from([
        (ChainId::ArbitrumOne as u64, address("0x467194771dAe2967Aef3ECbEDD3Bf9a310C76C65")),
        (ChainId::ArbitrumNova as u64, address("0x10E6593CDda8c58a1d0f14C5164B376352a55f2F")),
    ]);

    /// L2 wstETH gateway addresses
    pub static ref L2_WSTETH_GATEWAY_ADDRESSES: HashMap<u64, Address> = HashMap::from([
        (ChainId::ArbitrumOne as u64, address("0x07d4692291b9e30e326fd31706f686f83f331b82")),
    ]);

    /// L2 LPT gateway addresses
    pub static ref L2_LPT_GATEWAY_ADDRESSES: HashMap<u64, Address> = HashMap::from([
        (ChainId::ArbitrumOne as u64, address("0x6D2457a4ad276000A615295f7A80F79E48CcD318")),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_tables_cover_arbitrum_one() {
        let one = ChainId::ArbitrumOne as u64;
        assert!(L2_ARB_REVERSE_GATEWAY_ADDRESSES.contains_key(&one));
        assert!(L2_DAI_GATEWAY_ADDRESSES.contains_key(&one));
        assert!(L2_WSTETH_GATEWAY_ADDRESSES.contains_key(&one));
        assert!(L2_LPT_GATEWAY_ADDRESSES.contains_key(&one));
    }

    #[test]
    fn test_gateway_tables_exclude_l1s() {
        let ethereum = ChainId::Ethereum as u64;
        assert!(!L2_ARB_REVERSE_GATEWAY_ADDRESSES.contains_key(&ethereum));
        assert!(!L2_DAI_GATEWAY_ADDRESSES.contains_key(&ethereum));
    }
}
