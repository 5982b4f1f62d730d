//! Hard-coded network descriptors.
//!
//! Covers the chains the bridge ships with: the Ethereum-family parent
//! chains, the Arbitrum rollups, the known orbit testnets, and the local
//! nitro devnet pair used by `register_local_network`.

use lazy_static::lazy_static;

use crate::types::{
    address, ChildChain, EthBridgeAddresses, ParentChain, TokenBridgeAddresses,
};

lazy_static! {
    /// Ethereum mainnet
    pub static ref ETHEREUM: ParentChain = ParentChain {
        chain_id: 1,
        name: "Ethereum".to_string(),
        explorer_url: "https://etherscan.io".to_string(),
        block_time: Some(12),
        is_custom: false,
        is_arbitrum: false,
        partner_chain_ids: vec![42161, 42170],
    };

    /// Goerli testnet
    pub static ref GOERLI: ParentChain = ParentChain {
        chain_id: 5,
        name: "Goerli".to_string(),
        explorer_url: "https://goerli.etherscan.io".to_string(),
        block_time: Some(12),
        is_custom: false,
        is_arbitrum: false,
        partner_chain_ids: vec![421613],
    };

    /// Sepolia testnet
    pub static ref SEPOLIA: ParentChain = ParentChain {
        chain_id: 11155111,
        name: "Sepolia".to_string(),
        explorer_url: "https://sepolia.etherscan.io".to_string(),
        block_time: Some(12),
        is_custom: false,
        is_arbitrum: false,
        partner_chain_ids: vec![421614],
    };

    /// Arbitrum One, as a parent of orbit chains
    pub static ref ARBITRUM_ONE_PARENT: ParentChain = ParentChain {
        chain_id: 42161,
        name: "Arbitrum One".to_string(),
        explorer_url: "https://arbiscan.io".to_string(),
        block_time: None,
        is_custom: false,
        is_arbitrum: true,
        partner_chain_ids: vec![],
    };

    /// Arbitrum Nova, as a parent of orbit chains
    pub static ref ARBITRUM_NOVA_PARENT: ParentChain = ParentChain {
        chain_id: 42170,
        name: "Arbitrum Nova".to_string(),
        explorer_url: "https://nova.arbiscan.io".to_string(),
        block_time: None,
        is_custom: false,
        is_arbitrum: true,
        partner_chain_ids: vec![],
    };

    /// Arbitrum Goerli, as a parent of orbit chains
    pub static ref ARBITRUM_GOERLI_PARENT: ParentChain = ParentChain {
        chain_id: 421613,
        name: "Arbitrum Goerli".to_string(),
        explorer_url: "https://goerli.arbiscan.io".to_string(),
        block_time: None,
        is_custom: false,
        is_arbitrum: true,
        partner_chain_ids: vec![47279324479],
    };

    /// Arbitrum Sepolia, as a parent of orbit chains
    pub static ref ARBITRUM_SEPOLIA_PARENT: ParentChain = ParentChain {
        chain_id: 421614,
        name: "Arbitrum Sepolia".to_string(),
        explorer_url: "https://sepolia.arbiscan.io".to_string(),
        block_time: None,
        is_custom: false,
        is_arbitrum: true,
        partner_chain_ids: vec![23011913, 2109095698, 80707394653],
    };

    /// Arbitrum One
    pub static ref ARBITRUM_ONE: ChildChain = ChildChain {
        chain_id: 42161,
        partner_chain_id: 1,
        name: "Arbitrum One".to_string(),
        explorer_url: "https://arbiscan.io".to_string(),
        confirm_period_blocks: 45818,
        retryable_lifetime_seconds: 604800,
        nitro_genesis_block: 22207817,
        nitro_genesis_l1_block: 15447158,
        deposit_timeout: 888000,
        is_arbitrum: true,
        is_custom: false,
        partner_chain_ids: vec![],
        native_token: None,
        eth_bridge: Some(EthBridgeAddresses {
            bridge: address("0x8315177aB297bA92A06054cE80a67Ed4DBd7ed3a"),
            inbox: address("0x4Dbd4fc535Ac27206064B68FfCf827b0A60BAB3f"),
            outbox: address("0x0B9857ae2D4A3DBe74ffE1d7DF045bb7F96E4840"),
            rollup: address("0x5eF0D09d1E6204141B4d37530808eD19f60FBa35"),
            sequencer_inbox: address("0x1c479675ad559DC151F6Ec7ed3FbF8ceE79582B6"),
        }),
        token_bridge: Some(TokenBridgeAddresses {
            l1_custom_gateway: address("0xcEe284F754E854890e311e3280b767F80797180d"),
            l1_erc20_gateway: address("0xa3A7B6F88361F48403514059F1F16C8E78d60EeC"),
            l1_gateway_router: address("0x72Ce9c846789fdB6fC1f34aC4AD25Dd9ef7031ef"),
            l1_multicall: address("0x5ba1e12693dc8f9c48aad8770482f4739beed696"),
            l1_proxy_admin: address("0x9aD46fac0Cf7f790E5be05A0F15223935A0c0aDa"),
            l1_weth: address("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
            l1_weth_gateway: address("0xd92023E9d9911199a6711321D1277285e6d4e2db"),
            l2_custom_gateway: address("0x096760F208390250649E3e8763348E783AEF5562"),
            l2_erc20_gateway: address("0x09e9222E96E7B4AE2a407B98d48e330053351EEe"),
            l2_gateway_router: address("0x5288c571Fd7aD117beA99bF60FE0846C4E84F933"),
            l2_multicall: address("0x842eC2c7D803033Edf55E478F461FC547Bc54EB2"),
            l2_proxy_admin: address("0xd570aCE65C43af47101fC6250FD6fC63D1c22a86"),
            l2_weth: address("0x82aF49447D8a07e3bd95BD0d56f35241523fBab1"),
            l2_weth_gateway: address("0x6c411aD3E74De3E7Bd422b94A27770f5B86C623B"),
        }),
    };

    /// Arbitrum Nova
    pub static ref ARBITRUM_NOVA: ChildChain = ChildChain {
        chain_id: 42170,
        partner_chain_id: 1,
        name: "Arbitrum Nova".to_string(),
        explorer_url: "https://nova.arbiscan.io".to_string(),
        confirm_period_blocks: 45818,
        retryable_lifetime_seconds: 604800,
        nitro_genesis_block: 0,
        nitro_genesis_l1_block: 0,
        deposit_timeout: 1800000,
        is_arbitrum: true,
        is_custom: false,
        partner_chain_ids: vec![],
        native_token: None,
        eth_bridge: Some(EthBridgeAddresses {
            bridge: address("0xC1Ebd02f738644983b6C4B2d440b8e77DdE276Bd"),
            inbox: address("0xc4448b71118c9071Bcb9734A0EAc55D18A153949"),
            outbox: address("0xD4B80C3D7240325D18E645B49e6535A3Bf95cc58"),
            rollup: address("0xFb209827c58283535b744575e11953DCC4bEAD88"),
            sequencer_inbox: address("0x211E1c4c7f1bF5351Ac850Ed10FD68CFfCF6c21b"),
        }),
        token_bridge: Some(TokenBridgeAddresses {
            l1_custom_gateway: address("0x23122da8C581AA7E0d07A36Ff1f16F799650232f"),
            l1_erc20_gateway: address("0xB2535b988dcE19f9D71dfB22dB6da744aCac21bf"),
            l1_gateway_router: address("0xC840838Bc438d73C16c2f8b22D2Ce3669963cD48"),
            l1_multicall: address("0x8896D23AfEA159a5e9b72C9Eb3DC4E2684A38EA3"),
            l1_proxy_admin: address("0xa8f7DdEd54a726eB873E98bFF2C95ABF2d03e560"),
            l1_weth: address("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2"),
            l1_weth_gateway: address("0xE4E2121b479017955Be0b175305B35f312330BaE"),
            l2_custom_gateway: address("0xbf544970E6BD77b21C6492C281AB60d0770451F4"),
            l2_erc20_gateway: address("0xcF9bAb7e53DDe48A6DC4f286CB14e05298799257"),
            l2_gateway_router: address("0x21903d3F8176b1a0c17E953Cd896610Be9fFDFa8"),
            l2_multicall: address("0x5e1eE626420A354BbC9a95FeA1BAd4492e3bcB86"),
            l2_proxy_admin: address("0xada790b026097BfB36a5ed696859b97a96CEd92C"),
            l2_weth: address("0x722E8BdD2ce80A4422E880164f2079488e115365"),
            l2_weth_gateway: address("0x7626841cB6113412F9c88D3ADC720C9FAC88D9eD"),
        }),
    };

    /// Arbitrum Goerli
    pub static ref ARBITRUM_GOERLI: ChildChain = ChildChain {
        chain_id: 421613,
        partner_chain_id: 5,
        name: "Arbitrum Goerli".to_string(),
        explorer_url: "https://goerli.arbiscan.io".to_string(),
        confirm_period_blocks: 45818,
        retryable_lifetime_seconds: 604800,
        nitro_genesis_block: 0,
        nitro_genesis_l1_block: 0,
        deposit_timeout: 900000,
        is_arbitrum: true,
        is_custom: false,
        partner_chain_ids: vec![47279324479],
        native_token: None,
        eth_bridge: Some(EthBridgeAddresses {
            bridge: address("0xaf4159A80B6Cc41ED517DB1c453d1Ef5C2e4dB72"),
            inbox: address("0x6BEbC4925716945D46F0Ec336D5C2564F419682C"),
            outbox: address("0x45Af9Ed1D03703e480CE7d328fB684bb67DA5049"),
            rollup: address("0x45e5cAea8768F42B385A366D3551Ad1e0cbFAb17"),
            sequencer_inbox: address("0x0484A87B144745A2E5b7c359552119B6EA2917A9"),
        }),
        token_bridge: Some(TokenBridgeAddresses {
            l1_custom_gateway: address("0x9fDD1C4E4AA24EEc1d913FABea925594a20d43C7"),
            l1_erc20_gateway: address("0x715D99480b77A8d9D603638e593a539E21345FdF"),
            l1_gateway_router: address("0x4c7708168395aEa569453Fc36862D2ffcDaC588c"),
            l1_multicall: address("0xa501c031958F579dB7676fF1CE78AD305794d579"),
            l1_proxy_admin: address("0x16101A84B00344221E2983190718bFAba30D9CeE"),
            l1_weth: address("0xB4FBF271143F4FBf7B91A5ded31805e42b2208d6"),
            l1_weth_gateway: address("0x6e244cD02BBB8a6dbd7F626f05B2ef82151Ab502"),
            l2_custom_gateway: address("0x8b6990830cF135318f75182487A4D7698549C717"),
            l2_erc20_gateway: address("0x2eC7Bc552CE8E51f098325D2FcF0d3b9d3d2A9a2"),
            l2_gateway_router: address("0xE5B9d8d42d656d1DcB8065A6c012FE3780246041"),
            l2_multicall: address("0x108B25170319f38DbED14cA9716C54E5D1FF4623"),
            l2_proxy_admin: address("0xeC377B42712608B0356CC54Da81B2be1A4982bAb"),
            l2_weth: address("0xe39Ab88f8A4777030A534146A9Ca3B52bd5D43A3"),
            l2_weth_gateway: address("0xf9F2e89c8347BD96742Cc07095dee490e64301d6"),
        }),
    };

    /// Arbitrum Sepolia
    pub static ref ARBITRUM_SEPOLIA: ChildChain = ChildChain {
        chain_id: 421614,
        partner_chain_id: 11155111,
        name: "Arbitrum Sepolia".to_string(),
        explorer_url: "https://sepolia.arbiscan.io".to_string(),
        confirm_period_blocks: 20,
        retryable_lifetime_seconds: 604800,
        nitro_genesis_block: 0,
        nitro_genesis_l1_block: 0,
        deposit_timeout: 1800000,
        is_arbitrum: true,
        is_custom: false,
        partner_chain_ids: vec![23011913, 2109095698, 80707394653],
        native_token: None,
        eth_bridge: Some(EthBridgeAddresses {
            bridge: address("0x38f918D0E9F1b721EDaA41302E399fa1B79333a9"),
            inbox: address("0xaAe29B0366299461418F5324a79Afc425BE5ae21"),
            outbox: address("0x65f07C7D521164a4d5DaC6eB8Fac8DA067A3B78F"),
            rollup: address("0xd80810638dbDF9081b72C1B33c65375e807281C8"),
            sequencer_inbox: address("0x6c97864CE4bEf387dE0b3310A44230f7E3F1be0D"),
        }),
        token_bridge: Some(TokenBridgeAddresses {
            l1_custom_gateway: address("0xba2F7B6eAe1F9d174199C5E4867b563E0eaC40F3"),
            l1_erc20_gateway: address("0x902b3E5f8F19571859F4AB1003B960a5dF693aFF"),
            l1_gateway_router: address("0xcE18836b233C83325Cc8848CA4487e94C6288264"),
            l1_multicall: address("0xded9AD2E65F3c4315745dD915Dbe0A4Df61b2320"),
            l1_proxy_admin: address("0xDBFC2FfB44A5D841aB42b0882711ed6e5A9244b0"),
            l1_weth: address("0x7b79995e5f793A07Bc00c21412e50Ecae098E7f9"),
            l1_weth_gateway: address("0xA8aD8d7e13cbf556eE75CB0324c13535d8100e1E"),
            l2_custom_gateway: address("0x8Ca1e1AC0f260BC4dA7Dd60aCA6CA66208E642C5"),
            l2_erc20_gateway: address("0x6e244cD02BBB8a6dbd7F626f05B2ef82151Ab502"),
            l2_gateway_router: address("0x9fDD1C4E4AA24EEc1d913FABea925594a20d43C7"),
            l2_multicall: address("0xA115146782b7143fAdB3065D86eACB54c169d092"),
            l2_proxy_admin: address("0x715D99480b77A8d9D603638e593a539E21345FdF"),
            l2_weth: address("0x980B62Da83eFf3D4576C647993b0c1D7faf17c73"),
            l2_weth_gateway: address("0xCFB1f08A4852699a979909e22c30263ca249556D"),
        }),
    };

    /// Local Ethereum devnet, the default parent for `register_local_network`
    pub static ref DEFAULT_L1_NETWORK: ParentChain = ParentChain {
        chain_id: 1337,
        name: "EthLocal".to_string(),
        explorer_url: String::new(),
        block_time: Some(10),
        is_custom: true,
        is_arbitrum: false,
        partner_chain_ids: vec![412346],
    };

    /// Local Arbitrum devnet, the default child for `register_local_network`
    pub static ref DEFAULT_L2_NETWORK: ChildChain = ChildChain {
        chain_id: 412346,
        partner_chain_id: 1337,
        name: "ArbLocal".to_string(),
        explorer_url: String::new(),
        confirm_period_blocks: 20,
        retryable_lifetime_seconds: 604800,
        nitro_genesis_block: 0,
        nitro_genesis_l1_block: 0,
        deposit_timeout: 900000,
        is_arbitrum: true,
        is_custom: true,
        partner_chain_ids: vec![],
        native_token: None,
        eth_bridge: Some(EthBridgeAddresses {
            bridge: address("0x2b360a9881f21c3d7aa0ea6ca0de2a3341d4ef3c"),
            inbox: address("0xff4a24b22f94979e9ba5f3eb35838aa814bad6f1"),
            outbox: address("0x49940929c7cA9b50Ff57a01d3a92817A414E6B9B"),
            rollup: address("0x65a59d67da8e710ef9a01eca37f83f84aedec416"),
            sequencer_inbox: address("0xe7362d0787b51d8c72d504803e5b1d6dcda89540"),
        }),
        token_bridge: Some(TokenBridgeAddresses {
            l1_custom_gateway: address("0x75E0E92A79880Bd81A69F72983D03c75e2B33dC8"),
            l1_erc20_gateway: address("0x4Af567288e68caD4aA93A272fe6139Ca53859C70"),
            l1_gateway_router: address("0x85D9a8a4bd77b9b5559c1B7FCb8eC9635922Ed49"),
            l1_multicall: address("0xA39FFA43ebA037D67a0f4fe91956038ABA0CA386"),
            l1_proxy_admin: address("0x7E32b54800705876d3b5cFbc7d9c226a211F7C1a"),
            l1_weth: address("0xDB2D15a3EB70C347E0D2C2c7861cAFb946baAb48"),
            l1_weth_gateway: address("0x408Da76E87511429485C32E4Ad647DD14823Fdc4"),
            l2_custom_gateway: address("0x525c2aBA45F66987217323E8a05EA400C65D06DC"),
            l2_erc20_gateway: address("0xe1080224B632A93951A7CFA33EeEa9Fd81558b5e"),
            l2_gateway_router: address("0x1294b86822ff4976BfE136cB06CF43eC7FCF2574"),
            l2_multicall: address("0xDB2D15a3EB70C347E0D2C2c7861cAFb946baAb48"),
            l2_proxy_admin: address("0xda52b25ddB0e3B9CC393b0690Ac62245Ac772527"),
            l2_weth: address("0x408Da76E87511429485C32E4Ad647DD14823Fdc4"),
            l2_weth_gateway: address("0x4A2bA922052bA54e29c5417bC979Daaf7D5Fe4f4"),
        }),
    };

    /// Xai orbit testnet
    pub static ref XAI_TESTNET: ChildChain = ChildChain {
        chain_id: 47279324479,
        partner_chain_id: 421613,
        name: "Xai Orbit Testnet".to_string(),
        explorer_url: "https://testnet-explorer.xai-chain.net".to_string(),
        confirm_period_blocks: 20,
        retryable_lifetime_seconds: 604800,
        nitro_genesis_block: 0,
        nitro_genesis_l1_block: 0,
        deposit_timeout: 1800000,
        is_arbitrum: true,
        is_custom: true,
        partner_chain_ids: vec![],
        native_token: None,
        eth_bridge: Some(EthBridgeAddresses {
            bridge: address("0xf958e56d431eA78C7444Cf6A6184Af732Ae6a8A3"),
            inbox: address("0x8b842ad88AAffD63d52EC54f6428fb7ff83060a8"),
            outbox: address("0xDfe36Bea935F11260b0159dCA255b6668925d743"),
            rollup: address("0x082742561295f6e1b43c4f5d1e2d52d7FfE082f1"),
            sequencer_inbox: address("0x5fD0cCc5D31748A44b43cf8DFBFA0FAA32665464"),
        }),
        token_bridge: Some(TokenBridgeAddresses {
            l1_custom_gateway: address("0xdBbDc3EE848C05792CC93EA140c59731f920c3F2"),
            l1_erc20_gateway: address("0xC033fBAFd978440460d943efe6A3bF6A1a990e80"),
            l1_gateway_router: address("0xCb0Fe28c36a60Cf6254f4dd74c13B0fe98FFE5Db"),
            l1_multicall: address("0x21779e0950A87DDD57E341d54fc12Ab10F6eE167"),
            l1_proxy_admin: address("0xc80853e91f8Ac0AaD6ff939F3861600Ab34Dfe12"),
            l1_weth: address("0xe39Ab88f8A4777030A534146A9Ca3B52bd5D43A3"),
            l1_weth_gateway: address("0x58ea20BE21b971Fa282905EdA74bA46540eEd977"),
            l2_custom_gateway: address("0xc60622D1FbDD63Cf9c173D1b69715Ef2B725D792"),
            l2_erc20_gateway: address("0x47ab2DfD627360fC6ac4Ae2fB9fa6f3539aFfeCc"),
            l2_gateway_router: address("0x75c2848D0B2116d6832Ff3758df09D4209b4b7ce"),
            l2_multicall: address("0xE2fBe979bD0df59554Fded36f3A3BF5206f287a2"),
            l2_proxy_admin: address("0x81DeEc20158a367f7039ab3a563C1eB63cc2b3D6"),
            l2_weth: address("0xea77c06A6703A781f9442EFa083e21F3F75907F8"),
            l2_weth_gateway: address("0x927b59cCde7a92acDa085514FdEA39f0c4D1a2DC"),
        }),
    };

    /// Deriw orbit devnet
    pub static ref DERIW_DEVNET: ChildChain = ChildChain {
        chain_id: 80707394653,
        partner_chain_id: 421614,
        name: "Deriw Devnet".to_string(),
        explorer_url: "https://explorer.dev.deriw.com".to_string(),
        confirm_period_blocks: 50,
        retryable_lifetime_seconds: 604800,
        nitro_genesis_block: 0,
        nitro_genesis_l1_block: 0,
        deposit_timeout: 900000,
        is_arbitrum: true,
        is_custom: true,
        partner_chain_ids: vec![],
        native_token: Some(address("0x0bD3Ff848003983471f65A8c3a6fdd7C6bEE3F3E")),
        eth_bridge: Some(EthBridgeAddresses {
            bridge: address("0x4D1ab7030B3194C99b05C404d8E0feC54cF71a94"),
            inbox: address("0x506Dc21F082cB0D5505394066f84ac482c08290e"),
            outbox: address("0xa97d32383772BB601E3A554d161Fa7489Fd94cEf"),
            rollup: address("0x4030E25DDA7de9422d2447d5a384060a4132a6f7"),
            sequencer_inbox: address("0xABa1dd3991319AFE7E8ae785009BaFF8C27D9927"),
        }),
        token_bridge: Some(TokenBridgeAddresses {
            l1_custom_gateway: address("0x642D5C4Fcc950246eB6Fb3ECddE84ad7597e2B73"),
            l1_erc20_gateway: address("0x97e181Ef033B599850F2a8df4335158472EC92fF"),
            l1_gateway_router: address("0x11FeBa5f9138Fda6408583Fa58856Cc1eBDB863d"),
            l1_multicall: address("0xce1CAd780c529e66e3aa6D952a1ED9A6447791c1"),
            l1_proxy_admin: address("0x0000000000000000000000000000000000000000"),
            l1_weth: address("0x0000000000000000000000000000000000000000"),
            l1_weth_gateway: address("0x0000000000000000000000000000000000000000"),
            l2_custom_gateway: address("0xF89586bd79cC0969a5a106BD1e3AaD3e0b2EeD8F"),
            l2_erc20_gateway: address("0xe88c33ed4Bc7B246E73dD8f570c45f2C616C0129"),
            l2_gateway_router: address("0xFEC01f98fb52ad97ff60c47ebace967D66D64123"),
            l2_multicall: address("0xfb68988b580445da2550F1CE9554474cf06540DF"),
            l2_proxy_admin: address("0x7BBb146C00eE9Cc470aF319ee2E12e46f0DA09E6"),
            l2_weth: address("0x0000000000000000000000000000000000000000"),
            l2_weth_gateway: address("0x0000000000000000000000000000000000000000"),
        }),
    };

    /// Deriw orbit testnet
    pub static ref DERIW_TESTNET: ChildChain = ChildChain {
        chain_id: 2109095698,
        partner_chain_id: 421614,
        name: "Deriw Testnet".to_string(),
        explorer_url: "https://explorer.dev.deriw.com".to_string(),
        confirm_period_blocks: 150,
        retryable_lifetime_seconds: 604800,
        nitro_genesis_block: 0,
        nitro_genesis_l1_block: 0,
        deposit_timeout: 900000,
        is_arbitrum: true,
        is_custom: true,
        partner_chain_ids: vec![],
        native_token: Some(address("0x0bD3Ff848003983471f65A8c3a6fdd7C6bEE3F3E")),
        eth_bridge: Some(EthBridgeAddresses {
            bridge: address("0xdD5E8947006E3491c0FD90CC7926BF5b42dC0507"),
            inbox: address("0x3754717f665E72E967d9Fde436D1BC23157b360e"),
            outbox: address("0xF3d3a3C2d93724BeC276621f2F87A70140c8b720"),
            rollup: address("0xfE8D94935c158073d5B2aB4CbB470F92A6e9E9d4"),
            sequencer_inbox: address("0xd573E5393BF25B938B91e8186804a5346Dedd6A5"),
        }),
        token_bridge: Some(TokenBridgeAddresses {
            l1_custom_gateway: address("0xE52D43b50804756407487a567A4aDb3feE9acfCd"),
            l1_erc20_gateway: address("0xFc1E351C3A5d1D7e1285Ed1B03c69e735bDC5d52"),
            l1_gateway_router: address("0xcb81AafEe7a28fb2F5282D000de7c7F63E7CfAeE"),
            l1_multicall: address("0xce1CAd780c529e66e3aa6D952a1ED9A6447791c1"),
            l1_proxy_admin: address("0x0000000000000000000000000000000000000000"),
            l1_weth: address("0x0000000000000000000000000000000000000000"),
            l1_weth_gateway: address("0x0000000000000000000000000000000000000000"),
            l2_custom_gateway: address("0x7f73C587c35a9FF44BB4C0cFF083822e074ED83c"),
            l2_erc20_gateway: address("0x4258c604e31cC873b3321a10e2F77D3367eeB052"),
            l2_gateway_router: address("0xF6dD7AFbAc349BB4AAcbcEC372B027cde4C3C321"),
            l2_multicall: address("0xCF8120aCbb9384F840D2AFcEDD3f29B42c23bbEc"),
            l2_proxy_admin: address("0x896C7A9C45D1AF47Feb5942dE431B8c8594159e2"),
            l2_weth: address("0x0000000000000000000000000000000000000000"),
            l2_weth_gateway: address("0x0000000000000000000000000000000000000000"),
        }),
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_pair_linkage() {
        assert_eq!(DEFAULT_L2_NETWORK.partner_chain_id, DEFAULT_L1_NETWORK.chain_id);
        assert!(DEFAULT_L1_NETWORK.partner_chain_ids.contains(&DEFAULT_L2_NETWORK.chain_id));
    }

    #[test]
    fn test_orbit_chains_declare_arbitrum_parents() {
        assert_eq!(XAI_TESTNET.partner_chain_id, ARBITRUM_GOERLI.chain_id);
        assert_eq!(DERIW_DEVNET.partner_chain_id, ARBITRUM_SEPOLIA.chain_id);
        assert_eq!(DERIW_TESTNET.partner_chain_id, ARBITRUM_SEPOLIA.chain_id);
    }

    #[test]
    fn test_rollups_carry_bridge_addresses() {
        for chain in [&*ARBITRUM_ONE, &*ARBITRUM_NOVA, &*ARBITRUM_GOERLI, &*ARBITRUM_SEPOLIA] {
            assert!(chain.eth_bridge.is_some());
            assert!(chain.token_bridge.is_some());
            assert!(chain.confirm_period_blocks > 0);
        }
    }

    #[test]
    fn test_deriw_chains_use_custom_fee_token() {
        assert!(DERIW_DEVNET.native_token.is_some());
        assert!(DERIW_TESTNET.native_token.is_some());
        assert!(XAI_TESTNET.native_token.is_none());
    }
}
