use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Per-network magic values, as the little-endian `u32` Bitcoin Core
/// keeps in `pchMessageStart`. On the wire mainnet reads `F9 BE B4 D9`.
pub const MAIN_NET_MAGIC: u32 = 0xD9B4BEF9;
pub const TEST_NET3_MAGIC: u32 = 0x0709110B;
pub const REG_TEST_MAGIC: u32 = 0xDAB5BFFA;
pub const SIG_NET_MAGIC: u32 = 0x40CF030A;

/// Protocol version this crate speaks (`PROTOCOL_VERSION` in Bitcoin
/// Core's `node/protocol_version.h`).
pub const PROTOCOL_VERSION: i32 = 70016;

/// Size of the envelope in front of every payload:
/// magic (4) + command (12) + length (4) + checksum (4).
pub const HEADER_SIZE: usize = 24;

/// Width of the NUL-padded command field.
pub const COMMAND_SIZE: usize = 12;

/// Default upper bound for a single payload (32 MiB).
///
/// The length field is attacker controlled, so it is checked against this
/// bound before any payload bytes are buffered.
pub const MAX_PAYLOAD_SIZE: usize = 32 * 1024 * 1024;

/// The genesis block hash for Bitcoin mainnet, in wire (little-endian) order.
///
/// Human-readable (big-endian) form:
///
/// ```text
/// 000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f
/// ```
pub const GENESIS_BLOCK_HASH_MAINNET: [u8; 32] = [
    0x6f, 0xe2, 0x8c, 0x0a, 0xb6, 0xf1, 0xb3, 0x72, 0xc1, 0xa6, 0xa2, 0x46, 0xae, 0x63, 0xf7, 0x4f,
    0x93, 0x1e, 0x83, 0x65, 0xe1, 0x5a, 0x08, 0x9c, 0x68, 0xd6, 0x19, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// A Bitcoin network, identified on the wire by its magic value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet3,
    Regtest,
    Signet,
}

impl Network {
    pub const ALL: [Network; 4] = [
        Network::Mainnet,
        Network::Testnet3,
        Network::Regtest,
        Network::Signet,
    ];

    /// The magic as the little-endian `u32` Bitcoin Core uses.
    pub const fn magic_value(self) -> u32 {
        match self {
            Network::Mainnet => MAIN_NET_MAGIC,
            Network::Testnet3 => TEST_NET3_MAGIC,
            Network::Regtest => REG_TEST_MAGIC,
            Network::Signet => SIG_NET_MAGIC,
        }
    }

    /// The four magic bytes in the order they appear on the wire.
    pub const fn magic(self) -> [u8; 4] {
        self.magic_value().to_le_bytes()
    }

    pub fn from_magic(magic: [u8; 4]) -> Option<Network> {
        Network::ALL.into_iter().find(|n| n.magic() == magic)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet3 => "testnet3",
            Network::Regtest => "regtest",
            Network::Signet => "signet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "mainnet" | "main" => Ok(Network::Mainnet),
            "testnet3" | "testnet" | "test" => Ok(Network::Testnet3),
            "regtest" => Ok(Network::Regtest),
            "signet" => Ok(Network::Signet),
            other => Err(format!("unknown network: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic_bytes_match_wire_order() {
        assert_eq!(Network::Mainnet.magic(), [0xF9, 0xBE, 0xB4, 0xD9]);
        assert_eq!(Network::Testnet3.magic(), [0x0B, 0x11, 0x09, 0x07]);
        assert_eq!(Network::Regtest.magic(), [0xFA, 0xBF, 0xB5, 0xDA]);
        assert_eq!(Network::Signet.magic(), [0x0A, 0x03, 0xCF, 0x40]);
    }

    #[test]
    fn from_magic_finds_every_network() {
        for network in Network::ALL {
            assert_eq!(Network::from_magic(network.magic()), Some(network));
        }
        assert_eq!(Network::from_magic([0, 0, 0, 0]), None);
    }

    #[test]
    fn network_names_parse() {
        assert_eq!("regtest".parse::<Network>(), Ok(Network::Regtest));
        assert_eq!("testnet".parse::<Network>(), Ok(Network::Testnet3));
        assert!("moonnet".parse::<Network>().is_err());
    }
}
