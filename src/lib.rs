//! Bitcoin P2P wire protocol.
//!
//! Typed network messages, the factory that builds them (including the
//! random nonces `version` and `ping` carry) and the envelope codec that
//! frames them for the wire and parses them back.
//!
//! ```
//! use btc_wire::wire::{CodecConfig, Cursor, MessageFactory, OsRandom};
//!
//! let factory = MessageFactory::new(CodecConfig::default(), OsRandom);
//! let ping = factory.ping().unwrap();
//!
//! let bytes = factory.encode(&ping).unwrap();
//! let parsed = factory.parse(&mut Cursor::new(&bytes)).unwrap();
//! assert_eq!(parsed, ping);
//! ```
pub mod wire;
