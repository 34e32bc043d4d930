//! Bitcoin P2P wire protocol primitives.
//!
//! This module provides everything needed to turn a P2P message into
//! bytes and back:
//! - Fixed-width and variable-length integer codecs ([`Cursor`], [`Encode`])
//! - The payload structures embedded in messages ([`NetworkAddress`],
//!   [`InventoryVector`], [`AlertDetail`], ...)
//! - One [`Message`] variant per supported command
//! - The 24-byte envelope with magic, command, length and checksum
//!   ([`EnvelopeCodec`])
//! - A [`MessageFactory`] that builds messages and injects nonces from a
//!   [`RandomSource`]
//!
//! No I/O happens here: the codec works on in-memory byte views and
//! reading more bytes off a socket is the caller's job.
//!
//! Protocol reference:
//! https://developer.bitcoin.org/reference/p2p_networking.html
pub mod codec;
pub mod constants;
pub mod decode;
pub mod error;
pub mod factory;
pub mod hash;
pub mod message;
pub mod payload;

pub use codec::{CodecConfig, EnvelopeCodec};
pub use constants::Network;
pub use decode::{Cursor, Decode, VarIntPolicy};
pub use error::{Result, WireError};
pub use factory::{MessageFactory, OsRandom, RandomError, RandomSource};
pub use message::{
    AddrEntry, AlertDetail, AlertMessage, BlockHeader, BlockLocator, BloomFlags, Command,
    FilterAddMessage, FilterLoadMessage, InventoryType, InventoryVector, Message, RawMessage,
    NetworkAddress, PingMessage, PongMessage, RawBlock, RawTransaction, RejectCode,
    RejectMessage, Services, VersionMessage,
};
pub use payload::{EncodedPayload, Encode};
