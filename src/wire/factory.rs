use log::debug;
use rand::RngCore;
use rand::rngs::OsRng;
use thiserror::Error;

use crate::wire::codec::{CodecConfig, EnvelopeCodec};
use crate::wire::decode::Cursor;
use crate::wire::error::{Result, WireError};
use crate::wire::message::{
    AddrEntry, AlertDetail, AlertMessage, BlockHeader, BlockLocator, BloomFlags,
    FilterAddMessage, FilterLoadMessage, InventoryVector, Message, NetworkAddress, PingMessage,
    PongMessage, RawBlock, RawTransaction, RejectCode, RejectMessage, Services, VersionMessage,
};
use crate::wire::payload::EncodedPayload;

/// A random source could not produce the requested bytes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct RandomError(pub String);

impl From<RandomError> for WireError {
    fn from(err: RandomError) -> Self {
        WireError::RandomSourceExhausted(err.0)
    }
}

/// Produces unpredictable bytes for nonces.
///
/// Implementations must either fill the whole buffer or fail; there is no
/// seeding or reseeding surface.
pub trait RandomSource {
    fn fill_bytes(&self, buf: &mut [u8]) -> std::result::Result<(), RandomError>;

    fn next_u64(&self) -> std::result::Result<u64, RandomError> {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf)?;
        Ok(u64::from_le_bytes(buf))
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &T {
    fn fill_bytes(&self, buf: &mut [u8]) -> std::result::Result<(), RandomError> {
        (**self).fill_bytes(buf)
    }
}

/// The operating system's CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill_bytes(&self, buf: &mut [u8]) -> std::result::Result<(), RandomError> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| RandomError(e.to_string()))
    }
}

/// Builds messages and moves them to and from the wire.
///
/// `version` and `ping` draw their nonce from `R`; every other
/// constructor is pure. A failing source fails the call with
/// [`WireError::RandomSourceExhausted`] and nothing falls back to a weaker
/// source.
///
/// ```
/// use btc_wire::wire::{CodecConfig, Message, MessageFactory, OsRandom};
///
/// let factory = MessageFactory::new(CodecConfig::default(), OsRandom);
///
/// let ping = factory.ping().unwrap();
/// let Message::Ping(p) = &ping else { unreachable!() };
/// assert_eq!(factory.pong(p), Message::Pong(p.into()));
/// ```
#[derive(Debug, Clone)]
pub struct MessageFactory<R> {
    codec: EnvelopeCodec,
    random: R,
}

impl<R: RandomSource> MessageFactory<R> {
    pub fn new(config: CodecConfig, random: R) -> Self {
        Self {
            codec: EnvelopeCodec::new(config),
            random,
        }
    }

    pub fn codec(&self) -> &EnvelopeCodec {
        &self.codec
    }

    fn nonce(&self, purpose: &'static str) -> Result<u64> {
        let nonce = self.random.next_u64()?;
        debug!("drew {} nonce", purpose);
        Ok(nonce)
    }

    /// A `version` message with a fresh nonce.
    #[allow(clippy::too_many_arguments)]
    pub fn version(
        &self,
        version: i32,
        services: Services,
        timestamp: i64,
        addr_recv: NetworkAddress,
        addr_from: NetworkAddress,
        user_agent: impl Into<String>,
        start_height: i32,
        relay: Option<bool>,
    ) -> Result<Message> {
        Ok(Message::Version(VersionMessage {
            version,
            services,
            timestamp,
            addr_recv,
            addr_from,
            nonce: self.nonce("version")?,
            user_agent: user_agent.into(),
            start_height,
            relay,
        }))
    }

    pub fn verack(&self) -> Message {
        Message::Verack
    }

    pub fn addr(&self, entries: Vec<AddrEntry>) -> Message {
        Message::Addr(entries)
    }

    pub fn inv(&self, inventory: Vec<InventoryVector>) -> Message {
        Message::Inv(inventory)
    }

    pub fn getdata(&self, inventory: Vec<InventoryVector>) -> Message {
        Message::GetData(inventory)
    }

    pub fn notfound(&self, inventory: Vec<InventoryVector>) -> Message {
        Message::NotFound(inventory)
    }

    /// `getblocks`; a `None` stop hash asks for as many as the peer allows.
    pub fn getblocks(
        &self,
        version: i32,
        locator_hashes: Vec<[u8; 32]>,
        hash_stop: Option<[u8; 32]>,
    ) -> Message {
        Message::GetBlocks(BlockLocator {
            version,
            locator_hashes,
            hash_stop: hash_stop.unwrap_or_default(),
        })
    }

    pub fn getheaders(
        &self,
        version: i32,
        locator_hashes: Vec<[u8; 32]>,
        hash_stop: Option<[u8; 32]>,
    ) -> Message {
        Message::GetHeaders(BlockLocator {
            version,
            locator_hashes,
            hash_stop: hash_stop.unwrap_or_default(),
        })
    }

    /// Wraps a transaction serialized by its own subsystem.
    pub fn tx<T: EncodedPayload + ?Sized>(&self, tx: &T) -> Message {
        Message::Tx(RawTransaction::new(tx.encoded_bytes().into_owned()))
    }

    pub fn block<T: EncodedPayload + ?Sized>(&self, block: &T) -> Message {
        Message::Block(RawBlock::new(block.encoded_bytes().into_owned()))
    }

    pub fn headers(&self, headers: Vec<BlockHeader>) -> Message {
        Message::Headers(headers)
    }

    pub fn getaddr(&self) -> Message {
        Message::GetAddr
    }

    pub fn mempool(&self) -> Message {
        Message::Mempool
    }

    pub fn filterload(
        &self,
        filter: Vec<u8>,
        hash_funcs: u32,
        tweak: u32,
        flags: BloomFlags,
    ) -> Message {
        Message::FilterLoad(FilterLoadMessage {
            filter,
            hash_funcs,
            tweak,
            flags,
        })
    }

    pub fn filteradd(&self, data: Vec<u8>) -> Message {
        Message::FilterAdd(FilterAddMessage { data })
    }

    pub fn filterclear(&self) -> Message {
        Message::FilterClear
    }

    /// A `ping` with a fresh nonce.
    pub fn ping(&self) -> Result<Message> {
        Ok(Message::Ping(PingMessage {
            nonce: self.nonce("ping")?,
        }))
    }

    /// The `pong` answering `ping`: same nonce, no randomness.
    pub fn pong(&self, ping: &PingMessage) -> Message {
        Message::Pong(PongMessage::from(ping))
    }

    pub fn reject(
        &self,
        message: impl Into<String>,
        code: RejectCode,
        reason: impl Into<String>,
        data: Option<Vec<u8>>,
    ) -> Message {
        Message::Reject(RejectMessage {
            message: message.into(),
            code,
            reason: reason.into(),
            data: data.unwrap_or_default(),
        })
    }

    /// An alert over `detail`; the signature is carried, never checked.
    pub fn alert(&self, detail: AlertDetail, signature: Vec<u8>) -> Message {
        Message::Alert(AlertMessage::new(detail, signature))
    }

    /// Frames `message` for this factory's network.
    pub fn encode(&self, message: &Message) -> Result<Vec<u8>> {
        self.codec.encode(message)
    }

    /// Reads one framed message; see [`EnvelopeCodec::decode`].
    pub fn parse(&self, cursor: &mut Cursor<'_>) -> Result<Message> {
        self.codec.decode(cursor)
    }
}
