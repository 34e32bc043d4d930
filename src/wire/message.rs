use std::fmt::{self, Debug, Display, Formatter};
use std::net::{IpAddr, Ipv6Addr};
use std::ops::BitOr;

use crate::wire::constants::COMMAND_SIZE;
use crate::wire::decode::{self, Cursor, Decode, VarIntPolicy};
use crate::wire::error::{Result, WireError};
use crate::wire::hash::double_sha256;
use crate::wire::payload::{self, Encode};

/// One frame off the wire: envelope fields plus the still-encoded payload.
///
/// Values produced by [`EnvelopeCodec::decode_envelope`] have the expected
/// magic, a well-formed command field and a verified checksum. The command
/// may still be one this crate does not know.
///
/// [`EnvelopeCodec::decode_envelope`]: crate::wire::EnvelopeCodec::decode_envelope
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMessage {
    pub magic: [u8; 4],
    pub command: String,
    pub payload: Vec<u8>,
    pub checksum: [u8; 4],
}

impl RawMessage {
    /// Looks the command name up in the supported command set.
    pub fn command(&self) -> Result<Command> {
        Command::from_name(&self.command)
            .ok_or_else(|| WireError::UnknownCommand(self.command.clone()))
    }

    /// Decodes the payload into its typed variant.
    ///
    /// The decoder must consume the payload exactly: leftover bytes, or a
    /// decoder wanting bytes past the end, yield
    /// [`WireError::PayloadLengthMismatch`].
    pub fn decode_message(&self, policy: VarIntPolicy) -> Result<Message> {
        let command = self.command()?;
        let length = self.payload.len();
        let mut cursor = Cursor::with_policy(&self.payload, policy);

        let message = Message::decode_payload(command, &mut cursor).map_err(|e| match e {
            WireError::TruncatedInput {
                needed, remaining, ..
            } => WireError::PayloadLengthMismatch {
                command: command.name(),
                length,
                consumed: length.saturating_sub(remaining).saturating_add(needed),
            },
            other => other,
        })?;

        if !cursor.is_empty() {
            return Err(WireError::PayloadLengthMismatch {
                command: command.name(),
                length,
                consumed: cursor.position(),
            });
        }

        Ok(message)
    }
}

impl TryFrom<RawMessage> for Message {
    type Error = WireError;

    fn try_from(raw: RawMessage) -> Result<Self> {
        raw.decode_message(VarIntPolicy::default())
    }
}

/// Represents a decoded Bitcoin P2P message.
///
/// Each variant corresponds to one command of the supported set; the
/// set is closed, so adding a command means adding a variant here and
/// the compiler points at every `match` that must learn about it.
///
/// See:
/// https://developer.bitcoin.org/reference/p2p_networking.html
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Control
    Version(VersionMessage),
    Verack,
    Addr(Vec<AddrEntry>),
    GetAddr,
    Ping(PingMessage),
    Pong(PongMessage),
    Reject(RejectMessage),
    Alert(AlertMessage),
    // Data
    Inv(Vec<InventoryVector>),
    GetData(Vec<InventoryVector>),
    NotFound(Vec<InventoryVector>),
    GetBlocks(BlockLocator),
    GetHeaders(BlockLocator),
    Headers(Vec<BlockHeader>),
    Block(RawBlock),
    Tx(RawTransaction),
    Mempool,
    // Bloom filter
    FilterLoad(FilterLoadMessage),
    FilterAdd(FilterAddMessage),
    FilterClear,
}

impl Message {
    pub fn command(&self) -> Command {
        match self {
            Message::Version(_) => Command::Version,
            Message::Verack => Command::Verack,
            Message::Addr(_) => Command::Addr,
            Message::GetAddr => Command::GetAddr,
            Message::Ping(_) => Command::Ping,
            Message::Pong(_) => Command::Pong,
            Message::Reject(_) => Command::Reject,
            Message::Alert(_) => Command::Alert,
            Message::Inv(_) => Command::Inv,
            Message::GetData(_) => Command::GetData,
            Message::NotFound(_) => Command::NotFound,
            Message::GetBlocks(_) => Command::GetBlocks,
            Message::GetHeaders(_) => Command::GetHeaders,
            Message::Headers(_) => Command::Headers,
            Message::Block(_) => Command::Block,
            Message::Tx(_) => Command::Tx,
            Message::Mempool => Command::Mempool,
            Message::FilterLoad(_) => Command::FilterLoad,
            Message::FilterAdd(_) => Command::FilterAdd,
            Message::FilterClear => Command::FilterClear,
        }
    }

    /// Serializes the payload only, without the envelope.
    pub fn encode_payload(&self) -> Vec<u8> {
        let mut out = Vec::new();

        match self {
            Message::Verack | Message::GetAddr | Message::Mempool | Message::FilterClear => {}
            Message::Version(v) => v.encode(&mut out),
            Message::Addr(entries) => payload::write_list(entries, &mut out),
            Message::Ping(p) => p.encode(&mut out),
            Message::Pong(p) => p.encode(&mut out),
            Message::Reject(r) => r.encode(&mut out),
            Message::Alert(a) => a.encode(&mut out),
            Message::Inv(inv) | Message::GetData(inv) | Message::NotFound(inv) => {
                payload::write_list(inv, &mut out)
            }
            Message::GetBlocks(l) | Message::GetHeaders(l) => l.encode(&mut out),
            Message::Headers(headers) => payload::write_headers(headers, &mut out),
            Message::Block(b) => b.encode(&mut out),
            Message::Tx(t) => t.encode(&mut out),
            Message::FilterLoad(f) => f.encode(&mut out),
            Message::FilterAdd(f) => f.encode(&mut out),
        }

        out
    }

    /// Decodes the payload of a `command` message from `cursor`.
    ///
    /// Stops after the last field; checking that nothing is left over is
    /// the caller's job (see [`RawMessage::decode_message`]).
    pub fn decode_payload(command: Command, cursor: &mut Cursor<'_>) -> Result<Message> {
        Ok(match command {
            Command::Version => Message::Version(VersionMessage::decode(cursor)?),
            Command::Verack => Message::Verack,
            Command::Addr => Message::Addr(cursor.read_list("addr: count", AddrEntry::SIZE)?),
            Command::GetAddr => Message::GetAddr,
            Command::Ping => Message::Ping(PingMessage::decode(cursor)?),
            Command::Pong => Message::Pong(PongMessage::decode(cursor)?),
            Command::Reject => Message::Reject(RejectMessage::decode(cursor)?),
            Command::Alert => Message::Alert(AlertMessage::decode(cursor)?),
            Command::Inv => Message::Inv(cursor.read_list("inv: count", InventoryVector::SIZE)?),
            Command::GetData => {
                Message::GetData(cursor.read_list("getdata: count", InventoryVector::SIZE)?)
            }
            Command::NotFound => {
                Message::NotFound(cursor.read_list("notfound: count", InventoryVector::SIZE)?)
            }
            Command::GetBlocks => Message::GetBlocks(BlockLocator::decode(cursor)?),
            Command::GetHeaders => Message::GetHeaders(BlockLocator::decode(cursor)?),
            Command::Headers => Message::Headers(decode::read_headers(cursor)?),
            Command::Block => Message::Block(RawBlock::decode(cursor)?),
            Command::Tx => Message::Tx(RawTransaction::decode(cursor)?),
            Command::Mempool => Message::Mempool,
            Command::FilterLoad => Message::FilterLoad(FilterLoadMessage::decode(cursor)?),
            Command::FilterAdd => Message::FilterAdd(FilterAddMessage::decode(cursor)?),
            Command::FilterClear => Message::FilterClear,
        })
    }
}

macro_rules! message_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Message {
                fn from(value: $ty) -> Self {
                    Message::$variant(value)
                }
            }
        )*
    };
}

message_from! {
    VersionMessage => Version,
    PingMessage => Ping,
    PongMessage => Pong,
    RejectMessage => Reject,
    AlertMessage => Alert,
    RawBlock => Block,
    RawTransaction => Tx,
    FilterLoadMessage => FilterLoad,
    FilterAddMessage => FilterAdd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // Control
    Version,
    Verack,
    Addr,
    GetAddr,
    Ping,
    Pong,
    Reject,
    Alert,
    // Data
    Inv,
    GetData,
    NotFound,
    GetBlocks,
    GetHeaders,
    Headers,
    Block,
    Tx,
    Mempool,
    // Bloom filter
    FilterLoad,
    FilterAdd,
    FilterClear,
}

impl Command {
    pub const ALL: [Command; 20] = [
        Command::Version,
        Command::Verack,
        Command::Addr,
        Command::GetAddr,
        Command::Ping,
        Command::Pong,
        Command::Reject,
        Command::Alert,
        Command::Inv,
        Command::GetData,
        Command::NotFound,
        Command::GetBlocks,
        Command::GetHeaders,
        Command::Headers,
        Command::Block,
        Command::Tx,
        Command::Mempool,
        Command::FilterLoad,
        Command::FilterAdd,
        Command::FilterClear,
    ];

    /// The case-sensitive ASCII name used on the wire.
    pub const fn name(self) -> &'static str {
        match self {
            Command::Version => "version",
            Command::Verack => "verack",
            Command::Addr => "addr",
            Command::GetAddr => "getaddr",
            Command::Ping => "ping",
            Command::Pong => "pong",
            Command::Reject => "reject",
            Command::Alert => "alert",
            Command::Inv => "inv",
            Command::GetData => "getdata",
            Command::NotFound => "notfound",
            Command::GetBlocks => "getblocks",
            Command::GetHeaders => "getheaders",
            Command::Headers => "headers",
            Command::Block => "block",
            Command::Tx => "tx",
            Command::Mempool => "mempool",
            Command::FilterLoad => "filterload",
            Command::FilterAdd => "filteradd",
            Command::FilterClear => "filterclear",
        }
    }

    pub fn from_name(name: &str) -> Option<Command> {
        Command::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Returns the 12-byte command field as defined by the Bitcoin P2P protocol.
    ///
    /// The command string is ASCII and padded with zero bytes.
    pub fn as_bytes(&self) -> [u8; COMMAND_SIZE] {
        let name = self.name().as_bytes();
        let len = name.len().min(COMMAND_SIZE);

        let mut padded = [0u8; COMMAND_SIZE];
        padded[..len].copy_from_slice(&name[..len]);
        padded
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The `services` bitfield advertised in `version` and in every address.
///
/// Bits this crate has no name for are kept as they are, so a value read
/// off the wire encodes back unchanged.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Services(u64);

impl Services {
    pub const NONE: Services = Services(0);
    /// Serves the full block chain.
    pub const NODE_NETWORK: Services = Services(1 << 0);
    /// BIP64 `getutxo`.
    pub const NODE_GETUTXO: Services = Services(1 << 1);
    /// BIP111: accepts `filterload`, `filteradd` and `filterclear`.
    pub const NODE_BLOOM: Services = Services(1 << 2);
    /// BIP144 segregated witness.
    pub const NODE_WITNESS: Services = Services(1 << 3);
    pub const NODE_XTHIN: Services = Services(1 << 4);
    /// BIP159: serves only the most recent 288 blocks.
    pub const NODE_NETWORK_LIMITED: Services = Services(1 << 10);

    const NAMED: [(Services, &'static str); 6] = [
        (Self::NODE_NETWORK, "NODE_NETWORK"),
        (Self::NODE_GETUTXO, "NODE_GETUTXO"),
        (Self::NODE_BLOOM, "NODE_BLOOM"),
        (Self::NODE_WITNESS, "NODE_WITNESS"),
        (Self::NODE_XTHIN, "NODE_XTHIN"),
        (Self::NODE_NETWORK_LIMITED, "NODE_NETWORK_LIMITED"),
    ];

    pub const fn new(bits: u64) -> Self {
        Self(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    pub const fn contains(self, flags: Services) -> bool {
        self.0 & flags.0 == flags.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The set bits that have no name here.
    pub fn unknown_bits(self) -> Services {
        let known = Self::NAMED.iter().fold(0, |acc, (flag, _)| acc | flag.0);
        Services(self.0 & !known)
    }

    /// Names of the known flags that are set.
    pub fn flag_names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMED
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, name)| name)
    }
}
impl From<u64> for Services {
    fn from(value: u64) -> Self {
        Services::new(value)
    }
}

impl BitOr for Services {
    type Output = Services;

    fn bitor(self, rhs: Services) -> Services {
        Services(self.0 | rhs.0)
    }
}

impl Debug for Services {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Services(NONE)");
        }

        let mut names: Vec<_> = self.flag_names().collect();
        if !self.unknown_bits().is_empty() {
            names.push("UNKNOWN");
        }
        write!(f, "Services({}) [{:#018x}]", names.join(" | "), self.0)
    }
}

/// A peer address as it appears inside `version` and `addr`.
///
/// The address is always held in its 16-byte form; IPv4 peers use the
/// IPv4-mapped range (`::ffff:a.b.c.d`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NetworkAddress {
    pub services: Services,
    pub ip: Ipv6Addr,
    pub port: u16,
}

impl NetworkAddress {
    pub const SIZE: usize = 26;

    pub fn new(services: Services, ip: IpAddr, port: u16) -> Self {
        let ip = match ip {
            IpAddr::V4(v4) => v4.to_ipv6_mapped(),
            IpAddr::V6(v6) => v6,
        };

        Self { services, ip, port }
    }

    /// All-zero address, as sent by nodes that do not know (or will not
    /// tell) their own address.
    pub const fn unspecified() -> Self {
        Self {
            services: Services::NONE,
            ip: Ipv6Addr::UNSPECIFIED,
            port: 0,
        }
    }

    /// The address with IPv4-mapped addresses unwrapped.
    pub fn ip_addr(&self) -> IpAddr {
        match self.ip.to_ipv4_mapped() {
            Some(v4) => IpAddr::V4(v4),
            None => IpAddr::V6(self.ip),
        }
    }
}

/// One entry of an `addr` message: a network address plus the time the
/// sender last heard from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AddrEntry {
    pub timestamp: u32,
    pub address: NetworkAddress,
}

impl AddrEntry {
    pub const SIZE: usize = 4 + NetworkAddress::SIZE;
}

/// The `version` message opening every connection.
///
/// Build outbound ones through [`MessageFactory::version`], which draws
/// the nonce from a secure source; constructing one directly with a chosen
/// nonce is possible but defeats self-connection detection.
///
/// [`MessageFactory::version`]: crate::wire::MessageFactory::version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMessage {
    pub version: i32,
    pub services: Services,
    pub timestamp: i64,
    pub addr_recv: NetworkAddress,
    pub addr_from: NetworkAddress,
    pub nonce: u64,
    pub user_agent: String,
    pub start_height: i32,
    /// `None` when the peer omitted the trailing relay byte (pre-BIP37).
    pub relay: Option<bool>,
}

/// What an [`InventoryVector`] points at. Sent as a little-endian `u32`.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InventoryType {
    /// Error / undefined type.
    Error = 0,

    /// Identified by txid.
    Tx = 1,

    /// Full block.
    Block = 2,

    /// Filtered block (BIP37).
    FilteredBlock = 3,

    /// Compact block (BIP152).
    CompactBlock = 4,

    /// BIP144 variants: same object, serialized with witness data.
    WitnessTx = 0x40000001,
    WitnessBlock = 0x40000002,
    WitnessFilteredBlock = 0x40000003,
}

impl InventoryType {
    pub fn from_u32(value: u32) -> Option<Self> {
        match value {
            0 => Some(Self::Error),
            1 => Some(Self::Tx),
            2 => Some(Self::Block),
            3 => Some(Self::FilteredBlock),
            4 => Some(Self::CompactBlock),
            0x40000001 => Some(Self::WitnessTx),
            0x40000002 => Some(Self::WitnessBlock),
            0x40000003 => Some(Self::WitnessFilteredBlock),
            _ => None,
        }
    }

    pub fn to_le_bytes(self) -> [u8; 4] {
        (self as u32).to_le_bytes()
    }
}

/// A (type, hash) pair announcing or requesting one object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InventoryVector {
    pub inv_type: InventoryType,
    pub hash: [u8; 32],
}

impl InventoryVector {
    pub const SIZE: usize = 36;

    pub fn new(inv_type: InventoryType, hash: [u8; 32]) -> Self {
        Self { inv_type, hash }
    }
}

/// Payload of `getblocks` and `getheaders`.
///
/// The peer walks `locator_hashes` (newest first) until it finds a block on
/// its active chain, then answers with what follows it, up to `hash_stop`
/// or its per-message limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockLocator {
    pub version: i32,
    pub locator_hashes: Vec<[u8; 32]>,
    /// All zeroes means "as many as allowed".
    pub hash_stop: [u8; 32],
}

/// An 80-byte block header, as carried by `headers` and at the front of
/// every block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BlockHeader {
    pub version: i32,
    pub prev_blockhash: [u8; 32],
    pub merkle_root: [u8; 32],
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl BlockHeader {
    pub const SIZE: usize = 80;

    /// The block id, in wire order (reverse it for display).
    pub fn hash(&self) -> [u8; 32] {
        double_sha256(&self.to_bytes())
    }
}

/// A serialized transaction, carried verbatim.
///
/// The wire layer does not interpret transactions; the bytes come from
/// (and go back to) the transaction subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawTransaction {
    bytes: Vec<u8>,
}

impl RawTransaction {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// A serialized block (header, transaction count, transactions), carried
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawBlock {
    bytes: Vec<u8>,
}

impl RawBlock {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Reads the 80-byte header at the front of the block.
    pub fn header(&self) -> Result<BlockHeader> {
        BlockHeader::decode(&mut Cursor::new(&self.bytes))
    }
}

/// How a remote bloom filter updates itself when it matches an output
/// (BIP37 `nFlags`).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BloomFlags {
    #[default]
    None = 0,
    All = 1,
    PubkeyOnly = 2,
}

impl BloomFlags {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::None),
            1 => Some(Self::All),
            2 => Some(Self::PubkeyOnly),
            _ => None,
        }
    }
}

/// `filterload` (BIP37). The filter itself is opaque here; matching
/// happens elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterLoadMessage {
    pub filter: Vec<u8>,
    pub hash_funcs: u32,
    pub tweak: u32,
    pub flags: BloomFlags,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterAddMessage {
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PingMessage {
    pub nonce: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PongMessage {
    pub nonce: u64,
}

impl From<&PingMessage> for PongMessage {
    fn from(ping: &PingMessage) -> Self {
        PongMessage { nonce: ping.nonce }
    }
}

/// Reject codes (BIP61).
///
/// Unknown codes are kept as-is.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct RejectCode(u8);

impl RejectCode {
    pub const MALFORMED: RejectCode = RejectCode(0x01);
    pub const INVALID: RejectCode = RejectCode(0x10);
    pub const OBSOLETE: RejectCode = RejectCode(0x11);
    pub const DUPLICATE: RejectCode = RejectCode(0x12);
    pub const NONSTANDARD: RejectCode = RejectCode(0x40);
    pub const DUST: RejectCode = RejectCode(0x41);
    pub const INSUFFICIENT_FEE: RejectCode = RejectCode(0x42);
    pub const CHECKPOINT: RejectCode = RejectCode(0x43);

    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub fn name(self) -> Option<&'static str> {
        match self.0 {
            0x01 => Some("REJECT_MALFORMED"),
            0x10 => Some("REJECT_INVALID"),
            0x11 => Some("REJECT_OBSOLETE"),
            0x12 => Some("REJECT_DUPLICATE"),
            0x40 => Some("REJECT_NONSTANDARD"),
            0x41 => Some("REJECT_DUST"),
            0x42 => Some("REJECT_INSUFFICIENTFEE"),
            0x43 => Some("REJECT_CHECKPOINT"),
            _ => None,
        }
    }
}

impl Debug for RejectCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "RejectCode({name})"),
            None => write!(f, "RejectCode(0x{:02x})", self.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectMessage {
    /// Command of the message being rejected.
    pub message: String,
    pub code: RejectCode,
    pub reason: String,
    /// Extra data (usually the rejected object's hash); empty when absent.
    pub data: Vec<u8>,
}

/// The signed body of a (retired) network alert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AlertDetail {
    pub version: i32,
    pub relay_until: i64,
    pub expiration: i64,
    pub id: i32,
    pub cancel: i32,
    pub set_cancel: Vec<i32>,
    pub min_ver: i32,
    pub max_ver: i32,
    pub set_sub_ver: Vec<String>,
    pub priority: i32,
    pub comment: String,
    pub status_bar: String,
    pub reserved: String,
}

/// An alert: detail, the exact bytes the signature covers, and the
/// signature itself.
///
/// The signature is never checked here. Because it covers the bytes as
/// the signer produced them, a decoded alert keeps that span and encodes
/// it back unchanged instead of re-serializing the detail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertMessage {
    detail: AlertDetail,
    detail_bytes: Vec<u8>,
    signature: Vec<u8>,
}

impl AlertMessage {
    pub fn new(detail: AlertDetail, signature: Vec<u8>) -> Self {
        let detail_bytes = detail.to_bytes();
        Self::from_parts(detail, detail_bytes, signature)
    }

    pub(crate) fn from_parts(
        detail: AlertDetail,
        detail_bytes: Vec<u8>,
        signature: Vec<u8>,
    ) -> Self {
        Self {
            detail,
            detail_bytes,
            signature,
        }
    }

    pub fn detail(&self) -> &AlertDetail {
        &self.detail
    }

    /// The serialized detail the signature was computed over.
    pub fn detail_bytes(&self) -> &[u8] {
        &self.detail_bytes
    }

    pub fn signature(&self) -> &[u8] {
        &self.signature
    }
}
