use std::borrow::Cow;

use crate::wire::message::{
    AddrEntry, AlertDetail, AlertMessage, BlockHeader, BlockLocator, FilterAddMessage,
    FilterLoadMessage, InventoryVector, NetworkAddress, PingMessage, PongMessage, RawBlock,
    RawTransaction, RejectMessage, VersionMessage,
};

/// Implemented by types that can write themselves into a message payload.
///
/// Writing into a `Vec<u8>` cannot fail, so neither can encoding.
pub trait Encode {
    fn encode(&self, out: &mut Vec<u8>);

    fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode(&mut out);
        out
    }
}

/// Something that already knows its own wire encoding.
///
/// `tx` and `block` payloads are produced by the transaction and block
/// subsystems; the wire layer only needs their bytes and never looks
/// inside them.
pub trait EncodedPayload {
    fn encoded_bytes(&self) -> Cow<'_, [u8]>;

    fn encoded_len(&self) -> usize {
        self.encoded_bytes().len()
    }
}

impl EncodedPayload for [u8] {
    fn encoded_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }

    fn encoded_len(&self) -> usize {
        self.len()
    }
}

impl EncodedPayload for Vec<u8> {
    fn encoded_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self)
    }

    fn encoded_len(&self) -> usize {
        self.len()
    }
}

impl EncodedPayload for RawTransaction {
    fn encoded_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }

    fn encoded_len(&self) -> usize {
        self.as_bytes().len()
    }
}

impl EncodedPayload for RawBlock {
    fn encoded_bytes(&self) -> Cow<'_, [u8]> {
        Cow::Borrowed(self.as_bytes())
    }

    fn encoded_len(&self) -> usize {
        self.as_bytes().len()
    }
}

/// Writes a CompactSize integer using the narrowest form for `value`.
pub fn write_varint(value: u64, out: &mut Vec<u8>) {
    match value {
        0..=0xFC => out.push(value as u8),
        0xFD..=0xFFFF => {
            out.push(0xFD);
            out.extend(&(value as u16).to_le_bytes());
        }
        0x1_0000..=0xFFFF_FFFF => {
            out.push(0xFE);
            out.extend(&(value as u32).to_le_bytes());
        }
        _ => {
            out.push(0xFF);
            out.extend(&value.to_le_bytes());
        }
    }
}

pub fn write_var_bytes(bytes: &[u8], out: &mut Vec<u8>) {
    write_varint(bytes.len() as u64, out);
    out.extend_from_slice(bytes);
}

pub fn write_var_str(s: &str, out: &mut Vec<u8>) {
    write_var_bytes(s.as_bytes(), out);
}

/// A var-int count followed by each item.
pub fn write_list<T: Encode>(items: &[T], out: &mut Vec<u8>) {
    write_varint(items.len() as u64, out);
    for item in items {
        item.encode(out);
    }
}

impl<const N: usize> Encode for [u8; N] {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self);
    }
}

/// ```text
/// uint64    services
/// char[16]  IPv6 / IPv4-mapped address
/// uint16    port (big-endian)
/// ```
impl Encode for NetworkAddress {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend(&self.services.bits().to_le_bytes());
        out.extend(&self.ip.octets());
        out.extend(&self.port.to_be_bytes());
    }
}

impl Encode for AddrEntry {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend(&self.timestamp.to_le_bytes());
        self.address.encode(out);
    }
}

/// The hash is written as stored; no byte reversal happens on the wire.
impl Encode for InventoryVector {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend(&self.inv_type.to_le_bytes());
        out.extend(&self.hash);
    }
}

impl Encode for BlockHeader {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend(&self.version.to_le_bytes());
        out.extend(&self.prev_blockhash);
        out.extend(&self.merkle_root);
        out.extend(&self.time.to_le_bytes());
        out.extend(&self.bits.to_le_bytes());
        out.extend(&self.nonce.to_le_bytes());
    }
}

/// The payload layout is:
///
/// ```text
/// int32    version
/// uint64   services
/// int64    timestamp
/// net_addr addr_recv
/// net_addr addr_from
/// uint64   nonce
/// var_str  user_agent
/// int32    start_height
/// bool     relay (omitted when `None`)
/// ```
impl Encode for VersionMessage {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend(&self.version.to_le_bytes());
        out.extend(&self.services.bits().to_le_bytes());
        out.extend(&self.timestamp.to_le_bytes());
        self.addr_recv.encode(out);
        self.addr_from.encode(out);
        out.extend(&self.nonce.to_le_bytes());
        write_var_str(&self.user_agent, out);
        out.extend(&self.start_height.to_le_bytes());

        if let Some(relay) = self.relay {
            out.push(u8::from(relay));
        }
    }
}

/// Shared by `getblocks` and `getheaders`:
///
/// ```text
/// int32   protocol_version
/// varint  hash_count
/// hash[]  block_locator_hashes
/// hash    hash_stop
/// ```
impl Encode for BlockLocator {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend(&self.version.to_le_bytes());
        write_list(&self.locator_hashes, out);
        out.extend(&self.hash_stop);
    }
}

impl Encode for RawTransaction {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.as_bytes());
    }
}

impl Encode for RawBlock {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(self.as_bytes());
    }
}

/// `headers` repeats a zero transaction count after every header.
pub(crate) fn write_headers(headers: &[BlockHeader], out: &mut Vec<u8>) {
    write_varint(headers.len() as u64, out);
    for header in headers {
        header.encode(out);
        write_varint(0, out);
    }
}

impl Encode for FilterLoadMessage {
    fn encode(&self, out: &mut Vec<u8>) {
        write_var_bytes(&self.filter, out);
        out.extend(&self.hash_funcs.to_le_bytes());
        out.extend(&self.tweak.to_le_bytes());
        out.push(self.flags as u8);
    }
}

impl Encode for FilterAddMessage {
    fn encode(&self, out: &mut Vec<u8>) {
        write_var_bytes(&self.data, out);
    }
}

impl Encode for PingMessage {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend(&self.nonce.to_le_bytes());
    }
}

impl Encode for PongMessage {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend(&self.nonce.to_le_bytes());
    }
}

impl Encode for RejectMessage {
    fn encode(&self, out: &mut Vec<u8>) {
        write_var_str(&self.message, out);
        out.push(self.code.value());
        write_var_str(&self.reason, out);
        write_var_bytes(&self.data, out);
    }
}

/// Bitcoin Core's `CUnsignedAlert` serialization.
impl Encode for AlertDetail {
    fn encode(&self, out: &mut Vec<u8>) {
        out.extend(&self.version.to_le_bytes());
        out.extend(&self.relay_until.to_le_bytes());
        out.extend(&self.expiration.to_le_bytes());
        out.extend(&self.id.to_le_bytes());
        out.extend(&self.cancel.to_le_bytes());

        write_varint(self.set_cancel.len() as u64, out);
        for id in &self.set_cancel {
            out.extend(&id.to_le_bytes());
        }

        out.extend(&self.min_ver.to_le_bytes());
        out.extend(&self.max_ver.to_le_bytes());

        write_varint(self.set_sub_ver.len() as u64, out);
        for sub_ver in &self.set_sub_ver {
            write_var_str(sub_ver, out);
        }

        out.extend(&self.priority.to_le_bytes());
        write_var_str(&self.comment, out);
        write_var_str(&self.status_bar, out);
        write_var_str(&self.reserved, out);
    }
}

/// Writes the detail span exactly as it was signed (or received).
impl Encode for AlertMessage {
    fn encode(&self, out: &mut Vec<u8>) {
        write_var_bytes(self.detail_bytes(), out);
        write_var_bytes(self.signature(), out);
    }
}
