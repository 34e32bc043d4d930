use byteorder::{BigEndian, ByteOrder, LittleEndian};
use serde::{Deserialize, Serialize};
use std::net::Ipv6Addr;

use crate::wire::error::{Result, WireError};
use crate::wire::message::{
    AddrEntry, AlertDetail, AlertMessage, BlockHeader, BlockLocator, BloomFlags,
    FilterAddMessage, FilterLoadMessage, InventoryType, InventoryVector, NetworkAddress,
    PingMessage, PongMessage, RawBlock, RawTransaction, RejectCode, RejectMessage, Services,
    VersionMessage,
};

/// How strictly var-ints (CompactSize) are decoded.
///
/// Bitcoin Core rejects a value encoded in a wider form than necessary
/// (`ReadCompactSize`: "non-canonical ReadCompactSize()"). Some
/// implementations are lenient outside consensus paths, so both are
/// available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VarIntPolicy {
    /// Reject non-minimal encodings with [`WireError::MalformedVarInt`].
    #[default]
    Canonical,
    /// Accept any of the four forms for any value.
    Lenient,
}

/// A single-owner read position over an in-memory byte slice.
///
/// A primitive read either returns the requested field and advances, or
/// fails with [`WireError::TruncatedInput`] without moving. Composite
/// reads ([`Cursor::read_list`], [`Decode`] impls) may stop part way.
/// Acquiring more bytes from a connection is the caller's business; a
/// cursor never blocks.
///
/// ```
/// use btc_wire::wire::Cursor;
///
/// let mut cursor = Cursor::new(&[0xFD, 0x00, 0x01, 0x2A]);
/// assert_eq!(cursor.read_varint("count").unwrap(), 256);
/// assert_eq!(cursor.read_u8("flag").unwrap(), 42);
/// assert!(cursor.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    bytes: &'a [u8],
    position: usize,
    policy: VarIntPolicy,
}

macro_rules! read_fixed {
    ($(#[$meta:meta])* $name:ident, $ty:ty, $width:expr, $order:ident :: $read:ident) => {
        $(#[$meta])*
        pub fn $name(&mut self, context: &'static str) -> Result<$ty> {
            Ok($order::$read(self.read_bytes($width, context)?))
        }
    };
}

impl<'a> Cursor<'a> {
    /// A cursor with the default ([`VarIntPolicy::Canonical`]) policy.
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::with_policy(bytes, VarIntPolicy::default())
    }

    pub fn with_policy(bytes: &'a [u8], policy: VarIntPolicy) -> Self {
        Self {
            bytes,
            position: 0,
            policy,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn policy(&self) -> VarIntPolicy {
        self.policy
    }

    /// Borrows the next `len` bytes.
    pub fn read_bytes(&mut self, len: usize, context: &'static str) -> Result<&'a [u8]> {
        let remaining = self.remaining();
        if len > remaining {
            return Err(WireError::TruncatedInput {
                context,
                needed: len,
                remaining,
            });
        }

        let bytes = &self.bytes[self.position..self.position + len];
        self.position += len;
        Ok(bytes)
    }

    pub fn read_array<const N: usize>(&mut self, context: &'static str) -> Result<[u8; N]> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N, context)?);
        Ok(out)
    }

    /// Consumes everything left.
    pub fn read_rest(&mut self) -> &'a [u8] {
        let rest = &self.bytes[self.position..];
        self.position = self.bytes.len();
        rest
    }

    pub fn read_u8(&mut self, context: &'static str) -> Result<u8> {
        Ok(self.read_bytes(1, context)?[0])
    }

    pub fn read_i8(&mut self, context: &'static str) -> Result<i8> {
        Ok(self.read_u8(context)? as i8)
    }

    /// Any non-zero byte is `true`.
    pub fn read_bool(&mut self, context: &'static str) -> Result<bool> {
        Ok(self.read_u8(context)? != 0)
    }

    read_fixed!(read_u16, u16, 2, LittleEndian::read_u16);
    read_fixed!(read_i16, i16, 2, LittleEndian::read_i16);
    read_fixed!(read_u32, u32, 4, LittleEndian::read_u32);
    read_fixed!(read_i32, i32, 4, LittleEndian::read_i32);
    read_fixed!(read_u64, u64, 8, LittleEndian::read_u64);
    read_fixed!(read_i64, i64, 8, LittleEndian::read_i64);
    read_fixed!(
        /// Network byte order, used only for ports.
        read_u16_be,
        u16,
        2,
        BigEndian::read_u16
    );

    /// Reads a CompactSize integer.
    ///
    /// ```text
    /// < 0xFD      1 byte
    /// 0xFD + u16  3 bytes
    /// 0xFE + u32  5 bytes
    /// 0xFF + u64  9 bytes
    /// ```
    pub fn read_varint(&mut self, context: &'static str) -> Result<u64> {
        let start = self.position;

        let (value, minimum, width) = match self.read_u8(context)? {
            0xFD => (self.read_u16(context).map(u64::from), 0xFD, 3),
            0xFE => (self.read_u32(context).map(u64::from), 0x1_0000, 5),
            0xFF => (self.read_u64(context), 0x1_0000_0000, 9),
            n => return Ok(u64::from(n)),
        };

        let value = match value {
            Ok(v) => v,
            Err(e) => {
                self.position = start;
                return Err(e);
            }
        };

        if self.policy == VarIntPolicy::Canonical && value < minimum {
            self.position = start;
            return Err(WireError::MalformedVarInt { value, width });
        }

        Ok(value)
    }

    /// A var-int length prefix followed by that many bytes.
    pub fn read_var_bytes(&mut self, context: &'static str) -> Result<Vec<u8>> {
        let start = self.position;
        let len = self.read_varint(context)?;

        // A length that does not fit in usize can never be satisfied.
        let len = usize::try_from(len).unwrap_or(usize::MAX);
        match self.read_bytes(len, context) {
            Ok(bytes) => Ok(bytes.to_vec()),
            Err(e) => {
                self.position = start;
                Err(e)
            }
        }
    }

    /// A var-bytes field that must be valid UTF-8.
    pub fn read_var_str(&mut self, context: &'static str) -> Result<String> {
        let bytes = self.read_var_bytes(context)?;
        String::from_utf8(bytes).map_err(|_| WireError::InvalidUtf8 { field: context })
    }

    /// A var-int count followed by that many `T`.
    ///
    /// `min_item_size` bounds the up-front allocation by what the remaining
    /// bytes could possibly hold, so a hostile count cannot force a huge
    /// reservation.
    pub fn read_list<T: Decode>(
        &mut self,
        context: &'static str,
        min_item_size: usize,
    ) -> Result<Vec<T>> {
        let count = self.read_varint(context)?;
        let capacity = usize::try_from(count)
            .unwrap_or(usize::MAX)
            .min(self.remaining() / min_item_size.max(1));

        let mut items = Vec::with_capacity(capacity);
        for _ in 0..count {
            items.push(T::decode(self)?);
        }

        Ok(items)
    }
}

/// Implemented by types that can be decoded from a message payload.
pub trait Decode: Sized {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self>;
}

impl<const N: usize> Decode for [u8; N] {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        cursor.read_array("hash")
    }
}

impl Decode for NetworkAddress {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        let services = Services::from(cursor.read_u64("net_addr: services")?);
        let ip = Ipv6Addr::from(cursor.read_array::<16>("net_addr: ip")?);
        let port = cursor.read_u16_be("net_addr: port")?;

        Ok(NetworkAddress { services, ip, port })
    }
}

impl Decode for AddrEntry {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        let timestamp = cursor.read_u32("addr: timestamp")?;
        let address = NetworkAddress::decode(cursor)?;

        Ok(AddrEntry { timestamp, address })
    }
}

impl Decode for InventoryVector {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        let raw = cursor.read_u32("inv: type")?;
        let inv_type = InventoryType::from_u32(raw).ok_or(WireError::InvalidValue {
            field: "inventory type",
            value: u64::from(raw),
        })?;
        let hash = cursor.read_array("inv: hash")?;

        Ok(InventoryVector { inv_type, hash })
    }
}

impl Decode for BlockHeader {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(BlockHeader {
            version: cursor.read_i32("header: version")?,
            prev_blockhash: cursor.read_array("header: prev_blockhash")?,
            merkle_root: cursor.read_array("header: merkle_root")?,
            time: cursor.read_u32("header: time")?,
            bits: cursor.read_u32("header: bits")?,
            nonce: cursor.read_u32("header: nonce")?,
        })
    }
}

impl Decode for VersionMessage {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        let version = cursor.read_i32("version: version")?;
        let services = Services::from(cursor.read_u64("version: services")?);
        let timestamp = cursor.read_i64("version: timestamp")?;
        let addr_recv = NetworkAddress::decode(cursor)?;
        let addr_from = NetworkAddress::decode(cursor)?;
        let nonce = cursor.read_u64("version: nonce")?;
        let user_agent = cursor.read_var_str("version: user_agent")?;
        let start_height = cursor.read_i32("version: start_height")?;

        // BIP 37: peers older than 70001 omit the relay byte entirely.
        let relay = if cursor.is_empty() {
            None
        } else {
            Some(cursor.read_bool("version: relay")?)
        };

        Ok(VersionMessage {
            version,
            services,
            timestamp,
            addr_recv,
            addr_from,
            nonce,
            user_agent,
            start_height,
            relay,
        })
    }
}

impl Decode for BlockLocator {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        let version = cursor.read_i32("locator: version")?;
        let locator_hashes = cursor.read_list::<[u8; 32]>("locator: hashes", 32)?;
        let hash_stop = cursor.read_array("locator: hash_stop")?;

        Ok(BlockLocator {
            version,
            locator_hashes,
            hash_stop,
        })
    }
}

impl Decode for RawTransaction {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(RawTransaction::new(cursor.read_rest().to_vec()))
    }
}

impl Decode for RawBlock {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(RawBlock::new(cursor.read_rest().to_vec()))
    }
}

impl Decode for FilterLoadMessage {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        let filter = cursor.read_var_bytes("filterload: filter")?;
        let hash_funcs = cursor.read_u32("filterload: hash_funcs")?;
        let tweak = cursor.read_u32("filterload: tweak")?;
        let raw_flags = cursor.read_u8("filterload: flags")?;
        let flags = BloomFlags::from_u8(raw_flags).ok_or(WireError::InvalidValue {
            field: "bloom flags",
            value: u64::from(raw_flags),
        })?;

        Ok(FilterLoadMessage {
            filter,
            hash_funcs,
            tweak,
            flags,
        })
    }
}

impl Decode for FilterAddMessage {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(FilterAddMessage {
            data: cursor.read_var_bytes("filteradd: data")?,
        })
    }
}

impl Decode for PingMessage {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(PingMessage {
            nonce: cursor.read_u64("ping: nonce")?,
        })
    }
}

impl Decode for PongMessage {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(PongMessage {
            nonce: cursor.read_u64("pong: nonce")?,
        })
    }
}

impl Decode for RejectMessage {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        Ok(RejectMessage {
            message: cursor.read_var_str("reject: message")?,
            code: RejectCode::new(cursor.read_u8("reject: code")?),
            reason: cursor.read_var_str("reject: reason")?,
            data: cursor.read_var_bytes("reject: data")?,
        })
    }
}

impl Decode for AlertDetail {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        let version = cursor.read_i32("alert: version")?;
        let relay_until = cursor.read_i64("alert: relay_until")?;
        let expiration = cursor.read_i64("alert: expiration")?;
        let id = cursor.read_i32("alert: id")?;
        let cancel = cursor.read_i32("alert: cancel")?;

        let count = cursor.read_varint("alert: set_cancel")?;
        let mut set_cancel = Vec::new();
        for _ in 0..count {
            set_cancel.push(cursor.read_i32("alert: set_cancel")?);
        }

        let min_ver = cursor.read_i32("alert: min_ver")?;
        let max_ver = cursor.read_i32("alert: max_ver")?;

        let count = cursor.read_varint("alert: set_sub_ver")?;
        let mut set_sub_ver = Vec::new();
        for _ in 0..count {
            set_sub_ver.push(cursor.read_var_str("alert: set_sub_ver")?);
        }

        Ok(AlertDetail {
            version,
            relay_until,
            expiration,
            id,
            cancel,
            set_cancel,
            min_ver,
            max_ver,
            set_sub_ver,
            priority: cursor.read_i32("alert: priority")?,
            comment: cursor.read_var_str("alert: comment")?,
            status_bar: cursor.read_var_str("alert: status_bar")?,
            reserved: cursor.read_var_str("alert: reserved")?,
        })
    }
}

impl Decode for AlertMessage {
    fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        let detail_bytes = cursor.read_var_bytes("alert: payload")?;
        let signature = cursor.read_var_bytes("alert: signature")?;

        // The detail is parsed out of its own span; whatever the signer put
        // after the known fields stays in `detail_bytes` untouched. A span
        // too short for the detail is a malformed alert, not a payload that
        // ran past its length.
        let mut detail_cursor = Cursor::with_policy(&detail_bytes, cursor.policy());
        let detail = AlertDetail::decode(&mut detail_cursor).map_err(|e| match e {
            WireError::TruncatedInput { .. } => WireError::InvalidValue {
                field: "alert detail length",
                value: detail_bytes.len() as u64,
            },
            other => other,
        })?;

        Ok(AlertMessage::from_parts(detail, detail_bytes, signature))
    }
}

/// `headers` payload: each 80-byte header is followed by a transaction
/// count that is always zero.
pub(crate) fn read_headers(cursor: &mut Cursor<'_>) -> Result<Vec<BlockHeader>> {
    let count = cursor.read_varint("headers: count")?;
    let capacity = usize::try_from(count)
        .unwrap_or(usize::MAX)
        .min(cursor.remaining() / (BlockHeader::SIZE + 1));

    let mut headers = Vec::with_capacity(capacity);
    for _ in 0..count {
        headers.push(BlockHeader::decode(cursor)?);

        let tx_count = cursor.read_varint("headers: tx_count")?;
        if tx_count != 0 {
            return Err(WireError::InvalidValue {
                field: "headers tx_count",
                value: tx_count,
            });
        }
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    /// Encodes a single NetAddr field as used in version payloads.
    /// Uses the standard ::ffff: prefix for IPv4.
    fn net_addr_bytes(services: u64, ip: [u8; 4], port: u16) -> Vec<u8> {
        let mut b = vec![];
        b.extend_from_slice(&services.to_le_bytes());
        b.extend_from_slice(&[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xFF, 0xFF]);
        b.extend_from_slice(&ip);
        b.extend_from_slice(&port.to_be_bytes());
        b
    }

    /// Realistic version payload for protocol v70016 (/Satoshi:25.0.0/).
    /// services = NODE_NETWORK(1) | NODE_WITNESS(8) | NODE_NETWORK_LIMITED(1024) = 1033
    fn version_payload_v70016() -> Vec<u8> {
        let mut p = vec![];
        p.extend_from_slice(&70016i32.to_le_bytes());
        p.extend_from_slice(&1033u64.to_le_bytes());
        p.extend_from_slice(&1700000000i64.to_le_bytes());
        p.extend(net_addr_bytes(1033, [192, 168, 1, 1], 8333)); // addr_recv
        p.extend(net_addr_bytes(1033, [10, 0, 0, 1], 8333)); // addr_from
        p.extend_from_slice(&0x1234567890abcdefu64.to_le_bytes()); // nonce
        let ua = b"/Satoshi:25.0.0/";
        p.push(ua.len() as u8);
        p.extend_from_slice(ua);
        p.extend_from_slice(&820000i32.to_le_bytes()); // start_height
        p.push(1); // relay = true
        p
    }

    fn sample_header_bytes() -> [u8; 80] {
        let mut header = [0u8; 80];
        header[0..4].copy_from_slice(&1i32.to_le_bytes());
        header[4..36].copy_from_slice(&[0x11; 32]);
        header[36..68].copy_from_slice(&[0x22; 32]);
        header[68..72].copy_from_slice(&1234567890u32.to_le_bytes());
        header[72..76].copy_from_slice(&0x1d00ffffu32.to_le_bytes());
        header[76..80].copy_from_slice(&42u32.to_le_bytes());
        header
    }

    #[test]
    fn fixed_width_reads_are_little_endian() {
        let bytes = [0x01, 0x02, 0x03, 0x04, 0xFF, 0xFF, 0xFF, 0xFF];
        let mut cursor = Cursor::new(&bytes);

        assert_eq!(cursor.read_u16("a").unwrap(), 0x0201);
        assert_eq!(cursor.read_u16("b").unwrap(), 0x0403);
        assert_eq!(cursor.read_i32("c").unwrap(), -1);
        assert!(cursor.is_empty());
    }

    #[test]
    fn read_u16_be_reads_port_order() {
        let mut cursor = Cursor::new(&[0x20, 0x8D]);
        assert_eq!(cursor.read_u16_be("port").unwrap(), 8333);
    }

    #[test]
    fn truncated_read_reports_context_and_does_not_advance() {
        let mut cursor = Cursor::new(&[1, 2, 3]);

        let err = cursor.read_u32("ping: nonce").unwrap_err();
        assert_eq!(
            err,
            WireError::TruncatedInput {
                context: "ping: nonce",
                needed: 4,
                remaining: 3
            }
        );
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn varint_all_widths() {
        let cases: [(&[u8], u64); 5] = [
            (&[0xFC], 0xFC),
            (&[0xFD, 0xFD, 0x00], 0xFD),
            (&[0xFD, 0xFF, 0xFF], 0xFFFF),
            (&[0xFE, 0x00, 0x00, 0x01, 0x00], 0x1_0000),
            (
                &[0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF],
                u64::MAX,
            ),
        ];

        for (bytes, expected) in cases {
            let mut cursor = Cursor::new(bytes);
            assert_eq!(cursor.read_varint("v").unwrap(), expected);
            assert!(cursor.is_empty());
        }
    }

    #[test]
    fn canonical_policy_rejects_wide_encoding() {
        // 1 encoded with the 9-byte form
        let bytes = [0xFF, 1, 0, 0, 0, 0, 0, 0, 0];

        let err = Cursor::new(&bytes).read_varint("v").unwrap_err();
        assert_eq!(err, WireError::MalformedVarInt { value: 1, width: 9 });

        let mut lenient = Cursor::with_policy(&bytes, VarIntPolicy::Lenient);
        assert_eq!(lenient.read_varint("v").unwrap(), 1);
    }

    #[test]
    fn canonical_policy_rejects_fd_below_threshold() {
        let err = Cursor::new(&[0xFD, 0xFC, 0x00]).read_varint("v").unwrap_err();
        assert!(matches!(err, WireError::MalformedVarInt { value: 0xFC, width: 3 }));
    }

    #[test]
    fn truncated_varint_is_truncated_input() {
        let err = Cursor::new(&[0xFE, 0x01]).read_varint("v").unwrap_err();
        assert!(err.is_truncated());
    }

    #[test]
    fn var_bytes_longer_than_input_fails_without_allocating() {
        // claims u32::MAX bytes follow
        let mut cursor = Cursor::new(&[0xFE, 0xFF, 0xFF, 0xFF, 0xFF, 0x00]);
        let err = cursor.read_var_bytes("data").unwrap_err();

        assert!(matches!(
            err,
            WireError::TruncatedInput {
                needed: 0xFFFF_FFFF,
                remaining: 1,
                ..
            }
        ));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn var_str_rejects_invalid_utf8() {
        let err = Cursor::new(&[2, 0xC3, 0x28]).read_var_str("user_agent").unwrap_err();
        assert_eq!(err, WireError::InvalidUtf8 { field: "user_agent" });
    }

    #[test]
    fn read_list_with_hostile_count_fails_cleanly() {
        // count = 2^32 but only one hash present
        let mut bytes = vec![0xFF, 0, 0, 0, 0, 1, 0, 0, 0];
        bytes.extend_from_slice(&[0xAA; 32]);

        let err = Cursor::new(&bytes)
            .read_list::<[u8; 32]>("hashes", 32)
            .unwrap_err();
        assert!(err.is_truncated());
    }

    #[test]
    fn decode_version_v70016_all_fields() {
        let payload = version_payload_v70016();
        let msg = VersionMessage::decode(&mut Cursor::new(&payload)).unwrap();

        assert_eq!(msg.version, 70016);
        assert_eq!(msg.services.bits(), 1033);
        assert_eq!(msg.timestamp, 1700000000);
        assert_eq!(msg.nonce, 0x1234567890abcdef);
        assert_eq!(msg.user_agent, "/Satoshi:25.0.0/");
        assert_eq!(msg.start_height, 820000);
        assert_eq!(msg.relay, Some(true));
        assert_eq!(msg.addr_recv.port, 8333);
        assert_eq!(
            msg.addr_recv.ip_addr(),
            IpAddr::V4(Ipv4Addr::new(192, 168, 1, 1))
        );
        assert_eq!(
            msg.addr_from.ip_addr(),
            IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1))
        );
    }

    #[test]
    fn decode_version_relay_absent_when_byte_missing() {
        let mut payload = version_payload_v70016();
        payload.pop();
        let msg = VersionMessage::decode(&mut Cursor::new(&payload)).unwrap();
        assert_eq!(msg.relay, None);
    }

    #[test]
    fn decode_version_truncated_payload_returns_error() {
        assert!(VersionMessage::decode(&mut Cursor::new(&[0u8; 10])).is_err());
    }

    #[test]
    fn decode_net_addr_ipv6() {
        // 2001:db8::1, documentation prefix (RFC 3849)
        let ip: [u8; 16] = [0x20, 0x01, 0x0d, 0xb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1];
        let mut b = vec![];
        b.extend_from_slice(&8u64.to_le_bytes());
        b.extend_from_slice(&ip);
        b.extend_from_slice(&8333u16.to_be_bytes());

        let addr = NetworkAddress::decode(&mut Cursor::new(&b)).unwrap();
        assert_eq!(addr.services, Services::NODE_WITNESS);
        assert_eq!(addr.port, 8333);
        assert_eq!(addr.ip_addr(), IpAddr::V6(Ipv6Addr::from(ip)));
    }

    #[test]
    fn decode_inventory_vector_keeps_hash_order() {
        let mut b = vec![];
        b.extend_from_slice(&2u32.to_le_bytes());
        let hash: [u8; 32] = std::array::from_fn(|i| i as u8);
        b.extend_from_slice(&hash);

        let inv = InventoryVector::decode(&mut Cursor::new(&b)).unwrap();
        assert_eq!(inv.inv_type, InventoryType::Block);
        assert_eq!(inv.hash, hash);
    }

    #[test]
    fn decode_inventory_vector_unknown_type() {
        let mut b = vec![];
        b.extend_from_slice(&99u32.to_le_bytes());
        b.extend_from_slice(&[0u8; 32]);

        let err = InventoryVector::decode(&mut Cursor::new(&b)).unwrap_err();
        assert_eq!(
            err,
            WireError::InvalidValue {
                field: "inventory type",
                value: 99
            }
        );
    }

    #[test]
    fn decode_headers_single_entry() {
        let mut payload = vec![1];
        payload.extend(sample_header_bytes());
        payload.push(0);

        let headers = read_headers(&mut Cursor::new(&payload)).unwrap();

        assert_eq!(headers.len(), 1);
        let h = &headers[0];
        assert_eq!(h.version, 1);
        assert_eq!(h.prev_blockhash, [0x11; 32]);
        assert_eq!(h.merkle_root, [0x22; 32]);
        assert_eq!(h.time, 1234567890);
        assert_eq!(h.bits, 0x1d00ffff);
        assert_eq!(h.nonce, 42);
    }

    #[test]
    fn decode_headers_rejects_nonzero_tx_count() {
        let mut payload = vec![1];
        payload.extend(sample_header_bytes());
        payload.push(3);

        let err = read_headers(&mut Cursor::new(&payload)).unwrap_err();
        assert!(matches!(err, WireError::InvalidValue { value: 3, .. }));
    }

    #[test]
    fn decode_filterload_rejects_unknown_flag() {
        let mut b = vec![1, 0xAB];
        b.extend_from_slice(&5u32.to_le_bytes());
        b.extend_from_slice(&7u32.to_le_bytes());
        b.push(9);

        let err = FilterLoadMessage::decode(&mut Cursor::new(&b)).unwrap_err();
        assert!(matches!(err, WireError::InvalidValue { field: "bloom flags", value: 9 }));
    }

    #[test]
    fn decode_alert_preserves_trailing_detail_bytes() {
        let detail = AlertDetail {
            version: 1,
            relay_until: 1_400_000_000,
            expiration: 1_500_000_000,
            id: 7,
            cancel: 6,
            set_cancel: vec![1, 2],
            min_ver: 0,
            max_ver: 70002,
            set_sub_ver: vec!["/Satoshi:0.9.0/".to_string()],
            priority: 100,
            comment: String::new(),
            status_bar: "URGENT".to_string(),
            reserved: String::new(),
        };

        let mut detail_bytes = crate::wire::payload::Encode::to_bytes(&detail);
        detail_bytes.extend_from_slice(&[0xDE, 0xAD]);

        let mut payload = vec![];
        crate::wire::payload::write_var_bytes(&detail_bytes, &mut payload);
        crate::wire::payload::write_var_bytes(&[0x30, 0x44], &mut payload);

        let alert = AlertMessage::decode(&mut Cursor::new(&payload)).unwrap();
        assert_eq!(alert.detail(), &detail);
        assert_eq!(alert.detail_bytes(), detail_bytes.as_slice());
        assert_eq!(alert.signature(), &[0x30, 0x44]);
    }

    #[test]
    fn decode_alert_with_short_detail_is_invalid() {
        // a 3-byte detail cannot hold even the version and relay_until
        let mut payload = vec![];
        crate::wire::payload::write_var_bytes(&[1, 2, 3], &mut payload);
        crate::wire::payload::write_var_bytes(&[0x30], &mut payload);

        let err = AlertMessage::decode(&mut Cursor::new(&payload)).unwrap_err();
        assert_eq!(
            err,
            WireError::InvalidValue {
                field: "alert detail length",
                value: 3
            }
        );
    }
}
