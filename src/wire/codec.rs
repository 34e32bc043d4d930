use byteorder::{ByteOrder, LittleEndian};
use log::trace;
use serde::{Deserialize, Serialize};

use crate::wire::constants::{COMMAND_SIZE, HEADER_SIZE, MAX_PAYLOAD_SIZE, Network};
use crate::wire::decode::{Cursor, VarIntPolicy};
use crate::wire::error::{Result, WireError};
use crate::wire::hash;
use crate::wire::message::{Command, Message, RawMessage};

/// Settings of an [`EnvelopeCodec`].
///
/// Every field has a default, so a partial table in a node configuration
/// file is enough:
///
/// ```
/// use btc_wire::wire::{CodecConfig, Network};
///
/// let config = CodecConfig::for_network(Network::Regtest);
/// assert_eq!(config.max_payload_size, 32 * 1024 * 1024);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    pub network: Network,
    /// Largest payload accepted in either direction.
    pub max_payload_size: usize,
    pub varint_policy: VarIntPolicy,
}

impl CodecConfig {
    pub fn for_network(network: Network) -> Self {
        Self {
            network,
            ..Self::default()
        }
    }
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            network: Network::default(),
            max_payload_size: MAX_PAYLOAD_SIZE,
            varint_policy: VarIntPolicy::default(),
        }
    }
}

/// Frames messages for the wire and parses them back.
///
/// The codec holds only its configuration, so one value can be shared by
/// any number of connections.
///
/// ```text
/// +------------+--------------+---------------+-------------+
/// | magic (4)  | command (12) | length (4 LE) | checksum (4)|
/// +------------+--------------+---------------+-------------+
/// | payload (length bytes)                              ... |
/// +---------------------------------------------------------+
/// ```
///
/// The checksum is the first 4 bytes of `SHA256(SHA256(payload))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EnvelopeCodec {
    config: CodecConfig,
}

impl EnvelopeCodec {
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    pub fn network(&self) -> Network {
        self.config.network
    }

    /// Encodes `message` and wraps it in an envelope.
    ///
    /// # Errors
    ///
    /// [`WireError::PayloadTooLarge`] if the encoded payload exceeds the
    /// configured maximum.
    pub fn encode(&self, message: &Message) -> Result<Vec<u8>> {
        self.encode_raw(message.command(), &message.encode_payload())
    }

    /// Wraps an already encoded payload in an envelope.
    pub fn encode_raw(&self, command: Command, payload: &[u8]) -> Result<Vec<u8>> {
        let length = u32::try_from(payload.len())
            .ok()
            .filter(|_| payload.len() <= self.config.max_payload_size)
            .ok_or(WireError::PayloadTooLarge {
                length: payload.len(),
                max: self.config.max_payload_size,
            })?;

        let mut header = [0u8; HEADER_SIZE];
        header[0..4].copy_from_slice(&self.config.network.magic());
        header[4..16].copy_from_slice(&command.as_bytes());
        LittleEndian::write_u32(&mut header[16..20], length);
        header[20..24].copy_from_slice(&hash::checksum(payload));

        let mut frame = Vec::with_capacity(HEADER_SIZE + payload.len());
        frame.extend_from_slice(&header);
        frame.extend_from_slice(payload);

        trace!("framed {} ({} byte payload)", command, length);

        Ok(frame)
    }

    /// Reads one envelope and verifies it, without interpreting the payload.
    ///
    /// On success the cursor is left just past the frame. On failure it is
    /// left where it was, so a caller that hit
    /// [`WireError::TruncatedInput`] can retry once more bytes arrive.
    pub fn decode_envelope(&self, cursor: &mut Cursor<'_>) -> Result<RawMessage> {
        let mut reader = cursor.clone();

        let magic: [u8; 4] = reader.read_array("envelope: magic")?;
        let expected = self.config.network.magic();
        if magic != expected {
            return Err(WireError::UnknownNetwork {
                expected,
                actual: magic,
            });
        }

        let field: [u8; COMMAND_SIZE] = reader.read_array("envelope: command")?;
        let command = parse_command(&field)?;

        let length = reader.read_u32("envelope: length")? as usize;
        if length > self.config.max_payload_size {
            return Err(WireError::PayloadTooLarge {
                length,
                max: self.config.max_payload_size,
            });
        }

        let checksum: [u8; 4] = reader.read_array("envelope: checksum")?;
        let payload = reader.read_bytes(length, "envelope: payload")?;

        let actual = hash::checksum(payload);
        if actual != checksum {
            return Err(WireError::ChecksumMismatch {
                expected: checksum,
                actual,
            });
        }

        *cursor = reader;

        Ok(RawMessage {
            magic,
            command,
            payload: payload.to_vec(),
            checksum,
        })
    }

    /// Reads one envelope and decodes its payload.
    ///
    /// Once the envelope itself is valid the frame counts as consumed:
    /// the cursor moves past it even if the command is unknown or the
    /// payload fails to decode, so the caller can skip to the next frame.
    pub fn decode(&self, cursor: &mut Cursor<'_>) -> Result<Message> {
        let raw = self.decode_envelope(cursor)?;
        let message = raw.decode_message(self.config.varint_policy)?;

        trace!("parsed {} ({} byte payload)", raw.command, raw.payload.len());

        Ok(message)
    }
}

/// Validates a 12-byte command field and returns the name it carries.
///
/// The name is visible ASCII terminated by a NUL; everything after the
/// terminator must be NUL as well. A field without a NUL is unterminated.
fn parse_command(field: &[u8; COMMAND_SIZE]) -> Result<String> {
    let Some(end) = field.iter().position(|&b| b == 0) else {
        return Err(WireError::InvalidCommand(*field));
    };
    let (name, padding) = field.split_at(end);

    if name.is_empty()
        || !name.iter().all(u8::is_ascii_graphic)
        || padding.iter().any(|&b| b != 0)
    {
        return Err(WireError::InvalidCommand(*field));
    }

    Ok(name.iter().map(|&b| char::from(b)).collect())
}
