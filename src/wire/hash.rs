use sha2::{Digest, Sha256};

/// SHA256(SHA256(data)).
///
/// Bitcoin uses this "double SHA256" construction for block and
/// transaction identifiers and for the message checksum. It is
/// consensus-critical and cannot be changed.
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    let hash = Sha256::digest(Sha256::digest(data));

    let mut result = [0u8; 32];
    result.copy_from_slice(&hash);
    result
}

/// Message checksum: the first 4 bytes of [`double_sha256`] of the payload.
pub fn checksum(payload: &[u8]) -> [u8; 4] {
    let hash = double_sha256(payload);

    let mut result = [0u8; 4];
    result.copy_from_slice(&hash[..4]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checksum_of_empty_payload() {
        // Every empty-payload message (verack, getaddr, ...) carries 5df6e0e2.
        assert_eq!(checksum(&[]), [0x5d, 0xf6, 0xe0, 0xe2]);
    }

    #[test]
    fn double_sha256_known_vector() {
        assert_eq!(
            hex::encode(double_sha256(b"hello")),
            "9595c9df90075148eb06860365df33584b75bff782a510c6cd4883a419833d50"
        );
    }
}
