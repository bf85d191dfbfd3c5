//! ABI-encoded attestation payloads.
//!
//! These structs are the cross-chain compatibility contract: the byte layout
//! produced by `abi_encode` must match `abi.encode` of the equivalent Solidity
//! structs exactly, because attestors sign the SHA-256 digest of these bytes
//! and the same signature set is verified on every chain tracking the
//! counterparty.

use alloy_primitives::B256;
use alloy_sol_types::SolValue;

use crate::error::CodecError;

alloy_sol_types::sol! {
    /// Attested counterparty state at a single height, signed by attestors
    /// and submitted through `update_client`.
    #[derive(Debug, PartialEq, Eq)]
    struct StateAttestation {
        /// Counterparty chain height
        uint64 height;
        /// Counterparty timestamp at that height, in Unix seconds
        uint64 timestamp;
    }

    /// Compact packet record: the keccak-256 hash of the commitment path and
    /// the commitment value. Hashing the path gives replay protection since
    /// no merkle proof anchors these entries.
    #[derive(Debug, PartialEq, Eq)]
    struct PacketCompact {
        /// keccak-256 hash of the packet commitment path
        bytes32 path;
        /// The commitment value; all-zero means "absent"
        bytes32 commitment;
    }

    /// Attested set of packet commitments at a single height, used by the
    /// membership and non-membership checks.
    #[derive(Debug, PartialEq, Eq)]
    struct PacketAttestation {
        /// Counterparty chain height the packets were observed at
        uint64 height;
        /// Observed packet commitments
        PacketCompact[] packets;
    }
}

impl PacketCompact {
    /// Create a packet record from a path hash and a commitment value.
    #[must_use]
    pub fn new(path: impl Into<B256>, commitment: impl Into<B256>) -> Self {
        Self {
            path: path.into(),
            commitment: commitment.into(),
        }
    }
}

/// Decode a [`StateAttestation`] from ABI-encoded bytes.
///
/// # Errors
/// Returns [`CodecError::InvalidAttestationData`] if the bytes are not a
/// valid encoding.
pub fn decode_state_attestation(data: &[u8]) -> Result<StateAttestation, CodecError> {
    StateAttestation::abi_decode(data).map_err(|_| CodecError::InvalidAttestationData)
}

/// Decode a [`PacketAttestation`] from ABI-encoded bytes.
///
/// # Errors
/// Returns [`CodecError::InvalidAttestationData`] if the bytes are not a
/// valid encoding.
pub fn decode_packet_attestation(data: &[u8]) -> Result<PacketAttestation, CodecError> {
    PacketAttestation::abi_decode(data).map_err(|_| CodecError::InvalidAttestationData)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn encode_u256(value: u64) -> [u8; 32] {
        let mut bytes = [0u8; 32];
        bytes[24..32].copy_from_slice(&value.to_be_bytes());
        bytes
    }

    #[rstest]
    #[case::basic(100, 1_700_000_000)]
    #[case::zero_values(0, 0)]
    #[case::max_values(u64::MAX, u64::MAX)]
    #[case::realistic_values(18_500_000, 1_700_000_000)]
    fn state_attestation_roundtrip(#[case] height: u64, #[case] timestamp: u64) {
        let encoded = StateAttestation { height, timestamp }.abi_encode();
        let decoded = decode_state_attestation(&encoded).unwrap();
        assert_eq!(decoded.height, height);
        assert_eq!(decoded.timestamp, timestamp);
    }

    #[test]
    fn state_attestation_byte_layout() {
        // Must match `abi.encode(StateAttestation(42, 123))`: two right-aligned
        // big-endian words
        let encoded = StateAttestation {
            height: 42,
            timestamp: 123,
        }
        .abi_encode();

        let mut expected = Vec::new();
        expected.extend_from_slice(&encode_u256(42));
        expected.extend_from_slice(&encode_u256(123));
        assert_eq!(encoded, expected);
    }

    #[rstest]
    #[case::too_short(vec![0u8; 63])]
    #[case::empty(vec![])]
    fn state_attestation_decode_err(#[case] data: Vec<u8>) {
        assert!(matches!(
            decode_state_attestation(&data),
            Err(CodecError::InvalidAttestationData)
        ));
    }

    #[test]
    fn packet_attestation_byte_layout() {
        // Must match `abi.encode(PacketAttestation(500, [(0xab.., 0xcd..)]))`:
        // tuple offset word, height, relative packets offset, length, then
        // 64 bytes per packet
        let path = [0xabu8; 32];
        let commitment = [0xcdu8; 32];

        let encoded = PacketAttestation {
            height: 500,
            packets: vec![PacketCompact::new(path, commitment)],
        }
        .abi_encode();

        let mut expected = Vec::new();
        expected.extend_from_slice(&encode_u256(32)); // tuple offset
        expected.extend_from_slice(&encode_u256(500)); // height
        expected.extend_from_slice(&encode_u256(64)); // packets offset
        expected.extend_from_slice(&encode_u256(1)); // packets length
        expected.extend_from_slice(&path);
        expected.extend_from_slice(&commitment);
        assert_eq!(hex::encode(encoded), hex::encode(expected));
    }

    #[test]
    fn packet_attestation_roundtrip_multiple_packets() {
        let packets = vec![
            PacketCompact::new([1u8; 32], [2u8; 32]),
            PacketCompact::new([3u8; 32], [4u8; 32]),
            PacketCompact::new([5u8; 32], [6u8; 32]),
        ];

        let encoded = PacketAttestation {
            height: 999,
            packets: packets.clone(),
        }
        .abi_encode();

        let decoded = decode_packet_attestation(&encoded).unwrap();
        assert_eq!(decoded.height, 999);
        assert_eq!(decoded.packets, packets);
    }

    #[test]
    fn packet_attestation_empty_packets() {
        let encoded = PacketAttestation {
            height: 100,
            packets: vec![],
        }
        .abi_encode();

        let decoded = decode_packet_attestation(&encoded).unwrap();
        assert_eq!(decoded.height, 100);
        assert!(decoded.packets.is_empty());
    }

    #[rstest]
    #[case::empty(vec![])]
    #[case::offset_out_of_bounds(vec![0xffu8; 128])]
    fn packet_attestation_decode_err(#[case] data: Vec<u8>) {
        assert!(matches!(
            decode_packet_attestation(&data),
            Err(CodecError::InvalidAttestationData)
        ));
    }

    #[test]
    fn packet_attestation_truncated_packets_array() {
        let mut data = Vec::new();
        data.extend_from_slice(&encode_u256(32));
        data.extend_from_slice(&encode_u256(100));
        data.extend_from_slice(&encode_u256(64));
        data.extend_from_slice(&encode_u256(3)); // claims 3 packets
        data.extend_from_slice(&[1u8; 64]); // provides 1

        assert!(decode_packet_attestation(&data).is_err());
    }

    #[test]
    fn packet_attestation_zero_path_and_commitment() {
        let encoded = PacketAttestation {
            height: 100,
            packets: vec![PacketCompact::new([0u8; 32], [0u8; 32])],
        }
        .abi_encode();

        let decoded = decode_packet_attestation(&encoded).unwrap();
        assert_eq!(decoded.packets[0].path, B256::ZERO);
        assert_eq!(decoded.packets[0].commitment, B256::ZERO);
    }
}
