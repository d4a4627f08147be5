//! Property-based tests for the ARP codec.
//!
//! These verify the invariants that must hold for all inputs:
//! - Encode then decode reproduces the packet for any declared lengths
//! - Encoded length always follows from the declared length fields
//! - Every proper prefix of a packet is rejected as truncated
//! - Decode never panics, whatever the bytes

use arp_codec::{ArpPacket, CodecError, Operation, ARP_FIXED_HEADER_LEN};
use proptest::prelude::*;

// Strategy for packets whose address fields match their declared lengths
fn matching_packet_strategy() -> impl Strategy<Value = ArpPacket> {
    (
        any::<u16>(),
        any::<u16>(),
        any::<u8>(),
        any::<u8>(),
        any::<u16>(),
    )
        .prop_flat_map(|(hardware_type, protocol_type, hal, pal, opcode)| {
            (
                prop::collection::vec(any::<u8>(), hal as usize),
                prop::collection::vec(any::<u8>(), pal as usize),
                prop::collection::vec(any::<u8>(), hal as usize),
                prop::collection::vec(any::<u8>(), pal as usize),
            )
                .prop_map(move |(sha, spa, tha, tpa)| ArpPacket {
                    hardware_type,
                    protocol_type,
                    hardware_addr_len: hal,
                    protocol_addr_len: pal,
                    operation: Operation(opcode),
                    sender_hardware_addr: sha,
                    sender_protocol_addr: spa,
                    target_hardware_addr: tha,
                    target_protocol_addr: tpa,
                })
        })
}

// Strategy for packets whose address fields may disagree with the declared
// lengths, the case encode handles by truncating or zero-padding
fn mismatched_packet_strategy() -> impl Strategy<Value = ArpPacket> {
    (
        any::<u16>(),
        any::<u16>(),
        any::<u8>(),
        any::<u8>(),
        any::<u16>(),
        prop::collection::vec(any::<u8>(), 0..300),
        prop::collection::vec(any::<u8>(), 0..300),
        prop::collection::vec(any::<u8>(), 0..300),
        prop::collection::vec(any::<u8>(), 0..300),
    )
        .prop_map(
            |(hardware_type, protocol_type, hal, pal, opcode, sha, spa, tha, tpa)| ArpPacket {
                hardware_type,
                protocol_type,
                hardware_addr_len: hal,
                protocol_addr_len: pal,
                operation: Operation(opcode),
                sender_hardware_addr: sha,
                sender_protocol_addr: spa,
                target_hardware_addr: tha,
                target_protocol_addr: tpa,
            },
        )
}

proptest! {
    #[test]
    fn round_trip_for_any_declared_lengths(packet in matching_packet_strategy()) {
        let wire = packet.encode();
        prop_assert_eq!(wire.len(), packet.wire_len());

        let decoded = ArpPacket::decode(&wire).unwrap();
        prop_assert_eq!(decoded, packet);
    }

    #[test]
    fn encoded_length_follows_declared_lengths(packet in mismatched_packet_strategy()) {
        let expected = ARP_FIXED_HEADER_LEN
            + 2 * packet.hardware_addr_len as usize
            + 2 * packet.protocol_addr_len as usize;
        prop_assert_eq!(packet.encode().len(), expected);
    }

    #[test]
    fn every_proper_prefix_is_rejected(packet in matching_packet_strategy()) {
        let wire = packet.encode();
        for len in 0..wire.len() {
            let needed = if len < ARP_FIXED_HEADER_LEN {
                ARP_FIXED_HEADER_LEN
            } else {
                wire.len()
            };
            prop_assert_eq!(
                ArpPacket::decode(&wire[..len]),
                Err(CodecError::Truncated { needed, got: len })
            );
        }
    }

    #[test]
    fn decode_never_panics(data in prop::collection::vec(any::<u8>(), 0..2048)) {
        match ArpPacket::decode(&data) {
            Ok(packet) => {
                // Anything accepted must be internally consistent
                prop_assert!(data.len() >= packet.wire_len());
                prop_assert_eq!(
                    packet.sender_hardware_addr.len(),
                    packet.hardware_addr_len as usize
                );
                prop_assert_eq!(
                    packet.sender_protocol_addr.len(),
                    packet.protocol_addr_len as usize
                );
            }
            Err(CodecError::Truncated { needed, got }) => {
                prop_assert_eq!(got, data.len());
                prop_assert!(needed > got);
            }
        }
    }
}
