use crate::{CodecError, Result};
use std::convert::TryInto;
use std::net::Ipv4Addr;

/// IANA hardware type for Ethernet.
pub const ETHERNET_HARDWARE_TYPE: u16 = 1;
/// EtherType for IPv4, the usual value of the protocol type field.
pub const IPV4_PROTOCOL_TYPE: u16 = 0x0800;

/// Length of the fixed portion of the header, up to the first address field.
pub const ARP_FIXED_HEADER_LEN: usize = 8;

const HARDWARE_TYPE_RANGE: (usize, usize) = (0, 2);
const PROTOCOL_TYPE_RANGE: (usize, usize) = (2, 4);
const HARDWARE_ADDR_LEN_OFFSET: usize = 4;
const PROTOCOL_ADDR_LEN_OFFSET: usize = 5;
const OPCODE_RANGE: (usize, usize) = (6, 8);

///
/// ARP operation code, kept as a raw 16-bit value so that codes beyond
/// request/reply survive a decode/encode round trip untouched. Interpreting
/// an unknown code is the caller's problem, not the codec's.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Operation(pub u16);

impl Operation {
    pub const REQUEST: Operation = Operation(1);
    pub const REPLY: Operation = Operation(2);
}

impl From<u16> for Operation {
    fn from(value: u16) -> Self {
        Operation(value)
    }
}

impl From<Operation> for u16 {
    fn from(op: Operation) -> Self {
        op.0
    }
}

///
/// An ARP packet in its unpacked form, per the packet structure described in
/// RFC 826: https://tools.ietf.org/html/rfc826
///
/// The two length fields size the address slots on the wire; the address
/// vectors are nominally that long but the codec never requires it. `encode`
/// truncates or zero-pads each address into its declared slot, and `decode`
/// always produces addresses of exactly the declared lengths.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArpPacket {
    pub hardware_type: u16,
    pub protocol_type: u16,
    pub hardware_addr_len: u8,
    pub protocol_addr_len: u8,
    pub operation: Operation,
    pub sender_hardware_addr: Vec<u8>,
    pub sender_protocol_addr: Vec<u8>,
    pub target_hardware_addr: Vec<u8>,
    pub target_protocol_addr: Vec<u8>,
}

impl ArpPacket {
    ///
    /// Constructs a packet for the common Ethernet/IPv4 case: hardware type 1,
    /// protocol type 0x0800, 6-byte hardware and 4-byte protocol addresses.
    ///
    pub fn ethernet_ipv4(
        operation: Operation,
        sender_hardware_addr: [u8; 6],
        sender_protocol_addr: Ipv4Addr,
        target_hardware_addr: [u8; 6],
        target_protocol_addr: Ipv4Addr,
    ) -> ArpPacket {
        ArpPacket {
            hardware_type: ETHERNET_HARDWARE_TYPE,
            protocol_type: IPV4_PROTOCOL_TYPE,
            hardware_addr_len: 6,
            protocol_addr_len: 4,
            operation,
            sender_hardware_addr: sender_hardware_addr.to_vec(),
            sender_protocol_addr: sender_protocol_addr.octets().to_vec(),
            target_hardware_addr: target_hardware_addr.to_vec(),
            target_protocol_addr: target_protocol_addr.octets().to_vec(),
        }
    }

    ///
    /// Total length of this packet on the wire, derived from the declared
    /// address lengths: 8 fixed bytes plus two hardware and two protocol
    /// address slots. Bounded by 8 + 4 * 255 = 1028 bytes.
    ///
    pub fn wire_len(&self) -> usize {
        ARP_FIXED_HEADER_LEN
            + (2 * self.hardware_addr_len as usize)
            + (2 * self.protocol_addr_len as usize)
    }

    ///
    /// Encodes the packet into its wire representation. The buffer is sized
    /// from the declared length fields, never from the address vectors: an
    /// address longer than its slot is truncated, one shorter is zero-padded.
    /// This cannot fail.
    ///
    pub fn encode(&self) -> Vec<u8> {
        let hlen = self.hardware_addr_len as usize;
        let plen = self.protocol_addr_len as usize;
        let mut data: Vec<u8> = vec![0; self.wire_len()];

        let (start, end) = HARDWARE_TYPE_RANGE;
        data[start..end].copy_from_slice(&self.hardware_type.to_be_bytes());
        let (start, end) = PROTOCOL_TYPE_RANGE;
        data[start..end].copy_from_slice(&self.protocol_type.to_be_bytes());

        data[HARDWARE_ADDR_LEN_OFFSET] = self.hardware_addr_len;
        data[PROTOCOL_ADDR_LEN_OFFSET] = self.protocol_addr_len;

        let (start, end) = OPCODE_RANGE;
        data[start..end].copy_from_slice(&u16::from(self.operation).to_be_bytes());

        let mut offset = ARP_FIXED_HEADER_LEN;
        fill_slot(&mut data[offset..offset + hlen], &self.sender_hardware_addr);
        offset += hlen;
        fill_slot(&mut data[offset..offset + plen], &self.sender_protocol_addr);
        offset += plen;
        fill_slot(&mut data[offset..offset + hlen], &self.target_hardware_addr);
        offset += hlen;
        fill_slot(&mut data[offset..offset + plen], &self.target_protocol_addr);

        data
    }

    ///
    /// Decodes a packet from its wire representation. The buffer must hold
    /// the 8-byte fixed header, and then the four address slots whose sizes
    /// the header itself declares. Address slot offsets are computed from the
    /// declared lengths, so non-Ethernet/IPv4 address sizes round-trip with
    /// `encode`. Bytes past the declared total are ignored.
    ///
    /// Address fields are copied out of the buffer, so the packet stays
    /// valid however the caller reuses the buffer afterwards.
    ///
    pub fn decode(data: &[u8]) -> Result<ArpPacket> {
        if data.len() < ARP_FIXED_HEADER_LEN {
            return Err(CodecError::Truncated {
                needed: ARP_FIXED_HEADER_LEN,
                got: data.len(),
            });
        }

        let hardware_addr_len = data[HARDWARE_ADDR_LEN_OFFSET];
        let protocol_addr_len = data[PROTOCOL_ADDR_LEN_OFFSET];
        let hlen = hardware_addr_len as usize;
        let plen = protocol_addr_len as usize;

        let needed = ARP_FIXED_HEADER_LEN + (2 * hlen) + (2 * plen);
        if data.len() < needed {
            return Err(CodecError::Truncated {
                needed,
                got: data.len(),
            });
        }

        let (start, end) = HARDWARE_TYPE_RANGE;
        let hardware_type = u16::from_be_bytes(data[start..end].try_into().unwrap());
        let (start, end) = PROTOCOL_TYPE_RANGE;
        let protocol_type = u16::from_be_bytes(data[start..end].try_into().unwrap());
        let (start, end) = OPCODE_RANGE;
        let operation = Operation(u16::from_be_bytes(data[start..end].try_into().unwrap()));

        let mut offset = ARP_FIXED_HEADER_LEN;
        let sender_hardware_addr = data[offset..offset + hlen].to_vec();
        offset += hlen;
        let sender_protocol_addr = data[offset..offset + plen].to_vec();
        offset += plen;
        let target_hardware_addr = data[offset..offset + hlen].to_vec();
        offset += hlen;
        let target_protocol_addr = data[offset..offset + plen].to_vec();

        Ok(ArpPacket {
            hardware_type,
            protocol_type,
            hardware_addr_len,
            protocol_addr_len,
            operation,
            sender_hardware_addr,
            sender_protocol_addr,
            target_hardware_addr,
            target_protocol_addr,
        })
    }
}

// Copies as much of the address as its slot can hold. The slot arrives
// zeroed, so a short address leaves trailing zero bytes.
fn fill_slot(slot: &mut [u8], addr: &[u8]) {
    let n = slot.len().min(addr.len());
    slot[..n].copy_from_slice(&addr[..n]);
}
