#![no_main]

use arp_codec::ArpPacket;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(packet) = ArpPacket::decode(data) {
        // Decode ignores bytes past the declared total, so re-encoding must
        // reproduce exactly that prefix of the input.
        let wire = packet.encode();
        assert_eq!(&data[..wire.len()], &wire[..]);
    }
});
