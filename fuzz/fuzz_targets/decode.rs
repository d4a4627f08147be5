#![no_main]

use arp_codec::ArpPacket;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // A Truncated error is an expected outcome; a panic is a bug.
    let _ = ArpPacket::decode(data);
});
