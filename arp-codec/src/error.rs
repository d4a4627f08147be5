use std::result;

/// Error produced while decoding an ARP packet from its wire representation.
///
/// Encoding has no error path: the output size is fully determined by the
/// packet's two 8-bit length fields, and address fields of the wrong length
/// are truncated or zero-padded rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// The buffer ended before the packet did, either inside the 8-byte
    /// fixed header or inside the address fields it declared.
    #[error("truncated ARP packet: needed {needed} bytes, got {got}")]
    Truncated { needed: usize, got: usize },
}

pub type Result<T> = result::Result<T, CodecError>;
