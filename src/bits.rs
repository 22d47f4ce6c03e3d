//! Logical-to-physical bit conversion. The padding header makes the packed
//! blob self-describing: `padding - 1` zero bits and a single one bit sit
//! in front of the payload, bringing its length to a whole number of
//! bytes. The leading one marks where padding ends when reading back.

use bitvec::prelude::*;

use crate::error::HuffmanError;

/// Logical bit sequence, most significant bit first.
pub type BitBuffer = BitVec<u8, Msb0>;

/// Pad and pack a logical bit sequence into bytes.
///
/// `padding = 8 - (len mod 8)` is always in `1..=8`: a payload already at
/// a byte boundary still gets one full padding byte, so the marker bit is
/// never absent.
pub fn pack(bits: &BitSlice<u8, Msb0>) -> Vec<u8> {
    let padding = 8 - bits.len() % 8;
    let mut padded = BitBuffer::with_capacity(padding + bits.len());
    for _ in 0..padding - 1 {
        padded.push(false);
    }
    padded.push(true);
    padded.extend_from_bitslice(bits);
    padded.into_vec()
}

/// Strip the padding header and return the logical bit sequence.
///
/// The marker must appear within the first 8 bits; a buffer without one
/// is malformed, not empty.
pub fn unpack(bytes: &[u8]) -> Result<BitBuffer, HuffmanError> {
    if bytes.is_empty() {
        return Err(HuffmanError::EmptyBuffer);
    }
    let bits = bytes.view_bits::<Msb0>();
    let marker = bits[..8]
        .first_one()
        .ok_or(HuffmanError::MissingPaddingMarker)?;
    Ok(bits[marker + 1..].to_bitvec())
}
