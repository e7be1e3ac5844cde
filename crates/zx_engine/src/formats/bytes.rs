//! Byte level primitives of the export codec.

/// Pack a row of pixels into bytes, 8 pixels per byte, bit 7 = leftmost.
///
/// A trailing partial byte is padded with paper (zero bits).
pub fn pack_row(pixels: &[bool]) -> Vec<u8> {
    pixels
        .chunks(8)
        .map(|chunk| {
            chunk
                .iter()
                .enumerate()
                .fold(0u8, |acc, (bit, &ink)| if ink { acc | (0x80 >> bit) } else { acc })
        })
        .collect()
}

/// Companion mask byte for masked blitting: the complement of the pixel byte.
pub fn mask_byte(byte: u8) -> u8 {
    !byte
}

/// The two bytes a sprite byte occupies when drawn `shift` pixels to the right
/// of a byte boundary.
///
/// Returns `(byte >> shift, Some(overflow))` where the overflow carries the low
/// bits into the next screen column. Shift 0 has no overflow byte. Shifts are
/// taken modulo 8.
pub fn pre_shift(byte: u8, shift: u8) -> (u8, Option<u8>) {
    let shift = shift % 8;
    if shift == 0 {
        (byte, None)
    } else {
        (byte >> shift, Some(byte << (8 - shift)))
    }
}

/// The data bytes of `byte` at `shift`, in emission order.
pub fn shifted_bytes(byte: u8, shift: u8) -> Vec<u8> {
    match pre_shift(byte, shift) {
        (left, None) => vec![left],
        (left, Some(right)) => vec![left, right],
    }
}
