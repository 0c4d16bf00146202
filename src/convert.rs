//! The format-specific unpacking rules. Every function here is a pure, total
//! function of a correctly sized input buffer; faults only happen upstream
//! (device read) or downstream (PNG encoding).

/// Repacks a 1 bpp frame into a PNG-sized bit buffer.
///
/// Both source and destination are MSB-first bitstreams addressed by the
/// flattened pixel index `x + y * width`, ignoring per-row byte padding.
/// The output is allocated at the PNG scanline size, `ceil(width/8)` bytes
/// per row. When `width` is a byte multiple the flattened and per-row
/// layouts coincide and this is a straight copy; otherwise the trailing rows
/// land shifted relative to the scanline boundaries the decoder assumes.
pub fn pack_mono(src: &[u8], width: usize, height: usize) -> Vec<u8> {
    let mut packed = vec![0u8; (width + 7) / 8 * height];
    for pos in 0..width * height {
        let bit = (src[pos / 8] >> (7 - pos % 8)) & 0x01;
        packed[pos / 8] |= bit << (7 - pos % 8);
    }
    packed
}

/// Averages one 32 bpp scanline down to 8-bit grayscale samples.
///
/// Each pixel is a native-endian 32-bit word with channels at bit offsets
/// 24, 16 and 8; the lowest byte is padding, not alpha, and is ignored.
/// The gray value is the truncating integer average of the three channels,
/// not a luminance-weighted sum. `gray` must hold one byte per pixel of
/// `row`.
pub fn rgba_row_to_gray(row: &[u8], gray: &mut [u8]) {
    for (pixel, sample) in row.chunks_exact(4).zip(gray.iter_mut()) {
        *sample = rgba_word_to_gray(u32::from_ne_bytes([
            pixel[0], pixel[1], pixel[2], pixel[3],
        ]));
    }
}

fn rgba_word_to_gray(word: u32) -> u8 {
    let red = (word >> 24) & 0xff;
    let green = (word >> 16) & 0xff;
    let blue = (word >> 8) & 0xff;
    ((red + green + blue) / 3) as u8
}
