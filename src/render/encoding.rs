//! WinAnsiEncoding for the standard fonts.

/// Code points 0x80..=0x9F; `None` marks undefined slots.
const HIGH_CONTROL: [Option<char>; 32] = [
    Some('€'), None, Some('‚'), Some('ƒ'), Some('„'), Some('…'), Some('†'), Some('‡'),
    Some('ˆ'), Some('‰'), Some('Š'), Some('‹'), Some('Œ'), None, Some('Ž'), None,
    None, Some('‘'), Some('’'), Some('“'), Some('”'), Some('•'), Some('–'), Some('—'),
    Some('˜'), Some('™'), Some('š'), Some('›'), Some('œ'), None, Some('ž'), Some('Ÿ'),
];

/// Byte substituted for characters outside the encoding.
pub const REPLACEMENT: u8 = b'?';

/// Encode one character, or `None` if WinAnsi cannot represent it.
pub fn encode_char(c: char) -> Option<u8> {
    match c as u32 {
        0x20..=0x7E | 0xA0..=0xFF => Some(c as u8),
        _ => HIGH_CONTROL
            .iter()
            .position(|slot| *slot == Some(c))
            .map(|i| 0x80 + i as u8),
    }
}

/// Decode one byte; undefined bytes decode to U+FFFD.
pub fn decode_byte(b: u8) -> char {
    match b {
        0x80..=0x9F => HIGH_CONTROL[(b - 0x80) as usize].unwrap_or('\u{fffd}'),
        _ => b as char,
    }
}

/// Encode text, substituting `?` for unmappable characters.
///
/// Returns the bytes and the number of substitutions made.
pub fn encode(text: &str) -> (Vec<u8>, usize) {
    let mut replaced = 0;
    let bytes = text
        .chars()
        .map(|c| {
            encode_char(c).unwrap_or_else(|| {
                replaced += 1;
                REPLACEMENT
            })
        })
        .collect();
    (bytes, replaced)
}

/// Decode WinAnsi bytes.
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| decode_byte(b)).collect()
}
