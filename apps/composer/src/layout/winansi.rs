//! WinAnsiEncoding for text shown with the non-embedded standard fonts.
//!
//! Printable ASCII and Latin-1 (0xA0..=0xFF) map to themselves; the typographic
//! characters Windows-1252 places in 0x80..=0x9F are mapped explicitly. Everything else,
//! control characters included, has no glyph and is rejected.
//!
//! The code returned here is also the slot used to look up glyph widths, so measurement
//! and drawing always agree on which glyph a character becomes.

/// Encodes a single character, or `None` if WinAnsi has no code for it.
pub fn encode_char(c: char) -> Option<u8> {
    let code = c as u32;
    match code {
        0x20..=0x7E | 0xA0..=0xFF => Some(code as u8),
        _ => match c {
            '€' => Some(0x80),
            '‚' => Some(0x82),
            'ƒ' => Some(0x83),
            '„' => Some(0x84),
            '…' => Some(0x85),
            '†' => Some(0x86),
            '‡' => Some(0x87),
            'ˆ' => Some(0x88),
            '‰' => Some(0x89),
            'Š' => Some(0x8A),
            '‹' => Some(0x8B),
            'Œ' => Some(0x8C),
            'Ž' => Some(0x8E),
            '‘' => Some(0x91),
            '’' => Some(0x92),
            '“' => Some(0x93),
            '”' => Some(0x94),
            '•' => Some(0x95),
            '–' => Some(0x96),
            '—' => Some(0x97),
            '˜' => Some(0x98),
            '™' => Some(0x99),
            'š' => Some(0x9A),
            '›' => Some(0x9B),
            'œ' => Some(0x9C),
            'ž' => Some(0x9E),
            'Ÿ' => Some(0x9F),
            _ => None,
        },
    }
}

/// Encodes `text`, or returns the first character WinAnsi has no code for.
pub fn encode(text: &str) -> Result<Vec<u8>, char> {
    text.chars().map(|c| encode_char(c).ok_or(c)).collect()
}

/// First character of `text` that cannot be encoded, if any.
pub fn first_unencodable(text: &str) -> Option<char> {
    text.chars().find(|c| encode_char(*c).is_none())
}
