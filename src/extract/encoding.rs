//! Lossy single-pass decoders for the encodings tried on legacy documents.
//!
//! All decoders drop what they cannot decode instead of substituting U+FFFD,
//! so garbage bytes vanish rather than turning into replacement characters.

use encoding_rs::WINDOWS_1252;

/// Text encodings tried, in order, by the sentence extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Latin1,
    Cp1252,
    Iso8859_1,
}

impl TextEncoding {
    /// Attempt order
    pub const ALL: [TextEncoding; 4] = [
        TextEncoding::Utf8,
        TextEncoding::Latin1,
        TextEncoding::Cp1252,
        TextEncoding::Iso8859_1,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TextEncoding::Utf8 => "utf-8",
            TextEncoding::Latin1 => "latin1",
            TextEncoding::Cp1252 => "cp1252",
            TextEncoding::Iso8859_1 => "iso-8859-1",
        }
    }

    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Utf8 => decode_utf8_ignoring(bytes),
            // ISO-8859-1 maps every byte to the code point of the same value
            TextEncoding::Latin1 | TextEncoding::Iso8859_1 => bytes.iter().map(|&b| b as char).collect(),
            TextEncoding::Cp1252 => decode_cp1252_ignoring(bytes),
        }
    }
}

/// Decode UTF-8, skipping invalid sequences
pub fn decode_utf8_ignoring(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}

fn decode_cp1252_ignoring(bytes: &[u8]) -> String {
    // 0x81, 0x8D, 0x8F, 0x90 and 0x9D are unassigned in cp1252
    let assigned: Vec<u8> = bytes
        .iter()
        .copied()
        .filter(|b| !matches!(b, 0x81 | 0x8D | 0x8F | 0x90 | 0x9D))
        .collect();
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(&assigned);
    text.into_owned()
}

/// Universal newline translation: `\r\n` and lone `\r` become `\n`
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}
