//! Multi-encoding text decoding for file bodies.
//!
//! Candidates are tried in order and the first strict decode wins. The last
//! step, Latin-1, maps every byte to a code point and cannot fail, so
//! [`decode`] always yields text.

use encoding_rs::{SHIFT_JIS, UTF_8};
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// The encoding a file body was decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    ShiftJis,
    Latin1,
}

impl TextEncoding {
    /// Strict candidates in preference order; [`TextEncoding::Latin1`] follows them all.
    pub const STRICT: [TextEncoding; 2] = [TextEncoding::Utf8, TextEncoding::ShiftJis];

    fn decode_strict(self, bytes: &[u8]) -> Option<Cow<'_, str>> {
        match self {
            TextEncoding::Utf8 => UTF_8.decode_without_bom_handling_and_without_replacement(bytes),
            TextEncoding::ShiftJis if !is_jis_x0208(bytes) => None,
            TextEncoding::ShiftJis => {
                SHIFT_JIS.decode_without_bom_handling_and_without_replacement(bytes)
            }
            TextEncoding::Latin1 => Some(encoding_rs::mem::decode_latin1(bytes)),
        }
    }
}

/// Decoded file text together with the encoding that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    pub encoding: TextEncoding,
}

pub fn decode(bytes: &[u8]) -> Decoded {
    for encoding in TextEncoding::STRICT {
        if let Some(text) = encoding.decode_strict(bytes) {
            return Decoded {
                text: normalize_newlines(&text),
                encoding,
            };
        }
    }
    Decoded {
        text: normalize_newlines(&encoding_rs::mem::decode_latin1(bytes)),
        encoding: TextEncoding::Latin1,
    }
}

/// Reads and decodes a text file, or returns an empty string if it cannot be read.
pub fn read_text(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => {
            debug!("Reading file: {}", path.display());
            let decoded = decode(&bytes);
            if decoded.encoding != TextEncoding::Utf8 {
                debug!("Decoded {} as {:?}", path.display(), decoded.encoding);
            }
            decoded.text
        }
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            String::new()
        }
    }
}

/// Rejects byte layouts outside plain JIS X 0208 Shift_JIS.
///
/// `encoding_rs` decodes the Windows-31J superset, which also accepts a bare
/// 0x80 and the NEC/IBM extension rows (lead bytes 0x87 and 0xED..=0xFC).
/// Files using those fall through to Latin-1 instead.
fn is_jis_x0208(bytes: &[u8]) -> bool {
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            0x00..=0x7f | 0xa1..=0xdf => i += 1,
            0x87 | 0xed..=0xfc => return false,
            0x81..=0x9f | 0xe0..=0xec => i += 2,
            _ => return false,
        }
    }
    true
}

fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_is_preferred() {
        let decoded = decode("héllo".as_bytes());
        assert_eq!(decoded.encoding, TextEncoding::Utf8);
        assert_eq!(decoded.text, "héllo");
    }

    #[test]
    fn shift_jis_is_second() {
        // "日本" in Shift_JIS
        let decoded = decode(&[0x93, 0xfa, 0x96, 0x7b]);
        assert_eq!(decoded.encoding, TextEncoding::ShiftJis);
        assert_eq!(decoded.text, "日本");
    }

    #[test]
    fn latin1_accepts_anything() {
        // 0xFF is valid in neither UTF-8 nor Shift_JIS.
        let decoded = decode(&[b'a', 0xff]);
        assert_eq!(decoded.encoding, TextEncoding::Latin1);
        assert_eq!(decoded.text, "a\u{ff}");
    }

    #[test]
    fn windows_31j_extensions_are_not_shift_jis() {
        // NEC circled digit one, only defined in the Windows-31J superset.
        let decoded = decode(b"\x87\x40");
        assert_eq!(decoded.encoding, TextEncoding::Latin1);
        assert_eq!(decoded.text, "\u{87}@");
        let ibm = decode(&[0xfa, 0x40]);
        assert_eq!(ibm.encoding, TextEncoding::Latin1);
        assert_eq!(decode(&[b'a', 0x80]).encoding, TextEncoding::Latin1);
    }

    #[test]
    fn line_endings_are_normalized() {
        assert_eq!(decode(b"a\r\nb\rc\n").text, "a\nb\nc\n");
    }
}
