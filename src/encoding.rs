//! Text encoding for emitted records
//!
//! Records are encoded before they reach the sink. Encoding never fails:
//! a character the target encoding cannot represent is written as a
//! `\u{XXXX}` escape instead.
//!
//! # Examples
//!
//! ```
//! use ldap_log::encoding::{encode_lossy, TextEncoding};
//!
//! let bytes = encode_lossy("café", TextEncoding::Ascii);
//! assert_eq!(bytes, b"caf\\u{e9}");
//! ```

use encoding_rs::{Encoding, EncoderResult};
use std::fmt;
use std::str::FromStr;

use crate::common::{GateError, Result};

/// Target encoding for emitted records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// Strict 7-bit ASCII
    Ascii,
    /// UTF-8, every character is representable
    Utf8,
    /// Any other encoding known to `encoding_rs`
    Legacy(&'static Encoding),
}

impl TextEncoding {
    /// Resolve an encoding label
    ///
    /// `ascii` and `us-ascii` select strict 7-bit output. Every other label is
    /// looked up with the WHATWG rules of `encoding_rs`.
    pub fn for_label(label: &str) -> Result<Self> {
        let trimmed = label.trim();
        if trimmed.eq_ignore_ascii_case("ascii") || trimmed.eq_ignore_ascii_case("us-ascii") {
            return Ok(TextEncoding::Ascii);
        }

        match Encoding::for_label(trimmed.as_bytes()) {
            Some(encoding) if encoding == encoding_rs::UTF_8 => Ok(TextEncoding::Utf8),
            Some(encoding) => Ok(TextEncoding::Legacy(encoding)),
            None => Err(GateError::UnsupportedEncoding(label.to_string())),
        }
    }

    /// Canonical name of the encoding
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Ascii => "ascii",
            TextEncoding::Utf8 => "UTF-8",
            TextEncoding::Legacy(encoding) => encoding.name(),
        }
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        TextEncoding::Ascii
    }
}

impl fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextEncoding {
    type Err = GateError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        TextEncoding::for_label(s)
    }
}

/// Encode `text`, escaping every unrepresentable character
pub fn encode_lossy(text: &str, encoding: TextEncoding) -> Vec<u8> {
    match encoding {
        TextEncoding::Utf8 => text.as_bytes().to_vec(),
        TextEncoding::Ascii => {
            let mut out = Vec::with_capacity(text.len());
            for c in text.chars() {
                if c.is_ascii() {
                    out.push(c as u8);
                } else {
                    push_escape(&mut out, c);
                }
            }
            out
        }
        TextEncoding::Legacy(encoding) => encode_with(encoding, text),
    }
}

fn encode_with(encoding: &'static Encoding, text: &str) -> Vec<u8> {
    let mut encoder = encoding.new_encoder();
    let mut out = Vec::with_capacity(text.len());
    let mut src = text;

    loop {
        let needed = encoder
            .max_buffer_length_from_utf8_without_replacement(src.len())
            .unwrap_or(src.len());
        out.reserve(needed.max(16));

        let (result, read) = encoder.encode_from_utf8_to_vec_without_replacement(src, &mut out, true);
        src = &src[read..];

        match result {
            EncoderResult::InputEmpty => break,
            EncoderResult::OutputFull => continue,
            EncoderResult::Unmappable(c) => push_escape(&mut out, c),
        }
    }

    out
}

fn push_escape(out: &mut Vec<u8>, c: char) {
    out.extend(c.escape_unicode().map(|e| e as u8));
}
