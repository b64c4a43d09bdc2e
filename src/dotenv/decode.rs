// envfile-rs: .env loader and environment accessors
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Env file bytes to UTF-8 text.
//!
//! ```text
//! BOM UTF-8     --> strip BOM, UTF-8
//! BOM UTF-16LE  --> UTF-16LE
//! BOM UTF-16BE  --> UTF-16BE
//! no BOM        --> UTF-8
//! ```
//!
//! Uses `encoding_rs`. Malformed sequences become U+FFFD and the rest of the
//! file still loads; `lossy` records that it happened.

use encoding_rs::{Encoding, UTF_8};
use std::borrow::Cow;

/// Decoded env file content.
pub(crate) struct Decoded<'a> {
    pub(crate) text: Cow<'a, str>,
    pub(crate) encoding: &'static str,
    /// At least one malformed sequence was replaced.
    pub(crate) lossy: bool,
}

/// Decodes env file content, never failing.
pub(crate) fn decode(bytes: &[u8]) -> Decoded<'_> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => (UTF_8, bytes),
    };

    let (text, lossy) = encoding.decode_without_bom_handling(body);
    Decoded {
        text,
        encoding: encoding.name(),
        lossy,
    }
}

#[cfg(test)]
mod tests {
    use super::decode;

    #[test]
    fn test_decode_plain_utf8_borrows() {
        let decoded = decode(b"KEY=caf\xc3\xa9");
        assert_eq!(decoded.text, "KEY=café");
        assert!(matches!(decoded.text, std::borrow::Cow::Borrowed(_)));
        assert!(!decoded.lossy);
    }

    #[test]
    fn test_decode_strips_utf8_bom() {
        assert_eq!(decode(b"\xef\xbb\xbfKEY=1").text, "KEY=1");
    }

    #[test]
    fn test_decode_utf16le_with_bom() {
        let mut bytes = vec![0xFF, 0xFE];
        for unit in "A=b".encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        let decoded = decode(&bytes);
        assert_eq!(decoded.text, "A=b");
        assert_eq!(decoded.encoding, "UTF-16LE");
    }

    #[test]
    fn test_decode_replaces_invalid_utf8() {
        let decoded = decode(b"# caf\xe9\nKEY=1");
        assert_eq!(decoded.text, "# caf\u{FFFD}\nKEY=1");
        assert_eq!(decoded.encoding, "UTF-8");
        assert!(decoded.lossy);
    }
}
