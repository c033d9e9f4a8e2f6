//! GBK ⇄ UTF-8 conversion.
//!
//! Tables of Chinese text often arrive from systems that still write GBK.
//! These helpers convert at the edges so the renderer only ever sees UTF-8.
//!
//! ```rust
//! use columnize::gbk::{decode_gbk, encode_gbk};
//!
//! let bytes = encode_gbk("中文").unwrap();
//! assert_eq!(bytes, vec![0xD6, 0xD0, 0xCE, 0xC4]);
//! assert_eq!(decode_gbk(&bytes).unwrap(), "中文");
//! ```

use encoding_rs::GBK;

use crate::error::ColumnizeError;

const ENCODING: &str = "GBK";

/// Decodes GBK bytes, failing on malformed sequences.
pub fn decode_gbk(bytes: &[u8]) -> Result<String, ColumnizeError> {
    GBK.decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
        .ok_or(ColumnizeError::Decode { encoding: ENCODING })
}

/// Decodes GBK bytes, replacing malformed sequences with U+FFFD.
pub fn decode_gbk_lossy(bytes: &[u8]) -> String {
    let (text, had_errors) = GBK.decode_without_bom_handling(bytes);
    if had_errors {
        tracing::warn!(len = bytes.len(), "replaced malformed GBK sequences");
    }
    text.into_owned()
}

/// Encodes text as GBK, failing when a character has no GBK mapping.
pub fn encode_gbk(text: &str) -> Result<Vec<u8>, ColumnizeError> {
    let (bytes, _, had_errors) = GBK.encode(text);
    if had_errors {
        return Err(ColumnizeError::Encode { encoding: ENCODING });
    }
    Ok(bytes.into_owned())
}

/// Encodes text as GBK, writing unmappable characters as `&#NNNN;` references.
pub fn encode_gbk_lossy(text: &str) -> Vec<u8> {
    let (bytes, _, had_errors) = GBK.encode(text);
    if had_errors {
        tracing::warn!("wrote unmappable characters as numeric references");
    }
    bytes.into_owned()
}
