//! # Base64 Encoding/Decoding
//!
//! URL-safe base64 without padding.

use base64::{engine::general_purpose, Engine as _};

/// Encode bytes to base64 URL-safe string (no padding).
pub fn b64u_encode(content: impl AsRef<[u8]>) -> String {
    general_purpose::URL_SAFE_NO_PAD.encode(content)
}

/// Decode base64 URL-safe string to UTF-8 string.
pub fn b64u_decode_to_string(b64u: &str) -> Result<String, Error> {
    let bytes = general_purpose::URL_SAFE_NO_PAD
        .decode(b64u)
        .map_err(|_| Error::FailToB64uDecode)?;
    String::from_utf8(bytes).map_err(|_| Error::FailToB64uDecode)
}

// region:    --- Error
#[derive(Debug)]
pub enum Error {
    FailToB64uDecode,
}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl std::error::Error for Error {}
// endregion: --- Error

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_b64u_encode_decode_text() {
        let encoded = b64u_encode("0xabc:Sign this\nTimestamp: 1");
        assert!(!encoded.contains('='));
        assert!(!encoded.contains('\n'));
        assert_eq!(
            b64u_decode_to_string(&encoded).unwrap(),
            "0xabc:Sign this\nTimestamp: 1"
        );
    }

    #[test]
    fn test_b64u_decode_rejects_garbage() {
        assert!(b64u_decode_to_string("***").is_err());
    }
}
