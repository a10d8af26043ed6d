//! Text codec between external UTF-8 and internal codepoint slices.
//!
//! With the `simd` feature, byte validation goes through `simdutf8`;
//! otherwise through `std::str::from_utf8`. Either way a valid input is
//! borrowed, not copied, before decoding into `char`s.

/// Decode a string into its codepoints.
#[inline]
pub fn decode_str(text: &str) -> Vec<char> {
    text.chars().collect()
}

/// Validate `bytes` as UTF-8 and borrow it as `&str`.
#[cfg(feature = "simd")]
pub fn validate(bytes: &[u8]) -> Result<&str, String> {
    // The basic API reports no position; fall back to std for the message.
    simdutf8::basic::from_utf8(bytes).map_err(|_| match std::str::from_utf8(bytes) {
        Err(e) => e.to_string(),
        Ok(_) => "invalid utf-8".to_string(),
    })
}

/// Validate `bytes` as UTF-8 and borrow it as `&str`.
#[cfg(not(feature = "simd"))]
pub fn validate(bytes: &[u8]) -> Result<&str, String> {
    std::str::from_utf8(bytes).map_err(|e| e.to_string())
}

/// Validate and decode raw UTF-8 bytes into codepoints.
#[inline]
pub fn decode_bytes(bytes: &[u8]) -> Result<Vec<char>, String> {
    validate(bytes).map(decode_str)
}

/// Encode a codepoint slice back to a `String`.
#[inline]
pub fn encode(word: &[char]) -> String {
    let mut out = String::with_capacity(word.iter().map(|c| c.len_utf8()).sum());
    out.extend(word);
    out
}
