//! Payload extraction from noisy request bodies.
//!
//! Devices wrap the JSON object in arbitrary bytes: length prefixes,
//! checksums, stray CRLF. The span from the first `{` through the last `}`
//! is treated as the payload. Multiple brace-delimited fragments collapse
//! into one span and braces inside the surrounding noise can widen it;
//! firmware relies on the tolerance, so the heuristic stays as-is.

use thiserror::Error;

/// Reasons a body yields no payload.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    /// No `{` anywhere in the body.
    #[error("no opening brace in body")]
    NoOpeningBrace,

    /// No `}` anywhere in the body.
    #[error("no closing brace in body")]
    NoClosingBrace,

    /// The last `}` sits at or before the first `{`.
    #[error("closing brace precedes opening brace")]
    OutOfOrder,
}

/// Extract the candidate payload span from a decoded body.
///
/// Returns the substring from the first `{` through the last `}`
/// inclusive, or the reason no span exists.
pub fn extract_payload(raw: &str) -> Result<&str, ExtractError> {
    let start = raw.find('{').ok_or(ExtractError::NoOpeningBrace)?;
    let end = raw.rfind('}').ok_or(ExtractError::NoClosingBrace)?;
    if end <= start {
        return Err(ExtractError::OutOfOrder);
    }
    Ok(&raw[start..=end])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_wrapper_noise() {
        let body = r#"junk123{"user_id":"42","io_time":"08:00","io_mode":"in"}trailing"#;
        assert_eq!(
            extract_payload(body).unwrap(),
            r#"{"user_id":"42","io_time":"08:00","io_mode":"in"}"#
        );
    }

    #[test]
    fn exact_object_passes_through() {
        assert_eq!(extract_payload(r#"{"a":1}"#).unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn missing_open_brace() {
        assert_eq!(
            extract_payload("no json here}"),
            Err(ExtractError::NoOpeningBrace)
        );
    }

    #[test]
    fn missing_close_brace() {
        assert_eq!(
            extract_payload("prefix{\"a\":1"),
            Err(ExtractError::NoClosingBrace)
        );
    }

    #[test]
    fn close_before_open() {
        assert_eq!(extract_payload("} noise {"), Err(ExtractError::OutOfOrder));
    }

    #[test]
    fn empty_body() {
        assert_eq!(extract_payload(""), Err(ExtractError::NoOpeningBrace));
    }

    #[test]
    fn two_fragments_collapse_into_one_span() {
        // Documented tolerance: two objects become one (unparseable) span.
        assert_eq!(
            extract_payload(r#"{"a":1} {"b":2}"#).unwrap(),
            r#"{"a":1} {"b":2}"#
        );
    }

    #[test]
    fn multibyte_noise_around_payload() {
        assert_eq!(extract_payload("→→{\"a\":1}←←").unwrap(), r#"{"a":1}"#);
    }
}
