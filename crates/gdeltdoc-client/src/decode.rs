//! JSON decoding with a bounded repair loop.
//!
//! The DOC API occasionally embeds raw control bytes inside string values,
//! which strict JSON parsers reject. [`decode`] first tries a strict parse
//! and then repeatedly strips illegal bytes and retries, stopping as soon
//! as a pass removes nothing.

use std::borrow::Cow;

use serde_json::{Map, Value};

use crate::error::DecodeError;

/// Loosely-typed decoded response body.
pub type RawDocument = Map<String, Value>;

/// ASCII control bytes that never belong in the payload. Tab, newline and
/// carriage return are kept.
#[must_use]
pub const fn is_illegal_control(byte: u8) -> bool {
    matches!(byte, 0x00..=0x08 | 0x0B | 0x0C | 0x0E..=0x1F)
}

/// Removes every byte for which [`is_illegal_control`] holds.
///
/// Borrows the input unchanged when there is nothing to remove.
#[must_use]
pub fn strip_control_bytes(bytes: &[u8]) -> Cow<'_, [u8]> {
    if bytes.iter().any(|&b| is_illegal_control(b)) {
        Cow::Owned(
            bytes
                .iter()
                .copied()
                .filter(|&b| !is_illegal_control(b))
                .collect(),
        )
    } else {
        Cow::Borrowed(bytes)
    }
}

/// Reads the first JSON value of `bytes` as an object. Anything after it is
/// ignored.
fn parse_object(bytes: &[u8]) -> Result<RawDocument, serde_json::Error> {
    match serde_json::Deserializer::from_slice(bytes)
        .into_iter::<RawDocument>()
        .next()
    {
        Some(result) => result,
        None => serde_json::from_slice(bytes),
    }
}

/// Parses `bytes` as a JSON object, running up to `max_passes`
/// sanitization passes if the strict parse fails.
///
/// # Errors
///
/// Returns [`DecodeError`] with the last parse error once a pass changes
/// nothing or `max_passes` is exhausted.
pub fn decode(bytes: &[u8], max_passes: usize) -> Result<RawDocument, DecodeError> {
    let mut last_error = match parse_object(bytes) {
        Ok(doc) => return Ok(doc),
        Err(e) => e,
    };

    let mut current: Cow<'_, [u8]> = Cow::Borrowed(bytes);
    let mut passes = 0;

    while passes < max_passes {
        passes += 1;
        let cleaned = match strip_control_bytes(&current) {
            Cow::Borrowed(_) => break,
            Cow::Owned(cleaned) => cleaned,
        };

        match parse_object(&cleaned) {
            Ok(doc) => {
                tracing::warn!(
                    passes,
                    removed = bytes.len() - cleaned.len(),
                    "repaired upstream JSON by stripping control bytes"
                );
                return Ok(doc);
            }
            Err(e) => last_error = e,
        }
        current = Cow::Owned(cleaned);
    }

    tracing::warn!(passes, error = %last_error, "upstream JSON could not be repaired");
    Err(DecodeError {
        passes,
        source: last_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_bytes_after_root_object_are_ignored() {
        let doc = decode(b"{\"articles\": []}\n", 100).unwrap();
        assert!(doc.contains_key("articles"));

        let doc = decode(b"{\"articles\": []} <html>garbage", 100).unwrap();
        assert!(doc.contains_key("articles"));
    }

    #[test]
    fn empty_body_is_a_decode_error() {
        let err = decode(b"", 100).unwrap_err();
        assert_eq!(err.passes, 1);
    }

    #[test]
    fn valid_json_needs_no_passes() {
        let doc = decode(br#"{"articles": []}"#, 100).unwrap();
        assert!(doc["articles"].as_array().unwrap().is_empty());
    }

    #[test]
    fn control_bytes_inside_strings_are_stripped() {
        let raw = b"{\"articles\":[{\"title\":\"bad\x00 ti\x1Ftle\x07\"}]}";
        let doc = decode(raw, 100).unwrap();
        assert_eq!(doc["articles"][0]["title"], "bad title");
    }

    #[test]
    fn whitespace_controls_are_preserved() {
        let cleaned = strip_control_bytes(b"a\tb\nc\rd\x0Be\x0Cf");
        assert_eq!(&*cleaned, b"a\tb\nc\rdef");
    }

    #[test]
    fn clean_input_is_borrowed() {
        assert!(matches!(strip_control_bytes(b"{}"), Cow::Borrowed(_)));
    }

    #[test]
    fn unrepairable_input_without_illegal_bytes_stops_after_one_pass() {
        let err = decode(br#"{"articles": [}"#, 100).unwrap_err();
        assert_eq!(err.passes, 1);
    }

    #[test]
    fn unrepairable_input_with_illegal_bytes_stops_when_nothing_changes() {
        let err = decode(b"{\"a\x01\": }", 100).unwrap_err();
        assert_eq!(err.passes, 2);
    }

    #[test]
    fn zero_depth_disables_repair() {
        let err = decode(b"{\"title\":\"x\x00\"}", 0).unwrap_err();
        assert_eq!(err.passes, 0);
    }

    #[test]
    fn depth_bounds_the_loop() {
        let err = decode(b"{\"a\x01\": }", 1).unwrap_err();
        assert_eq!(err.passes, 1);
    }

    #[test]
    fn non_object_root_is_rejected() {
        let err = decode(b"[1, 2, 3]", 100).unwrap_err();
        assert_eq!(err.passes, 1);
    }

    #[test]
    fn decoding_is_idempotent() {
        let repairable = b"{\"title\":\"nul\x00here\",\"n\":1}";
        assert_eq!(decode(repairable, 100).unwrap(), decode(repairable, 100).unwrap());

        let broken = b"{\"title\":\"nul\x00here\",}";
        let first = decode(broken, 100).unwrap_err();
        let second = decode(broken, 100).unwrap_err();
        assert_eq!(first.passes, second.passes);
        assert_eq!(first.to_string(), second.to_string());
    }
}
