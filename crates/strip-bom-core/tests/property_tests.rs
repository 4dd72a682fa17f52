//! Property-based tests for strip-bom-core
//!
//! Uses proptest to check idempotence, identity, position sensitivity and
//! stream/buffer agreement across arbitrary inputs.

use proptest::prelude::*;
use strip_bom_core::{
    is_utf8, strip_bom, strip_bom_buffer, strip_bom_stream_with, StreamOptions, BOM_BYTES,
    BOM_CHAR,
};

/// Generate arbitrary byte buffers, optionally led by a byte order mark
fn arb_buffer() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![
        // Arbitrary bytes, mostly invalid UTF-8
        prop::collection::vec(any::<u8>(), 0..64),
        // Valid UTF-8 text
        any::<String>().prop_map(String::into_bytes),
        // Mark followed by valid UTF-8 text
        any::<String>().prop_map(|text| [&BOM_BYTES[..], text.as_bytes()].concat()),
        // Mark followed by arbitrary bytes
        prop::collection::vec(any::<u8>(), 0..64)
            .prop_map(|bytes| [&BOM_BYTES[..], &bytes[..]].concat()),
    ]
}

fn collect_stream(bytes: &[u8], chunk_size: usize) -> Vec<u8> {
    strip_bom_stream_with(bytes, StreamOptions::new(chunk_size).unwrap())
        .collect::<Result<Vec<_>, _>>()
        .unwrap()
        .concat()
}

proptest! {
    #[test]
    fn prop_strip_text_idempotent(text in any::<String>()) {
        // Only one mark is removed per call
        prop_assume!(!text.starts_with("\u{FEFF}\u{FEFF}"));
        let once = strip_bom(&text);
        prop_assert_eq!(strip_bom(once), once);
    }

    #[test]
    fn prop_strip_text_without_bom_is_identity(text in any::<String>()) {
        prop_assume!(!text.starts_with(BOM_CHAR));
        prop_assert!(std::ptr::eq(strip_bom(&text), text.as_str()));
    }

    #[test]
    fn prop_strip_text_removes_exactly_one_char(text in any::<String>()) {
        let prefixed = format!("{BOM_CHAR}{text}");
        prop_assert_eq!(strip_bom(&prefixed), text.as_str());
    }

    #[test]
    fn prop_strip_buffer_idempotent(bytes in arb_buffer()) {
        prop_assume!(!bytes.starts_with(&[BOM_BYTES, BOM_BYTES].concat()));
        let once = strip_bom_buffer(&bytes);
        prop_assert_eq!(strip_bom_buffer(once), once);
    }

    #[test]
    fn prop_strip_buffer_gated_on_utf8(bytes in arb_buffer()) {
        let stripped = strip_bom_buffer(&bytes);
        if bytes.starts_with(&BOM_BYTES) && is_utf8(&bytes) {
            prop_assert_eq!(stripped, &bytes[3..]);
        } else {
            prop_assert!(std::ptr::eq(stripped, bytes.as_slice()));
        }
    }

    #[test]
    fn prop_bom_after_offset_zero_is_inert(
        prefix in "[a-z]{1,16}",
        suffix in any::<String>(),
    ) {
        let bytes = [prefix.as_bytes(), &BOM_BYTES[..], suffix.as_bytes()].concat();
        prop_assert_eq!(strip_bom_buffer(&bytes), bytes.as_slice());
    }

    #[test]
    fn prop_stream_matches_buffer_when_first_read_covers_input(
        bytes in arb_buffer(),
        extra in 0usize..32,
    ) {
        let chunk_size = bytes.len().max(3) + extra;
        prop_assert_eq!(collect_stream(&bytes, chunk_size), strip_bom_buffer(&bytes).to_vec());
    }

    #[test]
    fn prop_stream_preserves_bytes_after_first_chunk(
        bytes in arb_buffer(),
        chunk_size in 1usize..16,
    ) {
        let output = collect_stream(&bytes, chunk_size);
        let first_len = bytes.len().min(chunk_size.max(3));
        let expected = [strip_bom_buffer(&bytes[..first_len]), &bytes[first_len..]].concat();
        prop_assert_eq!(output, expected);
    }
}
