//! Property-based tests for the codec.
//!
//! Uses proptest to check that the encode/decode pair and the direction
//! detector hold for arbitrary valid text.

use braille::{decode, detect, encode, translate, Direction, Error};
use proptest::prelude::*;

/// Non-empty strings over letters, digits and space in which every digit run
/// ends at a space or at the end of the string.
fn valid_text() -> impl Strategy<Value = String> {
    proptest::collection::vec("[a-zA-Z]{0,6}[0-9]{0,4}", 1..10)
        .prop_map(|words| words.join(" "))
        .prop_filter("non-empty", |text| !text.is_empty())
}

/// Strings over the cell alphabet.
fn cell_alphabet(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop_oneof![Just('O'), Just('.')], len)
        .prop_map(|chars| chars.into_iter().collect())
}

// =============================================================================
// Round-trip Properties
// =============================================================================

proptest! {
    /// decode(encode(s)) = s, case and digits preserved, for closed digit runs
    #[test]
    fn prop_roundtrip(text in valid_text()) {
        let braille = encode(&text).unwrap();
        prop_assert_eq!(decode(&braille).unwrap(), text);
    }

    /// translate(translate(s)) = s through detection in both directions
    #[test]
    fn prop_translate_twice(text in valid_text()) {
        // All-`O` text is detected as Braille.
        prop_assume!(detect(&text) == Direction::Encode);
        let braille = translate(&text).unwrap();
        prop_assert_eq!(translate(&braille).unwrap(), text);
    }
}

// =============================================================================
// Shape Properties
// =============================================================================

proptest! {
    /// Encoder output is whole cells over the cell alphabet
    #[test]
    fn prop_encode_whole_cells(text in "[a-zA-Z0-9 ]{1,64}") {
        let braille = encode(&text).unwrap();
        prop_assert_eq!(braille.len() % 6, 0);
        prop_assert!(braille.len() >= 6 * text.len());
        prop_assert_eq!(detect(&braille), Direction::Decode);
    }

    /// Any length that is not a multiple of 6 is rejected
    #[test]
    fn prop_bad_length_rejected(braille in (1usize..100)
        .prop_filter("not a multiple of 6", |len| len % 6 != 0)
        .prop_flat_map(cell_alphabet))
    {
        let length = braille.len();
        prop_assert_eq!(decode(&braille), Err(Error::InvalidLength { length }));
    }

    /// Whole cells either decode or name an unknown cell; nothing else
    #[test]
    fn prop_whole_cells_never_length_error(braille in (1usize..16)
        .prop_flat_map(|cells| cell_alphabet(cells * 6)))
    {
        match decode(&braille) {
            Ok(_) | Err(Error::UnknownCell { .. }) => {}
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
    }

    /// Text with a character outside the alphabet never encodes
    #[test]
    fn prop_invalid_character_rejected(
        prefix in "[a-z ]{0,8}",
        bad in "[!-/:-@\\[-`{-~]",
    ) {
        let text = format!("{prefix}{bad}");
        let rejected = matches!(
            encode(&text),
            Err(Error::InvalidCharacter { position, .. }) if position == prefix.len()
        );
        prop_assert!(rejected);
    }
}
