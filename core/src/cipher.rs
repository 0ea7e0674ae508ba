//! Skree text substitution: a Caesar shift over ASCII letters.
//!
//! Used by the faction archives to render text "in Skree". Shift is +1 for
//! encoding; everything outside `A-Z`/`a-z` passes through unchanged.

/// Positions the Skree substitution rotates each letter by.
pub const SKREE_SHIFT: u8 = 1;

/// Rotates ASCII letters in `text` by `shift` positions, wrapping within
/// their case. Non-letter characters are untouched.
pub fn shift_text(text: &str, shift: u8) -> String {
    let shift = shift % 26;
    text.chars()
        .map(|c| {
            let base = if c.is_ascii_uppercase() {
                b'A'
            } else if c.is_ascii_lowercase() {
                b'a'
            } else {
                return c;
            };
            (((c as u8 - base + shift) % 26) + base) as char
        })
        .collect()
}

/// Renders `text` in Skree.
pub fn encode(text: &str) -> String {
    shift_text(text, SKREE_SHIFT)
}

/// Inverse of [`encode`].
pub fn decode(text: &str) -> String {
    shift_text(text, 26 - SKREE_SHIFT % 26)
}

#[cfg(test)]
mod tests {
    use super::{decode, encode, shift_text};

    #[test]
    fn shifts_letters_preserving_case() {
        assert_eq!(encode("abc XYZ"), "bcd YZA");
    }

    #[test]
    fn wraps_at_end_of_alphabet() {
        assert_eq!(encode("zZ"), "aA");
    }

    #[test]
    fn leaves_non_letters_untouched() {
        assert_eq!(encode("3 nodes, 2 left!"), "3 opeft, 2 mfgu!");
    }

    #[test]
    fn decode_inverts_encode() {
        let original = "Watch carefully... Level: 12";
        assert_eq!(decode(&encode(original)), original);
    }

    #[test]
    fn full_rotation_is_identity() {
        assert_eq!(shift_text("Pattern", 26), "Pattern");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(encode(""), "");
    }
}
