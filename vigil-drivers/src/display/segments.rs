//! Seven-segment glyph table
//!
//! Bit layout (HT16K33 backpack wiring): bit 0 = a (top), then b, c, d, e,
//! f clockwise, bit 6 = g (middle). Bit 7 is the decimal point and is never
//! set here.

/// Segment pattern for a character
///
/// Only uppercase hex letters have glyphs. Anything without a glyph renders
/// blank.
pub fn segment_pattern(ch: char) -> u8 {
    match ch {
        ' ' => 0x00,
        '-' => 0x40,
        '0' => 0x3F,
        '1' => 0x06,
        '2' => 0x5B,
        '3' => 0x4F,
        '4' => 0x66,
        '5' => 0x6D,
        '6' => 0x7D,
        '7' => 0x07,
        '8' => 0x7F,
        '9' => 0x6F,
        'A' => 0x77,
        'B' => 0x7C,
        'C' => 0x39,
        'D' => 0x5E,
        'E' => 0x79,
        'F' => 0x71,
        _ => 0x00,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits() {
        let expected = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];
        for (i, ch) in ('0'..='9').enumerate() {
            assert_eq!(segment_pattern(ch), expected[i], "digit {}", ch);
        }
    }

    #[test]
    fn test_hex_letters() {
        assert_eq!(segment_pattern('A'), 0x77);
        assert_eq!(segment_pattern('B'), 0x7C);
        assert_eq!(segment_pattern('F'), 0x71);
        // Lowercase has no glyph
        assert_eq!(segment_pattern('b'), 0x00);
    }

    #[test]
    fn test_space_and_hyphen() {
        assert_eq!(segment_pattern(' '), 0x00);
        assert_eq!(segment_pattern('-'), 0x40);
    }

    #[test]
    fn test_unknown_renders_blank() {
        assert_eq!(segment_pattern('G'), 0x00);
        assert_eq!(segment_pattern(':'), 0x00);
        assert_eq!(segment_pattern('é'), 0x00);
    }
}
