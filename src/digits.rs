//! Conversion between ASCII digits and their Unicode subscript glyphs.
//!
//! Formulas are parsed from and stored with plain digits (`H2O`); the
//! pretty form (`H₂O`) exists only for display.

const SUBSCRIPTS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

/// Replace every ASCII digit with its subscript glyph.
pub fn to_display(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => SUBSCRIPTS[d as usize],
            None => c,
        })
        .collect()
}

/// Replace every subscript glyph with its ASCII digit. Inverse of [`to_display`].
pub fn to_plain(s: &str) -> String {
    s.chars()
        .map(|c| match SUBSCRIPTS.iter().position(|&g| g == c) {
            Some(d) => char::from(b'0' + d as u8),
            None => c,
        })
        .collect()
}
