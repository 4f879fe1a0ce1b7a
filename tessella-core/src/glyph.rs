//! Character and string drawing
//!
//! The font is an explicit per-call reference, so rendering has no
//! ambient state and two callers can draw with different fonts into
//! the same canvas.

use crate::font::Font;
use crate::raster::Painter;

/// Draw one character with its top-left corner at (x, y)
///
/// Characters the font does not carry draw nothing.
pub fn draw_char(painter: &mut Painter<'_>, font: &Font, x: i16, y: i16, ch: char, on: bool) {
    let Some(glyph) = font.glyph(ch) else {
        return;
    };

    for col in 0..glyph.cols() {
        for row in 0..glyph.rows() {
            if glyph.pixel(row, col) {
                painter.pixel(x + col as i16, y + row as i16, on);
            }
        }
    }
}

/// Draw a string left to right
///
/// Fixed-width layout: every character advances `1 + font.cols()`
/// pixels, leaving one blank column between glyphs regardless of
/// glyph content.
pub fn draw_string(painter: &mut Painter<'_>, font: &Font, x: i16, y: i16, text: &str, on: bool) {
    let advance = 1 + font.cols() as i16;
    for (i, ch) in text.chars().enumerate() {
        draw_char(painter, font, x + i as i16 * advance, y, ch, on);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{Canvas, Rotation};
    use crate::font::{FONT_3X5, FONT_4X6};

    #[test]
    fn test_char_a_lands_bit_exact() {
        let mut canvas = Canvas::new(1, 1).unwrap();
        let mut painter = Painter::new(&mut canvas, Rotation::Standard);
        draw_char(&mut painter, &FONT_3X5, 0, 0, 'A', true);

        // 'A' columns 0x1F 0x05 0x1F decode to these row bytes
        let expected = [0xA0, 0xA0, 0xE0, 0xA0, 0xE0, 0x00, 0x00, 0x00];
        for (y, &byte) in expected.iter().enumerate() {
            assert_eq!(canvas.row_byte(0, y as u8), byte, "row {}", y);
        }
    }

    #[test]
    fn test_char_offset_origin() {
        let mut canvas = Canvas::new(2, 1).unwrap();
        let mut painter = Painter::new(&mut canvas, Rotation::Standard);
        draw_char(&mut painter, &FONT_3X5, 6, 2, '1', true);

        // '1' is a single full-height middle column
        for y in 2..7 {
            assert!(canvas.get_pixel(Rotation::Standard, 7, y));
        }
        assert!(!canvas.get_pixel(Rotation::Standard, 6, 2));
        assert!(!canvas.get_pixel(Rotation::Standard, 8, 2));
        assert!(!canvas.get_pixel(Rotation::Standard, 7, 7));
    }

    #[test]
    fn test_unknown_char_draws_nothing() {
        let mut canvas = Canvas::new(1, 1).unwrap();
        let mut painter = Painter::new(&mut canvas, Rotation::Standard);
        draw_char(&mut painter, &FONT_3X5, 0, 0, '#', true);
        draw_char(&mut painter, &FONT_3X5, 0, 0, 'é', true);

        for y in 0..8 {
            assert_eq!(canvas.row_byte(0, y), 0x00);
        }
    }

    #[test]
    fn test_string_fixed_advance() {
        let mut canvas = Canvas::new(2, 1).unwrap();
        let mut painter = Painter::new(&mut canvas, Rotation::Standard);
        draw_string(&mut painter, &FONT_3X5, 0, 0, "11", true);

        // First glyph occupies columns 0..3, second starts at x = 4
        for y in 0..5 {
            assert!(canvas.get_pixel(Rotation::Standard, 1, y));
            assert!(canvas.get_pixel(Rotation::Standard, 5, y));
        }
        // Spacing column between the glyphs stays clear
        for y in 0..8 {
            assert!(!canvas.get_pixel(Rotation::Standard, 3, y));
        }
    }

    #[test]
    fn test_string_skips_unknown_but_keeps_slots() {
        let mut a = Canvas::new(2, 1).unwrap();
        let mut b = Canvas::new(2, 1).unwrap();
        draw_string(
            &mut Painter::new(&mut a, Rotation::Standard),
            &FONT_3X5,
            0,
            0,
            "1#1",
            true,
        );
        draw_string(
            &mut Painter::new(&mut b, Rotation::Standard),
            &FONT_3X5,
            0,
            0,
            "1 1",
            true,
        );

        // An unmatched character draws nothing but still advances, the
        // same as a space
        for x in 0..16 {
            for y in 0..8 {
                assert_eq!(
                    a.get_pixel(Rotation::Standard, x, y),
                    b.get_pixel(Rotation::Standard, x, y)
                );
            }
        }
    }

    #[test]
    fn test_taller_font_uses_six_rows() {
        let mut canvas = Canvas::new(1, 1).unwrap();
        let mut painter = Painter::new(&mut canvas, Rotation::Standard);
        draw_char(&mut painter, &FONT_4X6, 0, 0, '|', true);

        // '|' in 4x6 is 0x00 0x3F 0x00 0x00: column 1, all six rows
        for y in 0..6 {
            assert_eq!(canvas.row_byte(0, y as u8), 0x40, "row {}", y);
        }
        assert_eq!(canvas.row_byte(0, 6), 0x00);
    }
}
