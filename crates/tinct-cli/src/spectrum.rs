//! Decorative spectrum rule for banner output.

use std::f64::consts::PI;
use std::fmt::Write;

use tinct::ColorDepth;

/// Renders a row of `width` glyphs sweeping through the spectrum, one 24 bit
/// foreground sequence per column. Without true color the row degrades to
/// bare glyphs plus a plain-text warning; this is computed color, so there is
/// no palette to fall back to.
pub fn spectrum(width: usize, glyph: char, depth: ColorDepth) -> String {
    if depth != ColorDepth::TrueColor {
        return format!(
            "{}\n  Your terminal currently doesn't support 24 bit color.",
            glyph.to_string().repeat(width)
        );
    }

    let mut row = String::with_capacity(width * 20);
    for col in 0..width {
        let x = col as f64 / width as f64;
        let scos = (x * PI / 2.0).cos();
        let ssin = (x * PI).sin();
        let red = if scos > 0.0 { (scos * 255.0).floor() as u8 } else { 0 };
        let green = if ssin > 0.0 { (ssin * 255.0).floor() as u8 } else { 0 };
        let blue = if scos > 0.0 {
            ((1.0 - scos) * 255.0).floor() as u8
        } else {
            0
        };
        let _ = write!(row, "\u{1b}[38;2;{red};{green};{blue}m{glyph}");
    }
    row
}
