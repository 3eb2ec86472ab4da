//! SGR escape sequence composition.
//!
//! Every rendered color carries a matched `in`/`out` pair: `in` enters the
//! color's state, `out` unwinds it again. The pair invariant is that writing
//! `in`, arbitrary text, then `out` leaves the terminal in its default state
//! whatever combination of attributes was active.

use crate::depth::ColorDepth;
use crate::rgb::Rgb;

const ESC: &str = "\u{1b}[";

/// A single style keyword attached to a color expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attr {
    Bold,
    Faint,
    Italic,
    Underline,
    Blink,
    Invert,
    Background,
    Normal,
    Reset,
}

impl Attr {
    /// The expression keyword and CLI flag spelling for this attribute.
    pub fn keyword(self) -> &'static str {
        match self {
            Attr::Bold => "bold",
            Attr::Faint => "faint",
            Attr::Italic => "italic",
            Attr::Underline => "underline",
            Attr::Blink => "blink",
            Attr::Invert => "invert",
            Attr::Background => "background",
            Attr::Normal => "normal",
            Attr::Reset => "reset",
        }
    }

    pub(crate) fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "bold" => Some(Attr::Bold),
            "faint" => Some(Attr::Faint),
            "italic" => Some(Attr::Italic),
            "underline" => Some(Attr::Underline),
            "blink" => Some(Attr::Blink),
            "invert" => Some(Attr::Invert),
            "background" => Some(Attr::Background),
            "normal" => Some(Attr::Normal),
            "reset" => Some(Attr::Reset),
            _ => None,
        }
    }

    // Set/reset code pairs for the toggling attributes. Background is not a
    // toggle of its own: it redirects the color code to 48/49.
    fn codes(self) -> Option<(&'static str, &'static str)> {
        match self {
            Attr::Bold => Some(("1", "22")),
            Attr::Faint => Some(("2", "22")),
            Attr::Italic => Some(("3", "23")),
            Attr::Underline => Some(("4", "24")),
            Attr::Blink => Some(("5", "25")),
            Attr::Invert => Some(("7", "27")),
            _ => None,
        }
    }
}

/// The set of style keywords applied to one statement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttrSet {
    pub bold: bool,
    pub faint: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub invert: bool,
    pub background: bool,
    pub normal: bool,
    pub reset: bool,
}

impl AttrSet {
    pub(crate) fn set(&mut self, attr: Attr) {
        match attr {
            Attr::Bold => self.bold = true,
            Attr::Faint => self.faint = true,
            Attr::Italic => self.italic = true,
            Attr::Underline => self.underline = true,
            Attr::Blink => self.blink = true,
            Attr::Invert => self.invert = true,
            Attr::Background => self.background = true,
            Attr::Normal => self.normal = true,
            Attr::Reset => self.reset = true,
        }
    }

    /// Active style keywords in declaration order, `normal`/`reset` excluded.
    pub fn styles(&self) -> impl Iterator<Item = Attr> + '_ {
        [
            (self.bold, Attr::Bold),
            (self.faint, Attr::Faint),
            (self.italic, Attr::Italic),
            (self.underline, Attr::Underline),
            (self.blink, Attr::Blink),
            (self.invert, Attr::Invert),
            (self.background, Attr::Background),
        ]
        .into_iter()
        .filter_map(|(active, attr)| active.then_some(attr))
    }

    /// True when any style keyword is active (`normal`/`reset` excluded).
    pub fn has_styles(&self) -> bool {
        self.styles().next().is_some()
    }
}

/// Converts an RGB triple to the nearest 256-color palette index:
/// grayscale ramp for even channels, 6x6x6 cube otherwise.
///
/// ```rust
/// use tinct::{rgb_to_ansi256, Rgb};
/// assert_eq!(rgb_to_ansi256(Rgb::new(255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256(Rgb::new(0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256(rgb: Rgb) -> u8 {
    let Rgb { r, g, b } = rgb;
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}

/// Composes the `in`/`out` pair for a resolved statement at the given depth.
pub(crate) fn pair(channels: Option<Rgb>, attrs: &AttrSet, depth: ColorDepth) -> (String, String) {
    if depth == ColorDepth::Monochrome {
        return (String::new(), String::new());
    }
    // Reset and normal are their own endpoints: nothing to unwind.
    if attrs.reset {
        return (format!("{ESC}0m"), String::new());
    }
    if channels.is_none() && attrs.normal {
        return (format!("{ESC}39;49m"), String::new());
    }

    let mut set = Vec::new();
    let mut reset = Vec::new();
    for attr in attrs.styles() {
        if let Some((on, off)) = attr.codes() {
            set.push(on.to_string());
            reset.push(off.to_string());
        }
    }
    if let Some(rgb) = channels {
        set.push(color_code(rgb, attrs.background, depth));
        reset.push(if attrs.background { "49" } else { "39" }.to_string());
    }
    if set.is_empty() {
        return (String::new(), String::new());
    }

    // Unwind in reverse order; bold and faint share a reset code.
    reset.reverse();
    reset.dedup();
    (
        format!("{ESC}{}m", set.join(";")),
        format!("{ESC}{}m", reset.join(";")),
    )
}

fn color_code(rgb: Rgb, background: bool, depth: ColorDepth) -> String {
    let plane = if background { 48 } else { 38 };
    match depth {
        ColorDepth::TrueColor => format!("{plane};2;{};{};{}", rgb.r, rgb.g, rgb.b),
        _ => format!("{plane};5;{}", rgb_to_ansi256(rgb)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_color_pair() {
        let (sgr_in, sgr_out) = pair(
            Some(Rgb::new(128, 0, 128)),
            &AttrSet::default(),
            ColorDepth::TrueColor,
        );
        assert_eq!(sgr_in, "\u{1b}[38;2;128;0;128m");
        assert_eq!(sgr_out, "\u{1b}[39m");
    }

    #[test]
    fn styled_pair_unwinds_in_reverse() {
        let mut attrs = AttrSet::default();
        attrs.set(Attr::Bold);
        attrs.set(Attr::Underline);
        let (sgr_in, sgr_out) = pair(Some(Rgb::new(255, 255, 0)), &attrs, ColorDepth::TrueColor);
        assert_eq!(sgr_in, "\u{1b}[1;4;38;2;255;255;0m");
        assert_eq!(sgr_out, "\u{1b}[39;24;22m");
    }

    #[test]
    fn bold_and_faint_share_one_reset() {
        let mut attrs = AttrSet::default();
        attrs.set(Attr::Bold);
        attrs.set(Attr::Faint);
        let (_, sgr_out) = pair(Some(Rgb::new(0, 0, 0)), &attrs, ColorDepth::TrueColor);
        assert_eq!(sgr_out, "\u{1b}[39;22m");
    }

    #[test]
    fn background_redirects_color_plane() {
        let mut attrs = AttrSet::default();
        attrs.set(Attr::Background);
        let (sgr_in, sgr_out) = pair(Some(Rgb::new(255, 0, 0)), &attrs, ColorDepth::TrueColor);
        assert_eq!(sgr_in, "\u{1b}[48;2;255;0;0m");
        assert_eq!(sgr_out, "\u{1b}[49m");
    }

    #[test]
    fn palette_depth_uses_indexed_color() {
        let (sgr_in, _) = pair(
            Some(Rgb::new(255, 0, 0)),
            &AttrSet::default(),
            ColorDepth::Palette256,
        );
        assert_eq!(sgr_in, "\u{1b}[38;5;196m");
    }

    #[test]
    fn monochrome_emits_nothing() {
        let mut attrs = AttrSet::default();
        attrs.set(Attr::Bold);
        let (sgr_in, sgr_out) = pair(Some(Rgb::new(1, 2, 3)), &attrs, ColorDepth::Monochrome);
        assert!(sgr_in.is_empty());
        assert!(sgr_out.is_empty());
    }

    #[test]
    fn grayscale_ramp_mapping() {
        assert_eq!(rgb_to_ansi256(Rgb::new(0, 0, 0)), 16);
        assert_eq!(rgb_to_ansi256(Rgb::new(255, 255, 255)), 231);
        assert_eq!(rgb_to_ansi256(Rgb::new(128, 128, 128)), 243);
    }
}
