//! The help page: wordmark banner, spectrum rule, options and examples.
//!
//! Written to stderr so that stdout stays reserved for color values.

use std::fmt::Write;

use clap::CommandFactory;
use tinct::{palette, ColorDepth, RenderOptions};

use crate::args::Cli;
use crate::spectrum::spectrum;

/// Banner and example colors, resolved once per help invocation.
const PALETTE: &[(&str, &str)] = &[
    ("title", "bold underline #ffffff"),
    ("command", "#ffffff"),
    ("option", "yellow"),
    ("argument", "cyan darken 10"),
    ("red", "red lighten 10"),
    ("green", "green lighten 10"),
    ("blue", "blue lighten 20"),
    ("grey", "grey"),
    ("purple", "purple"),
];

const WORDMARK_ENHANCED: [&str; 3] = [
    " ╺┳╸╻ ┏┓ ╻ ┏━╸╺┳╸",
    "  ┃ ┃ ┃┗┓┃ ┃    ┃ ",
    "  ╹ ╹ ╹ ┗╹ ┗━╸  ╹ ",
];

const WORDMARK_PLAIN: [&str; 3] = [
    "  |  o          |  ",
    " -+- | |/\\  ,_ -+- ",
    "  |_ | |  | \\_  |_ ",
];

/// Gets the current terminal width, or a conservative default.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size().map_or(80, |(w, _)| w.0 as usize)
}

/// Composes the full help page at the given depth and width.
pub fn page(depth: ColorDepth, enhanced_fonts: bool, width: usize) -> anyhow::Result<String> {
    let registry = palette(&RenderOptions { depth }, PALETTE)?;
    let span = |key: &str, text: &str| {
        let color = &registry[key];
        format!("{}{}{}", color.sgr_in, text, color.sgr_out)
    };
    let wordmark = if enhanced_fonts {
        WORDMARK_ENHANCED
    } else {
        WORDMARK_PLAIN
    };

    let mut page = String::new();
    writeln!(page)?;
    writeln!(page, "{}", span("red", wordmark[0]))?;
    writeln!(
        page,
        "{}  Color expressions for the terminal",
        span("green", wordmark[1])
    )?;
    writeln!(
        page,
        "{}  {}",
        span("blue", wordmark[2]),
        span("grey", concat!("v", env!("CARGO_PKG_VERSION")))
    )?;
    writeln!(page, "{}", spectrum(width, '\u{2014}', depth))?;
    writeln!(page)?;

    writeln!(page, "{}", span("title", "Synopsis:"))?;
    writeln!(
        page,
        "  {} {} \"{}\"",
        span("command", "tinct"),
        span("option", "[options]"),
        span("argument", "color description")
    )?;
    writeln!(page)?;
    writeln!(page, "{}", Cli::command().render_help())?;

    writeln!(page, "{}", span("title", "Color forms:"))?;
    writeln!(page, "  [#]RRGGBB or [#]RGB hexadecimal")?;
    writeln!(page, "  CSS named colors: red, green, hotpink, chocolate, ...")?;
    writeln!(page, "  rgb:R,G,B or 'rgb(R, G, B)' with R, G, B in 0-255")?;
    writeln!(page, "  hsl:H,S,L / hsv:H,S,V / hsb:H,S,B / hwb:H,W,B")?;
    writeln!(page, "  styles and resets: bold, underline, invert, normal, reset, ...")?;
    writeln!(page)?;

    writeln!(page, "{}", span("title", "Operations:"))?;
    writeln!(page, "  light / dark             lighten or darken by 20")?;
    writeln!(page, "  lighten P / darken P     adjust lightness by P points")?;
    writeln!(page, "  saturate P / desaturate P (or sat / des)")?;
    writeln!(page, "  mono                     drop to grayscale")?;
    writeln!(page, "  spin D                   rotate hue by D degrees")?;
    writeln!(page, "  mix color                average toward a second color")?;
    writeln!(page)?;

    writeln!(page, "{}", span("title", "Examples:"))?;
    writeln!(
        page,
        "  {} {}   {} 800080",
        span("command", "tinct"),
        span("argument", "purple"),
        span("grey", "\u{2192}")
    )?;
    writeln!(
        page,
        "  {} {} {}   {} --bold 800080",
        span("command", "tinct"),
        span("argument", "bold"),
        span("argument", "purple"),
        span("grey", "\u{2192}")
    )?;
    writeln!(
        page,
        "  {} {} {}   {} rgb(128, 0, 128)",
        span("command", "tinct"),
        span("option", "--rgb"),
        span("argument", "purple"),
        span("grey", "\u{2192}")
    )?;
    writeln!(
        page,
        "  {} {} {}   {} {}",
        span("command", "tinct"),
        span("option", "--swatch"),
        span("argument", "purple"),
        span("grey", "\u{2192}"),
        registry["purple"].swatch()
    )?;
    writeln!(
        page,
        "  Any statement can carry a name prefix: {}",
        span("argument", "one: red two: green spin 30")
    )?;
    writeln!(page)?;
    writeln!(
        page,
        "{}",
        span("grey", "Released under the MIT License.")
    )?;
    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_carries_every_section() {
        let page = page(ColorDepth::TrueColor, false, 40).unwrap();
        for section in ["Synopsis:", "Color forms:", "Operations:", "Examples:"] {
            assert!(page.contains(section), "missing {section}");
        }
    }

    #[test]
    fn monochrome_page_is_escape_free() {
        let page = page(ColorDepth::Monochrome, false, 40).unwrap();
        assert!(!page.contains('\u{1b}'));
    }

    #[test]
    fn wordmark_follows_the_font_signal() {
        let plain = page(ColorDepth::Monochrome, false, 40).unwrap();
        let fancy = page(ColorDepth::Monochrome, true, 40).unwrap();
        assert!(plain.contains(WORDMARK_PLAIN[1]));
        assert!(fancy.contains(WORDMARK_ENHANCED[1]));
    }
}
