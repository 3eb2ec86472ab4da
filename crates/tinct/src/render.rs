//! Resolving statements into terminal-ready colors.

use crate::depth::ColorDepth;
use crate::error::Result;
use crate::parse::{interpret, ColorStatement};
use crate::rgb::Rgb;
use crate::sgr::{self, AttrSet};

/// Options applied when resolving a statement.
#[derive(Debug, Clone, Copy)]
pub struct RenderOptions {
    /// The negotiated color depth for escape sequence output.
    pub depth: ColorDepth,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            depth: ColorDepth::TrueColor,
        }
    }
}

/// A fully resolved color statement.
///
/// `sgr_in` and `sgr_out` are a matched pair: writing `sgr_in`, any text,
/// then `sgr_out` restores the terminal default state. Both are empty at
/// [`ColorDepth::Monochrome`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColor {
    /// Carried through from the statement; empty for unnamed statements.
    pub name: String,
    /// Final channel values; `None` for the channel-less bases `normal`
    /// and `reset`.
    pub channels: Option<Rgb>,
    /// Style keywords applied to the statement.
    pub attrs: AttrSet,
    /// Escape sequence entering this color's state.
    pub sgr_in: String,
    /// Escape sequence restoring the default state.
    pub sgr_out: String,
}

impl ResolvedColor {
    /// Lowercase six-digit hex view; the bare keyword for channel-less
    /// bases (`set_color normal` is valid fish).
    pub fn hex(&self) -> String {
        match self.channels {
            Some(rgb) => rgb.to_hex(),
            None if self.attrs.reset => "reset".to_string(),
            None => "normal".to_string(),
        }
    }

    /// Decimal `rgb(R, G, B)` view.
    pub fn rgb(&self) -> String {
        match self.channels {
            Some(rgb) => format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b),
            None => self.hex(),
        }
    }

    /// A minimal colored rectangle: two solid block glyphs wrapped in the
    /// escape pair.
    pub fn swatch(&self) -> String {
        format!("{}\u{2588}\u{2588}{}", self.sgr_in, self.sgr_out)
    }
}

/// Resolves one statement at the given options. Pure and deterministic:
/// identical statement and options yield byte-identical output.
pub fn render(statement: &ColorStatement, options: &RenderOptions) -> Result<ResolvedColor> {
    let expr = interpret(&statement.tokens)?;
    let channels = expr
        .channels
        .map(|rgb| expr.ops.iter().fold(rgb, |rgb, op| op.apply(rgb)));
    let (sgr_in, sgr_out) = sgr::pair(channels, &expr.attrs, options.depth);
    Ok(ResolvedColor {
        name: statement.name.clone().unwrap_or_default(),
        channels,
        attrs: expr.attrs,
        sgr_in,
        sgr_out,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::parse;

    fn resolve(input: &str, depth: ColorDepth) -> ResolvedColor {
        let statements = parse(input).unwrap();
        render(&statements[0], &RenderOptions { depth }).unwrap()
    }

    #[test]
    fn named_color_hex() {
        assert_eq!(resolve("red", ColorDepth::TrueColor).hex(), "ff0000");
    }

    #[test]
    fn operations_apply_in_encountered_order() {
        // Position relative to the base does not matter, order does.
        let before = resolve("desaturate 50 spin 60 red", ColorDepth::TrueColor);
        let after = resolve("red desaturate 50 spin 60", ColorDepth::TrueColor);
        assert_eq!(before.hex(), "bf40bf");
        assert_eq!(before.hex(), after.hex());
    }

    #[test]
    fn unnamed_statement_has_empty_name() {
        assert_eq!(resolve("red", ColorDepth::TrueColor).name, "");
        let statements = parse("one: red").unwrap();
        let color = render(&statements[0], &RenderOptions::default()).unwrap();
        assert_eq!(color.name, "one");
    }

    #[test]
    fn rgb_view_shape() {
        assert_eq!(resolve("purple", ColorDepth::TrueColor).rgb(), "rgb(128, 0, 128)");
    }

    #[test]
    fn swatch_wraps_blocks_in_the_pair() {
        let color = resolve("purple", ColorDepth::TrueColor);
        assert_eq!(
            color.swatch(),
            "\u{1b}[38;2;128;0;128m\u{2588}\u{2588}\u{1b}[39m"
        );
    }

    #[test]
    fn monochrome_swatch_is_bare_blocks() {
        assert_eq!(resolve("purple", ColorDepth::Monochrome).swatch(), "\u{2588}\u{2588}");
    }

    #[test]
    fn channel_less_bases_render_keywords() {
        let normal = resolve("normal", ColorDepth::TrueColor);
        assert_eq!(normal.hex(), "normal");
        assert_eq!(normal.sgr_in, "\u{1b}[39;49m");
        assert_eq!(normal.sgr_out, "");
        let reset = resolve("reset", ColorDepth::TrueColor);
        assert_eq!(reset.hex(), "reset");
        assert_eq!(reset.sgr_in, "\u{1b}[0m");
    }

    #[test]
    fn rendering_is_deterministic() {
        let options = RenderOptions {
            depth: ColorDepth::Palette256,
        };
        let statements = parse("bold hsl:200,80,40 lighten 5").unwrap();
        let first = render(&statements[0], &options).unwrap();
        let second = render(&statements[0], &options).unwrap();
        assert_eq!(first, second);
    }
}
