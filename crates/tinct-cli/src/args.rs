//! Command line surface and output mode selection.

use clap::{Parser, ValueEnum};
use tinct::DepthRequest;

/// Transform color expressions into hex values, rgb() strings, SGR escape
/// codes or colored swatches.
#[derive(Debug, Parser)]
#[command(
    name = "tinct",
    version,
    about = "Color expressions for the terminal",
    disable_help_flag = true,
    allow_negative_numbers = true,
    override_usage = "tinct [options] \"color expression\""
)]
pub struct Cli {
    /// Format a message with the color's SGR codes.
    #[arg(short, long, value_name = "text")]
    pub message: Option<String>,

    /// Output the SGR color escape code.
    #[arg(short = 'i', long = "in")]
    pub sgr_in: bool,

    /// Output the cancelling SGR color escape code.
    #[arg(short = 'o', long = "out")]
    pub sgr_out: bool,

    /// CLI color styling flags output.
    #[arg(
        short = 't',
        long = "type",
        value_enum,
        value_name = "kind",
        default_value = "direct"
    )]
    pub style: FlagStyle,

    /// Output color as rgb(r, g, b).
    #[arg(short, long)]
    pub rgb: bool,

    /// Output an isolated color swatch.
    #[arg(short, long)]
    pub swatch: bool,

    /// Force color depth. Bare --color keeps the detected depth but forces
    /// color on.
    #[arg(
        long,
        value_enum,
        value_name = "depth",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "always"
    )]
    pub color: Option<ColorArg>,

    /// Disable SGR color output entirely.
    #[arg(long, conflicts_with = "color")]
    pub no_color: bool,

    /// Display the full help page.
    #[arg(short = 'h', long)]
    pub help: bool,

    /// Color expressions, joined with spaces and tokenized.
    #[arg(value_name = "expression")]
    pub expression: Vec<String>,
}

/// How active style keywords are rendered in default output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FlagStyle {
    /// A single leading space, no keyword text.
    None,
    /// `--keyword` tokens before the color value.
    Direct,
    /// Identical to direct; named for the fish set_color use case.
    Fish,
}

/// Value given to `--color`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    /// 24 bit color.
    #[value(name = "16m")]
    TrueColor,
    /// 256 color palette.
    #[value(name = "256")]
    Palette256,
    /// Keep the detected depth, force color on.
    Always,
}

/// The selected rendering mode; exactly one is active per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputMode {
    Default,
    Message(String),
    In,
    Out,
    Rgb,
    Swatch,
}

impl Cli {
    /// Resolves the mode once, with fixed precedence:
    /// message > in > out > rgb > swatch > default.
    pub fn mode(&self) -> OutputMode {
        if let Some(text) = &self.message {
            OutputMode::Message(text.clone())
        } else if self.sgr_in {
            OutputMode::In
        } else if self.sgr_out {
            OutputMode::Out
        } else if self.rgb {
            OutputMode::Rgb
        } else if self.swatch {
            OutputMode::Swatch
        } else {
            OutputMode::Default
        }
    }

    /// Maps the depth flags onto an engine override request.
    pub fn depth_request(&self) -> Option<DepthRequest> {
        if self.no_color {
            return Some(DepthRequest::Disabled);
        }
        self.color.map(|arg| match arg {
            ColorArg::TrueColor => DepthRequest::TrueColor,
            ColorArg::Palette256 => DepthRequest::Palette256,
            ColorArg::Always => DepthRequest::Forced,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tinct").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn mode_precedence_is_fixed() {
        assert_eq!(
            parse(&["-m", "hi", "--in", "--rgb", "red"]).mode(),
            OutputMode::Message("hi".into())
        );
        assert_eq!(parse(&["--in", "--out", "--swatch", "red"]).mode(), OutputMode::In);
        assert_eq!(parse(&["--out", "--rgb", "red"]).mode(), OutputMode::Out);
        assert_eq!(parse(&["--rgb", "--swatch", "red"]).mode(), OutputMode::Rgb);
        assert_eq!(parse(&["--swatch", "red"]).mode(), OutputMode::Swatch);
        assert_eq!(parse(&["red"]).mode(), OutputMode::Default);
    }

    #[test]
    fn type_defaults_to_direct() {
        assert_eq!(parse(&["red"]).style, FlagStyle::Direct);
        assert_eq!(parse(&["--type", "none", "red"]).style, FlagStyle::None);
        assert_eq!(parse(&["-t", "fish", "red"]).style, FlagStyle::Fish);
    }

    #[test]
    fn unknown_type_is_rejected_up_front() {
        let result = Cli::try_parse_from(["tinct", "--type", "woo", "red"]);
        assert!(result.is_err());
    }

    #[test]
    fn depth_flags_map_to_requests() {
        assert_eq!(parse(&["red"]).depth_request(), None);
        assert_eq!(
            parse(&["--color=16m", "red"]).depth_request(),
            Some(DepthRequest::TrueColor)
        );
        assert_eq!(
            parse(&["--color=256", "red"]).depth_request(),
            Some(DepthRequest::Palette256)
        );
        assert_eq!(
            parse(&["--color", "red"]).depth_request(),
            Some(DepthRequest::Forced)
        );
        assert_eq!(
            parse(&["--no-color", "red"]).depth_request(),
            Some(DepthRequest::Disabled)
        );
    }
}
