//! Terminal color depth detection and negotiation.
//!
//! Detection reads the environment once per invocation: the color-enable
//! signal comes from [`console::colors_enabled`] (which honors `NO_COLOR`
//! and `CLICOLOR`), the 24 bit signal from `COLORTERM`. An explicit CLI
//! override always wins over whatever was detected.

use std::env;

/// Negotiated color fidelity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorDepth {
    /// 24 bit RGB escape sequences.
    TrueColor,
    /// 256-color palette escape sequences.
    Palette256,
    /// No escape sequences at all.
    Monochrome,
}

/// An explicit depth override from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthRequest {
    /// `--color=16m`
    TrueColor,
    /// `--color=256`
    Palette256,
    /// Bare `--color`: keep the environment's depth but force color on.
    Forced,
    /// `--no-color`
    Disabled,
}

/// What the terminal reports it can do. Read once per invocation.
#[derive(Debug, Clone, Copy)]
pub struct Capability {
    pub depth: ColorDepth,
    /// Whether the terminal is known to ship the extended box-drawing
    /// glyph set, used only for decorative banner output.
    pub enhanced_fonts: bool,
}

impl Capability {
    pub fn from_env() -> Self {
        let depth = if console::colors_enabled() {
            env_depth()
        } else {
            ColorDepth::Monochrome
        };
        Self {
            depth,
            enhanced_fonts: enhanced_fonts_from_env(),
        }
    }
}

/// Resolves the effective depth from an optional override and the detected
/// capability. Override wins; absent one, detection is used as-is.
pub fn resolve_depth(request: Option<DepthRequest>) -> ColorDepth {
    match request {
        Some(DepthRequest::Disabled) => ColorDepth::Monochrome,
        Some(DepthRequest::TrueColor) => ColorDepth::TrueColor,
        Some(DepthRequest::Palette256) => ColorDepth::Palette256,
        Some(DepthRequest::Forced) => env_depth(),
        None => Capability::from_env().depth,
    }
}

fn env_depth() -> ColorDepth {
    if let Ok(colorterm) = env::var("COLORTERM") {
        let colorterm = colorterm.to_ascii_lowercase();
        if colorterm == "truecolor" || colorterm == "24bit" {
            return ColorDepth::TrueColor;
        }
    }
    ColorDepth::Palette256
}

fn enhanced_fonts_from_env() -> bool {
    if let Ok(program) = env::var("TERM_PROGRAM") {
        if matches!(program.as_str(), "iTerm.app" | "WezTerm" | "kitty") {
            return true;
        }
    }
    env::var("TERM").is_ok_and(|term| term.contains("kitty"))
}
