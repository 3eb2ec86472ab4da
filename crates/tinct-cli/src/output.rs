//! Output formatting: the one place resolved colors become stdout bytes.
//!
//! Every mode honors list mode, active when more than one statement was
//! resolved: each line gains a `name: ` prefix and a trailing newline.
//! Single-statement output has neither. Validation runs before anything is
//! appended to the buffer, so a usage error never produces partial output.

use std::fmt::Write;

use thiserror::Error;
use tinct::{AttrSet, ResolvedColor};

use crate::args::{FlagStyle, OutputMode};

/// Fatal misuse of the escape-sequence modes.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    /// `--in`/`--out` toggling is undefined for more than one color.
    #[error("SGR output only makes sense for a single color")]
    MultipleStatements,
}

/// Renders the resolved statement list for the active mode.
pub fn format(
    mode: &OutputMode,
    style: FlagStyle,
    colors: &[ResolvedColor],
) -> Result<String, UsageError> {
    if matches!(mode, OutputMode::In | OutputMode::Out) && colors.len() > 1 {
        return Err(UsageError::MultipleStatements);
    }

    let list = colors.len() > 1;
    let mut buffer = String::new();
    for color in colors {
        if list {
            let _ = write!(buffer, "{}: ", color.name);
        }
        match mode {
            OutputMode::Default => {
                buffer.push_str(&flag_prefix(style, &color.attrs));
                buffer.push_str(&color.hex());
            }
            OutputMode::Message(text) => {
                let _ = write!(buffer, "{}{}{}", color.sgr_in, text, color.sgr_out);
            }
            OutputMode::In => buffer.push_str(&color.sgr_in),
            OutputMode::Out => buffer.push_str(&color.sgr_out),
            OutputMode::Rgb => buffer.push_str(&color.rgb()),
            OutputMode::Swatch => buffer.push_str(&color.swatch()),
        }
        if list {
            buffer.push('\n');
        }
    }
    Ok(buffer)
}

/// Renders active style keywords ahead of the color value. The `none` style
/// collapses to exactly one leading space however many keywords are active,
/// keeping column alignment with unstyled output.
fn flag_prefix(style: FlagStyle, attrs: &AttrSet) -> String {
    if !attrs.has_styles() {
        return String::new();
    }
    match style {
        FlagStyle::None => " ".to_string(),
        FlagStyle::Direct | FlagStyle::Fish => {
            let mut prefix = attrs
                .styles()
                .map(|attr| format!("--{}", attr.keyword()))
                .collect::<Vec<_>>()
                .join(" ");
            prefix.push(' ');
            prefix
        }
    }
}
