//! Declarative palette registries.
//!
//! A palette is built once from a `{key, expression}` list and handed to the
//! caller by value; there is no shared global state behind it.

use std::collections::HashMap;

use crate::error::{ParseError, Result};
use crate::parse::parse;
use crate::render::{render, RenderOptions, ResolvedColor};

/// Resolves a list of `(key, expression)` pairs into a keyed registry.
/// Each expression must be a single statement; keys override the names the
/// expressions would otherwise carry.
///
/// ```rust
/// use tinct::{palette, RenderOptions};
///
/// let registry = palette(
///     &RenderOptions::default(),
///     &[("warning", "bold yellow"), ("muted", "grey desaturate 30")],
/// )
/// .unwrap();
/// assert_eq!(registry["warning"].hex(), "ffff00");
/// ```
pub fn palette(
    options: &RenderOptions,
    defs: &[(&str, &str)],
) -> Result<HashMap<String, ResolvedColor>> {
    defs.iter()
        .map(|&(key, expression)| {
            let statements = parse(expression)?;
            let [statement] = statements.as_slice() else {
                return Err(ParseError::InvalidColor(expression.to_string()));
            };
            let mut color = render(statement, options)?;
            color.name = key.to_string();
            Ok((key.to_string(), color))
        })
        .collect()
}
