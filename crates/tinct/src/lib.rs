//! # Tinct - Terminal Color Expression Engine
//!
//! `tinct` turns textual color expressions - named colors, `rgb:`/`hsl:`/
//! `hsv:`/`hwb:` triplets, style keywords and chained channel operations -
//! into terminal-ready values: hex triplets, `rgb()` strings and matched
//! SGR escape pairs, degraded to the capability the terminal actually has.
//!
//! This crate is the engine behind the `tinct` command line tool, but can be
//! used on its own anywhere a color needs to come from user-written text.
//!
//! ## Core Concepts
//!
//! - [`parse`]: split input into named or unnamed [`ColorStatement`]s
//! - [`render`]: resolve one statement into a [`ResolvedColor`]
//! - [`ColorDepth`]: the negotiated fidelity tier (24 bit, 256 color, none)
//! - [`Capability`]: what the terminal reports, read once per invocation
//! - [`palette`]: a keyed registry built from a declarative expression list
//!
//! ## Quick Start
//!
//! ```rust
//! use tinct::{parse, render, ColorDepth, RenderOptions};
//!
//! let statements = parse("bold orange").unwrap();
//! let color = render(
//!     &statements[0],
//!     &RenderOptions { depth: ColorDepth::TrueColor },
//! )
//! .unwrap();
//!
//! assert_eq!(color.hex(), "ffa500");
//! assert_eq!(color.sgr_in, "\u{1b}[1;38;2;255;165;0m");
//! assert_eq!(color.sgr_out, "\u{1b}[39;22m");
//! ```
//!
//! ## Expressions
//!
//! A statement is a base color plus any number of style keywords (`bold`,
//! `underline`, `background`, ...) and channel operations (`lighten 20`,
//! `desaturate 50`, `spin 60`, `mix blue`, ...). Operations apply in the
//! order they appear, whether written before or after the base:
//!
//! ```rust
//! use tinct::{parse, render, RenderOptions};
//!
//! let statements = parse("hsl:120,100,50 desaturate 50").unwrap();
//! let color = render(&statements[0], &RenderOptions::default()).unwrap();
//! assert_eq!(color.hex(), "40bf40");
//! ```
//!
//! Several statements can share one input line by prefixing each with a
//! `name:` marker: `"one: red two: green spin 30"`.

mod depth;
mod error;
pub mod named;
mod palette;
mod parse;
mod render;
mod rgb;
mod sgr;

pub use depth::{resolve_depth, Capability, ColorDepth, DepthRequest};
pub use error::{ParseError, Result};
pub use palette::palette;
pub use parse::{parse, ColorStatement};
pub use render::{render, RenderOptions, ResolvedColor};
pub use rgb::Rgb;
pub use sgr::{rgb_to_ansi256, Attr, AttrSet};
