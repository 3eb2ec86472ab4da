//! Statement tokenizing and expression interpretation.
//!
//! The command line tail arrives as one whitespace-joined string holding one
//! or more statements. A statement boundary is a `name:` prefix, an
//! identifier followed by `:`, `/` or `|`; everything up to the next such
//! prefix belongs to that name. Without a prefix the whole input is a
//! single unnamed statement.
//!
//! Tokenizing hands tokens through verbatim; interpreting them into a base
//! color, style keywords and channel operations happens separately, when a
//! statement is rendered.

use crate::error::{ParseError, Result};
use crate::named;
use crate::rgb::Rgb;
use crate::sgr::{Attr, AttrSet};

/// One color expression extracted from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorStatement {
    /// Present when the input used `name:` syntax.
    pub name: Option<String>,
    /// Whitespace-delimited expression tokens, preserved verbatim.
    pub tokens: Vec<String>,
}

/// Color-model keywords that look like `ident:` markers but never are:
/// `rgb:128,0,128` is a color token, not a statement named `rgb`.
const MODEL_KEYWORDS: &[&str] = &["rgb", "rgba", "hsl", "hsv", "hsb", "hwb"];

/// Splits raw input into an ordered list of statements.
///
/// ```rust
/// use tinct::parse;
///
/// let statements = parse("one: red two: green spin 30").unwrap();
/// assert_eq!(statements.len(), 2);
/// assert_eq!(statements[0].name.as_deref(), Some("one"));
/// assert_eq!(statements[1].tokens, ["green", "spin", "30"]);
/// ```
pub fn parse(input: &str) -> Result<Vec<ColorStatement>> {
    let tokens = coalesce_parens(input.split_whitespace());
    if tokens.is_empty() {
        return Err(ParseError::NoStatements);
    }

    let mut statements = Vec::new();
    let mut current = ColorStatement {
        name: None,
        tokens: Vec::new(),
    };
    for token in tokens {
        if let Some((name, rest)) = split_name_marker(&token) {
            flush(&mut statements, current)?;
            current = ColorStatement {
                name: Some(name.to_string()),
                tokens: Vec::new(),
            };
            if !rest.is_empty() {
                current.tokens.push(rest.to_string());
            }
        } else {
            current.tokens.push(token);
        }
    }
    flush(&mut statements, current)?;

    if statements.is_empty() {
        return Err(ParseError::NoStatements);
    }
    Ok(statements)
}

fn flush(statements: &mut Vec<ColorStatement>, statement: ColorStatement) -> Result<()> {
    if statement.tokens.is_empty() {
        return match statement.name {
            Some(name) => Err(ParseError::EmptyStatement(name)),
            None => Ok(()),
        };
    }
    statements.push(statement);
    Ok(())
}

/// Rejoins function-call color forms split by the shell: `rgb(255, 0, 0)`
/// arrives as three whitespace tokens and becomes one again.
fn coalesce_parens<'a>(parts: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut tokens: Vec<String> = Vec::new();
    let mut open = false;
    for part in parts {
        if open {
            let last = tokens.last_mut().unwrap();
            last.push_str(part);
            if part.contains(')') {
                open = false;
            }
        } else {
            if part.contains('(') && !part.contains(')') {
                open = true;
            }
            tokens.push(part.to_string());
        }
    }
    tokens
}

/// Returns `(name, attached_rest)` when the token is a statement-name
/// marker: an identifier plus `:`, `/` or `|`, with the identifier not a
/// color-model keyword.
fn split_name_marker(token: &str) -> Option<(&str, &str)> {
    let at = token.find([':', '/', '|'])?;
    let (ident, rest) = (&token[..at], &token[at + 1..]);
    let mut chars = ident.chars();
    let leading_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    if !leading_alpha || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    if MODEL_KEYWORDS.contains(&ident.to_ascii_lowercase().as_str()) {
        return None;
    }
    Some((ident, rest))
}

// ---------------------------------------------------------------------------
// Expression interpretation
// ---------------------------------------------------------------------------

/// A channel operation, applied in encountered order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Op {
    Lighten(f32),
    Darken(f32),
    Saturate(f32),
    Desaturate(f32),
    Spin(f32),
    Mix(Rgb),
}

impl Op {
    pub(crate) fn apply(self, rgb: Rgb) -> Rgb {
        match self {
            Op::Lighten(amount) => rgb.lighten(amount),
            Op::Darken(amount) => rgb.darken(amount),
            Op::Saturate(amount) => rgb.saturate(amount),
            Op::Desaturate(amount) => rgb.desaturate(amount),
            Op::Spin(degrees) => rgb.spin(degrees),
            Op::Mix(other) => rgb.mix(other),
        }
    }
}

/// An interpreted statement: base color, style keywords, operations.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Expression {
    pub(crate) channels: Option<Rgb>,
    pub(crate) attrs: AttrSet,
    pub(crate) ops: Vec<Op>,
}

/// Interprets a statement's token list. Style keywords and operations may
/// appear before or after the base color; operations keep their encountered
/// order either way.
pub(crate) fn interpret(tokens: &[String]) -> Result<Expression> {
    let mut channels: Option<Rgb> = None;
    let mut attrs = AttrSet::default();
    let mut ops = Vec::new();

    let mut iter = tokens.iter();
    while let Some(token) = iter.next() {
        let keyword = token.to_ascii_lowercase();
        if let Some(attr) = Attr::from_keyword(&keyword) {
            attrs.set(attr);
            continue;
        }
        match keyword.as_str() {
            "light" => ops.push(Op::Lighten(20.0)),
            "dark" => ops.push(Op::Darken(20.0)),
            "mono" => ops.push(Op::Desaturate(100.0)),
            "lighten" => ops.push(Op::Lighten(number_arg(&keyword, iter.next())?)),
            "darken" => ops.push(Op::Darken(number_arg(&keyword, iter.next())?)),
            "saturate" | "sat" => ops.push(Op::Saturate(number_arg(&keyword, iter.next())?)),
            "desaturate" | "des" => ops.push(Op::Desaturate(number_arg(&keyword, iter.next())?)),
            "spin" => ops.push(Op::Spin(number_arg(&keyword, iter.next())?)),
            "mix" => ops.push(Op::Mix(color_arg(&keyword, iter.next())?)),
            _ => match parse_color_token(token)? {
                Some(rgb) if channels.is_none() => channels = Some(rgb),
                Some(_) => return Err(ParseError::DuplicateBase(token.clone())),
                None => return Err(ParseError::UnknownToken(token.clone())),
            },
        }
    }

    if channels.is_none() {
        if !attrs.normal && !attrs.reset {
            return Err(ParseError::MissingBase);
        }
        if let Some(op) = ops.first() {
            return Err(ParseError::OperationWithoutColor(op_keyword(*op).to_string()));
        }
    }
    Ok(Expression {
        channels,
        attrs,
        ops,
    })
}

fn op_keyword(op: Op) -> &'static str {
    match op {
        Op::Lighten(_) => "lighten",
        Op::Darken(_) => "darken",
        Op::Saturate(_) => "saturate",
        Op::Desaturate(_) => "desaturate",
        Op::Spin(_) => "spin",
        Op::Mix(_) => "mix",
    }
}

fn number_arg(keyword: &str, token: Option<&String>) -> Result<f32> {
    let token = token.ok_or_else(|| ParseError::MissingValue(keyword.to_string()))?;
    token
        .parse()
        .map_err(|_| ParseError::InvalidValue(keyword.to_string(), token.clone()))
}

fn color_arg(keyword: &str, token: Option<&String>) -> Result<Rgb> {
    let token = token.ok_or_else(|| ParseError::MissingValue(keyword.to_string()))?;
    parse_color_token(token)?.ok_or_else(|| ParseError::InvalidColor(token.clone()))
}

/// Recognizes one base-color token: hex (with or without `#`), a CSS name,
/// or a `model:components` / `model(components)` form. Returns `Ok(None)`
/// for tokens that are not color-shaped at all.
fn parse_color_token(token: &str) -> Result<Option<Rgb>> {
    if let Some(hex) = token.strip_prefix('#') {
        return match Rgb::from_hex(hex) {
            Some(rgb) => Ok(Some(rgb)),
            None => Err(ParseError::InvalidColor(token.to_string())),
        };
    }

    let lower = token.to_ascii_lowercase();
    if let Some((model, args)) = split_model(&lower) {
        return parse_model(token, model, args).map(Some);
    }
    if let Some(rgb) = named::lookup(&lower) {
        return Ok(Some(rgb));
    }
    if matches!(lower.len(), 3 | 6) {
        if let Some(rgb) = Rgb::from_hex(&lower) {
            return Ok(Some(rgb));
        }
    }
    Ok(None)
}

fn split_model(token: &str) -> Option<(&str, &str)> {
    let at = token.find([':', '('])?;
    let model = &token[..at];
    if !MODEL_KEYWORDS.contains(&model) {
        return None;
    }
    Some((model, token[at + 1..].trim_end_matches(')')))
}

fn parse_model(token: &str, model: &str, args: &str) -> Result<Rgb> {
    let invalid = || ParseError::InvalidColor(token.to_string());
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(invalid());
    }

    match model {
        "rgb" | "rgba" => {
            let channel = |s: &str| s.parse::<u8>().map_err(|_| invalid());
            Ok(Rgb::new(channel(parts[0])?, channel(parts[1])?, channel(parts[2])?))
        }
        _ => {
            let hue: f32 = parts[0].parse().map_err(|_| invalid())?;
            let percent = |s: &str| -> Result<f32> {
                let value: f32 = s.trim_end_matches('%').parse().map_err(|_| invalid())?;
                if !(0.0..=100.0).contains(&value) {
                    return Err(invalid());
                }
                Ok(value / 100.0)
            };
            let a = percent(parts[1])?;
            let b = percent(parts[2])?;
            Ok(match model {
                "hsl" => Rgb::from_hsl(hue, a, b),
                "hsv" | "hsb" => Rgb::from_hsv(hue, a, b),
                "hwb" => Rgb::from_hwb(hue, a, b),
                _ => unreachable!("split_model only admits known models"),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(statement: &ColorStatement) -> Vec<&str> {
        statement.tokens.iter().map(String::as_str).collect()
    }

    #[test]
    fn unnamed_input_is_one_statement() {
        let statements = parse("red lighten 10").unwrap();
        assert_eq!(statements.len(), 1);
        assert_eq!(statements[0].name, None);
        assert_eq!(tokens(&statements[0]), ["red", "lighten", "10"]);
    }

    #[test]
    fn named_statements_split_on_markers() {
        let statements = parse("one: red two: green spin 30").unwrap();
        assert_eq!(statements[0].name.as_deref(), Some("one"));
        assert_eq!(tokens(&statements[0]), ["red"]);
        assert_eq!(statements[1].name.as_deref(), Some("two"));
        assert_eq!(tokens(&statements[1]), ["green", "spin", "30"]);
    }

    #[test]
    fn attached_name_marker() {
        let statements = parse("one:red").unwrap();
        assert_eq!(statements[0].name.as_deref(), Some("one"));
        assert_eq!(tokens(&statements[0]), ["red"]);
    }

    #[test]
    fn model_prefixes_are_not_names() {
        let statements = parse("rgb:128,0,128").unwrap();
        assert_eq!(statements[0].name, None);
        assert_eq!(tokens(&statements[0]), ["rgb:128,0,128"]);
    }

    #[test]
    fn leading_unnamed_statement_before_named_ones() {
        let statements = parse("red one: blue").unwrap();
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].name, None);
        assert_eq!(statements[1].name.as_deref(), Some("one"));
    }

    #[test]
    fn parenthesized_rgb_is_rejoined() {
        let statements = parse("rgb(255, 0, 0)").unwrap();
        assert_eq!(tokens(&statements[0]), ["rgb(255,0,0)"]);
        let expr = interpret(&statements[0].tokens).unwrap();
        assert_eq!(expr.channels, Some(Rgb::new(255, 0, 0)));
    }

    #[test]
    fn empty_input_fails() {
        assert_eq!(parse(""), Err(ParseError::NoStatements));
        assert_eq!(parse("   "), Err(ParseError::NoStatements));
    }

    #[test]
    fn dangling_name_fails() {
        assert_eq!(
            parse("one: red two:"),
            Err(ParseError::EmptyStatement("two".into()))
        );
    }

    #[test]
    fn interpret_collects_attrs_and_ops_around_base() {
        let statements = parse("bold desaturate 50 red spin 60").unwrap();
        let expr = interpret(&statements[0].tokens).unwrap();
        assert!(expr.attrs.bold);
        assert_eq!(expr.channels, Some(Rgb::new(255, 0, 0)));
        assert_eq!(expr.ops, [Op::Desaturate(50.0), Op::Spin(60.0)]);
    }

    #[test]
    fn interpret_rejects_style_only_statements() {
        let statements = parse("bold underline").unwrap();
        assert_eq!(interpret(&statements[0].tokens), Err(ParseError::MissingBase));
    }

    #[test]
    fn normal_and_reset_are_complete_statements() {
        let statements = parse("normal").unwrap();
        let expr = interpret(&statements[0].tokens).unwrap();
        assert!(expr.attrs.normal);
        assert_eq!(expr.channels, None);
    }

    #[test]
    fn operations_need_channels() {
        let statements = parse("lighten 20 normal").unwrap();
        assert_eq!(
            interpret(&statements[0].tokens),
            Err(ParseError::OperationWithoutColor("lighten".into()))
        );
    }

    #[test]
    fn missing_operation_value() {
        let statements = parse("red lighten").unwrap();
        assert_eq!(
            interpret(&statements[0].tokens),
            Err(ParseError::MissingValue("lighten".into()))
        );
    }

    #[test]
    fn unknown_token_is_reported() {
        let statements = parse("red sparkle").unwrap();
        assert_eq!(
            interpret(&statements[0].tokens),
            Err(ParseError::UnknownToken("sparkle".into()))
        );
    }

    #[test]
    fn second_base_color_is_rejected() {
        let statements = parse("red blue").unwrap();
        assert_eq!(
            interpret(&statements[0].tokens),
            Err(ParseError::DuplicateBase("blue".into()))
        );
    }

    #[test]
    fn mix_consumes_a_color_argument() {
        let statements = parse("red mix blue").unwrap();
        let expr = interpret(&statements[0].tokens).unwrap();
        assert_eq!(expr.ops, [Op::Mix(Rgb::new(0, 0, 255))]);
    }

    #[test]
    fn out_of_range_components_fail() {
        let statements = parse("rgb:300,0,0").unwrap();
        assert!(matches!(
            interpret(&statements[0].tokens),
            Err(ParseError::InvalidColor(_))
        ));
        let statements = parse("hsl:120,140,50").unwrap();
        assert!(matches!(
            interpret(&statements[0].tokens),
            Err(ParseError::InvalidColor(_))
        ));
    }
}
