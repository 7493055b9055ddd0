use crate::angle::{angle_to_degrees, LinearAngle, RadialPosition};
use crate::color::ColorToken;
use crate::error::ParseError;
use crate::gap::fill_gaps;
use crate::gradient::{ColorStop, Mode, Modifier, ParsedGradient};
use crate::lexer::{tokens, Spanned, Token};

/// Words that open a modifier segment rather than a color stop.
const MODIFIER_KEYWORDS: &[&str] = &[
    "to", "at", "from", "in", "circle", "ellipse", "closest-side", "closest-corner",
    "farthest-side", "farthest-corner", "top", "bottom", "left", "right", "center",
];

// ── Parser ────────────────────────────────────────────────────────────────

/// Classifies the comma-separated segments of one gradient body.
struct Parser {
    mode: Mode,
    modifier: Option<Modifier>,
    /// Colors in source order; `None` locations are resolved in [`Parser::finish`].
    pending: Vec<(ColorToken, Option<f32>)>,
}

impl Parser {
    fn new(mode: Mode) -> Self {
        Self { mode, modifier: None, pending: Vec::new() }
    }

    fn segment(&mut self, seg: &[Spanned], text: &str) -> Result<(), ParseError> {
        let Some(first) = seg.first() else {
            return Err(ParseError::malformed(0, "empty segment"));
        };

        let color = match &first.token {
            Token::Ident(word) if is_modifier_keyword(word) => None,
            tok => ColorToken::from_token(tok),
        };

        match color {
            Some(color) => {
                let color = color?;
                let rest = &seg[1..];
                if rest.is_empty() {
                    self.pending.push((color, None));
                    return Ok(());
                }
                for pos in rest {
                    let location = self.stop_location(pos)?;
                    self.pending.push((color.clone(), Some(location)));
                }
                Ok(())
            }
            None => self.non_color_segment(seg, text),
        }
    }

    fn non_color_segment(&mut self, seg: &[Spanned], text: &str) -> Result<(), ParseError> {
        if !self.pending.is_empty() {
            return self.transition_hint(seg, text);
        }
        if self.modifier.is_some() {
            log::debug!("ignoring extra modifier {:?}", text);
            return Ok(());
        }

        let toks: Vec<Token> = seg.iter().map(|s| s.token.clone()).collect();
        let modifier = match self.mode {
            Mode::Linear => Modifier::Angle(LinearAngle::from_tokens(&toks, text)?),
            Mode::Radial => Modifier::Position(RadialPosition::from_tokens(&toks, text)?),
            Mode::Conic => {
                log::debug!("conic modifier {:?} ignored", text);
                Modifier::None
            }
        };
        self.modifier = Some(modifier);
        Ok(())
    }

    /// A lone position between two stops. Accepted and dropped.
    fn transition_hint(&self, seg: &[Spanned], text: &str) -> Result<(), ParseError> {
        match seg {
            [pos] if self.stop_location(pos).is_ok() => {
                log::debug!("transition hint {:?} ignored", text);
                Ok(())
            }
            _ => Err(ParseError::malformed(
                seg.first().map_or(0, |s| s.offset),
                format!("expected a color stop or transition hint, found {:?}", text),
            )),
        }
    }

    fn stop_location(&self, pos: &Spanned) -> Result<f32, ParseError> {
        let unsupported = || ParseError::malformed(pos.offset, format!("unsupported stop position {:?}", pos.token));
        match &pos.token {
            Token::Percentage(v) => Ok(v / 100.0),
            Token::Number(v) if *v == 0.0 => Ok(0.0),
            Token::Dimension { value, unit } if self.mode == Mode::Conic => angle_to_degrees(*value, unit)
                .map(|deg| deg / 360.0)
                .ok_or_else(unsupported),
            _ => Err(unsupported()),
        }
    }

    fn finish(mut self) -> Result<ParsedGradient, ParseError> {
        if let Some(last) = self.pending.last_mut() {
            last.1.get_or_insert(1.0);
        }
        let locations: Vec<Option<f32>> = self.pending.iter().map(|(_, loc)| *loc).collect();
        let stops: Vec<ColorStop> = self
            .pending
            .into_iter()
            .zip(fill_gaps(&locations))
            .map(|((color, _), location)| ColorStop::new(color, location))
            .collect();

        if stops.len() < 2 {
            return Err(ParseError::InsufficientStops(stops.len()));
        }
        Ok(ParsedGradient {
            mode: self.mode,
            modifier: self.modifier.unwrap_or_default(),
            stops,
        })
    }
}

fn is_modifier_keyword(word: &str) -> bool {
    MODIFIER_KEYWORDS.iter().any(|kw| kw.eq_ignore_ascii_case(word))
}

/// `[repeating-]<linear|radial|conic>-gradient` → mode. The repeating flag is dropped.
fn mode_of(function: &str) -> Option<Mode> {
    let lower = function.to_ascii_lowercase();
    let plain = match lower.strip_prefix("repeating-") {
        Some(rest) => {
            log::debug!("repeating flag on {:?} discarded", function);
            rest
        }
        None => lower.as_str(),
    };
    Mode::ALL.into_iter().find(|m| m.function_name() == plain)
}

/// Shift token offsets so they index into the full input, not the body.
fn rebase(mut toks: Vec<Spanned>, base: usize) -> Vec<Spanned> {
    for t in &mut toks {
        t.offset += base;
    }
    toks
}

fn rebase_err(err: ParseError, base: usize) -> ParseError {
    match err {
        ParseError::MalformedSyntax { offset, message } => ParseError::MalformedSyntax { offset: offset + base, message },
        other => other,
    }
}

// ── Public parse entry points ─────────────────────────────────────────────

/// Parse a gradient declaration such as `linear-gradient(45deg, red, blue 80%)`.
///
/// Stops without a position are spread evenly between their neighbours; a
/// trailing one lands at 100%.
pub fn parse_gradient(text: &str) -> Result<ParsedGradient, ParseError> {
    let outer = tokens(text)?;
    let (name, args, offset) = match outer.as_slice() {
        [Spanned { token: Token::Function { name, args }, offset }] => (name, args, *offset),
        [] => return Err(ParseError::malformed(0, "empty gradient")),
        [Spanned { token: Token::Function { .. }, .. }, extra, ..] => {
            return Err(ParseError::malformed(extra.offset, "unexpected input after the gradient"));
        }
        [first, ..] => {
            return Err(ParseError::malformed(first.offset, "expected <type>-gradient(...)"));
        }
    };
    let mode = mode_of(name)
        .ok_or_else(|| ParseError::malformed(offset, format!("unknown gradient function {:?}", name)))?;

    let base = offset + name.len() + 1;
    let body_end = base + args.len();
    let body = tokens(args).map_err(|e| rebase_err(e, base))?;
    let body = rebase(body, base);
    if body.is_empty() {
        return Err(ParseError::InsufficientStops(0));
    }

    let mut parser = Parser::new(mode);
    let mut start = 0;
    loop {
        let comma = body[start..].iter().position(|t| t.token == Token::Comma).map(|i| start + i);
        let seg = &body[start..comma.unwrap_or(body.len())];
        let seg_end = comma.map_or(body_end, |i| body[i].offset);
        let Some(first) = seg.first() else {
            return Err(ParseError::malformed(seg_end, "empty segment between commas"));
        };
        parser.segment(seg, text[first.offset..seg_end].trim())?;
        match comma {
            Some(i) => start = i + 1,
            None => break,
        }
    }
    parser.finish()
}

/// Like [`parse_gradient`], but a mode outside `allowed` is
/// [`ParseError::UnsupportedMode`].
pub fn parse_gradient_in(text: &str, allowed: &[Mode]) -> Result<ParsedGradient, ParseError> {
    let parsed = parse_gradient(text)?;
    if !allowed.contains(&parsed.mode) {
        return Err(ParseError::UnsupportedMode(parsed.mode));
    }
    Ok(parsed)
}
