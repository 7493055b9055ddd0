//! Color tokens.
//!
//! A [`ColorToken`] is an opaque, validated, normalized color string. The
//! editor never looks at channel values; it only needs to know that a token
//! is a color and to compare two tokens. Normalization lowercases names and
//! hex digits and rebuilds function arguments with canonical spacing, so
//! `RGBA(255, 0, 0, 1)` and `rgba(255,0,0,1)` compare equal.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;
use crate::lexer::{tokens, Token};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorToken(String);

impl ColorToken {
    /// Validate and normalize a single color token.
    pub fn parse(src: &str) -> Result<Self, ColorError> {
        let src = src.trim();
        if src.is_empty() {
            return Err(ColorError::Empty);
        }
        let toks = tokens(src).map_err(|_| ColorError::NotAColor(src.to_string()))?;
        match toks.as_slice() {
            [only] => Self::from_token(&only.token)
                .unwrap_or_else(|| Err(ColorError::NotAColor(src.to_string()))),
            _ => Err(ColorError::NotAColor(src.to_string())),
        }
    }

    /// Interpret a lexed token as a color.
    ///
    /// Returns `None` when the token cannot start a color at all (numbers,
    /// punctuation), and `Some(Err(..))` when it looks like one but is invalid.
    pub(crate) fn from_token(token: &Token) -> Option<Result<Self, ColorError>> {
        match token {
            Token::Hash(digits) => Some(from_hex(digits)),
            Token::Ident(name) => Some(from_name(name)),
            Token::Function { name, args } => Some(from_function(name, args)),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColorToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ColorToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ColorToken {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ColorToken {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ColorToken> for String {
    fn from(token: ColorToken) -> Self {
        token.0
    }
}

// ── Hex ───────────────────────────────────────────────────────────────────

fn from_hex(digits: &str) -> Result<ColorToken, ColorError> {
    let valid_len = matches!(digits.len(), 3 | 4 | 6 | 8);
    if !valid_len || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorError::InvalidHex(format!("#{}", digits)));
    }
    Ok(ColorToken(format!("#{}", digits.to_ascii_lowercase())))
}

// ── Named ─────────────────────────────────────────────────────────────────

fn from_name(name: &str) -> Result<ColorToken, ColorError> {
    let lower = name.to_ascii_lowercase();
    if is_named_color(&lower) {
        Ok(ColorToken(lower))
    } else {
        Err(ColorError::UnknownName(name.to_string()))
    }
}

/// `name` must already be lowercase.
pub fn is_named_color(name: &str) -> bool {
    matches!(name, "transparent" | "currentcolor") || NAMED_COLORS.binary_search(&name).is_ok()
}

// Sorted for binary search.
const NAMED_COLORS: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
    "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "green", "greenyellow", "grey", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "rebeccapurple", "red", "rosybrown", "royalblue",
    "saddlebrown", "salmon", "sandybrown", "seagreen", "seashell", "sienna", "silver",
    "skyblue", "slateblue", "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan",
    "teal", "thistle", "tomato", "turquoise", "violet", "wheat", "white", "whitesmoke",
    "yellow", "yellowgreen",
];

// ── Functions ─────────────────────────────────────────────────────────────

const COLOR_FUNCTIONS: &[&str] = &[
    "rgb", "rgba", "hsl", "hsla", "hwb", "lab", "lch", "oklab", "oklch", "color",
];

const COLOR_SPACES: &[&str] = &[
    "srgb", "srgb-linear", "display-p3", "a98-rgb", "prophoto-rgb", "rec2020", "xyz",
    "xyz-d50", "xyz-d65",
];

fn from_function(name: &str, args: &str) -> Result<ColorToken, ColorError> {
    let lower = name.to_ascii_lowercase();
    if !COLOR_FUNCTIONS.contains(&lower.as_str()) {
        return Err(ColorError::UnknownFunction(name.to_string()));
    }
    let bad = |reason: &str| ColorError::InvalidArguments { name: lower.clone(), reason: reason.into() };

    let spans = tokens(args).map_err(|_| bad("unreadable arguments"))?;
    // Each token with its source text, so channel values pass through untouched.
    let parts: Vec<Part<'_>> = spans
        .iter()
        .enumerate()
        .map(|(i, span)| {
            let end = spans.get(i + 1).map_or(args.len(), |next| next.offset);
            (&span.token, args[span.offset..end].trim())
        })
        .collect();

    let body = match lower.as_str() {
        "rgb" | "rgba" | "hsl" | "hsla" => components(&parts, true).map_err(|r| bad(r))?,
        "hwb" | "lab" | "lch" | "oklab" | "oklch" => components(&parts, false).map_err(|r| bad(r))?,
        "color" => {
            let (space, rest) = match parts.split_first() {
                Some(((Token::Ident(space), _), rest)) => (space.to_ascii_lowercase(), rest),
                _ => return Err(bad("expected a color space")),
            };
            if !COLOR_SPACES.contains(&space.as_str()) {
                return Err(bad("unknown color space"));
            }
            format!("{} {}", space, components(rest, false).map_err(|r| bad(r))?)
        }
        _ => unreachable!("filtered by COLOR_FUNCTIONS"),
    };
    Ok(ColorToken(format!("{}({})", lower, body)))
}

type Part<'a> = (&'a Token, &'a str);

fn is_token(part: &Part<'_>, token: &Token) -> bool {
    part.0 == token
}

/// Validate channel arguments and rebuild them in canonical spacing.
///
/// Legacy syntax is `a,b,c[,alpha]`; modern syntax is `a b c[ / alpha]`.
fn components(parts: &[Part<'_>], allow_commas: bool) -> Result<String, &'static str> {
    if parts.iter().any(|p| is_token(p, &Token::Comma)) {
        if !allow_commas {
            return Err("comma-separated arguments are not allowed");
        }
        let groups: Vec<&[Part<'_>]> = parts.split(|p| is_token(p, &Token::Comma)).collect();
        if !(3..=4).contains(&groups.len()) {
            return Err("expected 3 or 4 components");
        }
        let mut out = Vec::with_capacity(groups.len());
        for group in groups {
            match group {
                [part] => out.push(channel(part)?),
                _ => return Err("each component must be a single value"),
            }
        }
        return Ok(out.join(","));
    }

    let mut halves = parts.split(|p| is_token(p, &Token::Slash));
    let channels = halves.next().unwrap_or(&[]);
    let alpha = halves.next();
    if halves.next().is_some() {
        return Err("more than one '/'");
    }
    if channels.len() != 3 {
        return Err("expected 3 components");
    }
    let mut out = channels.iter().map(channel).collect::<Result<Vec<_>, _>>()?.join(" ");
    if let Some(alpha) = alpha {
        match alpha {
            [part] => {
                out.push_str(" / ");
                out.push_str(&channel(part)?);
            }
            _ => return Err("expected a single alpha value after '/'"),
        }
    }
    Ok(out)
}

/// Checks the channel's kind and returns its source text, lowercased.
fn channel(part: &Part<'_>) -> Result<String, &'static str> {
    let (token, text) = *part;
    let valid = match token {
        Token::Number(_) | Token::Percentage(_) => true,
        Token::Dimension { value, unit } => crate::angle::angle_to_degrees(*value, unit).is_some(),
        Token::Ident(word) => word.eq_ignore_ascii_case("none"),
        _ => false,
    };
    if !valid {
        return Err("components must be numbers, percentages, angles or none");
    }
    Ok(text.to_ascii_lowercase())
}
