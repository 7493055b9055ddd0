use crate::error::ParseError;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Bare word: `red`, `to`, `circle`, `linear-gradient` when not called.
    Ident(String),
    /// `name(args)` with balanced parentheses. `args` is the raw inner text;
    /// commas inside it never separate gradient segments.
    Function { name: String, args: String },
    /// `#` followed by its word characters, without the `#`.
    Hash(String),
    Number(f32),
    Percentage(f32),
    /// Number with a unit suffix, unit lowercased: `45deg`, `0.5turn`, `10px`.
    Dimension { value: f32, unit: String },
    Comma,
    Slash,
    // Sentinel
    Eof,
}

/// A token plus the byte offset where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token: Token,
    pub offset: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0 }
    }

    pub fn tokenize(mut self) -> Result<Vec<Spanned>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            self.skip_whitespace();
            let offset = self.pos;
            let token = self.next_token()?;
            let eof = token == Token::Eof;
            tokens.push(Spanned { token, offset });
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.src[self.pos..].chars().nth(n)
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(c) if c.is_whitespace()) {
            self.advance();
        }
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        ParseError::malformed(self.pos, msg)
    }

    fn starts_number(&self) -> bool {
        let digit_at = |n: usize| matches!(self.peek_nth(n), Some(c) if c.is_ascii_digit());
        match self.peek() {
            Some(c) if c.is_ascii_digit() => true,
            Some('.') => digit_at(1),
            Some('+' | '-') => digit_at(1) || (self.peek_nth(1) == Some('.') && digit_at(2)),
            _ => false,
        }
    }

    fn starts_ident(&self) -> bool {
        let word_start = |c: Option<char>| matches!(c, Some(c) if c.is_alphabetic() || c == '_');
        match self.peek() {
            Some('-') => word_start(self.peek_nth(1)) || self.peek_nth(1) == Some('-'),
            c => word_start(c),
        }
    }

    fn next_token(&mut self) -> Result<Token, ParseError> {
        let ch = match self.peek() {
            None => return Ok(Token::Eof),
            Some(c) => c,
        };

        match ch {
            ',' => { self.advance(); Ok(Token::Comma) }
            '/' => { self.advance(); Ok(Token::Slash) }
            '#' => self.lex_hash(),
            _ if self.starts_number() => self.lex_number(),
            _ if self.starts_ident() => self.lex_ident_or_function(),
            other => Err(self.err(format!("unexpected character {:?}", other))),
        }
    }

    fn eat_word(&mut self) -> &'s str {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '-' || c == '_') {
            self.advance();
        }
        &self.src[start..self.pos]
    }

    fn lex_hash(&mut self) -> Result<Token, ParseError> {
        self.advance(); // consume `#`
        let word = self.eat_word();
        if word.is_empty() {
            return Err(self.err("expected hex digits after '#'"));
        }
        Ok(Token::Hash(word.to_string()))
    }

    fn lex_number(&mut self) -> Result<Token, ParseError> {
        let start = self.pos;
        if matches!(self.peek(), Some('+' | '-')) {
            self.advance();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        if self.peek() == Some('.') {
            self.advance();
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }
        // Exponent only when digits follow, so `1em` stays a dimension.
        let digit_at = |n: usize| matches!(self.peek_nth(n), Some(c) if c.is_ascii_digit());
        if matches!(self.peek(), Some('e' | 'E'))
            && (digit_at(1) || (matches!(self.peek_nth(1), Some('+' | '-')) && digit_at(2)))
        {
            self.advance();
            if matches!(self.peek(), Some('+' | '-')) {
                self.advance();
            }
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }
        let text = &self.src[start..self.pos];
        let value = text
            .parse::<f32>()
            .map_err(|_| ParseError::malformed(start, format!("invalid number {:?}", text)))?;

        if self.peek() == Some('%') {
            self.advance();
            return Ok(Token::Percentage(value));
        }

        let unit_start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_alphabetic()) {
            self.advance();
        }
        if self.pos > unit_start {
            let unit = self.src[unit_start..self.pos].to_ascii_lowercase();
            return Ok(Token::Dimension { value, unit });
        }
        Ok(Token::Number(value))
    }

    fn lex_ident_or_function(&mut self) -> Result<Token, ParseError> {
        let name = self.eat_word();
        if self.peek() != Some('(') {
            return Ok(Token::Ident(name.to_string()));
        }

        let open = self.pos;
        self.advance(); // consume `(`
        let inner_start = self.pos;
        let mut depth = 1usize;
        loop {
            match self.advance() {
                None => return Err(ParseError::malformed(open, format!("unclosed '(' after {}", name))),
                Some('(') => depth += 1,
                Some(')') => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                Some(_) => {}
            }
        }
        // `self.pos` now sits just past the matching `)`.
        let args = self.src[inner_start..self.pos - 1].to_string();
        Ok(Token::Function { name: name.to_string(), args })
    }
}

/// Tokenize `src` into its tokens without the trailing [`Token::Eof`].
pub fn tokens(src: &str) -> Result<Vec<Spanned>, ParseError> {
    let mut out = Lexer::new(src).tokenize()?;
    out.pop();
    Ok(out)
}
