//! Recursive-descent reader.
//!
//! There is no token buffer and no backtracking. Each call to
//! [`Parser::parse_expr`] skips to the next `(`, reads the keyword and then
//! reads exactly the pieces that keyword needs, recursing for
//! subexpressions. Closing parentheses are never matched: they are skipped
//! along with any other text on the way to the next `(`, which is also how
//! the words `then`, `else`, `=` and `in` are tolerated.
//!
//! Identifiers are read raw. After `var`, `let` or `function` exactly one
//! separator character is consumed, then everything up to the terminator:
//! `)` for `var`, a space for `let` and `function`.

use mel_ir::{Expr, Name, Span, StringInterner};
use mel_stack::ensure_sufficient_stack;

use crate::cursor::{is_whitespace, Cursor};
use crate::{Keyword, ParseError};

/// Reader over one program text.
pub struct Parser<'src, 'i> {
    cursor: Cursor<'src>,
    interner: &'i StringInterner,
}

impl<'src, 'i> Parser<'src, 'i> {
    pub fn new(source: &'src str, interner: &'i StringInterner) -> Self {
        Parser {
            cursor: Cursor::new(source),
            interner,
        }
    }

    /// Current byte offset.
    pub fn position(&self) -> usize {
        self.cursor.pos()
    }

    /// Text not consumed yet.
    pub fn remaining(&self) -> &'src str {
        self.cursor.rest()
    }

    /// Read the next expression.
    pub fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_expr_inner())
    }

    fn parse_expr_inner(&mut self) -> Result<Expr, ParseError> {
        self.open_paren()?;
        let keyword = self.keyword()?;
        tracing::trace!(%keyword, offset = self.cursor.pos(), "reading expression");

        match keyword {
            Keyword::Val => self.integer().map(Expr::Literal),
            Keyword::Var => {
                let name = self.identifier(b')', "`)` after a variable name")?;
                Ok(Expr::Variable(name))
            }
            Keyword::Add => {
                let left = self.parse_expr()?;
                let right = self.parse_expr()?;
                Ok(Expr::add(left, right))
            }
            Keyword::Sub => {
                let left = self.parse_expr()?;
                let right = self.parse_expr()?;
                Ok(Expr::subtract(left, right))
            }
            Keyword::If => {
                let cmp_left = self.parse_expr()?;
                let cmp_right = self.parse_expr()?;
                let then_branch = self.parse_expr()?;
                let else_branch = self.parse_expr()?;
                Ok(Expr::conditional(cmp_left, cmp_right, then_branch, else_branch))
            }
            Keyword::Let => {
                let name = self.identifier(b' ', "a space after the bound name")?;
                let bound = self.parse_expr()?;
                let body = self.parse_expr()?;
                Ok(Expr::binding(name, bound, body))
            }
            Keyword::Function => {
                let param = self.identifier(b' ', "a space after the parameter name")?;
                let body = self.parse_expr()?;
                Ok(Expr::function(param, body))
            }
            Keyword::Call => {
                let callee = self.parse_expr()?;
                let arg = self.parse_expr()?;
                Ok(Expr::application(callee, arg))
            }
        }
    }

    /// Skip to the next `(` and consume it.
    fn open_paren(&mut self) -> Result<(), ParseError> {
        if !self.cursor.skip_until(b'(') {
            return Err(ParseError::unexpected_eof("`(`", self.cursor.pos()));
        }
        self.cursor.bump_char();
        Ok(())
    }

    fn keyword(&mut self) -> Result<Keyword, ParseError> {
        self.cursor.skip_whitespace();
        let start = self.cursor.pos();
        let token = self.cursor.take_token();
        if token.is_empty() {
            return Err(ParseError::unexpected_eof("an expression keyword", start));
        }
        Keyword::from_token(token).ok_or_else(|| {
            ParseError::unknown_keyword(token, Span::from_range(start..self.cursor.pos()))
        })
    }

    /// Consume one separator character, then read up to `terminator`.
    fn identifier(&mut self, terminator: u8, expected: &'static str) -> Result<Name, ParseError> {
        if self.cursor.bump_char().is_none() {
            return Err(ParseError::unexpected_eof("an identifier", self.cursor.pos()));
        }
        let text = self
            .cursor
            .take_until(terminator)
            .ok_or_else(|| ParseError::unexpected_eof(expected, self.cursor.pos()))?;
        Ok(self.interner.intern(text))
    }

    /// Optional sign and decimal digits, after optional whitespace.
    fn integer(&mut self) -> Result<i64, ParseError> {
        self.cursor.skip_whitespace();
        if self.cursor.is_eof() {
            return Err(ParseError::unexpected_eof("an integer", self.cursor.pos()));
        }
        let start = self.cursor.pos();
        let digits = self.cursor.take_integer();
        digits.parse::<i64>().map_err(|_| {
            // Report the whole word the integer was supposed to be.
            let rest = self.cursor.rest();
            let tail_len = rest
                .bytes()
                .position(|b| b == b')' || is_whitespace(b))
                .unwrap_or(rest.len());
            let end = self.cursor.pos() + tail_len;
            let text = format!("{digits}{}", &rest[..tail_len]);
            ParseError::invalid_integer(&text, Span::from_range(start..end))
        })
    }
}
