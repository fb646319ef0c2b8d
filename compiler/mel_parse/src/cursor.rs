//! Byte cursor over program text.
//!
//! The reader only ever stops on ASCII bytes (`(`, `)`, space, ASCII
//! whitespace, sign and digit characters) or at end of input, so every
//! position it slices at is a `char` boundary. The one place it steps over an
//! arbitrary character, [`Cursor::bump_char`], advances by the full UTF-8
//! width.

use memchr::memchr;

/// Whitespace as the C locale defines it: space, `\t`, `\n`, `\v`, `\f`, `\r`.
#[inline]
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\x0B' | b'\x0C' | b'\r')
}

/// Cursor over the source text.
///
/// [`Copy`], so a snapshot is just a copy.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(source: &'a str) -> Self {
        Cursor { source, pos: 0 }
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Byte at the current position, `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.source.as_bytes().get(self.pos).copied()
    }

    /// Unconsumed text.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Text between `start` and the current position.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }

    /// Consume one character.
    pub fn bump_char(&mut self) -> Option<char> {
        let c = self.rest().chars().next()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    pub fn skip_whitespace(&mut self) {
        while self.current().is_some_and(is_whitespace) {
            self.pos += 1;
        }
    }

    /// Advance to the next occurrence of `byte` without consuming it.
    ///
    /// Returns `false` (cursor at end of input) if there is none.
    pub fn skip_until(&mut self, byte: u8) -> bool {
        if let Some(offset) = memchr(byte, self.rest().as_bytes()) {
            self.pos += offset;
            true
        } else {
            self.pos = self.source.len();
            false
        }
    }

    /// Consume text up to and including `terminator`, returning the text
    /// before it.
    ///
    /// Returns `None` (cursor at end of input) if `terminator` never occurs.
    pub fn take_until(&mut self, terminator: u8) -> Option<&'a str> {
        let rest = self.rest();
        if let Some(offset) = memchr(terminator, rest.as_bytes()) {
            self.pos += offset + 1;
            Some(&rest[..offset])
        } else {
            self.pos = self.source.len();
            None
        }
    }

    /// Consume a run of non-whitespace bytes.
    pub fn take_token(&mut self) -> &'a str {
        let rest = self.rest();
        let len = rest
            .bytes()
            .position(is_whitespace)
            .unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    /// Consume an optional `+`/`-` followed by ASCII digits.
    ///
    /// The returned text may be empty or a lone sign; the caller validates it.
    pub fn take_integer(&mut self) -> &'a str {
        let start = self.pos;
        if matches!(self.current(), Some(b'+' | b'-')) {
            self.pos += 1;
        }
        while self.current().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        self.slice_from(start)
    }
}
