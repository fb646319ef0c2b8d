//! Expression keywords.

use std::fmt;

/// The word that follows `(` and selects the expression form.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Keyword {
    Val,
    Var,
    Add,
    Sub,
    If,
    Let,
    Function,
    Call,
}

impl Keyword {
    pub const ALL: [Keyword; 8] = [
        Keyword::Val,
        Keyword::Var,
        Keyword::Add,
        Keyword::Sub,
        Keyword::If,
        Keyword::Let,
        Keyword::Function,
        Keyword::Call,
    ];

    /// Match a whole token. Case-sensitive.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "val" => Some(Keyword::Val),
            "var" => Some(Keyword::Var),
            "add" => Some(Keyword::Add),
            "sub" => Some(Keyword::Sub),
            "if" => Some(Keyword::If),
            "let" => Some(Keyword::Let),
            "function" => Some(Keyword::Function),
            "call" => Some(Keyword::Call),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Val => "val",
            Keyword::Var => "var",
            Keyword::Add => "add",
            Keyword::Sub => "sub",
            Keyword::If => "if",
            Keyword::Let => "let",
            Keyword::Function => "function",
            Keyword::Call => "call",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
