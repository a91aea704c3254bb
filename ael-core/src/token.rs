//! Filename tokenizer.
//!
//! Splits a ROM base name into its bracketed tags and the plain text between
//! them, the shape shared by No-Intro, Redump, TOSEC and Trurip names:
//! ```text
//! Title (Region) (Disc 1 of 2) [!] {Extra}
//! ```

use serde::{Deserialize, Serialize};

/// Which brackets enclosed a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BracketKind {
    /// `[...]`
    Square,
    /// `(...)`
    Paren,
    /// `{...}`
    Curly,
    /// Text outside any brackets.
    Plain,
}

impl BracketKind {
    fn from_open(ch: char) -> Option<Self> {
        match ch {
            '[' => Some(Self::Square),
            '(' => Some(Self::Paren),
            '{' => Some(Self::Curly),
            _ => None,
        }
    }

    fn close_char(self) -> Option<char> {
        match self {
            Self::Square => Some(']'),
            Self::Paren => Some(')'),
            Self::Curly => Some('}'),
            Self::Plain => None,
        }
    }
}

/// A piece of a filename. Bracketed tokens keep their brackets in `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub kind: BracketKind,
}

/// Split a base filename into tokens, left to right.
///
/// A token is a `[...]`, `(...)` or `{...}` run, or a maximal run of text
/// containing none of `[`, `(`, `{`. Token text is trimmed; empty tokens and
/// lone `-` separators (as in `Name (USA) - (Disc 1 of 2)`) are dropped. An
/// opening bracket with no matching close belongs to no token and is skipped.
pub fn tokenize(base_name: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;

    while let Some(ch) = base_name[pos..].chars().next() {
        let Some(kind) = BracketKind::from_open(ch) else {
            pos += ch.len_utf8();
            continue;
        };
        push_token(&mut tokens, &base_name[plain_start..pos], BracketKind::Plain);
        let body_start = pos + ch.len_utf8();
        let end = kind.close_char().and_then(|close| {
            base_name[body_start..]
                .find(close)
                .map(|rel| body_start + rel + close.len_utf8())
        });
        match end {
            Some(end) => {
                push_token(&mut tokens, &base_name[pos..end], kind);
                pos = end;
            }
            None => pos = body_start,
        }
        plain_start = pos;
    }
    push_token(&mut tokens, &base_name[plain_start..], BracketKind::Plain);

    tokens
}

fn push_token(tokens: &mut Vec<Token>, raw: &str, kind: BracketKind) {
    let text = raw.trim();
    if text.is_empty() || text == "-" {
        return;
    }
    tokens.push(Token {
        text: text.to_string(),
        kind,
    });
}

/// Re-join token texts with single spaces.
pub fn join_tokens<'a>(tokens: impl IntoIterator<Item = &'a Token>) -> String {
    tokens
        .into_iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "tests/token_tests.rs"]
mod tests;
