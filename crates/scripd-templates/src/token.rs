//! Template tokens
//!
//! Raw template strings are normalized once after loading: placeholders are
//! lower-cased and literal keywords upper-cased. They are then parsed into
//! `Token`s by their enclosing markers.

/// One unit of a statement skeleton
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// SQL keyword or punctuation, always kept
    Literal(String),
    /// `{name}`
    Value(String),
    /// `[{name}]`, a list of sub-declarations rendered through their own template
    Definer(String),
    /// `[(name)]`, emits `, NAME` when switched on
    CommaLiteral(String),
    /// `[name]`, emits `NAME` when switched on
    Keyword(String),
}

impl Token {
    /// Parses a normalized template string
    pub fn parse(raw: &str) -> Token {
        if let Some(inner) = enclosed(raw, '[', ']') {
            if let Some(name) = enclosed(inner, '{', '}') {
                Token::Definer(name.to_string())
            } else if let Some(name) = enclosed(inner, '(', ')') {
                Token::CommaLiteral(name.to_string())
            } else {
                Token::Keyword(inner.to_string())
            }
        } else if let Some(name) = enclosed(raw, '{', '}') {
            Token::Value(name.to_string())
        } else {
            Token::Literal(raw.to_string())
        }
    }

    /// Placeholder name, `None` for literals
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            Token::Literal(_) => None,
            Token::Value(name)
            | Token::Definer(name)
            | Token::CommaLiteral(name)
            | Token::Keyword(name) => Some(name),
        }
    }
}

fn enclosed(s: &str, open: char, close: char) -> Option<&str> {
    s.strip_prefix(open)?.strip_suffix(close)
}

/// Normalizes token casing: tokens starting with `[` or `{` are lower-cased,
/// everything else is upper-cased
pub fn classify<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .map(|token| {
            let token = token.as_ref();
            if token.starts_with('[') || token.starts_with('{') {
                token.to_lowercase()
            } else {
                token.to_uppercase()
            }
        })
        .collect()
}

/// Normalizes and parses a raw token sequence
pub fn parse_tokens<S: AsRef<str>>(raw: &[S]) -> Vec<Token> {
    classify(raw).iter().map(|t| Token::parse(t)).collect()
}
