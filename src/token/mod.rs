// License: MIT

use std::fmt;

use serde::{Deserialize, Serialize};

mod stream;

pub use stream::TokenStream;

/// Classification of a token produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    // --- document ---
    Directive,
    DocStart,
    DocEnd,

    // --- block structure ---
    BlockSeqStart,
    BlockMapStart,
    BlockEnd,
    BlockEntry,

    // --- flow structure ---
    FlowSeqStart,
    FlowMapStart,
    FlowSeqEnd,
    FlowMapEnd,
    FlowEntry,

    // --- mapping indicators ---
    Key,
    Value,

    // --- node properties ---
    Anchor,
    Alias,
    Tag,

    // --- leaves ---
    Scalar,
}

impl TokenKind {
    /// True for tokens that belong to a node's header (tag, anchor, alias).
    pub fn is_header(self) -> bool {
        matches!(self, TokenKind::Tag | TokenKind::Anchor | TokenKind::Alias)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Directive => "directive",
            TokenKind::DocStart => "document start '---'",
            TokenKind::DocEnd => "document end '...'",
            TokenKind::BlockSeqStart => "block sequence start",
            TokenKind::BlockMapStart => "block mapping start",
            TokenKind::BlockEnd => "block end",
            TokenKind::BlockEntry => "block entry '-'",
            TokenKind::FlowSeqStart => "flow sequence start '['",
            TokenKind::FlowMapStart => "flow mapping start '{'",
            TokenKind::FlowSeqEnd => "flow sequence end ']'",
            TokenKind::FlowMapEnd => "flow mapping end '}'",
            TokenKind::FlowEntry => "flow entry ','",
            TokenKind::Key => "key '?'",
            TokenKind::Value => "value ':'",
            TokenKind::Anchor => "anchor",
            TokenKind::Alias => "alias",
            TokenKind::Tag => "tag",
            TokenKind::Scalar => "scalar",
        };
        f.write_str(name)
    }
}

/// Position of a token in the source text. Lines and columns start at 1; a zero
/// mark means the position is unknown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mark {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    #[serde(default)]
    pub value: String,
    /// Extra strings carried by the token: the suffix of a tag, or the
    /// arguments of a directive.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub params: Vec<String>,
    #[serde(default)]
    pub mark: Mark,
}

impl Token {
    pub fn new(kind: TokenKind) -> Self {
        Self {
            kind,
            value: String::new(),
            params: Vec::new(),
            mark: Mark::default(),
        }
    }

    pub fn with_value(kind: TokenKind, value: impl Into<String>) -> Self {
        Self { value: value.into(), ..Self::new(kind) }
    }

    pub fn scalar(value: impl Into<String>) -> Self {
        Self::with_value(TokenKind::Scalar, value)
    }

    /// A tag token: `handle` is translated by the parser state, `suffix` is
    /// appended verbatim. `!!str` is `Token::tag("!!", "str")`.
    pub fn tag(handle: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            params: vec![suffix.into()],
            ..Self::with_value(TokenKind::Tag, handle)
        }
    }

    pub fn anchor(name: impl Into<String>) -> Self {
        Self::with_value(TokenKind::Anchor, name)
    }

    pub fn alias(name: impl Into<String>) -> Self {
        Self::with_value(TokenKind::Alias, name)
    }

    pub fn directive(name: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            params,
            ..Self::with_value(TokenKind::Directive, name)
        }
    }

    pub fn at(mut self, line: usize, column: usize) -> Self {
        self.mark = Mark { line, column };
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} {:?}", self.kind, self.value)
        }
    }
}
