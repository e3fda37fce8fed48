use std::collections::VecDeque;
use std::fs;
use std::path::Path;

use super::*;
use crate::error::{NodeError, Result};

/// An ordered, consumable queue of tokens.
///
/// `peek` looks at the next token, `pop` takes it, `eat` drops it. Once the
/// queue is exhausted every operation reports `None`.
#[derive(Debug, Clone, Default)]
pub struct TokenStream {
    tokens: VecDeque<Token>,
    last: Mark,
}

impl TokenStream {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a stream from a JSON array of tokens.
    ///
    /// ```
    /// # use yaml_tree::TokenStream;
    /// let tokens = TokenStream::from_json(r#"[{"kind": "scalar", "value": "a"}]"#).unwrap();
    /// assert_eq!(tokens.len(), 1);
    /// ```
    pub fn from_json(input: &str) -> Result<Self> {
        let tokens: Vec<Token> = serde_json::from_str(input).map_err(|e| NodeError::Fixture {
            message: e.to_string(),
            path: None,
            code: Some(501),
        })?;
        Ok(tokens.into_iter().collect())
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| NodeError::Fixture {
            message: e.to_string(),
            path: Some(path.display().to_string()),
            code: Some(502),
        })?;
        Self::from_json(&content).map_err(|e| match e {
            NodeError::Fixture { message, code, .. } => NodeError::Fixture {
                message,
                path: Some(path.display().to_string()),
                code,
            },
            other => other,
        })
    }

    pub fn peek(&self) -> Option<&Token> {
        self.tokens.front()
    }

    pub fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|t| t.kind)
    }

    pub fn pop(&mut self) -> Option<Token> {
        let token = self.tokens.pop_front()?;
        self.last = token.mark;
        Some(token)
    }

    pub fn eat(&mut self) {
        self.pop();
    }

    /// Position of the next token, or of the last consumed one once the stream
    /// is exhausted.
    pub fn mark(&self) -> Mark {
        self.peek().map_or(self.last, |t| t.mark)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl FromIterator<Token> for TokenStream {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
            last: Mark::default(),
        }
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        tokens.into_iter().collect()
    }
}
