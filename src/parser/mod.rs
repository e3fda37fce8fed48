// License: MIT

use tracing::debug;

use crate::content::describe_next;
use crate::error::{NodeError, Result};
use crate::node::Node;
use crate::state::ParserState;
use crate::token::{Token, TokenKind, TokenStream};

mod directive;

/// Splits a token stream into documents and builds one root node per document.
///
/// Directives only apply to the document that follows them; every document
/// starts again from the state the parser was created with.
pub struct Parser {
    tokens: TokenStream,
    base: ParserState,
    state: ParserState,
}

impl Parser {
    pub fn new(tokens: TokenStream, state: ParserState) -> Self {
        Self {
            tokens,
            base: state.clone(),
            state,
        }
    }

    pub fn from_tokens<I: IntoIterator<Item = Token>>(tokens: I) -> Self {
        Self::new(tokens.into_iter().collect(), ParserState::default())
    }

    /// State used for the most recent document, directives included.
    pub fn state(&self) -> &ParserState {
        &self.state
    }

    /// True while tokens remain to be parsed.
    pub fn has_more(&self) -> bool {
        !self.tokens.is_empty()
    }

    /// Parse the next document: its directives, an optional `---`, the root
    /// node and an optional `...`.
    ///
    /// Returns `Ok(None)` once the stream is exhausted.
    pub fn next_document(&mut self) -> Result<Option<Node>> {
        self.state = self.base.clone();
        directive::parse_directives(&mut self.tokens, &mut self.state)?;

        if self.tokens.is_empty() {
            return Ok(None);
        }

        let remaining = self.tokens.len();
        let mark = self.tokens.mark();
        debug!(line = mark.line, column = mark.column, "parsing document");

        if self.tokens.peek_kind() == Some(TokenKind::DocStart) {
            self.tokens.eat();
        }

        let root = Node::parse_from(&mut self.tokens, &self.state)?;

        if self.tokens.peek_kind() == Some(TokenKind::DocEnd) {
            self.tokens.eat();
        }

        if self.tokens.len() == remaining {
            let mark = self.tokens.mark();
            return Err(NodeError::UnexpectedToken {
                token: describe_next(&self.tokens),
                line: mark.line,
                column: mark.column,
                hint: Some("Expected the start of a document".into()),
                code: Some(223),
            });
        }

        Ok(Some(root))
    }

    /// Parse every remaining document.
    pub fn documents(&mut self) -> Result<Vec<Node>> {
        let mut documents = Vec::new();
        while let Some(document) = self.next_document()? {
            documents.push(document);
        }
        Ok(documents)
    }
}

#[cfg(test)]
mod tests;
