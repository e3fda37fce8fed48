use tracing::warn;

use super::*;
use crate::token::Token;

/// Result of applying one header token to a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderOutcome {
    Applied,
    /// The node already had what the token tried to set; nothing changed.
    Duplicate,
}

impl Node {
    /// Consume every tag, anchor and alias token at the front of the stream.
    /// Headers come in any order; a header that cannot be applied (a second
    /// tag or anchor, or anything next to an alias) is still consumed.
    pub(super) fn parse_header(&mut self, tokens: &mut TokenStream, state: &ParserState) -> Result<()> {
        while let Some(token) = tokens.peek().filter(|t| t.kind.is_header()) {
            let outcome = match token.kind {
                TokenKind::Tag => self.apply_tag(token, state),
                TokenKind::Anchor => self.apply_anchor(token),
                _ => self.apply_alias(token),
            };

            if outcome == HeaderOutcome::Duplicate {
                self.reject_duplicate(token, state)?;
            }
            tokens.eat();
        }
        Ok(())
    }

    /// Set the tag from a tag token: the handle goes through the tag table,
    /// the token's params are appended as-is.
    pub fn apply_tag(&mut self, token: &Token, state: &ParserState) -> HeaderOutcome {
        if self.alias || !self.tag.is_empty() {
            return HeaderOutcome::Duplicate;
        }

        let mut tag = state.translate_tag(&token.value);
        for param in &token.params {
            tag.push_str(param);
        }
        self.tag = tag;
        HeaderOutcome::Applied
    }

    /// Aliases take no anchor of their own.
    pub fn apply_anchor(&mut self, token: &Token) -> HeaderOutcome {
        if self.alias || !self.anchor.is_empty() {
            return HeaderOutcome::Duplicate;
        }

        self.anchor = token.value.clone();
        HeaderOutcome::Applied
    }

    /// Turn the node into an alias. Only valid on a node without tag or anchor.
    pub fn apply_alias(&mut self, token: &Token) -> HeaderOutcome {
        if !self.anchor.is_empty() || !self.tag.is_empty() {
            return HeaderOutcome::Duplicate;
        }

        self.anchor = token.value.clone();
        self.alias = true;
        HeaderOutcome::Applied
    }

    fn reject_duplicate(&self, token: &Token, state: &ParserState) -> Result<()> {
        if !state.is_strict() {
            warn!(
                token = %token,
                line = token.mark.line,
                column = token.mark.column,
                "ignoring repeated node header"
            );
            return Ok(());
        }

        let (line, column) = (token.mark.line, token.mark.column);
        if self.alias {
            return Err(NodeError::InvalidAlias {
                name: self.anchor.clone(),
                line,
                column,
                hint: Some(format!("Alias *{} cannot also carry a {}", self.anchor, token.kind)),
                code: Some(233),
            });
        }

        Err(match token.kind {
            TokenKind::Tag => NodeError::DuplicateTag {
                first: self.tag.clone(),
                second: format!("{}{}", token.value, token.params.concat()),
                line,
                column,
                code: Some(231),
            },
            TokenKind::Anchor => NodeError::DuplicateAnchor {
                first: self.anchor.clone(),
                second: token.value.clone(),
                line,
                column,
                code: Some(232),
            },
            _ => NodeError::InvalidAlias {
                name: token.value.clone(),
                line,
                column,
                hint: Some("An alias cannot carry a tag or an anchor".into()),
                code: Some(233),
            },
        })
    }
}
