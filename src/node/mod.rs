// License: MIT

use std::fmt;

use tracing::trace;

use crate::content::{write_indent, Content, Map, Scalar, Sequence};
use crate::convert::FromScalar;
use crate::error::{NodeError, Result};
use crate::state::ParserState;
use crate::token::{TokenKind, TokenStream};

mod header;
mod iter;

pub use header::HeaderOutcome;
pub use iter::{Child, NodeIter};

/// One node of a document tree.
///
/// A node carries an optional tag and anchor and owns at most one piece of
/// content. An alias node records the name it refers to in `anchor` and never
/// has a tag or content.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    tag: String,
    anchor: String,
    alias: bool,
    content: Option<Content>,
}

impl Node {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a node from the next tokens of the stream.
    pub fn parse_from(tokens: &mut TokenStream, state: &ParserState) -> Result<Self> {
        let mut node = Self::new();
        node.parse(tokens, state)?;
        Ok(node)
    }

    /// Parse the node header (tags, anchors, aliases) and then its content.
    ///
    /// Any previous state of the node is dropped first, so a node can be
    /// reused for several parses. Alias nodes stop right after the header.
    ///
    /// # Errors
    /// Structural errors from the content, an unexpected content token, and,
    /// with [`ParserState::strict_headers`], duplicate headers.
    pub fn parse(&mut self, tokens: &mut TokenStream, state: &ParserState) -> Result<()> {
        self.clear();

        self.parse_header(tokens, state)?;

        if self.alias {
            trace!(alias = %self.anchor, "alias node, skipping content");
            return Ok(());
        }

        let Some(token) = tokens.peek() else {
            return Ok(());
        };

        let mut content = match token.kind {
            TokenKind::Scalar => Content::Scalar(Scalar::new()),
            TokenKind::FlowSeqStart | TokenKind::BlockSeqStart | TokenKind::BlockEntry => {
                Content::Sequence(Sequence::new())
            }
            TokenKind::FlowMapStart | TokenKind::BlockMapStart => Content::Map(Map::new()),

            // tokens that close or separate the enclosing construct: empty node
            TokenKind::DocStart
            | TokenKind::DocEnd
            | TokenKind::BlockEnd
            | TokenKind::FlowSeqEnd
            | TokenKind::FlowMapEnd
            | TokenKind::FlowEntry
            | TokenKind::Key
            | TokenKind::Value => {
                trace!(token = %token.kind, "empty node");
                return Ok(());
            }

            TokenKind::Directive | TokenKind::Anchor | TokenKind::Alias | TokenKind::Tag => {
                return Err(NodeError::UnexpectedToken {
                    token: token.to_string(),
                    line: token.mark.line,
                    column: token.mark.column,
                    hint: Some("Expected node content".into()),
                    code: Some(222),
                });
            }
        };

        trace!(token = %token.kind, "dispatching node content");
        content.parse(tokens, state)?;
        self.content = Some(content);
        Ok(())
    }

    /// Reset to an empty, untagged, unanchored node.
    pub fn clear(&mut self) {
        self.tag.clear();
        self.anchor.clear();
        self.alias = false;
        self.content = None;
    }

    pub fn tag(&self) -> Option<&str> {
        (!self.tag.is_empty()).then_some(self.tag.as_str())
    }

    /// The anchor this node defines, or the name it refers to when it is an
    /// alias.
    pub fn anchor(&self) -> Option<&str> {
        (!self.anchor.is_empty()).then_some(self.anchor.as_str())
    }

    pub fn is_alias(&self) -> bool {
        self.alias
    }

    pub fn content(&self) -> Option<&Content> {
        self.content.as_ref()
    }

    pub fn is_null(&self) -> bool {
        self.content.is_none()
    }

    /// The text of a scalar node.
    pub fn scalar(&self) -> Option<&str> {
        self.content.as_ref()?.as_scalar().map(Scalar::value)
    }

    /// Uniform cursor over the children of a sequence or map. Scalars and
    /// empty nodes yield nothing.
    pub fn iter(&self) -> NodeIter<'_> {
        self.content.as_ref().map_or(NodeIter::Empty, Content::iter)
    }

    pub fn len(&self) -> usize {
        self.content.as_ref().map_or(0, Content::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sequence item at `index`.
    pub fn get(&self, index: usize) -> Option<&Node> {
        self.content.as_ref()?.as_sequence()?.get(index)
    }

    /// Map value under the scalar key `key`.
    pub fn find(&self, key: &str) -> Option<&Node> {
        self.content.as_ref()?.as_map()?.get(key)
    }

    /// Read the node's scalar as `T`.
    ///
    /// ```
    /// # use yaml_tree::{Node, ParserState, Token, TokenStream};
    /// let mut tokens: TokenStream = vec![Token::scalar("8080")].into();
    /// let node = Node::parse_from(&mut tokens, &ParserState::new()).unwrap();
    /// let port: u32 = node.read().unwrap();
    /// assert_eq!(port, 8080);
    /// ```
    ///
    /// # Errors
    /// `EmptyContent` when the node has no content, `Conversion` when the
    /// content is not a scalar or does not convert.
    pub fn read<T: FromScalar>(&self) -> Result<T> {
        let content = self.content.as_ref().ok_or_else(|| NodeError::EmptyContent {
            hint: Some(format!("Cannot read {} from an empty node", T::TARGET)),
            code: Some(401),
        })?;
        content.read()
    }

    /// Write the debug representation at `indent`, starting on a fresh line.
    pub fn write<W: fmt::Write>(&self, out: &mut W, indent: usize) -> fmt::Result {
        self.write_at(out, indent, false, false)
    }

    /// Write the debug representation with the cursor state of the caller.
    ///
    /// `started_line` says something is already on the current line;
    /// `only_one_char_on_line` says that something is just a list marker the
    /// node may follow on the same line.
    pub fn write_at<W: fmt::Write>(
        &self,
        out: &mut W,
        indent: usize,
        started_line: bool,
        only_one_char_on_line: bool,
    ) -> fmt::Result {
        if started_line && !only_one_char_on_line {
            out.write_char('\n')?;
        }
        let mut needs_indent = !(started_line && only_one_char_on_line);

        if !self.tag.is_empty() {
            if needs_indent {
                write_indent(out, indent)?;
            }
            writeln!(out, "{{tag: {}}}", self.tag)?;
            needs_indent = true;
        }

        if !self.anchor.is_empty() {
            if needs_indent {
                write_indent(out, indent)?;
            }
            if self.alias {
                writeln!(out, "{{alias: {}}}", self.anchor)?;
            } else {
                writeln!(out, "{{anchor: {}}}", self.anchor)?;
            }
            needs_indent = true;
        }

        if needs_indent {
            write_indent(out, indent)?;
        }
        match &self.content {
            None => writeln!(out, "{{no content}}"),
            Some(content) => content.write(out, indent, true, true),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, 0)
    }
}

impl From<Content> for Node {
    fn from(content: Content) -> Self {
        Self {
            content: Some(content),
            ..Self::default()
        }
    }
}

impl<'a> IntoIterator for &'a Node {
    type Item = Child<'a>;
    type IntoIter = NodeIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
