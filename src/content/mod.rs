// License: MIT

use std::fmt;

use crate::convert::FromScalar;
use crate::error::{NodeError, Result};
use crate::node::{Node, NodeIter};
use crate::state::ParserState;
use crate::token::{TokenKind, TokenStream};

mod map;
mod scalar;
mod sequence;

pub use map::Map;
pub use scalar::Scalar;
pub use sequence::Sequence;

/// The payload of a node: a single value, an ordered list, or key/value pairs.
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Scalar(Scalar),
    Sequence(Sequence),
    Map(Map),
}

impl Content {
    pub fn parse(&mut self, tokens: &mut TokenStream, state: &ParserState) -> Result<()> {
        match self {
            Content::Scalar(scalar) => scalar.parse(tokens, state),
            Content::Sequence(sequence) => sequence.parse(tokens, state),
            Content::Map(map) => map.parse(tokens, state),
        }
    }

    pub fn write<W: fmt::Write>(
        &self,
        out: &mut W,
        indent: usize,
        started_line: bool,
        only_one_char_on_line: bool,
    ) -> fmt::Result {
        match self {
            Content::Scalar(scalar) => scalar.write(out),
            Content::Sequence(sequence) => sequence.write(out, indent, started_line, only_one_char_on_line),
            Content::Map(map) => map.write(out, indent, started_line, only_one_char_on_line),
        }
    }

    pub fn iter(&self) -> NodeIter<'_> {
        match self {
            Content::Scalar(_) => NodeIter::Empty,
            Content::Sequence(sequence) => NodeIter::Sequence(sequence.items().iter()),
            Content::Map(map) => NodeIter::Map(map.entries().iter()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Content::Scalar(_) => 0,
            Content::Sequence(sequence) => sequence.len(),
            Content::Map(map) => map.len(),
        }
    }

    pub fn read<T: FromScalar>(&self) -> Result<T> {
        match self {
            Content::Scalar(scalar) => scalar.read(),
            Content::Sequence(_) => Err(not_a_scalar("sequence", T::TARGET)),
            Content::Map(_) => Err(not_a_scalar("map", T::TARGET)),
        }
    }

    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Content::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Content::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Content::Map(map) => Some(map),
            _ => None,
        }
    }
}

fn not_a_scalar(shape: &str, target: &'static str) -> NodeError {
    NodeError::Conversion {
        value: format!("<{}>", shape),
        target,
        hint: Some("Only scalar nodes can be read as values".into()),
        code: Some(407),
    }
}

/// Emit `level` indentation units of two spaces.
pub(crate) fn write_indent<W: fmt::Write>(out: &mut W, level: usize) -> fmt::Result {
    for _ in 0..level {
        out.write_str("  ")?;
    }
    Ok(())
}

/// Parse one child node from the stream. The node only reaches its container
/// once it parsed completely.
pub(crate) fn parse_child(tokens: &mut TokenStream, state: &ParserState) -> Result<Node> {
    let mut node = Node::new();
    node.parse(tokens, state)?;
    Ok(node)
}

pub(crate) fn describe_next(tokens: &TokenStream) -> String {
    tokens
        .peek()
        .map_or_else(|| "end of stream".to_string(), |t| t.to_string())
}

pub(crate) fn is_next(tokens: &TokenStream, kind: TokenKind) -> bool {
    tokens.peek_kind() == Some(kind)
}

#[cfg(test)]
mod tests;
