use tracing::trace;

use super::*;

/// Key/value pairs in document order. Keys are full nodes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Map {
    entries: Vec<(Node, Node)>,
}

impl Map {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[(Node, Node)] {
        &self.entries
    }

    /// Value of the first entry whose key is a scalar equal to `key`.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.entries
            .iter()
            .find(|(k, _)| k.scalar() == Some(key))
            .map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn parse(&mut self, tokens: &mut TokenStream, state: &ParserState) -> Result<()> {
        self.entries.clear();

        self.entries = match tokens.peek_kind() {
            Some(TokenKind::BlockMapStart) => {
                trace!("parsing block map");
                parse_block(tokens, state)?
            }
            Some(TokenKind::FlowMapStart) => {
                trace!("parsing flow map");
                parse_flow(tokens, state)?
            }
            _ => Vec::new(),
        };
        Ok(())
    }

    pub fn write<W: fmt::Write>(
        &self,
        out: &mut W,
        indent: usize,
        started_line: bool,
        only_one_char_on_line: bool,
    ) -> fmt::Result {
        let fresh_line = started_line && !only_one_char_on_line;
        if fresh_line {
            out.write_char('\n')?;
        }

        for (i, (key, value)) in self.entries.iter().enumerate() {
            if fresh_line || i > 0 {
                write_indent(out, indent)?;
            }
            out.write_str("? ")?;
            key.write_at(out, indent + 1, true, true)?;
            write_indent(out, indent)?;
            out.write_str(": ")?;
            value.write_at(out, indent + 1, true, true)?;
        }

        if self.entries.is_empty() {
            out.write_char('\n')?;
        }
        Ok(())
    }
}

impl FromIterator<(Node, Node)> for Map {
    fn from_iter<I: IntoIterator<Item = (Node, Node)>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

fn malformed(tokens: &TokenStream, message: String, hint: &str, code: u32) -> NodeError {
    let mark = tokens.mark();
    NodeError::MalformedMap {
        message,
        line: mark.line,
        column: mark.column,
        hint: Some(hint.into()),
        code: Some(code),
    }
}

/// Key node, then an optional `VALUE node`. A key without a value maps to an
/// empty node.
fn parse_entry(tokens: &mut TokenStream, state: &ParserState) -> Result<(Node, Node)> {
    let key = parse_child(tokens, state)?;
    let value = if is_next(tokens, TokenKind::Value) {
        tokens.eat();
        parse_child(tokens, state)?
    } else {
        Node::new()
    };
    Ok((key, value))
}

/// `BLOCK-MAP-START (KEY entry)* BLOCK-END`
fn parse_block(tokens: &mut TokenStream, state: &ParserState) -> Result<Vec<(Node, Node)>> {
    tokens.eat(); // consume start

    let mut entries = Vec::new();
    loop {
        match tokens.peek_kind() {
            Some(TokenKind::BlockEnd) => {
                tokens.eat();
                break;
            }
            Some(TokenKind::Key) => {
                tokens.eat();
                entries.push(parse_entry(tokens, state)?);
            }
            _ => {
                return Err(malformed(
                    tokens,
                    format!("Expected a key or end of block map, got {}", describe_next(tokens)),
                    "Block maps hold key/value entries until the block ends",
                    211,
                ));
            }
        }
    }
    Ok(entries)
}

/// `FLOW-MAP-START (KEY entry (FLOW-ENTRY KEY entry)* FLOW-ENTRY?)? FLOW-MAP-END`
fn parse_flow(tokens: &mut TokenStream, state: &ParserState) -> Result<Vec<(Node, Node)>> {
    tokens.eat(); // consume '{'

    let mut entries = Vec::new();
    loop {
        match tokens.peek_kind() {
            None => {
                return Err(malformed(
                    tokens,
                    "Flow map is missing its closing '}'".into(),
                    "Close the map with '}'",
                    212,
                ));
            }
            Some(TokenKind::FlowMapEnd) => {
                tokens.eat();
                break;
            }
            Some(TokenKind::Key) => tokens.eat(),
            Some(_) => {
                return Err(malformed(
                    tokens,
                    format!("Expected a key or '}}', got {}", describe_next(tokens)),
                    "Flow map entries start with a key",
                    213,
                ));
            }
        }

        entries.push(parse_entry(tokens, state)?);

        match tokens.peek_kind() {
            Some(TokenKind::FlowEntry) => tokens.eat(),
            Some(TokenKind::FlowMapEnd) => {}
            _ => {
                return Err(malformed(
                    tokens,
                    format!("Expected ',' or '}}' after map entry, got {}", describe_next(tokens)),
                    "Separate flow map entries with ','",
                    214,
                ));
            }
        }
    }
    Ok(entries)
}
