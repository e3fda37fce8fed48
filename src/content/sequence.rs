use tracing::trace;

use super::*;

/// An ordered list of child nodes in document order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Sequence {
    items: Vec<Node>,
}

impl Sequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Node] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Parse whichever sequence form the next token opens. A token that opens
    /// no sequence leaves it empty.
    ///
    /// On failure the sequence stays empty: children are only attached once the
    /// whole form parsed.
    pub fn parse(&mut self, tokens: &mut TokenStream, state: &ParserState) -> Result<()> {
        self.items.clear();

        self.items = match tokens.peek_kind() {
            Some(TokenKind::BlockSeqStart) => {
                trace!("parsing block sequence");
                parse_block(tokens, state)?
            }
            Some(TokenKind::BlockEntry) => {
                trace!("parsing implicit block sequence");
                parse_implicit(tokens, state)?
            }
            Some(TokenKind::FlowSeqStart) => {
                trace!("parsing flow sequence");
                parse_flow(tokens, state)?
            }
            _ => Vec::new(),
        };
        Ok(())
    }

    /// Write the items as a dash list, one item per line, nested items indented
    /// one level deeper.
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

        for (i, item) in self.items.iter().enumerate() {
            if fresh_line || i > 0 {
                write_indent(out, indent)?;
            }
            out.write_str("- ")?;
            item.write_at(out, indent + 1, true, true)?;
        }

        if self.items.is_empty() {
            out.write_char('\n')?;
        }
        Ok(())
    }
}

impl FromIterator<Node> for Sequence {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

fn malformed(tokens: &TokenStream, message: String, hint: &str, code: u32) -> NodeError {
    let mark = tokens.mark();
    NodeError::MalformedSequence {
        message,
        line: mark.line,
        column: mark.column,
        hint: Some(hint.into()),
        code: Some(code),
    }
}

/// `BLOCK-SEQ-START (BLOCK-ENTRY node)* BLOCK-END`
fn parse_block(tokens: &mut TokenStream, state: &ParserState) -> Result<Vec<Node>> {
    tokens.eat(); // consume start

    let mut items = Vec::new();
    loop {
        match tokens.peek_kind() {
            Some(TokenKind::BlockEnd) => {
                tokens.eat();
                break;
            }
            Some(TokenKind::BlockEntry) => {
                tokens.eat();
                items.push(parse_child(tokens, state)?);
            }
            _ => {
                return Err(malformed(
                    tokens,
                    format!("Expected '-' or end of block sequence, got {}", describe_next(tokens)),
                    "Block sequences hold '-' entries until the block ends",
                    201,
                ));
            }
        }
    }
    Ok(items)
}

/// `(BLOCK-ENTRY node)*` with no surrounding delimiters. Anything other than a
/// block entry, including the end of the stream, ends the sequence.
fn parse_implicit(tokens: &mut TokenStream, state: &ParserState) -> Result<Vec<Node>> {
    let mut items = Vec::new();
    while is_next(tokens, TokenKind::BlockEntry) {
        tokens.eat();
        items.push(parse_child(tokens, state)?);
    }
    Ok(items)
}

/// `FLOW-SEQ-START (node (FLOW-ENTRY node)* FLOW-ENTRY?)? FLOW-SEQ-END`
fn parse_flow(tokens: &mut TokenStream, state: &ParserState) -> Result<Vec<Node>> {
    tokens.eat(); // consume '['

    let mut items = Vec::new();
    loop {
        match tokens.peek_kind() {
            None => {
                return Err(malformed(
                    tokens,
                    "Flow sequence is missing its closing ']'".into(),
                    "Close the sequence with ']'",
                    202,
                ));
            }
            Some(TokenKind::FlowSeqEnd) => {
                tokens.eat();
                break;
            }
            Some(_) => {}
        }

        items.push(parse_child(tokens, state)?);

        // a separator is consumed; a closing ']' is left for the check above
        match tokens.peek_kind() {
            Some(TokenKind::FlowEntry) => tokens.eat(),
            Some(TokenKind::FlowSeqEnd) => {}
            _ => {
                return Err(malformed(
                    tokens,
                    format!("Expected ',' or ']' after sequence entry, got {}", describe_next(tokens)),
                    "Separate flow sequence entries with ','",
                    203,
                ));
            }
        }
    }
    Ok(items)
}
