use super::*;
use crate::token::Token;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scalar {
    value: String,
}

impl Scalar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn parse(&mut self, tokens: &mut TokenStream, _state: &ParserState) -> Result<()> {
        let mark = tokens.mark();
        match tokens.pop() {
            Some(Token { kind: TokenKind::Scalar, value, .. }) => {
                self.value = value;
                Ok(())
            }
            other => Err(NodeError::UnexpectedToken {
                token: other.map_or_else(|| "end of stream".to_string(), |t| t.to_string()),
                line: mark.line,
                column: mark.column,
                hint: Some("Expected a scalar".into()),
                code: Some(221),
            }),
        }
    }

    /// Write the value double-quoted with backslash, tab, newline and
    /// carriage return escaped.
    pub fn write<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        out.write_char('"')?;
        for ch in self.value.chars() {
            match ch {
                '\\' => out.write_str("\\\\")?,
                '\t' => out.write_str("\\t")?,
                '\n' => out.write_str("\\n")?,
                '\r' => out.write_str("\\r")?,
                _ => out.write_char(ch)?,
            }
        }
        out.write_str("\"\n")
    }

    pub fn read<T: FromScalar>(&self) -> Result<T> {
        T::from_scalar(&self.value)
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self { value: value.to_string() }
    }
}
