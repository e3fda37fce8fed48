// License: MIT

use std::fmt;

/// The main error type for node construction and extraction.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeError {
    /// A block or flow sequence broke its delimiter grammar.
    MalformedSequence {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A block or flow mapping broke its delimiter grammar.
    MalformedMap {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    UnexpectedToken {
        token: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    DuplicateTag {
        first: String,
        second: String,
        line: usize,
        column: usize,
        code: Option<u32>,
    },
    DuplicateAnchor {
        first: String,
        second: String,
        line: usize,
        column: usize,
        code: Option<u32>,
    },
    /// An alias appeared after a tag or anchor on the same node.
    InvalidAlias {
        name: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// A scalar was requested from a node that has no content.
    EmptyContent {
        hint: Option<String>,
        code: Option<u32>,
    },
    Conversion {
        value: String,
        target: &'static str,
        hint: Option<String>,
        code: Option<u32>,
    },
    BadDirective {
        message: String,
        line: usize,
        column: usize,
        hint: Option<String>,
        code: Option<u32>,
    },
    /// Raised when a token fixture cannot be read or decoded.
    Fixture {
        message: String,
        path: Option<String>,
        code: Option<u32>,
    },
    /// A node tree could not be serialized.
    Export {
        message: String,
        code: Option<u32>,
    },
}

/// Fieldless discriminant of [`NodeError`], handy for matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    MalformedSequence,
    MalformedMap,
    UnexpectedToken,
    DuplicateTag,
    DuplicateAnchor,
    InvalidAlias,
    EmptyContent,
    Conversion,
    BadDirective,
    Fixture,
    Export,
}

pub type Result<T> = std::result::Result<T, NodeError>;

impl NodeError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            NodeError::MalformedSequence { .. } => ErrorKind::MalformedSequence,
            NodeError::MalformedMap { .. } => ErrorKind::MalformedMap,
            NodeError::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
            NodeError::DuplicateTag { .. } => ErrorKind::DuplicateTag,
            NodeError::DuplicateAnchor { .. } => ErrorKind::DuplicateAnchor,
            NodeError::InvalidAlias { .. } => ErrorKind::InvalidAlias,
            NodeError::EmptyContent { .. } => ErrorKind::EmptyContent,
            NodeError::Conversion { .. } => ErrorKind::Conversion,
            NodeError::BadDirective { .. } => ErrorKind::BadDirective,
            NodeError::Fixture { .. } => ErrorKind::Fixture,
            NodeError::Export { .. } => ErrorKind::Export,
        }
    }

    pub fn code(&self) -> Option<u32> {
        match self {
            NodeError::MalformedSequence { code, .. }
            | NodeError::MalformedMap { code, .. }
            | NodeError::UnexpectedToken { code, .. }
            | NodeError::DuplicateTag { code, .. }
            | NodeError::DuplicateAnchor { code, .. }
            | NodeError::InvalidAlias { code, .. }
            | NodeError::EmptyContent { code, .. }
            | NodeError::Conversion { code, .. }
            | NodeError::BadDirective { code, .. }
            | NodeError::Fixture { code, .. }
            | NodeError::Export { code, .. } => *code,
        }
    }
}

fn suffix(hint: &Option<String>, code: &Option<u32>) -> String {
    format!(
        "{}{}",
        hint.as_ref().map_or(String::new(), |h| format!(" Hint: {}", h)),
        code.map_or(String::new(), |c| format!(" Code: {}", c))
    )
}

impl fmt::Display for NodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeError::MalformedSequence { message, line, column, hint, code } =>
                write!(f, "[YAML] Malformed sequence at {}:{}: {}{}",
                    line, column, message, suffix(hint, code)),
            NodeError::MalformedMap { message, line, column, hint, code } =>
                write!(f, "[YAML] Malformed map at {}:{}: {}{}",
                    line, column, message, suffix(hint, code)),
            NodeError::UnexpectedToken { token, line, column, hint, code } =>
                write!(f, "[YAML] Unexpected token '{}' at {}:{}{}",
                    token, line, column, suffix(hint, code)),
            NodeError::DuplicateTag { first, second, line, column, code } =>
                write!(f, "[YAML] Duplicate tag '{}' at {}:{} (node already tagged '{}'){}",
                    second, line, column, first, suffix(&None, code)),
            NodeError::DuplicateAnchor { first, second, line, column, code } =>
                write!(f, "[YAML] Duplicate anchor '{}' at {}:{} (node already anchored '{}'){}",
                    second, line, column, first, suffix(&None, code)),
            NodeError::InvalidAlias { name, line, column, hint, code } =>
                write!(f, "[YAML] Invalid alias '*{}' at {}:{}{}",
                    name, line, column, suffix(hint, code)),
            NodeError::EmptyContent { hint, code } =>
                write!(f, "[YAML] Node has no content to read{}", suffix(hint, code)),
            NodeError::Conversion { value, target, hint, code } =>
                write!(f, "[YAML] Cannot convert '{}' to {}{}",
                    value, target, suffix(hint, code)),
            NodeError::BadDirective { message, line, column, hint, code } =>
                write!(f, "[YAML] Bad directive at {}:{}: {}{}",
                    line, column, message, suffix(hint, code)),
            NodeError::Fixture { message, path, code } =>
                write!(f, "[YAML] Token fixture error{}: {}{}",
                    path.as_ref().map_or(String::new(), |p| format!(" '{}'", p)),
                    message, suffix(&None, code)),
            NodeError::Export { message, code } =>
                write!(f, "[YAML] Export error: {}{}", message, suffix(&None, code)),
        }
    }
}

impl std::error::Error for NodeError {}
