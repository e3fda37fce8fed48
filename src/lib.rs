pub mod content;
pub mod convert;
pub mod error;
pub mod export;
pub mod node;
pub mod parser;
pub mod state;
pub mod token;

pub use content::{Content, Map, Scalar, Sequence};
pub use convert::FromScalar;
pub use error::{ErrorKind, NodeError, Result};
pub use node::{Child, HeaderOutcome, Node, NodeIter};
pub use parser::Parser;
pub use state::{ParserState, Version};
pub use token::{Mark, Token, TokenKind, TokenStream};
