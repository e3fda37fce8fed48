#[cfg(test)]
use super::*;
use crate::error::ErrorKind;
use crate::state::Version;

fn kind(kind: TokenKind) -> Token {
    Token::new(kind)
}

#[test]
fn test_multiple_documents() {
    let mut parser = Parser::from_tokens(vec![
        kind(TokenKind::DocStart),
        Token::scalar("first"),
        kind(TokenKind::DocEnd),
        kind(TokenKind::DocStart),
        kind(TokenKind::BlockEntry),
        Token::scalar("a"),
        kind(TokenKind::BlockEntry),
        Token::scalar("b"),
    ]);

    let docs = parser.documents().expect("Failed to parse documents");
    assert_eq!(docs.len(), 2);
    assert_eq!(docs[0].scalar(), Some("first"));
    assert_eq!(docs[1].len(), 2);
    assert!(!parser.has_more());
    assert_eq!(parser.next_document().unwrap(), None);
}

#[test]
fn test_empty_document() {
    let mut parser = Parser::from_tokens(vec![kind(TokenKind::DocStart), kind(TokenKind::DocEnd)]);

    let doc = parser.next_document().unwrap().expect("Expected a document");
    assert!(doc.is_null());
    assert_eq!(parser.next_document().unwrap(), None);
}

#[test]
fn test_tag_directive_applies_to_its_document() {
    let mut parser = Parser::from_tokens(vec![
        Token::directive("TAG", vec!["!e!".into(), "tag:example.com,2000:".into()]),
        kind(TokenKind::DocStart),
        Token::tag("!e!", "widget"),
        Token::scalar("w"),
        kind(TokenKind::DocEnd),
        kind(TokenKind::DocStart),
        Token::tag("!e!", "widget"),
        Token::scalar("w"),
    ]);

    let first = parser.next_document().unwrap().expect("Expected first document");
    assert_eq!(first.tag(), Some("tag:example.com,2000:widget"));

    let second = parser.next_document().unwrap().expect("Expected second document");
    assert_eq!(second.tag(), Some("!e!widget"));
}

#[test]
fn test_yaml_directive() {
    let mut parser = Parser::from_tokens(vec![
        Token::directive("YAML", vec!["1.1".into()]),
        Token::directive("FOO", vec![]),
        Token::scalar("x"),
    ]);
    parser.next_document().unwrap();
    assert_eq!(parser.state().version(), Version { major: 1, minor: 1 });

    let mut parser = Parser::from_tokens(vec![Token::directive("YAML", vec!["2.0".into()]).at(1, 1)]);
    let err = parser.next_document().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::BadDirective);
    assert_eq!(err.code(), Some(303));

    let mut parser = Parser::from_tokens(vec![Token::directive("YAML", vec!["one".into()])]);
    assert_eq!(parser.next_document().unwrap_err().code(), Some(302));

    let mut parser = Parser::from_tokens(vec![Token::directive("TAG", vec!["!x!".into()])]);
    assert_eq!(parser.next_document().unwrap_err().code(), Some(304));
}

#[test]
fn test_parser_keeps_base_state() {
    let state = ParserState::new().with_tag_directive("!app!", "tag:app.io,2024:");
    let mut parser = Parser::new(
        vec![Token::tag("!app!", "port"), Token::scalar("80")].into(),
        state,
    );

    let doc = parser.next_document().unwrap().expect("Expected a document");
    assert_eq!(doc.tag(), Some("tag:app.io,2024:port"));
    assert_eq!(doc.read::<u32>().unwrap(), 80);
}

#[test]
fn test_stray_token_does_not_loop() {
    let mut parser = Parser::from_tokens(vec![kind(TokenKind::BlockEnd).at(3, 1)]);
    let err = parser.documents().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedToken);
    assert_eq!(err.code(), Some(223));
}

#[test]
fn test_structural_error_reaches_driver() {
    let mut parser = Parser::from_tokens(vec![
        kind(TokenKind::DocStart),
        kind(TokenKind::FlowSeqStart),
        Token::scalar("a"),
    ]);
    let err = parser.next_document().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedSequence);
}

#[test]
fn test_alias_headers_stay_in_one_document() {
    let mut parser = Parser::from_tokens(vec![
        kind(TokenKind::DocStart),
        Token::alias("base"),
        Token::tag("!!", "str"),
        kind(TokenKind::DocEnd),
    ]);

    let docs = parser.documents().expect("Failed to parse documents");
    assert_eq!(docs.len(), 1);
    assert!(docs[0].is_alias());
    assert_eq!(docs[0].tag(), None);
}
