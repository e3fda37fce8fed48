#[cfg(test)]
use super::*;
use crate::error::ErrorKind;
use crate::token::Token;

fn kind(kind: TokenKind) -> Token {
    Token::new(kind)
}

fn values(sequence: &Sequence) -> Vec<Option<&str>> {
    sequence.items().iter().map(Node::scalar).collect()
}

#[test]
fn test_implicit_sequence_stops_at_other_tokens() {
    let mut tokens: TokenStream = vec![
        kind(TokenKind::BlockEntry),
        Token::scalar("a"),
        kind(TokenKind::BlockEntry),
        Token::scalar("b"),
        kind(TokenKind::Key),
        Token::scalar("next"),
    ]
    .into();

    let mut sequence = Sequence::new();
    sequence.parse(&mut tokens, &ParserState::new()).expect("Failed to parse implicit sequence");

    assert_eq!(values(&sequence), vec![Some("a"), Some("b")]);
    assert_eq!(tokens.peek_kind(), Some(TokenKind::Key));
    assert_eq!(tokens.len(), 2);
}

#[test]
fn test_implicit_sequence_runs_to_end_of_stream() {
    let mut tokens: TokenStream = vec![kind(TokenKind::BlockEntry), Token::scalar("only")].into();

    let mut sequence = Sequence::new();
    sequence.parse(&mut tokens, &ParserState::new()).expect("Failed to parse implicit sequence");

    assert_eq!(sequence.len(), 1);
    assert!(tokens.is_empty());
}

#[test]
fn test_implicit_entry_without_value() {
    // `-` directly followed by the end of the stream is a single empty item
    let mut tokens: TokenStream = vec![kind(TokenKind::BlockEntry)].into();

    let mut sequence = Sequence::new();
    sequence.parse(&mut tokens, &ParserState::new()).expect("Failed to parse");

    assert_eq!(sequence.len(), 1);
    assert!(sequence.get(0).is_some_and(Node::is_null));
}

#[test]
fn test_sequence_ignores_non_sequence_start() {
    let mut tokens: TokenStream = vec![Token::scalar("x")].into();

    let mut sequence = Sequence::new();
    sequence.parse(&mut tokens, &ParserState::new()).expect("Failed to parse");

    assert!(sequence.is_empty());
    assert_eq!(tokens.len(), 1);
}

#[test]
fn test_block_sequence_rejects_stray_token() {
    let mut tokens: TokenStream = vec![
        kind(TokenKind::BlockSeqStart),
        kind(TokenKind::BlockEntry),
        Token::scalar("a"),
        Token::scalar("b").at(2, 3),
        kind(TokenKind::BlockEnd),
    ]
    .into();

    let mut sequence = Sequence::new();
    let err = sequence.parse(&mut tokens, &ParserState::new()).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MalformedSequence);
    assert_eq!(err.code(), Some(201));
    assert!(sequence.is_empty(), "partial items must not stay attached");
}

#[test]
fn test_flow_sequence_without_close() {
    let mut tokens: TokenStream = vec![
        kind(TokenKind::FlowSeqStart),
        Token::scalar("a"),
        kind(TokenKind::FlowEntry),
    ]
    .into();

    let err = Sequence::new().parse(&mut tokens, &ParserState::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedSequence);
    assert_eq!(err.code(), Some(202));

    let mut tokens: TokenStream = vec![kind(TokenKind::FlowSeqStart), Token::scalar("a")].into();
    let err = Sequence::new().parse(&mut tokens, &ParserState::new()).unwrap_err();
    assert_eq!(err.code(), Some(203));
    assert!(err.to_string().contains("end of stream"));
}

#[test]
fn test_flow_sequence_trailing_separator() {
    let mut tokens: TokenStream = vec![
        kind(TokenKind::FlowSeqStart),
        Token::scalar("a"),
        kind(TokenKind::FlowEntry),
        kind(TokenKind::FlowSeqEnd),
    ]
    .into();

    let mut sequence = Sequence::new();
    sequence.parse(&mut tokens, &ParserState::new()).expect("Failed to parse");
    assert_eq!(values(&sequence), vec![Some("a")]);
    assert!(tokens.is_empty());
}

#[test]
fn test_nested_error_propagates() {
    let mut tokens: TokenStream = vec![
        kind(TokenKind::FlowSeqStart),
        kind(TokenKind::FlowSeqStart),
        Token::scalar("a"),
        Token::scalar("b"),
    ]
    .into();

    let err = Sequence::new().parse(&mut tokens, &ParserState::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedSequence);
}

#[test]
fn test_sequence_write_flags() {
    let sequence: Sequence = ["a", "b"]
        .into_iter()
        .map(|v| Node::from(Content::Scalar(Scalar::from(v))))
        .collect();

    let mut out = String::new();
    sequence.write(&mut out, 0, false, false).unwrap();
    assert_eq!(out, "- \"a\"\n- \"b\"\n");

    // continuing a line that only holds a marker
    let mut out = String::from("- ");
    sequence.write(&mut out, 1, true, true).unwrap();
    assert_eq!(out, "- - \"a\"\n  - \"b\"\n");

    // a started line with more on it moves the list to its own lines
    let mut out = String::from("key");
    sequence.write(&mut out, 1, true, false).unwrap();
    assert_eq!(out, "key\n  - \"a\"\n  - \"b\"\n");

    let mut out = String::new();
    Sequence::new().write(&mut out, 0, true, true).unwrap();
    assert_eq!(out, "\n");
}

#[test]
fn test_scalar_write_escapes() {
    let mut out = String::new();
    Scalar::from("tab\there\nback\\slash\r").write(&mut out).unwrap();
    assert_eq!(out, "\"tab\\there\\nback\\\\slash\\r\"\n");
}

#[test]
fn test_block_map() {
    let mut tokens: TokenStream = vec![
        kind(TokenKind::BlockMapStart),
        kind(TokenKind::Key),
        Token::scalar("name"),
        kind(TokenKind::Value),
        Token::scalar("app"),
        kind(TokenKind::Key),
        Token::scalar("ports"),
        kind(TokenKind::Value),
        kind(TokenKind::BlockEntry),
        Token::scalar("80"),
        kind(TokenKind::BlockEntry),
        Token::scalar("443"),
        kind(TokenKind::Key),
        Token::scalar("empty"),
        kind(TokenKind::BlockEnd),
    ]
    .into();

    let mut map = Map::new();
    map.parse(&mut tokens, &ParserState::new()).expect("Failed to parse block map");

    assert_eq!(map.len(), 3);
    let keys: Vec<Option<&str>> = map.entries().iter().map(|(k, _)| k.scalar()).collect();
    assert_eq!(keys, vec![Some("name"), Some("ports"), Some("empty")]);

    assert_eq!(map.get("name").and_then(Node::scalar), Some("app"));
    let ports = map.get("ports").expect("Expected ports");
    assert_eq!(ports.get(1).map(|n| n.read::<u32>().unwrap()), Some(443));
    assert!(map.get("empty").is_some_and(Node::is_null));
    assert!(map.get("missing").is_none());
}

#[test]
fn test_block_map_without_end() {
    let mut tokens: TokenStream = vec![
        kind(TokenKind::BlockMapStart),
        kind(TokenKind::Key),
        Token::scalar("a"),
    ]
    .into();

    let mut map = Map::new();
    let err = map.parse(&mut tokens, &ParserState::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MalformedMap);
    assert_eq!(err.code(), Some(211));
    assert!(map.is_empty());
}

#[test]
fn test_flow_map_errors() {
    let mut tokens: TokenStream = vec![kind(TokenKind::FlowMapStart), Token::scalar("a")].into();
    let err = Map::new().parse(&mut tokens, &ParserState::new()).unwrap_err();
    assert_eq!(err.code(), Some(213));

    let mut tokens: TokenStream = vec![
        kind(TokenKind::FlowMapStart),
        kind(TokenKind::Key),
        Token::scalar("a"),
        kind(TokenKind::Key),
    ]
    .into();
    let err = Map::new().parse(&mut tokens, &ParserState::new()).unwrap_err();
    assert_eq!(err.code(), Some(214));

    let mut tokens: TokenStream = vec![kind(TokenKind::FlowMapStart)].into();
    let err = Map::new().parse(&mut tokens, &ParserState::new()).unwrap_err();
    assert_eq!(err.code(), Some(212));
}

#[test]
fn test_map_write() {
    let mut tokens: TokenStream = vec![
        kind(TokenKind::FlowMapStart),
        kind(TokenKind::Key),
        Token::scalar("a"),
        kind(TokenKind::Value),
        Token::scalar("1"),
        kind(TokenKind::FlowEntry),
        kind(TokenKind::Key),
        Token::scalar("b"),
        kind(TokenKind::Value),
        kind(TokenKind::FlowSeqStart),
        Token::scalar("x"),
        kind(TokenKind::FlowSeqEnd),
        kind(TokenKind::FlowMapEnd),
    ]
    .into();

    let node = Node::parse_from(&mut tokens, &ParserState::new()).expect("Failed to parse flow map");
    let expected = "\
? \"a\"
: \"1\"
? \"b\"
: - \"x\"
";
    assert_eq!(node.to_string(), expected);
}

#[test]
fn test_content_shapes() {
    let scalar = Content::Scalar(Scalar::from("v"));
    assert_eq!(scalar.len(), 0);
    assert!(scalar.iter().is_done());
    assert_eq!(scalar.read::<String>().unwrap(), "v");
    assert!(scalar.as_sequence().is_none());

    let map = Content::Map(Map::new());
    assert_eq!(map.read::<i32>().unwrap_err().code(), Some(407));
    assert!(map.as_map().is_some());
}
