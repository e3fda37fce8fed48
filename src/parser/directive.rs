use tracing::debug;

use super::*;
use crate::state::Version;

fn bad_directive(token: &Token, message: String, hint: &str, code: u32) -> NodeError {
    NodeError::BadDirective {
        message,
        line: token.mark.line,
        column: token.mark.column,
        hint: Some(hint.into()),
        code: Some(code),
    }
}

/// Consume the directives in front of a document and apply them to `state`.
pub(super) fn parse_directives(tokens: &mut TokenStream, state: &mut ParserState) -> Result<()> {
    while tokens.peek_kind() == Some(TokenKind::Directive) {
        let Some(token) = tokens.pop() else { break };
        match token.value.as_str() {
            "YAML" => handle_yaml_directive(&token, state)?,
            "TAG" => handle_tag_directive(&token, state)?,
            other => debug!(directive = other, "ignoring unknown directive"),
        }
    }
    Ok(())
}

/// `%YAML major.minor`; only major version 1 is understood.
fn handle_yaml_directive(token: &Token, state: &mut ParserState) -> Result<()> {
    let [version] = token.params.as_slice() else {
        return Err(bad_directive(
            token,
            format!("%YAML takes one parameter, got {}", token.params.len()),
            "Write it as %YAML 1.2",
            301,
        ));
    };

    let parsed = version
        .split_once('.')
        .and_then(|(major, minor)| Some((major.parse::<u32>().ok()?, minor.parse::<u32>().ok()?)));
    let Some((major, minor)) = parsed else {
        return Err(bad_directive(
            token,
            format!("Malformed YAML version '{}'", version),
            "Write it as %YAML 1.2",
            302,
        ));
    };

    if major > 1 {
        return Err(bad_directive(
            token,
            format!("Unsupported YAML version {}.{}", major, minor),
            "Only YAML 1.x documents are supported",
            303,
        ));
    }

    debug!(major, minor, "YAML directive");
    state.set_version(Version { major, minor });
    Ok(())
}

/// `%TAG handle prefix`
fn handle_tag_directive(token: &Token, state: &mut ParserState) -> Result<()> {
    let [handle, prefix] = token.params.as_slice() else {
        return Err(bad_directive(
            token,
            format!("%TAG takes two parameters, got {}", token.params.len()),
            "Write it as %TAG !e! tag:example.com,2000:",
            304,
        ));
    };

    debug!(handle = %handle, prefix = %prefix, "TAG directive");
    state.set_tag_directive(handle.as_str(), prefix.as_str());
    Ok(())
}
