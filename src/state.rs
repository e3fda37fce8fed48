// License: MIT

use indexmap::IndexMap;

/// Primary and secondary tag handles with their YAML 1.2 default prefixes.
pub const PRIMARY_HANDLE: &str = "!";
pub const SECONDARY_HANDLE: &str = "!!";
pub const DEFAULT_SECONDARY_PREFIX: &str = "tag:yaml.org,2002:";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Default for Version {
    fn default() -> Self {
        Self { major: 1, minor: 2 }
    }
}

/// Parse configuration shared by every node of a document.
///
/// Holds the tag handle table used to translate tag tokens, the YAML version
/// announced by the stream, and whether duplicate node headers are errors.
#[derive(Debug, Clone)]
pub struct ParserState {
    tags: IndexMap<String, String>,
    version: Version,
    strict_headers: bool,
}

impl Default for ParserState {
    fn default() -> Self {
        let mut tags = IndexMap::new();
        tags.insert(PRIMARY_HANDLE.to_string(), PRIMARY_HANDLE.to_string());
        tags.insert(SECONDARY_HANDLE.to_string(), DEFAULT_SECONDARY_PREFIX.to_string());
        Self {
            tags,
            version: Version::default(),
            strict_headers: false,
        }
    }
}

impl ParserState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the prefix a tag handle expands to.
    pub fn with_tag_directive(mut self, handle: impl Into<String>, prefix: impl Into<String>) -> Self {
        self.set_tag_directive(handle, prefix);
        self
    }

    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Report a second tag or anchor on the same node as an error instead of
    /// ignoring it.
    pub fn strict_headers(mut self, strict: bool) -> Self {
        self.strict_headers = strict;
        self
    }

    pub fn set_tag_directive(&mut self, handle: impl Into<String>, prefix: impl Into<String>) {
        self.tags.insert(handle.into(), prefix.into());
    }

    pub fn set_version(&mut self, version: Version) {
        self.version = version;
    }

    /// Expand a tag handle to its registered prefix. Unknown handles are
    /// returned unchanged.
    pub fn translate_tag(&self, handle: &str) -> String {
        self.tags
            .get(handle)
            .cloned()
            .unwrap_or_else(|| handle.to_string())
    }

    pub fn tag_directives(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tags.iter().map(|(h, p)| (h.as_str(), p.as_str()))
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn is_strict(&self) -> bool {
        self.strict_headers
    }
}
