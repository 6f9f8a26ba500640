//! .env documents.
//!
//! An [`EnvDocument`] is an ordered list of variable names and values.
//! Serialization writes one `NAME=VALUE` per line with no quoting; parsing
//! follows the usual .env conventions (comments, blank lines, optional
//! quotes, `export` prefix).

use std::path::Path;

use tracing::debug;

use crate::error::{EnvError, Result};

/// An ordered set of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvDocument {
    entries: Vec<(String, String)>,
}

impl EnvDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from raw name-value pairs, keeping their order.
    ///
    /// Duplicate names collapse onto the first occurrence with the last value.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        pairs.into_iter().collect()
    }

    /// Parse a plaintext .env file from disk.
    ///
    /// # Errors
    ///
    /// Returns `EnvError::MissingSourceFile` if the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "reading env file");

        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => EnvError::MissingSourceFile(path.to_path_buf()).into(),
            std::io::ErrorKind::InvalidData => EnvError::NotUtf8.into(),
            _ => crate::error::Error::Io(e),
        })?;

        Ok(parse(&contents))
    }

    /// Set a variable. An existing name keeps its position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Get a value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// All entries as name-value pairs
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Variable names in order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate over name-value pairs
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize as `NAME=VALUE` lines joined by `\n`, without a trailing
    /// newline. Values are written as-is.
    pub fn to_plaintext(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvDocument {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut doc = Self::new();
        for (k, v) in iter {
            doc.set(k, v);
        }
        doc
    }
}

impl IntoIterator for EnvDocument {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl std::fmt::Display for EnvDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_plaintext())
    }
}

/// Serialize a document to UTF-8 bytes.
pub fn serialize(doc: &EnvDocument) -> Vec<u8> {
    doc.to_plaintext().into_bytes()
}

/// Parse UTF-8 bytes into a document.
///
/// # Errors
///
/// Returns `EnvError::NotUtf8` if the bytes are not valid UTF-8.
pub fn deserialize(bytes: &[u8]) -> Result<EnvDocument> {
    let text = std::str::from_utf8(bytes).map_err(|_| EnvError::NotUtf8)?;
    Ok(parse(text))
}

/// Parse .env text.
///
/// Skips empty lines, comments (lines starting with #) and lines without
/// `=`. Splits on the first `=`, so values may contain `=`. A `#` after
/// whitespace starts an inline comment, so `p@ss#word` is kept whole but
/// `plain # note` becomes `plain`. Later duplicates override earlier ones.
pub fn parse(contents: &str) -> EnvDocument {
    let mut doc = EnvDocument::new();

    for line in contents.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = line.strip_prefix("export ").unwrap_or(line);

        if let Some((name, value)) = line.split_once('=') {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            doc.set(name, parse_env_value(value.trim()));
        }
    }

    doc
}

fn parse_env_value(raw: &str) -> String {
    if let Some(inner) = quoted(raw, '"') {
        return unescape_double_quoted(inner);
    }

    if let Some(inner) = quoted(raw, '\'') {
        return inner.to_string();
    }

    strip_inline_comment(raw).to_string()
}

/// Contents between a leading `quote` and its closing match, provided only
/// whitespace or a `#` comment follows the closing quote.
fn quoted(raw: &str, quote: char) -> Option<&str> {
    let body = raw.strip_prefix(quote)?;

    let mut escaped = false;
    for (i, ch) in body.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        if ch == '\\' && quote == '"' {
            escaped = true;
            continue;
        }
        if ch == quote {
            let rest = body[i + ch.len_utf8()..].trim_start();
            return (rest.is_empty() || rest.starts_with('#')).then(|| &body[..i]);
        }
    }

    None
}

/// Cut an unquoted value at the first `#` preceded by whitespace.
fn strip_inline_comment(raw: &str) -> &str {
    let mut prev_space = false;
    for (i, ch) in raw.char_indices() {
        if ch == '#' && prev_space {
            return raw[..i].trim_end();
        }
        prev_space = ch.is_whitespace();
    }
    raw
}

fn unescape_double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
