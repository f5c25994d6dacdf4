//! Target-declaration scanning.
//!
//! Recognizes the three declaration shapes the analyzer cares about, each a
//! keyword, a parenthesized quoted name, and a balanced-brace body:
//!
//! - test targets: `ace_unittest("name") { ... }`, `ohos_unittest("name") { ... }`
//! - aggregation groups: `group("name") { ... }`
//! - source sets: `ohos_source_set("name") { ... }`

use crate::block::block_after;
use crate::fields::strip_comments;

/// The declaration keyword of a scanned target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclKind {
    /// `ace_unittest(...)` — the short test form; `type = "<kind>"`
    /// assignments in its body pull in per-kind template dependencies.
    AceTest,
    /// `ohos_unittest(...)` — the plain test form.
    OhosTest,
    /// `group(...)` — an aggregation target with only deps.
    Group,
    /// `ohos_source_set(...)` — a sources-only compilation unit.
    SourceSet,
}

impl DeclKind {
    /// The declaration keyword as written in build descriptions.
    pub fn keyword(self) -> &'static str {
        match self {
            DeclKind::AceTest => "ace_unittest",
            DeclKind::OhosTest => "ohos_unittest",
            DeclKind::Group => "group",
            DeclKind::SourceSet => "ohos_source_set",
        }
    }

    /// Whether this declaration produces a test-target record.
    pub fn is_test(self) -> bool {
        matches!(self, DeclKind::AceTest | DeclKind::OhosTest)
    }
}

/// One scanned declaration: keyword kind, quoted name, and body text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Declaration {
    /// Which declaration shape matched.
    pub kind: DeclKind,
    /// The quoted target name.
    pub name: String,
    /// The comment-stripped body between the braces, trimmed.
    pub body: String,
}

/// Scans document text for every declaration of the recognized shapes,
/// in document order.
///
/// Comments are stripped first so keywords inside them never match.
pub fn scan_declarations(content: &str) -> Vec<Declaration> {
    let stripped = strip_comments(content);
    let bytes = stripped.as_bytes();
    let mut decls = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        if !at_ident_start(bytes, pos) {
            pos += 1;
            continue;
        }
        let ident_end = ident_end(bytes, pos);
        let ident = &stripped[pos..ident_end];
        let kind = match ident {
            "ace_unittest" => Some(DeclKind::AceTest),
            "ohos_unittest" => Some(DeclKind::OhosTest),
            "group" => Some(DeclKind::Group),
            "ohos_source_set" => Some(DeclKind::SourceSet),
            _ => None,
        };
        if let Some(kind) = kind {
            if let Some((name, after_name)) = quoted_name(&stripped, ident_end) {
                if let Some((body, end)) = block_after(&stripped, after_name) {
                    decls.push(Declaration {
                        kind,
                        name,
                        body: body.to_string(),
                    });
                    pos = end;
                    continue;
                }
            }
        }
        pos = ident_end;
    }
    decls
}

/// Parses `("name")` starting at `pos`, returning the name and the offset
/// just past the closing parenthesis.
fn quoted_name(content: &str, pos: usize) -> Option<(String, usize)> {
    let bytes = content.as_bytes();
    let mut pos = skip_ws(bytes, pos);
    if pos >= bytes.len() || bytes[pos] != b'(' {
        return None;
    }
    pos = skip_ws(bytes, pos + 1);
    if pos >= bytes.len() || bytes[pos] != b'"' {
        return None;
    }
    let start = pos + 1;
    let close = content[start..].find('"')? + start;
    let mut pos = skip_ws(bytes, close + 1);
    if pos >= bytes.len() || bytes[pos] != b')' {
        return None;
    }
    pos += 1;
    Some((content[start..close].to_string(), pos))
}

fn at_ident_start(bytes: &[u8], pos: usize) -> bool {
    is_ident_byte(bytes[pos]) && (pos == 0 || !is_ident_byte(bytes[pos - 1]))
}

fn ident_end(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && is_ident_byte(bytes[pos]) {
        pos += 1;
    }
    pos
}

fn skip_ws(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_whitespace() {
        pos += 1;
    }
    pos
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
