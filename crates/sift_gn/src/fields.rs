//! Field extraction within a declaration body.
//!
//! Bodies assign list fields as `name = [ "a", "b" ]` (or `name += [...]`)
//! and scalar fields as `name = "value"`. Extraction is a hand scan rather
//! than pattern matching so quoted commas and brackets cannot confuse it.

/// Cuts every line at its first `#` and trims trailing whitespace.
///
/// Declaration and field scanning operate on comment-stripped text so a
/// keyword or bracket inside a comment never matches.
pub fn strip_comments(content: &str) -> String {
    content
        .lines()
        .map(|line| match line.find('#') {
            Some(idx) => line[..idx].trim_end(),
            None => line.trim_end(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extracts the quoted items of every `name = [...]` / `name += [...]`
/// assignment in `body`, in order, across all occurrences.
pub fn list_field(body: &str, name: &str) -> Vec<String> {
    let mut items = Vec::new();
    for start in occurrences(body, name) {
        if let Some(open) = list_open(body, start + name.len()) {
            collect_quoted(body, open, &mut items);
        }
    }
    items
}

/// Extracts every `name = "value"` scalar assignment in `body`, in order.
///
/// A `name == "value"` comparison does not match.
pub fn scalar_assignments(body: &str, name: &str) -> Vec<String> {
    let bytes = body.as_bytes();
    let mut values = Vec::new();
    for start in occurrences(body, name) {
        let mut pos = start + name.len();
        pos = skip_ws(bytes, pos);
        if pos >= bytes.len() || bytes[pos] != b'=' {
            continue;
        }
        pos += 1;
        if pos < bytes.len() && bytes[pos] == b'=' {
            continue;
        }
        pos = skip_ws(bytes, pos);
        if pos >= bytes.len() || bytes[pos] != b'"' {
            continue;
        }
        if let Some(close) = body[pos + 1..].find('"') {
            values.push(body[pos + 1..pos + 1 + close].to_string());
        }
    }
    values
}

/// Byte offsets of identifier-bounded occurrences of `name`.
fn occurrences(body: &str, name: &str) -> Vec<usize> {
    let bytes = body.as_bytes();
    let mut found = Vec::new();
    let mut from = 0;
    while let Some(rel) = body[from..].find(name) {
        let start = from + rel;
        let end = start + name.len();
        let left_ok = start == 0 || !is_ident_byte(bytes[start - 1]);
        let right_ok = end >= bytes.len() || !is_ident_byte(bytes[end]);
        if left_ok && right_ok {
            found.push(start);
        }
        from = start + 1;
    }
    found
}

/// After a field name: skips `=` or `+=` and returns the offset just past
/// the opening `[`, or `None` if this occurrence is not a list assignment.
fn list_open(body: &str, pos: usize) -> Option<usize> {
    let bytes = body.as_bytes();
    let mut pos = skip_ws(bytes, pos);
    if pos < bytes.len() && bytes[pos] == b'+' {
        pos += 1;
    }
    if pos >= bytes.len() || bytes[pos] != b'=' {
        return None;
    }
    pos = skip_ws(bytes, pos + 1);
    if pos >= bytes.len() || bytes[pos] != b'[' {
        return None;
    }
    Some(pos + 1)
}

/// Collects quoted strings from `pos` up to the closing `]`.
fn collect_quoted(body: &str, pos: usize, items: &mut Vec<String>) {
    let bytes = body.as_bytes();
    let mut index = pos;
    while index < bytes.len() {
        match bytes[index] {
            b']' => return,
            b'"' => {
                let start = index + 1;
                let mut end = start;
                let mut escape = false;
                while end < bytes.len() {
                    let b = bytes[end];
                    if escape {
                        escape = false;
                    } else if b == b'\\' {
                        escape = true;
                    } else if b == b'"' {
                        break;
                    }
                    end += 1;
                }
                if end >= bytes.len() {
                    return;
                }
                items.push(body[start..end].to_string());
                index = end + 1;
            }
            _ => index += 1,
        }
    }
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
