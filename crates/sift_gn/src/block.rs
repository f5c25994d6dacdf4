//! Balanced-brace block extraction.
//!
//! GN conditionals and target bodies are brace-delimited. The scanner here
//! tracks brace depth byte-by-byte while honoring quoted strings (single or
//! double quotes, backslash escapes) and `#` line comments, so braces inside
//! either never affect the depth. Malformed input is "no match", never an
//! error; the scanner is stateless between calls.

/// Returns the text strictly between the braces of the block following the
/// literal `marker`, trimmed.
///
/// Returns `None` when the marker is absent, no `{` follows it, or the end
/// of input is reached with the block still open.
pub fn extract_block<'a>(content: &'a str, marker: &str) -> Option<&'a str> {
    let after = content.find(marker)? + marker.len();
    let (inner, _) = block_after(content, after)?;
    Some(inner)
}

/// Scans a balanced `{ ... }` block starting at or after byte offset `pos`.
///
/// Skips leading whitespace, expects an opening `{`, and returns the trimmed
/// inner text together with the offset just past the closing `}`. Returns
/// `None` if the next non-whitespace byte is not `{` or the block never
/// closes.
pub fn block_after(content: &str, pos: usize) -> Option<(&str, usize)> {
    let bytes = content.as_bytes();
    let mut index = pos;
    while index < bytes.len() && bytes[index].is_ascii_whitespace() {
        index += 1;
    }
    if index >= bytes.len() || bytes[index] != b'{' {
        return None;
    }
    index += 1;
    let body_start = index;

    let mut depth = 1usize;
    let mut in_string = false;
    let mut in_comment = false;
    let mut quote = 0u8;
    let mut escape = false;

    while index < bytes.len() {
        let b = bytes[index];

        if in_comment {
            if b == b'\n' {
                in_comment = false;
            }
            index += 1;
            continue;
        }
        if in_string {
            if escape {
                escape = false;
            } else if b == b'\\' {
                escape = true;
            } else if b == quote {
                in_string = false;
            }
            index += 1;
            continue;
        }

        match b {
            b'#' => in_comment = true,
            b'"' | b'\'' => {
                in_string = true;
                quote = b;
            }
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some((content[body_start..index].trim(), index + 1));
                }
            }
            _ => {}
        }
        index += 1;
    }

    // Ran out of input with the block still open.
    None
}
