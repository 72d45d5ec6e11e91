//! Section toggle engine.
//!
//! Enabling or disabling a repository means commenting or uncommenting its
//! header and the directive lines that follow it. The engine walks forward
//! from a header until the first blank line or the next header and rewrites
//! only "structural" lines; comments that carry none of the recognized
//! keywords are documentation and are left exactly as they are.
//!
//! # Invariants
//! - The number of lines never changes; edits are in-place replacements
//! - Lines already in the target state are not touched
//! - Decorative comments are never modified, whatever the target state

use crate::core::parser::{is_excluded, parse_header};
use std::collections::HashMap;

/// Substrings that mark a commented line as a directive rather than prose.
pub const RECOGNIZED_KEYWORDS: &[&str] = &[
    "[",
    "Include",
    "CacheServer",
    "Server",
    "SigLevel",
    "Usage",
];

/// True when a trimmed line is comment-prefixed
pub fn is_commented(trimmed: &[u8]) -> bool {
    trimmed.starts_with(b"#")
}

/// True for comment lines that mention none of the recognized keywords
pub fn is_decorative(trimmed: &[u8]) -> bool {
    is_commented(trimmed)
        && !RECOGNIZED_KEYWORDS
            .iter()
            .any(|keyword| contains(trimmed, keyword.as_bytes()))
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

/// Remove the first `#` and one space after it, if present.
fn uncomment(line: &[u8]) -> Option<Vec<u8>> {
    let hash = line.iter().position(|&byte| byte == b'#')?;
    let rest = &line[hash + 1..];
    let rest = rest.strip_prefix(b" ").unwrap_or(rest);
    Some([&line[..hash], rest].concat())
}

/// Insert `# ` after the leading whitespace, keeping that whitespace verbatim.
fn comment(line: &[u8]) -> Vec<u8> {
    let indent = line
        .iter()
        .take_while(|&&byte| byte == b' ' || byte == b'\t')
        .count();
    [&line[..indent], b"# ".as_slice(), &line[indent..]].concat()
}

/// Toggle the section whose header sits at `start`.
///
/// Returns the number of lines that were rewritten.
pub fn toggle_section(lines: &mut [Vec<u8>], start: usize, enable: bool) -> usize {
    let mut changed = 0;

    for index in start..lines.len() {
        let trimmed = lines[index].trim_ascii();
        if trimmed.is_empty() || (index != start && parse_header(trimmed).is_some()) {
            break;
        }

        if is_decorative(trimmed) {
            continue;
        }

        let commented = is_commented(trimmed);
        let replacement = if enable && commented {
            uncomment(&lines[index])
        } else if !enable && !commented {
            Some(comment(&lines[index]))
        } else {
            None
        };

        if let Some(replacement) = replacement {
            lines[index] = replacement;
            changed += 1;
        }
    }

    changed
}

/// Bring every section named in `desired` into its requested state.
///
/// Every header matching a requested name starts its own pass, so a name
/// that appears twice in the file has both regions toggled. `[options]` and
/// blacklisted names are ignored even when requested.
pub fn apply_states<S: AsRef<str>>(
    lines: &mut [Vec<u8>],
    desired: &HashMap<String, bool>,
    blacklist: &[S],
) -> usize {
    let mut changed = 0;

    for index in 0..lines.len() {
        let target = match parse_header(&lines[index]) {
            Some(header) if !is_excluded(header.name, blacklist) => {
                desired.get(header.name).copied()
            }
            _ => None,
        };

        if let Some(enable) = target {
            let count = toggle_section(lines, index, enable);
            log::debug!(
                "Section at line {} set to {}: {} line(s) changed",
                index + 1,
                if enable { "enabled" } else { "disabled" },
                count
            );
            changed += count;
        }
    }

    changed
}
