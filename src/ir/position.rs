//! Source-position synthesis for nodes that have no text of their own.
//!
//! Two services:
//! - placeholder extents: a per-file zero-length extent at line 1, column 1,
//!   cached so repeated requests for the same file share one allocation
//! - extents computed from a fabricated literal, anchored to a real extent's
//!   file and source buffer

use std::sync::Arc;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use tracing::trace;

use crate::ir::ps_node::{Extent, ScriptPosition, StringConstantExpressionAst, StringConstantType};

/// Placeholder extents keyed by lower-cased file identity.
static PLACEHOLDER_EXTENTS: Lazy<DashMap<String, Extent>> = Lazy::new(DashMap::new);

/// The zero-length extent at the top of `file`.
///
/// The first request for a file fixes the source buffer the placeholder refers
/// to; later requests for the same file (compared case-insensitively) return a
/// handle to the same extent.
pub fn placeholder_extent(file: &str, script: &str) -> Extent {
    let key = file.to_lowercase();
    if let Some(cached) = PLACEHOLDER_EXTENTS.get(&key) {
        return cached.clone();
    }
    PLACEHOLDER_EXTENTS
        .entry(key)
        .or_insert_with(|| {
            trace!(file, "caching placeholder extent");
            let position = ScriptPosition {
                file: Arc::from(file),
                line: 1,
                column: 1,
                offset: 0,
                line_text: String::new(),
                script: Arc::from(script),
            };
            Extent::new(position.clone(), position, "")
        })
        .clone()
}

/// The placeholder extent for the file `anchor` belongs to.
pub fn placeholder_for(anchor: &Extent) -> Extent {
    placeholder_extent(anchor.file(), anchor.script())
}

/// An empty bare-word string positioned at the placeholder extent of `anchor`'s
/// file. Each call returns a fresh node.
pub fn placeholder_node(anchor: &Extent) -> StringConstantExpressionAst {
    StringConstantExpressionAst::new(placeholder_for(anchor), "", StringConstantType::BareWord)
}

/// Synthesizes an extent for `literal`, text with no counterpart in the source.
///
/// The start sits at line 1, column 1 and carries the literal's first line
/// (through the first newline). The end sits one line below the start per
/// newline, one column past the characters after the last newline, and carries
/// that last line. Carriage returns do not advance the column. Both positions
/// take their file and source buffer from `anchor`.
pub fn extent_from_literal(literal: &str, anchor: &Extent) -> Extent {
    let mut first_line: Option<&str> = None;
    let mut last_line_start = 0;
    let mut newlines = 0;
    let mut column = 1;

    for (index, ch) in literal.char_indices() {
        match ch {
            '\n' => {
                let next = index + ch.len_utf8();
                if first_line.is_none() {
                    first_line = Some(&literal[..next]);
                }
                newlines += 1;
                column = 1;
                last_line_start = next;
            }
            '\r' => {}
            _ => column += 1,
        }
    }

    let first_line = first_line.unwrap_or(literal);
    let last_line = &literal[last_line_start..];

    let file = anchor.file().clone();
    let script = anchor.script().clone();
    let start = ScriptPosition {
        file: file.clone(),
        line: 1,
        column: 1,
        offset: 0,
        line_text: first_line.to_string(),
        script: script.clone(),
    };
    let end = ScriptPosition {
        file,
        line: 1 + newlines,
        column,
        offset: literal.len(),
        line_text: last_line.to_string(),
        script,
    };
    Extent::new(start, end, literal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> Extent {
        Extent::from_offsets("F.ps1", "Write-Host 'x'", 0, 10)
    }

    #[test]
    fn test_single_line_literal() {
        let extent = extent_from_literal("hello", &anchor());
        assert_eq!((extent.start_line(), extent.start_column()), (1, 1));
        assert_eq!((extent.end_line(), extent.end_column()), (1, 6));
        assert_eq!(extent.start().line_text, "hello");
        assert_eq!(extent.end().line_text, "hello");
        assert_eq!(&**extent.file(), "F.ps1");
        assert_eq!(&**extent.script(), "Write-Host 'x'");
    }

    #[test]
    fn test_multi_line_literal() {
        let extent = extent_from_literal("a\nbc", &anchor());
        assert_eq!((extent.start_line(), extent.start_column()), (1, 1));
        assert_eq!(extent.start().line_text, "a\n");
        assert_eq!((extent.end_line(), extent.end_column()), (2, 3));
        assert_eq!(extent.end().line_text, "bc");
        assert_eq!(extent.text(), "a\nbc");
    }

    #[test]
    fn test_carriage_return_does_not_advance_column() {
        let extent = extent_from_literal("ab\r\ncd\r", &anchor());
        assert_eq!(extent.start().line_text, "ab\r\n");
        assert_eq!((extent.end_line(), extent.end_column()), (2, 3));
        assert_eq!(extent.end().line_text, "cd\r");
    }

    #[test]
    fn test_empty_literal() {
        let extent = extent_from_literal("", &anchor());
        assert_eq!((extent.start_line(), extent.start_column()), (1, 1));
        assert_eq!((extent.end_line(), extent.end_column()), (1, 1));
        assert_eq!(extent.text(), "");
    }

    #[test]
    fn test_placeholder_is_cached_case_insensitively() {
        let a = placeholder_extent("Cache-Test.ps1", "1");
        let b = placeholder_extent("cache-test.PS1", "2");
        assert!(Extent::ptr_eq(&a, &b));
        assert_eq!(&**b.script(), "1");
        assert_eq!((a.start_line(), a.start_column(), a.end_line(), a.end_column()), (1, 1, 1, 1));
        assert_eq!(a.text(), "");
    }

    #[test]
    fn test_placeholder_nodes_are_independent() {
        let anchor = anchor();
        let a = placeholder_node(&anchor);
        let b = placeholder_node(&anchor);
        assert_eq!(a, b);
        assert!(!std::ptr::eq(&a, &b));
        assert!(Extent::ptr_eq(&a.extent, &b.extent));
    }
}
