use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// One point in a source file, 1-based like the scripting host reports it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScriptPosition {
    /// File identity; empty for in-memory scripts.
    pub file: Arc<str>,
    pub line: usize,
    pub column: usize,
    pub offset: usize,
    /// Text of the line containing this position.
    pub line_text: String,
    /// The complete source buffer the position belongs to.
    pub script: Arc<str>,
}

impl ScriptPosition {
    /// Computes the position of byte `offset` inside `script`.
    /// Offsets past the end are clamped to the end of the buffer, and offsets
    /// inside a multi-byte character to the start of that character.
    pub fn at_offset(file: Arc<str>, script: Arc<str>, offset: usize) -> Self {
        let offset = floor_char_boundary(&script, offset);
        let before = &script[..offset];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        let line_end = script[line_start..].find('\n').map_or(script.len(), |i| line_start + i + 1);
        let line_text = script[line_start..line_end].to_string();
        Self { file, line, column, offset, line_text, script }
    }
}

fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

#[derive(Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
struct ExtentData {
    start: ScriptPosition,
    end: ScriptPosition,
    text: String,
}

/// A source span: file identity, start and end positions and the raw text.
///
/// Extents are immutable and cheap to clone; nodes copied during a rewrite
/// share their extent with the original rather than duplicating the text.
/// Equality is structural.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extent(Arc<ExtentData>);

impl Extent {
    pub fn new(start: ScriptPosition, end: ScriptPosition, text: impl Into<String>) -> Self {
        Extent(Arc::new(ExtentData { start, end, text: text.into() }))
    }

    /// Builds the extent of `script[start..end]`.
    pub fn from_offsets(file: impl Into<Arc<str>>, script: impl Into<Arc<str>>, start: usize, end: usize) -> Self {
        let file = file.into();
        let script = script.into();
        let start_pos = ScriptPosition::at_offset(file.clone(), script.clone(), start);
        let end_pos = ScriptPosition::at_offset(file, script.clone(), end.max(start));
        let text = script[start_pos.offset..end_pos.offset].to_string();
        Extent::new(start_pos, end_pos, text)
    }

    /// An extent covering an entire script.
    pub fn whole(file: impl Into<Arc<str>>, script: impl Into<Arc<str>>) -> Self {
        let script = script.into();
        let len = script.len();
        Extent::from_offsets(file, script, 0, len)
    }

    pub fn start(&self) -> &ScriptPosition {
        &self.0.start
    }

    pub fn end(&self) -> &ScriptPosition {
        &self.0.end
    }

    pub fn text(&self) -> &str {
        &self.0.text
    }

    pub fn file(&self) -> &Arc<str> {
        &self.0.start.file
    }

    pub fn script(&self) -> &Arc<str> {
        &self.0.start.script
    }

    pub fn start_line(&self) -> usize {
        self.0.start.line
    }

    pub fn start_column(&self) -> usize {
        self.0.start.column
    }

    pub fn end_line(&self) -> usize {
        self.0.end.line
    }

    pub fn end_column(&self) -> usize {
        self.0.end.column
    }

    /// True when both extents cover the same lines and columns.
    pub fn same_span(&self, other: &Extent) -> bool {
        self.start_line() == other.start_line()
            && self.start_column() == other.start_column()
            && self.end_line() == other.end_line()
            && self.end_column() == other.end_column()
    }

    /// True when both handles point at the same allocation.
    pub fn ptr_eq(a: &Extent, b: &Extent) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = if self.file().is_empty() { "<script>" } else { self.file() };
        write!(
            f,
            "{}:{}:{}-{}:{}",
            file,
            self.start_line(),
            self.start_column(),
            self.end_line(),
            self.end_column()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_offsets_tracks_lines_and_columns() {
        let script = "$a = 1\n$b = $a + 2\n";
        let extent = Extent::from_offsets("t.ps1", script, 12, 18);
        assert_eq!(extent.text(), "$a + 2");
        assert_eq!((extent.start_line(), extent.start_column()), (2, 6));
        assert_eq!((extent.end_line(), extent.end_column()), (2, 12));
        assert_eq!(extent.start().line_text, "$b = $a + 2\n");
    }

    #[test]
    fn test_whole_script() {
        let extent = Extent::whole("t.ps1", "x\ny");
        assert_eq!((extent.start_line(), extent.start_column()), (1, 1));
        assert_eq!((extent.end_line(), extent.end_column()), (2, 2));
        assert_eq!(extent.to_string(), "t.ps1:1:1-2:2");
    }

    #[test]
    fn test_same_span_ignores_text() {
        let a = Extent::from_offsets("a.ps1", "abc", 0, 2);
        let b = Extent::from_offsets("b.ps1", "xyz", 0, 2);
        assert!(a.same_span(&b));
        assert_ne!(a, b);
        assert!(!Extent::ptr_eq(&a, &b));
        assert!(Extent::ptr_eq(&a, &a.clone()));
    }

    #[test]
    fn test_offsets_inside_a_character_are_clamped() {
        // 'é' occupies bytes 6..8
        let script = "$a = 'é'\n";
        let extent = Extent::from_offsets("t.ps1", script, 7, 9);
        assert_eq!(extent.start().offset, 6);
        assert_eq!(extent.text(), "é'");
        assert_eq!((extent.start_line(), extent.start_column()), (1, 7));
        assert_eq!((extent.end_line(), extent.end_column()), (1, 9));

        let inside = ScriptPosition::at_offset(Arc::from("t.ps1"), Arc::from("é"), 1);
        assert_eq!((inside.offset, inside.column), (0, 1));
    }
}
