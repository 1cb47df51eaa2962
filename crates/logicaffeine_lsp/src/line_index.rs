use tower_lsp::lsp_types::Position;

/// Maps between byte offsets and LSP `Position` (line, character).
///
/// LSP positions use zero-based line and UTF-16 code unit offsets.
/// Our source strings use byte offsets. This struct pre-computes
/// line start byte offsets for efficient bidirectional conversion.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset of each line start. `line_starts[0]` is always 0.
    line_starts: Vec<usize>,
    /// The full source text (needed for UTF-16 offset computation).
    source: String,
}

impl LineIndex {
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0];
        for (i, b) in source.bytes().enumerate() {
            if b == b'\n' {
                line_starts.push(i + 1);
            }
        }
        LineIndex {
            line_starts,
            source: source.to_string(),
        }
    }

    /// Convert a byte offset to an LSP `Position`.
    ///
    /// Returns `(line, character)` where character is a UTF-16 code unit offset.
    pub fn position(&self, byte_offset: usize) -> Position {
        let byte_offset = byte_offset.min(self.source.len());

        let line = self
            .line_starts
            .partition_point(|&start| start <= byte_offset)
            .saturating_sub(1);

        let line_start = self.line_starts[line];
        let line_text = &self.source[line_start..byte_offset];
        let character = line_text.encode_utf16().count() as u32;

        Position {
            line: line as u32,
            character,
        }
    }

    /// Return the byte offset of the start of `line` (0-indexed).
    /// Returns `source.len()` if `line` is out of bounds.
    pub fn line_start_offset(&self, line: usize) -> usize {
        self.line_starts
            .get(line)
            .copied()
            .unwrap_or(self.source.len())
    }

    /// Compute the UTF-16 length of a byte range in the source.
    pub fn utf16_length(&self, byte_start: usize, byte_end: usize) -> u32 {
        let start = byte_start.min(self.source.len());
        let end = byte_end.min(self.source.len());
        if start >= end {
            return 0;
        }
        self.source[start..end].encode_utf16().count() as u32
    }

    /// Convert an LSP `Position` to a byte offset.
    pub fn offset(&self, position: Position) -> usize {
        let line = position.line as usize;
        if line >= self.line_starts.len() {
            return self.source.len();
        }

        let line_start = self.line_starts[line];
        let line_end = self
            .line_starts
            .get(line + 1)
            .copied()
            .unwrap_or(self.source.len());

        let line_text = &self.source[line_start..line_end];
        let mut utf16_offset = 0u32;
        let target = position.character;

        for (byte_idx, ch) in line_text.char_indices() {
            if utf16_offset >= target {
                return line_start + byte_idx;
            }
            utf16_offset += ch.len_utf16() as u32;
        }

        line_end
    }
}
