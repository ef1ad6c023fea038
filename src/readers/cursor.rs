use crate::error::{AuditError, Result};
use crate::utils::constants::COMMENT_PREFIX;

/// Position-indexed view over a segment with explicit exhaustion errors
#[derive(Debug, Clone)]
pub struct SegmentCursor<'a> {
    name: &'static str,
    lines: &'a [String],
    position: usize,
}

impl<'a> SegmentCursor<'a> {
    pub fn new(name: &'static str, lines: &'a [String]) -> Self {
        Self {
            name,
            lines,
            position: 0,
        }
    }

    /// Line at an absolute index, independent of the cursor position
    pub fn line(&self, index: usize) -> Result<&'a str> {
        self.lines
            .get(index)
            .map(String::as_str)
            .ok_or(AuditError::SegmentTooShort {
                segment: self.name,
                line: index,
                available: self.lines.len(),
            })
    }

    /// Consume and return the line under the cursor
    pub fn advance(&mut self) -> Result<&'a str> {
        let line = self.line(self.position)?;
        self.position += 1;
        Ok(line)
    }

    /// Consume comment lines and return the first non-comment line
    pub fn advance_past_comments(&mut self) -> Result<&'a str> {
        loop {
            let line = self.advance()?;
            if !line.starts_with(COMMENT_PREFIX) {
                return Ok(line);
            }
        }
    }

    /// Lines from `index` to the end of the segment
    pub fn rest_from(&self, index: usize) -> &'a [String] {
        self.lines.get(index..).unwrap_or(&[])
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_advance_until_exhausted() {
        let segment = lines(&["one", "two"]);
        let mut cursor = SegmentCursor::new("constants", &segment);

        assert_eq!(cursor.advance().unwrap(), "one");
        assert_eq!(cursor.advance().unwrap(), "two");

        match cursor.advance() {
            Err(AuditError::SegmentTooShort {
                segment,
                line,
                available,
            }) => {
                assert_eq!(segment, "constants");
                assert_eq!(line, 2);
                assert_eq!(available, 2);
            }
            other => panic!("expected exhaustion, got {:?}", other),
        }
    }

    #[test]
    fn test_skip_comments() {
        let segment = lines(&["# a", "# b", "data", "# c"]);
        let mut cursor = SegmentCursor::new("constants", &segment);

        assert_eq!(cursor.advance_past_comments().unwrap(), "data");
        assert!(cursor.advance_past_comments().is_err());
    }

    #[test]
    fn test_indexed_view() {
        let segment = lines(&["a", "b", "c"]);
        let cursor = SegmentCursor::new("sample", &segment);

        assert_eq!(cursor.line(1).unwrap(), "b");
        assert!(cursor.line(3).is_err());
        assert_eq!(cursor.rest_from(1).len(), 2);
        assert!(cursor.rest_from(5).is_empty());
        assert_eq!(cursor.line_count(), 3);
    }
}
