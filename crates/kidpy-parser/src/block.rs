//! Indentation-based block scanning.
//!
//! Given a `for`/`if`/`elif`/`else` header line, the body is the contiguous
//! run of following lines indented strictly deeper than the header. Blank
//! lines inside the run are tolerated; the first non-blank line at or below
//! the header's indentation ends it. Only one level of nesting exists:
//! body lines are a flat statement list and are never recursed into.

use std::ops::Range;

/// Leading whitespace width of a line, counting spaces and tabs alike.
pub fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ' || *c == '\t').count()
}

/// The index range of the body lines belonging to the header at
/// `header_idx`. Empty when the header has no indented body.
pub fn body_range(lines: &[&str], header_idx: usize) -> Range<usize> {
    let header_indent = indent_width(lines[header_idx]);
    let start = header_idx + 1;
    let mut end = start;
    let mut last_nonblank = start;

    for (i, line) in lines.iter().enumerate().skip(start) {
        if line.trim().is_empty() {
            end = i + 1;
            continue;
        }
        if indent_width(line) > header_indent {
            end = i + 1;
            last_nonblank = i + 1;
        } else {
            break;
        }
    }

    // Trailing blank lines belong to whatever follows, not the body.
    start..last_nonblank.min(end)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_width() {
        assert_eq!(indent_width("x = 1"), 0);
        assert_eq!(indent_width("    x = 1"), 4);
        assert_eq!(indent_width("\tx = 1"), 1);
    }

    #[test]
    fn test_simple_body() {
        let lines = ["for i in range(3):", "    print(i)", "print(\"done\")"];
        assert_eq!(body_range(&lines, 0), 1..2);
    }

    #[test]
    fn test_body_with_blank_line_inside() {
        let lines = [
            "for i in range(3):",
            "    print(i)",
            "",
            "    print(i)",
            "print(\"done\")",
        ];
        assert_eq!(body_range(&lines, 0), 1..4);
    }

    #[test]
    fn test_trailing_blank_lines_excluded() {
        let lines = ["if x > 0:", "    print(x)", "", ""];
        assert_eq!(body_range(&lines, 0), 1..2);
    }

    #[test]
    fn test_empty_body() {
        let lines = ["for i in range(3):", "print(\"after\")"];
        assert!(body_range(&lines, 0).is_empty());
    }

    #[test]
    fn test_header_at_end_of_program() {
        let lines = ["if x > 0:"];
        assert!(body_range(&lines, 0).is_empty());
    }

    #[test]
    fn test_indented_header_body() {
        let lines = ["    if x > 0:", "        print(x)", "    print(\"after\")"];
        assert_eq!(body_range(&lines, 0), 1..2);
    }
}
