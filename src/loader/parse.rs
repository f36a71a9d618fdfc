// src/loader/parse.rs

use crate::errors::{Result, TermplanError};
use crate::types::CourseName;

/// One `<prerequisite> <course>` line: `course` requires `prerequisite`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrerequisitePair {
    pub prerequisite: CourseName,
    pub course: CourseName,
    /// 1-based source line, kept for diagnostics.
    pub line: usize,
}

impl PrerequisitePair {
    pub fn new(prerequisite: impl Into<CourseName>, course: impl Into<CourseName>) -> Self {
        Self {
            prerequisite: prerequisite.into(),
            course: course.into(),
            line: 0,
        }
    }
}

/// Parse prerequisite pairs, one per line.
///
/// Blank lines are skipped and `#` starts a comment. Any other line must
/// hold exactly two whitespace-separated course names.
pub fn parse_prerequisite_pairs(text: &str) -> Result<Vec<PrerequisitePair>> {
    let mut pairs = Vec::new();

    for (index, raw_line) in text.lines().enumerate() {
        let line = index + 1;
        let content = match raw_line.split_once('#') {
            Some((before, _comment)) => before,
            None => raw_line,
        };

        let tokens: Vec<&str> = content.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            [prerequisite, course] => pairs.push(PrerequisitePair {
                prerequisite: prerequisite.to_string(),
                course: course.to_string(),
                line,
            }),
            other => {
                return Err(TermplanError::Parse {
                    line,
                    message: format!(
                        "expected `<prerequisite> <course>`, found {} token(s)",
                        other.len()
                    ),
                });
            }
        }
    }

    Ok(pairs)
}
