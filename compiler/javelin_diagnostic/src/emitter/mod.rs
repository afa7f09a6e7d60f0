//! Plain-text rendering of problems.
//!
//! Lives outside the parser: the parser only produces `Problem` values.

use std::io::{self, Write};

use crate::Problem;

/// 1-based line and column of `offset` in `source`.
pub fn line_col(source: &str, offset: u32) -> (u32, u32) {
    let offset = (offset as usize).min(source.len());
    let mut line = 1;
    let mut line_start = 0;
    for (i, b) in source.bytes().enumerate().take(offset) {
        if b == b'\n' {
            line += 1;
            line_start = i + 1;
        }
    }
    let column = source
        .get(line_start..offset)
        .map_or(offset - line_start, |s| s.chars().count());
    (line, column as u32 + 1)
}

/// Writes problems as `file:line:col: severity[CODE]: description`, each
/// followed by the offending source line and a caret marker.
pub struct TextEmitter<W: Write> {
    writer: W,
}

impl<W: Write> TextEmitter<W> {
    pub fn new(writer: W) -> Self {
        TextEmitter { writer }
    }

    pub fn emit(&mut self, file: &str, source: &str, problem: &Problem) -> io::Result<()> {
        let (line, column) = line_col(source, problem.start());
        writeln!(
            self.writer,
            "{file}:{line}:{column}: {}[{}]: {}",
            problem.severity,
            problem.code,
            problem.code.description()
        )?;
        if let Some(text) = source.lines().nth(line as usize - 1) {
            let width = (problem.span.len() as usize).max(1);
            writeln!(self.writer, "    {text}")?;
            writeln!(
                self.writer,
                "    {}{}",
                " ".repeat(column as usize - 1),
                "^".repeat(width.min(text.len().saturating_sub(column as usize - 1).max(1)))
            )?;
        }
        Ok(())
    }

    pub fn emit_all(&mut self, file: &str, source: &str, problems: &[Problem]) -> io::Result<()> {
        for problem in problems {
            self.emit(file, source, problem)?;
        }
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests;
