//! Diagnostic queue for collecting, deduplicating and sorting problems.
//!
//! Features:
//! - Error limits to keep runaway recovery from flooding output
//! - Deduplication of identical `(code, span)` reports
//! - Stable ordering by source position on flush

use rustc_hash::FxHashSet;

use javelin_ir::Span;

use crate::{ErrorCode, Problem, ProblemReporter};

/// Configuration for problem collection.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors kept (0 = unlimited).
    pub error_limit: usize,
    /// Drop a problem identical in code and span to one already queued.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 100,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// No limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Queue for collecting problems.
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    problems: Vec<Problem>,
    seen: FxHashSet<(ErrorCode, Span)>,
    error_count: usize,
    dropped: usize,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    pub fn new() -> Self {
        Self::with_config(DiagnosticConfig::default())
    }

    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            problems: Vec::new(),
            seen: FxHashSet::default(),
            error_count: 0,
            dropped: 0,
            config,
        }
    }

    /// Add a problem. Returns `false` if it was filtered.
    pub fn add(&mut self, problem: Problem) -> bool {
        if problem.is_error()
            && self.config.error_limit > 0
            && self.error_count >= self.config.error_limit
        {
            self.dropped += 1;
            return false;
        }
        if self.config.deduplicate && !self.seen.insert((problem.code, problem.span)) {
            return false;
        }
        if problem.is_error() {
            self.error_count += 1;
        }
        self.problems.push(problem);
        true
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    /// Problems rejected by the error limit.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }

    /// Take all problems, sorted by start position (stable for equal starts).
    pub fn flush(&mut self) -> Vec<Problem> {
        let mut problems = std::mem::take(&mut self.problems);
        problems.sort_by_key(|p| (p.span.start, p.span.end));
        self.seen.clear();
        self.error_count = 0;
        problems
    }
}

impl ProblemReporter for DiagnosticQueue {
    fn report(&mut self, problem: Problem) {
        self.add(problem);
    }
}

#[cfg(test)]
mod tests;
