//! The structured problem event and the sink that receives it.

use std::fmt;

use javelin_ir::Span;

use crate::ErrorCode;

/// Severity level for problems.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// One detected problem: `{kind, severity, start, end}`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Problem {
    pub code: ErrorCode,
    pub severity: Severity,
    pub span: Span,
}

impl Problem {
    pub const fn error(code: ErrorCode, span: Span) -> Self {
        Problem {
            code,
            severity: Severity::Error,
            span,
        }
    }

    pub const fn warning(code: ErrorCode, span: Span) -> Self {
        Problem {
            code,
            severity: Severity::Warning,
            span,
        }
    }

    #[inline]
    pub const fn start(&self) -> u32 {
        self.span.start
    }

    #[inline]
    pub const fn end(&self) -> u32 {
        self.span.end
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

/// Receiver of problems found while parsing.
pub trait ProblemReporter {
    fn report(&mut self, problem: Problem);
}

impl ProblemReporter for Vec<Problem> {
    fn report(&mut self, problem: Problem) {
        self.push(problem);
    }
}

impl<R: ProblemReporter + ?Sized> ProblemReporter for &mut R {
    fn report(&mut self, problem: Problem) {
        (**self).report(problem);
    }
}
