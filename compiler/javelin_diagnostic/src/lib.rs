//! Problem reporting for the Java front end.
//!
//! The parser never formats text. It emits [`Problem`] events (an error
//! code, a severity and a source span) into a [`ProblemReporter`]. Callers
//! collect them in a `Vec<Problem>` or a [`DiagnosticQueue`] and render them
//! later with an [`emitter`].

mod error_code;
pub mod emitter;
mod problem;
pub mod queue;

pub use error_code::ErrorCode;
pub use problem::{Problem, ProblemReporter, Severity};
pub use queue::{DiagnosticConfig, DiagnosticQueue};
