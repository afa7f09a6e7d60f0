use pretty_assertions::assert_eq;

use super::*;

fn syntax(start: u32) -> Problem {
    Problem::error(ErrorCode::SYNTAX_ERROR, Span::new(start, start + 1))
}

#[test]
fn deduplicates_identical_reports() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(syntax(4)));
    assert!(!queue.add(syntax(4)));
    assert!(queue.add(syntax(5)));
    assert_eq!(queue.len(), 2);
}

#[test]
fn error_limit_drops_extra_errors_but_keeps_warnings() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 2,
        deduplicate: true,
    });
    queue.add(syntax(1));
    queue.add(syntax(2));
    assert!(!queue.add(syntax(3)));
    assert!(queue.add(Problem::warning(ErrorCode::SOURCE_LEVEL, Span::new(0, 3))));
    assert_eq!(queue.error_count(), 2);
    assert_eq!(queue.dropped(), 1);
}

#[test]
fn flush_sorts_by_position() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    queue.report(syntax(9));
    queue.report(syntax(2));
    queue.report(syntax(5));
    let starts: Vec<u32> = queue.flush().iter().map(Problem::start).collect();
    assert_eq!(starts, vec![2, 5, 9]);
    assert!(queue.is_empty());
    assert!(!queue.has_errors());
}
