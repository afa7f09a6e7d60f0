use pretty_assertions::assert_eq;

use javelin_ir::Span;

use super::*;
use crate::ErrorCode;

#[test]
fn line_col_counts_from_one() {
    let source = "class A {\n  int x\n}\n";
    assert_eq!(line_col(source, 0), (1, 1));
    assert_eq!(line_col(source, 12), (2, 3));
    assert_eq!(line_col(source, 18), (3, 1));
}

#[test]
fn emits_location_code_and_caret() {
    let source = "class A {\n  int x\n}\n";
    let problem = Problem::error(ErrorCode::SYNTAX_ERROR, Span::new(18, 19));
    let mut emitter = TextEmitter::new(Vec::new());
    let result = emitter.emit("A.java", source, &problem);
    assert!(result.is_ok());
    let text = String::from_utf8(emitter.into_inner()).unwrap_or_default();
    assert_eq!(
        text,
        "A.java:3:1: error[J1001]: syntax error on token\n    }\n    ^\n"
    );
}
