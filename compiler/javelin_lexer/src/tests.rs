use pretty_assertions::assert_eq;

use javelin_ir::{LexErrorKind, Span, StringInterner, TokenKind};

use super::lex;
use super::raw_token::well_formed_number;

fn kinds(source: &str) -> Vec<TokenKind> {
    let interner = StringInterner::new();
    lex(source, &interner).iter().map(|t| t.kind).collect()
}

#[test]
fn lexes_simple_class() {
    use TokenKind::*;
    assert_eq!(
        kinds("class A { int x; }"),
        vec![Class, Identifier, LBrace, Int, Identifier, Semicolon, RBrace, Eof]
    );
}

#[test]
fn eof_sits_at_source_end() {
    let interner = StringInterner::new();
    let tokens = lex("a  ", &interner);
    assert_eq!(tokens.get(1).map(|t| t.span), Some(Span::new(3, 3)));
    assert_eq!(tokens.end_offset(), 3);
}

#[test]
fn operators_use_longest_match() {
    use TokenKind::*;
    assert_eq!(
        kinds("a >>>= b >> c >>> d >= e"),
        vec![
            Identifier,
            UnsignedRightShiftEqual,
            Identifier,
            RightShift,
            Identifier,
            UnsignedRightShift,
            Identifier,
            GreaterEqual,
            Identifier,
            Eof
        ]
    );
    assert_eq!(kinds("f(int... a)")[3], Ellipsis);
}

#[test]
fn literal_kinds() {
    use TokenKind::*;
    assert_eq!(
        kinds("1 10L 0x1F 1.5 2f 3e4 .5d 'c' \"s\" true null"),
        vec![
            IntegerLiteral,
            LongLiteral,
            IntegerLiteral,
            DoubleLiteral,
            FloatLiteral,
            DoubleLiteral,
            DoubleLiteral,
            CharLiteral,
            StringLiteral,
            True,
            Null,
            Eof
        ]
    );
}

#[test]
fn payload_keeps_source_spelling() {
    let interner = StringInterner::new();
    let tokens = lex("foo \"bar\"", &interner);
    let values: Vec<&str> = tokens.iter().map(|t| interner.lookup(t.value)).collect();
    assert_eq!(values, vec!["foo", "\"bar\"", ""]);
}

#[test]
fn comments_are_skipped() {
    use TokenKind::*;
    assert_eq!(
        kinds("a // line\n /* block\n * more */ b /** doc */"),
        vec![Identifier, Identifier, Eof]
    );
}

#[test]
fn lexical_errors_become_error_tokens() {
    let interner = StringInterner::new();
    let cases = [
        ("#", LexErrorKind::InvalidCharacter),
        ("\"abc", LexErrorKind::UnterminatedString),
        ("'a", LexErrorKind::UnterminatedChar),
        ("/* open", LexErrorKind::UnterminatedComment),
        ("0x", LexErrorKind::MalformedNumber),
        ("1_", LexErrorKind::MalformedNumber),
    ];
    for (source, expected) in cases {
        let tokens = lex(source, &interner);
        let first = tokens.get(0).copied();
        assert_eq!(first.map(|t| t.kind), Some(TokenKind::Error), "{source}");
        assert_eq!(first.and_then(|t| t.error), Some(expected), "{source}");
        assert_eq!(tokens.len(), 2, "{source}");
    }
}

#[test]
fn number_shape_rules() {
    assert!(well_formed_number("1_000"));
    assert!(well_formed_number("0xFF_FFL"));
    assert!(well_formed_number("1.5e10f"));
    assert!(!well_formed_number("0x"));
    assert!(!well_formed_number("1__"));
    assert!(!well_formed_number("1_L"));
}
