use super::*;

#[test]
fn kind_indices_round_trip() {
    for (i, kind) in TokenKind::ALL.iter().enumerate() {
        assert_eq!(kind.index(), i);
        assert_eq!(TokenKind::from_index(i), Some(*kind));
    }
    assert_eq!(TokenKind::from_index(TokenKind::COUNT), None);
}

#[test]
fn eof_is_last_kind() {
    assert_eq!(TokenKind::ALL.last(), Some(&TokenKind::Eof));
    assert_eq!(TokenKind::Eof.display(), "EOF");
}

#[test]
fn payload_kinds() {
    assert!(TokenKind::Identifier.has_payload());
    assert!(TokenKind::StringLiteral.has_payload());
    assert!(!TokenKind::Class.has_payload());
    assert!(!TokenKind::True.has_payload());
}

#[test]
fn index_at_or_after_uses_starts() {
    let mut list = TokenList::new();
    list.push(Token::new(TokenKind::Class, Span::new(0, 5)));
    list.push(Token::new(TokenKind::Identifier, Span::new(6, 7)));
    list.push(Token::new(TokenKind::LBrace, Span::new(8, 9)));
    list.push(Token::eof(9));

    assert_eq!(list.index_at_or_after(0), 0);
    assert_eq!(list.index_at_or_after(1), 1);
    assert_eq!(list.index_at_or_after(8), 2);
    assert_eq!(list.index_at_or_after(9), 3);
    assert_eq!(list.index_at_or_after(100), 4);
    assert_eq!(list.end_offset(), 9);
}

#[test]
fn error_token_carries_kind() {
    let token = Token::error(LexErrorKind::InvalidCharacter, Span::new(3, 4));
    assert_eq!(token.kind, TokenKind::Error);
    assert_eq!(token.error, Some(LexErrorKind::InvalidCharacter));
}
