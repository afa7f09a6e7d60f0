use javelin_ir::TokenKind;

use super::lookup;

#[test]
fn resolves_every_reserved_word() {
    for kind in TokenKind::ALL {
        let text = kind.display();
        let is_word = text.bytes().all(|b| b.is_ascii_lowercase());
        if is_word {
            assert_eq!(lookup(text), Some(*kind), "{text}");
        }
    }
}

#[test]
fn rejects_identifiers() {
    assert_eq!(lookup("x"), None);
    assert_eq!(lookup("Class"), None);
    assert_eq!(lookup("classes"), None);
    assert_eq!(lookup("instanceOf"), None);
    assert_eq!(lookup("synchronize"), None);
}
