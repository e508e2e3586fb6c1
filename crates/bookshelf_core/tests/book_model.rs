use bookshelf_core::{generate_book_id, Book, BookValidationError};

#[test]
fn book_new_generates_hex_id() {
    let book = Book::new("Title", "Author", "ISBN");

    assert_eq!(book.id.len(), 32);
    assert!(book.id.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(book.title, "Title");
    assert_eq!(book.author, "Author");
    assert_eq!(book.isbn, "ISBN");
    assert!(book.validate().is_ok());
}

#[test]
fn generated_ids_are_unique() {
    let first = generate_book_id();
    let second = generate_book_id();
    assert_ne!(first, second);
}

#[test]
fn with_id_rejects_blank_id() {
    let err = Book::with_id("  ", "Title", "Author", "ISBN").unwrap_err();
    assert_eq!(err, BookValidationError::EmptyId);
}

#[test]
fn book_serialization_uses_expected_wire_fields() {
    let book = Book::with_id("test-id", "Title", "Author", "Test-ISBN").unwrap();

    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "id": "test-id",
            "title": "Title",
            "author": "Author",
            "isbn": "Test-ISBN"
        })
    );

    let decoded: Book = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, book);
}
