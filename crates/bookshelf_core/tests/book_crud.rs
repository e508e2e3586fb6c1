use bookshelf_core::{Book, BookService, MemoryBookRepository};

fn seeded_service(books: Vec<Book>) -> BookService<MemoryBookRepository> {
    BookService::open(MemoryBookRepository::with_books(books)).unwrap()
}

#[test]
fn create_then_get_returns_same_fields() {
    let mut service = BookService::new(MemoryBookRepository::new());

    let id = service.create_book("A", "B", "C-D").unwrap();

    let loaded = service.get_book(&id).unwrap();
    assert!(!loaded.id.is_empty());
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.title, "A");
    assert_eq!(loaded.author, "B");
    assert_eq!(loaded.isbn, "C-D");
}

#[test]
fn create_appends_in_insertion_order_and_persists() {
    let mut service = BookService::new(MemoryBookRepository::new());

    let first = service.create_book("Test Title", "Test Author", "Test-ISBN").unwrap();
    let second = service.create_book("Other", "Writer", "1-2").unwrap();

    let ids: Vec<&str> = service.books().iter().map(|book| book.id.as_str()).collect();
    assert_eq!(ids, vec![first.as_str(), second.as_str()]);
    assert_eq!(service.repository().save_count(), 2);
    assert_eq!(service.repository().snapshot(), service.books());
}

#[test]
fn get_unknown_id_returns_none() {
    let service = seeded_service(vec![Book::with_id("test-id", "T", "A", "I").unwrap()]);
    assert!(service.get_book("missing").is_none());
}

#[test]
fn update_existing_book_replaces_fields_in_place() {
    let mut service = seeded_service(vec![
        Book::with_id("test-id", "Old Title", "Old Author", "Old-ISBN").unwrap(),
        Book::with_id("other", "Keep", "Keep", "Keep").unwrap(),
    ]);

    let updated = service
        .update_book("test-id", "New Title", "New Author", "New-ISBN")
        .unwrap();

    assert!(updated);
    assert_eq!(
        service.books()[0],
        Book::with_id("test-id", "New Title", "New Author", "New-ISBN").unwrap()
    );
    assert_eq!(service.books()[1].title, "Keep");
    assert_eq!(service.repository().save_count(), 1);
}

#[test]
fn update_unknown_id_is_a_silent_noop() {
    let original = vec![Book::with_id("test-id", "Title", "Author", "ISBN").unwrap()];
    let mut service = seeded_service(original.clone());

    let updated = service.update_book("missing", "X", "Y", "Z").unwrap();

    assert!(!updated);
    assert_eq!(service.books(), original.as_slice());
    assert_eq!(service.repository().save_count(), 0);
}

#[test]
fn delete_removes_book_and_persists() {
    let mut service = seeded_service(vec![
        Book::with_id("test-id", "Title", "Author", "ISBN").unwrap(),
    ]);

    assert!(service.delete_book("test-id").unwrap());
    assert!(service.is_empty());
    assert_eq!(service.repository().save_count(), 1);
    assert!(service.repository().snapshot().is_empty());
}

#[test]
fn delete_unknown_id_leaves_collection_unchanged() {
    let original = vec![
        Book::with_id("id1", "Title1", "Author1", "ISBN1").unwrap(),
        Book::with_id("id2", "Title2", "Author2", "ISBN2").unwrap(),
    ];
    let mut service = seeded_service(original.clone());

    assert!(!service.delete_book("missing").unwrap());
    assert!(!service.delete_book("missing").unwrap());

    assert_eq!(service.len(), 2);
    assert_eq!(service.books(), original.as_slice());
    assert_eq!(service.repository().save_count(), 2);
}
