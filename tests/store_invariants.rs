//! Course Store Invariant Tests
//!
//! - Inserts grow the store by exactly one
//! - Replace keeps the id and the size
//! - Removing a present id drops exactly that course
//! - Misses never change the store
//! - Concurrent writers do not lose courses

use std::sync::Arc;
use std::thread;

use coursedb::courses::{seed_courses, Author, Course, CourseStore, IdGenerator, IdStrategy};

// =============================================================================
// Helper Functions
// =============================================================================

fn sample(name: &str, price: i64) -> Course {
    Course::new("", name, price).with_author(Author::new("Test Author", "example.com"))
}

// =============================================================================
// Size Invariants
// =============================================================================

#[test]
fn test_insert_grows_by_one() {
    let store = CourseStore::seeded();
    let ids = IdStrategy::Counter.build(store.len().unwrap());

    for n in 0..10 {
        let before = store.len().unwrap();
        let mut course = sample(&format!("Course {n}"), n);
        course.id = ids.next_id();
        store.insert(course).unwrap();
        assert_eq!(store.len().unwrap(), before + 1);
    }
}

#[test]
fn test_replace_keeps_size_and_id() {
    let store = CourseStore::seeded();
    for seed in seed_courses() {
        let stored = store
            .replace(&seed.id, sample("Replaced", 1))
            .unwrap()
            .unwrap();
        assert_eq!(stored.id, seed.id);
        assert_eq!(store.len().unwrap(), 2);
        assert_eq!(store.find_by_id(&seed.id).unwrap().unwrap().name, "Replaced");
    }
}

#[test]
fn test_remove_drops_exactly_one() {
    let store = CourseStore::seeded();
    store.remove_by_id("2").unwrap().unwrap();
    let remaining = store.list_all().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0], seed_courses()[0]);
}

// =============================================================================
// Miss Invariants
// =============================================================================

#[test]
fn test_misses_leave_store_unchanged() {
    let store = CourseStore::seeded();
    let before = store.list_all().unwrap();

    assert!(store.find_by_id("missing").unwrap().is_none());
    assert!(store.remove_by_id("missing").unwrap().is_none());
    assert!(store.replace("missing", sample("X", 0)).unwrap().is_none());

    assert_eq!(store.list_all().unwrap(), before);
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn test_concurrent_inserts_and_removes() {
    let store = Arc::new(CourseStore::new());

    let writers: Vec<_> = (0..8)
        .map(|t| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for i in 0..50 {
                    let mut course = sample("Concurrent", i);
                    course.id = format!("{t}-{i}");
                    store.insert(course).unwrap();
                }
                for i in 0..25 {
                    store.remove_by_id(&format!("{t}-{i}")).unwrap().unwrap();
                }
            })
        })
        .collect();

    for writer in writers {
        writer.join().unwrap();
    }

    assert_eq!(store.len().unwrap(), 8 * 25);
}
