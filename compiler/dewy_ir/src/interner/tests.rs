#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

#[test]
fn interning_is_idempotent() {
    let interner = StringInterner::new();
    let a = interner.intern("counter");
    let b = interner.intern("counter");
    assert_eq!(a, b);
    assert_eq!(interner.lookup(a), "counter");
}

#[test]
fn distinct_strings_get_distinct_names() {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");
    assert_ne!(x, y);
    assert_eq!(interner.lookup(y), "y");
}

#[test]
fn empty_string_is_pre_interned() {
    let interner = StringInterner::new();
    assert_eq!(interner.intern(""), Name::EMPTY);
    assert!(interner.is_empty());
}

#[test]
fn len_counts_new_strings_once() {
    let interner = StringInterner::new();
    interner.intern("a");
    interner.intern("a");
    interner.intern("b");
    assert_eq!(interner.len(), 3);
}

#[test]
fn foreign_name_resolves_to_placeholder() {
    let interner = StringInterner::new();
    assert_eq!(interner.lookup(Name::from_raw(9_999)), "<unknown>");
}

#[test]
fn try_intern_succeeds_for_fresh_string() {
    let interner = StringInterner::new();
    let name = interner.try_intern("fresh").unwrap();
    assert_eq!(interner.lookup(name), "fresh");
}

#[test]
fn shared_interner_is_usable_across_threads() {
    let shared = SharedInterner::new();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let interner = shared.clone();
            std::thread::spawn(move || interner.intern(&format!("t{}", i % 2)))
        })
        .collect();
    let names: Vec<Name> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(names[0], names[2]);
    assert_eq!(names[1], names[3]);
    assert_eq!(shared.len(), 3);
}
