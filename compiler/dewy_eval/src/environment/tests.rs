use pretty_assertions::assert_eq;

use super::*;

fn names() -> (StringInterner, Name, Name) {
    let interner = StringInterner::new();
    let x = interner.intern("x");
    let y = interner.intern("y");
    (interner, x, y)
}

#[test]
fn define_then_lookup() {
    let (_interner, x, _) = names();
    let scope = Scope::root();
    scope.define(x, Value::Number(42.0));
    assert_eq!(scope.lookup(x), Some(Value::Number(42.0)));
}

#[test]
fn redefine_overwrites_in_place() {
    let (_interner, x, _) = names();
    let scope = Scope::root();
    scope.define(x, Value::Number(1.0));
    scope.define(x, Value::Number(2.0));
    assert_eq!(scope.lookup(x), Some(Value::Number(2.0)));
    assert_eq!(scope.local_len(), 1);
}

#[test]
fn missing_name_is_none() {
    let (_interner, x, y) = names();
    let scope = Scope::root();
    scope.define(x, Value::Bool(true));
    assert_eq!(scope.child().lookup(y), None);
}

#[test]
fn child_sees_parent_bindings() {
    let (_interner, x, _) = names();
    let parent = Scope::root();
    parent.define(x, Value::text("outer"));
    let child = parent.child();
    assert_eq!(child.lookup(x), Some(Value::text("outer")));
    assert!(!child.contains_local(x));
}

#[test]
fn shadowing_leaves_parent_untouched() {
    let (_interner, x, _) = names();
    let parent = Scope::root();
    parent.define(x, Value::Number(1.0));

    let child = parent.child();
    child.define(x, Value::Number(2.0));

    assert_eq!(child.lookup(x), Some(Value::Number(2.0)));
    assert_eq!(parent.lookup(x), Some(Value::Number(1.0)));
}

#[test]
fn assign_reaches_through_the_chain() {
    let (_interner, x, _) = names();
    let parent = Scope::root();
    parent.define(x, Value::Number(1.0));

    let grandchild = parent.child().child();
    assert_eq!(grandchild.assign(x, Value::Number(2.0)), Ok(()));

    assert_eq!(parent.lookup(x), Some(Value::Number(2.0)));
    assert!(!grandchild.contains_local(x));
}

#[test]
fn assign_hits_nearest_binding() {
    let (_interner, x, _) = names();
    let parent = Scope::root();
    parent.define(x, Value::Number(1.0));
    let child = parent.child();
    child.define(x, Value::Number(10.0));

    assert_eq!(child.assign(x, Value::Number(11.0)), Ok(()));

    assert_eq!(child.lookup(x), Some(Value::Number(11.0)));
    assert_eq!(parent.lookup(x), Some(Value::Number(1.0)));
}

#[test]
fn assign_to_unbound_fails_without_creating() {
    let (_interner, x, _) = names();
    let scope = Scope::root().child();
    assert_eq!(scope.assign(x, Value::Number(1.0)), Err(Unbound));
    assert_eq!(scope.lookup(x), None);
}

#[test]
fn depth_counts_ancestors() {
    let root = Scope::root();
    assert_eq!(root.depth(), 0);
    assert_eq!(root.child().child().depth(), 2);
}

#[test]
fn clones_share_a_frame() {
    let (_interner, x, _) = names();
    let a = Scope::root();
    let b = a.clone();
    b.define(x, Value::Bool(false));
    assert!(a.same_scope(&b));
    assert_eq!(a.lookup(x), Some(Value::Bool(false)));
    assert!(!a.same_scope(&a.child()));
}

#[test]
fn parent_handle_is_the_same_scope() {
    let root = Scope::root();
    let child = root.child();
    assert!(child.parent().is_some_and(|p| p.same_scope(&root)));
    assert!(root.parent().is_none());
}

#[test]
fn child_keeps_dropped_parent_alive() {
    let (_interner, x, _) = names();
    let child = {
        let parent = Scope::root();
        parent.define(x, Value::Number(7.0));
        parent.child()
    };
    assert_eq!(child.lookup(x), Some(Value::Number(7.0)));
}

#[test]
fn long_chains_resolve_iteratively() {
    let (_interner, x, _) = names();
    let root = Scope::root();
    root.define(x, Value::Number(0.0));
    let mut scope = root.clone();
    for _ in 0..100_000 {
        scope = scope.child();
    }
    assert_eq!(scope.lookup(x), Some(Value::Number(0.0)));
    assert_eq!(scope.assign(x, Value::Number(5.0)), Ok(()));
    assert_eq!(root.lookup(x), Some(Value::Number(5.0)));
}

#[test]
fn dropping_a_long_chain_releases_every_frame() {
    let (_interner, x, y) = names();
    let root = Scope::root();
    let mut scope = root.child();
    for i in 0..200_000 {
        scope.define(x, Value::sequence(vec![Value::Number(f64::from(i))]));
        scope = scope.child();
    }
    scope.define(y, Value::Bool(true));
    drop(scope);
    assert_eq!(root.local_len(), 0);
}

#[test]
fn shared_parent_survives_child_teardown() {
    let (_interner, x, _) = names();
    let parent = Scope::root();
    parent.define(x, Value::text("kept"));
    let mut leaf = parent.child();
    for _ in 0..1_000 {
        leaf = leaf.child();
    }
    drop(leaf);
    assert_eq!(parent.lookup(x), Some(Value::text("kept")));
}

#[test]
fn builtin_root_binds_len() {
    let interner = StringInterner::new();
    let scope = Scope::with_builtins(&interner);
    let len = interner.intern("len");
    assert!(matches!(scope.lookup(len), Some(Value::Builtin(b)) if b.name == "len"));
}

#[test]
fn local_scope_clone_shares_allocation() {
    let a = LocalScope::new(1);
    let b = a.clone();
    *b.borrow_mut() = 5;
    assert_eq!(*a.borrow(), 5);
    assert!(a.ptr_eq(&b));
}
