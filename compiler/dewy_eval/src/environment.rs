//! Lexical scopes.
//!
//! A `Scope` is a cheap handle to a frame of bindings plus an optional
//! parent handle. Children hold their parent alive; closures hold their
//! defining scope alive. A frame is dropped when no handle reaches it.
//!
//! Lookups and assignments walk the parent chain iteratively, so a long
//! chain of nested blocks costs no host stack.

use rustc_hash::FxHashMap;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use dewy_ir::{Name, StringInterner};

use crate::teardown::Teardown;
use crate::Value;

/// Error returned by [`Scope::assign`] when no scope in the chain binds the name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Unbound;

/// A single-threaded shared cell for scope frames.
///
/// Wraps `Rc<RefCell<T>>` so every frame allocation goes through
/// `LocalScope::new`, and so it is plain at the type level that scopes are
/// not thread-safe.
#[repr(transparent)]
pub struct LocalScope<T>(Rc<RefCell<T>>);

impl<T> LocalScope<T> {
    #[inline]
    pub fn new(value: T) -> Self {
        LocalScope(Rc::new(RefCell::new(value)))
    }

    #[inline]
    pub fn borrow(&self) -> Ref<'_, T> {
        self.0.borrow()
    }

    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.0.borrow_mut()
    }

    /// Mutable access when this is the only handle.
    #[inline]
    pub(crate) fn get_mut(&mut self) -> Option<&mut T> {
        Rc::get_mut(&mut self.0).map(RefCell::get_mut)
    }

    /// Whether both handles share one allocation.
    #[inline]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for LocalScope<T> {
    #[inline]
    fn clone(&self) -> Self {
        LocalScope(Rc::clone(&self.0))
    }
}

/// Bindings of one scope.
struct Frame {
    bindings: FxHashMap<Name, Value>,
    parent: Option<Scope>,
}

impl Frame {
    fn release(&mut self, teardown: &mut Teardown) {
        if let Some(parent) = self.parent.take() {
            teardown.push_scope(parent);
        }
        teardown.push_values(self.bindings.drain().map(|(_, value)| value));
    }
}

// A frame may be the last owner of a long parent chain or of deeply nested
// values; hand them to a work list rather than dropping recursively.
impl Drop for Frame {
    fn drop(&mut self) {
        let mut teardown = Teardown::default();
        self.release(&mut teardown);
        teardown.run();
    }
}

/// Handle to a lexical scope. Clones share the same frame.
#[derive(Clone)]
pub struct Scope(LocalScope<Frame>);

impl Scope {
    /// New root scope with no bindings and no parent.
    pub fn root() -> Self {
        Scope(LocalScope::new(Frame {
            bindings: FxHashMap::default(),
            parent: None,
        }))
    }

    /// New root scope holding the builtin functions.
    pub fn with_builtins(interner: &StringInterner) -> Self {
        let scope = Scope::root();
        crate::builtins::install(&scope, interner);
        scope
    }

    /// New scope whose parent is this one.
    #[must_use]
    pub fn child(&self) -> Scope {
        Scope(LocalScope::new(Frame {
            bindings: FxHashMap::default(),
            parent: Some(self.clone()),
        }))
    }

    pub fn parent(&self) -> Option<Scope> {
        self.0.borrow().parent.clone()
    }

    /// Bind `name` in this scope only, overwriting any local binding.
    #[inline]
    pub fn define(&self, name: Name, value: Value) {
        self.0.borrow_mut().bindings.insert(name, value);
    }

    /// Value of the nearest binding of `name`, searching outward.
    pub fn lookup(&self, name: Name) -> Option<Value> {
        let mut current = self.clone();
        loop {
            let parent = {
                let frame = current.0.borrow();
                if let Some(value) = frame.bindings.get(&name) {
                    return Some(value.clone());
                }
                frame.parent.clone()
            };
            current = parent?;
        }
    }

    /// Overwrite the nearest existing binding of `name`. Never creates one.
    pub fn assign(&self, name: Name, value: Value) -> Result<(), Unbound> {
        let mut current = self.clone();
        loop {
            let parent = {
                let mut frame = current.0.borrow_mut();
                if let Some(slot) = frame.bindings.get_mut(&name) {
                    *slot = value;
                    return Ok(());
                }
                frame.parent.clone()
            };
            current = parent.ok_or(Unbound)?;
        }
    }

    /// Whether this scope itself (not an ancestor) binds `name`.
    pub fn contains_local(&self, name: Name) -> bool {
        self.0.borrow().bindings.contains_key(&name)
    }

    /// Number of bindings in this scope itself.
    pub fn local_len(&self) -> usize {
        self.0.borrow().bindings.len()
    }

    /// Number of ancestors above this scope (0 for a root).
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut current = self.parent();
        while let Some(scope) = current {
            depth += 1;
            current = scope.parent();
        }
        depth
    }

    /// Empty the frame into `teardown` if this is its last handle.
    pub(crate) fn release_frame(&mut self, teardown: &mut Teardown) {
        if let Some(frame) = self.0.get_mut() {
            frame.release(teardown);
        }
    }

    /// Whether both handles refer to the same scope.
    #[inline]
    pub fn same_scope(&self, other: &Scope) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

impl Default for Scope {
    fn default() -> Self {
        Scope::root()
    }
}

// Bindings may hold closures that capture this scope, so Debug prints shape
// rather than contents.
impl fmt::Debug for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scope")
            .field("bindings", &self.local_len())
            .field("depth", &self.depth())
            .finish()
    }
}

#[cfg(test)]
mod tests;
