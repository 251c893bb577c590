//! Iterative release of deep value graphs.
//!
//! Evaluation can build values nested far deeper than the native stack:
//! `loop ... { x <- [x] }`, closures capturing closures, long scope chains.
//! Drop glue would recurse once per level. Instead, the last owner of a
//! composite moves its children onto a `Teardown` work list, so every node
//! is freed shallowly from one loop.

use crate::{Scope, Value};

#[derive(Default)]
pub(crate) struct Teardown {
    values: Vec<Value>,
    scopes: Vec<Scope>,
}

impl Teardown {
    #[inline]
    pub(crate) fn push_values(&mut self, values: impl IntoIterator<Item = Value>) {
        self.values.extend(values);
    }

    #[inline]
    pub(crate) fn push_scope(&mut self, scope: Scope) {
        self.scopes.push(scope);
    }

    /// Release everything queued. Each popped item hands its own children
    /// back to the list before it is dropped, so its drop is shallow.
    pub(crate) fn run(mut self) {
        loop {
            if let Some(mut value) = self.values.pop() {
                value.release_children(&mut self);
            } else if let Some(mut scope) = self.scopes.pop() {
                scope.release_frame(&mut self);
            } else {
                break;
            }
        }
    }
}
