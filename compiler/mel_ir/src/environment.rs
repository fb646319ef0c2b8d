//! Persistent environment for variable resolution.
//!
//! An environment is an immutable chain of single-binding frames. Extending
//! it allocates one frame and shares the rest, so every evaluation step can
//! hold its own snapshot: a binding made while evaluating one subexpression
//! is never visible to the caller or to sibling subexpressions.

use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashSet;

use crate::{Expr, Name};

struct Frame {
    name: Name,
    expr: Rc<Expr>,
    parent: Option<Rc<Frame>>,
}

/// Name → expression mapping with value semantics.
///
/// `Clone` is O(1). [`bind`](Self::bind) returns an extended copy and leaves
/// the receiver unchanged.
#[derive(Clone, Default)]
pub struct Environment {
    head: Option<Rc<Frame>>,
}

impl Environment {
    /// Create an empty environment.
    pub fn new() -> Self {
        Environment { head: None }
    }

    /// Copy of this environment with `name` mapped to `expr`.
    ///
    /// An existing binding of `name` is shadowed in the copy.
    #[must_use]
    pub fn bind(&self, name: Name, expr: Rc<Expr>) -> Self {
        Environment {
            head: Some(Rc::new(Frame {
                name,
                expr,
                parent: self.head.clone(),
            })),
        }
    }

    /// Look up the expression bound to `name`, newest binding first.
    pub fn lookup(&self, name: Name) -> Option<&Rc<Expr>> {
        self.frames()
            .find(|frame| frame.name == name)
            .map(|frame| &frame.expr)
    }

    /// Whether `name` is bound.
    pub fn contains(&self, name: Name) -> bool {
        self.lookup(name).is_some()
    }

    /// Whether nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Visible names, newest first. Shadowed bindings are skipped.
    pub fn names(&self) -> Vec<Name> {
        let mut seen = FxHashSet::default();
        self.frames()
            .map(|frame| frame.name)
            .filter(|name| seen.insert(*name))
            .collect()
    }

    fn frames(&self) -> Frames<'_> {
        Frames {
            next: self.head.as_deref(),
        }
    }
}

struct Frames<'a> {
    next: Option<&'a Frame>,
}

impl<'a> Iterator for Frames<'a> {
    type Item = &'a Frame;

    fn next(&mut self) -> Option<Self::Item> {
        let frame = self.next?;
        self.next = frame.parent.as_deref();
        Some(frame)
    }
}

impl Drop for Environment {
    // Unlink uniquely owned frames one at a time so a long chain does not
    // recurse once per frame on drop.
    fn drop(&mut self) {
        let mut next = self.head.take();
        while let Some(frame) = next {
            match Rc::try_unwrap(frame) {
                Ok(mut frame) => next = frame.parent.take(),
                Err(_) => break,
            }
        }
    }
}

impl PartialEq for Environment {
    fn eq(&self, other: &Self) -> bool {
        let mut left = self.frames();
        let mut right = other.frames();
        loop {
            match (left.next(), right.next()) {
                (None, None) => return true,
                (Some(a), Some(b)) => {
                    if std::ptr::eq(a, b) {
                        return true;
                    }
                    if a.name != b.name || a.expr != b.expr {
                        return false;
                    }
                }
                _ => return false,
            }
        }
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.frames().map(|frame| (frame.name, &frame.expr)))
            .finish()
    }
}

#[cfg(test)]
mod tests;
