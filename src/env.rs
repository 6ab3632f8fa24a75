//! The runtime environment (spec sections 3.3, 4.1): a persistent,
//! structurally shared stack of name/value bindings.

use std::fmt;
use std::rc::Rc;

use crate::label::Label;
use crate::value::Value;

/// A newest-first linked list of bindings, shared via `Rc` so that
/// `insert` is O(1) and never disturbs whatever already holds a clone of
/// the tail (every `Closure` does).
#[derive(Clone)]
pub struct Env(Option<Rc<Frame>>);

struct Frame {
    name: Label,
    value: Value,
    rest: Env,
}

impl Env {
    pub fn new() -> Self {
        Env(None)
    }

    /// Extends the environment with one more binding, newest first.
    /// Shadowing is implicit: a later `lookup` for this name finds this
    /// binding before any earlier one with the same name (spec section
    /// 4.1).
    pub fn insert(&self, name: Label, value: Value) -> Self {
        Env(Some(Rc::new(Frame { name, value, rest: self.clone() })))
    }

    /// Resolves an occurrence selector (spec section 4.1, component C2/C3):
    /// scans newest-first, counting down `index` on each match of `name`,
    /// and returns the bound value when the count reaches zero.
    ///
    /// Running off the end of the environment means `name` is free at
    /// this scope; the variable convention flips here (spec section 3.4)
    /// from the surface's `index >= 0` counting-in to the value's
    /// `-index-1` counting-out, so that a free variable's encoding is
    /// stable no matter how many more bindings later wrap around it.
    pub fn lookup(&self, name: &Label, index: u64) -> Value {
        let mut remaining = index;
        let mut frame = &self.0;
        while let Some(f) = frame {
            if &f.name == name {
                if remaining == 0 {
                    return f.value.clone();
                }
                remaining -= 1;
            }
            frame = &f.rest.0;
        }
        Value::new(crate::value::ValueKind::Variable(name.clone(), -(remaining as i64) - 1))
    }
}

impl Default for Env {
    fn default() -> Self {
        Env::new()
    }
}

/// Lists the bound names, newest first, rather than dumping every value —
/// a `Value` debug print can itself contain closures over this same
/// environment, and a full recursive dump gets unreadable fast.
impl fmt::Debug for Env {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names = f.debug_list();
        let mut frame = &self.0;
        while let Some(fr) = frame {
            names.entry(&fr.name);
            frame = &fr.rest.0;
        }
        names.finish()
    }
}
