//! Function application (spec section 4.2, component C6) and the
//! spine-peeling helper δ-dispatch uses to see a chain of applications as
//! a head plus its arguments (spec section 4.3).

use smallvec::SmallVec;

use crate::value::{Closure, Value, ValueKind};

/// Applies `f` to `x`, performing β-reduction when `f` is a lambda and
/// building a stuck `Application` node otherwise (spec section 4.4,
/// rules 7 and 8). Never inspects δ-rules — that's `eval::apply_delta`'s
/// job, since those need a typed view of the whole spine, not just one
/// argument at a time.
pub fn apply(f: Value, x: Value) -> Value {
    let closure: Option<Closure> = match f.kind() {
        ValueKind::Lambda(c) => Some(c.clone()),
        _ => None,
    };
    match closure {
        Some(c) => c.instantiate(x),
        None => Value::new(ValueKind::Application(f, x)),
    }
}

/// Most applications in practice take 0-4 arguments (every builtin in
/// this core saturates at 3), so the common case never touches the heap.
pub type Spine<'a> = SmallVec<[&'a Value; 4]>;

/// Walks a chain of nested `Application` nodes down to its head,
/// collecting the arguments in left-to-right application order.
///
/// `f (a b) c` is `Application(Application(f, a_b), c)` — peeling it
/// gives `(f, [a_b, c])`, matching how the builtins in spec section 4.4
/// describe their arity.
pub fn spine(value: &Value) -> (&Value, Spine<'_>) {
    let mut args: Spine<'_> = SmallVec::new();
    let mut head = value;
    while let ValueKind::Application(f, x) = head.kind() {
        args.push(x);
        head = f;
    }
    args.reverse();
    (head, args)
}
