//! The residual value representation (spec section 3.2): the output of
//! `evaluate` and the input to `quote`.
//!
//! Follows the teacher's `Value(Rc<ValueInternal>)` / `ValueKind` split:
//! the outer `Rc` makes every clone O(1) and lets closures and
//! environments share structure freely, while `ValueKind` carries the
//! actual variants. Unlike the teacher, there's no `RefCell`-guarded lazy
//! `Form` here — spec section 3.3 requires the environment to be
//! value-level ("looking up a name returns an already-evaluated Value,
//! never a thunk"), so `Value` has nothing left to normalize on demand.

use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::env::Env;
use crate::label::Label;
use crate::scalar::{BinOp, Builtin, Scalar};
use crate::surface::Expr;

#[derive(Clone)]
pub struct Value(Rc<ValueKind>);

/// A value in normal (or, for the still-neutral parts, stuck) form (spec
/// section 3.2).
#[derive(Debug)]
pub enum ValueKind {
    /// `index` uses the *value* convention (spec section 3.4): free
    /// variables are `-k-1` for `k >= 0` further-outward unbound
    /// references further away than the nearest binder.
    Variable(Label, i64),
    Lambda(Closure),
    /// Stuck application: present only when neither a δ-rule nor
    /// β-reduction fired (spec section 4.4, rule 8).
    Application(Value, Value),
    List(Vec<Value>),
    /// Ordered, insertion-order-preserving; duplicate keys are kept, with
    /// `Field` resolving to the first (spec section 4.5).
    Record(Vec<(Label, Value)>),
    /// Stuck field projection: record wasn't a `Record` or didn't have
    /// the key.
    Field(Value, Label),
    Alternative(Label),
    /// Stuck unless consumed as the function side of an `Application`
    /// whose argument is a saturated `Alternative` (spec section 4.4,
    /// rule 1).
    Merge(Value),
    /// Stuck conditional: predicate wasn't a literal `Bool`.
    If(Value, Value, Value),
    Scalar(Scalar),
    /// Stuck operator application.
    Operator(Value, BinOp, Value),
    Builtin(Builtin),
}

/// A lambda bundled with the environment captured at its definition site
/// (spec section 3.2/4.2). `body` is the *surface* expression — closures
/// don't pre-evaluate their body; instantiation does that on demand.
#[derive(Clone, Debug)]
pub struct Closure {
    pub param_name: Label,
    pub env: Env,
    pub body: Rc<Expr>,
}

impl Value {
    pub fn new(kind: ValueKind) -> Self {
        Value(Rc::new(kind))
    }

    pub fn kind(&self) -> &ValueKind {
        &self.0
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

/// Compares up to the structure produced by `evaluate`/`quote` — two
/// `Lambda`s compare equal iff applying both to the same fresh variable
/// gives equal results (alpha-equivalence), exactly the teacher's own
/// `impl PartialEq for Closure` (`value.rs`, using `NzVar::fresh()`).
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        *self.kind() == *other.kind()
    }
}
impl Eq for Value {}

impl PartialEq for ValueKind {
    fn eq(&self, other: &Self) -> bool {
        use ValueKind::*;
        match (self, other) {
            (Variable(n1, i1), Variable(n2, i2)) => n1 == n2 && i1 == i2,
            (Lambda(c1), Lambda(c2)) => c1 == c2,
            (Application(f1, x1), Application(f2, x2)) => f1 == f2 && x1 == x2,
            (List(xs1), List(xs2)) => xs1 == xs2,
            (Record(fs1), Record(fs2)) => fs1 == fs2,
            (Field(r1, k1), Field(r2, k2)) => r1 == r2 && k1 == k2,
            (Alternative(n1), Alternative(n2)) => n1 == n2,
            (Merge(v1), Merge(v2)) => v1 == v2,
            (If(p1, t1, e1), If(p2, t2, e2)) => p1 == p2 && t1 == t2 && e1 == e2,
            (Scalar(s1), Scalar(s2)) => s1 == s2,
            (Operator(l1, o1, r1), Operator(l2, o2, r2)) => l1 == l2 && o1 == o2 && r1 == r2,
            (Builtin(b1), Builtin(b2)) => b1 == b2,
            _ => false,
        }
    }
}

static ALPHA_PROBE_COUNTER: AtomicU64 = AtomicU64::new(0);

/// A variable identity guaranteed not to collide with any name already in
/// scope, used only to compare closures for alpha-equivalence. Distinct
/// from [`crate::quote::fresh`], which picks a deterministic, *reused*
/// name so readback output stays readable; this one only needs to be
/// unique, never shown to a user.
fn alpha_probe() -> Value {
    let id = ALPHA_PROBE_COUNTER.fetch_add(1, Ordering::Relaxed);
    Value::new(ValueKind::Variable(Label::from(format!("$alpha{}", id)), 0))
}

impl Closure {
    /// Closure instantiation (spec section 4.2, component C4): the only
    /// way a closure body becomes a value.
    pub fn instantiate(&self, arg: Value) -> Value {
        let env = self.env.insert(self.param_name.clone(), arg);
        crate::eval::evaluate(&env, &self.body)
    }
}

impl PartialEq for Closure {
    fn eq(&self, other: &Self) -> bool {
        let probe = alpha_probe();
        self.instantiate(probe.clone()) == other.instantiate(probe)
    }
}
impl Eq for Closure {}
