//! The surface expression tree: the input to `evaluate` and the output of
//! `quote` (spec section 3.1).

use std::fmt;
use std::rc::Rc;

use crate::label::Label;
use crate::scalar::{BinOp, Builtin, Scalar};
use crate::span::Span;
use crate::value::Value;

/// A surface expression node: an opaque location tag plus a variant.
///
/// `PartialEq` ignores nothing — including `span` — so two expressions
/// built from different source positions compare unequal even with
/// identical `kind`s. Tests that want structural-only comparison (the
/// round-trip law in spec section 8) build both sides with
/// `Span::Artificial`, which `quote` always produces, so this doesn't get
/// in the way there.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub span: Span,
    pub kind: ExprKind,
}

/// A non-empty, order-sensitive `Let` binding. Each binding's `value` may
/// reference only earlier bindings in the same `Let` (spec section 4.4) —
/// the crate relies on callers to respect that; the core doesn't enforce
/// it since it assumes well-formed input (spec section 1).
#[derive(Debug, Clone, PartialEq)]
pub struct Binding {
    pub name: Label,
    /// Type ascription, erased during evaluation (spec section 3.1).
    pub annotation: Option<Rc<Expr>>,
    pub value: Rc<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// `index` is the occurrence selector: 0 = innermost binding of `name`.
    Variable(Label, u64),
    Lambda(Label, Rc<Expr>),
    Application(Rc<Expr>, Rc<Expr>),
    Annotation(Rc<Expr>, Rc<Expr>),
    Let(Vec<Binding>, Rc<Expr>),
    List(Vec<Expr>),
    Record(Vec<(Label, Expr)>),
    Field(Rc<Expr>, Label),
    Alternative(Label),
    Merge(Rc<Expr>),
    If(Rc<Expr>, Rc<Expr>, Rc<Expr>),
    Scalar(Scalar),
    Operator(Rc<Expr>, BinOp, Rc<Expr>),
    Builtin(Builtin),
    Embed(EmbedNode),
}

/// The `Embed` leaf (spec section 6.3): a pluggable point for externally
/// resolved values. The embed contract only ever needs one thing out of
/// the payload — a pre-evaluated `Value` — so rather than threading a
/// generic payload type parameter through `Expr`/`Value` (and every
/// function over them), the payload is a trait object. See `Embedded`.
#[derive(Clone)]
pub struct EmbedNode(pub Rc<dyn Embedded>);

impl fmt::Debug for EmbedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EmbedNode").field(&self.0.describe()).finish()
    }
}

/// Two embeds are equal only if they're the same plugged-in payload
/// (reference identity) — there's no general way to compare arbitrary
/// trait objects structurally, and the core never needs to.
impl PartialEq for EmbedNode {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Something an `Embed` leaf can carry: a value already computed outside
/// the core (an import result, an effectful primitive's output, ...).
///
/// `evaluate` calls only [`Embedded::value`]; `describe` exists purely so
/// `EmbedNode` can implement `Debug` without requiring every payload type
/// to.
pub trait Embedded {
    fn value(&self) -> Value;
    fn describe(&self) -> String {
        "<embed>".to_string()
    }
}

impl Expr {
    pub fn new(span: Span, kind: ExprKind) -> Self {
        Expr { span, kind }
    }

    /// Convenience constructor: builds a node with an `Artificial` span.
    /// Handy for tests and for callers assembling expressions
    /// programmatically rather than through an (out-of-scope) parser.
    pub fn synthetic(kind: ExprKind) -> Self {
        Expr::new(Span::Artificial, kind)
    }

    pub fn variable(name: impl Into<Label>, index: u64) -> Self {
        Expr::synthetic(ExprKind::Variable(name.into(), index))
    }

    pub fn lambda(name: impl Into<Label>, body: Expr) -> Self {
        Expr::synthetic(ExprKind::Lambda(name.into(), Rc::new(body)))
    }

    pub fn apply(func: Expr, arg: Expr) -> Self {
        Expr::synthetic(ExprKind::Application(Rc::new(func), Rc::new(arg)))
    }

    pub fn apply_all(func: Expr, args: impl IntoIterator<Item = Expr>) -> Self {
        args.into_iter().fold(func, Expr::apply)
    }

    pub fn annotate(expr: Expr, ty: Expr) -> Self {
        Expr::synthetic(ExprKind::Annotation(Rc::new(expr), Rc::new(ty)))
    }

    pub fn let_in(bindings: Vec<Binding>, body: Expr) -> Self {
        Expr::synthetic(ExprKind::Let(bindings, Rc::new(body)))
    }

    pub fn list(elements: impl IntoIterator<Item = Expr>) -> Self {
        Expr::synthetic(ExprKind::List(elements.into_iter().collect()))
    }

    pub fn record(fields: impl IntoIterator<Item = (Label, Expr)>) -> Self {
        Expr::synthetic(ExprKind::Record(fields.into_iter().collect()))
    }

    pub fn field(record: Expr, key: impl Into<Label>) -> Self {
        Expr::synthetic(ExprKind::Field(Rc::new(record), key.into()))
    }

    pub fn alternative(name: impl Into<Label>) -> Self {
        Expr::synthetic(ExprKind::Alternative(name.into()))
    }

    pub fn merge(record: Expr) -> Self {
        Expr::synthetic(ExprKind::Merge(Rc::new(record)))
    }

    pub fn if_then_else(pred: Expr, then: Expr, else_: Expr) -> Self {
        Expr::synthetic(ExprKind::If(Rc::new(pred), Rc::new(then), Rc::new(else_)))
    }

    pub fn scalar(s: Scalar) -> Self {
        Expr::synthetic(ExprKind::Scalar(s))
    }

    pub fn natural(n: u64) -> Self {
        Expr::scalar(Scalar::Natural(n))
    }

    pub fn boolean(b: bool) -> Self {
        Expr::scalar(Scalar::Bool(b))
    }

    pub fn text(s: impl Into<String>) -> Self {
        Expr::scalar(Scalar::Text(s.into()))
    }

    pub fn operator(l: Expr, op: BinOp, r: Expr) -> Self {
        Expr::synthetic(ExprKind::Operator(Rc::new(l), op, Rc::new(r)))
    }

    pub fn builtin(b: Builtin) -> Self {
        Expr::synthetic(ExprKind::Builtin(b))
    }
}

impl Binding {
    pub fn new(name: impl Into<Label>, value: Expr) -> Self {
        Binding { name: name.into(), annotation: None, value: Rc::new(value) }
    }

    pub fn annotated(name: impl Into<Label>, annotation: Expr, value: Expr) -> Self {
        Binding {
            name: name.into(),
            annotation: Some(Rc::new(annotation)),
            value: Rc::new(value),
        }
    }
}
