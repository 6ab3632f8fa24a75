//! Quoting (readback, spec section 5, component C8): `Value` back to
//! surface `Expr`, the inverse direction of `evaluate`.

use std::rc::Rc;

use crate::label::Label;
use crate::surface::{Expr, ExprKind};
use crate::value::{Value, ValueKind};

/// Picks the occurrence-selector index a variable named `name` would need
/// if inserted fresh right now, given the binder names already in scope
/// (spec section 5, component C7): the count of other bindings of that
/// same name already nested around this point.
pub fn fresh(name: &Label, in_scope: &[Label]) -> Value {
    let count = in_scope.iter().filter(|n| *n == name).count() as i64;
    Value::new(ValueKind::Variable(name.clone(), count))
}

/// Converts a value to its surface form (spec section 5). `in_scope`
/// lists binder names from outermost to innermost, matching the order
/// `quote` descends under `Lambda`.
pub fn quote(in_scope: &[Label], value: &Value) -> Expr {
    match value.kind() {
        ValueKind::Variable(name, k) => {
            // Converts the value-side free-variable convention back to
            // the surface's counting-in convention (spec section 3.4):
            // `count` binders of this name are in scope, `k` of them lie
            // strictly outside the one this occurrence refers to.
            let count = in_scope.iter().filter(|n| *n == name).count() as i64;
            let surface_index = count - k - 1;
            let index = u64::try_from(surface_index).expect(
                "quote: variable index went negative — in_scope didn't match the \
                 environment this value was evaluated under",
            );
            Expr::synthetic(ExprKind::Variable(name.clone(), index))
        }
        ValueKind::Lambda(closure) => {
            log::trace!("reading back lambda bound to {:?}", closure.param_name);
            let param = fresh(&closure.param_name, in_scope);
            let mut inner_scope = Vec::with_capacity(in_scope.len() + 1);
            inner_scope.push(closure.param_name.clone());
            inner_scope.extend_from_slice(in_scope);
            let body = quote(&inner_scope, &closure.instantiate(param));
            Expr::synthetic(ExprKind::Lambda(closure.param_name.clone(), Rc::new(body)))
        }
        ValueKind::Application(f, x) => {
            Expr::synthetic(ExprKind::Application(Rc::new(quote(in_scope, f)), Rc::new(quote(in_scope, x))))
        }
        ValueKind::List(elements) => {
            Expr::synthetic(ExprKind::List(elements.iter().map(|e| quote(in_scope, e)).collect()))
        }
        ValueKind::Record(fields) => Expr::synthetic(ExprKind::Record(
            fields.iter().map(|(k, v)| (k.clone(), quote(in_scope, v))).collect(),
        )),
        ValueKind::Field(record, key) => {
            Expr::synthetic(ExprKind::Field(Rc::new(quote(in_scope, record)), key.clone()))
        }
        ValueKind::Alternative(name) => Expr::synthetic(ExprKind::Alternative(name.clone())),
        ValueKind::Merge(record) => {
            Expr::synthetic(ExprKind::Merge(Rc::new(quote(in_scope, record))))
        }
        ValueKind::If(pred, then, else_) => Expr::synthetic(ExprKind::If(
            Rc::new(quote(in_scope, pred)),
            Rc::new(quote(in_scope, then)),
            Rc::new(quote(in_scope, else_)),
        )),
        ValueKind::Scalar(s) => Expr::synthetic(ExprKind::Scalar(s.clone())),
        ValueKind::Operator(l, op, r) => Expr::synthetic(ExprKind::Operator(
            Rc::new(quote(in_scope, l)),
            *op,
            Rc::new(quote(in_scope, r)),
        )),
        ValueKind::Builtin(b) => Expr::synthetic(ExprKind::Builtin(*b)),
    }
}
