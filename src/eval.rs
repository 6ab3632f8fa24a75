//! Evaluation (spec section 4, component C5): surface `Expr` plus `Env`
//! to `Value`. Total — every shape of input produces some `Value`, stuck
//! nodes included (spec section 1, section 7).

use crate::apply::{apply, spine};
use crate::builtins::{bool_value, numeric_as_i128, render_numeric_scalar};
use crate::env::Env;
use crate::scalar::{BinOp, Scalar};
use crate::surface::{Expr, ExprKind};
use crate::value::{Closure, Value, ValueKind};

pub fn evaluate(env: &Env, expr: &Expr) -> Value {
    match &expr.kind {
        ExprKind::Variable(name, index) => env.lookup(name, *index),
        ExprKind::Lambda(name, body) => Value::new(ValueKind::Lambda(Closure {
            param_name: name.clone(),
            env: env.clone(),
            body: body.clone(),
        })),
        ExprKind::Application(f, x) => {
            let f = evaluate(env, f);
            let x = evaluate(env, x);
            apply_delta(f, x)
        }
        ExprKind::Annotation(inner, _ty) => evaluate(env, inner),
        ExprKind::Let(bindings, body) => {
            let mut env = env.clone();
            for binding in bindings {
                let value = evaluate(&env, &binding.value);
                env = env.insert(binding.name.clone(), value);
            }
            evaluate(&env, body)
        }
        ExprKind::List(elements) => {
            Value::new(ValueKind::List(elements.iter().map(|e| evaluate(env, e)).collect()))
        }
        ExprKind::Record(fields) => Value::new(ValueKind::Record(
            fields.iter().map(|(k, v)| (k.clone(), evaluate(env, v))).collect(),
        )),
        ExprKind::Field(record, key) => {
            let record = evaluate(env, record);
            match record.kind() {
                ValueKind::Record(fields) => match fields.iter().find(|(k, _)| k == key) {
                    Some((_, v)) => v.clone(),
                    None => Value::new(ValueKind::Field(record.clone(), key.clone())),
                },
                _ => Value::new(ValueKind::Field(record, key.clone())),
            }
        }
        ExprKind::Alternative(name) => Value::new(ValueKind::Alternative(name.clone())),
        ExprKind::Merge(record) => Value::new(ValueKind::Merge(evaluate(env, record))),
        ExprKind::If(pred, then, else_) => {
            let pred = evaluate(env, pred);
            match pred.kind() {
                ValueKind::Scalar(Scalar::Bool(true)) => evaluate(env, then),
                ValueKind::Scalar(Scalar::Bool(false)) => evaluate(env, else_),
                _ => Value::new(ValueKind::If(pred, evaluate(env, then), evaluate(env, else_))),
            }
        }
        ExprKind::Scalar(s) => Value::new(ValueKind::Scalar(s.clone())),
        ExprKind::Operator(l, op, r) => {
            let l = evaluate(env, l);
            let r = evaluate(env, r);
            eval_operator(*op, l, r)
        }
        ExprKind::Builtin(b) => Value::new(ValueKind::Builtin(*b)),
        ExprKind::Embed(node) => node.0.value(),
    }
}

/// Applies `f` to `x`, first giving every δ-rule in spec section 4.4 a
/// chance to fire, falling back to plain β-reduction/stuck application
/// (component C6) when none match.
fn apply_delta(f: Value, x: Value) -> Value {
    if let Some(reduced) = try_delta(&f, &x) {
        return reduced;
    }
    apply(f, x)
}

/// Tries each δ-rule against the spine of `Application(f, x)` (the
/// innermost, just-built application). Peeling the spine of `f` alone and
/// folding `x` onto it gives the view needed to recognize a saturated
/// builtin call without needing to re-walk from the top each time a new
/// argument arrives.
fn try_delta(f: &Value, x: &Value) -> Option<Value> {
    let (head, mut args) = spine(f);
    args.push(x);

    match head.kind() {
        ValueKind::Merge(record) => {
            // rule 1: merge {...} (Alternative "k" payload) applies the
            // handler for "k" to the payload. A bare, unapplied
            // `Alternative` never reaches here as `x` itself — a
            // payload-bearing alternative is `Application(Alternative("k"),
            // payload)`, so that's the shape to destructure.
            let tag_and_payload = args.first()?;
            if let ValueKind::Application(tag, payload) = tag_and_payload.kind() {
                if let ValueKind::Alternative(name) = tag.kind() {
                    if let ValueKind::Record(fields) = record.kind() {
                        let result = fields
                            .iter()
                            .find(|(k, _)| k == name)
                            .map(|(_, handler)| apply_delta(handler.clone(), payload.clone()));
                        if result.is_some() {
                            log::trace!("delta rule fired: merge selected alternative {:?}", name);
                        }
                        return result;
                    }
                }
            }
            None
        }
        ValueKind::Builtin(b) => delta_builtin(*b, &args),
        _ => None,
    }
}

fn delta_builtin(builtin: crate::scalar::Builtin, args: &[&Value]) -> Option<Value> {
    let result = delta_builtin_inner(builtin, args);
    if result.is_some() {
        log::trace!("delta rule fired: {:?}", builtin);
    }
    result
}

fn delta_builtin_inner(builtin: crate::scalar::Builtin, args: &[&Value]) -> Option<Value> {
    use crate::scalar::Builtin::*;
    match builtin {
        // rule 2: List/fold list cons nil folds right-to-left application
        // of cons onto each element, accumulating from nil.
        ListFold => {
            let [list, cons, nil] = args else { return None };
            let ValueKind::List(elements) = list.kind() else { return None };
            let mut acc = (*nil).clone();
            for element in elements {
                acc = apply_delta(apply_delta((*cons).clone(), element.clone()), acc);
            }
            Some(acc)
        }
        // rule 3: List/length.
        ListLength => {
            let [list] = args else { return None };
            let ValueKind::List(elements) = list.kind() else { return None };
            Some(Value::new(ValueKind::Scalar(Scalar::Natural(elements.len() as u64))))
        }
        // List/map g list.
        ListMap => {
            let [g, list] = args else { return None };
            let ValueKind::List(elements) = list.kind() else { return None };
            Some(Value::new(ValueKind::List(
                elements.iter().map(|e| apply_delta((*g).clone(), e.clone())).collect(),
            )))
        }
        // rule 4: Double/show.
        DoubleShow => {
            let [v] = args else { return None };
            render_numeric_scalar(v).map(|s| Value::new(ValueKind::Scalar(Scalar::Text(s))))
        }
        // rule 5/6: Integer/even, Integer/odd.
        IntegerEven => {
            let [v] = args else { return None };
            numeric_as_i128(v).map(|n| bool_value(n % 2 == 0))
        }
        IntegerOdd => {
            let [v] = args else { return None };
            numeric_as_i128(v).map(|n| bool_value(n % 2 != 0))
        }
        // Natural/fold n succ zero applies succ to zero n times.
        NaturalFold => {
            let [n, succ, zero] = args else { return None };
            let ValueKind::Scalar(Scalar::Natural(n)) = n.kind() else { return None };
            let mut acc = (*zero).clone();
            for _ in 0..*n {
                acc = apply_delta((*succ).clone(), acc);
            }
            Some(acc)
        }
    }
}

/// Operator semantics (spec section 4.4, rules 9-13): each operator first
/// tries its neutral-element shortcuts, checking the left operand before
/// the right wherever both could apply, then falls back to a literal
/// computation, then to a stuck node.
fn eval_operator(op: BinOp, l: Value, r: Value) -> Value {
    match op {
        BinOp::And => match (bool_lit(&l), bool_lit(&r)) {
            (Some(false), _) => bool_value(false),
            (_, Some(false)) => bool_value(false),
            (Some(true), _) => r,
            (_, Some(true)) => l,
            _ => Value::new(ValueKind::Operator(l, op, r)),
        },
        BinOp::Or => match (bool_lit(&l), bool_lit(&r)) {
            (Some(true), _) => bool_value(true),
            (_, Some(true)) => bool_value(true),
            (Some(false), _) => r,
            (_, Some(false)) => l,
            _ => Value::new(ValueKind::Operator(l, op, r)),
        },
        BinOp::Plus => match (natural_lit(&l), natural_lit(&r)) {
            (Some(0), _) => r,
            (_, Some(0)) => l,
            (Some(a), Some(b)) => Value::new(ValueKind::Scalar(Scalar::Natural(a + b))),
            _ => Value::new(ValueKind::Operator(l, op, r)),
        },
        BinOp::Times => match (natural_lit(&l), natural_lit(&r)) {
            (Some(0), _) => Value::new(ValueKind::Scalar(Scalar::Natural(0))),
            (_, Some(0)) => Value::new(ValueKind::Scalar(Scalar::Natural(0))),
            (Some(1), _) => r,
            (_, Some(1)) => l,
            (Some(a), Some(b)) => Value::new(ValueKind::Scalar(Scalar::Natural(a * b))),
            _ => Value::new(ValueKind::Operator(l, op, r)),
        },
        BinOp::Append => match (text_lit(&l), text_lit(&r)) {
            (Some(a), _) if a.is_empty() => r,
            (_, Some(b)) if b.is_empty() => l,
            (Some(a), Some(b)) => Value::new(ValueKind::Scalar(Scalar::Text(a + &b))),
            _ => Value::new(ValueKind::Operator(l, op, r)),
        },
    }
}

fn bool_lit(v: &Value) -> Option<bool> {
    match v.kind() {
        ValueKind::Scalar(Scalar::Bool(b)) => Some(*b),
        _ => None,
    }
}

fn natural_lit(v: &Value) -> Option<u64> {
    match v.kind() {
        ValueKind::Scalar(Scalar::Natural(n)) => Some(*n),
        _ => None,
    }
}

fn text_lit(v: &Value) -> Option<String> {
    match v.kind() {
        ValueKind::Scalar(Scalar::Text(s)) => Some(s.clone()),
        _ => None,
    }
}
