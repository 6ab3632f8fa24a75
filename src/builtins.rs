//! Small helpers shared by the δ-rules in `eval::try_delta` (spec section
//! 4.4): reading a numeric scalar regardless of whether it's `Integer` or
//! `Natural`, and rendering one as text for `Builtin::DoubleShow`.

use crate::scalar::Scalar;
use crate::value::{Value, ValueKind};

pub fn bool_value(b: bool) -> Value {
    Value::new(ValueKind::Scalar(Scalar::Bool(b)))
}

/// `Integer/even` and `Integer/odd` (spec section 4.4, rules 5 and 6)
/// apply to either scalar kind; this widens both to `i128` so a `Natural`
/// too large for `i64` still round-trips.
pub fn numeric_as_i128(v: &Value) -> Option<i128> {
    match v.kind() {
        ValueKind::Scalar(Scalar::Integer(n)) => Some(*n as i128),
        ValueKind::Scalar(Scalar::Natural(n)) => Some(*n as i128),
        _ => None,
    }
}

/// `Double/show` (spec section 4.4, rule 4). Integers and naturals render
/// as plain digits (with an explicit sign for `Integer`); doubles always
/// show a decimal point or exponent, even for whole numbers, so the
/// rendering is unambiguously a `Double` and not a `Natural` that merely
/// looks like one.
pub fn render_numeric_scalar(v: &Value) -> Option<String> {
    match v.kind() {
        ValueKind::Scalar(Scalar::Natural(n)) => Some(n.to_string()),
        ValueKind::Scalar(Scalar::Integer(n)) => {
            Some(if *n >= 0 { format!("+{}", n) } else { n.to_string() })
        }
        ValueKind::Scalar(Scalar::Double(d)) => Some(render_double(d.0)),
        _ => None,
    }
}

pub fn render_double(d: f64) -> String {
    if d.is_nan() {
        "NaN".to_string()
    } else if d.is_infinite() {
        if d > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() }
    } else if d == d.trunc() && d.abs() < 1e15 {
        format!("{:.1}", d)
    } else {
        let s = format!("{}", d);
        if s.contains('.') || s.contains('e') || s.contains('E') {
            s
        } else {
            format!("{}.0", s)
        }
    }
}
