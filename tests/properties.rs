use proptest::prelude::*;

use reductor_core::{evaluate, quote, BinOp, Env, Expr, Label};

fn norm(expr: &Expr) -> Expr {
    quote(&[], &evaluate(&Env::new(), expr))
}

/// Closed, already-normal scalar expressions: a small enough universe that
/// the identity/round-trip laws below stay meaningful without needing a
/// full generator for arbitrary well-typed terms.
fn closed_scalar() -> impl Strategy<Value = Expr> {
    prop_oneof![
        any::<u16>().prop_map(|n| Expr::natural(n as u64)),
        any::<bool>().prop_map(Expr::boolean),
        "[a-z]{0,8}".prop_map(Expr::text),
    ]
}

proptest! {
    /// Law 1 (identity on normal forms): normalizing an already-normal
    /// scalar is a no-op.
    #[test]
    fn evaluate_then_quote_is_identity_on_scalars(e in closed_scalar()) {
        prop_assert_eq!(norm(&e), e);
    }

    /// Normalizing twice gives the same result as normalizing once —
    /// `evaluate`/`quote` land on a fixed point immediately.
    #[test]
    fn normalization_is_idempotent(e in closed_scalar()) {
        let once = norm(&e);
        let twice = norm(&once);
        prop_assert_eq!(once, twice);
    }

    /// Law: `x + 0` and `0 + x` both normalize to `x` for a literal `x`.
    #[test]
    fn plus_zero_is_identity(n in any::<u16>()) {
        let x = Expr::natural(n as u64);
        let lhs = Expr::operator(x.clone(), BinOp::Plus, Expr::natural(0));
        let rhs = Expr::operator(Expr::natural(0), BinOp::Plus, x.clone());
        prop_assert_eq!(norm(&lhs), x.clone());
        prop_assert_eq!(norm(&rhs), x);
    }

    /// Law: `"" ++ s` and `s ++ ""` both normalize to `s`.
    #[test]
    fn append_empty_is_identity(s in "[a-z]{0,8}") {
        let x = Expr::text(s);
        let lhs = Expr::operator(x.clone(), BinOp::Append, Expr::text(""));
        let rhs = Expr::operator(Expr::text(""), BinOp::Append, x.clone());
        prop_assert_eq!(norm(&lhs), x.clone());
        prop_assert_eq!(norm(&rhs), x);
    }

    /// Beta law: applying a lambda that just returns its parameter to a
    /// literal gives back that literal, for any scalar.
    #[test]
    fn identity_lambda_is_a_no_op(e in closed_scalar()) {
        let applied = Expr::apply(Expr::lambda("x", Expr::variable("x", 0)), e.clone());
        prop_assert_eq!(norm(&applied), e);
    }

    /// An operator stuck on a free variable stays stuck, and quoting it
    /// back doesn't lose or reorder the operands.
    #[test]
    fn stuck_operator_on_a_free_variable_is_preserved(n in any::<u16>()) {
        let expr = Expr::operator(Expr::variable("y", 0), BinOp::Plus, Expr::natural((n as u64) + 1));
        prop_assert_eq!(norm(&expr), expr);
    }
}

#[test]
fn shadowing_picks_the_nearer_binding() {
    let expr = Expr::let_in(
        vec![
            reductor_core::Binding::new("x", Expr::natural(1)),
            reductor_core::Binding::new("x", Expr::natural(2)),
        ],
        Expr::variable("x", 0),
    );
    assert_eq!(norm(&expr), Expr::natural(2));
}

#[test]
fn quoting_a_free_variable_is_stable_regardless_of_unrelated_scope() {
    let free = reductor_core::evaluate(&Env::new(), &Expr::variable("y", 0));
    let a = quote(&[Label::from("z")], &free);
    let b = quote(&[Label::from("z"), Label::from("z")], &free);
    assert_eq!(a, Expr::variable("y", 0));
    assert_eq!(b, Expr::variable("y", 0));
}
