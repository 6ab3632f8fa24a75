use pretty_assertions::assert_eq;

use reductor_core::{evaluate, quote, BinOp, Builtin, Env, Expr, Label, Scalar};

fn norm(expr: &Expr) -> Expr {
    quote(&[], &evaluate(&Env::new(), expr))
}

#[test]
fn identity_applied_to_a_literal() {
    let expr = Expr::apply(Expr::lambda("x", Expr::variable("x", 0)), Expr::natural(42));
    assert_eq!(norm(&expr), Expr::natural(42));
}

#[test]
fn list_length() {
    let expr = Expr::apply(
        Expr::builtin(Builtin::ListLength),
        Expr::list([Expr::natural(1), Expr::natural(2), Expr::natural(3)]),
    );
    assert_eq!(norm(&expr), Expr::natural(3));
}

#[test]
fn list_map_increments_every_element() {
    let succ = Expr::lambda("n", Expr::operator(Expr::variable("n", 0), BinOp::Plus, Expr::natural(1)));
    let expr = Expr::apply_all(
        Expr::builtin(Builtin::ListMap),
        [succ, Expr::list([Expr::natural(1), Expr::natural(2)])],
    );
    assert_eq!(norm(&expr), Expr::list([Expr::natural(2), Expr::natural(3)]));
}

#[test]
fn list_fold_sums_elements() {
    let cons = Expr::lambda(
        "e",
        Expr::lambda("a", Expr::operator(Expr::variable("e", 0), BinOp::Plus, Expr::variable("a", 0))),
    );
    let expr = Expr::apply_all(
        Expr::builtin(Builtin::ListFold),
        [Expr::list([Expr::natural(1), Expr::natural(2), Expr::natural(3)]), cons, Expr::natural(0)],
    );
    assert_eq!(norm(&expr), Expr::natural(6));
}

#[test]
fn natural_fold_counts_up() {
    let succ = Expr::lambda("n", Expr::operator(Expr::variable("n", 0), BinOp::Plus, Expr::natural(1)));
    let expr = Expr::apply_all(Expr::builtin(Builtin::NaturalFold), [Expr::natural(3), succ, Expr::natural(0)]);
    assert_eq!(norm(&expr), Expr::natural(3));
}

#[test]
fn merge_selects_the_matching_alternative() {
    let record = Expr::record([
        (Label::from("Left"), Expr::lambda("x", Expr::variable("x", 0))),
        (
            Label::from("Right"),
            Expr::lambda("x", Expr::operator(Expr::variable("x", 0), BinOp::Plus, Expr::natural(1))),
        ),
    ]);
    let expr = Expr::apply(Expr::merge(record), Expr::apply(Expr::alternative("Left"), Expr::natural(42)));
    assert_eq!(norm(&expr), Expr::natural(42));
}

#[test]
fn integer_even_and_odd() {
    let four = Expr::scalar(Scalar::Integer(4));
    let seven = Expr::scalar(Scalar::Integer(7));
    assert_eq!(norm(&Expr::apply(Expr::builtin(Builtin::IntegerEven), four)), Expr::boolean(true));
    assert_eq!(norm(&Expr::apply(Expr::builtin(Builtin::IntegerOdd), seven)), Expr::boolean(true));
}

#[test]
fn double_show_renders_a_decimal_point() {
    let expr = Expr::apply(Expr::builtin(Builtin::DoubleShow), Expr::scalar(Scalar::Double(3.0.into())));
    assert_eq!(norm(&expr), Expr::text("3.0"));
}

#[test]
fn field_projection() {
    let record = Expr::record([(Label::from("a"), Expr::natural(1)), (Label::from("b"), Expr::natural(2))]);
    assert_eq!(norm(&Expr::field(record, "a")), Expr::natural(1));
}

#[test]
fn if_then_else_on_a_literal_predicate() {
    let expr = Expr::if_then_else(Expr::boolean(true), Expr::text("yes"), Expr::text("no"));
    assert_eq!(norm(&expr), Expr::text("yes"));
}

#[test]
fn lambda_round_trips_through_quote() {
    let expr = Expr::lambda("x", Expr::variable("x", 0));
    assert_eq!(norm(&expr), expr);
}

#[test]
fn a_free_variable_survives_normalization() {
    let expr = Expr::variable("y", 0);
    assert_eq!(norm(&expr), expr);
}

#[test]
fn an_ill_typed_application_gets_stuck_instead_of_erroring() {
    // `true` applied to an argument isn't a lambda: no δ-rule and no
    // β-reduction apply, so this normalizes to a stuck application
    // rather than panicking or returning an error (spec section 7).
    let expr = Expr::apply(Expr::boolean(true), Expr::natural(1));
    assert_eq!(norm(&expr), expr);
}

#[test]
fn let_bindings_shadow_in_order() {
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
fn an_inner_occurrence_reaches_past_the_new_binding() {
    let expr = Expr::let_in(
        vec![
            reductor_core::Binding::new("x", Expr::natural(1)),
            reductor_core::Binding::new("x", Expr::natural(2)),
        ],
        Expr::variable("x", 1),
    );
    assert_eq!(norm(&expr), Expr::natural(1));
}

#[test]
fn annotations_are_erased() {
    let expr = Expr::annotate(Expr::natural(1), Expr::text("Natural"));
    assert_eq!(norm(&expr), Expr::natural(1));
}

#[test]
fn an_annotated_let_binding_erases_its_annotation_too() {
    let expr = Expr::let_in(
        vec![reductor_core::Binding::annotated("x", Expr::text("Natural"), Expr::natural(1))],
        Expr::variable("x", 0),
    );
    assert_eq!(norm(&expr), Expr::natural(1));
}

#[test]
fn an_occurrence_selector_past_the_last_matching_binding_is_free() {
    // Only one binding of "y" is in scope; asking for the 2nd-outward
    // occurrence runs off the end of the environment, so this should
    // read back as the free variable one level further out than the
    // single bound occurrence, not two levels out.
    let env = Env::new().insert(Label::from("y"), evaluate(&Env::new(), &Expr::natural(1)));
    let value = env.lookup(&Label::from("y"), 1);
    assert_eq!(quote(&[], &value), Expr::variable("y", 0));
}

