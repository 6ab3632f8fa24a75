/// A thin `f64` wrapper giving scalars a total `Eq`, comparing bit
/// patterns rather than IEEE `==`. Named after the teacher's own
/// `NaiveDouble`, used for the same reason: `Value` and `Scalar` need to
/// support equality (tests compare normalized values) and plain `f64`
/// can't provide it.
#[derive(Debug, Clone, Copy)]
pub struct NaiveDouble(pub f64);

impl PartialEq for NaiveDouble {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}
impl Eq for NaiveDouble {}

impl From<f64> for NaiveDouble {
    fn from(d: f64) -> Self {
        NaiveDouble(d)
    }
}

/// The scalar leaf types (spec section 3.1).
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Double(NaiveDouble),
    Integer(i64),
    Natural(u64),
    Text(String),
    Bool(bool),
    Null,
}

/// Binary operators (spec section 3.1, `Operator`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    And,
    Or,
    Plus,
    Times,
    Append,
}

/// Built-in functions (spec section 3.1, `Builtin`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    DoubleShow,
    ListFold,
    ListLength,
    ListMap,
    IntegerEven,
    IntegerOdd,
    NaturalFold,
}
