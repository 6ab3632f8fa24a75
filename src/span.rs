use std::rc::Rc;

/// A source location, opaque to the normalization core (spec section 3.1):
/// the core threads it through unchanged and never inspects its contents.
///
/// Mirrors the teacher's own `Span`/`Span::Artificial` split: real spans
/// carry whatever the (external, out-of-scope) parser attached, while
/// `Artificial` marks nodes synthesized by the core itself — every node
/// `quote` produces is `Artificial`, since readback has no source position
/// to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    /// Opaque parser-supplied location tag. The core never matches on the
    /// contents, only threads it through.
    Sourced(Rc<str>),
    /// Produced by the core, not the parser.
    Artificial,
}

impl Default for Span {
    fn default() -> Self {
        Span::Artificial
    }
}
