//! The one place this crate returns a `Result`: resolving an embed
//! payload from outside the core (spec section 6.3). Normalization
//! itself is total and never produces one (spec section 7).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("embedded value {0:?} could not be resolved")]
    NotFound(String),
}
