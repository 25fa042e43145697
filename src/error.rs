//! Error taxonomy for the crate.
//!
//! Three independent domains, modeled the way `thiserror` is used throughout
//! the rest of this codebase's sibling crates: one enum per failure domain,
//! `Debug` plus a human `#[error("...")]` message carrying the offending
//! values, nothing hidden behind `Box<dyn Error>`.

use strum::EnumIs;
use thiserror::Error;

/// Failures from [`crate::expr::Expr::evaluate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("division by zero while evaluating `{lhs} / {rhs}`")]
    DivisionByZero { lhs: i64, rhs: i64 },

    #[error("modulo by zero while evaluating `{lhs} % {rhs}`")]
    ModuloByZero { lhs: i64, rhs: i64 },

    #[error("shift by negative count {count}")]
    NegativeShift { count: i64 },
}

/// Structural well-formedness violations caught by [`crate::protocol::Tree::validate`].
///
/// These are the invariant violations a well-formed tree must never exhibit.
/// Unlike the reference implementation, which treats this class as a fatal
/// abort, they surface here as an ordinary `Result` — the caller decides
/// whether to `.expect()` at a boundary or recover.
#[derive(Debug, Clone, PartialEq, Eq, Error, EnumIs)]
pub enum StructuralError {
    #[error("`continue {label}` has no enclosing `recur {label}`")]
    UnboundContinue { label: String },

    #[error("role `{name}` is declared more than once")]
    DuplicateRole { name: String },

    #[error("node references undeclared role `{name}`")]
    UnknownRole { name: String },

    #[error("protocol `{name}` has kind {kind:?} but no endpoint role was set")]
    MissingMyrole { name: String, kind: &'static str },
}

/// Failures from the endpoint I/O boundary ([`crate::io`]).
#[derive(Debug, Error)]
pub enum IoError {
    #[error("send to `{peer}` failed: {source}")]
    Send {
        peer: String,
        #[source]
        source: std::io::Error,
    },

    #[error("recv from `{peer}` failed: {source}")]
    Recv {
        peer: String,
        #[source]
        source: std::io::Error,
    },

    #[error("barrier at group `{group}` failed: {reason}")]
    Barrier { group: String, reason: String },
}
