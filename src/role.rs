//! Named protocol participants.

use std::fmt;

use crate::expr::Expr;

/// A named participant, optionally parameterised by an index expression to
/// denote a family of participants (e.g. `Worker[i]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Role {
    pub name: String,
    pub param: Option<Expr>,
}

impl Role {
    pub fn new(name: impl Into<String>) -> Role {
        Role { name: name.into(), param: None }
    }

    pub fn with_param(name: impl Into<String>, param: Expr) -> Role {
        Role { name: name.into(), param: Some(param) }
    }

    /// Channel identity: two roles denote the same channel iff their names
    /// are equal. Parameter expressions are ignored here, though they are
    /// retained for diagnostics and structural equality ([`role_struct_eq`]).
    pub fn same_channel(&self, other: &Role) -> bool {
        self.name == other.name
    }
}

/// Structural equality used by the comparator's payload table: names must
/// match, and when both roles are parameterised their parameters must be
/// structurally equal *after* [`Expr::evaluate`]. A role with a parameter
/// never structurally equals one without.
pub fn role_struct_eq(a: &Role, b: &Role) -> bool {
    if a.name != b.name {
        return false;
    }
    match (&a.param, &b.param) {
        (None, None) => true,
        (Some(pa), Some(pb)) => pa.clone().evaluate().ok() == pb.clone().evaluate().ok(),
        _ => false,
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.param {
            Some(p) => write!(f, "{}[{}]", self.name, p.display_evaluated()),
            None => write!(f, "{}", self.name),
        }
    }
}

/// A message signature: an optional operator plus a payload type description.
/// Equality is exactly field-wise equality (payloads equal, and either both
/// operators absent or both present and equal), which `#[derive(PartialEq)]`
/// already gives on `(Option<String>, String)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MsgSig {
    pub op: Option<String>,
    pub payload: String,
}

impl MsgSig {
    pub fn new(payload: impl Into<String>) -> MsgSig {
        MsgSig { op: None, payload: payload.into() }
    }

    pub fn with_op(op: impl Into<String>, payload: impl Into<String>) -> MsgSig {
        MsgSig { op: Some(op.into()), payload: payload.into() }
    }
}

impl fmt::Display for MsgSig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.op {
            Some(op) => write!(f, "{{ op: {op}, payload: {} }}", self.payload),
            None => write!(f, "{{ op: -, payload: {} }}", self.payload),
        }
    }
}
