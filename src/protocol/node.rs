//! The protocol tree's node shape (component C) and tree builder (component D).

use strum::EnumIs;

use crate::expr::Expr;
use crate::role::{MsgSig, Role};

/// A single tagged node in a protocol tree. Every variant owns an ordered
/// list of children; leaves simply never receive any. `marked` is a
/// diagnostic flag, initially `false`, written only by the comparator
/// (`crate::protocol::compare`).
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub children: Vec<Node>,
    pub marked: bool,
}

/// The tagged variants of a protocol tree node.
#[derive(Debug, Clone, PartialEq, EnumIs)]
pub enum NodeKind {
    /// The top-level body. Exactly one per tree.
    Root,
    /// Global-kind interaction: one sender, one or more receivers.
    SendRecv {
        from: Role,
        to: Vec<Role>,
        msgsig: MsgSig,
        msg_cond: Option<Role>,
        cond: Option<Expr>,
    },
    /// Endpoint-projected send.
    Send {
        to: Vec<Role>,
        msgsig: MsgSig,
        msg_cond: Option<Role>,
        cond: Option<Expr>,
    },
    /// Endpoint-projected receive.
    Recv {
        from: Role,
        msgsig: MsgSig,
        msg_cond: Option<Role>,
        cond: Option<Expr>,
    },
    /// Branch point; each child is a branch.
    Choice { at: String },
    /// Concurrent composition; each child is a thread.
    Parallel,
    /// Named loop; the body is the children.
    Recur { label: String },
    /// Jump back to the enclosing `Recur` with the same label. Leaf.
    Continue { label: String },
    /// Iteration over a parameterised role family; the body is the children.
    For { var: String, range: Expr },
}

impl Node {
    pub fn new(kind: NodeKind) -> Node {
        Node { kind, children: Vec::new(), marked: false }
    }

    /// Appends a child, returning `&mut self` for chained construction.
    pub fn append_child(&mut self, child: Node) -> &mut Self {
        self.children.push(child);
        self
    }

    /// The channel a `Send`/`Recv` node acts on: `to[0]` for `Send`, `from`
    /// for `Recv`, `None` for every other kind. Used by the async-permissive
    /// comparator to group candidates by channel.
    pub(crate) fn channel(&self) -> Option<&Role> {
        match &self.kind {
            NodeKind::Send { to, .. } => to.first(),
            NodeKind::Recv { from, .. } => Some(from),
            _ => None,
        }
    }

    /// Clears `marked` on this node and every descendant.
    pub fn reset_marks(&mut self) {
        self.marked = false;
        for child in &mut self.children {
            child.reset_marks();
        }
    }

    /// True for `Send`/`Recv` nodes whose peer role carries no parameter —
    /// the only nodes eligible to start or continue an async segment
    /// (component F).
    pub(crate) fn is_async_candidate(&self) -> bool {
        match &self.kind {
            NodeKind::Send { to, .. } => to.first().map_or(false, |r| r.param.is_none()),
            NodeKind::Recv { from, .. } => from.param.is_none(),
            _ => false,
        }
    }
}
