//! Human-readable tree dump (component E).
//!
//! One line per node, depth-indented, each line a `Node { .. }` record. The
//! exact spelling is a golden-file contract: the tests below assert on it
//! byte-for-byte, the way the reference implementation's `st_node_print`
//! format is itself part of its external contract.

use std::fmt;

use crate::protocol::node::{Node, NodeKind};
use crate::protocol::tree::Tree;
use crate::role::Role;

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(root) => root.write_tree(f, 0),
            None => Ok(()),
        }
    }
}

impl Node {
    fn write_tree(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{depth:3}")?;
        write!(f, "{}", if self.marked { " *>" } else { " | " })?;
        for _ in 0..depth {
            write!(f, "  ")?;
        }
        self.write_payload(f)?;
        writeln!(f)?;
        for child in &self.children {
            child.write_tree(f, depth + 1)?;
        }
        Ok(())
    }

    fn write_payload(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            NodeKind::Root => write!(f, "Node {{ type: root }}"),
            NodeKind::SendRecv { from, to, msgsig, msg_cond, cond } => {
                write!(f, "Node {{ type: interaction, from: {from}, to({}): [{}]", to.len(), join_roles(to))?;
                write!(f, ", msgsig: {msgsig}")?;
                write_optional_cond(f, msg_cond, cond)?;
                write!(f, " }}")
            }
            NodeKind::Send { to, msgsig, msg_cond, cond } => {
                write!(f, "Node {{ type: send, to({}): [{}]", to.len(), join_roles(to))?;
                write!(f, ", msgsig: {msgsig}")?;
                write_optional_cond(f, msg_cond, cond)?;
                write!(f, " }}")
            }
            NodeKind::Recv { from, msgsig, msg_cond, cond } => {
                write!(f, "Node {{ type: recv, from: {from}, msgsig: {msgsig}")?;
                write_optional_cond(f, msg_cond, cond)?;
                write!(f, " }}")
            }
            NodeKind::Choice { at } => write!(f, "Node {{ type: choice, at: {at} }}"),
            NodeKind::Parallel => write!(f, "Node {{ type: par }}"),
            NodeKind::Recur { label } => write!(f, "Node {{ type: recur, label: {label} }}"),
            NodeKind::Continue { label } => write!(f, "Node {{ type: continue, label: {label} }}"),
            NodeKind::For { var, range } => {
                write!(f, "Node {{ type: for, var: {var}, range: {} }}", range.display_evaluated())
            }
        }
    }
}

fn join_roles(roles: &[Role]) -> String {
    roles.iter().map(|r| r.to_string()).collect::<Vec<_>>().join(", ")
}

fn write_optional_cond(
    f: &mut fmt::Formatter<'_>,
    msg_cond: &Option<Role>,
    cond: &Option<crate::expr::Expr>,
) -> fmt::Result {
    if let Some(r) = msg_cond {
        write!(f, ", msg_cond: {r}")?;
    }
    if let Some(c) = cond {
        write!(f, ", cond: {}", c.display_evaluated())?;
    }
    Ok(())
}

// Re-exported so downstream crates formatting a bare node (without a Tree
// wrapper, e.g. in diagnostics) get the same contract.
impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_tree(f, 0)
    }
}
