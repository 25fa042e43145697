//! A complete protocol: metadata plus an optional root node.

use crate::error::StructuralError;
use crate::protocol::meta::ProtocolInfo;
use crate::protocol::node::{Node, NodeKind};

/// A protocol tree: [`ProtocolInfo`] metadata plus a root [`Node`]. A freshly
/// constructed tree has no root; [`Tree::set_root`] attaches one. Dropping a
/// `Tree` drops its root and, transitively, every descendant — ownership is
/// strict (`Vec<Node>`), so there is no separate "free" entry point to get
/// wrong (see `DESIGN.md` for the original implementation's two bugs in this
/// area, neither of which is representable here).
#[derive(Debug, Clone)]
pub struct Tree {
    pub info: ProtocolInfo,
    pub root: Option<Node>,
}

impl Tree {
    pub fn new(info: ProtocolInfo) -> Tree {
        Tree { info, root: None }
    }

    pub fn set_root(&mut self, root: Node) -> &mut Self {
        self.root = Some(root);
        self
    }

    /// Checks the structural invariants this crate enforces: no duplicate
    /// role names, `myrole` present when required, every `Continue` dominated
    /// by a `Recur` with the same label, and every role name referenced by a
    /// node declared in `info.roles`.
    pub fn validate(&self) -> Result<(), StructuralError> {
        self.info.validate()?;
        if let Some(root) = &self.root {
            self.validate_node(root, &[])?;
        }
        Ok(())
    }

    fn validate_node(&self, node: &Node, enclosing_labels: &[&str]) -> Result<(), StructuralError> {
        match &node.kind {
            NodeKind::Continue { label } => {
                if !enclosing_labels.contains(&label.as_str()) {
                    return Err(StructuralError::UnboundContinue { label: label.clone() });
                }
            }
            NodeKind::SendRecv { from, to, .. } => {
                self.check_role(from)?;
                for r in to {
                    self.check_role(r)?;
                }
            }
            NodeKind::Send { to, .. } => {
                for r in to {
                    self.check_role(r)?;
                }
            }
            NodeKind::Recv { from, .. } => {
                self.check_role(from)?;
            }
            _ => {}
        }

        let mut labels = enclosing_labels.to_vec();
        if let NodeKind::Recur { label } = &node.kind {
            labels.push(label.as_str());
        }
        for child in &node.children {
            self.validate_node(child, &labels)?;
        }
        Ok(())
    }

    fn check_role(&self, role: &crate::role::Role) -> Result<(), StructuralError> {
        if self.info.has_role(&role.name) {
            Ok(())
        } else {
            Err(StructuralError::UnknownRole { name: role.name.clone() })
        }
    }

    /// Clears every node's `marked` flag, recursively.
    pub fn reset_marks(&mut self) {
        if let Some(root) = &mut self.root {
            root.reset_marks();
        }
    }
}
