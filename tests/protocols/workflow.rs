//! Parallel composition: two independent interactions running concurrently.

use mpst_core::protocol::{Node, NodeKind, ProtocolInfo, ProtocolKind, Tree};
use mpst_core::role::{MsgSig, Role};

fn workflow() -> Tree {
    let mut info = ProtocolInfo::new("Workflow", ProtocolKind::Global);
    info.add_role(Role::new("A")).add_role(Role::new("B")).add_role(Role::new("C")).add_role(Role::new("D"));

    let mut root = Node::new(NodeKind::Root);
    let mut par = Node::new(NodeKind::Parallel);
    par.append_child(Node::new(NodeKind::SendRecv {
        from: Role::new("A"),
        to: vec![Role::new("B")],
        msgsig: MsgSig::new("left"),
        msg_cond: None,
        cond: None,
    }));
    par.append_child(Node::new(NodeKind::SendRecv {
        from: Role::new("C"),
        to: vec![Role::new("D")],
        msgsig: MsgSig::new("right"),
        msg_cond: None,
        cond: None,
    }));
    root.append_child(par);

    let mut tree = Tree::new(info);
    tree.set_root(root);
    tree
}

#[test]
fn parallel_workflow_is_well_formed() {
    assert!(workflow().validate().is_ok());
}

#[test]
fn parallel_workflow_is_reflexive() {
    let mut a = workflow();
    let mut b = a.clone();
    assert!(a.compare(&mut b));
}

#[test]
fn swapped_threads_are_a_structural_mismatch() {
    // Thread order inside a `Parallel` is not itself subject to the
    // async-permissive policy (that only applies inside `Recur` bodies);
    // the two threads here are compared pairwise by index.
    let mut a = workflow();
    let mut b = workflow();
    b.root.as_mut().unwrap().children[0].children.swap(0, 1);
    assert!(!a.compare(&mut b));
}
