//! Streaming recurrence: exercises the async-permissive comparator's
//! channel-ordering policy directly on a multi-channel `Recur` body
//! (scenarios 8-10, `SPEC_FULL.md` §8).

use mpst_core::protocol::{Node, NodeKind, ProtocolInfo, ProtocolKind, Tree};
use mpst_core::role::{MsgSig, Role};
use mpst_core::Expr;

fn info() -> ProtocolInfo {
    let mut info = ProtocolInfo::new("Stream", ProtocolKind::Local);
    info.set_myrole("Self");
    info.add_role(Role::new("A")).add_role(Role::new("B"));
    info
}

fn send(to: &str) -> Node {
    Node::new(NodeKind::Send { to: vec![Role::new(to)], msgsig: MsgSig::new("int"), msg_cond: None, cond: None })
}

fn recv(from: &str) -> Node {
    Node::new(NodeKind::Recv { from: Role::new(from), msgsig: MsgSig::new("int"), msg_cond: None, cond: None })
}

fn recur(children: Vec<Node>) -> Tree {
    let mut tree = Tree::new(info());
    let mut root = Node::new(NodeKind::Root);
    let mut body = Node::new(NodeKind::Recur { label: "L".into() });
    for c in children {
        body.append_child(c);
    }
    root.append_child(body);
    tree.set_root(root);
    tree
}

#[test]
fn cross_channel_overtake_is_permitted() {
    let mut a = recur(vec![send("A"), recv("B")]);
    let mut b = recur(vec![recv("B"), send("A")]);
    assert!(a.compare(&mut b));
}

#[test]
fn same_channel_send_overtakes_pending_recv_safely() {
    let mut a = recur(vec![recv("A"), send("B")]);
    let mut b = recur(vec![send("B"), recv("A")]);
    assert!(a.compare(&mut b));
}

#[test]
fn same_channel_polarity_swap_is_forbidden() {
    let mut a = recur(vec![send("A"), recv("A")]);
    let mut b = recur(vec![recv("A"), send("A")]);
    assert!(!a.compare(&mut b));
}

#[test]
fn trailing_non_async_children_still_recurse() {
    // A For loop after the async segment is still compared structurally;
    // swapping the roles inside it is a mismatch regardless of the
    // preceding segment's overtaking.
    let mut inner_a = Node::new(NodeKind::For { var: "i".into(), range: Expr::var("n") });
    inner_a.append_child(recv("A"));
    let mut inner_b = Node::new(NodeKind::For { var: "i".into(), range: Expr::var("n") });
    inner_b.append_child(send("A"));

    let mut a = recur(vec![send("A"), recv("B"), inner_a]);
    let mut b = recur(vec![recv("B"), send("A"), inner_b]);
    assert!(!a.compare(&mut b));
}
