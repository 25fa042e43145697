//! Builds and prints the `Pi` protocol tree from the Monte-Carlo Pi example:
//! a master sends a sample count to two workers, then receives `count`
//! in-or-out samples back from each, alternating between them.
//!
//! Grounded in `examples/montecarlopi/{master,w1}.c` of the original
//! implementation this crate's core algorithms are ported from. This demo
//! builds the *global* protocol only — the transport that would actually run
//! it is out of scope for this crate (see `SPEC_FULL.md` §1).

use mpst_core::protocol::{Node, NodeKind, ProtocolInfo, ProtocolKind, Tree};
use mpst_core::role::{MsgSig, Role};
use mpst_core::{BinOp, Expr};

fn main() {
    env_logger::Builder::default()
        .filter_level(if cfg!(debug_assertions) { log::LevelFilter::Debug } else { log::LevelFilter::Info })
        .init();

    let mut info = ProtocolInfo::new("Pi", ProtocolKind::Global);
    info.add_role(Role::new("Master")).add_role(Role::new("Worker0")).add_role(Role::new("Worker1"));

    let mut root = Node::new(NodeKind::Root);

    let mut setup = Node::new(NodeKind::Recur { label: "Setup".into() });
    setup.append_child(Node::new(NodeKind::SendRecv {
        from: Role::new("Master"),
        to: vec![Role::new("Worker0")],
        msgsig: MsgSig::new("count: int"),
        msg_cond: None,
        cond: None,
    }));
    setup.append_child(Node::new(NodeKind::SendRecv {
        from: Role::new("Master"),
        to: vec![Role::new("Worker1")],
        msgsig: MsgSig::new("count: int"),
        msg_cond: None,
        cond: None,
    }));

    let mut sampling = Node::new(NodeKind::For {
        var: "i".into(),
        range: Expr::bin(Expr::const_(0), BinOp::Range, Expr::var("count")),
    });
    sampling.append_child(Node::new(NodeKind::SendRecv {
        from: Role::new("Worker0"),
        to: vec![Role::new("Master")],
        msgsig: MsgSig::new("inside: bool"),
        msg_cond: None,
        cond: None,
    }));
    sampling.append_child(Node::new(NodeKind::SendRecv {
        from: Role::new("Worker1"),
        to: vec![Role::new("Master")],
        msgsig: MsgSig::new("inside: bool"),
        msg_cond: None,
        cond: None,
    }));
    setup.append_child(sampling);

    root.append_child(setup);

    let mut tree = Tree::new(info);
    tree.set_root(root);
    tree.validate().expect("Pi protocol is well-formed");

    println!("{tree}");

    // Compare the tree against a clone of itself so the `info!` verdict line
    // the comparator logs is visible with `RUST_LOG=info` set.
    let mut mirror = tree.clone();
    assert!(tree.compare(&mut mirror));
}
