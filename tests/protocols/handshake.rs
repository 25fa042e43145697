//! Client/server handshake: a two-step request/response with an endpoint
//! projection checked against the global protocol.

use mpst_core::protocol::{Node, NodeKind, ProtocolInfo, ProtocolKind, Tree};
use mpst_core::role::{MsgSig, Role};

fn global() -> Tree {
    let mut info = ProtocolInfo::new("Handshake", ProtocolKind::Global);
    info.add_role(Role::new("Client")).add_role(Role::new("Server"));

    let mut root = Node::new(NodeKind::Root);
    root.append_child(Node::new(NodeKind::SendRecv {
        from: Role::new("Client"),
        to: vec![Role::new("Server")],
        msgsig: MsgSig::new("request"),
        msg_cond: None,
        cond: None,
    }));
    root.append_child(Node::new(NodeKind::SendRecv {
        from: Role::new("Server"),
        to: vec![Role::new("Client")],
        msgsig: MsgSig::new("response"),
        msg_cond: None,
        cond: None,
    }));

    let mut tree = Tree::new(info);
    tree.set_root(root);
    tree
}

/// The projection onto `Client`: a `Send` followed by a `Recv`.
fn client_endpoint() -> Tree {
    let mut info = ProtocolInfo::new("Handshake", ProtocolKind::Local);
    info.set_myrole("Client");
    info.add_role(Role::new("Client")).add_role(Role::new("Server"));

    let mut root = Node::new(NodeKind::Root);
    root.append_child(Node::new(NodeKind::Send {
        to: vec![Role::new("Server")],
        msgsig: MsgSig::new("request"),
        msg_cond: None,
        cond: None,
    }));
    root.append_child(Node::new(NodeKind::Recv {
        from: Role::new("Server"),
        msgsig: MsgSig::new("response"),
        msg_cond: None,
        cond: None,
    }));

    let mut tree = Tree::new(info);
    tree.set_root(root);
    tree
}

#[test]
fn global_handshake_is_well_formed() {
    assert!(global().validate().is_ok());
}

#[test]
fn client_endpoint_is_well_formed() {
    assert!(client_endpoint().validate().is_ok());
}

#[test]
fn global_handshake_does_not_structurally_equal_its_own_endpoint_projection() {
    // SendRecv and Send/Recv are distinct node kinds by design (projection
    // is a distinct operation from equality, and is out of this crate's
    // scope); comparing them directly must fail cleanly rather than panic.
    let mut g = global();
    let mut c = client_endpoint();
    assert!(!g.compare(&mut c));
}
