//! # mpst-core
//!
//! A runtime representation and compatibility engine for multiparty,
//! Scribble-like session-type protocols.
//!
//! The crate is organised in layers:
//!
//! - [`expr`]: the symbolic integer expression algebra that decorates
//!   parameterised roles and conditional branches.
//! - [`role`]: named protocol participants and message signatures.
//! - [`protocol`]: the protocol tree itself — metadata, node shapes, the
//!   builder, the printer, and the async-permissive structural comparator
//!   that is this crate's reason for existing.
//! - [`io`]: the endpoint communication boundary, specified as a contract
//!   ([`io::Transport`]) rather than a shipped implementation.
//! - [`error`]: the error taxonomy shared by all of the above.
//!
//! ## Example: building and comparing a tiny protocol
//!
//! ```
//! use mpst_core::protocol::{Node, NodeKind, ProtocolInfo, ProtocolKind, Tree};
//! use mpst_core::role::{MsgSig, Role};
//!
//! let mut info = ProtocolInfo::new("Ping", ProtocolKind::Global);
//! info.add_role(Role::new("A")).add_role(Role::new("B"));
//!
//! let mut root = Node::new(NodeKind::Root);
//! root.append_child(Node::new(NodeKind::SendRecv {
//!     from: Role::new("A"),
//!     to: vec![Role::new("B")],
//!     msgsig: MsgSig::new("int"),
//!     msg_cond: None,
//!     cond: None,
//! }));
//!
//! let mut tree = Tree::new(info);
//! tree.set_root(root);
//! tree.validate().expect("well-formed protocol");
//!
//! let mut mirror = tree.clone();
//! assert!(tree.compare(&mut mirror));
//! ```

pub mod error;
pub mod expr;
pub mod io;
pub mod protocol;
pub mod role;

pub use error::{EvalError, IoError, StructuralError};
pub use expr::{BinOp, Expr};
pub use protocol::{Node, NodeKind, ProtocolInfo, ProtocolKind, Tree};
pub use role::{MsgSig, Role};
