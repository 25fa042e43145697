//! # Protocol Module
//!
//! Defines the runtime protocol tree and the operations over it: metadata
//! (`meta`), node shapes and the builder (`node`), the owning `Tree` plus
//! structural validation (`tree`), the golden-file printer (`printer`), and
//! the async-permissive comparator (`compare`).
//!
//! The module is split into several components based on abstraction layers:
//!
//! * `meta`: protocol-level metadata — name, kind, declared roles, imports
//! * `node`: the tagged node shape and tree-builder operations
//! * `tree`: the owning `Tree`, `validate`, `reset_marks`
//! * `printer`: the `Display` implementations (golden-file contract)
//! * `compare`: the async-permissive structural comparator

mod compare;
mod meta;
mod node;
mod printer;
mod tree;

pub use meta::{Import, ProtocolInfo, ProtocolKind};
pub use node::{Node, NodeKind};
pub use tree::Tree;
