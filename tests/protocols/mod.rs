//! One file per named example protocol, each building a tree with the
//! `Tree`/`Node` builder API and asserting on its runtime behavior (rather
//! than the type-level aliases a compile-time session-type encoding would
//! use). Wired into the test binary via `tests/protocol_scenarios.rs`.

pub mod handshake;
pub mod pi;
pub mod streaming;
pub mod workflow;
