//! Async-permissive structural comparator (component F).
//!
//! Decides whether two trees denote the same protocol modulo the legal
//! message reorderings ("overtake") permitted across distinct channels
//! within a single `Recur` body. FIFO order must be preserved on any one
//! channel. See `SPEC_FULL.md` §4.F for the full channel-ordering table this
//! module implements.

use log::{debug, info};

use crate::protocol::node::{Node, NodeKind};
use crate::protocol::tree::Tree;
use crate::role::role_struct_eq;

impl Tree {
    /// Entry point: compares this tree's root against `other`'s root,
    /// mutating `marked` flags on mismatching nodes in both trees. Returns
    /// the overall verdict.
    pub fn compare(&mut self, other: &mut Tree) -> bool {
        let verdict = match (&mut self.root, &mut other.root) {
            (Some(a), Some(b)) => compare_r(a, b),
            (None, None) => true,
            _ => false,
        };
        info!("tree comparison `{}` vs `{}`: {}", self.info.name, other.info.name, verdict);
        verdict
    }
}

/// Structural comparison of a single pair of nodes: same kind discriminant,
/// same child count, and variant-specific payload equality. On mismatch,
/// both nodes are marked and the function still returns `false` but does not
/// itself recurse further (callers decide whether to keep traversing).
fn compare(a: &mut Node, b: &mut Node) -> bool {
    let type_eq = std::mem::discriminant(&a.kind) == std::mem::discriminant(&b.kind);
    let nchild_eq = a.children.len() == b.children.len();
    let payload_eq = type_eq && payload_equal(&a.kind, &b.kind);
    let identical = type_eq && nchild_eq && payload_eq;
    if !identical {
        debug!("mismatch: {:?} vs {:?}", variant_name(&a.kind), variant_name(&b.kind));
        a.marked = true;
        b.marked = true;
    }
    identical
}

fn variant_name(kind: &NodeKind) -> &'static str {
    match kind {
        NodeKind::Root => "root",
        NodeKind::SendRecv { .. } => "sendrecv",
        NodeKind::Send { .. } => "send",
        NodeKind::Recv { .. } => "recv",
        NodeKind::Choice { .. } => "choice",
        NodeKind::Parallel => "par",
        NodeKind::Recur { .. } => "recur",
        NodeKind::Continue { .. } => "continue",
        NodeKind::For { .. } => "for",
    }
}

fn payload_equal(a: &NodeKind, b: &NodeKind) -> bool {
    match (a, b) {
        (NodeKind::Root, NodeKind::Root) | (NodeKind::Parallel, NodeKind::Parallel) => true,
        (
            NodeKind::SendRecv { from: fa, to: ta, msgsig: ma, .. },
            NodeKind::SendRecv { from: fb, to: tb, msgsig: mb, .. },
        ) => ma == mb && role_struct_eq(fa, fb) && ta.len() == tb.len() && ta.iter().zip(tb).all(|(x, y)| role_struct_eq(x, y)),
        (NodeKind::Send { to: ta, msgsig: ma, .. }, NodeKind::Send { to: tb, msgsig: mb, .. }) => {
            ma == mb && ta.len() == tb.len() && ta.iter().zip(tb).all(|(x, y)| role_struct_eq(x, y))
        }
        (NodeKind::Recv { from: fa, msgsig: ma, .. }, NodeKind::Recv { from: fb, msgsig: mb, .. }) => {
            ma == mb && role_struct_eq(fa, fb)
        }
        (NodeKind::Choice { at: aa }, NodeKind::Choice { at: ab }) => aa == ab,
        (NodeKind::Recur { .. }, NodeKind::Recur { .. }) => true,
        (NodeKind::Continue { .. }, NodeKind::Continue { .. }) => true,
        (NodeKind::For { var: va, range: ra }, NodeKind::For { var: vb, range: rb }) => {
            va == vb && ra.clone().evaluate().ok() == rb.clone().evaluate().ok()
        }
        _ => false,
    }
}

/// `compare(a, b)` first; if `a` is `Recur`, delegates to [`compare_async`]
/// (ANDed into the running verdict regardless of `compare`'s own result,
/// matching the reference implementation's `identical &= ...` idiom); else,
/// if still equal, recurses pairwise on children in index order.
fn compare_r(a: &mut Node, b: &mut Node) -> bool {
    let mut identical = compare(a, b);
    if a.kind.is_recur() {
        identical &= compare_async(a, b);
    } else if identical {
        for (ca, cb) in a.children.iter_mut().zip(b.children.iter_mut()) {
            identical &= compare_r(ca, cb);
        }
    }
    identical
}

enum MatchOutcome {
    Matched,
    Violated,
    NotFound,
}

/// Applies only at the top level of a `Recur` body: identifies the single
/// maximal async segment in `a`'s children, matches each segment member in
/// `a` against an unvisited candidate in `b`'s segment per the
/// channel-ordering rules, then recurses pairwise on the remainder.
fn compare_async(a: &mut Node, b: &mut Node) -> bool {
    if !a.kind.is_recur() || !b.kind.is_recur() {
        return false;
    }
    if a.children.len() != b.children.len() {
        return false;
    }
    let n = a.children.len();

    let mut from = n;
    let mut to = n;
    for i in 0..n {
        if a.children[i].is_async_candidate() {
            from = i;
            to = n;
            for j in (i + 1)..n {
                if !a.children[j].is_async_candidate() {
                    to = j;
                    break;
                }
            }
            break;
        }
    }

    let mut identical = true;

    if from < to {
        let mut visited = vec![false; to - from];
        for i in from..to {
            match find_match(a, b, i, from, to, &mut visited) {
                MatchOutcome::Matched => {}
                MatchOutcome::Violated => identical = false,
                MatchOutcome::NotFound => {
                    a.children[i].marked = true;
                    identical = false;
                }
            }
        }
    }

    for i in to..n {
        identical &= compare_r(&mut a.children[i], &mut b.children[i]);
    }

    identical
}

/// Scans `b.children[from..to)` (skipping already-`visited` candidates) for
/// a match to `a.children[i]`, per the channel-ordering table in §4.F.
fn find_match(a: &mut Node, b: &mut Node, i: usize, from: usize, to: usize, visited: &mut [bool]) -> MatchOutcome {
    let a_channel = a.children[i].channel().map(|r| r.name.clone());
    let a_channel = match a_channel {
        Some(c) => c,
        None => return MatchOutcome::NotFound,
    };
    let a_is_recv = a.children[i].kind.is_recv();

    for j in from..to {
        if visited[j - from] {
            continue;
        }
        let b_channel = b.children[j].channel().map(|r| r.name.clone());
        let on_channel = b_channel.as_deref() == Some(a_channel.as_str());
        if !on_channel {
            continue;
        }
        let b_is_recv = b.children[j].kind.is_recv();

        match (a_is_recv, b_is_recv) {
            (true, true) => {
                if msgsig_of(&a.children[i]) == msgsig_of(&b.children[j]) {
                    visited[j - from] = true;
                    return MatchOutcome::Matched;
                }
                a.children[i].marked = true;
                b.children[j].marked = true;
                return MatchOutcome::Violated;
            }
            (true, false) => continue, // same-channel Send may overtake a pending Recv
            (false, false) => {
                if msgsig_of(&a.children[i]) == msgsig_of(&b.children[j]) {
                    visited[j - from] = true;
                    return MatchOutcome::Matched;
                }
                a.children[i].marked = true;
                b.children[j].marked = true;
                return MatchOutcome::Violated;
            }
            (false, true) => {
                a.children[i].marked = true;
                b.children[j].marked = true;
                return MatchOutcome::Violated;
            }
        }
    }
    MatchOutcome::NotFound
}

fn msgsig_of(node: &Node) -> &crate::role::MsgSig {
    match &node.kind {
        NodeKind::Send { msgsig, .. } | NodeKind::Recv { msgsig, .. } => msgsig,
        _ => unreachable!("msgsig_of called on a non-Send/Recv node"),
    }
}
