//! Endpoint I/O façade (component G) — a boundary contract, not a transport.
//!
//! This module specifies the shape of typed send/recv/barrier primitives
//! over point-to-point and fan-out group channels. The production transport
//! behind it (ZeroMQ in the original implementation) is explicitly out of
//! scope for this crate; `Transport` exists so that the protocol layer above
//! it can be exercised and tested without committing to a wire technology.
//! `tests/io_tests.rs` provides a `std::sync::mpsc`-backed mock that
//! satisfies the contract end-to-end, including the two-phase barrier.

use log::warn;

use crate::error::IoError;

/// A handle naming either a single peer or a fan-out group of peers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoleHandle {
    P2p { peer: String },
    Group { name: String, nendpoint: usize },
}

impl RoleHandle {
    pub fn p2p(peer: impl Into<String>) -> RoleHandle {
        RoleHandle::P2p { peer: peer.into() }
    }

    pub fn group(name: impl Into<String>, nendpoint: usize) -> RoleHandle {
        RoleHandle::Group { name: name.into(), nendpoint }
    }

    pub fn name(&self) -> &str {
        match self {
            RoleHandle::P2p { peer } => peer,
            RoleHandle::Group { name, .. } => name,
        }
    }
}

/// The endpoint communication contract. A send/recv/barrier primitive set
/// over integers and integer arrays, following the signatures of the
/// reference runtime's `sc/primitives.h`.
pub trait Transport {
    fn send_int(&self, val: i32, role: &RoleHandle) -> Result<(), IoError> {
        self.send_int_array(&[val], role)
    }

    fn send_int_array(&self, buf: &[i32], role: &RoleHandle) -> Result<(), IoError>;

    /// Sends `val` to every role in `roles`. Every target is attempted even
    /// if an earlier one fails; the first error encountered is returned
    /// after all sends have been attempted (the reference implementation
    /// ORs return codes together rather than short-circuiting).
    fn vsend_int(&self, val: i32, roles: &[RoleHandle]) -> Result<(), IoError> {
        let mut first_err = None;
        for role in roles {
            if let Err(e) = self.send_int(val, role) {
                if first_err.is_none() {
                    first_err = Some(e);
                }
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn recv_int(&self, role: &RoleHandle) -> Result<i32, IoError> {
        let mut buf = [0i32; 1];
        self.recv_int_array(&mut buf, role)?;
        Ok(buf[0])
    }

    /// Receives into `buf`, returning the number of elements actually
    /// copied. If the incoming payload is larger than `buf`, the payload is
    /// truncated to `buf.len()` and a warning is logged — this is not an
    /// error, matching the reference implementation.
    fn recv_int_array(&self, buf: &mut [i32], role: &RoleHandle) -> Result<usize, IoError>;

    /// Two-phase group barrier: every non-coordinator participant sends an
    /// "S1" tag and waits for "S2"; the coordinator collects one "S1" per
    /// participant, then broadcasts "S2".
    fn barrier(&self, group: &RoleHandle, coordinator_name: &str) -> Result<(), IoError>;
}

pub(crate) fn warn_on_truncation(role: &str, received: usize, capacity: usize) {
    if received > capacity {
        warn!(
            "recv_int_array: received data ({received} ints) > buffer capacity ({capacity}) from `{role}`, data truncated"
        );
    }
}
