//! Upstream response envelope
//!
//! Every successful upstream response wraps its payload in the same shape:
//!
//! ```json
//! {
//!     "data": { ... }
//! }
//! ```
//!
//! The client deserializes the whole body into `Envelope<T>` and hands the
//! caller the value at `data`. Unknown sibling keys (the upstream also
//! sends a human-readable `status` string) are ignored.

use serde::{Deserialize, Serialize};

/// The upstream `{"data": ...}` wrapper.
///
/// `T` is the payload shape a call expects: a single object, a list, a
/// boolean, or an `Option` where the upstream may legally send `null`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// Unwrap the envelope, yielding the payload.
    pub fn into_inner(self) -> T {
        self.data
    }
}
