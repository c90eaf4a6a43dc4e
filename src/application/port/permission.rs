// SPDX-License-Identifier: MPL-2.0
//! Media-library access gate.

use super::{BoxFuture, PortResult};

/// Grants or refuses access to the user's media library.
pub trait PermissionGate: Send + Sync {
    /// Asks for access. Resolves to `true` when access is granted.
    ///
    /// Implementations may prompt the user; a refusal is `Ok(false)`, not an error.
    fn request_access(&self) -> BoxFuture<'_, PortResult<bool>>;
}
