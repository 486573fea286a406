//! The single-valued payload type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Payload for "no informative value".
///
/// Used wherever a container needs a type parameter but carries no data,
/// e.g. `Outcome<Unit>` as the value-carrying form of a `VoidOrError`.
/// There is exactly one `Unit`, so every two units are equal.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Unit;

impl Unit {
    /// The canonical instance.
    pub const fn single() -> Self {
        Unit
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("()")
    }
}

impl From<()> for Unit {
    fn from(_: ()) -> Self {
        Unit
    }
}

impl From<Unit> for () {
    fn from(_: Unit) -> Self {}
}
