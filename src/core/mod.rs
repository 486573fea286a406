//! Building blocks shared by every container.
//!
//! This module contains:
//! - `Unit`, the single-valued payload
//! - the `Monad` / `MonadZero` capability traits and the combinators
//!   written once over them
//! - errors for wrong-variant access and rejected arguments
//! - `NonEmptyText`, the validated text payload of `Break` and `Warning`
//!
//! Nothing here performs I/O or logs; all values are immutable.

pub mod combinators;
mod error;
mod monad;
mod text;
mod unit;

pub use error::{AccessError, ArgumentError};
pub use monad::{Monad, MonadZero};
pub use text::NonEmptyText;
pub use unit::Unit;
