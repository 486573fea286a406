//! Tagged: closed result and optional value types
//!
//! A small family of immutable sum types with one shared combinator
//! vocabulary. Each type is a plain enum, so every state is visible to
//! exhaustive `match` and payload-free states (`None`, `Empty`, `Void`)
//! need no singleton machinery.
//!
//! # Core Concepts
//!
//! - **Maybe**: optional value (`Some` / `None`)
//! - **Outcome**: success value or a captured error that can be handed
//!   back later as the very same capture
//! - **Either / Switch**: one of two values; `Switch` adds an absorbing `Empty`
//! - **Signals**: `VoidOrError`, `VoidOrBreak`, `VoidOrWarning` for
//!   operations without a success value
//! - **Monad**: the capability every container implements, so `zip`,
//!   `lift`, `join` and friends exist once
//!
//! # Example
//!
//! ```rust
//! use tagged::{query, Maybe, Outcome};
//!
//! fn parse(text: &str) -> Maybe<i32> {
//!     Maybe::of(text.trim().parse::<i32>().ok())
//! }
//!
//! let width = parse("12");
//! let height = parse(" 3 ");
//! let area = width.zip(height, |w, h| w * h);
//! assert_eq!(area, Maybe::some(36));
//!
//! let checked: Outcome<i32> = query! {
//!     from a in area.to_outcome("area missing");
//!     select a + 1
//! };
//! assert_eq!(checked.value(), Ok(&37));
//! ```

pub mod core;
pub mod either;
mod macros;
pub mod maybe;
pub mod outcome;
pub mod signal;

// Re-export commonly used types
pub use crate::core::{AccessError, ArgumentError, Monad, MonadZero, NonEmptyText, Unit};
pub use either::{Either, EitherKind, Switch, SwitchKind};
pub use maybe::{Maybe, MaybeKind};
pub use outcome::{CapturedError, Outcome, OutcomeKind, Output};
pub use signal::{VoidOrBreak, VoidOrError, VoidOrWarning};
