//! Payload-less signals: pass, or fail / stop / warn.
//!
//! These cover operations that have no success value. `VoidOrError` holds
//! a captured error like `Outcome`; `VoidOrBreak` and `VoidOrWarning` hold
//! a non-empty text explaining the interruption or the annotation.

mod collect;
mod void_or_break;
mod void_or_error;
mod void_or_warning;

pub use collect::{collect_errors, collect_warnings};
pub use void_or_break::VoidOrBreak;
pub use void_or_error::VoidOrError;
pub use void_or_warning::VoidOrWarning;
