//! The capability shared by every container in this crate.
//!
//! A container family (e.g. "all `Maybe<T>`" or "all `Either<L, T>` for a
//! fixed `L`") is named by a zero-sized marker type implementing [`Monad`].
//! The generic associated type [`Monad::Of`] maps an item type to the
//! concrete container, which lets every combinator in
//! [`combinators`](super::combinators) be written once for all families.
//!
//! # Laws
//!
//! Every implementation must satisfy, for all `x`, `m`, `f`, `g`:
//!
//! 1. **Left identity**: `bind(pure(x), f) == f(x)`
//! 2. **Right identity**: `bind(m, pure) == m`
//! 3. **Associativity**: `bind(bind(m, f), g) == bind(m, |x| bind(f(x), g))`
//!
//! `tests/property_tests.rs` checks these for each family.

/// A container family with a unit (`pure`) and sequencing (`bind`).
///
/// # Example
///
/// ```rust
/// use tagged::core::Monad;
/// use tagged::{Maybe, MaybeKind};
///
/// fn double_all<M: Monad>(m: M::Of<i32>) -> M::Of<i32> {
///     M::map::<i32, i32, _>(m, |x| x * 2)
/// }
///
/// assert_eq!(double_all::<MaybeKind>(Maybe::some(21)), Maybe::some(42));
/// assert_eq!(double_all::<MaybeKind>(Maybe::none()), Maybe::none());
/// ```
pub trait Monad {
    /// The concrete container holding a `T`.
    type Of<T>;

    /// Wrap a plain value in the successful/present state.
    fn pure<T>(value: T) -> Self::Of<T>;

    /// Apply `f` to the held value, or propagate the non-successful state
    /// unchanged without calling `f`.
    fn bind<T, U, F>(m: Self::Of<T>, f: F) -> Self::Of<U>
    where
        F: FnOnce(T) -> Self::Of<U>;

    /// Transform the held value.
    fn map<T, U, F>(m: Self::Of<T>, f: F) -> Self::Of<U>
    where
        F: FnOnce(T) -> U,
    {
        Self::bind::<T, U, _>(m, move |value| Self::pure(f(value)))
    }
}

/// A family with an absorbing empty state.
///
/// `zero` short-circuits every later `bind`: `bind(zero(), f) == zero()`.
pub trait MonadZero: Monad {
    fn zero<T>() -> Self::Of<T>;
}
