//! Two-sided containers.
//!
//! [`Either`] always holds exactly one of two values; neither side is
//! privileged as "the error". [`Switch`] adds an absorbing `Empty` state.
//! Both are right-biased for the monadic combinators (`bind`, `map`,
//! `zip`), with `_left` counterparts where a left-side operation is useful.

mod switch;

pub use switch::{Switch, SwitchKind};

use crate::core::combinators;
use crate::core::{AccessError, Monad};
use crate::maybe::Maybe;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// Exactly one of two values, fixed at construction.
///
/// # Example
///
/// ```rust
/// use tagged::Either;
///
/// let input: Either<String, i32> = Either::left("e".to_string());
/// assert_eq!(input.clone().fold(|l| l.len() as i32, |r| r), 1);
///
/// let swapped = input.clone().swap();
/// assert!(swapped.is_right());
/// assert_eq!(swapped.swap(), input);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Either<L, R> {
    Left(L),
    Right(R),
}

/// Kind marker naming the `Either<L, _>` family for the [`Monad`] combinators.
#[derive(Clone, Copy, Debug)]
pub struct EitherKind<L>(PhantomData<fn() -> L>);

impl<L> Monad for EitherKind<L> {
    type Of<T> = Either<L, T>;

    fn pure<T>(value: T) -> Either<L, T> {
        Either::Right(value)
    }

    fn bind<T, U, F>(m: Either<L, T>, f: F) -> Either<L, U>
    where
        F: FnOnce(T) -> Either<L, U>,
    {
        m.bind(f)
    }

    fn map<T, U, F>(m: Either<L, T>, f: F) -> Either<L, U>
    where
        F: FnOnce(T) -> U,
    {
        m.map(f)
    }
}

impl<L, R> Either<L, R> {
    /// A value on the left side.
    ///
    /// ```rust
    /// use tagged::Either;
    ///
    /// let value: Either<&str, i32> = Either::left("bad input");
    /// assert!(value.is_left());
    /// ```
    pub fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// A value on the right side, the one the monadic combinators continue from.
    pub fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Whether the left side is populated.
    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Whether the right side is populated.
    pub fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// The left value; a right value is an [`AccessError`].
    ///
    /// ```rust
    /// use tagged::Either;
    ///
    /// let value: Either<&str, i32> = Either::right(3);
    /// assert!(value.left_value().is_err());
    /// assert_eq!(value.right_value(), Ok(&3));
    /// ```
    pub fn left_value(&self) -> Result<&L, AccessError> {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => Err(AccessError::wrong_variant("Either", "Left", "Right")),
        }
    }

    /// The right value; a left value is an [`AccessError`].
    pub fn right_value(&self) -> Result<&R, AccessError> {
        match self {
            Self::Left(_) => Err(AccessError::wrong_variant("Either", "Right", "Left")),
            Self::Right(value) => Ok(value),
        }
    }

    /// Borrow the left value, or `None` when the right side is populated.
    pub fn as_left(&self) -> Maybe<&L> {
        match self {
            Self::Left(value) => Maybe::Some(value),
            Self::Right(_) => Maybe::None,
        }
    }

    /// Borrow the right value, or `None` when the left side is populated.
    pub fn as_right(&self) -> Maybe<&R> {
        match self {
            Self::Left(_) => Maybe::None,
            Self::Right(value) => Maybe::Some(value),
        }
    }

    /// Take the left value, discarding a right one.
    pub fn into_left(self) -> Maybe<L> {
        match self {
            Self::Left(value) => Maybe::Some(value),
            Self::Right(_) => Maybe::None,
        }
    }

    /// Take the right value, discarding a left one.
    pub fn into_right(self) -> Maybe<R> {
        match self {
            Self::Left(_) => Maybe::None,
            Self::Right(value) => Maybe::Some(value),
        }
    }

    /// Total dispatch: exactly one of the two functions runs.
    pub fn fold<U, FL, FR>(self, on_left: FL, on_right: FR) -> U
    where
        FL: FnOnce(L) -> U,
        FR: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Total dispatch for side effects.
    pub fn apply<FL, FR>(&self, on_left: FL, on_right: FR)
    where
        FL: FnOnce(&L),
        FR: FnOnce(&R),
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
        }
    }

    /// Transform a left value; a right value passes through.
    ///
    /// ```rust
    /// use tagged::Either;
    ///
    /// let value: Either<&str, i32> = Either::left("abc");
    /// assert_eq!(value.map_left(str::len), Either::left(3));
    /// ```
    pub fn map_left<M, F>(self, f: F) -> Either<M, R>
    where
        F: FnOnce(L) -> M,
    {
        match self {
            Self::Left(value) => Either::Left(f(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Transform a right value; a left value passes through.
    pub fn map_right<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(f(value)),
        }
    }

    /// Same as [`map_right`](Self::map_right).
    pub fn map<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> U,
    {
        self.map_right(f)
    }

    /// Transform whichever side is populated.
    pub fn bimap<M, U, FL, FR>(self, on_left: FL, on_right: FR) -> Either<M, U>
    where
        FL: FnOnce(L) -> M,
        FR: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Either::Left(on_left(value)),
            Self::Right(value) => Either::Right(on_right(value)),
        }
    }

    /// Continue from the right value; a left value passes through.
    pub fn bind<U, F>(self, f: F) -> Either<L, U>
    where
        F: FnOnce(R) -> Either<L, U>,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => f(value),
        }
    }

    /// Continue from the left value; a right value passes through.
    pub fn bind_left<M, F>(self, f: F) -> Either<M, R>
    where
        F: FnOnce(L) -> Either<M, R>,
    {
        match self {
            Self::Left(value) => f(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Exchange the side types, keeping which side is populated.
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(value) => Either::Right(value),
            Self::Right(value) => Either::Left(value),
        }
    }

    /// The left value, or `Err(error)` when the right side is populated.
    ///
    /// ```rust
    /// use tagged::Either;
    ///
    /// let value: Either<&str, i32> = Either::right(1);
    /// assert_eq!(value.left_or_err("expected a label"), Err("expected a label"));
    /// ```
    pub fn left_or_err<E>(self, error: E) -> Result<L, E> {
        self.left_or_else_err(move || error)
    }

    /// Like [`left_or_err`](Self::left_or_err), building the error lazily.
    pub fn left_or_else_err<E, F>(self, error: F) -> Result<L, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Left(value) => Ok(value),
            Self::Right(_) => Err(error()),
        }
    }

    /// The right value, or `Err(error)` when the left side is populated.
    pub fn right_or_err<E>(self, error: E) -> Result<R, E> {
        self.right_or_else_err(move || error)
    }

    /// Like [`right_or_err`](Self::right_or_err), building the error lazily.
    pub fn right_or_else_err<E, F>(self, error: F) -> Result<R, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Left(_) => Err(error()),
            Self::Right(value) => Ok(value),
        }
    }

    /// Continue with `next` when this is a right value, keeping only `next`'s value.
    pub fn then<U>(self, next: Either<L, U>) -> Either<L, U> {
        combinators::then::<EitherKind<L>, _, _>(self, next)
    }

    /// Bind a dependent `Either`, then combine both right values.
    pub fn select_many<U, V, F, P>(self, f: F, project: P) -> Either<L, V>
    where
        F: FnOnce(&R) -> Either<L, U>,
        P: FnOnce(R, U) -> V,
    {
        combinators::select_many::<EitherKind<L>, _, _, _, _, _>(self, f, project)
    }

    /// Combine right values; otherwise the first left value, left to right.
    ///
    /// ```rust
    /// use tagged::Either;
    ///
    /// let width: Either<String, u32> = Either::right(4);
    /// let height: Either<String, u32> = Either::left("no height".to_string());
    /// assert_eq!(width.clone().zip(Either::right(5), |w, h| w * h), Either::right(20));
    /// assert_eq!(width.zip(height, |w, h| w * h), Either::left("no height".to_string()));
    /// ```
    pub fn zip<B, U, F>(self, b: Either<L, B>, f: F) -> Either<L, U>
    where
        F: FnOnce(R, B) -> U,
    {
        combinators::zip2::<EitherKind<L>, _, _, _, _>(self, b, f)
    }

    /// Three-operand [`zip`](Self::zip).
    pub fn zip3<B, C, U, F>(self, b: Either<L, B>, c: Either<L, C>, f: F) -> Either<L, U>
    where
        F: FnOnce(R, B, C) -> U,
    {
        combinators::zip3::<EitherKind<L>, _, _, _, _, _>(self, b, c, f)
    }

    /// Four-operand [`zip`](Self::zip).
    pub fn zip4<B, C, D, U, F>(
        self,
        b: Either<L, B>,
        c: Either<L, C>,
        d: Either<L, D>,
        f: F,
    ) -> Either<L, U>
    where
        F: FnOnce(R, B, C, D) -> U,
    {
        combinators::zip4::<EitherKind<L>, _, _, _, _, _, _>(self, b, c, d, f)
    }

    /// Five-operand [`zip`](Self::zip).
    pub fn zip5<B, C, D, E, U, F>(
        self,
        b: Either<L, B>,
        c: Either<L, C>,
        d: Either<L, D>,
        e: Either<L, E>,
        f: F,
    ) -> Either<L, U>
    where
        F: FnOnce(R, B, C, D, E) -> U,
    {
        combinators::zip5::<EitherKind<L>, _, _, _, _, _, _, _>(self, b, c, d, e, f)
    }

    /// `Ok` for a right value, `Err` for a left value.
    pub fn into_result(self) -> Result<R, L> {
        match self {
            Self::Left(value) => Err(value),
            Self::Right(value) => Ok(value),
        }
    }
}

impl<L, R> Either<L, Either<L, R>> {
    /// Remove one level of right-side nesting.
    pub fn flatten(self) -> Either<L, R> {
        combinators::flatten::<EitherKind<L>, _>(self)
    }
}

impl<L, R> From<Result<R, L>> for Either<L, R> {
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(value) => Self::Left(value),
        }
    }
}
