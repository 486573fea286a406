//! `Either` with a third, absorbing `Empty` state.

use super::Either;
use crate::core::combinators;
use crate::core::{AccessError, Monad, MonadZero};
use crate::maybe::Maybe;
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

/// At most one of two values.
///
/// `Empty` is absorbing: every combinator propagates it unchanged, and a
/// failing `filter` demotes to it instead of erroring.
///
/// # Example
///
/// ```rust
/// use tagged::Switch;
///
/// let picked: Switch<String, i32> = Switch::right(7);
/// let even = picked.filter(|n| n % 2 == 0);
/// assert!(even.is_empty());
///
/// let described = even.fold(|l| l, |r| r.to_string(), || "nothing".to_string());
/// assert_eq!(described, "nothing");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Switch<L, R> {
    Left(L),
    Right(R),
    Empty,
}

/// Kind marker naming the `Switch<L, _>` family for the [`Monad`] combinators.
#[derive(Clone, Copy, Debug)]
pub struct SwitchKind<L>(PhantomData<fn() -> L>);

impl<L> Monad for SwitchKind<L> {
    type Of<T> = Switch<L, T>;

    fn pure<T>(value: T) -> Switch<L, T> {
        Switch::Right(value)
    }

    fn bind<T, U, F>(m: Switch<L, T>, f: F) -> Switch<L, U>
    where
        F: FnOnce(T) -> Switch<L, U>,
    {
        m.bind(f)
    }

    fn map<T, U, F>(m: Switch<L, T>, f: F) -> Switch<L, U>
    where
        F: FnOnce(T) -> U,
    {
        m.map(f)
    }
}

impl<L> MonadZero for SwitchKind<L> {
    fn zero<T>() -> Switch<L, T> {
        Switch::Empty
    }
}

impl<L, R> Default for Switch<L, R> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<L, R> Switch<L, R> {
    /// A value on the left side.
    pub fn left(value: L) -> Self {
        Self::Left(value)
    }

    /// A value on the right side, the one the monadic combinators continue from.
    pub fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// The absorbing empty state; same as `Switch::Empty`.
    pub fn empty() -> Self {
        Self::Empty
    }

    /// Whether the left side is populated.
    pub fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Whether the right side is populated.
    pub fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Whether neither side is populated.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Self::Left(_) => "Left",
            Self::Right(_) => "Right",
            Self::Empty => "Empty",
        }
    }

    /// The left value; any other state is an [`AccessError`] naming it.
    ///
    /// ```rust
    /// use tagged::Switch;
    ///
    /// let value: Switch<&str, i32> = Switch::Empty;
    /// let err = value.left_value().unwrap_err();
    /// assert_eq!(err.to_string(), "Switch: expected the Left variant, found Empty");
    /// ```
    pub fn left_value(&self) -> Result<&L, AccessError> {
        match self {
            Self::Left(value) => Ok(value),
            other => Err(AccessError::wrong_variant("Switch", "Left", other.variant_name())),
        }
    }

    /// The right value; any other state is an [`AccessError`] naming it.
    pub fn right_value(&self) -> Result<&R, AccessError> {
        match self {
            Self::Right(value) => Ok(value),
            other => Err(AccessError::wrong_variant("Switch", "Right", other.variant_name())),
        }
    }

    /// Borrow the left value, or `None` for the other states.
    pub fn as_left(&self) -> Maybe<&L> {
        match self {
            Self::Left(value) => Maybe::Some(value),
            _ => Maybe::None,
        }
    }

    /// Borrow the right value, or `None` for the other states.
    pub fn as_right(&self) -> Maybe<&R> {
        match self {
            Self::Right(value) => Maybe::Some(value),
            _ => Maybe::None,
        }
    }

    /// Total dispatch over all three states.
    pub fn fold<U, FL, FR, FE>(self, on_left: FL, on_right: FR, on_empty: FE) -> U
    where
        FL: FnOnce(L) -> U,
        FR: FnOnce(R) -> U,
        FE: FnOnce() -> U,
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
            Self::Empty => on_empty(),
        }
    }

    /// Total dispatch for side effects; exactly one action runs.
    pub fn apply<FL, FR, FE>(&self, on_left: FL, on_right: FR, on_empty: FE)
    where
        FL: FnOnce(&L),
        FR: FnOnce(&R),
        FE: FnOnce(),
    {
        match self {
            Self::Left(value) => on_left(value),
            Self::Right(value) => on_right(value),
            Self::Empty => on_empty(),
        }
    }

    /// Transform a left value; the other states pass through.
    pub fn map_left<M, F>(self, f: F) -> Switch<M, R>
    where
        F: FnOnce(L) -> M,
    {
        match self {
            Self::Left(value) => Switch::Left(f(value)),
            Self::Right(value) => Switch::Right(value),
            Self::Empty => Switch::Empty,
        }
    }

    /// Transform a right value; the other states pass through.
    pub fn map_right<U, F>(self, f: F) -> Switch<L, U>
    where
        F: FnOnce(R) -> U,
    {
        match self {
            Self::Left(value) => Switch::Left(value),
            Self::Right(value) => Switch::Right(f(value)),
            Self::Empty => Switch::Empty,
        }
    }

    /// Same as [`map_right`](Self::map_right).
    pub fn map<U, F>(self, f: F) -> Switch<L, U>
    where
        F: FnOnce(R) -> U,
    {
        self.map_right(f)
    }

    /// Continue from the right value; a left value and `Empty` pass through.
    ///
    /// ```rust
    /// use tagged::Switch;
    ///
    /// let half = |x: i32| if x % 2 == 0 { Switch::right(x / 2) } else { Switch::left("odd") };
    /// assert_eq!(Switch::right(8).bind(half).bind(half), Switch::right(2));
    /// assert_eq!(Switch::right(6).bind(half).bind(half), Switch::left("odd"));
    /// assert_eq!(Switch::<&str, i32>::Empty.bind(half), Switch::Empty);
    /// ```
    pub fn bind<U, F>(self, f: F) -> Switch<L, U>
    where
        F: FnOnce(R) -> Switch<L, U>,
    {
        match self {
            Self::Left(value) => Switch::Left(value),
            Self::Right(value) => f(value),
            Self::Empty => Switch::Empty,
        }
    }

    /// Continue from the left value; a right value and `Empty` pass through.
    pub fn bind_left<M, F>(self, f: F) -> Switch<M, R>
    where
        F: FnOnce(L) -> Switch<M, R>,
    {
        match self {
            Self::Left(value) => f(value),
            Self::Right(value) => Switch::Right(value),
            Self::Empty => Switch::Empty,
        }
    }

    /// Keep a right value only if `predicate` holds; otherwise `Empty`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&R) -> bool,
    {
        self.filter_right(predicate)
    }

    /// Keep a right value only if `predicate` holds; a left value is left untouched.
    pub fn filter_right<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&R) -> bool,
    {
        combinators::filter::<SwitchKind<L>, _, _>(self, predicate)
    }

    /// Keep a left value only if `predicate` holds; otherwise `Empty`.
    /// A right value is left untouched.
    pub fn filter_left<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&L) -> bool,
    {
        match self {
            Self::Left(value) => {
                if predicate(&value) {
                    Self::Left(value)
                } else {
                    Self::Empty
                }
            }
            other => other,
        }
    }

    /// Exchange the side types; `Empty` stays `Empty`.
    pub fn swap(self) -> Switch<R, L> {
        match self {
            Self::Left(value) => Switch::Right(value),
            Self::Right(value) => Switch::Left(value),
            Self::Empty => Switch::Empty,
        }
    }

    /// The left value, or `Err(error)` for the other states.
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
            _ => Err(error()),
        }
    }

    /// The right value, or `Err(error)` for the other states.
    pub fn right_or_err<E>(self, error: E) -> Result<R, E> {
        self.right_or_else_err(move || error)
    }

    /// Like [`right_or_err`](Self::right_or_err), building the error lazily.
    pub fn right_or_else_err<E, F>(self, error: F) -> Result<R, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Right(value) => Ok(value),
            _ => Err(error()),
        }
    }

    /// `None` for `Empty`, otherwise the populated side as an `Either`.
    pub fn into_either(self) -> Maybe<Either<L, R>> {
        match self {
            Self::Left(value) => Maybe::Some(Either::Left(value)),
            Self::Right(value) => Maybe::Some(Either::Right(value)),
            Self::Empty => Maybe::None,
        }
    }

    /// Continue with `next` when this is a right value.
    pub fn then<U>(self, next: Switch<L, U>) -> Switch<L, U> {
        combinators::then::<SwitchKind<L>, _, _>(self, next)
    }

    /// Bind a dependent `Switch`, then combine both right values.
    pub fn select_many<U, V, F, P>(self, f: F, project: P) -> Switch<L, V>
    where
        F: FnOnce(&R) -> Switch<L, U>,
        P: FnOnce(R, U) -> V,
    {
        combinators::select_many::<SwitchKind<L>, _, _, _, _, _>(self, f, project)
    }

    /// Combine two right values whose keys are equal; a key mismatch is `Empty`.
    pub fn join<I, K, V, OK, IK, P>(
        self,
        inner: Switch<L, I>,
        outer_key: OK,
        inner_key: IK,
        project: P,
    ) -> Switch<L, V>
    where
        K: PartialEq,
        OK: FnOnce(&R) -> K,
        IK: FnOnce(&I) -> K,
        P: FnOnce(R, I) -> V,
    {
        combinators::join::<SwitchKind<L>, _, _, _, _, _, _, _>(
            self, inner, outer_key, inner_key, project,
        )
    }

    /// Like [`join`](Self::join), comparing keys with `comparer`.
    pub fn join_by<I, K, V, OK, IK, C, P>(
        self,
        inner: Switch<L, I>,
        outer_key: OK,
        inner_key: IK,
        comparer: C,
        project: P,
    ) -> Switch<L, V>
    where
        OK: FnOnce(&R) -> K,
        IK: FnOnce(&I) -> K,
        C: FnOnce(&K, &K) -> bool,
        P: FnOnce(R, I) -> V,
    {
        combinators::join_by::<SwitchKind<L>, _, _, _, _, _, _, _, _>(
            self, inner, outer_key, inner_key, comparer, project,
        )
    }

    /// Pair a right value with the inner value when keys match.
    ///
    /// The group handed to `project` is `Empty` when the inner value is
    /// `Empty` or its key differs; an inner left value is handed over as is.
    pub fn group_join<I, K, V, OK, IK, P>(
        self,
        inner: Switch<L, I>,
        outer_key: OK,
        inner_key: IK,
        project: P,
    ) -> Switch<L, V>
    where
        K: PartialEq,
        OK: FnOnce(&R) -> K,
        IK: FnOnce(&I) -> K,
        P: FnOnce(R, Switch<L, I>) -> V,
    {
        combinators::group_join::<SwitchKind<L>, _, _, _, _, _, _, _>(
            self, inner, outer_key, inner_key, project,
        )
    }

    /// Like [`group_join`](Self::group_join), comparing keys with `comparer`.
    pub fn group_join_by<I, K, V, OK, IK, C, P>(
        self,
        inner: Switch<L, I>,
        outer_key: OK,
        inner_key: IK,
        comparer: C,
        project: P,
    ) -> Switch<L, V>
    where
        OK: FnOnce(&R) -> K,
        IK: FnOnce(&I) -> K,
        C: FnOnce(&K, &K) -> bool,
        P: FnOnce(R, Switch<L, I>) -> V,
    {
        combinators::group_join_by::<SwitchKind<L>, _, _, _, _, _, _, _, _>(
            self, inner, outer_key, inner_key, comparer, project,
        )
    }

    /// Combine right values; otherwise the first left or `Empty` operand.
    ///
    /// ```rust
    /// use tagged::Switch;
    ///
    /// let a: Switch<&str, i32> = Switch::right(2);
    /// assert_eq!(a.zip(Switch::right(3), |x, y| x * y), Switch::right(6));
    /// assert_eq!(a.zip(Switch::<&str, i32>::Empty, |x, y| x * y), Switch::Empty);
    /// assert_eq!(a.zip(Switch::<&str, i32>::left("no"), |x, y| x * y), Switch::left("no"));
    /// ```
    pub fn zip<B, U, F>(self, b: Switch<L, B>, f: F) -> Switch<L, U>
    where
        F: FnOnce(R, B) -> U,
    {
        combinators::zip2::<SwitchKind<L>, _, _, _, _>(self, b, f)
    }

    /// Three-operand [`zip`](Self::zip).
    pub fn zip3<B, C, U, F>(self, b: Switch<L, B>, c: Switch<L, C>, f: F) -> Switch<L, U>
    where
        F: FnOnce(R, B, C) -> U,
    {
        combinators::zip3::<SwitchKind<L>, _, _, _, _, _>(self, b, c, f)
    }

    /// Four-operand [`zip`](Self::zip).
    pub fn zip4<B, C, D, U, F>(
        self,
        b: Switch<L, B>,
        c: Switch<L, C>,
        d: Switch<L, D>,
        f: F,
    ) -> Switch<L, U>
    where
        F: FnOnce(R, B, C, D) -> U,
    {
        combinators::zip4::<SwitchKind<L>, _, _, _, _, _, _>(self, b, c, d, f)
    }

    /// Five-operand [`zip`](Self::zip).
    pub fn zip5<B, C, D, E, U, F>(
        self,
        b: Switch<L, B>,
        c: Switch<L, C>,
        d: Switch<L, D>,
        e: Switch<L, E>,
        f: F,
    ) -> Switch<L, U>
    where
        F: FnOnce(R, B, C, D, E) -> U,
    {
        combinators::zip5::<SwitchKind<L>, _, _, _, _, _, _, _>(self, b, c, d, e, f)
    }
}

impl<L, R> Switch<L, Switch<L, R>> {
    /// Remove one level of right-side nesting.
    pub fn flatten(self) -> Switch<L, R> {
        combinators::flatten::<SwitchKind<L>, _>(self)
    }
}

impl<L, R> From<Either<L, R>> for Switch<L, R> {
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(value) => Self::Left(value),
            Either::Right(value) => Self::Right(value),
        }
    }
}
