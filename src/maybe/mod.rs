//! Optional values.
//!
//! `Maybe<T>` is the foundational container of this crate: either `Some`
//! value or `None`. Every combinator short-circuits on `None` without
//! evaluating its closure.

mod iter;

pub use iter::{IntoIter, Iter};

use crate::core::combinators;
use crate::core::{AccessError, Monad, MonadZero};
use crate::outcome::Outcome;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An optional value.
///
/// Equality is structural: two values are equal iff both are `None`, or
/// both are `Some` with equal payloads.
///
/// # Example
///
/// ```rust
/// use tagged::Maybe;
///
/// fn parse_port(text: &str) -> Maybe<u16> {
///     Maybe::of(text.parse::<u16>().ok())
/// }
///
/// let port = parse_port("8080")
///     .filter(|p| *p >= 1024)
///     .map(|p| p + 1);
/// assert_eq!(port, Maybe::some(8081));
///
/// assert_eq!(parse_port("http"), Maybe::none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Maybe<T> {
    Some(T),
    None,
}

/// Kind marker naming the `Maybe` family for the [`Monad`] combinators.
#[derive(Clone, Copy, Debug)]
pub enum MaybeKind {}

impl Monad for MaybeKind {
    type Of<T> = Maybe<T>;

    fn pure<T>(value: T) -> Maybe<T> {
        Maybe::Some(value)
    }

    fn bind<T, U, F>(m: Maybe<T>, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        m.bind(f)
    }

    fn map<T, U, F>(m: Maybe<T>, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        m.map(f)
    }
}

impl MonadZero for MaybeKind {
    fn zero<T>() -> Maybe<T> {
        Maybe::None
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::None
    }
}

impl<T> Maybe<T> {
    pub fn some(value: T) -> Self {
        Self::Some(value)
    }

    pub fn none() -> Self {
        Self::None
    }

    /// Wrap a possibly absent value; an absent input becomes `None`.
    ///
    /// ```rust
    /// use tagged::Maybe;
    ///
    /// assert_eq!(Maybe::of(Some(5)), Maybe::some(5));
    /// assert_eq!(Maybe::<i32>::of(None), Maybe::none());
    /// ```
    pub fn of(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None,
        }
    }

    pub fn is_some(&self) -> bool {
        matches!(self, Self::Some(_))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The held value; accessing it on `None` is an error.
    pub fn value(&self) -> Result<&T, AccessError> {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(AccessError::wrong_variant("Maybe", "Some", "None")),
        }
    }

    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        self.value_or_else(T::default)
    }

    pub fn value_or(self, fallback: T) -> T {
        match self {
            Self::Some(value) => value,
            Self::None => fallback,
        }
    }

    pub fn value_or_else<F>(self, fallback: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Some(value) => value,
            Self::None => fallback(),
        }
    }

    /// The held value, or `Err(error)` when absent.
    pub fn value_or_err<E>(self, error: E) -> Result<T, E> {
        self.value_or_else_err(move || error)
    }

    pub fn value_or_else_err<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Some(value) => Ok(value),
            Self::None => Err(error()),
        }
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Some(value) => Maybe::Some(value),
            Self::None => Maybe::None,
        }
    }

    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Some(value) => Some(value),
            Self::None => None,
        }
    }

    /// Convert to an `Outcome`, failing with `message` when absent.
    #[track_caller]
    pub fn to_outcome(self, message: impl Into<String>) -> Outcome<T> {
        match self {
            Self::Some(value) => Outcome::success(value),
            Self::None => Outcome::failure_message(message),
        }
    }

    pub fn bind<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Some(value) => f(value),
            Self::None => Maybe::None,
        }
    }

    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Some(value) => Maybe::Some(f(value)),
            Self::None => Maybe::None,
        }
    }

    /// Keep the value only if `predicate` holds; a failing predicate yields `None`.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        combinators::filter::<MaybeKind, _, _>(self, predicate)
    }

    pub fn then<U>(self, next: Maybe<U>) -> Maybe<U> {
        combinators::then::<MaybeKind, _, _>(self, next)
    }

    pub fn select_many<U, V, F, P>(self, f: F, project: P) -> Maybe<V>
    where
        F: FnOnce(&T) -> Maybe<U>,
        P: FnOnce(T, U) -> V,
    {
        combinators::select_many::<MaybeKind, _, _, _, _, _>(self, f, project)
    }

    pub fn join<I, K, V, OK, IK, P>(
        self,
        inner: Maybe<I>,
        outer_key: OK,
        inner_key: IK,
        project: P,
    ) -> Maybe<V>
    where
        K: PartialEq,
        OK: FnOnce(&T) -> K,
        IK: FnOnce(&I) -> K,
        P: FnOnce(T, I) -> V,
    {
        combinators::join::<MaybeKind, _, _, _, _, _, _, _>(
            self, inner, outer_key, inner_key, project,
        )
    }

    pub fn join_by<I, K, V, OK, IK, C, P>(
        self,
        inner: Maybe<I>,
        outer_key: OK,
        inner_key: IK,
        comparer: C,
        project: P,
    ) -> Maybe<V>
    where
        OK: FnOnce(&T) -> K,
        IK: FnOnce(&I) -> K,
        C: FnOnce(&K, &K) -> bool,
        P: FnOnce(T, I) -> V,
    {
        combinators::join_by::<MaybeKind, _, _, _, _, _, _, _, _>(
            self, inner, outer_key, inner_key, comparer, project,
        )
    }

    pub fn group_join<I, K, V, OK, IK, P>(
        self,
        inner: Maybe<I>,
        outer_key: OK,
        inner_key: IK,
        project: P,
    ) -> Maybe<V>
    where
        K: PartialEq,
        OK: FnOnce(&T) -> K,
        IK: FnOnce(&I) -> K,
        P: FnOnce(T, Maybe<I>) -> V,
    {
        combinators::group_join::<MaybeKind, _, _, _, _, _, _, _>(
            self, inner, outer_key, inner_key, project,
        )
    }

    pub fn group_join_by<I, K, V, OK, IK, C, P>(
        self,
        inner: Maybe<I>,
        outer_key: OK,
        inner_key: IK,
        comparer: C,
        project: P,
    ) -> Maybe<V>
    where
        OK: FnOnce(&T) -> K,
        IK: FnOnce(&I) -> K,
        C: FnOnce(&K, &K) -> bool,
        P: FnOnce(T, Maybe<I>) -> V,
    {
        combinators::group_join_by::<MaybeKind, _, _, _, _, _, _, _, _>(
            self, inner, outer_key, inner_key, comparer, project,
        )
    }

    /// Combine two values; `Some` only when both are present.
    pub fn zip<B, U, F>(self, b: Maybe<B>, f: F) -> Maybe<U>
    where
        F: FnOnce(T, B) -> U,
    {
        combinators::zip2::<MaybeKind, _, _, _, _>(self, b, f)
    }

    pub fn zip3<B, C, U, F>(self, b: Maybe<B>, c: Maybe<C>, f: F) -> Maybe<U>
    where
        F: FnOnce(T, B, C) -> U,
    {
        combinators::zip3::<MaybeKind, _, _, _, _, _>(self, b, c, f)
    }

    pub fn zip4<B, C, D, U, F>(self, b: Maybe<B>, c: Maybe<C>, d: Maybe<D>, f: F) -> Maybe<U>
    where
        F: FnOnce(T, B, C, D) -> U,
    {
        combinators::zip4::<MaybeKind, _, _, _, _, _, _>(self, b, c, d, f)
    }

    pub fn zip5<B, C, D, E, U, F>(
        self,
        b: Maybe<B>,
        c: Maybe<C>,
        d: Maybe<D>,
        e: Maybe<E>,
        f: F,
    ) -> Maybe<U>
    where
        F: FnOnce(T, B, C, D, E) -> U,
    {
        combinators::zip5::<MaybeKind, _, _, _, _, _, _, _>(self, b, c, d, e, f)
    }

    /// Run one of two side effects and return `self` unchanged.
    pub fn run<S, N>(self, on_some: S, on_none: N) -> Self
    where
        S: FnOnce(&T),
        N: FnOnce(),
    {
        match &self {
            Self::Some(value) => on_some(value),
            Self::None => on_none(),
        }
        self
    }

    pub fn on_some<S>(self, f: S) -> Self
    where
        S: FnOnce(&T),
    {
        self.run(f, || {})
    }

    pub fn on_none<N>(self, f: N) -> Self
    where
        N: FnOnce(),
    {
        self.run(|_| {}, f)
    }

    /// Structural equality under an explicit comparer.
    pub fn equals_by<C>(&self, other: &Self, comparer: C) -> bool
    where
        C: FnOnce(&T, &T) -> bool,
    {
        match (self, other) {
            (Self::Some(a), Self::Some(b)) => comparer(a, b),
            (Self::None, Self::None) => true,
            _ => false,
        }
    }
}

impl<T> Maybe<Maybe<T>> {
    pub fn flatten(self) -> Maybe<T> {
        combinators::flatten::<MaybeKind, _>(self)
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Self::of(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Some(value) => write!(f, "Some({value})"),
            Self::None => f.write_str("None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn of_coerces_absent_to_none() {
        assert_eq!(Maybe::<String>::of(None), Maybe::None);
        assert_eq!(Maybe::of(Some(5)), Maybe::Some(5));
        assert_eq!(Maybe::of(Some(5)).value(), Ok(&5));
    }

    #[test]
    fn of_infers_item_type_inside_bind() {
        let parsed = Maybe::some("7").bind(|s| Maybe::of(s.parse::<u8>().ok()));
        assert_eq!(parsed, Maybe::some(7));

        let rejected = Maybe::some("seven").bind(|s| Maybe::of(s.parse::<u8>().ok()));
        assert_eq!(rejected, Maybe::none());
    }

    #[test]
    fn value_on_none_is_access_error() {
        let err = Maybe::<i32>::none().value().unwrap_err();
        assert_eq!(err, AccessError::wrong_variant("Maybe", "Some", "None"));
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Maybe::<i32>::none(), Maybe::none());
        assert_eq!(Maybe::some(1), Maybe::some(1));
        assert_ne!(Maybe::some(1), Maybe::some(2));
        assert_ne!(Maybe::some(1), Maybe::none());
    }

    #[test]
    fn none_is_distinct_from_an_absent_maybe() {
        let present_none: Option<Maybe<i32>> = Some(Maybe::None);
        assert_ne!(present_none, None);
    }

    #[test]
    fn equals_by_uses_comparer() {
        let a = Maybe::some("Hello");
        let b = Maybe::some("HELLO");
        assert!(a.equals_by(&b, |x, y| x.eq_ignore_ascii_case(y)));
        assert!(!a.equals_by(&Maybe::none(), |x, y| x == y));
        assert!(Maybe::<&str>::none().equals_by(&Maybe::none(), |_, _| false));
    }

    #[test]
    fn extraction_fallbacks() {
        assert_eq!(Maybe::<i32>::none().value_or_default(), 0);
        assert_eq!(Maybe::none().value_or(9), 9);
        assert_eq!(Maybe::some(1).value_or_else(|| 9), 1);
        assert_eq!(Maybe::<i32>::none().value_or_err("missing"), Err("missing"));
        assert_eq!(Maybe::some(2).value_or_else_err(|| "missing"), Ok(2));
    }

    #[test]
    fn bind_skips_function_on_none() {
        let calls = Cell::new(0);
        let result = Maybe::<i32>::none().bind(|x| {
            calls.set(calls.get() + 1);
            Maybe::some(x + 1)
        });
        assert_eq!(result, Maybe::none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn bind_chains_dependent_computations() {
        let result = Maybe::some("42")
            .bind(|s| Maybe::of(s.parse::<i32>().ok()))
            .bind(|n| if n > 0 { Maybe::some(n * 2) } else { Maybe::none() });
        assert_eq!(result, Maybe::some(84));
    }

    #[test]
    fn filter_demotes_without_error() {
        assert_eq!(Maybe::some(3).filter(|x| x % 2 == 0), Maybe::none());
        assert_eq!(Maybe::some(4).filter(|x| x % 2 == 0), Maybe::some(4));
        assert_eq!(Maybe::<i32>::none().filter(|_| true), Maybe::none());
    }

    #[test]
    fn zip_requires_all_operands() {
        let a = Maybe::some(1);
        assert_eq!(a.zip(Maybe::some(2), |x, y| x + y), Maybe::some(3));
        assert_eq!(a.zip(Maybe::<i32>::none(), |x, y| x + y), Maybe::none());
        assert_eq!(
            a.zip5(
                Maybe::some(2),
                Maybe::some(3),
                Maybe::some(4),
                Maybe::some(5),
                |a, b, c, d, e| a + b + c + d + e
            ),
            Maybe::some(15)
        );
        let missing_last = a.zip4(
            Maybe::some(2),
            Maybe::some(3),
            Maybe::<i32>::none(),
            |a, b, c, d| a + b + c + d,
        );
        assert_eq!(missing_last, Maybe::none());
    }

    #[test]
    fn select_many_and_then() {
        let result = Maybe::some(3).select_many(|x| Maybe::some(x * 2), |x, y| (x, y));
        assert_eq!(result, Maybe::some((3, 6)));
        assert_eq!(Maybe::some(1).then(Maybe::some('a')), Maybe::some('a'));
    }

    #[test]
    fn join_and_group_join_by_key() {
        let order = Maybe::some((7_u32, "widget"));
        let customer = Maybe::some((7_u32, "Ada"));

        let joined = order.join(
            customer,
            |o| o.0,
            |c| c.0,
            |o, c| format!("{} for {}", o.1, c.1),
        );
        assert_eq!(joined, Maybe::some("widget for Ada".to_string()));

        let grouped = order.group_join(
            Maybe::some((8_u32, "Bob")),
            |o| o.0,
            |c| c.0,
            |o, c| (o.1, c.is_some()),
        );
        assert_eq!(grouped, Maybe::some(("widget", false)));
    }

    #[test]
    fn taps_return_self_unchanged() {
        let seen = Cell::new(0);
        let missing = Cell::new(false);

        let value = Maybe::some(5).on_some(|x| seen.set(*x)).on_none(|| missing.set(true));
        assert_eq!(value, Maybe::some(5));
        assert_eq!(seen.get(), 5);
        assert!(!missing.get());

        let absent = Maybe::<i32>::none().run(|_| seen.set(-1), || missing.set(true));
        assert_eq!(absent, Maybe::none());
        assert!(missing.get());
        assert_eq!(seen.get(), 5);
    }

    #[test]
    fn converts_to_outcome() {
        let failure = Maybe::<i32>::none().to_outcome("no value");
        assert_eq!(failure.error_message(), Ok("no value".to_string()));
        assert_eq!(Maybe::some(1).to_outcome("no value").value(), Ok(&1));
    }

    #[test]
    fn displays_both_variants() {
        assert_eq!(Maybe::some(3).to_string(), "Some(3)");
        assert_eq!(Maybe::<i32>::none().to_string(), "None");
    }

    #[test]
    fn option_round_trip() {
        let maybe: Maybe<i32> = Some(4).into();
        let option: Option<i32> = maybe.into();
        assert_eq!(option, Some(4));
    }

    #[test]
    fn maybe_serializes_correctly() {
        let some = Maybe::some(12);
        let json = serde_json::to_string(&some).unwrap();
        let deserialized: Maybe<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(some, deserialized);
    }
}
