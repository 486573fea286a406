//! Combinators written once over [`Monad`] and [`MonadZero`].
//!
//! Each container exposes these as inherent methods (`Maybe::zip3`,
//! `Switch::join`, ...), so callers rarely name a kind marker. The free
//! functions are useful when writing code generic over the container.
//!
//! Operands are inspected left to right; the first operand that is not in
//! its successful state decides the result, and later closures never run.

use super::monad::{Monad, MonadZero};

/// Sequence two containers, keeping the second value.
pub fn then<M: Monad, T, U>(m: M::Of<T>, next: M::Of<U>) -> M::Of<U> {
    M::bind::<T, U, _>(m, move |_| next)
}

/// Remove one level of nesting.
pub fn flatten<M: Monad, T>(m: M::Of<M::Of<T>>) -> M::Of<T> {
    M::bind::<M::Of<T>, T, _>(m, |inner| inner)
}

pub fn zip2<M, A, B, U, F>(a: M::Of<A>, b: M::Of<B>, f: F) -> M::Of<U>
where
    M: Monad,
    F: FnOnce(A, B) -> U,
{
    M::bind::<A, U, _>(a, move |a| M::map::<B, U, _>(b, move |b| f(a, b)))
}

pub fn zip3<M, A, B, C, U, F>(a: M::Of<A>, b: M::Of<B>, c: M::Of<C>, f: F) -> M::Of<U>
where
    M: Monad,
    F: FnOnce(A, B, C) -> U,
{
    M::bind::<A, U, _>(a, move |a| zip2::<M, B, C, U, _>(b, c, move |b, c| f(a, b, c)))
}

pub fn zip4<M, A, B, C, D, U, F>(
    a: M::Of<A>,
    b: M::Of<B>,
    c: M::Of<C>,
    d: M::Of<D>,
    f: F,
) -> M::Of<U>
where
    M: Monad,
    F: FnOnce(A, B, C, D) -> U,
{
    M::bind::<A, U, _>(a, move |a| {
        zip3::<M, B, C, D, U, _>(b, c, d, move |b, c, d| f(a, b, c, d))
    })
}

pub fn zip5<M, A, B, C, D, E, U, F>(
    a: M::Of<A>,
    b: M::Of<B>,
    c: M::Of<C>,
    d: M::Of<D>,
    e: M::Of<E>,
    f: F,
) -> M::Of<U>
where
    M: Monad,
    F: FnOnce(A, B, C, D, E) -> U,
{
    M::bind::<A, U, _>(a, move |a| {
        zip4::<M, B, C, D, E, U, _>(b, c, d, e, move |b, c, d, e| f(a, b, c, d, e))
    })
}

/// Lift a plain unary function to operate on containers.
///
/// # Example
///
/// ```rust
/// use tagged::core::combinators::lift;
/// use tagged::{Maybe, MaybeKind};
///
/// let len = lift::<MaybeKind, _, _, _>(|s: &str| s.len());
/// assert_eq!(len(Maybe::some("four")), Maybe::some(4));
/// ```
pub fn lift<M, T, U, F>(f: F) -> impl FnOnce(M::Of<T>) -> M::Of<U>
where
    M: Monad,
    F: FnOnce(T) -> U,
{
    move |m| M::map::<T, U, _>(m, f)
}

pub fn lift2<M, A, B, U, F>(f: F) -> impl FnOnce(M::Of<A>, M::Of<B>) -> M::Of<U>
where
    M: Monad,
    F: FnOnce(A, B) -> U,
{
    move |a, b| zip2::<M, A, B, U, _>(a, b, f)
}

pub fn lift3<M, A, B, C, U, F>(f: F) -> impl FnOnce(M::Of<A>, M::Of<B>, M::Of<C>) -> M::Of<U>
where
    M: Monad,
    F: FnOnce(A, B, C) -> U,
{
    move |a, b, c| zip3::<M, A, B, C, U, _>(a, b, c, f)
}

/// Bind a dependent container, then combine both values (query `from .. from ..`).
pub fn select_many<M, T, U, V, F, P>(m: M::Of<T>, f: F, project: P) -> M::Of<V>
where
    M: Monad,
    F: FnOnce(&T) -> M::Of<U>,
    P: FnOnce(T, U) -> V,
{
    M::bind::<T, V, _>(m, move |t| {
        let inner = f(&t);
        M::map::<U, V, _>(inner, move |u| project(t, u))
    })
}

/// Keep the value only if `predicate` holds; otherwise demote to `zero`.
pub fn filter<M, T, P>(m: M::Of<T>, predicate: P) -> M::Of<T>
where
    M: MonadZero,
    P: FnOnce(&T) -> bool,
{
    M::bind::<T, T, _>(m, move |t| if predicate(&t) { M::pure(t) } else { M::zero() })
}

/// Single-element join on keys compared with `PartialEq`.
pub fn join<M, T, I, K, V, OK, IK, P>(
    outer: M::Of<T>,
    inner: M::Of<I>,
    outer_key: OK,
    inner_key: IK,
    project: P,
) -> M::Of<V>
where
    M: MonadZero,
    K: PartialEq,
    OK: FnOnce(&T) -> K,
    IK: FnOnce(&I) -> K,
    P: FnOnce(T, I) -> V,
{
    join_by::<M, T, I, K, V, OK, IK, _, P>(
        outer,
        inner,
        outer_key,
        inner_key,
        |a: &K, b: &K| a == b,
        project,
    )
}

/// Single-element join on keys compared with an explicit `comparer`.
///
/// Both sides must be present and their keys equal, otherwise the result
/// is the first non-successful operand or `zero`.
pub fn join_by<M, T, I, K, V, OK, IK, C, P>(
    outer: M::Of<T>,
    inner: M::Of<I>,
    outer_key: OK,
    inner_key: IK,
    comparer: C,
    project: P,
) -> M::Of<V>
where
    M: MonadZero,
    OK: FnOnce(&T) -> K,
    IK: FnOnce(&I) -> K,
    C: FnOnce(&K, &K) -> bool,
    P: FnOnce(T, I) -> V,
{
    M::bind::<T, V, _>(outer, move |t| {
        let key = outer_key(&t);
        M::bind::<I, V, _>(inner, move |i| {
            if comparer(&key, &inner_key(&i)) {
                M::pure(project(t, i))
            } else {
                M::zero()
            }
        })
    })
}

/// Pair the outer value with the inner one when keys match (`PartialEq`).
///
/// Unlike [`join`], a present outer always produces a result; the group is
/// `zero` when the inner value is absent or its key differs.
pub fn group_join<M, T, I, K, V, OK, IK, P>(
    outer: M::Of<T>,
    inner: M::Of<I>,
    outer_key: OK,
    inner_key: IK,
    project: P,
) -> M::Of<V>
where
    M: MonadZero,
    K: PartialEq,
    OK: FnOnce(&T) -> K,
    IK: FnOnce(&I) -> K,
    P: FnOnce(T, M::Of<I>) -> V,
{
    group_join_by::<M, T, I, K, V, OK, IK, _, P>(
        outer,
        inner,
        outer_key,
        inner_key,
        |a: &K, b: &K| a == b,
        project,
    )
}

pub fn group_join_by<M, T, I, K, V, OK, IK, C, P>(
    outer: M::Of<T>,
    inner: M::Of<I>,
    outer_key: OK,
    inner_key: IK,
    comparer: C,
    project: P,
) -> M::Of<V>
where
    M: MonadZero,
    OK: FnOnce(&T) -> K,
    IK: FnOnce(&I) -> K,
    C: FnOnce(&K, &K) -> bool,
    P: FnOnce(T, M::Of<I>) -> V,
{
    M::map::<T, V, _>(outer, move |t| {
        let key = outer_key(&t);
        let group = M::bind::<I, I, _>(inner, move |i| {
            if comparer(&key, &inner_key(&i)) {
                M::pure(i)
            } else {
                M::zero()
            }
        });
        project(t, group)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maybe::{Maybe, MaybeKind};
    use std::cell::Cell;

    #[test]
    fn then_keeps_second_value_when_first_present() {
        let result = then::<MaybeKind, _, _>(Maybe::some(1), Maybe::some("b"));
        assert_eq!(result, Maybe::some("b"));
    }

    #[test]
    fn then_short_circuits_on_absent_first() {
        let result = then::<MaybeKind, _, _>(Maybe::<i32>::none(), Maybe::some("b"));
        assert_eq!(result, Maybe::none());
    }

    #[test]
    fn flatten_removes_one_level() {
        assert_eq!(
            flatten::<MaybeKind, _>(Maybe::some(Maybe::some(3))),
            Maybe::some(3)
        );
        assert_eq!(
            flatten::<MaybeKind, i32>(Maybe::some(Maybe::none())),
            Maybe::none()
        );
    }

    #[test]
    fn zip_never_calls_combiner_on_absent_operand() {
        let calls = Cell::new(0);
        let result = zip3::<MaybeKind, _, _, _, _, _>(
            Maybe::some(1),
            Maybe::<i32>::none(),
            Maybe::some(3),
            |a, b, c| {
                calls.set(calls.get() + 1);
                a + b + c
            },
        );
        assert_eq!(result, Maybe::none());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn lift2_combines_present_values() {
        let add = lift2::<MaybeKind, _, _, _, _>(|a: i32, b: i32| a + b);
        assert_eq!(add(Maybe::some(2), Maybe::some(3)), Maybe::some(5));
    }

    #[test]
    fn lift3_propagates_absence() {
        let sum = lift3::<MaybeKind, _, _, _, _, _>(|a: i32, b: i32, c: i32| a + b + c);
        assert_eq!(sum(Maybe::some(1), Maybe::some(2), Maybe::none()), Maybe::none());
    }

    #[test]
    fn select_many_projects_both_values() {
        let result = select_many::<MaybeKind, _, _, _, _, _>(
            Maybe::some(4),
            |x| Maybe::some(*x * 10),
            |x, y| x + y,
        );
        assert_eq!(result, Maybe::some(44));
    }

    #[test]
    fn filter_demotes_to_zero() {
        assert_eq!(filter::<MaybeKind, _, _>(Maybe::some(3), |x| *x > 5), Maybe::none());
        assert_eq!(filter::<MaybeKind, _, _>(Maybe::some(7), |x| *x > 5), Maybe::some(7));
    }

    #[test]
    fn join_requires_matching_keys() {
        let matched = join::<MaybeKind, _, _, _, _, _, _, _>(
            Maybe::some(("alice", 1)),
            Maybe::some((1, "admin")),
            |user| user.1,
            |role| role.0,
            |user, role| format!("{}:{}", user.0, role.1),
        );
        assert_eq!(matched, Maybe::some("alice:admin".to_string()));

        let unmatched = join::<MaybeKind, _, _, _, _, _, _, _>(
            Maybe::some(("alice", 1)),
            Maybe::some((2, "admin")),
            |user| user.1,
            |role| role.0,
            |user, role| format!("{}:{}", user.0, role.1),
        );
        assert_eq!(unmatched, Maybe::none());
    }

    #[test]
    fn join_by_uses_explicit_comparer() {
        let result = join_by::<MaybeKind, _, _, _, _, _, _, _, _>(
            Maybe::some("Alice"),
            Maybe::some("ALICE"),
            |s| s.to_string(),
            |s| s.to_string(),
            |a, b| a.eq_ignore_ascii_case(b),
            |a, b| (a, b),
        );
        assert_eq!(result, Maybe::some(("Alice", "ALICE")));
    }

    #[test]
    fn group_join_keeps_outer_when_inner_mismatches() {
        let result = group_join::<MaybeKind, _, _, _, _, _, _, _>(
            Maybe::some(1),
            Maybe::some(2),
            |x| *x,
            |y| *y,
            |x, group: Maybe<i32>| (x, group.is_some()),
        );
        assert_eq!(result, Maybe::some((1, false)));
    }
}
