//! Query-expression syntax over any container.

/// Chain dependent computations with query syntax.
///
/// `from <pattern> in <container>;` binds the held value (via `bind`),
/// `let <pattern> = <expr>;` introduces a plain binding, and the final
/// `select <expr>` maps the last container. Any non-successful state
/// short-circuits the rest of the query.
///
/// # Example
///
/// ```
/// use tagged::{query, Maybe};
///
/// let total = query! {
///     from a in Maybe::some(2);
///     from b in Maybe::some(3);
///     let sum = a + b;
///     select sum * 10
/// };
/// assert_eq!(total, Maybe::some(50));
///
/// let missing = query! {
///     from a in Maybe::some(2);
///     from b in Maybe::<i32>::none();
///     select a + b
/// };
/// assert_eq!(missing, Maybe::none());
/// ```
#[macro_export]
macro_rules! query {
    (from $p:pat in $m:expr; select $e:expr $(;)?) => {
        $m.map(move |$p| $e)
    };
    (from $p:pat in $m:expr; $(let $q:pat = $v:expr;)+ select $e:expr $(;)?) => {
        $m.map(move |$p| {
            $(let $q = $v;)+
            $e
        })
    };
    (from $p:pat in $m:expr; $($rest:tt)+) => {
        $m.bind(move |$p| $crate::query!($($rest)+))
    };
    (let $p:pat = $v:expr; $($rest:tt)+) => {{
        let $p = $v;
        $crate::query!($($rest)+)
    }};
}

#[cfg(test)]
mod tests {
    use crate::{Either, Maybe, Outcome, Switch};

    #[test]
    fn query_over_maybe() {
        let result = query! {
            from x in Maybe::some(4);
            from y in Maybe::some(x + 1);
            select (x, y)
        };
        assert_eq!(result, Maybe::some((4, 5)));
    }

    #[test]
    fn query_with_let_binding() {
        let result = query! {
            from x in Maybe::some(4);
            let doubled = x * 2;
            from y in Maybe::some(doubled + 1);
            select y
        };
        assert_eq!(result, Maybe::some(9));
    }

    #[test]
    fn query_with_let_before_select() {
        let result = query! {
            from x in Maybe::some(4);
            let doubled = x * 2;
            let label = format!("{x}x2");
            select (label, doubled)
        };
        assert_eq!(result, Maybe::some(("4x2".to_string(), 8)));
    }

    #[test]
    fn query_over_outcome_short_circuits() {
        let result: Outcome<i32> = query! {
            from x in Outcome::success(1);
            from y in Outcome::<i32>::failure_message("missing");
            select x + y
        };
        assert_eq!(result.error_message(), Ok("missing".to_string()));
    }

    #[test]
    fn query_over_either_and_switch() {
        let either: Either<&str, i32> = query! {
            from a in Either::<&str, i32>::right(1);
            from b in Either::<&str, i32>::right(2);
            select a + b
        };
        assert_eq!(either, Either::right(3));

        let switch: Switch<&str, i32> = query! {
            from a in Switch::<&str, i32>::right(1);
            from b in Switch::<&str, i32>::Empty;
            select a + b
        };
        assert!(switch.is_empty());
    }

    #[test]
    fn query_destructures_patterns() {
        let result = query! {
            from (name, age) in Maybe::some(("Ada", 36));
            select format!("{name} is {age}")
        };
        assert_eq!(result, Maybe::some("Ada is 36".to_string()));
    }
}
