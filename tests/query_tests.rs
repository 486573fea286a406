//! Query expressions chaining several containers end to end.

use std::cell::Cell;
use tagged::{query, Either, Maybe, Outcome, Switch, VoidOrError};

#[derive(Clone, Debug, PartialEq)]
struct Endpoint {
    host: String,
    port: u16,
}

fn lookup<'a>(pairs: &'a [(&'a str, &'a str)], key: &str) -> Maybe<&'a str> {
    Maybe::of(pairs.iter().find(|(k, _)| *k == key).map(|(_, v)| *v))
}

fn parse_port(text: &str) -> Outcome<u16> {
    Outcome::catching(|| text.parse::<u16>())
}

fn endpoint(pairs: &[(&str, &str)]) -> Outcome<Endpoint> {
    query! {
        from host in lookup(pairs, "host").to_outcome("host is required");
        let host = host.to_string();
        from port_text in lookup(pairs, "port").to_outcome("port is required");
        from port in parse_port(port_text);
        select Endpoint { host, port }
    }
}

fn describe(pairs: &[(&str, &str)]) -> Outcome<String> {
    query! {
        from target in endpoint(pairs);
        let scheme = if target.port == 443 { "https" } else { "http" };
        let url = format!("{scheme}://{}:{}", target.host, target.port);
        select url
    }
}

#[test]
fn builds_endpoint_when_every_step_succeeds() {
    let pairs = [("host", "localhost"), ("port", "8080")];
    let result = endpoint(&pairs);
    assert_eq!(
        result.value(),
        Ok(&Endpoint {
            host: "localhost".to_string(),
            port: 8080,
        })
    );
}

#[test]
fn let_bindings_directly_before_select() {
    let secure = describe(&[("host", "example.org"), ("port", "443")]);
    assert_eq!(secure.value(), Ok(&"https://example.org:443".to_string()));

    let missing = describe(&[("port", "443")]);
    assert_eq!(missing.error_message(), Ok("host is required".to_string()));
}

#[test]
fn reports_first_missing_key() {
    let pairs = [("port", "8080")];
    let result = endpoint(&pairs);
    assert_eq!(result.error_message(), Ok("host is required".to_string()));
}

#[test]
fn surfaces_parse_error_as_original_type() {
    let pairs = [("host", "localhost"), ("port", "http")];
    let err = endpoint(&pairs).value_or_throw().unwrap_err();
    assert!(err.is::<std::num::ParseIntError>());
}

#[test]
fn failure_is_carried_through_unchanged() {
    let failed: Outcome<i32> = Outcome::failure_message("upstream");
    let original = failed.error().unwrap().clone();

    let result = query! {
        from a in failed;
        from b in Outcome::success(a + 1);
        select a * b
    };

    assert_eq!(result.error(), Ok(&original));
    assert!(result.error().unwrap().same_capture(&original));
}

#[test]
fn later_containers_are_not_evaluated_after_absence() {
    let evaluated = Cell::new(false);
    let flag = &evaluated;
    let result = query! {
        from a in Maybe::<i32>::none();
        from b in {
            flag.set(true);
            Maybe::some(a)
        };
        select b
    };
    assert!(result.is_none());
    assert!(!evaluated.get());
}

#[test]
fn either_query_stops_at_first_left() {
    fn checked_div(a: i32, b: i32) -> Either<String, i32> {
        if b == 0 {
            Either::left(format!("{a} / 0"))
        } else {
            Either::right(a / b)
        }
    }

    let ok = query! {
        from x in checked_div(100, 5);
        from y in checked_div(x, 2);
        select y + 1
    };
    assert_eq!(ok, Either::right(11));

    let err = query! {
        from x in checked_div(100, 0);
        from y in checked_div(x, 2);
        select y + 1
    };
    assert_eq!(err, Either::left("100 / 0".to_string()));
}

#[test]
fn switch_query_filters_to_empty() {
    let result: Switch<String, i32> = query! {
        from x in Switch::right(7).filter(|x: &i32| *x > 10);
        from y in Switch::right(x * 2);
        select x + y
    };
    assert!(result.is_empty());

    let kept: Switch<String, i32> = query! {
        from x in Switch::right(12).filter(|x: &i32| *x > 10);
        from y in Switch::right(x * 2);
        select x + y
    };
    assert_eq!(kept, Switch::right(36));
}

#[test]
fn outcome_query_feeds_a_signal() {
    let pairs = [("host", "db"), ("port", "70000")];
    let signal = VoidOrError::from_result(endpoint(&pairs).into_result().map(|_| ()));
    assert!(signal.is_error());
    assert!(signal.throw_if_error().is_err());
}
