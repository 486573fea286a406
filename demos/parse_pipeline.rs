//! Parse Pipeline
//!
//! This example parses `key=value` settings into a typed record using the
//! optional and result containers.
//!
//! Key concepts:
//! - `Maybe` for lookups that may find nothing
//! - `Outcome` for parsing that may fail with a captured error
//! - `zip` to combine independent values
//! - `query!` to chain dependent steps
//! - `Either` for a value that is one of two shapes
//!
//! Run with: cargo run --example parse_pipeline

use std::time::Duration;
use tagged::{query, Either, Maybe, Outcome};

#[derive(Debug, Clone, PartialEq)]
struct Settings {
    name: String,
    workers: u32,
    timeout: Duration,
    target: Either<String, u16>,
}

fn lookup<'a>(lines: &[&'a str], key: &str) -> Maybe<&'a str> {
    Maybe::of(lines.iter().copied().find_map(|line| {
        let (k, v) = line.split_once('=')?;
        (k.trim() == key).then(|| v.trim())
    }))
}

fn parse_u32(text: &str) -> Outcome<u32> {
    Outcome::catching(|| text.parse::<u32>())
}

// "unix:/path" names a socket, anything else is a TCP port.
fn parse_target(text: &str) -> Outcome<Either<String, u16>> {
    match text.strip_prefix("unix:") {
        Some(path) => Outcome::success(Either::left(path.to_string())),
        None => Outcome::catching(|| text.parse::<u16>()).map(Either::right),
    }
}

fn parse_settings(lines: &[&str]) -> Outcome<Settings> {
    let name = lookup(lines, "name")
        .map(str::to_string)
        .value_or_else(|| "default".to_string());
    let workers = lookup(lines, "workers")
        .to_outcome("workers is required")
        .bind(parse_u32)
        .ensure(|n| *n > 0, "workers must be positive");

    query! {
        from workers in workers;
        from timeout_ms in lookup(lines, "timeout_ms")
            .map(parse_u32)
            .value_or(Outcome::success(1_000));
        from target in lookup(lines, "target").to_outcome("target is required");
        from target in parse_target(target);
        select Settings {
            name,
            workers,
            timeout: Duration::from_millis(u64::from(timeout_ms)),
            target,
        }
    }
}

fn describe(settings: &Settings) -> String {
    let target = settings
        .target
        .clone()
        .fold(|path| format!("socket {path}"), |port| format!("port {port}"));
    format!(
        "{} with {} workers, timeout {:?}, listening on {}",
        settings.name, settings.workers, settings.timeout, target
    )
}

fn main() {
    println!("=== Parse Pipeline Example ===\n");

    let inputs: [&[&str]; 4] = [
        &["name = api", "workers = 4", "target = 8080"],
        &["workers = 2", "timeout_ms = 250", "target = unix:/tmp/api.sock"],
        &["name = api", "workers = 0", "target = 8080"],
        &["name = api", "workers = 4", "target = eighty"],
    ];

    for (i, lines) in inputs.iter().enumerate() {
        println!("Input {}: {:?}", i + 1, lines);
        let parsed = parse_settings(lines);
        match parsed.value_or_throw() {
            Ok(settings) => println!("  ✓ {}", describe(&settings)),
            Err(err) => println!("  ✗ {} (captured at {})", err, err.location()),
        }
    }

    println!("\n--- Combining independent values ---");
    let width = lookup(&["width = 12"], "width").bind(|w| Maybe::of(w.parse::<u32>().ok()));
    let height = lookup(&["height = 3"], "height").bind(|h| Maybe::of(h.parse::<u32>().ok()));
    let area = width.zip(height, |w, h| w * h);
    println!("area = {area}");

    let depth = lookup(&["width = 12"], "depth").bind(|d| Maybe::of(d.parse::<u32>().ok()));
    let volume = width.zip3(height, depth, |w, h, d| w * h * d);
    println!("volume = {volume}");

    println!("\n=== Example Complete ===");
}
