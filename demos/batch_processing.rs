//! Batch Processing
//!
//! This example processes a batch of records with the payload-free signals.
//!
//! Key concepts:
//! - `VoidOrBreak` to stop a loop early with a reason
//! - `VoidOrWarning` for findings that do not stop the batch
//! - `collect_warnings` to report every warning at once
//! - `VoidOrError` for a final pass/fail step that keeps the captured error
//!
//! Run with: cargo run --example batch_processing

use stillwater::Validation;
use tagged::signal::collect_warnings;
use tagged::{VoidOrBreak, VoidOrError, VoidOrWarning};

#[derive(Debug, Clone)]
struct Record {
    id: u32,
    email: String,
    amount: i64,
}

impl Record {
    fn new(id: u32, email: &str, amount: i64) -> Self {
        Self {
            id,
            email: email.to_string(),
            amount,
        }
    }
}

fn records() -> Vec<Record> {
    vec![
        Record::new(1, "ada@example.com", 120),
        Record::new(2, "grace@example", 40),
        Record::new(3, "linus@example.com", 0),
        Record::new(4, "ken@example.com", -15),
        Record::new(5, "dmr@example.com", 80),
    ]
}

fn lint(record: &Record) -> VoidOrWarning {
    if !record.email.contains(".com") {
        let message = format!("record {}: unusual email {}", record.id, record.email);
        return VoidOrWarning::warn(message).unwrap_or_default();
    }
    if record.amount == 0 {
        return VoidOrWarning::warn(format!("record {}: zero amount", record.id))
            .unwrap_or_default();
    }
    VoidOrWarning::Void
}

fn post(record: &Record, ledger: &mut Vec<u32>) -> VoidOrBreak {
    if record.amount < 0 {
        let reason = format!("record {} has a negative amount", record.id);
        return VoidOrBreak::break_with(reason).unwrap_or_default();
    }
    ledger.push(record.id);
    VoidOrBreak::Void
}

fn flush(ledger: &[u32]) -> VoidOrError {
    VoidOrError::catching(|| {
        if ledger.is_empty() {
            Err("nothing to flush")
        } else {
            Ok(())
        }
    })
}

fn main() {
    println!("=== Batch Processing Example ===\n");

    let batch = records();

    println!("--- Lint pass (collects every warning) ---");
    match collect_warnings(batch.iter().map(lint)) {
        Validation::Success(()) => println!("  ✓ no warnings"),
        Validation::Failure(warnings) => {
            for warning in warnings.iter() {
                println!("  ! {warning}");
            }
        }
    }

    println!("\n--- Posting pass (stops at the first break) ---");
    let mut ledger = Vec::new();
    let signal = VoidOrBreak::for_each(&batch, |record| post(record, &mut ledger));
    match signal.reason() {
        Ok(reason) => println!("  stopped: {reason}"),
        Err(_) => println!("  ✓ all records posted"),
    }
    println!("  posted ids: {ledger:?}");

    println!("\n--- Flush ---");
    let flushed = flush(&ledger).and_then(|| flush(&[]));
    match flushed.throw_if_error() {
        Ok(()) => println!("  ✓ flushed"),
        Err(err) => println!("  ✗ {} (captured at {})", err, err.location()),
    }

    println!("\n--- Escalating a warning ---");
    let escalated = lint(&batch[1]).escalate();
    println!("  escalated is_error = {}", escalated.is_error());

    println!("\n=== Example Complete ===");
}
