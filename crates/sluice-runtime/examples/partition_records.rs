//! Record partitioning example
//!
//! This example demonstrates:
//! - Building records and a condition set
//! - Partitioning records into kept and discarded outputs
//! - Continue-on-fail turning evaluation failures into discarded records

use sluice_core::{Comparator, Condition, ConditionSet, Record, Value};
use sluice_runtime::{FieldConditionEvaluator, PartitionEngine, PartitionOptions};
use std::collections::HashMap;

fn transaction(user: &str, amount: Value) -> Record {
    let mut payload = HashMap::new();
    payload.insert("user".to_string(), Value::String(user.to_string()));
    payload.insert("amount".to_string(), amount);
    Record::new(Value::Object(payload))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Record Partitioning Example ===\n");

    let records = vec![
        transaction("alice", Value::Number(150.0)),
        transaction("bob", Value::Number(40.0)),
        transaction("carol", Value::String("250".to_string())),
        transaction("dave", Value::Number(90.0)),
    ];

    // Keep transactions over 100
    let spec = ConditionSet::all(vec![Condition::new(
        "amount",
        Comparator::Gt,
        Value::Number(100.0),
    )]);

    let engine = PartitionEngine::new(FieldConditionEvaluator::new());

    // Default options: case-insensitive, loose type validation, so carol's
    // string amount still compares numerically
    let result = engine.partition(records.clone(), &spec, &PartitionOptions::default())?;

    println!("Kept ({}):", result.kept.len());
    for record in &result.kept {
        println!("  {:?} (provenance {:?})", record.payload, record.provenance);
    }
    println!("Discarded ({}):", result.discarded.len());
    for record in &result.discarded {
        println!("  {:?} (provenance {:?})", record.payload, record.provenance);
    }

    // Under strict validation carol's record fails; the run aborts with the
    // offending index and a remediation hint
    let strict = PartitionOptions {
        loose_type_validation: false,
        ..Default::default()
    };
    match engine.partition(records.clone(), &spec, &strict) {
        Ok(_) => println!("\nStrict run unexpectedly succeeded"),
        Err(error) => println!("\nStrict run aborted: {}", error),
    }

    // Continue-on-fail discards the failing record instead of aborting
    let tolerant = PartitionEngine::new(FieldConditionEvaluator::new()).with_continue_on_fail(true);
    let result = tolerant.partition(records, &spec, &strict)?;
    println!(
        "\nWith continue-on-fail: {} kept, {} discarded",
        result.kept.len(),
        result.discarded.len()
    );

    Ok(())
}
