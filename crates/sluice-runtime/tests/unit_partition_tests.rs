//! Unit tests for the partition engine public API
//!
//! Exercises the engine end-to-end through the built-in field-condition
//! evaluator, plus the error recovery policy through a failing evaluator.

use sluice_core::{
    ApplicationError, Comparator, Condition, ConditionSet, EvalResult, OperationError,
    PartitionError, Provenance, Record, Value,
};
use sluice_runtime::{
    ConditionEvaluator, FieldConditionEvaluator, PartitionEngine, PartitionOptions, RunConfig,
};
use std::collections::HashMap;

fn record(name: &str, amount: f64) -> Record {
    let mut payload = HashMap::new();
    payload.insert("name".to_string(), Value::String(name.to_string()));
    payload.insert("amount".to_string(), Value::Number(amount));
    Record::new(Value::Object(payload))
}

fn name_of(record: &Record) -> &str {
    match &record.payload {
        Value::Object(map) => match map.get("name") {
            Some(Value::String(name)) => name,
            _ => panic!("record has no name"),
        },
        _ => panic!("payload is not an object"),
    }
}

fn amount_over(threshold: f64) -> ConditionSet {
    ConditionSet::all(vec![Condition::new(
        "amount",
        Comparator::Gt,
        Value::Number(threshold),
    )])
}

// ========== Partition semantics ==========

#[test]
fn test_outputs_cover_input_and_preserve_order() {
    let engine = PartitionEngine::new(FieldConditionEvaluator::new());
    let records = vec![
        record("a", 10.0),
        record("b", 200.0),
        record("c", 30.0),
        record("d", 400.0),
        record("e", 50.0),
    ];

    let result = engine
        .partition(records, &amount_over(100.0), &PartitionOptions::default())
        .unwrap();

    assert_eq!(result.len(), 5);
    let kept: Vec<&str> = result.kept.iter().map(name_of).collect();
    let discarded: Vec<&str> = result.discarded.iter().map(name_of).collect();
    assert_eq!(kept, vec!["b", "d"]);
    assert_eq!(discarded, vec!["a", "c", "e"]);
}

#[test]
fn test_true_goes_to_kept_false_to_discarded() {
    let engine = PartitionEngine::new(FieldConditionEvaluator::new());

    let result = engine
        .partition(
            vec![record("high", 500.0)],
            &amount_over(100.0),
            &PartitionOptions::default(),
        )
        .unwrap();
    assert_eq!(result.kept.len(), 1);
    assert!(result.discarded.is_empty());

    let result = engine
        .partition(
            vec![record("low", 5.0)],
            &amount_over(100.0),
            &PartitionOptions::default(),
        )
        .unwrap();
    assert!(result.kept.is_empty());
    assert_eq!(result.discarded.len(), 1);
}

#[test]
fn test_every_output_record_has_provenance() {
    let engine = PartitionEngine::new(FieldConditionEvaluator::new());
    let records = vec![record("a", 10.0), record("b", 200.0), record("c", 30.0)];

    let result = engine
        .partition(records, &amount_over(100.0), &PartitionOptions::default())
        .unwrap();

    assert_eq!(result.kept[0].provenance, Some(Provenance::new(1)));
    assert_eq!(result.discarded[0].provenance, Some(Provenance::new(0)));
    assert_eq!(result.discarded[1].provenance, Some(Provenance::new(2)));
}

#[test]
fn test_upstream_provenance_is_preserved() {
    let engine = PartitionEngine::new(FieldConditionEvaluator::new());
    let records = vec![
        record("a", 200.0).with_provenance(17),
        record("b", 300.0),
    ];

    let result = engine
        .partition(records, &amount_over(100.0), &PartitionOptions::default())
        .unwrap();

    assert_eq!(result.kept[0].provenance, Some(Provenance::new(17)));
    assert_eq!(result.kept[1].provenance, Some(Provenance::new(1)));
}

#[test]
fn test_example_three_records() {
    // input = [A,B,C], predicate = [true,false,true]
    let engine = PartitionEngine::new(FieldConditionEvaluator::new());
    let records = vec![record("A", 200.0), record("B", 50.0), record("C", 300.0)];

    let result = engine
        .partition(records, &amount_over(100.0), &PartitionOptions::default())
        .unwrap();

    let kept: Vec<&str> = result.kept.iter().map(name_of).collect();
    let discarded: Vec<&str> = result.discarded.iter().map(name_of).collect();
    assert_eq!(kept, vec!["A", "C"]);
    assert_eq!(discarded, vec!["B"]);
    assert_eq!(result.kept[0].provenance, Some(Provenance::new(0)));
    assert_eq!(result.discarded[0].provenance, Some(Provenance::new(1)));
    assert_eq!(result.kept[1].provenance, Some(Provenance::new(2)));
}

#[test]
fn test_empty_input_yields_empty_outputs() {
    let engine = PartitionEngine::new(FieldConditionEvaluator::new());
    let result = engine
        .partition(vec![], &amount_over(100.0), &PartitionOptions::default())
        .unwrap();
    assert!(result.is_empty());
}

// ========== Configuration surface ==========

#[test]
fn test_case_insensitive_matching_by_default() {
    let engine = PartitionEngine::new(FieldConditionEvaluator::new());
    let spec = ConditionSet::all(vec![Condition::new(
        "name",
        Comparator::Eq,
        Value::String("ALICE".to_string()),
    )]);

    let mut payload = HashMap::new();
    payload.insert("name".to_string(), Value::String("alice".to_string()));
    let records = vec![Record::new(Value::Object(payload))];

    let result = engine
        .partition(records.clone(), &spec, &PartitionOptions::default())
        .unwrap();
    assert_eq!(result.kept.len(), 1);

    let options = PartitionOptions {
        ignore_case: false,
        ..Default::default()
    };
    let result = engine.partition(records, &spec, &options).unwrap();
    assert!(result.kept.is_empty());
}

#[test]
fn test_loose_validation_casts_string_to_number() {
    let engine = PartitionEngine::new(FieldConditionEvaluator::new());
    let spec = ConditionSet::all(vec![Condition::new(
        "amount",
        Comparator::Eq,
        Value::Number(42.0),
    )]);

    let mut payload = HashMap::new();
    payload.insert("amount".to_string(), Value::String("42".to_string()));
    let records = vec![Record::new(Value::Object(payload))];

    let result = engine
        .partition(records, &spec, &PartitionOptions::default())
        .unwrap();
    assert_eq!(result.kept.len(), 1);
}

#[test]
fn test_strict_validation_aborts_with_index_and_hint() {
    // input = [A,B], evaluation fails on B, continue-on-fail off, strict
    let engine = PartitionEngine::new(FieldConditionEvaluator::new());
    let spec = ConditionSet::all(vec![Condition::new(
        "amount",
        Comparator::Eq,
        Value::Number(42.0),
    )]);
    let options = PartitionOptions {
        loose_type_validation: false,
        ..Default::default()
    };

    let mut bad = HashMap::new();
    bad.insert("amount".to_string(), Value::String("42".to_string()));
    let records = vec![record("A", 42.0), Record::new(Value::Object(bad))];

    let error = engine.partition(records, &spec, &options).unwrap_err();
    match error {
        PartitionError::Operation(error) => {
            assert_eq!(error.item_index, Some(1));
            assert!(error.description.is_some());
            assert!(error.message.contains("Cannot compare"));
        }
        other => panic!("expected operation error, got {:?}", other),
    }
}

// ========== Error recovery policy ==========

/// Evaluator that always fails with the error kind named by its spec
struct FailingEvaluator;

impl ConditionEvaluator for FailingEvaluator {
    type Spec = String;

    fn evaluate(&self, _record: &Record, spec: &String, _config: &RunConfig) -> EvalResult<bool> {
        match spec.as_str() {
            "operation" => Err(OperationError::new("already contextualized").into()),
            "application" => Err(ApplicationError::new("missing position").into()),
            _ => Err(anyhow::anyhow!("something untyped broke").into()),
        }
    }
}

#[test]
fn test_continue_on_fail_discards_for_every_error_kind() {
    for kind in ["operation", "application", "generic"] {
        let engine = PartitionEngine::new(FailingEvaluator).with_continue_on_fail(true);
        let records = vec![record("a", 1.0), record("b", 2.0)];

        let result = engine
            .partition(records, &kind.to_string(), &PartitionOptions::default())
            .unwrap();

        assert!(result.kept.is_empty());
        assert_eq!(result.discarded.len(), 2);
        assert_eq!(result.discarded[0].provenance, Some(Provenance::new(0)));
        assert_eq!(result.discarded[1].provenance, Some(Provenance::new(1)));
    }
}

#[test]
fn test_abort_returns_no_partial_result() {
    let engine = PartitionEngine::new(FailingEvaluator);
    let records = vec![record("a", 1.0)];

    let result = engine.partition(records, &"generic".to_string(), &PartitionOptions::default());
    assert!(result.is_err());
}

#[test]
fn test_operation_error_is_not_rewrapped() {
    let engine = PartitionEngine::new(FailingEvaluator);
    let error = engine
        .partition(
            vec![record("a", 1.0)],
            &"operation".to_string(),
            &PartitionOptions::default(),
        )
        .unwrap_err();

    match error {
        PartitionError::Operation(error) => {
            assert_eq!(error.message, "already contextualized");
            assert_eq!(error.item_index, None);
            assert_eq!(error.description, None);
        }
        other => panic!("expected operation error, got {:?}", other),
    }
}

#[test]
fn test_application_error_gains_positional_context() {
    let engine = PartitionEngine::new(FailingEvaluator);
    let error = engine
        .partition(
            vec![record("a", 1.0)],
            &"application".to_string(),
            &PartitionOptions::default(),
        )
        .unwrap_err();

    match error {
        PartitionError::Application(error) => {
            assert_eq!(error.message, "missing position");
            assert_eq!(error.item_index, Some(0));
        }
        other => panic!("expected application error, got {:?}", other),
    }
}

#[test]
fn test_generic_error_normalized_without_hint_under_loose() {
    let engine = PartitionEngine::new(FailingEvaluator);
    let error = engine
        .partition(
            vec![record("a", 1.0)],
            &"generic".to_string(),
            &PartitionOptions::default(),
        )
        .unwrap_err();

    match error {
        PartitionError::Operation(error) => {
            assert_eq!(error.message, "something untyped broke");
            assert_eq!(error.item_index, Some(0));
            assert_eq!(error.description, None);
        }
        other => panic!("expected operation error, got {:?}", other),
    }
}
