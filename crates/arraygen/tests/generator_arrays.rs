use arraygen::Error;
use arraygen::compose::{
    BoxGenerator, CountedGenerator, WeightedGenerator, fixed_count_generators, generators,
    weighted_generators,
};

fn constant(value: i64) -> BoxGenerator<i64> {
    Box::new(move || value)
}

#[test]
fn equal_chance_fills_every_slot_from_the_set() {
    let arr = generators(100, vec![constant(1), constant(2)]).unwrap();
    assert_eq!(arr.len(), 100);
    assert!(arr.iter().all(|&v| v == 1 || v == 2));
}

#[test]
fn equal_chance_single_generator() {
    let arr = generators(5, vec![constant(7)]).unwrap();
    assert_eq!(arr, vec![7, 7, 7, 7, 7]);
}

#[test]
fn equal_chance_rejects_empty_set() {
    let set: Vec<BoxGenerator<i64>> = Vec::new();
    let result = generators(3, set);
    assert!(matches!(result, Err(Error::InvalidParameter { .. })));
}

#[test]
fn equal_chance_converges_to_uniform_shares() {
    let arr = generators(10_000, vec![constant(0), constant(1)]).unwrap();
    let ones = arr.iter().filter(|&&v| v == 1).count() as f64;
    let share = ones / arr.len() as f64;
    assert!((share - 0.5).abs() < 0.05, "share {share} too far from 0.5");
}

#[test]
fn weighted_fills_requested_length() {
    let set = vec![
        WeightedGenerator::new(0.5, || 0_i64),
        WeightedGenerator::new(0.14, || 1_i64),
        WeightedGenerator::new(0.36, || 2_i64),
    ];
    let arr = weighted_generators(1_000, set).unwrap();
    assert_eq!(arr.len(), 1_000);
    assert!(arr.iter().all(|&v| v <= 2));
}

#[test]
fn weighted_shares_converge_to_declared_chances() {
    let set = vec![
        WeightedGenerator::new(0.2, || 0_i64),
        WeightedGenerator::new(0.8, || 1_i64),
    ];
    let arr = weighted_generators(20_000, set).unwrap();
    let ones = arr.iter().filter(|&&v| v == 1).count() as f64;
    let share = ones / arr.len() as f64;
    assert!((share - 0.8).abs() < 0.02, "share {share} too far from 0.8");
}

#[test]
fn weighted_rejects_chance_outside_open_interval() {
    let zero = vec![
        WeightedGenerator::new(0.0, || 0_i64),
        WeightedGenerator::new(1.0, || 1_i64),
    ];
    assert!(weighted_generators(10, zero).is_err());
}

#[test]
fn weighted_rejects_sum_away_from_one() {
    let set = vec![
        WeightedGenerator::new(0.5, || 0_i64),
        WeightedGenerator::new(0.4, || 1_i64),
    ];
    let err = weighted_generators(10, set).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("must sum to 1"), "unexpected: {message}");
}

#[test]
fn weighted_accepts_sum_within_tolerance() {
    let set = vec![
        WeightedGenerator::new(0.5, || 0_i64),
        WeightedGenerator::new(0.5 - 5e-7, || 1_i64),
    ];
    assert!(weighted_generators(10, set).is_ok());
}

#[test]
fn weighted_rejects_empty_set() {
    let set: Vec<WeightedGenerator<i64>> = Vec::new();
    assert!(weighted_generators(3, set).is_err());
}

#[test]
fn fixed_count_keeps_declaration_order_groups() {
    let set = vec![
        CountedGenerator::new(2, || "a"),
        CountedGenerator::new(3, || "b"),
    ];
    let arr = fixed_count_generators(5, set, false).unwrap();
    assert_eq!(arr, vec!["a", "a", "b", "b", "b"]);
}

#[test]
fn fixed_count_shuffle_preserves_multiset() {
    let set = vec![
        CountedGenerator::new(40, || 1_i64),
        CountedGenerator::new(60, || 2_i64),
    ];
    let arr = fixed_count_generators(100, set, true).unwrap();
    assert_eq!(arr.len(), 100);
    assert_eq!(arr.iter().filter(|&&v| v == 1).count(), 40);
    assert_eq!(arr.iter().filter(|&&v| v == 2).count(), 60);
}

#[test]
fn fixed_count_rejects_mismatched_total() {
    let set = vec![
        CountedGenerator::new(2, || 1_i64),
        CountedGenerator::new(2, || 2_i64),
    ];
    let err = fixed_count_generators(5, set, false).unwrap_err();
    let message = err.to_string();
    assert!(
        message.contains("must sum to the requested length 5"),
        "unexpected: {message}"
    );
}

#[test]
fn fixed_count_rejects_zero_count() {
    let set = vec![
        CountedGenerator::new(0, || 1_i64),
        CountedGenerator::new(5, || 2_i64),
    ];
    assert!(fixed_count_generators(5, set, false).is_err());
}

#[test]
fn fixed_count_rejects_empty_set() {
    assert!(fixed_count_generators::<i64>(3, Vec::new(), true).is_err());
}

#[test]
fn fixed_count_invokes_each_generator_exactly_count_times() {
    let mut next = 0;
    let set = vec![CountedGenerator::new(4, move || {
        next += 1;
        next
    })];
    let arr = fixed_count_generators(4, set, false).unwrap();
    assert_eq!(arr, vec![1, 2, 3, 4]);
}

#[test]
fn policies_never_return_partial_arrays_on_invalid_input() {
    // The chance check fires before any slot is filled.
    let mut calls = 0_u32;
    let probe = WeightedGenerator {
        generator: Box::new(move || {
            calls += 1;
            calls
        }),
        chance: 1.5,
    };
    assert!(weighted_generators(10, vec![probe]).is_err());
}

#[test]
fn compose_works_with_boxed_heterogeneous_closures() {
    let set: Vec<BoxGenerator<String>> = vec![
        Box::new(|| "x".to_string()),
        Box::new(|| 7.to_string()),
    ];
    let arr = generators(20, set).unwrap();
    assert!(arr.iter().all(|v| v == "x" || v == "7"));
}
