use crate::analyze::{SlidingMedian, upper_median};
use std::num::NonZeroUsize;

fn full_window_median(values: &[f64]) -> f64 {
    let window = NonZeroUsize::new(values.len()).unwrap();
    let mut engine = SlidingMedian::new(window);

    let mut last = f64::NAN;
    for v in values {
        last = engine.push(*v);
    }
    last
}

#[test]
fn odd_count_yields_true_middle() {
    // Arrange
    let values = [5.0, 1.0, 3.0, 2.0, 4.0];

    // Act / Assert
    assert_eq!(full_window_median(&values), 3.0);
    assert_eq!(upper_median(&values), Some(3.0));
}

#[test]
fn even_count_yields_upper_median() {
    // Arrange
    let values = [1.0, 2.0, 3.0, 4.0];

    // Act / Assert
    assert_eq!(full_window_median(&values), 3.0);
    assert_eq!(upper_median(&values), Some(3.0));
}

#[test]
fn single_value_is_its_own_median() {
    assert_eq!(full_window_median(&[0.7]), 0.7);
    assert_eq!(upper_median(&[0.7]), Some(0.7));
}

#[test]
fn empty_input_has_no_median() {
    assert_eq!(upper_median(&[]), None);
    assert_eq!(SlidingMedian::new(NonZeroUsize::MIN).median(), None);
}

#[test]
fn duplicates_are_kept() {
    let values = [2.0, 2.0, 1.0, 2.0];

    assert_eq!(full_window_median(&values), 2.0);
    assert_eq!(upper_median(&values), Some(2.0));
}

#[test]
fn intermediate_medians_follow_growing_window() {
    // Arrange
    let mut engine = SlidingMedian::new(NonZeroUsize::new(3).unwrap());

    // Act
    let medians: Vec<f64> = [3.0, 1.0, 2.0].iter().map(|v| engine.push(*v)).collect();

    // Assert
    assert_eq!(medians, vec![3.0, 3.0, 2.0]);
    assert_eq!(engine.len(), 3);
}

#[test]
fn evicts_oldest_once_window_is_full() {
    // Arrange
    let mut engine = SlidingMedian::new(NonZeroUsize::new(3).unwrap());
    for v in [10.0, 1.0, 2.0] {
        engine.push(v);
    }

    // Act: 10.0 leaves the window, leaving [1, 2, 3]
    let median = engine.push(3.0);

    // Assert
    assert_eq!(median, 2.0);
    assert_eq!(engine.len(), 3);
    assert_eq!(engine.median(), Some(2.0));
}

#[test]
fn full_window_engine_matches_sort_and_index() {
    let values = [0.39, 0.133, 0.199, 0.704, 0.146, 0.628, 0.067, 0.138, 0.003];

    assert_eq!(Some(full_window_median(&values)), upper_median(&values));
}
