use crate::utils::{UtilsError, for_each_permutation, next_permutation, validate_constants};

#[test]
fn test_next_permutation_steps_lexicographically() {
    let mut values = vec![1.0, 2.0, 3.0];
    assert!(next_permutation(&mut values));
    assert_eq!(values, vec![1.0, 3.0, 2.0]);
    assert!(next_permutation(&mut values));
    assert_eq!(values, vec![2.0, 1.0, 3.0]);
}

#[test]
fn test_next_permutation_wraps_to_sorted() {
    let mut values = vec![3.0, 2.0, 1.0];
    assert!(!next_permutation(&mut values));
    assert_eq!(values, vec![1.0, 2.0, 3.0]);
}

#[test]
fn test_next_permutation_short_slices() {
    let mut empty: Vec<f64> = vec![];
    assert!(!next_permutation(&mut empty));
    let mut single = vec![5.0];
    assert!(!next_permutation(&mut single));
    assert_eq!(single, vec![5.0]);
}

#[test]
fn test_permutation_cycle_visits_factorial_orderings() {
    let mut values = vec![1.0, 2.0, 3.0, 4.0];
    let mut count = 0;
    let result: Option<()> = for_each_permutation(&mut values, |_| {
        count += 1;
        None
    });
    assert!(result.is_none());
    assert_eq!(count, 24);
    // cycle completes back at the starting ordering
    assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn test_permutation_cycle_from_unsorted_start() {
    let mut values = vec![2.0, 1.0, 3.0];
    let mut seen = Vec::new();
    let _: Option<()> = for_each_permutation(&mut values, |ordering| {
        seen.push(ordering.to_vec());
        None
    });
    assert_eq!(seen.len(), 6);
    assert_eq!(seen[0], vec![2.0, 1.0, 3.0]);
    // all six orderings are distinct
    for (i, a) in seen.iter().enumerate() {
        for b in seen.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn test_permutation_cycle_deduplicates_multisets() {
    let mut values = vec![1.0, 1.0, 2.0];
    let mut count = 0;
    let _: Option<()> = for_each_permutation(&mut values, |_| {
        count += 1;
        None
    });
    assert_eq!(count, 3);
}

#[test]
fn test_permutation_cycle_early_exit() {
    let mut values = vec![1.0, 2.0, 3.0];
    let result = for_each_permutation(&mut values, |ordering| {
        if ordering[0] == 2.0 { Some(ordering.to_vec()) } else { None }
    });
    assert_eq!(result, Some(vec![2.0, 1.0, 3.0]));
}

#[test]
fn test_validate_constants() {
    assert!(validate_constants(&[1.0, 2.0]).is_ok());
    assert_eq!(validate_constants(&[]), Err(UtilsError::EmptyConstants));
    assert!(matches!(
        validate_constants(&[1.0, f64::NAN]),
        Err(UtilsError::NonFiniteConstant(_))
    ));
}
