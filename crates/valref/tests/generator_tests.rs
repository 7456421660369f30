//! Generator and sequence tests

use pretty_assertions::assert_eq;
use valref::*;

#[test]
fn test_constant_generator_repeats() {
    let mut g = ConstantGenerator::new(1);
    for _ in 0..5 {
        assert_eq!(g.next(), Some(1));
    }
}

#[test]
fn test_fibonacci_first_ten() {
    let first: Vec<u64> = FibonacciGenerator::new().take(10).collect();
    assert_eq!(first, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34]);
}

#[test]
fn test_fibonacci_generators_do_not_share_state() {
    let mut a = FibonacciGenerator::new();
    let mut b = FibonacciGenerator::new();
    a.nth(9);
    assert_eq!(a.next(), Some(55));
    assert_eq!(b.next(), Some(0));
}

#[test]
fn test_cloned_generator_continues_independently() {
    let mut a = FibonacciGenerator::new();
    a.nth(4);
    let mut b = a.clone();
    assert_eq!(a.next(), Some(5));
    assert_eq!(a.next(), Some(8));
    assert_eq!(b.next(), Some(5));
}

#[test]
fn test_any_generator_with_captured_state() {
    let mut state = (0_u64, 1_u64);
    let fib = AnyGenerator::new(move || {
        let value = state.0;
        state = (state.1, state.0.checked_add(state.1)?);
        Some(value)
    });
    let first: Vec<u64> = fib.take(10).collect();
    assert_eq!(
        first,
        FibonacciGenerator::new().take(10).collect::<Vec<_>>()
    );
}

#[test]
fn test_any_generator_over_container() {
    let xs = ValueContainer::immutable([1, 2, 3]);
    let g = AnyGenerator::from_generator(xs.iter().copied());
    assert_eq!(g.collect::<Vec<_>>(), vec![1, 2, 3]);
}

// ═══════════════════════════════════════════════════════════════════════
// Sequences
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_many_iterators_over_one_container() {
    let xs = container![10, 20, 30];
    let mut iterators: Vec<_> = (0..3).map(|_| xs.iter()).collect();

    // Advance each iterator a different number of steps
    for (steps, it) in iterators.iter_mut().enumerate() {
        for _ in 0..steps {
            it.next();
        }
    }

    let heads: Vec<Option<&i32>> = iterators.iter_mut().map(|it| it.next()).collect();
    assert_eq!(heads, vec![Some(&10), Some(&20), Some(&30)]);
    assert_eq!(xs.count(), 3);
}

#[test]
fn test_iterator_over_copy_unaffected_by_mutating_original() {
    let mut original = container![1, 2];
    let copy = original.clone();
    let mut it = copy.iter();
    assert_eq!(it.next(), Some(&1));

    original.append(3).unwrap();

    assert_eq!(it.collect::<Vec<_>>(), vec![&2]);
}

#[test]
fn test_exhausted_iterator_keeps_returning_none() {
    let xs = container![1];
    let mut it = xs.iter();
    assert_eq!(it.next(), Some(&1));
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);
}

#[test]
fn test_owned_iteration_collects_back() {
    let xs = container!["x".to_string(), "y".to_string()];
    let upper: ValueContainer<String> = xs.into_iter().map(|s| s.to_uppercase()).collect();
    assert_eq!(upper, ["X".to_string(), "Y".to_string()]);
}
