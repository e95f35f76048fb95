// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use statcomp::estimators::approaches::causal_state::machine::BidirectionalComplexity;
use statcomp::estimators::approaches::causal_state::Windowing;
use statcomp::estimators::complexity::Complexity;
use statcomp::estimators::traits::GlobalValue;

use crate::test_helpers::generate_random_symbols;

#[test]
fn palindrome_gives_equal_forward_and_reverse_complexity() {
    // Reversing a palindrome is the identity, so both machines see the same
    // input and the values match bit for bit.
    let bd = Complexity::new_bidirectional("01100110", 2, 0.05, Windowing::Overlapping).unwrap();
    assert_eq!(bd.forward_value(), bd.reverse_value());
}

#[test]
fn long_random_palindrome_gives_equal_directions() {
    let half = generate_random_symbols(64, 17);
    let palindrome: String = half.chars().chain(half.chars().rev()).collect();

    let bd = Complexity::new_bidirectional(&palindrome, 3, 0.05, Windowing::Overlapping).unwrap();
    assert_eq!(bd.forward_value(), bd.reverse_value());
}

#[test]
fn shared_keys_keep_only_summed_mass() {
    // Constant string: forward and reverse collapse to the same single key,
    // so the combined table is one total-only entry with doubled mass.
    let bd = Complexity::new_bidirectional("0000000000000000", 2, 0.05, Windowing::Overlapping)
        .unwrap();

    let combined = bd.combined_states();
    assert_eq!(combined.len(), 1);
    let entry = &combined["00"];
    assert!(entry.presents.is_empty());

    let forward_total: u64 = Complexity::new_causal_state("0000000000000000", 2, 0.05)
        .unwrap()
        .causal_states()
        .values()
        .map(|d| d.total)
        .sum();
    assert_eq!(entry.total, 2 * forward_total);

    assert_eq!(bd.global_value(), 0.0);
}

#[test]
fn alternating_string_combines_into_two_even_states() {
    // Reverse of "0101..." is "1010...": both directions produce past-keys
    // "01" and "10" with equal mass, so the combined machine keeps two
    // equally likely states.
    let bd = Complexity::new_bidirectional("0101010101010101", 2, 0.01, Windowing::Overlapping)
        .unwrap();

    let (forward, reverse, bidirectional) = bd.values();
    assert_abs_diff_eq!(forward, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(reverse, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(bidirectional, 1.0, epsilon = 1e-12);

    let counts = bd.state_counts();
    assert_eq!(counts.forward, 2);
    assert_eq!(counts.reverse, 2);
    assert_eq!(counts.combined, 2);
    assert_eq!(counts.forward_raw, 2);
    assert_eq!(counts.reverse_raw, 2);
    assert_eq!(counts.combined_raw, counts.combined);

    // Shared keys dropped their distributions.
    assert!(bd.combined_states().values().all(|d| d.presents.is_empty()));
}

#[test]
fn one_sided_keys_carry_through_unchanged() {
    let symbols = generate_random_symbols(512, 23);
    let bd = Complexity::new_bidirectional(&symbols, 3, 0.02, Windowing::Overlapping).unwrap();

    let forward = Complexity::new_causal_state(&symbols, 3, 0.02).unwrap();
    let reversed: String = symbols.chars().rev().collect();
    let reverse = Complexity::new_causal_state(&reversed, 3, 0.02).unwrap();

    for (key, dist) in bd.combined_states() {
        match (
            forward.causal_states().get(key),
            reverse.causal_states().get(key),
        ) {
            (Some(f), Some(r)) => {
                assert!(dist.presents.is_empty());
                assert_eq!(dist.total, f.total + r.total);
            }
            (Some(f), None) => assert_eq!(dist, f),
            (None, Some(r)) => assert_eq!(dist, r),
            (None, None) => panic!("combined key {key} appears in neither direction"),
        }
    }
}

#[test]
fn bidirectional_is_deterministic() {
    let symbols = generate_random_symbols(1024, 31);
    let a = BidirectionalComplexity::new(&symbols, 4, 0.05, Windowing::Overlapping)
        .unwrap()
        .values();
    let b = BidirectionalComplexity::new(&symbols, 4, 0.05, Windowing::Overlapping)
        .unwrap()
        .values();
    assert_eq!(a, b);
}

#[test]
fn batch_bidirectional_matches_individual_runs() {
    let rows: Vec<String> = (0u64..3).map(|i| generate_random_symbols(256, 100 + i)).collect();
    let batch = BidirectionalComplexity::from_rows(&rows, 3, 0.05, Windowing::Overlapping).unwrap();
    assert_eq!(batch.len(), rows.len());
    for (row, bd) in rows.iter().zip(&batch) {
        let single =
            BidirectionalComplexity::new(row, 3, 0.05, Windowing::Overlapping).unwrap();
        assert_eq!(bd.values(), single.values());
    }
}
