use exsort::prelude::*;
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn rank_of(reference: &[u32], value: u32) -> Option<usize> {
    reference.iter().position(|&r| r == value)
}

proptest! {
    #[test]
    fn ranked_elements_precede_unranked_and_follow_reference_order(
        reference in proptest::collection::hash_set(0u32..50, 0..10),
        input in proptest::collection::vec(0u32..60, 0..40),
    ) {
        let reference: Vec<u32> = reference.into_iter().collect();
        let sorter = build_sorter(Reference::ordered(reference.clone()), Options::new()).unwrap();
        let out = sorter.sort(input.clone());

        // Same multiset of elements.
        let mut lhs = out.clone();
        lhs.sort_unstable();
        let mut rhs = input.clone();
        rhs.sort_unstable();
        prop_assert_eq!(lhs, rhs);

        // Every ranked element comes before every unranked one.
        let mut seen_unranked = false;
        for value in &out {
            match rank_of(&reference, *value) {
                Some(_) => prop_assert!(!seen_unranked, "ranked value after an unranked one"),
                None => seen_unranked = true,
            }
        }

        // Ranked elements appear in non-decreasing reference order.
        let ranks: Vec<usize> = out.iter().filter_map(|&v| rank_of(&reference, v)).collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn sorting_is_idempotent(
        reference in proptest::collection::hash_set(0u32..50, 0..10),
        input in proptest::collection::vec(0u32..60, 0..40),
    ) {
        let reference: Vec<u32> = reference.into_iter().collect();
        let sorter = build_sorter(
            Reference::ordered(reference),
            Options::fallback(|a: &u32, b: &u32| a.cmp(b)),
        ).unwrap();

        let once = sorter.sort(input);
        let twice = sorter.sort(once.clone());
        prop_assert_eq!(once, twice);
    }
}

#[test]
fn random_inputs_match_a_naive_oracle() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..200 {
        let mut pool: Vec<u32> = (0..30).collect();
        pool.shuffle(&mut rng);
        let reference_len = rng.random_range(0..10);
        let reference: Vec<u32> = pool[..reference_len].to_vec();

        let input_len = rng.random_range(0..50);
        let input: Vec<u32> = (0..input_len).map(|_| rng.random_range(0..40)).collect();

        let sorter = build_sorter(
            Reference::ordered(reference.clone()),
            Options::fallback(|a: &u32, b: &u32| a.cmp(b)),
        )
        .unwrap();
        let actual = sorter.sort(input.clone());

        let mut expected = input;
        expected.sort_by(|a, b| {
            match (rank_of(&reference, *a), rank_of(&reference, *b)) {
                (Some(ra), Some(rb)) => ra.cmp(&rb).then_with(|| a.cmp(b)),
                (Some(_), None) => std::cmp::Ordering::Less,
                (None, Some(_)) => std::cmp::Ordering::Greater,
                (None, None) => a.cmp(b),
            }
        });

        assert_eq!(actual, expected);
    }
}
