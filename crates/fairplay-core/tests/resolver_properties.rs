//! Property tests for winner resolution over arbitrary odd move sets.

use fairplay_core::{MoveSet, RoundOutcome, WinnerResolver};
use proptest::prelude::*;

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("move-{}", i)).collect()
}

/// Odd size in 3..=41 with two indices into it
fn arb_pair() -> impl Strategy<Value = (usize, usize, usize)> {
    (1usize..=20)
        .prop_map(|k| 2 * k + 1)
        .prop_flat_map(|n| (Just(n), 0..n, 0..n))
}

proptest! {
    #[test]
    fn prop_swapping_players_swaps_outcome((n, i, j) in arb_pair()) {
        let labels = labels(n);
        let moves = MoveSet::new(&labels).unwrap();
        let r = WinnerResolver::new(&moves);

        let forward = r.resolve(&labels[i], &labels[j]).unwrap();
        let backward = r.resolve(&labels[j], &labels[i]).unwrap();

        prop_assert_eq!(forward, backward.reversed());
        prop_assert_eq!(forward == RoundOutcome::Draw, i == j);
    }

    #[test]
    fn prop_each_move_beats_half((n, i, _) in arb_pair()) {
        let labels = labels(n);
        let moves = MoveSet::new(&labels).unwrap();
        let r = WinnerResolver::new(&moves);

        let wins = labels
            .iter()
            .filter(|other| r.resolve(&labels[i], other).unwrap() == RoundOutcome::Win)
            .count();
        let losses = labels
            .iter()
            .filter(|other| r.resolve(&labels[i], other).unwrap() == RoundOutcome::Lose)
            .count();

        prop_assert_eq!(wins, (n - 1) / 2);
        prop_assert_eq!(losses, (n - 1) / 2);
    }

    #[test]
    fn prop_even_sizes_are_refused(k in 0usize..20) {
        prop_assert!(MoveSet::new(labels(2 * k)).is_err());
    }
}
