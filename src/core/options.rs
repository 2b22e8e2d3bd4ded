//! # Multiple-Choice Options
//!
//! Builds the answer list for a drill question: the correct answer plus
//! random distractors, shuffled.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// Options shown per question unless configured otherwise.
pub const DEFAULT_OPTION_COUNT: usize = 4;

/// Random draws allowed per requested option before topping up in order.
const MAX_DRAWS_PER_OPTION: usize = 32;

/// Returns up to `n` distinct values, always including `correct`, in random order.
///
/// Distractors are drawn uniformly from `all_values` (so duplicated values
/// are proportionally more likely). Draws are bounded; once the budget is
/// spent, missing slots are filled with unused values in pool order. When
/// the pool holds fewer than `n` distinct values, every one is returned.
pub fn generate_options<S, R>(correct: &str, all_values: &[S], n: usize, rng: &mut R) -> Vec<String>
where
    S: AsRef<str>,
    R: Rng,
{
    let mut options = vec![correct.to_string()];
    let mut seen: HashSet<&str> = HashSet::from([correct]);

    let mut draws = 0;
    while options.len() < n && draws < n * MAX_DRAWS_PER_OPTION {
        let Some(pick) = all_values.choose(rng) else {
            break;
        };
        draws += 1;
        if seen.insert(pick.as_ref()) {
            options.push(pick.as_ref().to_string());
        }
    }

    for value in all_values {
        if options.len() >= n {
            break;
        }
        if seen.insert(value.as_ref()) {
            options.push(value.as_ref().to_string());
        }
    }

    options.shuffle(rng);
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_includes_correct_and_is_distinct() {
        let pool = ["a", "i", "u", "e", "o", "ka", "ki"];
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let options = generate_options("u", &pool, 4, &mut rng);
            assert_eq!(options.len(), 4);
            assert!(options.iter().any(|o| o == "u"));
            let distinct: HashSet<_> = options.iter().collect();
            assert_eq!(distinct.len(), 4);
            assert!(options.iter().all(|o| pool.contains(&o.as_str())));
        }
    }

    #[test]
    fn test_small_pool_terminates_with_every_value() {
        let pool = ["a", "a", "i"];
        let mut rng = StdRng::seed_from_u64(0);
        let mut options = generate_options("a", &pool, 4, &mut rng);
        options.sort();
        assert_eq!(options, vec!["a", "i"]);
    }

    #[test]
    fn test_empty_pool_returns_only_correct() {
        let pool: [&str; 0] = [];
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(generate_options("ka", &pool, 4, &mut rng), vec!["ka"]);
    }

    #[test]
    fn test_correct_not_in_pool_still_included() {
        let pool = vec!["i".to_string(), "u".to_string(), "e".to_string(), "o".to_string()];
        let mut rng = StdRng::seed_from_u64(11);
        let options = generate_options("a", &pool, 3, &mut rng);
        assert_eq!(options.len(), 3);
        assert!(options.contains(&"a".to_string()));
    }

    #[test]
    fn test_correct_position_varies() {
        let pool = ["a", "i", "u", "e", "o"];
        let mut rng = StdRng::seed_from_u64(5);
        let positions: HashSet<usize> = (0..50)
            .map(|_| {
                generate_options("a", &pool, 4, &mut rng)
                    .iter()
                    .position(|o| o == "a")
                    .unwrap()
            })
            .collect();
        assert!(positions.len() > 1);
    }
}
