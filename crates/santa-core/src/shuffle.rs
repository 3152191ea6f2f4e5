use rand::Rng;

/// Uniformly random permutation: repeatedly pull a random remaining element.
///
/// Generic over the rng so tests can seed a `StdRng` and assert on the exact
/// resulting order.
pub fn shuffle<T, R: Rng>(items: Vec<T>, rng: &mut R) -> Vec<T> {
    let mut pool = items;
    let mut shuffled = Vec::with_capacity(pool.len());
    while !pool.is_empty() {
        let idx = rng.gen_range(0..pool.len());
        shuffled.push(pool.swap_remove(idx));
    }
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn preserves_elements() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut result = shuffle(vec![3, 1, 4, 1, 5, 9, 2, 6], &mut rng);
        result.sort_unstable();
        assert_eq!(result, vec![1, 1, 2, 3, 4, 5, 6, 9]);
    }

    #[test]
    fn same_seed_same_order() {
        let items: Vec<u32> = (0..20).collect();
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        assert_eq!(shuffle(items.clone(), &mut a), shuffle(items, &mut b));
    }

    #[test]
    fn different_seeds_eventually_differ() {
        let items: Vec<u32> = (0..20).collect();
        let mut a = StdRng::seed_from_u64(1);
        let mut b = StdRng::seed_from_u64(2);
        assert_ne!(shuffle(items.clone(), &mut a), shuffle(items, &mut b));
    }

    #[test]
    fn empty_and_singleton() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(shuffle(Vec::<u8>::new(), &mut rng).is_empty());
        assert_eq!(shuffle(vec!["sol"], &mut rng), vec!["sol"]);
    }
}
