use rand::Rng;

/// In-place Fisher–Yates shuffle.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn shuffle_keeps_the_same_elements() {
        let mut rng = SmallRng::seed_from_u64(7);
        for len in 0..40u32 {
            let original: Vec<u32> = (0..len).map(|n| n % 7).collect();
            let mut shuffled = original.clone();
            shuffle(&mut shuffled, &mut rng);

            let mut sorted = shuffled.clone();
            sorted.sort_unstable();
            let mut expected = original.clone();
            expected.sort_unstable();
            assert_eq!(sorted, expected, "len {len}");
        }
    }

    #[test]
    fn short_slices_are_untouched() {
        let mut rng = SmallRng::seed_from_u64(1);

        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = ["only"];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, ["only"]);
    }

    #[test]
    fn every_ordering_shows_up_about_equally() {
        let mut rng = SmallRng::seed_from_u64(0x5eed);
        let mut counts = vec![0u32; 6];
        for _ in 0..6000 {
            let mut items = [0u8, 1, 2];
            shuffle(&mut items, &mut rng);
            let slot = match items {
                [0, 1, 2] => 0,
                [0, 2, 1] => 1,
                [1, 0, 2] => 2,
                [1, 2, 0] => 3,
                [2, 0, 1] => 4,
                [2, 1, 0] => 5,
                _ => unreachable!(),
            };
            counts[slot] += 1;
        }
        for count in counts {
            assert!((800..1200).contains(&count), "skewed ordering count {count}");
        }
    }
}
