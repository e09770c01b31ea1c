/// Constrained random choice of the next active slot
use crate::core::slot::{Slot, SLOT_COUNT};
use rand::Rng;

/// Marks every slot that may not follow `current`.
///
/// Two rules: no immediate repeat, and the single forbidden pair 1 -> 0.
/// The pair is one-way on purpose; 0 -> 1 is allowed.
pub fn excluded(current: Slot) -> [bool; SLOT_COUNT] {
    let mut out = [false; SLOT_COUNT];
    out[current.index()] = true;
    if current.index() == 1 {
        out[0] = true;
    }
    out
}

/// Slots that may legally follow `current`, in index order.
pub fn allowed(current: Slot) -> Vec<Slot> {
    let excluded = excluded(current);
    Slot::ALL.into_iter().filter(|s| !excluded[s.index()]).collect()
}

/// Draws uniformly from all four slots and retries while the draw is excluded.
///
/// No iteration cap: at most two of four outcomes are excluded, so every
/// draw succeeds with probability >= 1/2.
pub fn choose_next<R: Rng>(current: Slot, rng: &mut R) -> Slot {
    let excluded = excluded(current);
    loop {
        let candidate = Slot::ALL[rng.random_range(0..SLOT_COUNT)];
        if !excluded[candidate.index()] {
            return candidate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand_core::SeedableRng;

    fn slot(i: u8) -> Slot {
        Slot::try_from(i).unwrap()
    }

    #[test]
    fn excluded_set_per_slot() {
        assert_eq!(excluded(slot(0)), [true, false, false, false]);
        assert_eq!(excluded(slot(1)), [true, true, false, false]);
        assert_eq!(excluded(slot(2)), [false, false, true, false]);
        assert_eq!(excluded(slot(3)), [false, false, false, true]);
    }

    #[test]
    fn allowed_from_one_is_two_and_three() {
        assert_eq!(allowed(slot(1)), vec![slot(2), slot(3)]);
        assert_eq!(allowed(slot(0)), vec![slot(1), slot(2), slot(3)]);
    }

    #[test]
    fn zero_to_one_is_reachable() {
        let mut rng = StdRng::seed_from_u64(7);
        let hit = (0..500).any(|_| choose_next(slot(0), &mut rng) == slot(1));
        assert!(hit, "0 -> 1 must stay permitted");
    }

    #[test]
    fn draws_cover_every_allowed_slot_roughly_uniformly() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0u32; SLOT_COUNT];
        for _ in 0..3000 {
            counts[choose_next(slot(2), &mut rng).index()] += 1;
        }
        assert_eq!(counts[2], 0);
        for i in [0, 1, 3] {
            assert!((800..1200).contains(&counts[i]), "slot {i} drawn {} times", counts[i]);
        }
    }
}
