/// Fixed prize distribution: 60% / 25% / 10% to the podium, remainder to the
/// arena. Amounts are whole KES.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrizeSplit {
    pub first: i64,
    pub second: i64,
    pub third: i64,
    pub arena_fee: i64,
}

impl PrizeSplit {
    pub fn total(&self) -> i64 {
        self.first + self.second + self.third + self.arena_fee
    }
}

/// Round-half-up percentage of a non-negative pool.
fn share(pool: i64, percent: i64) -> i64 {
    (pool * percent + 50) / 100
}

/// Split a pool so the four amounts always sum exactly to it: the three
/// prizes round independently and the arena fee absorbs the drift.
pub fn split(pool: i64) -> PrizeSplit {
    let first = share(pool, 60);
    let second = share(pool, 25);
    let third = share(pool, 10);

    PrizeSplit {
        first,
        second,
        third,
        arena_fee: pool - first - second - third,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_pool_splits_cleanly() {
        let s = split(1000);
        assert_eq!(s.first, 600);
        assert_eq!(s.second, 250);
        assert_eq!(s.third, 100);
        assert_eq!(s.arena_fee, 50);
    }

    #[test]
    fn awkward_pool_rounds_per_prize() {
        let s = split(777);
        assert_eq!(s.first, 466); // 466.2
        assert_eq!(s.second, 194); // 194.25
        assert_eq!(s.third, 78); // 77.7
        assert_eq!(s.arena_fee, 39);
    }

    #[test]
    fn amounts_always_sum_to_the_pool() {
        for pool in 0..=5_000 {
            let s = split(pool);
            assert_eq!(s.total(), pool, "pool {pool} did not balance");
        }
    }

    #[test]
    fn zero_pool_pays_nothing() {
        assert_eq!(
            split(0),
            PrizeSplit {
                first: 0,
                second: 0,
                third: 0,
                arena_fee: 0
            }
        );
    }
}
