//! Host parallelism and the default reuse threshold.
//!
//! `available_parallelism()` accounts for cgroup CPU limits, affinity
//! masks, and VM vCPU counts, so the derived threshold is correct in
//! containers as well as on bare metal.

/// Number of parallel execution units available to this process, clamped
/// to at least 1. Falls back to 1 when the query fails.
pub fn available_parallel_units() -> usize {
    std::thread::available_parallelism()
        .map(|count| count.get())
        .unwrap_or(1)
}

/// Default host-wide cap on live worker nodes.
///
/// Half the parallel units, never below 1, so the default alone can never
/// structurally disable reuse even on a single-core host.
pub fn default_reuse_threshold() -> i64 {
    threshold_for_units(available_parallel_units())
}

fn threshold_for_units(units: usize) -> i64 {
    ((units / 2) as i64).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_units_at_least_one() {
        assert!(available_parallel_units() >= 1);
    }

    #[test]
    fn threshold_is_half_the_units() {
        assert_eq!(threshold_for_units(8), 4);
        assert_eq!(threshold_for_units(16), 8);
        assert_eq!(threshold_for_units(5), 2);
    }

    #[test]
    fn threshold_never_below_one() {
        assert_eq!(threshold_for_units(0), 1);
        assert_eq!(threshold_for_units(1), 1);
        assert_eq!(threshold_for_units(2), 1);
    }

    #[test]
    fn default_threshold_is_positive() {
        assert!(default_reuse_threshold() >= 1);
    }
}
