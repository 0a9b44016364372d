//! Property-based tests for index ranges and repository naming.
//!
//! These tests use proptest to generate random inputs and verify that
//! invariants hold for all possible inputs.

#[cfg(test)]
mod proptest_tests {
    use crate::naming::repo_name;
    use crate::range::StepRange;
    use proptest::prelude::*;
    use std::collections::HashSet;

    // ============================================================================
    // StepRange property tests
    // ============================================================================

    proptest! {
        /// Property: 1..=N with step 1 yields exactly N strictly increasing values
        #[test]
        fn unit_range_yields_exactly_n_values(n in 0u32..500) {
            let values: Vec<u32> = StepRange::new(1, n, 1).unwrap().collect();
            prop_assert_eq!(values.len(), n as usize);
            prop_assert_eq!(values.first().copied(), if n == 0 { None } else { Some(1) });
            for pair in values.windows(2) {
                prop_assert_eq!(pair[1], pair[0] + 1);
            }
        }

        /// Property: no yielded value ever exceeds the inclusive bound
        #[test]
        fn values_never_exceed_end(start in 0u32..1000, end in 0u32..1000, step in 1u32..50) {
            for value in StepRange::new(start, end, step).unwrap() {
                prop_assert!(value <= end);
                prop_assert!(value >= start);
                prop_assert_eq!((value - start) % step, 0);
            }
        }
    }

    // ============================================================================
    // repo_name property tests
    // ============================================================================

    proptest! {
        /// Property: distinct indices produce distinct names
        #[test]
        fn repo_name_is_injective_over_range(n in 1u32..300) {
            let names: HashSet<String> = StepRange::up_to(n)
                .map(|index| repo_name("csc316-", "002", "P2", index))
                .collect();
            prop_assert_eq!(names.len(), n as usize);
        }

        /// Property: the suffix parses back to the index
        #[test]
        fn repo_name_suffix_encodes_index(index in 0u32..100_000) {
            let name = repo_name("csc316-", "002", "P2", index);
            let suffix = name.strip_prefix("csc316-002-P2-").unwrap();
            prop_assert!(suffix.len() >= 2);
            prop_assert_eq!(suffix.parse::<u32>().unwrap(), index);
        }

        /// Property: formatting is deterministic
        #[test]
        fn repo_name_is_deterministic(
            prefix in "[a-z0-9-]{0,10}",
            section in "[0-9]{1,3}",
            assignment in "[A-Z0-9]{1,4}",
            index in 0u32..1000,
        ) {
            prop_assert_eq!(
                repo_name(&prefix, &section, &assignment, index),
                repo_name(&prefix, &section, &assignment, index)
            );
        }
    }
}
