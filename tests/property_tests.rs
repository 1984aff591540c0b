//! Property-based tests over randomly generated instances, covering the invariants the core is
//! meant to hold regardless of which specific instance it's handed.

use proptest::prelude::*;

use kstab::core::config::EngineConfig;
use kstab::generators::{generate_random_house_allocation, generate_random_marriage, generate_random_roommates};
use kstab::model::ops::trivial_matching;
use kstab::{existence, kernel, verifier};

proptest! {
    #[test]
    fn one_stability_holds_for_any_well_formed_matching(n in 2usize..12, seed in any::<u32>()) {
        let config = EngineConfig::default();
        let instance = generate_random_house_allocation(n, seed);
        let matching = existence::find_k_stable(&instance, 1, &config).unwrap().expect("1-stable existence always holds");
        prop_assert!(kernel::is_valid(&matching, &instance));
        prop_assert!(verifier::is_k_stable(&matching, &instance, 1, &config).unwrap());
    }

    #[test]
    fn one_stable_existence_always_holds(n in 1usize..15, seed in any::<u32>()) {
        let config = EngineConfig::default();
        let instance = generate_random_house_allocation(n, seed);
        prop_assert!(existence::k_stable_exists(&instance, 1, &config).unwrap());
    }

    #[test]
    fn a_k_equals_n_witness_always_verifies(n in 2usize..8, seed in any::<u32>()) {
        let config = EngineConfig::default();
        let instance = generate_random_house_allocation(n, seed);
        if let Some(matching) = existence::find_k_stable(&instance, n, &config).unwrap() {
            prop_assert!(verifier::is_k_stable(&matching, &instance, n, &config).unwrap());
        }
    }

    #[test]
    fn roommates_with_odd_agent_count_always_leaves_someone_unmatched(n in (3usize..12).prop_filter("odd", |n| n % 2 == 1), seed in any::<u32>()) {
        let instance = generate_random_roommates(n, seed);
        let matching = trivial_matching(&instance);
        prop_assert!((0..n).any(|i| matching.partner(i).is_none()));
    }

    #[test]
    fn marriage_with_unequal_sides_leaves_the_excess_unmatched(num_men in 1usize..6, extra_women in 1usize..6, seed in any::<u32>()) {
        let num_women = num_men + extra_women;
        let instance = generate_random_marriage(num_men, num_women, seed);
        let matching = trivial_matching(&instance);
        let unmatched_women = (num_men..num_men + num_women).filter(|&w| matching.partner(w).is_none()).count();
        prop_assert_eq!(unmatched_women, extra_women);
    }
}
