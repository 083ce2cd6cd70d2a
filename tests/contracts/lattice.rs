//! Lattice generation contracts

use std::collections::HashSet;

use crate::common::*;

/// CONTRACT: every subset of the optional packages is generated exactly once.
mod one_combination_per_subset {
    use super::*;

    #[test]
    fn contract_generates_power_set_of_optionals() {
        let env = LatticeEnv::builder().base_with_optionals(4).build();

        let result = env.generate("base");

        assert_eq!(result.total(), 16);
        assert_eq!(result.per_level, vec![1, 4, 6, 4, 1]);

        let subsets: HashSet<Vec<String>> = result
            .combinations
            .iter()
            .map(|c| {
                let mut optional = c.loaded_optional_package_names.clone();
                optional.sort();
                optional
            })
            .collect();
        assert_eq!(subsets.len(), 16, "every optional subset must be distinct");
    }

    #[test]
    fn contract_names_follow_optional_order() {
        let env = LatticeEnv::builder()
            .package("base", 1, &[], &["late", "early"])
            .package("early", 2, &[], &[])
            .package("late", 3, &[], &[])
            .build();

        let result = env.generate("base");
        let names: Vec<&str> = result.combinations.iter().map(|c| c.name.as_str()).collect();

        assert_eq!(names, vec!["base", "base-early", "base-late", "base-early-late"]);
    }
}

/// CONTRACT: the mandatory closure is loaded by every combination, but is
/// never part of the optional packages.
mod mandatory_closure {
    use super::*;

    #[test]
    fn contract_mandatory_packages_are_always_loaded() {
        let env = LatticeEnv::builder()
            .package("base", 1, &["core"], &["core", "extra"])
            .package("core", 0, &[], &[])
            .package("extra", 2, &[], &[])
            .build();

        let result = env.generate("base");

        assert_eq!(result.total(), 2);
        for combination in &result.combinations {
            assert!(combination.loads("base"));
            assert!(combination.loads("core"));
            assert!(!combination
                .loaded_optional_package_names
                .contains(&"core".to_string()));
        }
    }

    #[test]
    fn contract_combinations_are_registered_on_base_package() {
        let env = LatticeEnv::builder().base_with_optionals(2).build();

        let result = env.generate("base");
        let base = env.package("base");

        for combination in &result.combinations {
            assert!(base.combination_ids.contains(&combination.id));
            assert_eq!(combination.main_package_name, "base");
        }
        assert_eq!(base.combination_ids.len(), result.total());
    }
}
