//! Parent finding contracts

use export_lattice::domain::services::is_valid_parent;

use crate::common::*;

/// CONTRACT: a combination is never its own parent, and every parent loads a
/// strict subset of the child's packages.
mod strict_subset {
    use super::*;

    #[test]
    fn contract_parents_are_strict_subsets() {
        let env = LatticeEnv::builder().base_with_optionals(3).build();
        let result = env.generate("base");
        let finder = env.parent_finder();

        for combination in &result.combinations {
            let parents = finder.find_valid_parents(combination).unwrap();
            for parent in &parents {
                assert_ne!(parent.name, combination.name);
                assert!(parent.is_subset_of(combination));
                assert!(
                    parent.loaded_package_names.len() < combination.loaded_package_names.len()
                );
                assert!(is_valid_parent(parent, combination));
            }
        }
    }

    #[test]
    fn contract_every_proper_subset_is_a_parent() {
        let env = LatticeEnv::builder().base_with_optionals(3).build();
        env.generate("base");
        let top = env.combination("base-a-b-c");

        let parents = env.parent_finder().find_valid_parents(&top).unwrap();

        assert_eq!(parents.len(), 7);
    }

    #[test]
    fn contract_base_combination_has_no_parents() {
        let env = LatticeEnv::builder().base_with_optionals(2).build();
        env.generate("base");
        let base = env.combination("base");

        let parents = env.parent_finder().find_valid_parents(&base).unwrap();

        assert!(parents.is_empty());
    }
}

/// CONTRACT: parents are ordered by main package order, then size, then the
/// orders of their loaded packages.
mod parent_order {
    use super::*;

    #[test]
    fn contract_parents_sorted_by_size_then_package_orders() {
        let env = LatticeEnv::builder().base_with_optionals(3).build();
        env.generate("base");
        let top = env.combination("base-a-b-c");

        let parents = env.parent_finder().find_valid_parents(&top).unwrap();
        let names: Vec<&str> = parents.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(
            names,
            vec!["base", "base-a", "base-b", "base-c", "base-a-b", "base-a-c", "base-b-c"]
        );
    }
}
