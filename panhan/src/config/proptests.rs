//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{DocumentConfig, FilterMap, Scalar, ScalarMap};
use proptest::prelude::*;
use std::path::PathBuf;

fn scalar_strategy() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        any::<bool>().prop_map(Scalar::Bool),
        any::<i64>().prop_map(Scalar::Integer),
        (-1.0e6..1.0e6f64).prop_map(Scalar::Float),
        "[a-zA-Z0-9 ]{1,12}".prop_map(Scalar::String),
    ]
}

fn scalar_map_strategy() -> impl Strategy<Value = ScalarMap> {
    prop::collection::vec(("[a-z_]{1,8}", scalar_strategy()), 0..6)
        .prop_map(|entries| entries.into_iter().collect())
}

fn filter_map_strategy() -> impl Strategy<Value = FilterMap> {
    prop::collection::vec(("[a-z-]{1,10}", any::<bool>()), 0..4)
        .prop_map(|entries| entries.into_iter().collect())
}

// Strategy for generating document configs
fn document_config_strategy() -> impl Strategy<Value = DocumentConfig> {
    (
        prop::option::of("[a-z]{1,10}"),
        prop::option::of("[a-z]{1,10}"),
        prop::option::of("[a-z]{1,10}\\.[a-z]{2,4}"),
        scalar_map_strategy(),
        scalar_map_strategy(),
        filter_map_strategy(),
    )
        .prop_map(
            |(use_preset, output_format, output_file, variables, pandoc_args, filters)| {
                DocumentConfig {
                    use_preset,
                    output_format,
                    output_file: output_file.map(PathBuf::from),
                    variables,
                    pandoc_args,
                    filters,
                }
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // The empty config is a two-sided identity
    #[test]
    fn combine_empty_is_identity(config in document_config_strategy()) {
        let empty = DocumentConfig::default();
        prop_assert_eq!(config.combine(&empty), config.clone());
        prop_assert_eq!(empty.combine(&config), config);
    }

    // Scalars set on the receiver always win
    #[test]
    fn combine_is_left_biased(
        high in document_config_strategy(),
        low in document_config_strategy()
    ) {
        let merged = high.combine(&low);

        prop_assert_eq!(
            merged.output_format.clone(),
            high.output_format.clone().or(low.output_format.clone())
        );
        prop_assert_eq!(
            merged.output_file.clone(),
            high.output_file.clone().or(low.output_file.clone())
        );
        prop_assert_eq!(merged.use_preset, high.use_preset.or(low.use_preset));
    }

    // Mappings are a union in which the receiver's values win
    #[test]
    fn combine_mappings_override(
        high in document_config_strategy(),
        low in document_config_strategy()
    ) {
        let merged = high.combine(&low);

        for (key, value) in &high.pandoc_args {
            prop_assert_eq!(&merged.pandoc_args[key], value);
        }
        for (key, value) in &low.pandoc_args {
            if !high.pandoc_args.contains_key(key) {
                prop_assert_eq!(&merged.pandoc_args[key], value);
            }
        }
        for key in merged.variables.keys() {
            prop_assert!(high.variables.contains_key(key) || low.variables.contains_key(key));
        }

        let union = low
            .filters
            .keys()
            .chain(high.filters.keys().filter(|key| !low.filters.contains_key(*key)))
            .count();
        prop_assert_eq!(merged.filters.len(), union);
    }

    // Lower-layer keys keep their position ahead of keys only in the receiver
    #[test]
    fn combine_key_order(
        high in scalar_map_strategy(),
        low in scalar_map_strategy()
    ) {
        let merged = DocumentConfig { variables: high.clone(), ..Default::default() }
            .combine(&DocumentConfig { variables: low.clone(), ..Default::default() });

        let expected: Vec<&String> = low
            .keys()
            .chain(high.keys().filter(|key| !low.contains_key(*key)))
            .collect();
        let actual: Vec<&String> = merged.variables.keys().collect();
        prop_assert_eq!(actual, expected);
    }

    // Grouping does not change the merged values
    #[test]
    fn combine_is_associative(
        a in document_config_strategy(),
        b in document_config_strategy(),
        c in document_config_strategy()
    ) {
        let left = a.combine(&b).combine(&c);
        let right = a.combine(&b.combine(&c));
        prop_assert_eq!(&left, &right);
        prop_assert_eq!(ConfigMerger::merge([&a, &b, &c]), left);
    }
}
