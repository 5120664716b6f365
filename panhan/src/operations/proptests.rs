//! Property-based tests for operations module.
//!
//! These tests focus on the shape of the converter argument list.

use super::plan::ConversionJob;
use crate::config::{DocumentConfig, FilterMap, Scalar, ScalarMap};
use proptest::prelude::*;
use std::path::Path;

fn flag_map_strategy() -> impl Strategy<Value = ScalarMap> {
    prop::collection::vec(
        (
            "[a-e][a-z_]{0,8}",
            prop_oneof![
                any::<bool>().prop_map(Scalar::Bool),
                (0i64..1000).prop_map(Scalar::Integer),
                "[a-z]{1,8}".prop_map(Scalar::String),
            ],
        ),
        0..8,
    )
    .prop_map(|entries| entries.into_iter().collect())
}

fn filter_map_strategy() -> impl Strategy<Value = FilterMap> {
    prop::collection::vec(("[a-z-]{1,10}", any::<bool>()), 0..5)
        .prop_map(|entries| entries.into_iter().collect())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        .. ProptestConfig::default()
    })]

    // The source is always the first argument
    #[test]
    fn source_comes_first(
        name in "[a-z]{1,10}\\.md",
        format in prop::option::of("[a-z]{2,8}"),
        flags in flag_map_strategy()
    ) {
        let config = DocumentConfig { output_format: format, pandoc_args: flags, ..Default::default() };
        let args = ConversionJob::from_config(Path::new(&name), &config).arguments();
        prop_assert_eq!(&args[0], &name);
    }

    // Only enabled filters are passed, once each, after every other argument
    #[test]
    fn enabled_filters_come_last(
        flags in flag_map_strategy(),
        filters in filter_map_strategy()
    ) {
        let config = DocumentConfig { pandoc_args: flags, filters: filters.clone(), ..Default::default() };
        let args = ConversionJob::from_config(Path::new("doc.md"), &config).arguments();

        let enabled: Vec<&String> = filters.iter().filter(|(_, on)| **on).map(|(name, _)| name).collect();
        let tail = &args[args.len() - enabled.len() * 2..];
        for (pair, name) in tail.chunks(2).zip(&enabled) {
            prop_assert_eq!(pair[0].as_str(), "--filter");
            prop_assert_eq!(&pair[1], *name);
        }
        let filter_flags = args.iter().filter(|arg| *arg == "--filter").count();
        prop_assert_eq!(filter_flags, enabled.len());
    }

    // Disabled toggles never reach the converter
    #[test]
    fn disabled_flags_are_suppressed(flags in flag_map_strategy()) {
        let config = DocumentConfig { pandoc_args: flags.clone(), ..Default::default() };
        let args = ConversionJob::from_config(Path::new("doc.md"), &config).arguments();

        for (name, value) in &flags {
            let flag = crate::args::format_flag(name);
            let present = args.contains(&flag);
            prop_assert_eq!(present, value.as_bool() != Some(false));
        }
    }

    // Serialization is deterministic
    #[test]
    fn arguments_are_deterministic(flags in flag_map_strategy(), filters in filter_map_strategy()) {
        let config = DocumentConfig { pandoc_args: flags, filters, ..Default::default() };
        let first = ConversionJob::from_config(Path::new("doc.md"), &config);
        let second = ConversionJob::from_config(Path::new("doc.md"), &config);
        prop_assert_eq!(first.arguments(), second.arguments());
    }
}
