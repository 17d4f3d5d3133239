//! Integration tests for the output parameter reference
//!
//! The full catalogue rendering is pinned with a snapshot. Layout rules (partition,
//! ordering, line format) are checked as properties over generated registries.

use jos3_outparams::outparams::config::DocsConfig;
use jos3_outparams::outparams::docs::{render_docs, EXTRA_HEADING, STANDARD_HEADING};
use jos3_outparams::outparams::{ParameterDescriptor, ParameterRegistry};
use jos3_outparams::{show_outparam_docs, ALL_OUT_PARAMS};
use proptest::prelude::*;
use regex::Regex;

/// Identifiers listed under each section heading, in rendered order
fn section_identifiers(docs: &str) -> (Vec<String>, Vec<String>) {
    let mut sections: [Vec<String>; 2] = [Vec::new(), Vec::new()];
    let mut current = None;

    for line in docs.lines() {
        let trimmed = line.trim();
        if trimmed == STANDARD_HEADING {
            current = Some(0);
        } else if trimmed == EXTRA_HEADING {
            current = Some(1);
        } else if let Some((identifier, _)) = trimmed.split_once(": ") {
            let index = current.expect("parameter line before any heading");
            sections[index].push(identifier.trim_end().to_string());
        }
    }

    let [standard, extra] = sections;
    (standard, extra)
}

fn entry_line_regex() -> Regex {
    Regex::new(r"^    (?P<id>\S+) *: (?P<meaning>.+) \[(?P<unit>[^\]]+)\]$").unwrap()
}

#[test]
fn test_catalogue_docs_snapshot() {
    let docs = show_outparam_docs();
    let lines: Vec<&str> = docs.split('\n').collect();

    insta::assert_debug_snapshot!("catalogue_docs", lines);
}

#[test]
fn test_catalogue_docs_partition() {
    let (standard, extra) = section_identifiers(&show_outparam_docs());

    let expected_standard: Vec<_> = ALL_OUT_PARAMS.standard().map(|d| d.identifier).collect();
    let expected_extra: Vec<_> = ALL_OUT_PARAMS.extra().map(|d| d.identifier).collect();
    assert_eq!(standard, expected_standard);
    assert_eq!(extra, expected_extra);
    assert_eq!(standard.len() + extra.len(), ALL_OUT_PARAMS.len());
}

#[test]
fn test_catalogue_docs_line_format() {
    let re = entry_line_regex();
    let docs = show_outparam_docs();

    let mut matched = 0;
    for line in docs.lines().filter(|l| l.contains(": ")) {
        let caps = re
            .captures(line)
            .unwrap_or_else(|| panic!("line does not match format: {line:?}"));
        let descriptor = ALL_OUT_PARAMS.get(&caps["id"]).expect("known identifier");
        assert_eq!(&caps["meaning"], descriptor.meaning);
        assert_eq!(&caps["unit"], descriptor.unit);
        assert!(line.find(": ").unwrap() >= 4 + 8);
        matched += 1;
    }
    assert_eq!(matched, ALL_OUT_PARAMS.len());
}

#[test]
fn test_two_entry_registry() {
    let registry = ParameterRegistry::from_entries([
        ParameterDescriptor::new("age", "age", "years", None, true),
        ParameterDescriptor::new("q_res", "heat loss by respiration", "W", None, false),
    ])
    .unwrap();

    let docs = render_docs(&registry, &DocsConfig::default());
    let (standard, extra) = section_identifiers(&docs);
    assert_eq!(standard, vec!["q_res"]);
    assert_eq!(extra, vec!["age"]);

    let q_res = docs.find("    q_res   : heat loss by respiration [W]").unwrap();
    let age = docs.find("    age     : age [years]").unwrap();
    assert!(q_res < age);
}

#[test]
fn test_empty_registry_keeps_headings() {
    let docs = render_docs(&ParameterRegistry::new(), &DocsConfig::default());
    let (standard, extra) = section_identifiers(&docs);

    assert!(standard.is_empty());
    assert!(extra.is_empty());
    assert!(docs.contains("    Output parameters\n    -------"));
    assert!(docs.contains("    Extra output parameters\n    -------"));
}

fn leak(s: String) -> &'static str {
    Box::leak(s.into_boxed_str())
}

fn arb_registry() -> impl Strategy<Value = ParameterRegistry> {
    let entry = (
        "[a-z][a-z ()]{0,24}",
        "[A-Za-z0-9%/.-]{1,8}",
        any::<bool>(),
        any::<bool>(),
    );
    prop::collection::btree_map("[A-Za-z_][A-Za-z0-9_]{0,14}", entry, 0..24).prop_map(|map| {
        let entries = map
            .into_iter()
            .map(|(identifier, (meaning, unit, per_segment, is_extra))| {
                ParameterDescriptor::new(
                    leak(identifier),
                    leak(meaning),
                    leak(unit),
                    per_segment.then_some("Body name"),
                    is_extra,
                )
            });
        ParameterRegistry::from_entries(entries).expect("generated entries are valid")
    })
}

proptest! {
    #[test]
    fn prop_every_identifier_in_its_own_section(registry in arb_registry()) {
        let docs = render_docs(&registry, &DocsConfig::default());
        let (standard, extra) = section_identifiers(&docs);

        prop_assert_eq!(standard.len() + extra.len(), registry.len());
        for descriptor in registry.iter() {
            let id = descriptor.identifier.to_string();
            let (own, other) = if descriptor.is_extra {
                (&extra, &standard)
            } else {
                (&standard, &extra)
            };
            prop_assert_eq!(own.iter().filter(|i| **i == id).count(), 1);
            prop_assert!(!other.contains(&id));
        }
    }

    #[test]
    fn prop_sections_sorted(registry in arb_registry()) {
        let docs = render_docs(&registry, &DocsConfig::default());
        let (standard, extra) = section_identifiers(&docs);

        prop_assert!(standard.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(extra.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn prop_lines_match_format(registry in arb_registry()) {
        let re = entry_line_regex();
        let docs = render_docs(&registry, &DocsConfig::default());

        for line in docs.lines().filter(|l| l.contains(": ")) {
            prop_assert!(re.is_match(line), "bad line: {:?}", line);
            prop_assert!(line.find(": ").unwrap() >= 4 + 8);
        }
    }

    #[test]
    fn prop_rendering_is_idempotent(registry in arb_registry()) {
        let config = DocsConfig::default();
        prop_assert_eq!(render_docs(&registry, &config), render_docs(&registry, &config));
    }
}
