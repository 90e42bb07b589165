use jcdiff::commands::compare::{run, CompareConfig};
use jcdiff::comparison::{compare, Category};
use jcdiff::core::{PerformanceResult, ResultStore};
use jcdiff::io::output::OutputFormat;
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::fs;

#[test]
fn compare_command_writes_a_markdown_report() {
    let dir = tempfile::tempdir().unwrap();
    let reference = dir.path().join("CardA_PERFORMANCE.csv");
    let profiled = dir.path().join("CardB_PERFORMANCE.csv");
    let output = dir.path().join("report.md");

    fs::write(
        &reference,
        "Card name;Card A\nSHA hash;8.0,12.0,10.0;1.0\nAES setKey;5.0;1.0\n",
    )
    .unwrap();
    fs::write(
        &profiled,
        "Card name;Card B\nSHA hash;11.0;1.0\nDES setKey;4.0;1.0\n",
    )
    .unwrap();

    run(CompareConfig {
        reference_path: reference,
        profiled_path: profiled,
        reference_name: Some("Card A".to_string()),
        profiled_name: Some("Card B".to_string()),
        format: OutputFormat::Markdown,
        output: Some(output.clone()),
    })
    .unwrap();

    let report = fs::read_to_string(&output).unwrap();
    assert!(report.contains("# Comparison: Card A vs Card B"));
    assert!(report.contains("| matching | 1 |"));
    assert!(report.contains("| missing | 2 |"));
    assert!(report.contains("| AES setKey | 5.00 ms | Result missing |"));
    assert!(report.contains("| DES setKey | Result missing | 4.00 ms |"));
}

#[test]
fn compare_command_resolves_results_directories() {
    let dir = tempfile::tempdir().unwrap();
    let card_a = dir.path().join("CardA");
    let card_b = dir.path().join("CardB");
    fs::create_dir_all(&card_a).unwrap();
    fs::create_dir_all(&card_b).unwrap();
    fs::write(card_a.join("CardA_PERFORMANCE_3b90.csv"), "op;1.0;0.5\n").unwrap();
    fs::write(card_b.join("CardB_PERFORMANCE_3b75.csv"), "op;1.0;0.5\n").unwrap();
    let output = dir.path().join("report.json");

    run(CompareConfig {
        reference_path: card_a,
        profiled_path: card_b,
        reference_name: None,
        profiled_name: None,
        format: OutputFormat::Json,
        output: Some(output.clone()),
    })
    .unwrap();

    let model: jcdiff::ReportModel =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(model.reference_card, "CardA_PERFORMANCE_3b90");
    assert_eq!(model.total, 1);
}

#[test]
fn malformed_report_fails_with_file_context() {
    let dir = tempfile::tempdir().unwrap();
    let reference = dir.path().join("bad_PERFORMANCE.csv");
    let profiled = dir.path().join("good_PERFORMANCE.csv");
    fs::write(&reference, "op;1.0,abc;2.0\n").unwrap();
    fs::write(&profiled, "op;1.0;2.0\n").unwrap();

    let err = run(CompareConfig {
        reference_path: reference,
        profiled_path: profiled,
        reference_name: None,
        profiled_name: None,
        format: OutputFormat::Terminal,
        output: None,
    })
    .unwrap_err();

    let chain = format!("{err:#}");
    assert!(chain.contains("bad_PERFORMANCE.csv"), "{chain}");
    assert!(chain.contains("abc"), "{chain}");
}

#[derive(Clone, Debug)]
enum ResultSpec {
    Measured(Vec<f64>, Vec<f64>),
    Failed(&'static str),
}

impl ResultSpec {
    fn into_result(self, key: String) -> PerformanceResult {
        match self {
            ResultSpec::Measured(samples, baseline) => {
                PerformanceResult::measured(key, samples, baseline)
            }
            ResultSpec::Failed(error) => PerformanceResult::failed(key, error),
        }
    }
}

fn arb_spec() -> impl Strategy<Value = ResultSpec> {
    prop_oneof![
        (
            prop::collection::vec(0.0f64..100.0, 1..5),
            prop::collection::vec(0.0f64..10.0, 0..3),
        )
            .prop_map(|(samples, baseline)| ResultSpec::Measured(samples, baseline)),
        prop::sample::select(vec!["CryptoException", "SystemException"])
            .prop_map(ResultSpec::Failed),
    ]
}

fn arb_store() -> impl Strategy<Value = ResultStore> {
    prop::collection::vec(("k[0-9]", arb_spec()), 0..8).prop_map(|entries| {
        entries
            .into_iter()
            .map(|(key, spec)| spec.into_result(key))
            .collect()
    })
}

proptest! {
    /// The five categories are pairwise disjoint and their union is the
    /// union of both stores' key sets.
    #[test]
    fn categories_partition_key_union(reference in arb_store(), profiled in arb_store()) {
        let outcome = compare(&reference, &profiled);

        let mut union: BTreeSet<String> = reference.keys().map(String::from).collect();
        union.extend(profiled.keys().map(String::from));

        let mut seen = BTreeSet::new();
        for category in Category::ALL {
            for key in outcome.category(category).keys() {
                prop_assert!(seen.insert(key.clone()), "key {} classified twice", key);
            }
        }
        prop_assert_eq!(seen, union);
    }

    /// Comparing a store against itself never diverges.
    #[test]
    fn self_comparison_is_all_matching(store in arb_store()) {
        let outcome = compare(&store, &store);
        prop_assert_eq!(outcome.count(Category::Matching), store.len());
        prop_assert_eq!(outcome.count(Category::Mismatch), 0);
        prop_assert_eq!(outcome.count(Category::Erroneous), 0);
        prop_assert_eq!(outcome.count(Category::Missing), 0);
        prop_assert_eq!(outcome.count(Category::Skipped), 0);
    }
}
