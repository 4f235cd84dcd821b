use std::fs;
use std::path::Path;

use ldiff_core::{LineMultiset, RenderConfig};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Fixture {
    lhs: String,
    rhs: String,
    lhs_label: String,
    rhs_label: String,
    report: String,
}

fn load_fixture(path: &Path) -> Fixture {
    let data = fs::read_to_string(path).expect("fixture should be readable");
    serde_json::from_str(&data).expect("fixture should deserialize")
}

#[test]
fn report_golden_parity() {
    let fixtures_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/report");
    let mut entries: Vec<_> = fs::read_dir(&fixtures_root)
        .expect("fixtures directory must exist")
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    entries.sort();

    assert!(
        !entries.is_empty(),
        "expected at least one report fixture under tests/fixtures/report",
    );

    for path in entries {
        let fixture = load_fixture(&path);
        let lhs = LineMultiset::from_text(&fixture.lhs);
        let rhs = LineMultiset::from_text(&fixture.rhs);
        let report =
            lhs.diff(&rhs).render(&fixture.lhs_label, &fixture.rhs_label, &RenderConfig::default());
        assert_eq!(report, fixture.report, "fixture {path:?}");
    }
}
