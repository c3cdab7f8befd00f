// File: crates/recover-core/tests/batch.rs
// Purpose: Multi-chart batch over a directory source, failure isolation, CSV output.

use chart_recover_core::{
    process_batch, AcquisitionError, BatchError, ChartFailure, ChartLayout, ChartSource, DirectorySource,
};

fn chart(d: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg">
  <g class="highcharts-series highcharts-series-0 highcharts-line-series" transform="translate(0,0)">
    <path class="highcharts-graph" d="{d}"/>
  </g>
  <g class="highcharts-axis-labels highcharts-yaxis-labels">
    <text y="150">10</text><text y="50">30</text>
  </g>
  <g class="highcharts-axis-labels highcharts-xaxis-labels">
    <text x="0">2020</text><text x="100">2021</text>
  </g>
</svg>"#
    )
}

fn workspace(files: &[(&str, String)]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    for (name, body) in files {
        std::fs::write(dir.path().join(format!("{name}.svg")), body).expect("write chart");
    }
    dir
}

#[test]
fn directory_source_reads_and_reports_missing() {
    let dir = workspace(&[("lead", chart("M 0 0"))]);
    let source = DirectorySource::new(dir.path());
    assert!(source.fetch_chart("lead").unwrap().contains("highcharts-graph"));
    assert!(matches!(source.fetch_chart("tin"), Err(AcquisitionError::NotFound { .. })));
}

#[test]
fn bad_charts_do_not_stop_the_batch() {
    let dir = workspace(&[
        ("lithium", chart("M 0 150 L 50 100")),
        ("lead", "<svg xmlns=\"http://www.w3.org/2000/svg\"/>".to_string()),
        ("cobalt", chart("M 100 50")),
        ("nickel", chart("")),
    ]);
    let source = DirectorySource::new(dir.path());
    let ids = ["lithium", "lead", "cobalt", "nickel", "zinc"];

    let report = process_batch(&source, ids, &ChartLayout::default()).expect("two charts recover");

    assert_eq!(report.table.series_names(), &["lithium".to_string(), "cobalt".to_string()]);
    assert_eq!(report.table.rows().len(), 3);
    assert_eq!(report.table.series_rows("lithium").count(), 2);

    let failed: Vec<&str> = report.failures.iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(failed, vec!["lead", "nickel", "zinc"]);
    assert!(matches!(report.failures[0].1, ChartFailure::Chart(_)));
    assert!(matches!(report.failures[1].1, ChartFailure::Empty));
    assert!(matches!(report.failures[2].1, ChartFailure::Acquisition(_)));
}

#[test]
fn batch_with_nothing_recovered_fails() {
    let dir = workspace(&[("lead", "<svg/>".to_string())]);
    let source = DirectorySource::new(dir.path());
    let err = process_batch(&source, ["lead", "tin"], &ChartLayout::default()).unwrap_err();
    let BatchError::NothingRecovered { failures } = err;
    assert_eq!(failures.len(), 2);
}

#[test]
fn combined_csv_has_date_price_series_columns() {
    let dir = workspace(&[("lithium", chart("M 0 150 L 50 100")), ("cobalt", chart("M 100 50"))]);
    let source = DirectorySource::new(dir.path());
    let report = process_batch(&source, ["lithium", "cobalt"], &ChartLayout::default()).unwrap();

    let mut buf = Vec::new();
    report.table.write_csv(&mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["Date,Price,Series", "2020-01-01,10.0,lithium", "2020-07-02,20.0,lithium", "2021-01-01,30.0,cobalt"]);

    let out = dir.path().join("out/prices.csv");
    report.table.write_csv_file(&out).unwrap();
    assert_eq!(std::fs::read_to_string(out).unwrap(), text);
}
