// File: crates/recover-core/benches/reconstruct_bench.rs
// Summary: Throughput of vertex -> sample reconstruction and full-chart extraction.

use chart_recover_core::{extract_from_str, reconstruct, Axis, AxisLabel, CalibrationFunction, ChartLayout, Offset, Vertex};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn gen_vertices(n: usize) -> Vec<Vertex> {
    (0..n)
        .map(|i| {
            let x = i as f64 * 600.0 / n as f64;
            // wavy price line inside the plot area
            let y = 200.0 + (i as f64 * 0.01).sin() * 120.0;
            Vertex::new(x, y)
        })
        .collect()
}

fn axes() -> (CalibrationFunction, CalibrationFunction) {
    let years: Vec<AxisLabel> = (0..11).map(|i| AxisLabel::new(i as f64 * 60.0, 2014.0 + i as f64)).collect();
    let prices: Vec<AxisLabel> = (1..8).map(|i| AxisLabel::new(400.0 - i as f64 * 50.0, i as f64 * 5_000.0)).collect();
    (
        CalibrationFunction::build(Axis::Category, &years).expect("years"),
        CalibrationFunction::build(Axis::Value, &prices).expect("prices"),
    )
}

fn svg_for(vertices: &[Vertex]) -> String {
    let mut d = String::new();
    for (i, v) in vertices.iter().enumerate() {
        d.push_str(if i == 0 { "M " } else { " L " });
        d.push_str(&format!("{:.3} {:.3}", v.x, v.y));
    }
    let years: String = (0..11).map(|i| format!(r#"<text x="{}">{}</text>"#, i * 60, 2014 + i)).collect();
    let prices: String = (1..8).map(|i| format!(r#"<text y="{}"><tspan>{}</tspan></text>"#, 400 - i * 50, i * 5_000)).collect();
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg"><g class="highcharts-series highcharts-series-0 highcharts-line-series" transform="translate(62,10)"><path class="highcharts-graph" d="{d}"/></g><g class="highcharts-axis-labels highcharts-yaxis-labels">{prices}</g><g class="highcharts-axis-labels highcharts-xaxis-labels">{years}</g></svg>"#
    )
}

fn bench_reconstruct(c: &mut Criterion) {
    let (x, y) = axes();
    let mut group = c.benchmark_group("reconstruct");
    for &n in &[1_000usize, 10_000usize, 100_000usize] {
        let vertices = gen_vertices(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &vertices, |b, v| {
            b.iter(|| black_box(reconstruct(v, &x, &y, Offset::new(62.0, 10.0))));
        });
    }
    group.finish();
}

fn bench_extract(c: &mut Criterion) {
    let layout = ChartLayout::default();
    let mut group = c.benchmark_group("extract");
    for &n in &[2_500usize, 25_000usize] {
        let svg = svg_for(&gen_vertices(n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &svg, |b, s| {
            b.iter(|| black_box(extract_from_str(s, &layout).expect("extract")));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reconstruct, bench_extract);
criterion_main!(benches);
