// File: crates/recover-cli/src/main.rs
// Summary: Batch run: read exported charts, recover each series, write the combined CSV and plot.

mod cli;
mod settings;

use anyhow::{Context, Result};
use chart_recover_core::{process_batch, DirectorySource};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;
use crate::settings::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut settings = settings::load(cli.config.as_deref()).context("failed to load settings")?;
    cli.apply(&mut settings);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.log_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();

    let source = DirectorySource::new(&settings.charts_dir);
    log_start(&settings, &source);
    println!("Reading charts from {}", source.root().display());

    let report = process_batch(&source, &settings.series, &settings.layout)
        .with_context(|| format!("no usable charts in {}", source.root().display()))?;

    for (id, reason) in &report.failures {
        println!("Failed to process {id}: {reason}");
    }
    println!(
        "Recovered {} of {} series ({} rows, {} points dropped)",
        report.table.series_names().len(),
        settings.series.len(),
        report.table.rows().len(),
        report.dropped,
    );

    report
        .table
        .write_csv_file(&settings.output_csv)
        .with_context(|| format!("writing {}", settings.output_csv.display()))?;
    info!(rows = report.table.rows().len(), path = %settings.output_csv.display(), "csv written");
    println!("Wrote {}", settings.output_csv.display());

    if let Some(png) = &settings.plot_png {
        plot(&report.table, &settings.theme, png)?;
    }

    Ok(())
}

fn log_start(settings: &Settings, source: &DirectorySource) {
    info!(
        charts_dir = %source.root().display(),
        series = ?settings.series,
        output = %settings.output_csv.display(),
        plot = settings.plot_png.is_some(),
        "starting batch"
    );
}

#[cfg(feature = "plot")]
fn plot(table: &chart_recover_core::SeriesTable, theme_name: &str, out: &std::path::Path) -> Result<()> {
    use chart_recover_plot::{render_table_to_png, theme, PlotOptions};

    let opts = PlotOptions { theme: theme::find(theme_name), ..PlotOptions::default() };
    render_table_to_png(table, &opts, out).with_context(|| format!("plotting to {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

#[cfg(not(feature = "plot"))]
fn plot(_table: &chart_recover_core::SeriesTable, _theme_name: &str, out: &std::path::Path) -> Result<()> {
    tracing::warn!(path = %out.display(), "built without the `plot` feature; skipping plot");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn start_event_names_source_and_series() {
        let out = Captured::default();
        let sink = out.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || sink.clone())
            .with_ansi(false)
            .finish();

        let settings = Settings::default();
        let source = DirectorySource::new(&settings.charts_dir);
        tracing::subscriber::with_default(subscriber, || log_start(&settings, &source));

        let text = String::from_utf8(out.0.lock().unwrap().clone()).unwrap();
        assert!(text.contains("starting batch"));
        assert!(text.contains("charts_dir=charts"));
        assert!(text.contains("lithium"));
    }
}
