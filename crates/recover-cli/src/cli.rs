// File: crates/recover-cli/src/cli.rs
// Summary: Command-line flags; each one overrides the matching settings value.

use clap::Parser;
use std::path::PathBuf;

use crate::settings::Settings;

#[derive(Parser, Debug)]
#[command(name = "chart-recover")]
#[command(about = "Recover (date, price) series from exported SVG line charts", long_about = None)]
pub struct Cli {
    /// Series identifiers; each is read from <charts-dir>/<id>.svg
    pub series: Vec<String>,

    /// Settings file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory holding the exported charts
    #[arg(short = 'd', long)]
    pub charts_dir: Option<PathBuf>,

    /// Combined CSV output path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Plot output path
    #[arg(long, conflicts_with = "no_plot")]
    pub plot: Option<PathBuf>,

    /// Skip plotting
    #[arg(long)]
    pub no_plot: bool,

    /// Plot theme (light, dark)
    #[arg(long)]
    pub theme: Option<String>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn apply(&self, settings: &mut Settings) {
        if !self.series.is_empty() {
            settings.series = self.series.clone();
        }
        if let Some(dir) = &self.charts_dir {
            settings.charts_dir = dir.clone();
        }
        if let Some(out) = &self.output {
            settings.output_csv = out.clone();
        }
        if let Some(plot) = &self.plot {
            settings.plot_png = Some(plot.clone());
        }
        if self.no_plot {
            settings.plot_png = None;
        }
        if let Some(theme) = &self.theme {
            settings.theme = theme.clone();
        }
        if self.verbose {
            settings.log_level = "debug".to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_settings() {
        let cli = Cli::parse_from(["chart-recover", "-d", "svgs", "--no-plot", "-v", "nickel"]);
        let mut s = Settings::default();
        cli.apply(&mut s);
        assert_eq!(s.series, vec!["nickel"]);
        assert_eq!(s.charts_dir, PathBuf::from("svgs"));
        assert_eq!(s.plot_png, None);
        assert_eq!(s.log_level, "debug");
    }

    #[test]
    fn no_flags_keep_settings() {
        let cli = Cli::parse_from(["chart-recover"]);
        let mut s = Settings::default();
        cli.apply(&mut s);
        assert_eq!(s, Settings::default());
    }
}
