// File: crates/recover-cli/src/settings.rs
// Summary: Layered settings: defaults <- TOML file <- CHART_RECOVER__* environment.

use std::path::{Path, PathBuf};

use chart_recover_core::ChartLayout;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Directory holding `<series>.svg` exports.
    pub charts_dir: PathBuf,
    /// Series identifiers to process, in output order.
    pub series: Vec<String>,
    pub output_csv: PathBuf,
    /// Where to write the plot; `None` skips plotting.
    pub plot_png: Option<PathBuf>,
    pub theme: String,
    pub log_level: String,
    pub layout: ChartLayout,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            charts_dir: PathBuf::from("charts"),
            series: vec!["lithium".to_string(), "lead".to_string(), "cobalt".to_string()],
            output_csv: PathBuf::from("commodity_prices.csv"),
            plot_png: Some(PathBuf::from("10y_commodity_prices.png")),
            theme: "light".to_string(),
            log_level: "info".to_string(),
            layout: ChartLayout::default(),
        }
    }
}

/// Load settings. An explicit `path` must exist; otherwise `chart-recover.toml`
/// in the working directory is used when present.
pub fn load(path: Option<&Path>) -> anyhow::Result<Settings> {
    let file = match path {
        Some(p) => config::File::from(p).required(true),
        None => config::File::with_name("chart-recover").required(false),
    };
    let settings = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix("CHART_RECOVER")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("series")
                .try_parsing(true),
        )
        .build()?;

    Ok(settings.try_deserialize()?)
}
