//! Plot output directories and HTML writing
//!
//! Plots are written as standalone HTML files. The default location is the
//! per-user cache directory so repeated runs collect in one place; every tool
//! accepts `--plot-dir` to override it.

use plotly::Plot;
use std::path::{Path, PathBuf};

/// Resolve the directory plots are written to.
///
/// With no override this is `<user cache>/num-methods/plots`, created on
/// demand.
pub fn plot_output_dir(override_dir: Option<&Path>) -> Result<PathBuf, String> {
    let dir = match override_dir {
        Some(d) => d.to_path_buf(),
        None => {
            let proj = directories::ProjectDirs::from("org", "num-methods", "num-methods")
                .ok_or("Failed to determine project directories")?;
            proj.cache_dir().join("plots")
        }
    };
    std::fs::create_dir_all(&dir)
        .map_err(|e| format!("Failed to create plot directory {}: {e}", dir.display()))?;
    Ok(dir)
}

/// Write a plot as `<dir>/<stem>.html` and return the full path.
pub fn write_plot(plot: &Plot, dir: &Path, stem: &str) -> Result<PathBuf, String> {
    let path = dir.join(format!("{stem}.html"));
    plot.write_html(&path);
    Ok(path)
}
