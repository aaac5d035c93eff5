//! Plotting defaults for cytometry channels, plus a file-level shortcut.

pub mod cli;
pub mod core;

pub use crate::core::{
    AxesRef, AxisScale, Canvas, ChannelName, Channels, Dataset, Datasets, Error, Extracted,
    Extraction, FigureId, Frame, MissingColumn, ParseCsvError, PlotDefaults, PlotDefaultsBuilder,
    Result, Sheet, ValueTransform, alpha, bin_default, default_bandwidth, default_scaling,
    default_yscale, extract_data, extract_title, fig_ax, make_list, set_limits,
};

/// Load CSV exports and resolve the defaults for `channel` across all of them.
pub fn defaults_for_files<P: AsRef<std::path::Path>>(
    paths: &[P],
    channel: &str,
) -> Result<PlotDefaults> {
    let frames = paths
        .iter()
        .map(Frame::from_path)
        .collect::<std::result::Result<Vec<_>, _>>()?;
    PlotDefaults::builder(channel).build(&frames)
}
