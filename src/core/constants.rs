//! Channel-name conventions and fallback values.

/// Mass-cytometry length channels as they appear in acquisition files.
pub const CYTOF_LENGTH_NAMES: [&str; 2] = ["Event_length", "Cell_length"];
/// Time channels, already lower-case.
pub const CYTOF_TIME_NAMES: [&str; 1] = ["time"];

/// Bandwidth used for any channel without a special rule.
pub const DEFAULT_BANDWIDTH: f64 = 0.5;
/// Length channels count integer pushes, so one unit per kernel.
pub const LENGTH_BANDWIDTH: f64 = 1.0;

/// Histogram bins when the caller gives none.
pub const DEFAULT_BINS: f64 = 100.0;

/// Opacity of a lone series.
pub const SOLO_ALPHA: f64 = 1.0;
/// Opacity of each series once several overlap.
pub const OVERLAY_ALPHA: f64 = 0.1;
