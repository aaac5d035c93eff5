//! Per-channel plotting defaults.
//!
//! Cytometry files name their channels by convention: event/cell length
//! counts integer pushes and reads best on a linear axis, time is a
//! monotone counter, and everything else is a fluorescence or mass
//! intensity shown on a log axis after an arcsinh squeeze.

use std::{collections::HashSet, fmt, sync::LazyLock};

use crate::core::{
    constants::{
        CYTOF_LENGTH_NAMES, CYTOF_TIME_NAMES, DEFAULT_BANDWIDTH, DEFAULT_BINS, LENGTH_BANDWIDTH,
        OVERLAY_ALPHA, SOLO_ALPHA,
    },
    error::{Error, Result},
    scale::{AxisScale, ValueTransform},
};

/// Length names as written plus a lower-cased copy of each.
pub static LENGTH_NAMES: LazyLock<HashSet<String>> = LazyLock::new(|| {
    CYTOF_LENGTH_NAMES
        .iter()
        .flat_map(|n| [(*n).to_owned(), n.to_lowercase()])
        .collect()
});

pub static TIME_NAMES: LazyLock<HashSet<String>> =
    LazyLock::new(|| CYTOF_TIME_NAMES.iter().map(|n| (*n).to_owned()).collect());

#[inline]
fn is_time(channel: &str) -> bool {
    TIME_NAMES.contains(&channel.to_lowercase())
}

#[inline]
fn is_length(channel: &str) -> bool {
    LENGTH_NAMES.contains(&channel.to_lowercase())
}

/// A validated, non-empty channel identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChannelName(String);

impl ChannelName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(Error::invalid("channel name is empty"));
        }
        Ok(Self(name))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_time(&self) -> bool {
        is_time(&self.0)
    }

    #[must_use]
    pub fn is_length(&self) -> bool {
        is_length(&self.0)
    }
}

impl fmt::Display for ChannelName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ChannelName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Kernel bandwidth for a density estimate over `npoints` samples.
///
/// Time channels get one sample's worth of span; length channels one unit.
/// The rules run in sequence, so a name in both tables ends up with the
/// length bandwidth.
#[must_use]
pub fn default_bandwidth(channel: &str, npoints: usize, xmin: f64, xmax: f64) -> f64 {
    let mut bandwidth = DEFAULT_BANDWIDTH;
    if is_time(channel) {
        bandwidth = (xmax - xmin) / npoints as f64;
    }
    if is_length(channel) {
        bandwidth = LENGTH_BANDWIDTH;
    }
    bandwidth
}

/// Preferred x-axis scale and the transform to apply before binning.
#[must_use]
pub fn default_scaling(channel: &str) -> (AxisScale, ValueTransform) {
    if is_length(channel) {
        (AxisScale::Linear, ValueTransform::Identity)
    } else {
        (AxisScale::Log, ValueTransform::Arcsinh)
    }
}

#[must_use]
pub fn default_yscale(channel: &str) -> AxisScale {
    if channel.eq_ignore_ascii_case("time") {
        AxisScale::Linear
    } else {
        AxisScale::Log
    }
}

/// Histogram bin count.
///
/// Length channels get one bin per integer step. Unlike the other lookups
/// this one matches the name exactly, so `EVENT_LENGTH` falls back to the
/// default count.
#[must_use]
pub fn bin_default(channel: &str, xmin: f64, xmax: f64, bins: Option<f64>) -> f64 {
    if LENGTH_NAMES.contains(channel) {
        return xmax - xmin;
    }
    bins.unwrap_or(DEFAULT_BINS)
}

/// Series opacity: opaque when drawn alone, faint when overlaid.
#[must_use]
pub fn alpha(items: usize) -> f64 {
    if items == 1 { SOLO_ALPHA } else { OVERLAY_ALPHA }
}
