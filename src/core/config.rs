//! Resolved plotting defaults for one channel + fluent builder.

use tracing::debug;

use crate::core::{
    bounds::set_limits,
    channel::{
        ChannelName, alpha, bin_default, default_bandwidth, default_scaling, default_yscale,
    },
    data::{Dataset, Datasets, MissingColumn, extract_data},
    error::{Error, Result},
    scale::{AxisScale, ValueTransform},
};

/// Everything a histogram or density plot of one channel needs.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotDefaults {
    pub channel: ChannelName,
    pub xscale: AxisScale,
    pub yscale: AxisScale,
    pub transform: ValueTransform,
    pub x_range: (f64, f64),
    pub bandwidth: f64,
    pub bins: f64,
    pub alpha: f64,
    /// Series that were found, one per dataset carrying the channel.
    pub series: Vec<Vec<f64>>,
    pub warnings: Vec<MissingColumn>,
}

impl PlotDefaults {
    #[inline]
    pub fn builder(channel: impl Into<String>) -> PlotDefaultsBuilder {
        PlotDefaultsBuilder::new(channel.into())
    }
}

#[derive(Debug)]
pub struct PlotDefaultsBuilder {
    channel: String,
    bins: Option<f64>,
    x_min: Option<f64>,
    x_max: Option<f64>,
    x_range: Option<Vec<f64>>,
    npoints: Option<usize>,
    axis: Option<String>,
}

impl PlotDefaultsBuilder {
    pub(crate) fn new(channel: String) -> Self {
        Self {
            channel,
            bins: None,
            x_min: None,
            x_max: None,
            x_range: None,
            npoints: None,
            axis: None,
        }
    }

    #[inline]
    pub fn bins(mut self, n: f64) -> Self {
        self.bins = Some(n);
        self
    }
    #[inline]
    pub fn x_min(mut self, v: f64) -> Self {
        self.x_min = Some(v);
        self
    }
    #[inline]
    pub fn x_max(mut self, v: f64) -> Self {
        self.x_max = Some(v);
        self
    }
    /// Explicit range; fewer than two entries is ignored at build time.
    #[inline]
    pub fn x_range(mut self, r: impl Into<Vec<f64>>) -> Self {
        self.x_range = Some(r.into());
        self
    }
    #[inline]
    pub fn npoints(mut self, n: usize) -> Self {
        self.npoints = Some(n);
        self
    }
    /// Axis name consulted for the time rule (defaults to the channel).
    #[inline]
    pub fn axis(mut self, a: impl Into<String>) -> Self {
        self.axis = Some(a.into());
        self
    }

    pub fn build<'a, D, S>(self, datasets: S) -> Result<PlotDefaults>
    where
        D: Dataset + 'a,
        S: Into<Datasets<'a, D>>,
    {
        let channel = ChannelName::new(self.channel)?;
        if self.npoints == Some(0) {
            return Err(Error::invalid("npoints must be positive"));
        }

        let extraction = extract_data(datasets, channel.as_str());
        let warnings = extraction.warnings.clone();
        let series = extraction.into_flat().unwrap_or_default();

        let axis = self.axis.as_deref().unwrap_or(channel.as_str());
        let x_range = set_limits(
            &series,
            self.x_min,
            self.x_max,
            self.x_range.as_deref(),
            Some(axis),
        )?;

        let npoints = self
            .npoints
            .unwrap_or_else(|| series.iter().map(Vec::len).max().unwrap_or(0))
            .max(1);

        let name = channel.as_str();
        let (xscale, transform) = default_scaling(name);
        let defaults = PlotDefaults {
            xscale,
            yscale: default_yscale(name),
            transform,
            x_range,
            bandwidth: default_bandwidth(name, npoints, x_range.0, x_range.1),
            bins: bin_default(name, x_range.0, x_range.1, self.bins),
            alpha: alpha(series.len()),
            channel,
            series,
            warnings,
        };
        debug!(
            channel = %defaults.channel,
            xscale = %defaults.xscale,
            bins = defaults.bins,
            bandwidth = defaults.bandwidth,
            "resolved plot defaults"
        );
        Ok(defaults)
    }
}
