//! Channel conventions, range resolution and column extraction.

pub mod bounds;
pub mod channel;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod figure;
pub mod frame;
pub mod scale;

// re-export frequently-used items for convenience
pub use bounds::set_limits;
pub use channel::{
    ChannelName, LENGTH_NAMES, TIME_NAMES, alpha, bin_default, default_bandwidth,
    default_scaling, default_yscale,
};
pub use config::{PlotDefaults, PlotDefaultsBuilder};
pub use data::{
    Channels, Dataset, Datasets, Extracted, Extraction, MissingColumn, extract_data,
    extract_title, make_list,
};
pub use error::{Error, Result};
pub use figure::{AxesRef, Canvas, FigureId, Sheet, fig_ax};
pub use frame::{Frame, ParseCsvError, ParseErrorKind};
pub use scale::{AxisScale, ValueTransform};
