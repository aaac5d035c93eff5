//! Shared axis range across several datasets.

use crate::core::{
    channel::TIME_NAMES,
    error::{Error, Result},
};

/// An explicit `[lo, hi]` override, if the slice is long enough to be one.
#[inline]
fn explicit_range(xrange: Option<&[f64]>) -> Option<(f64, f64)> {
    match xrange? {
        [lo, hi, ..] => Some((*lo, *hi)),
        _ => None,
    }
}

/// Global min of per-series minima and global max of per-series maxima.
///
/// NaN samples are skipped; infinities count like any other value. Both
/// sides are `None` only when there is no non-NaN sample at all.
fn extrema<S: AsRef<[f64]>>(data: &[S]) -> (Option<f64>, Option<f64>) {
    let mut bounds: Option<(f64, f64)> = None;

    for &v in data.iter().flat_map(AsRef::as_ref) {
        if v.is_nan() {
            continue;
        }
        bounds = Some(match bounds {
            None => (v, v),
            Some((low, high)) => (low.min(v), high.max(v)),
        });
    }

    (bounds.map(|b| b.0), bounds.map(|b| b.1))
}

/// Determine the bounding range of multiple datasets.
///
/// 1. A well-formed `xrange` (two or more entries) supplies both bounds;
///    anything shorter is ignored.
/// 2. Bounds still unset come from the data.
/// 3. A time `axis` pins the lower bound to zero.
///
/// Fails with [`Error::EmptyData`] only if a bound had to come from the
/// data and there was none.
pub fn set_limits<S: AsRef<[f64]>>(
    data: &[S],
    mut xmin: Option<f64>,
    mut xmax: Option<f64>,
    xrange: Option<&[f64]>,
    axis: Option<&str>,
) -> Result<(f64, f64)> {
    if let Some((lo, hi)) = explicit_range(xrange) {
        xmin = Some(lo);
        xmax = Some(hi);
    }

    if xmin.is_none() || xmax.is_none() {
        let (low, high) = extrema(data);
        xmin = xmin.or(low);
        xmax = xmax.or(high);
    }

    if axis.is_some_and(|a| TIME_NAMES.contains(&a.to_lowercase())) {
        xmin = Some(0.0);
    }

    match (xmin, xmax) {
        (Some(lo), Some(hi)) => Ok((lo, hi)),
        _ => Err(Error::EmptyData),
    }
}
