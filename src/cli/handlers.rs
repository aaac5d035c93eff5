use crate::core::{
    channel::{bin_default, default_bandwidth, default_scaling, default_yscale},
    config::PlotDefaults,
    data::{Datasets, extract_title},
    error::{Error, Result},
    frame::Frame,
};

use super::parse::{DefaultsArgs, LimitsArgs, TitlesArgs};

fn load(files: &[std::path::PathBuf]) -> Result<Vec<Frame>> {
    Ok(files
        .iter()
        .map(Frame::from_path)
        .collect::<std::result::Result<Vec<_>, _>>()?)
}

pub fn defaults(a: &DefaultsArgs) -> Result<()> {
    if a.npoints == 0 {
        return Err(Error::invalid("npoints must be positive"));
    }
    let (xscale, transform) = default_scaling(&a.channel);
    println!("channel    {}", a.channel);
    println!("xscale     {xscale}");
    println!("transform  {transform}");
    println!("yscale     {}", default_yscale(&a.channel));
    println!(
        "bandwidth  {}",
        default_bandwidth(&a.channel, a.npoints, a.xmin, a.xmax)
    );
    println!("bins       {}", bin_default(&a.channel, a.xmin, a.xmax, a.bins));
    Ok(())
}

pub fn limits(a: LimitsArgs) -> Result<()> {
    let frames = load(&a.files)?;

    let mut b = PlotDefaults::builder(a.channel);
    if let Some(r) = a.xrange {
        b = b.x_range(r);
    }
    if let Some(n) = a.bins {
        b = b.bins(n);
    }
    let d = b.build(&frames)?;

    for w in &d.warnings {
        eprintln!(
            "warning: {} has no column `{}`",
            a.files[w.dataset].display(),
            w.channel
        );
    }
    println!("{} {} {}", d.channel, d.x_range.0, d.x_range.1);
    println!("bins {}  bandwidth {}  alpha {}", d.bins, d.bandwidth, d.alpha);
    Ok(())
}

pub fn titles(a: &TitlesArgs) -> Result<()> {
    let frames = load(&a.files)?;
    for t in extract_title(Datasets::Collection(&frames))? {
        println!("{t}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(npoints: usize) -> DefaultsArgs {
        DefaultsArgs {
            channel: "Time".into(),
            npoints,
            xmin: 0.0,
            xmax: 10.0,
            bins: None,
        }
    }

    #[test]
    fn zero_points_is_invalid_input() {
        assert!(matches!(defaults(&args(0)), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn positive_points_print_defaults() {
        assert!(defaults(&args(5)).is_ok());
    }
}
