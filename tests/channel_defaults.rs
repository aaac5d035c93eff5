//! End-to-end checks of the public API against cytometry naming conventions.

use cytoplot::{
    AxisScale, Channels, Datasets, Error, Frame, PlotDefaults, Sheet, ValueTransform, bin_default,
    default_bandwidth, default_scaling, default_yscale, defaults_for_files, extract_data,
    extract_title, fig_ax, set_limits,
};

#[test]
fn time_bandwidth_is_range_over_points_for_any_case() {
    for name in ["time", "Time", "TIME", "tImE"] {
        for n in [1usize, 3, 250] {
            let want = (40.0 - 10.0) / n as f64;
            assert_eq!(default_bandwidth(name, n, 10.0, 40.0), want);
        }
    }
}

#[test]
fn length_names_share_bandwidth_and_bins() {
    for name in ["Event_length", "Cell_length", "event_length", "cell_length"] {
        assert_eq!(default_bandwidth(name, 7, 0.0, 1.0), 1.0);
        assert_eq!(bin_default(name, 3.0, 48.0, None), 45.0);
    }
}

#[test]
fn scaling_and_yscale_table() {
    assert_eq!(
        default_scaling("FSC-A"),
        (AxisScale::Log, ValueTransform::Arcsinh)
    );
    assert_eq!(
        default_scaling("Cell_length"),
        (AxisScale::Linear, ValueTransform::Identity)
    );
    assert_eq!(default_yscale("Time"), AxisScale::Linear);
    assert_eq!(default_yscale("FSC-A"), AxisScale::Log);
}

#[test]
fn limits_cover_all_series_and_honour_overrides() {
    let data = vec![vec![1.0, 2.0, 3.0], vec![0.0, 5.0]];
    assert_eq!(set_limits(&data, None, None, None, None).unwrap(), (0.0, 5.0));

    let one = [vec![1.0, 2.0, 3.0]];
    assert_eq!(
        set_limits(&one, None, None, Some(&[10.0, 20.0][..]), None).unwrap(),
        (10.0, 20.0)
    );
    assert_eq!(
        set_limits(&one, None, None, None, Some("time")).unwrap(),
        (0.0, 3.0)
    );
}

#[test]
fn extraction_skips_datasets_without_the_column() {
    let with = Frame::from_columns([("X", vec![1.0, 2.0])]);
    let without = Frame::from_columns([("Y", vec![3.0])]);
    let ds = vec![with, without];

    let got = extract_data(&ds, Channels::Single("X"));
    assert_eq!(got.warnings.len(), 1);
    assert_eq!(got.into_flat(), Some(vec![vec![1.0, 2.0]]));
}

#[test]
fn titles_are_all_or_nothing() {
    let ds = vec![
        Frame::from_columns([("X", vec![1.0])]).with_title("ds1"),
        Frame::from_columns([("X", vec![1.0])]),
    ];
    assert!(matches!(
        extract_title(Datasets::Collection(&ds)),
        Err(Error::MissingAttribute { index: 1, .. })
    ));
}

#[test]
fn fresh_axes_come_with_a_fresh_figure() {
    let mut sheet = Sheet::new();
    let (fig, ax) = fig_ax(&mut sheet, None);
    assert_eq!(fig_ax(&mut sheet, Some(ax)).0, fig);
    assert_eq!(sheet.figure_count(), 1);
}

#[test]
fn csv_exports_resolve_to_shared_defaults() {
    let dir = std::env::temp_dir().join(format!("cytoplot-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let a = dir.join("donor_a.csv");
    let b = dir.join("donor_b.csv");
    std::fs::write(&a, "Time,CD3\n0.5,12\n1.5,480\n").unwrap();
    std::fs::write(&b, "Time,CD19\n2.0,7\n8.0,90\n").unwrap();

    let d = defaults_for_files(&[&a, &b], "CD3").unwrap();
    assert_eq!(d.x_range, (12.0, 480.0));
    assert_eq!(d.warnings.len(), 1);
    assert_eq!(d.warnings[0].dataset, 1);
    assert_eq!(d.alpha, 1.0);

    let t = defaults_for_files(&[&a, &b], "Time").unwrap();
    assert_eq!(t.x_range, (0.0, 8.0));
    assert_eq!(t.series.len(), 2);

    let frames = vec![Frame::from_path(&a).unwrap(), Frame::from_path(&b).unwrap()];
    assert_eq!(
        extract_title(&frames).unwrap(),
        ["donor_a", "donor_b"]
    );
    assert!(matches!(
        PlotDefaults::builder("CD3").build(Datasets::Single(&frames[1])),
        Err(Error::EmptyData)
    ));

    std::fs::remove_dir_all(&dir).unwrap();
}
