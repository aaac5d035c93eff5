//! Pulling aligned channel columns and titles out of datasets.

use tracing::warn;

use crate::core::error::{Error, Result};

/// What a dataset has to offer for plotting.
pub trait Dataset {
    /// Values of `channel`, or `None` if the dataset has no such column.
    fn column(&self, channel: &str) -> Option<&[f64]>;

    /// Human-readable sample name.
    fn title(&self) -> Option<&str> {
        None
    }
}

impl<D: Dataset + ?Sized> Dataset for &D {
    fn column(&self, channel: &str) -> Option<&[f64]> {
        (**self).column(channel)
    }

    fn title(&self) -> Option<&str> {
        (**self).title()
    }
}

/// One dataset or several.
///
/// Collections convert with `.into()`; a lone dataset is wrapped explicitly
/// with [`Datasets::Single`]. Datasets of different types can be mixed by
/// collecting `&dyn Dataset` references.
pub enum Datasets<'a, D: Dataset> {
    Single(&'a D),
    Collection(&'a [D]),
    /// Borrowed datasets that do not live in one slice.
    Refs(Vec<&'a D>),
}

impl<'a, D: Dataset> From<Vec<&'a D>> for Datasets<'a, D> {
    fn from(d: Vec<&'a D>) -> Self {
        Self::Refs(d)
    }
}

impl<'a, D: Dataset> From<&'a [D]> for Datasets<'a, D> {
    fn from(d: &'a [D]) -> Self {
        Self::Collection(d)
    }
}

impl<'a, D: Dataset> From<&'a Vec<D>> for Datasets<'a, D> {
    fn from(d: &'a Vec<D>) -> Self {
        Self::Collection(d.as_slice())
    }
}

/// Normalize to a list so callers can iterate without caring.
#[must_use]
pub fn make_list<'a, D: Dataset>(datasets: Datasets<'a, D>) -> Vec<&'a D> {
    match datasets {
        Datasets::Single(d) => vec![d],
        Datasets::Collection(ds) => ds.iter().collect(),
        Datasets::Refs(ds) => ds,
    }
}

/// One channel or several.
#[derive(Debug, Clone, Copy)]
pub enum Channels<'a> {
    Single(&'a str),
    Many(&'a [&'a str]),
}

impl<'a> From<&'a str> for Channels<'a> {
    fn from(c: &'a str) -> Self {
        Self::Single(c)
    }
}

impl<'a> From<&'a [&'a str]> for Channels<'a> {
    fn from(c: &'a [&'a str]) -> Self {
        Self::Many(c)
    }
}

impl<'a, const N: usize> From<&'a [&'a str; N]> for Channels<'a> {
    fn from(c: &'a [&'a str; N]) -> Self {
        Self::Many(c.as_slice())
    }
}

/// A column that was asked for but not found, and skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingColumn {
    pub channel: String,
    /// Position of the dataset in the normalized list.
    pub dataset: usize,
}

/// Extracted values, shaped after the requested channels.
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted {
    /// One series per dataset that had the channel.
    Flat(Vec<Vec<f64>>),
    /// One group per channel, each shaped like [`Extracted::Flat`].
    Nested(Vec<Vec<Vec<f64>>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Extraction {
    pub data: Extracted,
    pub warnings: Vec<MissingColumn>,
}

impl Extraction {
    /// The flat series list, if a single channel was requested.
    #[must_use]
    pub fn into_flat(self) -> Option<Vec<Vec<f64>>> {
        match self.data {
            Extracted::Flat(d) => Some(d),
            Extracted::Nested(_) => None,
        }
    }

    #[must_use]
    pub fn into_nested(self) -> Option<Vec<Vec<Vec<f64>>>> {
        match self.data {
            Extracted::Nested(d) => Some(d),
            Extracted::Flat(_) => None,
        }
    }
}

fn collect_channel<D: Dataset>(
    datasets: &[&D],
    channel: &str,
    warnings: &mut Vec<MissingColumn>,
) -> Vec<Vec<f64>> {
    let mut out = Vec::with_capacity(datasets.len());
    for (index, ds) in datasets.iter().enumerate() {
        if let Some(values) = ds.column(channel) {
            out.push(values.to_vec());
        } else {
            warn!(channel, dataset = index, "no such column name found");
            warnings.push(MissingColumn {
                channel: channel.to_owned(),
                dataset: index,
            });
        }
    }
    out
}

/// Copy `channels` out of every dataset.
///
/// Datasets lacking a channel are skipped for that channel only, so the
/// series lists may be shorter than the dataset list and may differ in
/// length between channels.
pub fn extract_data<'a, 'c, D, S, C>(datasets: S, channels: C) -> Extraction
where
    D: Dataset + 'a,
    S: Into<Datasets<'a, D>>,
    C: Into<Channels<'c>>,
{
    let datasets = make_list(datasets.into());
    let mut warnings = Vec::new();
    let data = match channels.into() {
        Channels::Single(channel) => {
            Extracted::Flat(collect_channel(&datasets, channel, &mut warnings))
        }
        Channels::Many(channels) => Extracted::Nested(
            channels
                .iter()
                .map(|channel| collect_channel(&datasets, channel, &mut warnings))
                .collect(),
        ),
    };
    Extraction { data, warnings }
}

/// Titles of every dataset, or an error naming the first untitled one.
pub fn extract_title<'a, D, S>(datasets: S) -> Result<Vec<String>>
where
    D: Dataset + 'a,
    S: Into<Datasets<'a, D>>,
{
    make_list(datasets.into())
        .into_iter()
        .enumerate()
        .map(|(index, ds)| {
            ds.title().map(str::to_owned).ok_or(Error::MissingAttribute {
                attribute: "title",
                index,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::frame::Frame;

    fn frames() -> Vec<Frame> {
        vec![
            Frame::from_columns([("X", vec![1.0, 2.0]), ("Y", vec![3.0, 4.0])]).with_title("a"),
            Frame::from_columns([("Y", vec![5.0])]).with_title("b"),
        ]
    }

    #[test]
    fn missing_column_is_skipped_with_one_warning() {
        let ds = frames();
        let got = extract_data(&ds, "X");
        assert_eq!(got.data, Extracted::Flat(vec![vec![1.0, 2.0]]));
        assert_eq!(
            got.warnings,
            vec![MissingColumn {
                channel: "X".into(),
                dataset: 1
            }]
        );
    }

    #[test]
    fn single_dataset_is_wrapped() {
        let ds = frames();
        let got = extract_data(Datasets::Single(&ds[0]), "Y").into_flat().unwrap();
        assert_eq!(got, vec![vec![3.0, 4.0]]);
    }

    #[test]
    fn many_channels_nest_per_channel() {
        let ds = frames();
        let got = extract_data(&ds, &["Y", "X", "Z"]);
        assert_eq!(got.warnings.len(), 3);
        assert_eq!(
            got.into_nested().unwrap(),
            vec![
                vec![vec![3.0, 4.0], vec![5.0]],
                vec![vec![1.0, 2.0]],
                Vec::<Vec<f64>>::new(),
            ]
        );
    }

    #[test]
    fn empty_collection_yields_nothing() {
        let ds: Vec<Frame> = Vec::new();
        let got = extract_data(&ds, "X");
        assert!(got.warnings.is_empty());
        assert_eq!(got.into_flat(), Some(Vec::new()));
    }

    #[test]
    fn scattered_references_keep_their_order() {
        let ds = frames();
        let got = extract_data(vec![&ds[1], &ds[0]], "Y").into_flat().unwrap();
        assert_eq!(got, vec![vec![5.0], vec![3.0, 4.0]]);
        assert_eq!(extract_title(vec![&ds[1]]).unwrap(), ["b"]);
    }

    struct Bare(Vec<f64>);

    impl Dataset for Bare {
        fn column(&self, channel: &str) -> Option<&[f64]> {
            (channel == "X").then_some(self.0.as_slice())
        }
    }

    #[test]
    fn mixed_dataset_types_go_through_trait_objects() {
        let ds = frames();
        let bare = Bare(vec![9.0]);
        let mixed: Vec<&dyn Dataset> = vec![&ds[0], &bare, &ds[1]];

        let got = extract_data(&mixed, "X");
        assert_eq!(got.warnings.len(), 1);
        assert_eq!(got.warnings[0].dataset, 2);
        assert_eq!(got.into_flat().unwrap(), vec![vec![1.0, 2.0], vec![9.0]]);

        assert!(matches!(
            extract_title(&mixed),
            Err(Error::MissingAttribute { index: 1, .. })
        ));
    }

    #[test]
    fn titles_follow_dataset_order() {
        let ds = frames();
        assert_eq!(extract_title(&ds).unwrap(), ["a", "b"]);
        assert_eq!(extract_title(Datasets::Single(&ds[1])).unwrap(), ["b"]);
    }

    #[test]
    fn one_untitled_dataset_fails_the_whole_call() {
        let ds = vec![
            Frame::from_columns([("X", vec![1.0])]).with_title("a"),
            Frame::from_columns([("X", vec![2.0])]),
        ];
        assert!(matches!(
            extract_title(&ds),
            Err(Error::MissingAttribute {
                attribute: "title",
                index: 1
            })
        ));
    }
}
