//! Column-oriented dataset loaded from a headered CSV export.
//!
//! The first non-comment line names the channels; every following line is
//! one event. Floats are parsed straight from the byte buffer.

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
};

use thiserror::Error;

use crate::core::data::Dataset;

/// In-memory table of per-event channel values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    channels: Vec<String>,
    columns: Vec<Vec<f64>>,
    title: Option<String>,
}

#[derive(Debug, Error)]
#[error("line {line}: {kind}")]
pub struct ParseCsvError {
    pub line: usize,
    pub kind: ParseErrorKind,
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("no header row naming the channels")]
    MissingHeader,
    #[error("expected {expected} columns, got {got}")]
    BadColumnCount { expected: usize, got: usize },
    #[error("invalid {column} value '{text}'")]
    BadFloat { column: String, text: String },
}

// --- Helpers ---
#[inline]
fn trim(mut b: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = b {
        if !first.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    while let [rest @ .., last] = b {
        if !last.is_ascii_whitespace() {
            break;
        }
        b = rest;
    }
    b
}

/// Replace U+2212 MINUS SIGN with an ASCII hyphen in place.
#[inline]
pub fn normalize_unicode_minus(buf: &mut Vec<u8>) {
    let (mut r, mut w) = (0, 0);
    while r < buf.len() {
        if buf[r..].starts_with(&[0xE2, 0x88, 0x92]) {
            buf[w] = b'-';
            r += 3;
        } else {
            buf[w] = buf[r];
            r += 1;
        }
        w += 1;
    }
    buf.truncate(w);
}

/// Parse one cell; NaN and infinities are rejected like malformed text.
fn parse_f64(bytes: &[u8], line: usize, column: &str) -> Result<f64, ParseCsvError> {
    let bad = || ParseCsvError {
        line,
        kind: ParseErrorKind::BadFloat {
            column: column.to_owned(),
            text: String::from_utf8_lossy(bytes).into_owned(),
        },
    };
    let val = lexical_core::parse::<f64>(bytes).map_err(|_| bad())?;
    if val.is_finite() { Ok(val) } else { Err(bad()) }
}

const BUF_CAP: usize = 1 << 20; // 1 MiB

impl Frame {
    /// Build a frame from named columns of equal length.
    #[must_use]
    pub fn from_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<f64>)>,
        S: Into<String>,
    {
        let (channels, columns) = columns.into_iter().map(|(n, v)| (n.into(), v)).unzip();
        Self {
            channels,
            columns,
            title: None,
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn channels(&self) -> &[String] {
        &self.channels
    }

    /// Number of events (rows).
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn from_reader<R: Read>(src: R) -> Result<Self, ParseCsvError> {
        let mut rdr = BufReader::with_capacity(BUF_CAP, src);
        let mut buf = Vec::<u8>::with_capacity(256);
        let mut frame = Frame::default();
        let mut saw_header = false;
        let mut line_no = 0usize;

        loop {
            buf.clear();
            let n = rdr.read_until(b'\n', &mut buf).map_err(|e| ParseCsvError {
                line: line_no,
                kind: e.into(),
            })?;
            if n == 0 {
                break;
            }
            line_no += 1;

            if buf.ends_with(b"\n") {
                buf.pop();
            }
            if buf.ends_with(b"\r") {
                buf.pop();
            }

            normalize_unicode_minus(&mut buf);
            match trim(&buf).first() {
                None | Some(b'#') => continue,
                Some(_) => {}
            }

            if !saw_header {
                saw_header = true;
                frame.channels = buf
                    .split(|&b| b == b',')
                    .map(|f| String::from_utf8_lossy(trim(f)).into_owned())
                    .collect();
                frame.columns = vec![Vec::new(); frame.channels.len()];
                continue;
            }

            let got = buf.split(|&b| b == b',').count();
            if got != frame.channels.len() {
                return Err(ParseCsvError {
                    line: line_no,
                    kind: ParseErrorKind::BadColumnCount {
                        expected: frame.channels.len(),
                        got,
                    },
                });
            }
            for ((field, column), name) in buf
                .split(|&b| b == b',')
                .zip(frame.columns.iter_mut())
                .zip(&frame.channels)
            {
                column.push(parse_f64(trim(field), line_no, name)?);
            }
        }

        if !saw_header {
            return Err(ParseCsvError {
                line: line_no,
                kind: ParseErrorKind::MissingHeader,
            });
        }
        Ok(frame)
    }

    /// Load a CSV file (`-` reads stdin). The file stem becomes the title.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ParseCsvError> {
        let path = path.as_ref();
        if path == Path::new("-") {
            return Self::from_reader(std::io::stdin());
        }
        let file = File::open(path).map_err(|e| ParseCsvError {
            line: 0,
            kind: e.into(),
        })?;
        let frame = Self::from_reader(file)?;
        Ok(match path.file_stem() {
            Some(stem) => frame.with_title(stem.to_string_lossy()),
            None => frame,
        })
    }
}

impl Dataset for Frame {
    fn column(&self, channel: &str) -> Option<&[f64]> {
        self.channels
            .iter()
            .position(|c| c == channel)
            .map(|i| self.columns[i].as_slice())
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}
