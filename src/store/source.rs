//! Purpose: Decode the delimited source file into a `Dataset`.
//! Exports: `load_file`, `parse_reader`.
//! Role: Single decode seam; all tabular parsing goes through here.
//! Invariants: Row 1 is the header; data rows keep source order; cell values are verbatim.
//! Invariants: Ragged rows are tolerated; short rows pad with "", extra cells are dropped.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::store::dataset::{Dataset, Record};
use crate::store::error::{Error, ErrorKind};

pub fn load_file(path: &Path) -> Result<Dataset, Error> {
    let file = File::open(path).map_err(|err| {
        let kind = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorKind::NotFound,
            std::io::ErrorKind::PermissionDenied => ErrorKind::Permission,
            _ => ErrorKind::Io,
        };
        Error::new(kind)
            .with_message("failed to open data file")
            .with_path(path)
            .with_source(err)
    })?;
    parse_reader(file).map_err(|err| err.with_path(path))
}

pub fn parse_reader<R: Read>(reader: R) -> Result<Dataset, Error> {
    let mut csv_reader = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|err| csv_error("failed to read header row", err))?;
    if headers.is_empty() || headers.iter().all(str::is_empty) {
        return Err(Error::new(ErrorKind::Parse)
            .with_message("data file has no header row")
            .with_hint("The first row must name the columns."));
    }
    let fields: Vec<String> = headers.iter().map(str::to_string).collect();

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row.map_err(|err| csv_error("failed to parse data row", err))?;
        let mut values = BTreeMap::new();
        for (idx, field) in fields.iter().enumerate() {
            let value = row.get(idx).unwrap_or("");
            values.insert(field.clone(), value.to_string());
        }
        records.push(Record::new(values));
    }

    Ok(Dataset::new(fields, records))
}

fn csv_error(message: &str, err: csv::Error) -> Error {
    let (kind, row) = match err.kind() {
        csv::ErrorKind::Io(_) => (ErrorKind::Io, None),
        csv::ErrorKind::Utf8 { pos, .. } => (ErrorKind::Parse, pos.as_ref().map(|p| p.line())),
        csv::ErrorKind::UnequalLengths { pos, .. } => {
            (ErrorKind::Parse, pos.as_ref().map(|p| p.line()))
        }
        _ => (ErrorKind::Parse, None),
    };
    let mut out = Error::new(kind).with_message(message);
    if let Some(row) = row {
        out = out.with_row(row);
    }
    out.with_source(err)
}
