//! CSV-backed itinerary and link tables.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::io::{Read, Write};

use serde::Deserialize;
use tracing::debug;

use crate::itinerary::ItinRow;

#[derive(thiserror::Error, Debug)]
pub enum TableError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Link {0} appears more than once in the link table")]
    DuplicateLink(String),
}

#[derive(Debug, Deserialize)]
struct LinkLengthRecord {
    #[serde(rename = "ABB")]
    abb: String,
    #[serde(rename = "MILES")]
    miles: f64,
}

/// Read itinerary rows from CSV with a header row.
pub fn read_itin_rows<R: Read>(reader: R) -> Result<Vec<ItinRow>, TableError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let rows = csv_reader
        .deserialize()
        .collect::<Result<Vec<ItinRow>, _>>()?;
    debug!(rows = rows.len(), "read itinerary rows");
    Ok(rows)
}

/// Read an `ABB,MILES` table into a link length lookup.
pub fn read_link_lengths<R: Read>(reader: R) -> Result<HashMap<String, f64>, TableError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut lengths = HashMap::new();
    for record in csv_reader.deserialize() {
        let LinkLengthRecord { abb, miles } = record?;
        match lengths.entry(abb) {
            Entry::Occupied(entry) => return Err(TableError::DuplicateLink(entry.key().clone())),
            Entry::Vacant(entry) => {
                entry.insert(miles);
            }
        }
    }
    debug!(links = lengths.len(), "read link lengths");
    Ok(lengths)
}

/// Write itinerary rows as CSV, optionally with a header row.
pub fn write_itin_rows<W: Write>(
    writer: W,
    rows: &[ItinRow],
    include_headers: bool,
) -> Result<(), TableError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(include_headers)
        .from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush().map_err(csv::Error::from)?;
    Ok(())
}
