//! Loading the delimited source file and converting rows into BSON documents.

use std::fs::File;
use std::io::{BufReader, Cursor, Read};
use std::path::Path;

use mongodb::bson::{Bson, Document};

use crate::error::Result;

/// Text encoding of the input file
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileEncoding {
    Utf8,
    Latin1,
}

/// An in-memory table: the header row plus raw string cells in row order.
#[derive(Debug)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Read a delimited file with a header row into a [`Table`].
///
/// Latin-1 input is decoded up front; non-UTF-8 bytes cannot stream through
/// the CSV reader directly. A missing file, undecodable content, or a ragged
/// row is an error — there is no partial load.
pub fn load_table(path: &Path, encoding: FileEncoding) -> Result<Table> {
    let reader: Box<dyn Read> = match encoding {
        FileEncoding::Utf8 => Box::new(BufReader::new(File::open(path)?)),
        FileEncoding::Latin1 => {
            let bytes = std::fs::read(path)?;
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            Box::new(Cursor::new(decoded.into_owned().into_bytes()))
        }
    };

    let mut csv_reader = csv::Reader::from_reader(reader);
    let columns: Vec<String> = csv_reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result?;
        rows.push(record.iter().map(|cell| cell.to_string()).collect());
    }

    Ok(Table { columns, rows })
}

impl Table {
    /// Number of data rows (the header row is not counted).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Convert rows into documents in row order, pairing each cell with its
    /// column name. Header names carry over verbatim, spaces included.
    pub fn into_documents(self) -> Vec<Document> {
        let columns = self.columns;
        self.rows
            .into_iter()
            .map(|row| {
                let mut doc = Document::new();
                for (column, cell) in columns.iter().zip(row) {
                    doc.insert(column.clone(), parse_scalar(&cell));
                }
                doc
            })
            .collect()
    }
}

/// Parse a raw cell into an appropriate scalar BSON type.
fn parse_scalar(value: &str) -> Bson {
    let trimmed = value.trim();

    // Empty cell -> Null
    if trimmed.is_empty() {
        return Bson::Null;
    }

    if trimmed.eq_ignore_ascii_case("true") {
        return Bson::Boolean(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Bson::Boolean(false);
    }

    if let Ok(n) = trimmed.parse::<i64>() {
        if n >= i32::MIN as i64 && n <= i32::MAX as i64 {
            return Bson::Int32(n as i32);
        }
        return Bson::Int64(n);
    }

    if let Ok(n) = trimmed.parse::<f64>() {
        return Bson::Double(n);
    }

    Bson::String(value.to_string())
}
