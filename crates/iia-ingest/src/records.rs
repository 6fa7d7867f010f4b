//! Headerless CSV readers for module and area lists.
//!
//! Module rows are `code,name,term,set[,prerequisite]`. Area rows are
//! `name,description,code,code,...` with any number of codes; spreadsheets
//! pad short rows with empty columns, which are dropped.
//!
//! Rows are returned unvalidated. Short rows are padded with empty fields so
//! the catalog reports them as missing a required field.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use iia_model::{AreaRecord, ModuleRecord};

use crate::error::{IngestError, Result};

fn reader<R: Read>(input: R) -> csv::Reader<R> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input)
}

fn field(record: &StringRecord, idx: usize) -> String {
    record
        .get(idx)
        .unwrap_or("")
        .trim_matches('\u{feff}')
        .to_string()
}

/// Read module rows from a headerless CSV source.
///
/// `file` names the source in error messages.
pub fn read_module_records<R: Read>(input: R, file: &str) -> Result<Vec<ModuleRecord>> {
    let mut reader = reader(input);
    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| IngestError::CsvRead {
            file: file.to_string(),
            source,
        })?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        rows.push(ModuleRecord {
            code: field(&record, 0),
            name: field(&record, 1),
            term: field(&record, 2),
            set: field(&record, 3),
            prerequisite: field(&record, 4),
        });
    }
    tracing::debug!(file, rows = rows.len(), "read module list");
    Ok(rows)
}

/// Read area rows from a headerless CSV source.
pub fn read_area_records<R: Read>(input: R, file: &str) -> Result<Vec<AreaRecord>> {
    let mut reader = reader(input);
    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| IngestError::CsvRead {
            file: file.to_string(),
            source,
        })?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let codes = record
            .iter()
            .skip(2)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
            .collect();
        rows.push(AreaRecord {
            name: field(&record, 0),
            description: field(&record, 1),
            codes,
        });
    }
    tracing::debug!(file, rows = rows.len(), "read area list");
    Ok(rows)
}
